use log::{debug, trace};

use crate::parsing::rope::span::Span;

use super::{
    classify::LineClass,
    containers::ContainerPath,
    kinds::{CodeFence, FenceKind, FrontMatter, FrontMatterBlock},
    open::{BlockOpen, try_open_leaf},
    types::{BlockKind, BlockNode},
};

#[derive(Debug, Clone)]
enum LeafState {
    None,
    Paragraph {
        start: Span,
        content_start: Span,
        last_line_end: usize,
    },
    Fence {
        kind: FenceKind,
        start: Span,
        last_line_end: usize,
    },
    /// Front matter is a raw zone like a fence: every line goes to the block
    /// until a closing delimiter.
    FrontMatter(FrontMatterBlock),
}

/// Block construction state machine, fed one classified line at a time.
///
/// A closed front matter block is emitted as a `BlockKind::FrontMatter` node
/// and also kept aside for the driver to collect with
/// [`take_front_matter`](Self::take_front_matter), so the metadata can be
/// captured as soon as the block closes.
pub struct BlockBuilder {
    containers: ContainerPath,
    leaf: LeafState,
    closed_front_matter: Option<FrontMatterBlock>,
    out: Vec<BlockNode>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            containers: ContainerPath::default(),
            leaf: LeafState::None,
            closed_front_matter: None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        if self.in_front_matter() {
            self.consume_front_matter_line(c);
            return;
        }

        if c.quote_depth == 0 && FrontMatter::opens(c.number, &c.raw_text) {
            debug!("front matter opened at line {}", c.number);
            self.leaf = LeafState::FrontMatter(FrontMatterBlock::open(c.line));
            return;
        }

        self.containers.set_blockquote_depth(c.quote_depth);

        if self.in_fence() {
            self.consume_fence_line(c);
            return;
        }

        if c.is_blank {
            self.flush_paragraph();
            return;
        }

        if let Some(open) = try_open_leaf(&c.remainder_text) {
            self.flush_paragraph();
            self.open_leaf(open, c);
            return;
        }

        self.extend_paragraph(c.line, c.remainder_span);
    }

    /// End-of-input flush: closes any open paragraph, fence or front matter.
    ///
    /// An unterminated front matter block is closed out as if a delimiter
    /// followed its last line.
    pub fn flush(&mut self) {
        self.flush_paragraph();
        self.flush_fence();
        self.flush_front_matter();
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        self.flush();
        self.out
    }

    /// Takes the front matter block closed since the last call, if any.
    pub fn take_front_matter(&mut self) -> Option<FrontMatterBlock> {
        self.closed_front_matter.take()
    }

    fn in_fence(&self) -> bool {
        matches!(self.leaf, LeafState::Fence { .. })
    }

    fn in_front_matter(&self) -> bool {
        matches!(self.leaf, LeafState::FrontMatter(_))
    }

    fn open_leaf(&mut self, open: BlockOpen, c: &LineClass) {
        match open {
            BlockOpen::FencedCode { kind } => {
                self.leaf = LeafState::Fence {
                    kind,
                    start: c.line,
                    last_line_end: c.line.end,
                }
            }
            BlockOpen::Heading { level, content } => {
                let base = c.remainder_span.start;
                self.emit(
                    BlockKind::Heading { level },
                    c.line,
                    Span::new(base + content.start, base + content.end),
                );
            }
            BlockOpen::ThematicBreak => {
                self.emit(BlockKind::ThematicBreak, c.line, c.remainder_span);
            }
        }
    }

    fn emit(&mut self, kind: BlockKind, span: Span, content_span: Span) {
        self.out.push(BlockNode {
            containers: self.containers.frames(),
            kind,
            span,
            content_span,
        });
    }

    fn consume_front_matter_line(&mut self, c: &LineClass) {
        let LeafState::FrontMatter(block) = &mut self.leaf else {
            return;
        };
        if FrontMatter::closes(&c.raw_text) {
            block.close(c.line);
            self.close_front_matter();
        } else {
            trace!("front matter line {}", c.number);
            block.append(c.line);
        }
    }

    fn close_front_matter(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        let LeafState::FrontMatter(block) = prev else {
            self.leaf = prev;
            return;
        };
        debug!(
            "front matter closed: {} content line(s), terminated: {}",
            block.segments().len(),
            block.is_terminated()
        );
        self.out.push(BlockNode {
            containers: vec![],
            kind: BlockKind::FrontMatter {
                terminated: block.is_terminated(),
            },
            span: block.span(),
            content_span: block.content_span(),
        });
        self.closed_front_matter = Some(block);
    }

    fn consume_fence_line(&mut self, c: &LineClass) {
        let LeafState::Fence { kind, start, .. } = self.leaf else {
            return;
        };

        // Close if this line "looks like fence" with same sig.
        if CodeFence::closes(kind, c.fence_sig) {
            self.emit(
                BlockKind::FencedCode { kind, closed: true },
                start.cover(c.line),
                start.cover(c.line),
            );
            self.leaf = LeafState::None;
        } else {
            self.leaf = LeafState::Fence {
                kind,
                start,
                last_line_end: c.line.end,
            };
        }
    }

    fn extend_paragraph(&mut self, line: Span, content_span: Span) {
        match self.leaf {
            LeafState::Paragraph {
                start,
                content_start,
                ..
            } => {
                self.leaf = LeafState::Paragraph {
                    start,
                    content_start,
                    last_line_end: line.end,
                };
            }
            _ => {
                self.leaf = LeafState::Paragraph {
                    start: line,
                    content_start: content_span,
                    last_line_end: line.end,
                };
            }
        }
    }

    fn flush_paragraph(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Paragraph {
            start,
            content_start,
            last_line_end,
        } = prev
        {
            self.emit(
                BlockKind::Paragraph,
                Span::new(start.start, last_line_end),
                Span::new(content_start.start, last_line_end),
            );
        } else {
            self.leaf = prev;
        }
    }

    fn flush_fence(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Fence {
            kind,
            start,
            last_line_end,
        } = prev
        {
            // Unterminated fence: emit as fence block anyway
            let span = Span::new(start.start, last_line_end);
            self.emit(BlockKind::FencedCode { kind, closed: false }, span, span);
        } else {
            self.leaf = prev;
        }
    }

    fn flush_front_matter(&mut self) {
        if self.in_front_matter() {
            self.close_front_matter();
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
