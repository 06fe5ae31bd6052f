pub mod blocks;
pub mod inline;
pub mod rope;
pub mod snapshot;

use xi_rope::Rope;

use crate::meta::MetaSession;
use blocks::{BlockBuilder, BlockKind, BlockNode, MarkdownLineClassifier};
use rope::{lines_with_spans, slice::slice_to_string};

#[derive(Debug)]
pub struct ParsedDoc {
    pub blocks: Vec<BlockNode>,
}

impl ParsedDoc {
    /// The front matter block, if it is still part of the document (it is
    /// only kept when its metadata failed to parse).
    pub fn front_matter(&self) -> Option<&BlockNode> {
        self.blocks.iter().find(|b| b.is_front_matter())
    }
}

/// Parses `rope` into blocks, capturing front matter into `session`.
///
/// Metadata is captured the moment the front matter block closes. When it
/// parses, the block is excised from the returned blocks; when it doesn't,
/// the block stays so its raw text remains visible.
pub fn parse_document(rope: &Rope, session: &mut MetaSession) -> ParsedDoc {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();
    let mut excised = None;

    for lr in lines_with_spans(rope) {
        let lc = classifier.classify(&lr);
        builder.push(&lc);
        if let Some(fm) = builder.take_front_matter() {
            excised = capture(rope, session, &fm);
        }
    }

    builder.flush();
    if let Some(fm) = builder.take_front_matter() {
        excised = capture(rope, session, &fm);
    }

    let mut blocks = builder.finish();
    if let Some(span) = excised {
        blocks.retain(|b| !(b.is_front_matter() && b.span == span));
    }
    ParsedDoc { blocks }
}

fn capture(
    rope: &Rope,
    session: &mut MetaSession,
    fm: &blocks::FrontMatterBlock,
) -> Option<rope::Span> {
    let anchor = fm.span();
    session
        .capture(anchor, &fm.raw_text(rope))
        .then_some(anchor)
}

/// Inline parse for a block's content (paragraphs and headings only).
pub fn parse_inline_for_block(rope: &Rope, b: &BlockNode) -> Vec<inline::InlineNode> {
    if !matches!(b.kind, BlockKind::Paragraph | BlockKind::Heading { .. }) {
        return vec![];
    }
    let s = slice_to_string(rope, b.content_span);
    inline::parse_inline(b.content_span.start, &s)
}
