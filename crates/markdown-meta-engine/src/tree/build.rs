use log::trace;
use xi_rope::Rope;

use crate::parsing::{
    ParsedDoc,
    blocks::{
        BlockKind, BlockNode,
        kinds::{BlockQuote, CodeFence},
    },
    inline::{InlineNode, parse_inline},
    rope::{slice::slice_to_string, span::Span},
};

use super::{Document, NodeId, NodeKind};

/// Builds the document tree for parsed blocks.
///
/// Consecutive quoted blocks share a `BlockQuote` node unless an unquoted
/// line separates them.
pub fn build_document(rope: &Rope, parsed: &ParsedDoc) -> Document {
    let mut doc = Document::new();
    let mut quotes: Vec<NodeId> = vec![];
    let mut prev_end = 0;

    for block in &parsed.blocks {
        let depth = usize::from(block.quote_depth());
        let gap = Span::new(prev_end, block.span.start);
        let keep = depth.min(min_gap_depth(rope, gap, depth));
        quotes.truncate(keep);
        while quotes.len() < depth {
            let parent = quotes.last().copied().unwrap_or(doc.root());
            let quote = doc.new_node(NodeKind::BlockQuote, None);
            doc.append_child(parent, quote);
            quotes.push(quote);
        }

        let parent = quotes.last().copied().unwrap_or(doc.root());
        let node = block_node(&mut doc, rope, block);
        doc.append_child(parent, node);
        prev_end = block.span.end;
    }

    doc
}

/// Smallest quote depth among the lines in `gap`, or `default` if there are none.
fn min_gap_depth(rope: &Rope, gap: Span, default: usize) -> usize {
    if gap.is_empty() {
        return default;
    }
    slice_to_string(rope, gap)
        .lines()
        .map(|line| {
            let (depth, _) = BlockQuote::strip_prefixes(line);
            usize::from(depth)
        })
        .min()
        .unwrap_or(default)
}

fn block_node(doc: &mut Document, rope: &Rope, block: &BlockNode) -> NodeId {
    trace!("tree: {:?} at {}..{}", block.kind, block.span.start, block.span.end);
    let depth = usize::from(block.quote_depth());
    match &block.kind {
        BlockKind::Paragraph => {
            let text = paragraph_text(&slice_to_string(rope, block.span), depth);
            let node = doc.new_node(NodeKind::Paragraph, Some(block.span));
            append_inlines(doc, node, &text);
            node
        }
        BlockKind::Heading { level } => {
            let text = slice_to_string(rope, block.content_span);
            let node = doc.new_node(NodeKind::Heading { level: *level }, Some(block.span));
            append_inlines(doc, node, &text);
            node
        }
        BlockKind::ThematicBreak => doc.new_node(NodeKind::ThematicBreak, Some(block.span)),
        BlockKind::FencedCode { closed, .. } => {
            let source = slice_to_string(rope, block.span);
            let (info, literal) = fence_parts(&source, depth, *closed);
            doc.new_node(NodeKind::CodeBlock { info, literal }, Some(block.span))
        }
        BlockKind::FrontMatter { .. } => {
            let raw = slice_to_string(rope, block.content_span);
            doc.new_node(NodeKind::FrontMatter { raw }, Some(block.span))
        }
    }
}

fn append_inlines(doc: &mut Document, parent: NodeId, text: &str) {
    for inline in parse_inline(0, text) {
        let kind = match inline {
            InlineNode::Text(sp) => NodeKind::Text(text[sp.range()].to_string()),
            InlineNode::CodeSpan { inner, .. } => NodeKind::Code(text[inner.range()].to_string()),
        };
        let child = doc.new_node(kind, None);
        doc.append_child(parent, child);
    }
}

/// Removes up to `depth` blockquote markers from the start of `line`.
fn strip_quote(line: &str, depth: usize) -> &str {
    let mut rest = line;
    for _ in 0..depth {
        let trimmed = rest.trim_start_matches(' ');
        let Some(after) = trimmed.strip_prefix('>') else {
            break;
        };
        rest = after.strip_prefix(' ').unwrap_or(after);
    }
    rest
}

fn paragraph_text(source: &str, depth: usize) -> String {
    source
        .lines()
        .map(|line| strip_quote(line, depth).trim_start())
        .collect::<Vec<_>>()
        .join("\n")
        .trim_end()
        .to_string()
}

fn fence_parts(source: &str, depth: usize, closed: bool) -> (String, String) {
    let lines: Vec<&str> = source.lines().map(|l| strip_quote(l, depth)).collect();
    let info = lines
        .first()
        .map(|l| CodeFence::info(l.trim_start()).to_string())
        .unwrap_or_default();
    let body_end = if closed {
        lines.len().saturating_sub(1)
    } else {
        lines.len()
    };
    let mut literal = String::new();
    for line in lines.get(1..body_end).unwrap_or_default() {
        literal.push_str(line);
        literal.push('\n');
    }
    (info, literal)
}
