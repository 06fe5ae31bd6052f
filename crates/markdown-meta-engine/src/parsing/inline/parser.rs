use crate::parsing::rope::span::Span;

use super::{cursor::Cursor, kinds::CodeSpan, types::InlineNode};

/// Parses inline content into a sequence of [`InlineNode`]s.
///
/// `base` is the rope offset where `s` begins, so all spans are absolute.
/// The returned nodes cover the entire input.
pub fn parse_inline(base: usize, s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s, base);
    let mut out = vec![];
    let mut text_start = cur.pos();

    while !cur.eof() {
        if let Some(node) = try_parse_code_span(&mut cur) {
            flush_text(&mut out, text_start, node.span().start);
            text_start = node.span().end;
            out.push(node);
            continue;
        }
        // A backtick run that doesn't open a span is skipped whole, so a
        // shorter run inside it can't open one either.
        if cur.eat_run(CodeSpan::TICK) == 0 {
            cur.bump();
        }
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}

fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
    if end > start {
        out.push(InlineNode::Text(Span { start, end }));
    }
}

/// Attempts to parse a code span at the cursor. Restores the cursor on failure.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    let width = cur.eat_run(CodeSpan::TICK);
    let inner_start = cur.pos();

    while !cur.eof() {
        let run_start = cur.pos();
        let run = cur.eat_run(CodeSpan::TICK);
        if run == width {
            return Some(InlineNode::CodeSpan {
                full: Span::new(start, cur.pos()),
                inner: Span::new(inner_start, run_start),
            });
        }
        if run == 0 {
            cur.bump();
        }
    }

    *cur = saved;
    None
}
