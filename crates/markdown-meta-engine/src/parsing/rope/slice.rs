use xi_rope::Rope;

use super::span::Span;

/// Extracts the text for a span from the rope as an owned String.
///
/// This allocates; prefer working with spans where possible.
pub fn slice_to_string(rope: &Rope, sp: Span) -> String {
    rope.slice_to_cow(sp.range()).into_owned()
}

/// Concatenates the text of several spans, in order, without separators.
pub fn concat_spans(rope: &Rope, spans: &[Span]) -> String {
    let mut out = String::with_capacity(spans.iter().map(|s| s.len()).sum());
    for sp in spans {
        out.push_str(&rope.slice_to_cow(sp.range()));
    }
    out
}

/// Extracts text for a span, truncating to `max` bytes with "..." suffix if needed.
///
/// Used for human-readable snapshot output. Truncation backs off to the
/// nearest char boundary.
pub fn preview(rope: &Rope, sp: Span, max: usize) -> String {
    let mut s = slice_to_string(rope, sp);
    if s.len() > max {
        let mut cut = max;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        s.truncate(cut);
        s.push_str("...");
    }
    s
}
