use xi_rope::Rope;

use super::span::Span;

/// A single physical line of the rope with its byte span.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// Zero-based line number within the document.
    pub number: usize,
    /// Byte span of this line in the rope (includes the line ending if present).
    pub span: Span,
    /// The line text including its line ending.
    pub text: String,
}

/// Returns an iterator over lines with their numbers and byte spans.
///
/// Uses `lines_raw` so line endings are kept; front matter capture relies on
/// concatenated line spans reproducing the original bytes.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).enumerate().map(move |(number, line)| {
        let start = offset;
        offset += line.len();
        LineRef {
            number,
            span: Span { start, end: offset },
            text: line.into_owned(),
        }
    })
}
