//! YAML front matter: the delimited metadata block at the top of a document.
//!
//! ```markdown
//! ---
//! Title: markdown-meta
//! Tags:
//!     - markdown
//! ---
//!
//! # Body starts here
//! ```
//!
//! `FrontMatter` owns the delimiter knowledge (the boundary scanner) and
//! `FrontMatterBlock` accumulates the raw lines of one open block.

use xi_rope::Rope;

use crate::parsing::rope::{slice::concat_spans, span::Span};

/// Front matter block type with owned delimiter constants.
pub struct FrontMatter;

impl FrontMatter {
    /// The only character a delimiter line may contain.
    pub const DELIMITER: char = '-';

    /// Lines indented this far or further are indented lines and never open a block.
    pub const INDENTED_LINE: usize = 4;

    /// True if `line`, trimmed of ASCII whitespace, is one or more `-`.
    pub fn is_delimiter(line: &str) -> bool {
        let t = line.trim_matches(|c: char| c.is_ascii_whitespace());
        !t.is_empty() && t.chars().all(|c| c == Self::DELIMITER)
    }

    /// Whether `line` opens a front matter block.
    ///
    /// Only the very first line of a document can open one; a `---` anywhere
    /// else is left to the rest of the grammar (thematic breaks).
    pub fn opens(line_number: usize, line: &str) -> bool {
        line_number == 0 && indent_width(line) < Self::INDENTED_LINE && Self::is_delimiter(line)
    }

    /// Whether `line` closes an open block. Indentation is irrelevant here.
    pub fn closes(line: &str) -> bool {
        Self::is_delimiter(line)
    }
}

fn indent_width(line: &str) -> usize {
    let mut width = 0;
    for c in line.chars() {
        match c {
            ' ' => width += 1,
            '\t' => width += 4 - (width % 4),
            _ => break,
        }
    }
    width
}

/// An in-progress (or just closed) front matter block.
///
/// Collects the raw line segments between the delimiters. Segments are
/// whole physical lines including their line endings, so concatenating them
/// reproduces the block body byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatterBlock {
    open: Span,
    segments: Vec<Span>,
    close: Option<Span>,
}

impl FrontMatterBlock {
    /// Starts a block at the opening delimiter line. The delimiter contributes no content.
    pub fn open(line: Span) -> Self {
        Self {
            open: line,
            segments: vec![],
            close: None,
        }
    }

    /// Appends one raw content line.
    pub fn append(&mut self, line: Span) {
        self.segments.push(line);
    }

    /// Records the closing delimiter line.
    pub fn close(&mut self, line: Span) {
        self.close = Some(line);
    }

    /// False when the block ran to end of input without a closing delimiter.
    pub fn is_terminated(&self) -> bool {
        self.close.is_some()
    }

    pub fn segments(&self) -> &[Span] {
        &self.segments
    }

    /// Span of the whole block: opening delimiter through closing delimiter
    /// (or the last content line if unterminated).
    pub fn span(&self) -> Span {
        let end = self
            .close
            .or_else(|| self.segments.last().copied())
            .unwrap_or(self.open);
        self.open.cover(end)
    }

    /// Span of the content between the delimiters. Empty for an empty block.
    pub fn content_span(&self) -> Span {
        match (self.segments.first(), self.segments.last()) {
            (Some(first), Some(last)) => first.cover(*last),
            _ => Span::empty_at(self.open.end),
        }
    }

    /// The raw block text handed to the YAML deserializer.
    pub fn raw_text(&self, rope: &Rope) -> String {
        concat_spans(rope, &self.segments)
    }
}
