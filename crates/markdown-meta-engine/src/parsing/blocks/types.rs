use crate::parsing::rope::span::Span;

use super::kinds::FenceKind;

/// A frame in the container stack representing a nesting level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerFrame {
    /// A blockquote container with its nesting depth.
    BlockQuote {
        /// How many `>` prefixes (1 = single quote, 2 = nested, etc.)
        depth: u8,
    },
}

impl ContainerFrame {
    pub fn quote_depth(&self) -> u8 {
        match self {
            ContainerFrame::BlockQuote { depth } => *depth,
        }
    }
}

/// The kind of a leaf block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// Default when no other block opener matches.
    Paragraph,
    /// ATX heading; `content_span` covers the heading text only.
    Heading { level: u8 },
    ThematicBreak,
    /// A fenced code block (``` or ~~~).
    FencedCode {
        /// Whether backticks or tildes were used.
        kind: FenceKind,
        /// Whether a closing fence was found before end of input.
        closed: bool,
    },
    /// YAML front matter. `content_span` covers the lines between the delimiters.
    FrontMatter {
        /// Whether a closing delimiter was found before end of input.
        terminated: bool,
    },
}

/// A parsed block node with its containers, kind, and spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockNode {
    /// The container stack this block is nested within.
    pub containers: Vec<ContainerFrame>,
    pub kind: BlockKind,
    /// Full byte span of the block including delimiters.
    pub span: Span,
    /// Content span (excludes prefixes like `>` and delimiter lines).
    pub content_span: Span,
}

impl BlockNode {
    pub fn quote_depth(&self) -> u8 {
        self.containers
            .iter()
            .map(ContainerFrame::quote_depth)
            .max()
            .unwrap_or(0)
    }

    pub fn is_front_matter(&self) -> bool {
        matches!(self.kind, BlockKind::FrontMatter { .. })
    }
}
