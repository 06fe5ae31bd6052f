use super::kinds::{AtxHeading, CodeFence, FenceKind, ThematicBreak};

/// A leaf block opener detected on a single line (front matter excluded;
/// it depends on the line number and is checked by the builder first).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockOpen {
    FencedCode { kind: FenceKind },
    Heading { level: u8, content: std::ops::Range<usize> },
    ThematicBreak,
}

pub fn try_open_leaf(remainder: &str) -> Option<BlockOpen> {
    // Precedence: fence, then thematic break, then heading.
    if let Some(sig) = CodeFence::sig(remainder) {
        return Some(BlockOpen::FencedCode {
            kind: CodeFence::kind(sig),
        });
    }
    if ThematicBreak::matches(remainder) {
        return Some(BlockOpen::ThematicBreak);
    }
    if let Some((level, content)) = AtxHeading::parse(remainder) {
        return Some(BlockOpen::Heading { level, content });
    }
    None
}
