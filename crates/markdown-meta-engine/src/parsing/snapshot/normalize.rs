use serde::Serialize;
use xi_rope::Rope;

use crate::parsing::{
    blocks::{BlockKind, BlockNode, ContainerFrame},
    inline::InlineNode,
    parse_inline_for_block,
    rope::slice::preview,
};

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Snap {
    pub blocks: Vec<BlockSnap>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct BlockSnap {
    pub kind: String,
    pub span: (usize, usize),
    pub containers: Vec<String>,
    pub text: String,
    pub inline: Vec<InlineSnap>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct InlineSnap {
    pub kind: String,
    pub span: (usize, usize),
    pub text: String,
}

pub fn kind_label(kind: &BlockKind) -> String {
    match kind {
        BlockKind::Paragraph => "Paragraph".to_string(),
        BlockKind::Heading { level } => format!("Heading({level})"),
        BlockKind::ThematicBreak => "ThematicBreak".to_string(),
        BlockKind::FencedCode { kind, closed } => format!("FencedCode({kind:?}, closed: {closed})"),
        BlockKind::FrontMatter { terminated } => format!("FrontMatter(terminated: {terminated})"),
    }
}

pub fn normalize(rope: &Rope, blocks: &[BlockNode]) -> Snap {
    let blocks = blocks
        .iter()
        .map(|b| {
            let containers = b
                .containers
                .iter()
                .map(|c| match c {
                    ContainerFrame::BlockQuote { depth } => format!("Quote({depth})"),
                })
                .collect();

            let inline = parse_inline_for_block(rope, b)
                .into_iter()
                .map(|n| {
                    let kind = match n {
                        InlineNode::Text(_) => "Text",
                        InlineNode::CodeSpan { .. } => "CodeSpan",
                    };
                    let sp = n.span();
                    InlineSnap {
                        kind: kind.into(),
                        span: (sp.start, sp.end),
                        text: preview(rope, sp, 60),
                    }
                })
                .collect();

            BlockSnap {
                kind: kind_label(&b.kind),
                span: (b.span.start, b.span.end),
                containers,
                text: preview(rope, b.span, 80),
                inline,
            }
        })
        .collect();

    Snap { blocks }
}
