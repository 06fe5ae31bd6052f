//! Cell text for metadata tables.

use super::node::{MetaNode, NodeKind};

pub const BROKEN_MAPPING: &str = "<broken mapping node>";

/// Renders a metadata node as a single line of table cell text.
///
/// - scalars: their text
/// - sequences: `[a b c]`
/// - mappings: `map[k2:v2 k1:v1]`, pairs in *reverse* declaration order
/// - anything else: a `<do not support ...>` placeholder
///
/// The reverse pair order is long-standing rendered output and is kept so
/// existing tables don't change.
pub fn node_to_cell_text(node: &MetaNode) -> String {
    match node.kind {
        NodeKind::Scalar => node.value.clone(),
        NodeKind::Sequence => {
            let items: Vec<String> = node.content.iter().map(node_to_cell_text).collect();
            format!("[{}]", items.join(" "))
        }
        NodeKind::Mapping => {
            if node.content.len() % 2 != 0 {
                return BROKEN_MAPPING.to_string();
            }
            let pairs: Vec<String> = node
                .content
                .chunks_exact(2)
                .rev()
                .map(|pair| {
                    format!(
                        "{}:{}",
                        node_to_cell_text(&pair[0]),
                        node_to_cell_text(&pair[1])
                    )
                })
                .collect();
            format!("map[{}]", pairs.join(" "))
        }
        other => format!("<do not support yaml node kind '{other}'>"),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn s(v: &str) -> MetaNode {
        MetaNode::scalar(v)
    }

    #[test]
    fn scalar_is_verbatim() {
        assert_eq!(node_to_cell_text(&s("  spaced text ")), "  spaced text ");
    }

    #[rstest]
    #[case(vec![], "[]")]
    #[case(vec![s("a")], "[a]")]
    #[case(vec![s("a"), s("b"), s("c")], "[a b c]")]
    fn sequences(#[case] items: Vec<MetaNode>, #[case] expected: &str) {
        assert_eq!(node_to_cell_text(&MetaNode::sequence(items)), expected);
    }

    #[test]
    fn mapping_pairs_are_reversed() {
        let node = MetaNode::mapping(vec![(s("first"), s("1")), (s("second"), s("2"))]);
        assert_eq!(node_to_cell_text(&node), "map[second:2 first:1]");
    }

    #[test]
    fn empty_mapping() {
        assert_eq!(node_to_cell_text(&MetaNode::mapping(vec![])), "map[]");
    }

    #[test]
    fn nested_structures() {
        let node = MetaNode::mapping(vec![
            (s("tags"), MetaNode::sequence(vec![s("x"), s("y")])),
            (s("meta"), MetaNode::mapping(vec![(s("k"), s("v"))])),
        ]);
        assert_eq!(node_to_cell_text(&node), "map[meta:map[k:v] tags:[x y]]");

        let seq = MetaNode::sequence(vec![MetaNode::mapping(vec![(s("a"), s("b"))]), s("c")]);
        assert_eq!(node_to_cell_text(&seq), "[map[a:b] c]");
    }

    #[test]
    fn odd_mapping_is_broken() {
        let mut node = MetaNode::mapping(vec![(s("k"), s("v"))]);
        node.content.push(s("dangling"));
        assert_eq!(node_to_cell_text(&node), BROKEN_MAPPING);
    }

    #[test]
    fn nested_document_is_unsupported() {
        let node = MetaNode::sequence(vec![MetaNode::document(None)]);
        assert_eq!(
            node_to_cell_text(&node),
            "[<do not support yaml node kind 'document'>]"
        );
    }
}
