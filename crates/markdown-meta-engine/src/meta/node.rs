//! The order-preserving view of captured metadata.

use std::{collections::HashMap, fmt};

use yaml_rust2::{
    parser::{Event, MarkedEventReceiver, Parser, Tag},
    scanner::{Marker, TScalarStyle},
};

use super::error::MetaError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// The document wrapper; holds at most one child (the root value).
    Document,
    Sequence,
    /// Entries are stored flat as `[k1, v1, k2, v2, ...]`.
    Mapping,
    Scalar,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Document => "document",
            NodeKind::Sequence => "sequence",
            NodeKind::Mapping => "mapping",
            NodeKind::Scalar => "scalar",
        };
        f.write_str(name)
    }
}

/// A node of the ordered metadata tree.
///
/// Mapping keys keep their declaration order, which the loosely-typed
/// [`MetaMap`](super::MetaMap) does not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaNode {
    pub kind: NodeKind,
    /// The YAML tag, if the source carried an explicit one (`!date`).
    pub tag: Option<String>,
    /// Scalar text; empty for collections.
    pub value: String,
    pub content: Vec<MetaNode>,
}

impl MetaNode {
    pub fn document(root: Option<MetaNode>) -> Self {
        Self::collection(NodeKind::Document, root.into_iter().collect())
    }

    pub fn scalar(value: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Scalar,
            tag: None,
            value: value.into(),
            content: vec![],
        }
    }

    pub fn sequence(items: Vec<MetaNode>) -> Self {
        Self::collection(NodeKind::Sequence, items)
    }

    /// A mapping node from key/value pairs, flattened in order.
    pub fn mapping(entries: Vec<(MetaNode, MetaNode)>) -> Self {
        let content = entries.into_iter().flat_map(|(k, v)| [k, v]).collect();
        Self::collection(NodeKind::Mapping, content)
    }

    fn collection(kind: NodeKind, content: Vec<MetaNode>) -> Self {
        Self {
            kind,
            tag: None,
            value: String::new(),
            content,
        }
    }

    /// Builds the tree for the first YAML document in `src`.
    ///
    /// Scalars keep their source text (`1.10`, `0x1F`, `True`); only quoting
    /// and block-scalar folding are undone. A missing value is the empty
    /// string.
    pub fn from_source(src: &str) -> Result<Self, MetaError> {
        let mut builder = TreeBuilder::new(src);
        Parser::new_from_str(src).load(&mut builder, false)?;
        Ok(Self::document(builder.root))
    }

    /// The node under a document wrapper, or the node itself.
    pub fn root(&self) -> Option<&MetaNode> {
        match self.kind {
            NodeKind::Document => self.content.first(),
            _ => Some(self),
        }
    }

    /// Key/value pairs of a mapping node in declaration order.
    ///
    /// A trailing unpaired node (malformed mapping) is skipped.
    pub fn entries(&self) -> impl Iterator<Item = (&MetaNode, &MetaNode)> {
        let content: &[MetaNode] = match self.kind {
            NodeKind::Mapping => &self.content,
            _ => &[],
        };
        content.chunks_exact(2).map(|pair| (&pair[0], &pair[1]))
    }

    /// Looks up a mapping value by scalar key text.
    pub fn get(&self, key: &str) -> Option<&MetaNode> {
        self.entries()
            .find(|(k, _)| k.kind == NodeKind::Scalar && k.value == key)
            .map(|(_, v)| v)
    }

    /// Scalar keys of a mapping node, in declaration order.
    pub fn keys(&self) -> Vec<&str> {
        self.entries().map(|(k, _)| k.value.as_str()).collect()
    }
}

/// Event receiver that assembles [`MetaNode`]s as the parser reports them.
struct TreeBuilder {
    source: Vec<char>,
    /// Open collections, innermost last, with their anchor ids.
    open: Vec<(MetaNode, usize)>,
    anchors: HashMap<usize, MetaNode>,
    root: Option<MetaNode>,
}

impl TreeBuilder {
    fn new(src: &str) -> Self {
        Self {
            source: src.chars().collect(),
            open: Vec::new(),
            anchors: HashMap::new(),
            root: None,
        }
    }

    fn start(&mut self, kind: NodeKind, anchor: usize, tag: Option<Tag>) {
        let mut node = MetaNode::collection(kind, Vec::new());
        node.tag = tag.map(tag_text);
        self.open.push((node, anchor));
    }

    fn finish(&mut self) {
        if let Some((node, anchor)) = self.open.pop() {
            self.attach(node, anchor);
        }
    }

    fn attach(&mut self, node: MetaNode, anchor: usize) {
        if anchor != 0 {
            self.anchors.insert(anchor, node.clone());
        }
        match self.open.last_mut() {
            Some((parent, _)) => parent.content.push(node),
            None if self.root.is_none() => self.root = Some(node),
            None => {}
        }
    }

    /// The parser reports a missing value as a plain `~` positioned on the
    /// following token. A `~` actually written in the source starts at its mark.
    fn is_written(&self, value: &str, style: TScalarStyle, mark: Marker) -> bool {
        !(matches!(style, TScalarStyle::Plain) && value == "~")
            || self.source.get(mark.index()) == Some(&'~')
    }
}

impl MarkedEventReceiver for TreeBuilder {
    fn on_event(&mut self, ev: Event, mark: Marker) {
        match ev {
            Event::Scalar(value, style, anchor, tag) => {
                let text = if self.is_written(&value, style, mark) {
                    value
                } else {
                    String::new()
                };
                let mut node = MetaNode::scalar(text);
                node.tag = tag.map(tag_text);
                self.attach(node, anchor);
            }
            Event::SequenceStart(anchor, tag) => self.start(NodeKind::Sequence, anchor, tag),
            Event::MappingStart(anchor, tag) => self.start(NodeKind::Mapping, anchor, tag),
            Event::SequenceEnd | Event::MappingEnd => self.finish(),
            Event::Alias(id) => {
                let node = self
                    .anchors
                    .get(&id)
                    .cloned()
                    .unwrap_or_else(|| MetaNode::scalar(""));
                self.attach(node, 0);
            }
            _ => {}
        }
    }
}

fn tag_text(tag: Tag) -> String {
    format!("{}{}", tag.handle, tag.suffix)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn doc(src: &str) -> MetaNode {
        MetaNode::from_source(src).expect("valid yaml")
    }

    #[test]
    fn keys_keep_declaration_order() {
        let tree = doc("zeta: 1\nalpha: 2\nmid: 3\n");
        let root = tree.root().unwrap();
        assert_eq!(root.kind, NodeKind::Mapping);
        assert_eq!(root.keys(), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn mapping_content_is_flat() {
        let tree = doc("a: [x, y]\n");
        let root = tree.root().unwrap();
        assert_eq!(
            root.content,
            vec![
                MetaNode::scalar("a"),
                MetaNode::sequence(vec![MetaNode::scalar("x"), MetaNode::scalar("y")]),
            ]
        );
    }

    #[test]
    fn empty_document_has_no_root() {
        let tree = doc("");
        assert_eq!(tree.kind, NodeKind::Document);
        assert!(tree.root().is_none());
    }

    #[test]
    fn scalar_text() {
        let tree = doc("n: 42\nf: 1.5\nb: true\nempty:\ns: 'quoted'\n");
        let root = tree.root().unwrap();
        assert_eq!(root.get("n").unwrap().value, "42");
        assert_eq!(root.get("f").unwrap().value, "1.5");
        assert_eq!(root.get("b").unwrap().value, "true");
        assert_eq!(root.get("empty").unwrap().value, "");
        assert_eq!(root.get("s").unwrap().value, "quoted");
    }

    #[rstest]
    #[case::trailing_zero("1.10")]
    #[case::exponent("1e3")]
    #[case::hex("0x1F")]
    #[case::capitalised_bool("True")]
    #[case::null_word("null")]
    #[case::tilde("~")]
    #[case::leading_zeros("007")]
    fn scalars_keep_source_text(#[case] written: &str) {
        let tree = doc(&format!("v: {written}\n"));
        assert_eq!(tree.root().unwrap().get("v").unwrap().value, written);
    }

    #[test]
    fn keys_keep_source_text() {
        let tree = doc("1.50: a\nTrue: b\n");
        assert_eq!(tree.root().unwrap().keys(), vec!["1.50", "True"]);
    }

    #[test]
    fn missing_values_are_empty() {
        let tree = doc("a:\nb: ~\nc:\n");
        let root = tree.root().unwrap();
        assert_eq!(root.get("a").unwrap().value, "");
        assert_eq!(root.get("b").unwrap().value, "~");
        assert_eq!(root.get("c").unwrap().value, "");
    }

    #[test]
    fn aliases_copy_the_anchored_node() {
        let tree = doc("base: &b [x, y]\ncopy: *b\n");
        let root = tree.root().unwrap();
        assert_eq!(root.get("copy"), root.get("base"));
        assert_eq!(root.get("copy").unwrap().kind, NodeKind::Sequence);
    }

    #[test]
    fn only_first_document_is_read() {
        let tree = doc("a: 1\n---\nb: 2\n");
        assert_eq!(tree.root().unwrap().keys(), vec!["a"]);
    }

    #[test]
    fn scan_errors_are_yaml_errors() {
        assert!(matches!(
            MetaNode::from_source("a: [1, 2\n"),
            Err(MetaError::Yaml { line: Some(_), .. })
        ));
    }

    #[test]
    fn tags_are_kept() {
        let tree = doc("when: !date 2024-01-01\n");
        let when = tree.root().unwrap().get("when").unwrap();
        assert_eq!(when.kind, NodeKind::Scalar);
        assert_eq!(when.tag.as_deref(), Some("!date"));
        assert_eq!(when.value, "2024-01-01");
    }

    #[test]
    fn odd_mapping_entries_skip_trailing_node() {
        let mut node = MetaNode::mapping(vec![(MetaNode::scalar("k"), MetaNode::scalar("v"))]);
        node.content.push(MetaNode::scalar("dangling"));
        assert_eq!(node.entries().count(), 1);
    }
}
