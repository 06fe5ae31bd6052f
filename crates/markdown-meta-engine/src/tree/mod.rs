//! # Document Tree
//!
//! An arena-backed tree built from parsed blocks. Nodes are addressed by
//! [`NodeId`]; removing a node detaches it from its parent but leaves it in
//! the arena, so ids stay valid for the life of the document.
//!
//! ```text
//! Document
//! ├── Table                 (inserted by the metadata rewriter)
//! │   ├── TableHeader ── TableCell ── Text
//! │   └── TableRow ───── TableCell ── Text
//! ├── Heading { level } ── Text / Code
//! └── Paragraph ────────── Text / Code
//! ```

mod build;

use crate::parsing::rope::span::Span;

pub use build::build_document;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    None,
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    Paragraph,
    Heading { level: u8 },
    ThematicBreak,
    CodeBlock { info: String, literal: String },
    BlockQuote,
    /// Front matter that failed to parse, shown as its raw text.
    FrontMatter { raw: String },
    Table { alignments: Vec<Alignment> },
    TableHeader,
    TableRow,
    TableCell,
    /// Inline text, escaped on output.
    Text(String),
    /// Inline code span.
    Code(String),
    /// Inline text written verbatim (no escaping).
    Raw(String),
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    span: Option<Span>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<NodeData>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeData {
                kind: NodeKind::Document,
                span: None,
                parent: None,
                children: vec![],
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Allocates a detached node.
    pub fn new_node(&mut self, kind: NodeKind, span: Option<Span>) -> NodeId {
        self.nodes.push(NodeData {
            kind,
            span,
            parent: None,
            children: vec![],
        });
        NodeId(self.nodes.len() - 1)
    }

    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.0].kind
    }

    pub fn span(&self, id: NodeId) -> Option<Span> {
        self.nodes[id.0].span
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.children(id).first().copied()
    }

    /// Appends `child` as the last child of `parent`, detaching it first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);
    }

    /// Inserts `child` before `reference` among `parent`'s children.
    ///
    /// With no reference, or a reference that isn't a child of `parent`,
    /// the child is appended.
    pub fn insert_before(&mut self, parent: NodeId, reference: Option<NodeId>, child: NodeId) {
        self.detach(child);
        let siblings = &mut self.nodes[parent.0].children;
        let at = reference
            .and_then(|r| siblings.iter().position(|&c| c == r))
            .unwrap_or(siblings.len());
        siblings.insert(at, child);
        self.nodes[child.0].parent = Some(parent);
    }

    /// Removes `child` from `parent`. Returns false if it wasn't a child.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        let siblings = &mut self.nodes[parent.0].children;
        let Some(at) = siblings.iter().position(|&c| c == child) else {
            return false;
        };
        siblings.remove(at);
        self.nodes[child.0].parent = None;
        true
    }

    fn detach(&mut self, child: NodeId) {
        if let Some(parent) = self.nodes[child.0].parent {
            self.remove_child(parent, child);
        }
    }

    /// Depth-first search of the attached tree.
    pub fn find(&self, mut pred: impl FnMut(NodeId, &NodeKind) -> bool) -> Option<NodeId> {
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            if pred(id, self.kind(id)) {
                return Some(id);
            }
            stack.extend(self.children(id).iter().rev());
        }
        None
    }

    /// Concatenated inline text under `id` (Text, Code and Raw leaves).
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        match self.kind(id) {
            NodeKind::Text(t) | NodeKind::Code(t) | NodeKind::Raw(t) => out.push_str(t),
            _ => {
                for &child in self.children(id) {
                    self.collect_text(child, out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn text(doc: &mut Document, s: &str) -> NodeId {
        doc.new_node(NodeKind::Text(s.into()), None)
    }

    #[test]
    fn append_and_insert_before() {
        let mut doc = Document::new();
        let root = doc.root();
        let a = text(&mut doc, "a");
        let b = text(&mut doc, "b");
        let c = text(&mut doc, "c");
        doc.append_child(root, a);
        doc.append_child(root, b);
        doc.insert_before(root, doc.first_child(root), c);

        assert_eq!(doc.children(root), &[c, a, b]);
        assert_eq!(doc.parent(c), Some(root));
        assert_eq!(doc.text_content(root), "cab");
    }

    #[test]
    fn insert_before_on_empty_parent_appends() {
        let mut doc = Document::new();
        let root = doc.root();
        let a = text(&mut doc, "a");
        doc.insert_before(root, doc.first_child(root), a);
        assert_eq!(doc.children(root), &[a]);
    }

    #[test]
    fn remove_child_detaches() {
        let mut doc = Document::new();
        let root = doc.root();
        let a = text(&mut doc, "a");
        doc.append_child(root, a);
        assert!(doc.remove_child(root, a));
        assert!(!doc.remove_child(root, a));
        assert_eq!(doc.parent(a), None);
        assert!(doc.children(root).is_empty());
    }

    #[test]
    fn reparenting_moves_the_node() {
        let mut doc = Document::new();
        let root = doc.root();
        let p = doc.new_node(NodeKind::Paragraph, None);
        let a = text(&mut doc, "a");
        doc.append_child(root, p);
        doc.append_child(root, a);
        doc.append_child(p, a);
        assert_eq!(doc.children(root), &[p]);
        assert_eq!(doc.children(p), &[a]);
    }

    #[test]
    fn find_walks_in_document_order() {
        let mut doc = Document::new();
        let root = doc.root();
        let p1 = doc.new_node(NodeKind::Paragraph, None);
        let p2 = doc.new_node(NodeKind::Paragraph, None);
        doc.append_child(root, p1);
        doc.append_child(root, p2);
        assert_eq!(
            doc.find(|_, k| matches!(k, NodeKind::Paragraph)),
            Some(p1)
        );
    }
}
