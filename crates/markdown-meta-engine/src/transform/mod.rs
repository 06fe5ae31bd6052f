//! # Metadata Rewriter
//!
//! Runs over the built document once parsing is done. Planning reads the
//! session and the tree and produces a [`Rewrite`]; applying it is the only
//! step that mutates the tree.

use log::debug;

use crate::{
    meta::{MetaSession, NodeKind as MetaKind, node_to_cell_text},
    tree::{Alignment, Document, NodeId, NodeKind},
};

/// A planned change to the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rewrite {
    /// Leave the tree alone.
    None,
    /// Append a raw error marker to the front matter node.
    Marker { anchor: NodeId, text: String },
    /// Insert a key/value table as the first child of the root.
    Table {
        header: Vec<String>,
        row: Vec<String>,
    },
}

/// Turns captured metadata into a table, or a visible error marker when
/// the metadata failed to parse.
#[derive(Debug, Default, Clone, Copy)]
pub struct MetaTableTransformer;

impl MetaTableTransformer {
    pub fn transform(&self, doc: &mut Document, session: &MetaSession) {
        let rewrite = self.plan(doc, session);
        Self::apply(doc, rewrite);
    }

    pub fn plan(&self, doc: &Document, session: &MetaSession) -> Rewrite {
        let Some(data) = session.data() else {
            return Rewrite::None;
        };

        let captured = match &data.outcome {
            Ok(captured) => captured,
            Err(err) => {
                let anchor = doc.find(|id, kind| {
                    matches!(kind, NodeKind::FrontMatter { .. }) && doc.span(id) == Some(data.anchor)
                });
                return match anchor {
                    Some(anchor) => Rewrite::Marker {
                        anchor,
                        text: format!("<!-- {err} -->"),
                    },
                    None => {
                        debug!("front matter node not in tree; skipping error marker");
                        Rewrite::None
                    }
                };
            }
        };

        let Some(root) = captured.items().root() else {
            return Rewrite::None;
        };
        if root.kind != MetaKind::Mapping {
            return Rewrite::None;
        }

        let (header, row) = root
            .entries()
            .map(|(k, v)| (node_to_cell_text(k), node_to_cell_text(v)))
            .unzip();
        Rewrite::Table { header, row }
    }

    pub fn apply(doc: &mut Document, rewrite: Rewrite) {
        match rewrite {
            Rewrite::None => {}
            Rewrite::Marker { anchor, text } => {
                let marker = doc.new_node(NodeKind::Raw(text), None);
                doc.append_child(anchor, marker);
            }
            Rewrite::Table { header, row } => {
                let alignments = vec![Alignment::None; header.len()];
                let table = doc.new_node(NodeKind::Table { alignments }, None);
                let head = Self::row(doc, NodeKind::TableHeader, header);
                let body = Self::row(doc, NodeKind::TableRow, row);
                doc.append_child(table, head);
                doc.append_child(table, body);
                let root = doc.root();
                let first = doc.first_child(root);
                doc.insert_before(root, first, table);
            }
        }
    }

    fn row(doc: &mut Document, kind: NodeKind, cells: Vec<String>) -> NodeId {
        let row = doc.new_node(kind, None);
        for text in cells {
            let cell = doc.new_node(NodeKind::TableCell, None);
            let text = doc.new_node(NodeKind::Text(text), None);
            doc.append_child(cell, text);
            doc.append_child(row, cell);
        }
        row
    }
}
