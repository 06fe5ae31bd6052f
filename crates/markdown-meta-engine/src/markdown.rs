use log::debug;
use xi_rope::Rope;

use crate::{
    meta::MetaSession,
    parsing::parse_document,
    render::render_html,
    transform::MetaTableTransformer,
    tree::{Document, build_document},
};

/// Pipeline options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetaOptions {
    /// Render captured metadata as a table at the top of the document, and
    /// show capture errors inline.
    pub table: bool,
}

impl MetaOptions {
    pub fn with_table(mut self) -> Self {
        self.table = true;
        self
    }
}

/// The markdown pipeline: parse, build the tree, rewrite, render.
#[derive(Debug, Clone, Default)]
pub struct Markdown {
    options: MetaOptions,
}

impl Markdown {
    pub fn new(options: MetaOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> MetaOptions {
        self.options
    }

    /// Parses `source` into a document tree, capturing front matter into
    /// `session`.
    pub fn parse(&self, source: &str, session: &mut MetaSession) -> Document {
        let rope = Rope::from(source);
        let parsed = parse_document(&rope, session);
        debug!("parsed {} block(s)", parsed.blocks.len());
        let mut doc = build_document(&rope, &parsed);
        if self.options.table {
            MetaTableTransformer.transform(&mut doc, session);
        }
        doc
    }

    /// Parses and renders `source` as HTML.
    pub fn convert(&self, source: &str, session: &mut MetaSession) -> String {
        render_html(&self.parse(source, session))
    }
}
