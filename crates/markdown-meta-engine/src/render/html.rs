use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::tree::{Document, NodeId, NodeKind};

/// Renders the whole document as HTML.
///
/// Block elements end with a newline; tables use the `<thead>`/`<tbody>`
/// layout with one element per line.
pub fn render_html(doc: &Document) -> String {
    let mut out = String::new();
    HtmlWriter {
        doc,
        out: &mut out,
    }
    .children(doc.root());
    out
}

struct HtmlWriter<'a> {
    doc: &'a Document,
    out: &'a mut String,
}

impl HtmlWriter<'_> {
    fn children(&mut self, id: NodeId) {
        for &child in self.doc.children(id) {
            self.node(child);
        }
    }

    fn node(&mut self, id: NodeId) {
        let doc = self.doc;
        match doc.kind(id) {
            NodeKind::Document => self.children(id),
            NodeKind::Paragraph => self.wrap("p", id),
            NodeKind::Heading { level } => self.wrap(&format!("h{level}"), id),
            NodeKind::ThematicBreak => self.out.push_str("<hr>\n"),
            NodeKind::CodeBlock { info, literal } => {
                self.out.push_str("<pre><code");
                if let Some(lang) = info.split_whitespace().next() {
                    self.out.push_str(" class=\"language-");
                    self.out.push_str(&encode_double_quoted_attribute(lang));
                    self.out.push('"');
                }
                self.out.push('>');
                self.out.push_str(&encode_text(literal));
                self.out.push_str("</code></pre>\n");
            }
            NodeKind::BlockQuote => {
                self.out.push_str("<blockquote>\n");
                self.children(id);
                self.out.push_str("</blockquote>\n");
            }
            NodeKind::FrontMatter { raw } => {
                self.text(raw);
                if !raw.is_empty() && !raw.ends_with('\n') {
                    self.out.push('\n');
                }
                if !doc.children(id).is_empty() {
                    self.children(id);
                    self.out.push('\n');
                }
            }
            NodeKind::Table { .. } => {
                self.out.push_str("<table>\n");
                let (head, body): (Vec<NodeId>, Vec<NodeId>) = doc
                    .children(id)
                    .iter()
                    .copied()
                    .partition(|&row| doc.kind(row) == &NodeKind::TableHeader);
                for row in head {
                    self.out.push_str("<thead>\n");
                    self.row(row, "th");
                    self.out.push_str("</thead>\n");
                }
                if !body.is_empty() {
                    self.out.push_str("<tbody>\n");
                    for row in body {
                        self.row(row, "td");
                    }
                    self.out.push_str("</tbody>\n");
                }
                self.out.push_str("</table>\n");
            }
            // Rows and cells are written by their table.
            NodeKind::TableHeader | NodeKind::TableRow | NodeKind::TableCell => self.children(id),
            NodeKind::Text(t) => self.text(t),
            NodeKind::Code(t) => {
                self.out.push_str("<code>");
                self.text(t);
                self.out.push_str("</code>");
            }
            NodeKind::Raw(t) => self.out.push_str(t),
        }
    }

    fn wrap(&mut self, tag: &str, id: NodeId) {
        self.out.push('<');
        self.out.push_str(tag);
        self.out.push('>');
        self.children(id);
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push_str(">\n");
    }

    fn row(&mut self, row: NodeId, cell_tag: &str) {
        self.out.push_str("<tr>\n");
        for &cell in self.doc.children(row) {
            self.wrap(cell_tag, cell);
        }
        self.out.push_str("</tr>\n");
    }

    /// Escapes `&`, `<`, `>` and `"`.
    fn text(&mut self, s: &str) {
        self.out.push_str(&encode_double_quoted_attribute(s));
    }
}
