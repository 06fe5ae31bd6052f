//! HTML output for the document tree.

pub mod html;

pub use html::render_html;
