//! # Inline Parsing
//!
//! Cursor-based inline parsing for paragraph and heading content. Code spans
//! are raw zones; everything else is text.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::InlineNode;
