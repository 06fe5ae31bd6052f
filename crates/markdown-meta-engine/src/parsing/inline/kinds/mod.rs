//! Inline-specific types that own their syntax delimiters.

pub mod code_span;

pub use code_span::CodeSpan;
