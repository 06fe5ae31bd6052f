//! # Block Parsing
//!
//! Two-phase block parsing with a container stack.
//!
//! 1. **Line Classification** (`classify`): each line becomes a `LineClass`
//!    holding local facts (line number, blockquote depth, fence signature,
//!    blank status).
//! 2. **Block Construction** (`builder`): a `BlockBuilder` keeps the container
//!    stack and the open leaf, and emits `BlockNode`s as blocks close.
//!
//! Front matter is recognised here too: a delimiter on line 0 opens a raw
//! zone that runs until the next delimiter line (or end of input). The
//! closed block is handed back to the driver for metadata capture.
//!
//! ## Key Invariants
//!
//! - At most one front matter block, and only at line 0
//! - Fenced code blocks and front matter are raw zones: no block/inline parsing inside
//! - All block nodes store byte spans into the rope

pub mod builder;
pub mod classify;
pub mod containers;
pub mod kinds;
pub mod open;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use kinds::FrontMatterBlock;
pub use types::{BlockKind, BlockNode, ContainerFrame};
