pub mod io;
pub mod markdown;
pub mod meta;
pub mod parsing;
pub mod render;
pub mod transform;
pub mod tree;

// Re-export key types for easier usage
pub use io::*;
pub use markdown::{Markdown, MetaOptions};
pub use meta::{Captured, FrontMatterData, MetaError, MetaMap, MetaNode, MetaSession, MetaValue};
pub use transform::{MetaTableTransformer, Rewrite};
pub use tree::{Document, NodeId};
