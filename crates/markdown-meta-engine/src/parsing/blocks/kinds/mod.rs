pub mod block_quote;
pub mod code_fence;
pub mod front_matter;
pub mod heading;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceKind, FenceSig};
pub use front_matter::{FrontMatter, FrontMatterBlock};
pub use heading::AtxHeading;
pub use thematic_break::ThematicBreak;
