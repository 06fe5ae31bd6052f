//! # Snapshot Testing Support
//!
//! - **`normalize`**: converts parsed blocks to a stable, serializable `Snap`
//! - **`invariants`**: runtime checks for parser correctness (spans in bounds,
//!   content spans contained in block spans, at most one front matter block,
//!   and only at the start of the document)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
