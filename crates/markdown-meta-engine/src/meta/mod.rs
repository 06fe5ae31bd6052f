//! # Metadata Store
//!
//! Front matter captured during one parse lives in a [`MetaSession`]. The
//! parse driver writes it exactly once, when the block closes; everything
//! afterwards only reads.
//!
//! Captured metadata is available in two shapes:
//!
//! - [`MetaMap`]: loosely-typed, keyed by string, for lookups
//! - [`MetaNode`]: ordered tree with scalars exactly as written, for anything
//!   that must follow the source (the metadata table)
//!
//! Both are built when the block closes; if either fails, the capture fails.
//!
//! Each shape has a lenient accessor (`mapping`, `items`) that folds "no
//! front matter" and "front matter failed to parse" into `None`, and a
//! strict one (`try_mapping`, `try_items`) that tells them apart.
//!
//! ```
//! use markdown_meta_engine::{Markdown, MetaSession};
//!
//! let mut session = MetaSession::new();
//! Markdown::default().convert("---\nTitle: Hello\n---\nBody\n", &mut session);
//!
//! let title = session.mapping().and_then(|m| m["Title"].as_str());
//! assert_eq!(title, Some("Hello"));
//! ```

pub mod error;
pub mod node;
pub mod stringify;
pub mod value;

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde_yaml::Value;

use crate::parsing::rope::span::Span;

pub use error::MetaError;
pub use node::{MetaNode, NodeKind};
pub use stringify::node_to_cell_text;
pub use value::{MetaMap, MetaValue};

/// Successfully captured metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Captured {
    value: Value,
    mapping: MetaMap,
    items: MetaNode,
}

impl Captured {
    /// Builds both views from raw front matter text.
    ///
    /// `serde_yaml` decides what the block means; the ordered tree is read
    /// from the parser's events so scalars keep their source text.
    pub fn parse(raw: &str) -> Result<Self, MetaError> {
        let value: Value = if raw.trim().is_empty() {
            Value::Null
        } else {
            serde_yaml::from_str(raw)?
        };
        let mapping = value::mapping_from_yaml(&value)?;
        let items = match value::untag(&value) {
            Value::Null => MetaNode::document(None),
            _ => MetaNode::from_source(raw)?,
        };
        Ok(Self {
            value,
            mapping,
            items,
        })
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn mapping(&self) -> &MetaMap {
        &self.mapping
    }

    pub fn items(&self) -> &MetaNode {
        &self.items
    }
}

/// The session slot: what the front matter block produced and where it was.
#[derive(Debug, Clone, PartialEq)]
pub struct FrontMatterData {
    /// The block's span in the source. Kept on failure too, so the error can
    /// be attached to the block.
    pub anchor: Span,
    pub outcome: Result<Captured, MetaError>,
}

impl FrontMatterData {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Parses raw front matter text into captured metadata.
pub fn parse_front_matter(raw: &str) -> Result<Captured, MetaError> {
    Captured::parse(raw)
}

/// Per-parse metadata store.
///
/// Create one per document and pass it to every stage of the pipeline.
/// It is empty until a front matter block closes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetaSession {
    slot: Option<FrontMatterData>,
}

impl MetaSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a capture outcome. Expected once per session; a second call
    /// replaces the first.
    pub fn put(&mut self, anchor: Span, outcome: Result<Captured, MetaError>) {
        if self.slot.is_some() {
            warn!("front matter captured twice in one session; keeping the latest");
        }
        self.slot = Some(FrontMatterData { anchor, outcome });
    }

    /// Close handler: deserializes `raw` and stores the result.
    ///
    /// Returns `true` when the metadata parsed, meaning the block should be
    /// removed from the visible document. Errors are stored, never returned.
    pub fn capture(&mut self, anchor: Span, raw: &str) -> bool {
        let outcome = parse_front_matter(raw);
        match &outcome {
            Ok(captured) => debug!(
                "captured front matter with {} key(s)",
                captured.mapping.len()
            ),
            Err(err) => warn!("front matter at {}..{} not captured: {err}", anchor.start, anchor.end),
        }
        let ok = outcome.is_ok();
        self.put(anchor, outcome);
        ok
    }

    pub fn has_front_matter(&self) -> bool {
        self.slot.is_some()
    }

    pub fn data(&self) -> Option<&FrontMatterData> {
        self.slot.as_ref()
    }

    pub fn anchor(&self) -> Option<Span> {
        self.slot.as_ref().map(|d| d.anchor)
    }

    /// The capture error, if a block was found and failed to parse.
    pub fn error(&self) -> Option<&MetaError> {
        self.slot.as_ref()?.outcome.as_ref().err()
    }

    fn captured(&self) -> Result<Option<&Captured>, &MetaError> {
        match &self.slot {
            None => Ok(None),
            Some(data) => data.outcome.as_ref().map(Some),
        }
    }

    /// The metadata mapping; `None` if there was no block or it failed to parse.
    pub fn mapping(&self) -> Option<&MetaMap> {
        self.try_mapping().ok().flatten()
    }

    /// `Ok(None)` when there was no front matter, `Err` when it failed to parse.
    pub fn try_mapping(&self) -> Result<Option<&MetaMap>, &MetaError> {
        Ok(self.captured()?.map(Captured::mapping))
    }

    /// The ordered metadata tree; `None` if there was no block or it failed to parse.
    pub fn items(&self) -> Option<&MetaNode> {
        self.try_items().ok().flatten()
    }

    /// Ordered counterpart of [`try_mapping`](Self::try_mapping).
    pub fn try_items(&self) -> Result<Option<&MetaNode>, &MetaError> {
        Ok(self.captured()?.map(Captured::items))
    }

    /// Deserializes the metadata into `T`.
    ///
    /// `Ok(None)` when there was no front matter. A capture error is
    /// returned as-is.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<Option<T>, MetaError> {
        let Some(captured) = self.captured().map_err(MetaError::clone)? else {
            return Ok(None);
        };
        serde_yaml::from_value(captured.value.clone())
            .map(Some)
            .map_err(|e| MetaError::Deserialize {
                message: e.to_string(),
            })
    }
}
