//! The loosely-typed view of captured metadata.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_yaml::Value;

use super::error::MetaError;

/// Metadata keyed by string. Keys are not kept in declaration order; use
/// [`MetaNode`](super::MetaNode) when order matters.
pub type MetaMap = BTreeMap<String, MetaValue>;

/// A metadata value: a scalar, a sequence, or a nested mapping.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetaValue {
    Null,
    Bool(bool),
    Integer(i64),
    /// Integers above `i64::MAX`.
    Unsigned(u64),
    Float(f64),
    String(String),
    Sequence(Vec<MetaValue>),
    Mapping(MetaMap),
}

impl MetaValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            MetaValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            MetaValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            MetaValue::Integer(n) => u64::try_from(*n).ok(),
            MetaValue::Unsigned(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            MetaValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[MetaValue]> {
        match self {
            MetaValue::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&MetaMap> {
        match self {
            MetaValue::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up `key` if this value is a mapping.
    pub fn get(&self, key: &str) -> Option<&MetaValue> {
        self.as_mapping()?.get(key)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, MetaValue::Null)
    }
}

impl From<&str> for MetaValue {
    fn from(s: &str) -> Self {
        MetaValue::String(s.to_string())
    }
}

impl<T: Into<MetaValue>> From<Vec<T>> for MetaValue {
    fn from(items: Vec<T>) -> Self {
        MetaValue::Sequence(items.into_iter().map(Into::into).collect())
    }
}

/// Builds the top-level mapping from a parsed YAML document.
///
/// An empty document (or an explicit null) yields an empty mapping. Any
/// other non-mapping root is an error.
pub(crate) fn mapping_from_yaml(root: &Value) -> Result<MetaMap, MetaError> {
    match untag(root) {
        Value::Null => Ok(MetaMap::new()),
        Value::Mapping(map) => convert_mapping(map),
        other => Err(MetaError::NotAMapping {
            found: kind_name(other),
        }),
    }
}

fn convert(value: &Value) -> Result<MetaValue, MetaError> {
    Ok(match value {
        Value::Null => MetaValue::Null,
        Value::Bool(b) => MetaValue::Bool(*b),
        Value::Number(n) => match (n.as_i64(), n.as_u64()) {
            (Some(i), _) => MetaValue::Integer(i),
            (None, Some(u)) => MetaValue::Unsigned(u),
            (None, None) => MetaValue::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        Value::String(s) => MetaValue::String(s.clone()),
        Value::Sequence(items) => {
            MetaValue::Sequence(items.iter().map(convert).collect::<Result<_, _>>()?)
        }
        Value::Mapping(map) => MetaValue::Mapping(convert_mapping(map)?),
        Value::Tagged(tagged) => convert(&tagged.value)?,
    })
}

fn convert_mapping(map: &serde_yaml::Mapping) -> Result<MetaMap, MetaError> {
    map.iter()
        .map(|(k, v)| Ok((key_string(k)?, convert(v)?)))
        .collect()
}

/// Scalar keys are stringified; collection keys are rejected.
fn key_string(key: &Value) -> Result<String, MetaError> {
    match untag(key) {
        Value::String(s) => Ok(s.clone()),
        Value::Null => Ok("null".to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(MetaError::UnsupportedKey {
            kind: kind_name(other),
        }),
    }
}

/// Strips any (possibly nested) YAML tags.
pub(crate) fn untag(mut value: &Value) -> &Value {
    while let Value::Tagged(tagged) = value {
        value = &tagged.value;
    }
    value
}

pub(crate) fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
