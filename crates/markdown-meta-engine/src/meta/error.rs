use thiserror::Error;

/// Why a front matter block could not be captured.
///
/// Owns its message text so it can be stored in the session and handed out
/// by reference (or cloned) after the parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetaError {
    /// The YAML deserializer rejected the block.
    ///
    /// `line`/`column` are 1-based and relative to the first line after the
    /// opening delimiter.
    #[error("yaml: {message}")]
    Yaml {
        message: String,
        line: Option<usize>,
        column: Option<usize>,
    },

    /// Valid YAML, but the document root is not a mapping.
    #[error("yaml: metadata must be a mapping, found a {found}")]
    NotAMapping { found: &'static str },

    /// A mapping key that can't be used as a string key.
    #[error("yaml: unsupported {kind} used as a mapping key")]
    UnsupportedKey { kind: &'static str },

    /// Captured metadata didn't fit the requested type.
    #[error("failed to deserialize metadata: {message}")]
    Deserialize { message: String },
}

impl From<serde_yaml::Error> for MetaError {
    fn from(err: serde_yaml::Error) -> Self {
        let location = err.location();
        MetaError::Yaml {
            message: err.to_string(),
            line: location.as_ref().map(|l| l.line()),
            column: location.as_ref().map(|l| l.column()),
        }
    }
}

impl From<yaml_rust2::scanner::ScanError> for MetaError {
    fn from(err: yaml_rust2::scanner::ScanError) -> Self {
        let mark = err.marker();
        MetaError::Yaml {
            message: err.to_string(),
            line: Some(mark.line()),
            column: Some(mark.col() + 1),
        }
    }
}
