use std::fmt;

/// Malformed protobuf bytes.
///
/// Carries the byte offset of the failure when the wire scanner located it,
/// and the type URL being decoded when the failure surfaced through the
/// registry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodeError {
    pub type_url: Option<String>,
    pub offset: Option<usize>,
    pub reason: String,
}

impl DecodeError {
    /// A failure at a known byte offset.
    pub fn at(offset: usize, reason: impl Into<String>) -> Self {
        DecodeError {
            type_url: None,
            offset: Some(offset),
            reason: reason.into(),
        }
    }

    /// Attach the type URL of the payload that failed to decode.
    pub fn with_type_url(mut self, type_url: &str) -> Self {
        self.type_url = Some(type_url.to_string());
        self
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to decode")?;
        if let Some(type_url) = &self.type_url {
            write!(f, " {}", type_url)?;
        }
        write!(f, ": {}", self.reason)?;
        if let Some(offset) = self.offset {
            write!(f, " at byte offset {}", offset)?;
        }
        Ok(())
    }
}

impl std::error::Error for DecodeError {}

impl From<prost::DecodeError> for DecodeError {
    fn from(e: prost::DecodeError) -> Self {
        DecodeError {
            type_url: None,
            offset: None,
            reason: e.to_string(),
        }
    }
}

/// Error types for codec and registry operations.
#[derive(Debug, thiserror::Error)]
pub enum ProtoError {
    /// The payload bytes are malformed.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// No schema is registered under this type URL.
    #[error("unknown type URL: {0}")]
    UnknownType(String),

    /// The type URL is already bound to a different schema.
    #[error("type URL {type_url} is already registered as {existing}")]
    DuplicateType {
        type_url: String,
        existing: &'static str,
    },

    /// The value handed to the registry is not the registered Rust type.
    #[error("type URL {type_url} expects {expected}, got {got}")]
    TypeMismatch {
        type_url: String,
        expected: &'static str,
        got: &'static str,
    },
}
