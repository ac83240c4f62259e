//! Error types for dict construction and traversal.

use thiserror::Error;

/// Errors that can occur while building or walking a dict.
///
/// Writes themselves never fail: every incoming scalar, sequence, or mapping
/// has a defined outcome. Errors only arise at the edges, when foreign data is
/// converted in or when a caller asks for a map where there is none.
#[derive(Error, Debug)]
pub enum DictError {
    /// A map key was not a string (deserialization path).
    #[error("invalid key: expected a string, found {found}")]
    InvalidKey { found: String },

    /// A source value could not be represented during deep conversion.
    /// `path` is the dotted location of the offending value (empty for the root).
    #[error("type mismatch at `{path}`: expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A nested dict was requested at a key that holds a scalar or sequence.
    #[error("value at `{key}` is a {found}, not a map")]
    NotAMap { key: String, found: &'static str },

    /// The input string was not valid JSON.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

/// Convenience alias used throughout appending-dict.
pub type Result<T> = std::result::Result<T, DictError>;
