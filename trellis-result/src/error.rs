//! Field errors carrying result-tree locations.

use serde::Serialize;
use thiserror::Error;
use trellis_path::Path;

/// An error raised while resolving one field of a result tree.
///
/// Carries the path captured at the failing position, so consumers can
/// report where in the output the failure happened and deduplicate or
/// index errors by location; equality and hashing include the path.
///
/// Serializes into the wire error object, with the path as a segment
/// array and omitted entirely for request-level errors:
///
/// ```
/// use trellis_path::Path;
/// use trellis_result::FieldError;
///
/// let error = FieldError::new(
///     "value is not a valid Int",
///     Path::root().append_field("user").append_index(3),
/// );
/// assert_eq!(
///     serde_json::to_value(&error).unwrap(),
///     serde_json::json!({"message": "value is not a valid Int", "path": ["user", 3]})
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error, Serialize)]
#[error("{message}")]
pub struct FieldError {
    /// Human-readable description of the failure.
    message: String,
    /// Result-tree location the error was raised at; root for
    /// request-level errors.
    #[serde(skip_serializing_if = "Path::is_root")]
    path: Path,
}

impl FieldError {
    /// Creates an error at the given result position.
    ///
    /// `path` should be a snapshot captured at the failing position, not a
    /// live traversal cursor's borrow.
    #[must_use]
    pub fn new(message: impl Into<String>, path: Path) -> Self {
        Self { message: message.into(), path }
    }

    /// Creates an error with no result position.
    #[must_use]
    pub fn request_level(message: impl Into<String>) -> Self {
        Self::new(message, Path::root())
    }

    /// The error message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The result-tree location; root for request-level errors.
    #[must_use]
    pub const fn path(&self) -> &Path {
        &self.path
    }
}
