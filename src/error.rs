//! Error types for plot-facade operations.

use thiserror::Error;

use crate::element::ElementKind;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or configuring plot elements.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The property registry has no metadata for the requested kind.
    #[error("no property metadata registered for {0}")]
    UnknownKind(ElementKind),

    /// A named argument matches no writable property on any target.
    #[error("{kind} has no attribute {name}")]
    UnknownProperty {
        /// Kind of the element being built or configured.
        kind: ElementKind,
        /// The offending property name.
        name: String,
    },

    /// Positional arguments match no supported shape for the element kind.
    #[error("illegal arguments for {kind}: {signature}")]
    InvalidArguments {
        /// Name of the element kind (or value type) being constructed.
        kind: String,
        /// Observed argument type signature, e.g. `(Sequence, Text)`.
        signature: String,
    },

    /// Series data lengths disagree.
    #[error("Data length mismatch: expected {expected} elements, got {actual}")]
    DataLengthMismatch {
        /// Length of the reference series.
        expected: usize,
        /// Length of the disagreeing series.
        actual: usize,
    },

    /// The element engine rejected an assignment or attachment.
    #[error("engine error: {0}")]
    Engine(String),

    /// Configuration parsing error with line number.
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed, 0 if unknown).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),

    /// Invalid configuration value.
    #[error("invalid configuration value for '{key}': {message}")]
    ConfigInvalid {
        /// The configuration key with invalid value.
        key: String,
        /// Error message describing why the value is invalid.
        message: String,
    },
}

impl Error {
    /// Builds an [`Error::InvalidArguments`] from a kind label and signature.
    pub(crate) fn invalid_arguments(kind: impl ToString, signature: impl Into<String>) -> Self {
        Error::InvalidArguments {
            kind: kind.to_string(),
            signature: signature.into(),
        }
    }
}
