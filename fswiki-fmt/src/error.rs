//! Error types for format operations

use thiserror::Error;

/// Errors that can occur during format operations
///
/// Markup content never produces an error: the fswiki parser accepts every
/// line. What remains is lookup, capability and I/O failures.
#[derive(Debug, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// Format does not support the requested operation
    #[error("Operation not supported: {0}")]
    NotSupported(String),
    /// A format option had an unusable value
    #[error("Invalid value '{value}' for option '{key}'")]
    InvalidOption { key: String, value: String },
    /// Reading the input failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
