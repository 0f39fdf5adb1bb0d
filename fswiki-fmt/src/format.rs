//! Format trait definition
//!
//! This module defines the core Format trait that all format implementations must implement.
//! The trait provides a uniform interface for parsing source text into a node stream and
//! serializing a node stream back out.

use crate::error::FormatError;
use crate::ir::events::Event;
use std::collections::HashMap;

/// Trait for document formats
///
/// Implementors convert between a string representation and the flat event stream.
/// Formats can support parsing, serialization, or both.
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn supports_serialization(&self) -> bool {
///         true
///     }
///
///     fn serialize(&self, events: &[Event]) -> Result<String, FormatError> {
///         Ok(format!("{} events", events.len()))
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "fswiki", "events-json")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format (e.g., ["fswiki", "wiki"])
    ///
    /// Returns a slice of file extensions without the leading dot.
    /// Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → events)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (events → source)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into a node stream
    ///
    /// Default implementation returns NotSupported error.
    fn parse(&self, _source: &str) -> Result<Vec<Event>, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize a node stream into text
    ///
    /// Default implementation returns NotSupported error.
    fn serialize(&self, _events: &[Event]) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }

    /// Serialize a node stream, optionally using extra parameters.
    ///
    /// Formats without knobs can rely on the default implementation, which
    /// delegates to [`Format::serialize`] and rejects any non-empty option map.
    fn serialize_with_options(
        &self,
        events: &[Event],
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        if options.is_empty() {
            self.serialize(events)
        } else {
            Err(FormatError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}
