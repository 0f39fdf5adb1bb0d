//! JSON dump of the event stream
//!
//! Events are serialized with serde's default externally tagged layout, so
//! payload-free events appear as bare strings and the rest as one-key objects:
//!
//!     ["ParagraphOpen", {"Inline": [{"Text": "hello"}]}, "ParagraphClose"]

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::events::Event;

/// Format implementation for the JSON view of an event stream
pub struct EventsJsonFormat;

impl Format for EventsJsonFormat {
    fn name(&self) -> &str {
        "events-json"
    }

    fn description(&self) -> &str {
        "Parsed event stream as JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, events: &[Event]) -> Result<String, FormatError> {
        let mut json = serde_json::to_string_pretty(events)
            .map_err(|e| FormatError::SerializationError(e.to_string()))?;
        json.push('\n');
        Ok(json)
    }
}
