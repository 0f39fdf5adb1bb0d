//! Inspection transforms available to `fswikifmt inspect`
//!
//! Each transform names a registered serializer for the parsed event stream:
//!
//! - `events-treeviz`: indented tree with one line per open or leaf event
//! - `events-json`: the raw stream as JSON
//!
//! Example: `fswikifmt inspect page.wiki events-json`

use fswiki_fmt::ir::events::Event;
use fswiki_fmt::{FormatError, FormatRegistry};
use std::collections::HashMap;

pub const AVAILABLE_TRANSFORMS: &[&str] = &["events-json", "events-treeviz"];

pub const DEFAULT_TRANSFORM: &str = "events-treeviz";

/// Render `events` with the named transform
pub fn execute_transform(
    events: &[Event],
    transform: &str,
    params: &HashMap<String, String>,
) -> Result<String, FormatError> {
    if !AVAILABLE_TRANSFORMS.contains(&transform) {
        return Err(FormatError::NotSupported(format!(
            "Unknown transform '{transform}'"
        )));
    }
    FormatRegistry::default().serialize_with_options(events, transform, params)
}
