//! FreeStyleWiki format implementation
//!
//!     Markup reference (the subset this formatter understands):
//!
//!         !!! Heading 1 / !! Heading 2 / ! Heading 3
//!         * / ** / ***        unordered list, depth 1 to 3
//!         + / ++ / +++        ordered list, depth 1 to 3
//!          preformatted       a single leading space
//!         ,cell,"a,b",cell    table row; the first row is the header
//!         // comment
//!         {{plugin args}}     or a multi-line block closed by a `}}` line
//!         '''strong''' and ''emphasis'' inside text
//!
//!     Parsing never fails. Serialization produces the canonical layout: one
//!     blank line between blocks, one space after heading and list markers,
//!     and tables padded into aligned columns.

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::events::Event;
use std::collections::HashMap;

pub mod block_state;
pub mod formatting_rules;
pub mod inline;
pub mod parser;
pub mod serializer;
pub mod table;

use formatting_rules::{FormattingRules, TableAlign};
use serializer::FswikiSerializer;

/// Option key selecting `left` or `right` cell alignment.
pub const OPTION_TABLE_ALIGN: &str = "table-align";
/// Option key toggling the space after every non-final cell.
pub const OPTION_TABLE_SPACE: &str = "table-space";

/// Format implementation for FreeStyleWiki markup.
#[derive(Default)]
pub struct FswikiFormat {
    rules: FormattingRules,
}

impl FswikiFormat {
    pub fn new(rules: FormattingRules) -> Self {
        Self { rules }
    }
}

impl Format for FswikiFormat {
    fn name(&self) -> &str {
        "fswiki"
    }

    fn description(&self) -> &str {
        "FreeStyleWiki markup"
    }

    fn file_extensions(&self) -> &[&str] {
        &["fswiki", "wiki"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Vec<Event>, FormatError> {
        Ok(parser::parse_document(source))
    }

    fn serialize(&self, events: &[Event]) -> Result<String, FormatError> {
        Ok(FswikiSerializer::new(self.rules.clone()).serialize(events))
    }

    fn serialize_with_options(
        &self,
        events: &[Event],
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let rules = rules_with_options(self.rules.clone(), options)?;
        Ok(FswikiSerializer::new(rules).serialize(events))
    }
}

/// Applies string options (as passed on the command line) on top of `base`.
pub fn rules_with_options(
    mut base: FormattingRules,
    options: &HashMap<String, String>,
) -> Result<FormattingRules, FormatError> {
    for (key, value) in options {
        match key.as_str() {
            OPTION_TABLE_ALIGN => {
                base.table_align =
                    value
                        .parse::<TableAlign>()
                        .map_err(|value| FormatError::InvalidOption {
                            key: key.clone(),
                            value,
                        })?;
            }
            OPTION_TABLE_SPACE => {
                base.table_insert_trailing_space =
                    parse_bool(value).ok_or_else(|| FormatError::InvalidOption {
                        key: key.clone(),
                        value: value.clone(),
                    })?;
            }
            other => {
                return Err(FormatError::NotSupported(format!(
                    "Format 'fswiki' has no option '{other}'"
                )))
            }
        }
    }
    Ok(base)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "" | "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
