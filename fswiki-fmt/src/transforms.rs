//! Text-to-text entry points
//!
//! These wrap parse + serialize for callers that only want formatted text
//! back, such as the CLI and the integration tests.

use crate::error::FormatError;
use crate::format::Format;
use crate::formats::fswiki::formatting_rules::FormattingRules;
use crate::formats::fswiki::parser::parse_reader;
use crate::formats::fswiki::FswikiFormat;
use std::io::BufRead;

/// Format fswiki source with the default rules
///
/// # Example
///
/// ```
/// use fswiki_fmt::transforms::format_source;
///
/// let formatted = format_source("!Title\nSome text here").unwrap();
/// assert_eq!(formatted, "! Title\n\nSome text here\n");
/// ```
pub fn format_source(source: &str) -> Result<String, FormatError> {
    format_source_with_rules(source, &FormattingRules::default())
}

/// Format fswiki source with custom rules
pub fn format_source_with_rules(
    source: &str,
    rules: &FormattingRules,
) -> Result<String, FormatError> {
    let format = FswikiFormat::new(rules.clone());
    let events = format.parse(source)?;
    format.serialize(&events)
}

/// Read a whole document from `reader` and format it
///
/// Nothing is produced if reading fails part way through.
pub fn format_reader<R: BufRead>(
    reader: R,
    rules: &FormattingRules,
) -> Result<String, FormatError> {
    let events = parse_reader(reader)?;
    FswikiFormat::new(rules.clone()).serialize(&events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::fswiki::formatting_rules::TableAlign;
    use std::io::{self, Read};

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
        }
    }

    #[test]
    fn test_format_source_scenario() {
        assert_eq!(
            format_source("!Title\n\nSome text here").unwrap(),
            "! Title\n\nSome text here\n"
        );
    }

    #[test]
    fn test_format_reader_matches_format_source() {
        let source = ",name,price\n,apple,\"1,200\"\n";
        let rules = FormattingRules {
            table_align: TableAlign::Left,
            table_insert_trailing_space: false,
        };
        assert_eq!(
            format_reader(source.as_bytes(), &rules).unwrap(),
            format_source_with_rules(source, &rules).unwrap()
        );
    }

    #[test]
    fn test_read_failure_is_io_error() {
        let reader = io::BufReader::new(FailingReader);
        let result = format_reader(reader, &FormattingRules::default());
        assert!(matches!(result, Err(FormatError::Io(_))));
    }
}
