use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Horizontal alignment of table cells within their column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableAlign {
    Left,
    #[default]
    Right,
}

impl FromStr for TableAlign {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(TableAlign::Left),
            "right" => Ok(TableAlign::Right),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for TableAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableAlign::Left => write!(f, "left"),
            TableAlign::Right => write!(f, "right"),
        }
    }
}

/// Configuration for the fswiki formatter
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormattingRules {
    /// How cells are padded to their column width
    pub table_align: TableAlign,

    /// Whether every non-final cell gets one trailing space before the next comma
    pub table_insert_trailing_space: bool,
}
