//! Defines the flat event stream representation of a document.

use serde::Serialize;

/// Represents a single event in the document stream.
///
/// A document is a flat sequence of events. Structure is implied purely by
/// order: every `*Open` is matched by its `*Close` and pairs nest properly.
/// Leaf events (`Preformatted`, `Comment`, `Plugin`, `Inline`) carry content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Event {
    /// `level` is the marker count: 3 for `!!!`, the largest heading, down to 1 for `!`.
    HeadingOpen {
        level: u8,
    },
    HeadingClose {
        level: u8,
    },
    UnorderedListOpen,
    UnorderedListClose,
    OrderedListOpen,
    OrderedListClose,
    ListItemOpen,
    ListItemClose,
    ParagraphOpen,
    ParagraphClose,
    /// One preformatted block; source lines are joined with `\n`.
    Preformatted {
        content: String,
    },
    TableOpen,
    TableClose,
    TableRowOpen,
    TableRowClose,
    TableHeaderCellOpen,
    TableHeaderCellClose,
    TableDataCellOpen,
    TableDataCellClose,
    Comment {
        content: String,
    },
    /// `content` is empty, a single-line argument, or a verbatim body
    /// starting with `\n`.
    Plugin {
        tag: String,
        content: String,
    },
    Inline(Vec<Inline>),
}

/// Children of an [`Event::Inline`] run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Inline {
    Text(String),
    SoftBreak,
    StrongOpen,
    StrongClose,
    EmphasisOpen,
    EmphasisClose,
}

/// List flavour, remembered per nesting depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ListKind {
    #[default]
    Unordered,
    Ordered,
}

impl ListKind {
    /// The marker character used in canonical output.
    pub fn marker(self) -> char {
        match self {
            ListKind::Unordered => '*',
            ListKind::Ordered => '+',
        }
    }

    pub fn open_event(self) -> Event {
        match self {
            ListKind::Unordered => Event::UnorderedListOpen,
            ListKind::Ordered => Event::OrderedListOpen,
        }
    }

    pub fn close_event(self) -> Event {
        match self {
            ListKind::Unordered => Event::UnorderedListClose,
            ListKind::Ordered => Event::OrderedListClose,
        }
    }
}

impl Event {
    /// Whether this event opens a nesting level.
    pub fn is_open(&self) -> bool {
        matches!(
            self,
            Event::HeadingOpen { .. }
                | Event::UnorderedListOpen
                | Event::OrderedListOpen
                | Event::ListItemOpen
                | Event::ParagraphOpen
                | Event::TableOpen
                | Event::TableRowOpen
                | Event::TableHeaderCellOpen
                | Event::TableDataCellOpen
        )
    }

    /// Whether this event closes a nesting level.
    pub fn is_close(&self) -> bool {
        matches!(
            self,
            Event::HeadingClose { .. }
                | Event::UnorderedListClose
                | Event::OrderedListClose
                | Event::ListItemClose
                | Event::ParagraphClose
                | Event::TableClose
                | Event::TableRowClose
                | Event::TableHeaderCellClose
                | Event::TableDataCellClose
        )
    }

    /// Short, payload-free name used by inspection output.
    pub fn name(&self) -> &'static str {
        match self {
            Event::HeadingOpen { .. } => "HeadingOpen",
            Event::HeadingClose { .. } => "HeadingClose",
            Event::UnorderedListOpen => "UnorderedListOpen",
            Event::UnorderedListClose => "UnorderedListClose",
            Event::OrderedListOpen => "OrderedListOpen",
            Event::OrderedListClose => "OrderedListClose",
            Event::ListItemOpen => "ListItemOpen",
            Event::ListItemClose => "ListItemClose",
            Event::ParagraphOpen => "ParagraphOpen",
            Event::ParagraphClose => "ParagraphClose",
            Event::Preformatted { .. } => "Preformatted",
            Event::TableOpen => "TableOpen",
            Event::TableClose => "TableClose",
            Event::TableRowOpen => "TableRowOpen",
            Event::TableRowClose => "TableRowClose",
            Event::TableHeaderCellOpen => "TableHeaderCellOpen",
            Event::TableHeaderCellClose => "TableHeaderCellClose",
            Event::TableDataCellOpen => "TableDataCellOpen",
            Event::TableDataCellClose => "TableDataCellClose",
            Event::Comment { .. } => "Comment",
            Event::Plugin { .. } => "Plugin",
            Event::Inline(_) => "Inline",
        }
    }
}
