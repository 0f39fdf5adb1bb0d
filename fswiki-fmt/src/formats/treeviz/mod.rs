//! Treeviz formatter for event streams
//!
//! Treeviz draws the flat event stream as the tree it implies. Every open
//! event starts a line and indents what follows by 2 spaces; its close event
//! is not drawn. Leaf events (text runs, preformatted blocks, comments and
//! plugins) are drawn at the current depth.
//!
//! So the format is :
//! <indentation>(per level) <icon><space><label> (truncated to 30 characters)
//!
//! Example:
//!
//!     ⊤ h1
//!       ↵ Title
//!     ☰ unordered
//!       • item
//!         ↵ first''item''
//!     ▦ table
//!       ≡ row
//!         ▣ header
//!           ↵ name

use super::icons::get_icon;
use super::fswiki::inline::render_inline;
use crate::error::FormatError;
use crate::format::Format;
use crate::ir::events::Event;

const MAX_LABEL_CHARS: usize = 30;

/// Renders an event stream as an indented tree
pub fn to_treeviz_str(events: &[Event]) -> String {
    let mut output = String::new();
    let mut depth = 0usize;

    for event in events {
        if event.is_close() {
            depth = depth.saturating_sub(1);
            continue;
        }

        output.push_str(&"  ".repeat(depth));
        output.push_str(get_icon(event.name()));
        output.push(' ');
        output.push_str(&truncate(&label(event)));
        output.push('\n');

        if event.is_open() {
            depth += 1;
        }
    }

    output
}

fn label(event: &Event) -> String {
    match event {
        Event::HeadingOpen { level } | Event::HeadingClose { level } => format!("h{level}"),
        Event::UnorderedListOpen | Event::UnorderedListClose => "unordered".to_string(),
        Event::OrderedListOpen | Event::OrderedListClose => "ordered".to_string(),
        Event::ListItemOpen | Event::ListItemClose => "item".to_string(),
        Event::ParagraphOpen | Event::ParagraphClose => "paragraph".to_string(),
        Event::TableOpen | Event::TableClose => "table".to_string(),
        Event::TableRowOpen | Event::TableRowClose => "row".to_string(),
        Event::TableHeaderCellOpen | Event::TableHeaderCellClose => "header".to_string(),
        Event::TableDataCellOpen | Event::TableDataCellClose => "cell".to_string(),
        Event::Preformatted { content } | Event::Comment { content } => one_line(content),
        Event::Plugin { tag, content } => one_line(&format!("{tag} {content}")),
        Event::Inline(children) => one_line(&render_inline(children)),
    }
}

fn one_line(text: &str) -> String {
    text.trim().replace('\n', " ↵ ")
}

fn truncate(label: &str) -> String {
    if label.chars().count() <= MAX_LABEL_CHARS {
        return label.to_string();
    }
    let mut short: String = label.chars().take(MAX_LABEL_CHARS - 1).collect();
    short.push('…');
    short
}

/// Format implementation for the tree view of an event stream
pub struct EventsTreevizFormat;

impl Format for EventsTreevizFormat {
    fn name(&self) -> &str {
        "events-treeviz"
    }

    fn description(&self) -> &str {
        "Indented tree view of the parsed event stream"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tree"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, events: &[Event]) -> Result<String, FormatError> {
        Ok(to_treeviz_str(events))
    }
}
