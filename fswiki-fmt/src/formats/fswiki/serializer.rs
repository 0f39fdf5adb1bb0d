//! FreeStyleWiki serialization (event stream → canonical text)
//!
//!     The serializer replays the stream once. It keeps a stack of list
//!     markers, one per open list, and while a table is open it buffers the
//!     rows so every column can be padded once the table closes.
//!
//!     Blocks are separated by exactly one blank line. The separator is held
//!     back until the next event arrives, so the output never ends with one.

use super::formatting_rules::FormattingRules;
use super::inline::render_inline;
use super::table::{cell_text, TableBuffer};
use crate::ir::events::{Event, ListKind};
use tracing::debug;

pub struct FswikiSerializer {
    rules: FormattingRules,
    output: String,
    markers: Vec<char>,
    table: Option<TableBuffer>,
    pending_blank: bool,
}

impl FswikiSerializer {
    pub fn new(rules: FormattingRules) -> Self {
        Self {
            rules,
            output: String::new(),
            markers: Vec::new(),
            table: None,
            pending_blank: false,
        }
    }

    pub fn serialize(mut self, events: &[Event]) -> String {
        for event in events {
            if self.pending_blank {
                self.output.push('\n');
                self.pending_blank = false;
            }
            self.write_event(event);
        }
        debug!(
            events = events.len(),
            bytes = self.output.len(),
            "serialized fswiki document"
        );
        self.output
    }

    fn write_event(&mut self, event: &Event) {
        match event {
            Event::HeadingOpen { level } => {
                let count = (*level).clamp(1, 3) as usize;
                self.output.push_str(&"!".repeat(count));
                self.output.push(' ');
            }
            Event::HeadingClose { .. } | Event::ParagraphClose => self.end_block(),
            Event::UnorderedListOpen => self.markers.push(ListKind::Unordered.marker()),
            Event::OrderedListOpen => self.markers.push(ListKind::Ordered.marker()),
            Event::UnorderedListClose | Event::OrderedListClose => {
                self.markers.pop();
                if self.markers.is_empty() {
                    self.pending_blank = true;
                }
            }
            Event::ListItemOpen => {
                if let Some(&marker) = self.markers.last() {
                    self.output
                        .extend(std::iter::repeat(marker).take(self.markers.len()));
                }
                self.output.push(' ');
            }
            Event::ListItemClose => self.output.push('\n'),
            Event::ParagraphOpen => {}
            Event::Preformatted { content } => {
                for line in content.split('\n') {
                    self.output.push(' ');
                    self.output.push_str(line);
                    self.output.push('\n');
                }
                self.pending_blank = true;
            }
            Event::Plugin { tag, content } => {
                self.output.push_str("{{");
                self.output.push_str(tag);
                if !content.is_empty() && !content.starts_with('\n') {
                    self.output.push(' ');
                }
                self.output.push_str(content);
                self.output.push_str("}}");
                self.end_block();
            }
            Event::Comment { content } => {
                let line = comment_line(content);
                match self.table.as_mut() {
                    Some(table) => table.attach_comment(&line),
                    None => self.output.push_str(&line),
                }
            }
            Event::TableOpen => self.table = Some(TableBuffer::new()),
            Event::TableClose => {
                if let Some(table) = self.table.take() {
                    self.output.push_str(&table.render(&self.rules));
                }
                self.pending_blank = true;
            }
            Event::TableRowOpen => {
                if let Some(table) = self.table.as_mut() {
                    table.start_row();
                }
            }
            Event::TableRowClose => {}
            Event::TableHeaderCellOpen | Event::TableDataCellOpen => {
                if let Some(table) = self.table.as_mut() {
                    table.start_cell();
                }
            }
            Event::TableHeaderCellClose | Event::TableDataCellClose => {
                if let Some(table) = self.table.as_mut() {
                    table.end_cell();
                }
            }
            Event::Inline(children) => match self.table.as_mut() {
                Some(table) => table.set_cell(cell_text(children)),
                None => self.output.push_str(&render_inline(children)),
            },
        }
    }

    fn end_block(&mut self) {
        self.output.push('\n');
        self.pending_blank = true;
    }
}

fn comment_line(content: &str) -> String {
    // One leading space is eaten on the way back in.
    if content.starts_with(' ') {
        format!("// {content}\n")
    } else {
        format!("//{content}\n")
    }
}
