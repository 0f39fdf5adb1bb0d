//! FreeStyleWiki parsing (source text → event stream)
//!
//!     Parsing is line driven. Every line is classified by its leading
//!     characters, most specific marker first, into the block state it asks
//!     for. The events that get the stream from the previous state into that
//!     one come from [`transition`], then the line's own content is appended.
//!
//!     Multi-line plugin bodies are the only place the classifier is bypassed:
//!     between `{{name` and a line that is exactly `}}`, lines are captured
//!     verbatim.
//!
//!     No line is ever rejected. Anything that does not look like a block
//!     marker is paragraph text.

use super::block_state::{transition, BlockState, MAX_LIST_DEPTH};
use super::inline::parse_inline;
use super::table::split_row;
use crate::error::FormatError;
use crate::ir::events::{Event, Inline, ListKind};
use std::io::BufRead;
use tracing::{debug, trace};

/// What a single source line asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line<'a> {
    Blank,
    Heading {
        level: u8,
        text: &'a str,
    },
    ListItem {
        depth: usize,
        kind: ListKind,
        text: &'a str,
    },
    Preformatted(&'a str),
    TableRow(&'a str),
    Comment(&'a str),
    Plugin(&'a str),
    Paragraph(&'a str),
}

fn classify(line: &str) -> Line<'_> {
    if line.trim().is_empty() && !line.starts_with(' ') {
        return Line::Blank;
    }

    if let Some((count, rest)) = strip_run(line, '!') {
        return Line::Heading {
            level: count as u8,
            text: strip_space(rest),
        };
    }

    for kind in [ListKind::Unordered, ListKind::Ordered] {
        if let Some((depth, rest)) = strip_run(line, kind.marker()) {
            return Line::ListItem {
                depth,
                kind,
                text: strip_space(rest),
            };
        }
    }

    if let Some(rest) = line.strip_prefix(' ') {
        return Line::Preformatted(rest);
    }
    if line.starts_with(',') {
        return Line::TableRow(line);
    }
    if let Some(rest) = line.strip_prefix("//") {
        return Line::Comment(strip_space(rest));
    }
    if let Some(rest) = line.strip_prefix("{{") {
        return Line::Plugin(rest.trim_start_matches(' '));
    }

    Line::Paragraph(line)
}

/// Counts up to three leading `marker`s. Headings and lists share the cap.
fn strip_run(line: &str, marker: char) -> Option<(usize, &str)> {
    let count = line
        .chars()
        .take(MAX_LIST_DEPTH)
        .take_while(|&c| c == marker)
        .count();
    // Markers are ASCII, so `count` is also a byte offset.
    (count > 0).then(|| (count, &line[count..]))
}

fn strip_space(text: &str) -> &str {
    text.strip_prefix(' ').unwrap_or(text)
}

/// Incremental line parser. Feed it lines in order, then call [`Parser::finish`].
#[derive(Debug, Default)]
pub struct Parser {
    state: BlockState,
    events: Vec<Event>,
    plugin_open: bool,
    lines: usize,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes one line, without its line terminator.
    pub fn feed_line(&mut self, line: &str) {
        self.lines += 1;

        if self.plugin_open {
            self.continue_plugin(line);
            return;
        }

        match classify(line) {
            Line::Blank => self.advance(BlockState::default()),
            Line::Heading { level, text } => {
                self.advance(BlockState::default());
                self.events.push(Event::HeadingOpen { level });
                self.events.push(Event::Inline(parse_inline(text)));
                self.events.push(Event::HeadingClose { level });
            }
            Line::ListItem { depth, kind, text } => {
                let list = self.state.list.item(depth, kind);
                self.advance(BlockState::list(list));
                self.events.push(Event::ListItemOpen);
                self.events.push(Event::Inline(parse_inline(text)));
                self.events.push(Event::ListItemClose);
            }
            Line::Preformatted(text) => {
                let continuing = self.state.preformatted;
                self.advance(BlockState::preformatted());
                if let Some(Event::Preformatted { content }) = self.events.last_mut() {
                    if continuing {
                        content.push('\n');
                    }
                    content.push_str(text);
                }
            }
            Line::TableRow(row) => {
                let header = !self.state.table;
                self.advance(BlockState::table());
                self.push_row(row, header);
            }
            Line::Comment(text) => {
                let next = self.state.across_comment();
                self.advance(next);
                self.events.push(Event::Comment {
                    content: text.to_string(),
                });
            }
            Line::Plugin(text) => {
                self.advance(BlockState::default());
                self.open_plugin(text);
            }
            Line::Paragraph(text) => {
                let continuing = self.state.paragraph;
                self.advance(BlockState::paragraph());
                self.push_paragraph_line(text, continuing);
            }
        }
    }

    /// Closes whatever is still open and returns the stream.
    pub fn finish(mut self) -> Vec<Event> {
        self.advance(BlockState::default());
        debug!(
            lines = self.lines,
            events = self.events.len(),
            "parsed fswiki document"
        );
        self.events
    }

    fn advance(&mut self, next: BlockState) {
        self.events.extend(transition(&self.state, &next));
        self.state = next;
    }

    fn push_paragraph_line(&mut self, text: &str, continuing: bool) {
        if continuing {
            if let Some(Event::Inline(children)) = self.events.last_mut() {
                children.push(Inline::SoftBreak);
                children.extend(parse_inline(text));
                return;
            }
        }
        self.events.push(Event::Inline(parse_inline(text)));
    }

    fn push_row(&mut self, row: &str, header: bool) {
        let (open, close) = if header {
            (Event::TableHeaderCellOpen, Event::TableHeaderCellClose)
        } else {
            (Event::TableDataCellOpen, Event::TableDataCellClose)
        };

        self.events.push(Event::TableRowOpen);
        for cell in split_row(row) {
            self.events.push(open.clone());
            self.events.push(Event::Inline(parse_inline(cell)));
            self.events.push(close.clone());
        }
        self.events.push(Event::TableRowClose);
    }

    fn open_plugin(&mut self, text: &str) {
        if let Some(inner) = text.strip_suffix("}}") {
            let (tag, content) = inner.split_once(' ').unwrap_or((inner, ""));
            self.events.push(Event::Plugin {
                tag: tag.to_string(),
                content: content.to_string(),
            });
            return;
        }

        trace!(tag = text, line = self.lines, "plugin block opened");
        self.events.push(Event::Plugin {
            tag: text.to_string(),
            content: "\n".to_string(),
        });
        self.plugin_open = true;
    }

    fn continue_plugin(&mut self, line: &str) {
        if line == "}}" {
            trace!(line = self.lines, "plugin block closed");
            self.plugin_open = false;
            return;
        }
        if let Some(Event::Plugin { content, .. }) = self.events.last_mut() {
            content.push_str(line);
            content.push('\n');
        }
    }
}

/// Parses a whole document held in memory.
pub fn parse_document(source: &str) -> Vec<Event> {
    let mut parser = Parser::new();
    for line in source.lines() {
        parser.feed_line(line);
    }
    parser.finish()
}

/// Parses a document line by line from a reader. Only reading can fail.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<Vec<Event>, FormatError> {
    let mut parser = Parser::new();
    for line in reader.lines() {
        parser.feed_line(&line?);
    }
    Ok(parser.finish())
}
