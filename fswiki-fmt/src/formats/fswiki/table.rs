//! Table rows: splitting source rows into cells, and buffering rendered rows
//! until the table closes so columns can be aligned.
//!
//!     A row is a line starting with `,`. Every comma starts a new cell:
//!
//!         ,Name,Price,Note
//!         ,apple,"1,200",''fresh''
//!
//!     A field may be wrapped in double quotes (whitespace between the comma and
//!     the quote is allowed); commas inside the quotes belong to the cell and
//!     anything between the closing quote and the next comma is dropped.
//!
//!     On output each cell is padded to the widest cell of its column, measured
//!     in terminal display columns so wide (CJK) characters count double.

use super::formatting_rules::{FormattingRules, TableAlign};
use super::inline::render_inline;
use crate::ir::events::Inline;
use unicode_width::UnicodeWidthStr;

/// Splits a table row (including its leading comma) into raw cell texts.
pub fn split_row(row: &str) -> Vec<&str> {
    let mut cells = Vec::new();
    let Some(mut rest) = row.strip_prefix(',') else {
        return cells;
    };

    loop {
        let (cell, remainder) = take_field(rest);
        cells.push(cell);
        match remainder {
            Some(next) => rest = next,
            None => break,
        }
    }

    cells
}

/// Takes one field starting right after a separating comma. Returns the field
/// and the text following the next separator, if there is one.
fn take_field(rest: &str) -> (&str, Option<&str>) {
    // Same whitespace set that `cell_text` trims, so a written cell reads back the same way.
    if let Some(quoted) = rest.trim_start().strip_prefix('"') {
        if let Some(end) = quoted.find('"') {
            let after = &quoted[end + 1..];
            let next = after.find(',').map(|comma| &after[comma + 1..]);
            return (&quoted[..end], next);
        }
    }

    match rest.find(',') {
        Some(comma) => (&rest[..comma], Some(&rest[comma + 1..])),
        None => (rest, None),
    }
}

/// Renders a cell's inline content, quoting it when it holds a comma.
pub fn cell_text(children: &[Inline]) -> String {
    let text = render_inline(children);
    let text = text.trim();
    if text.contains(',') {
        format!("\"{text}\"")
    } else {
        text.to_string()
    }
}

/// Rows of a table being serialized, held until the table closes.
#[derive(Debug)]
pub struct TableBuffer {
    rows: Vec<Vec<String>>,
    comments: Vec<String>,
    widths: Vec<usize>,
    cell: usize,
}

impl Default for TableBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TableBuffer {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            comments: Vec::new(),
            widths: vec![0],
            cell: 0,
        }
    }

    pub fn start_row(&mut self) {
        self.cell = 0;
        self.rows.push(vec![String::new(); self.widths.len()]);
        self.comments.push(String::new());
    }

    /// Opens the next cell, widening every buffered row if this row is the
    /// first to reach a new column.
    pub fn start_cell(&mut self) {
        while self.cell >= self.widths.len() {
            self.widths.push(0);
            for row in &mut self.rows {
                row.push(String::new());
            }
        }
    }

    pub fn end_cell(&mut self) {
        self.cell += 1;
    }

    pub fn set_cell(&mut self, text: String) {
        let Some(row) = self.rows.last_mut() else {
            return;
        };
        let width = text.width();
        if let Some(max) = self.widths.get_mut(self.cell) {
            *max = (*max).max(width);
        }
        if let Some(slot) = row.get_mut(self.cell) {
            *slot = text;
        }
    }

    /// Attaches a rendered comment line to the most recently started row.
    pub fn attach_comment(&mut self, line: &str) {
        if let Some(comments) = self.comments.last_mut() {
            comments.push_str(line);
        }
    }

    pub fn render(&self, rules: &FormattingRules) -> String {
        let mut out = String::new();
        for (row, comments) in self.rows.iter().zip(&self.comments) {
            let last = row.len().saturating_sub(1);
            for (index, cell) in row.iter().enumerate() {
                let padding = self.widths[index].saturating_sub(cell.width());
                out.push(',');
                match rules.table_align {
                    TableAlign::Right => {
                        push_spaces(&mut out, padding);
                        out.push_str(cell);
                    }
                    TableAlign::Left => {
                        out.push_str(cell);
                        if index != last {
                            push_spaces(&mut out, padding);
                        }
                    }
                }
                if rules.table_insert_trailing_space && index != last {
                    out.push(' ');
                }
            }
            out.push('\n');
            out.push_str(comments);
        }
        out
    }
}

fn push_spaces(out: &mut String, count: usize) {
    out.extend(std::iter::repeat(' ').take(count));
}
