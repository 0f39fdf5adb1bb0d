//! Inline markup: `'''strong'''` and `''emphasis''`.

use crate::ir::events::Inline;

pub const STRONG: &str = "'''";
pub const EMPHASIS: &str = "''";

struct Span<'a> {
    open: Inline,
    close: Inline,
    inner: &'a str,
    len: usize,
}

/// Parses one line of inline text.
///
/// Markers are matched left to right. At each quote pair a strong span is
/// tried first, then an emphasis span; a span runs to the next matching
/// marker. Unmatched markers stay literal. Span interiors are parsed again,
/// so the two styles nest either way round.
pub fn parse_inline(text: &str) -> Vec<Inline> {
    let mut children = Vec::new();
    let mut literal_start = 0;
    let mut cursor = 0;

    while let Some(offset) = text[cursor..].find(EMPHASIS) {
        let at = cursor + offset;
        match match_span(&text[at..]) {
            Some(span) => {
                push_text(&mut children, &text[literal_start..at]);
                children.push(span.open);
                children.extend(parse_inline(span.inner));
                children.push(span.close);
                cursor = at + span.len;
                literal_start = cursor;
            }
            // `'` is one byte, so this stays on a char boundary.
            None => cursor = at + 1,
        }
    }

    push_text(&mut children, &text[literal_start..]);
    children
}

fn match_span(rest: &str) -> Option<Span<'_>> {
    if let Some(body) = rest.strip_prefix(STRONG) {
        if let Some(end) = body.find(STRONG) {
            return Some(Span {
                open: Inline::StrongOpen,
                close: Inline::StrongClose,
                inner: &body[..end],
                len: STRONG.len() * 2 + end,
            });
        }
    }

    let body = rest.strip_prefix(EMPHASIS)?;
    let end = body.find(EMPHASIS)?;
    Some(Span {
        open: Inline::EmphasisOpen,
        close: Inline::EmphasisClose,
        inner: &body[..end],
        len: EMPHASIS.len() * 2 + end,
    })
}

fn push_text(children: &mut Vec<Inline>, text: &str) {
    if !text.is_empty() {
        children.push(Inline::Text(text.to_string()));
    }
}

/// Renders an inline run back to markup.
///
/// Text is trimmed where it meets a marker and at the end of every rendered
/// line. Two places keep their whitespace:
///
/// - the start of a line, where a tab in front of `*` or `!` stops the line
///   from being read back as a list item or heading;
/// - between a literal `'` and a marker, where dropping it would merge the
///   quotes into a different marker.
pub fn render_inline(children: &[Inline]) -> String {
    let mut out = String::new();
    let mut line_start = true;
    for (index, child) in children.iter().enumerate() {
        match child {
            Inline::Text(text) => {
                let before = if line_start { None } else { out.chars().last() };
                let after = children.get(index + 1).and_then(first_char);
                push_trimmed(&mut out, text, line_start, before, after);
            }
            Inline::SoftBreak => out.push('\n'),
            Inline::StrongOpen | Inline::StrongClose => out.push_str(STRONG),
            Inline::EmphasisOpen | Inline::EmphasisClose => out.push_str(EMPHASIS),
        }
        line_start = matches!(child, Inline::SoftBreak);
    }
    out
}

/// First character `child` renders, or `None` when it ends the line.
fn first_char(child: &Inline) -> Option<char> {
    match child {
        Inline::Text(text) => text.chars().next(),
        Inline::SoftBreak => None,
        Inline::StrongOpen
        | Inline::StrongClose
        | Inline::EmphasisOpen
        | Inline::EmphasisClose => Some('\''),
    }
}

fn push_trimmed(
    out: &mut String,
    text: &str,
    line_start: bool,
    before: Option<char>,
    after: Option<char>,
) {
    let body = text.trim();
    let line_end = after.is_none();

    if body.is_empty() {
        let between_quotes = before == Some('\'') && after == Some('\'');
        if !line_end && (line_start || between_quotes) {
            out.push_str(text);
        }
        return;
    }

    if line_start || (before == Some('\'') && body.starts_with('\'')) {
        out.push_str(&text[..text.len() - text.trim_start().len()]);
    }
    out.push_str(body);
    if !line_end && after == Some('\'') && body.ends_with('\'') {
        out.push_str(&text[text.trim_end().len()..]);
    }
}
