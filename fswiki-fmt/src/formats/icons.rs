//! Icon mapping for the tree visualization format

/// Get the Unicode icon for an event, by its [`Event::name`](crate::ir::events::Event::name)
///
/// Open and close events of the same construct share an icon; only opens and
/// leaves are ever drawn.
pub fn get_icon(event_name: &str) -> &'static str {
    match event_name {
        "HeadingOpen" | "HeadingClose" => "⊤",
        "UnorderedListOpen" | "UnorderedListClose" => "☰",
        "OrderedListOpen" | "OrderedListClose" => "№",
        "ListItemOpen" | "ListItemClose" => "•",
        "ParagraphOpen" | "ParagraphClose" => "¶",
        "Preformatted" => "𝒱",
        "TableOpen" | "TableClose" => "▦",
        "TableRowOpen" | "TableRowClose" => "≡",
        "TableHeaderCellOpen" | "TableHeaderCellClose" => "▣",
        "TableDataCellOpen" | "TableDataCellClose" => "□",
        "Comment" => "\"",
        "Plugin" => "ƒ",
        "Inline" => "↵",
        _ => "○",
    }
}
