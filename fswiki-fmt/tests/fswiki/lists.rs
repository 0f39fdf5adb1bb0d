//! List nesting: markers, depths and remembered kinds

use fswiki_fmt::format::Format;
use fswiki_fmt::format_source;
use fswiki_fmt::formats::fswiki::FswikiFormat;
use fswiki_fmt::ir::events::Event;

fn marker_run(line: &str) -> (char, usize) {
    let marker = line.chars().next().unwrap();
    (marker, line.chars().take_while(|&c| c == marker).count())
}

#[test]
fn test_three_level_mixed_list_keeps_marker_count_per_depth() {
    let source = "*one\n++two\n***three\n++ two again\n* one again\n";
    let output = format_source(source).unwrap();
    assert_eq!(
        output,
        "* one\n++ two\n*** three\n++ two again\n* one again\n"
    );

    let depths: Vec<usize> = output.lines().map(|line| marker_run(line).1).collect();
    assert_eq!(depths, vec![1, 2, 3, 2, 1]);
}

#[test]
fn test_closing_deep_levels_uses_each_levels_kind() {
    let events = FswikiFormat::default()
        .parse("+ a\n** b\n+++ c\n\ntext")
        .unwrap();
    let list_events: Vec<&Event> = events
        .iter()
        .filter(|e| {
            matches!(
                e,
                Event::UnorderedListOpen
                    | Event::UnorderedListClose
                    | Event::OrderedListOpen
                    | Event::OrderedListClose
            )
        })
        .collect();
    assert_eq!(
        list_events,
        vec![
            &Event::OrderedListOpen,
            &Event::UnorderedListOpen,
            &Event::OrderedListOpen,
            &Event::OrderedListClose,
            &Event::UnorderedListClose,
            &Event::OrderedListClose,
        ]
    );
}

#[test]
fn test_deeper_item_does_not_touch_shallower_kind() {
    let output = format_source("+ a\n*** deep\n+ back\n").unwrap();
    assert_eq!(output, "+ a\n*** deep\n+ back\n");
}

#[test]
fn test_kind_switch_at_top_level_starts_a_new_list() {
    let output = format_source("* a\n+ b\n").unwrap();
    assert_eq!(output, "* a\n\n+ b\n");
}

#[test]
fn test_list_is_separated_from_surrounding_blocks() {
    let output = format_source("intro\n* a\n* b\noutro\n").unwrap();
    assert_eq!(output, "intro\n\n* a\n* b\n\noutro\n");
}

#[test]
fn test_marker_runs_beyond_three_are_text() {
    let output = format_source("****deep\n").unwrap();
    assert_eq!(output, "*** *deep\n");
}
