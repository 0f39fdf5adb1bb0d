//! Comment lines inside and outside tables and lists

use fswiki_fmt::format_source;

#[test]
fn test_comment_after_row_stays_with_that_row() {
    let output = format_source(",h,h\n,a,b\n// about a\n,longer,c\n").unwrap();
    assert_eq!(output, ",     h,h\n,     a,b\n//about a\n,longer,c\n");
}

#[test]
fn test_comment_between_list_items_keeps_the_list() {
    let output = format_source("* a\n// note\n** b\n").unwrap();
    assert_eq!(output, "* a\n//note\n** b\n");
}

#[test]
fn test_comment_closes_a_paragraph() {
    let output = format_source("first\n//note\nsecond\n").unwrap();
    assert_eq!(output, "first\n\n//note\nsecond\n");
}

#[test]
fn test_comment_keeps_extra_indentation() {
    let source = "//  indented\n";
    assert_eq!(format_source(source).unwrap(), source);

    let in_table = ",a\n//  indented\n";
    assert_eq!(format_source(in_table).unwrap(), in_table);
}
