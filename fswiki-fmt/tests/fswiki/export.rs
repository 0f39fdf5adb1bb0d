//! Canonical output for whole documents

use fswiki_fmt::format_source;
use insta::assert_snapshot;

const KITCHENSINK: &str = include_str!("fixtures/kitchensink.fswiki");
const KITCHENSINK_FORMATTED: &str = include_str!("fixtures/kitchensink.formatted.fswiki");

#[test]
fn test_kitchensink_matches_fixture() {
    let output = format_source(KITCHENSINK).unwrap();
    assert_eq!(output, KITCHENSINK_FORMATTED);
}

#[test]
fn test_formatted_kitchensink_is_a_fixed_point() {
    let output = format_source(KITCHENSINK_FORMATTED).unwrap();
    assert_eq!(output, KITCHENSINK_FORMATTED);
}

#[test]
fn test_heading_then_paragraph() {
    let output = format_source("!Title\n\nSome text here").unwrap();
    assert_snapshot!(output, @r"
    ! Title

    Some text here
    ");
}

#[test]
fn test_blank_lines_collapse_to_one() {
    let output = format_source("\n\n!!Top\n\n\n\nbody\n\n\n").unwrap();
    assert_snapshot!(output, @r"
    !! Top

    body
    ");
}

#[test]
fn test_inline_text_is_trimmed_against_markup() {
    let output = format_source("a '''b ''c'' d''' e   \nnext ''line''").unwrap();
    assert_snapshot!(output, @r"
    a'''b''c''d'''e
    next''line''
    ");
}

#[test]
fn test_mixed_blocks() {
    let source = "!!! Report\n* done\n* todo\n,k,v\n,key,value\n{{toc}}\nclosing words\n";
    let output = format_source(source).unwrap();
    assert_snapshot!(output, @r"
    !!! Report

    * done
    * todo

    ,  k,    v
    ,key,value

    {{toc}}

    closing words
    ");
}

#[test]
fn test_crlf_input_gives_lf_output() {
    let output = format_source("!Title\r\n\r\ntext\r\n").unwrap();
    assert_eq!(output, "! Title\n\ntext\n");
}

#[test]
fn test_empty_document() {
    assert_eq!(format_source("").unwrap(), "");
    assert_eq!(format_source("\n\n").unwrap(), "");
}
