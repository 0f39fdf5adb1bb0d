//! Plugin blocks: single-line calls and verbatim multi-line bodies

use fswiki_fmt::format::Format;
use fswiki_fmt::format_source;
use fswiki_fmt::formats::fswiki::FswikiFormat;
use fswiki_fmt::ir::events::Event;

#[test]
fn test_multi_line_body_is_reproduced_byte_for_byte() {
    let body = "\n  line one   \n\n!! not a heading\n,not,a,table\n\n";
    let source = format!("{{{{pre{body}}}}}\n");
    let output = format_source(&source).unwrap();
    assert_eq!(output, source);

    let start = output.find("{{pre").unwrap() + "{{pre".len();
    let end = output.rfind("}}").unwrap();
    assert_eq!(&output[start..end], body);
}

#[test]
fn test_single_line_plugins_are_normalized() {
    let output = format_source("{{ toc }}\n{{ref  image.png}}\n").unwrap();
    assert_eq!(output, "{{toc}}\n\n{{ref  image.png}}\n");
}

#[test]
fn test_plugin_splits_tag_and_arguments() {
    let events = FswikiFormat::default()
        .parse("{{include FrontPage 3}}")
        .unwrap();
    assert_eq!(
        events,
        vec![Event::Plugin {
            tag: "include".to_string(),
            content: "FrontPage 3".to_string(),
        }]
    );
}

#[test]
fn test_unclosed_plugin_is_closed_at_end_of_document() {
    let output = format_source("{{pre\nstill open\n").unwrap();
    assert_eq!(output, "{{pre\nstill open\n}}\n");
    assert_eq!(format_source(&output).unwrap(), output);
}

#[test]
fn test_plugin_ends_a_paragraph() {
    let output = format_source("text\n{{toc}}\nmore\n").unwrap();
    assert_eq!(output, "text\n\n{{toc}}\n\nmore\n");
}
