//! Table layout: alignment, trailing space and comma quoting

use fswiki_fmt::format::Format;
use fswiki_fmt::formats::fswiki::FswikiFormat;
use fswiki_fmt::ir::events::{Event, Inline};
use fswiki_fmt::{format_source, format_source_with_rules, FormattingRules, TableAlign};
use unicode_width::UnicodeWidthStr;

const TABLE: &str = include_str!("fixtures/table.fswiki");

fn rules(table_align: TableAlign, table_insert_trailing_space: bool) -> FormattingRules {
    FormattingRules {
        table_align,
        table_insert_trailing_space,
    }
}

#[test]
fn test_right_aligned_without_space() {
    let output = format_source_with_rules(TABLE, &rules(TableAlign::Right, false)).unwrap();
    assert_eq!(
        output,
        concat!(
            ",  Name,  Price,      Note\n",
            ", apple,\"1,200\", ''fresh''\n",
            ",バナナ,     80,          \n",
            ",cherry,\"3,000\",'''sale'''\n",
        )
    );
}

#[test]
fn test_right_aligned_with_space() {
    let output = format_source_with_rules(TABLE, &rules(TableAlign::Right, true)).unwrap();
    assert_eq!(
        output,
        concat!(
            ",  Name ,  Price ,      Note\n",
            ", apple ,\"1,200\" , ''fresh''\n",
            ",バナナ ,     80 ,          \n",
            ",cherry ,\"3,000\" ,'''sale'''\n",
        )
    );
}

#[test]
fn test_left_aligned_with_space() {
    let output = format_source_with_rules(TABLE, &rules(TableAlign::Left, true)).unwrap();
    assert_eq!(
        output,
        concat!(
            ",Name   ,Price   ,Note\n",
            ",apple  ,\"1,200\" ,''fresh''\n",
            ",バナナ ,80      ,\n",
            ",cherry ,\"3,000\" ,'''sale'''\n",
        )
    );
}

#[test]
fn test_left_aligned_without_space() {
    let output = format_source_with_rules(TABLE, &rules(TableAlign::Left, false)).unwrap();
    assert_eq!(
        output,
        concat!(
            ",Name  ,Price  ,Note\n",
            ",apple ,\"1,200\",''fresh''\n",
            ",バナナ,80     ,\n",
            ",cherry,\"3,000\",'''sale'''\n",
        )
    );
}

#[test]
fn test_every_column_has_one_display_width() {
    let output = format_source("ab,\n,a,bb\n,ccc,d\n").unwrap();
    let rows: Vec<&str> = output.lines().filter(|l| l.starts_with(',')).collect();
    assert_eq!(rows, vec![",  a,bb", ",ccc, d"]);

    let widths: Vec<Vec<usize>> = rows
        .iter()
        .map(|row| row[1..].split(',').map(|cell| cell.width()).collect())
        .collect();
    assert_eq!(widths[0], widths[1]);
}

#[test]
fn test_comma_cell_is_quoted_and_parses_back_to_one_cell() {
    let format = FswikiFormat::default();
    let events = vec![
        Event::TableOpen,
        Event::TableRowOpen,
        Event::TableHeaderCellOpen,
        Event::Inline(vec![Inline::Text("x,y".to_string())]),
        Event::TableHeaderCellClose,
        Event::TableRowClose,
        Event::TableClose,
    ];
    let output = format.serialize(&events).unwrap();
    assert_eq!(output, ",\"x,y\"\n");
    assert_eq!(format.parse(&output).unwrap(), events);
}

#[test]
fn test_short_rows_are_backfilled() {
    let output = format_source(",a\n,b,c,d\n").unwrap();
    assert_eq!(output, ",a, , \n,b,c,d\n");
}

#[test]
fn test_separate_tables_are_laid_out_independently() {
    let output = format_source(",a,bbbbbb\n\n,cccccc,d\n").unwrap();
    assert_eq!(output, ",a,bbbbbb\n\n,cccccc,d\n");
}

#[test]
fn test_quote_after_tab_or_ideographic_space_is_a_quoted_field() {
    let once = format_source(",\t\"a\"b,c\n").unwrap();
    assert_eq!(once, ",a,c\n");
    assert_eq!(format_source(&once).unwrap(), once);

    let once = format_source(",\u{3000}\"x,y\"z\n").unwrap();
    assert_eq!(once, ",\"x,y\"\n");
    assert_eq!(format_source(&once).unwrap(), once);
}

#[test]
fn test_empty_quoted_field_after_tab_stays_empty() {
    let once = format_source(",\t\"\"").unwrap();
    assert_eq!(once, ",\n");
    assert_eq!(format_source(&once).unwrap(), once);
}

#[test]
fn test_interior_cell_text_hugs_markup() {
    let output = format_source(",a '''b''' c,x\n").unwrap();
    assert_eq!(output, ",a'''b'''c,x\n");
    assert_eq!(format_source(&output).unwrap(), output);
}
