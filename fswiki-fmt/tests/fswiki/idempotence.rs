//! Formatting formatted text changes nothing

use fswiki_fmt::{format_source, format_source_with_rules, FormattingRules, TableAlign};
use proptest::prelude::*;

fn line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[!*+]{1,4} ?[a-z' ]{0,10}",
        " [a-z ]{0,8}",
        ",[a-zあ-お' ,\"\t\u{3000}]{0,12}",
        ",[ \t\u{3000}]{0,2}\"[a-z ,']{0,6}\"[a-z \t]{0,2},[a-z']{0,4}",
        "// ?[a-z ]{0,8}",
        "\\{\\{[a-z ]{0,6}\\}\\}",
        "\\{\\{[a-z]{1,4}",
        Just("}}".to_string()),
        "[a-zあ-お'\t\u{3000}][a-zあ-お' \t\u{3000}]{0,12}",
    ]
}

fn document() -> impl Strategy<Value = String> {
    prop::collection::vec(line(), 0..24).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn format_is_idempotent(source in document()) {
        let once = format_source(&source).unwrap();
        let twice = format_source(&once).unwrap();
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn format_is_idempotent_for_every_table_layout(
        source in document(),
        left in any::<bool>(),
        space in any::<bool>(),
    ) {
        let rules = FormattingRules {
            table_align: if left { TableAlign::Left } else { TableAlign::Right },
            table_insert_trailing_space: space,
        };
        let once = format_source_with_rules(&source, &rules).unwrap();
        let twice = format_source_with_rules(&once, &rules).unwrap();
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn output_never_ends_with_a_blank_line(source in document()) {
        let output = format_source(&source).unwrap();
        prop_assert!(!output.ends_with("\n\n"));
    }
}
