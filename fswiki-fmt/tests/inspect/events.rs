use fswiki_fmt::FormatRegistry;
use insta::assert_snapshot;
use serde_json::Value;

const KITCHENSINK: &str = include_str!("../fswiki/fixtures/kitchensink.fswiki");

#[test]
fn test_treeviz_of_small_document() {
    let registry = FormatRegistry::default();
    let events = registry
        .parse("!Title\n* item ''one''\n,a,b\n//row note\n", "fswiki")
        .unwrap();
    let tree = registry.serialize(&events, "events-treeviz").unwrap();
    assert_snapshot!(tree, @r#"
    ⊤ h1
      ↵ Title
    ☰ unordered
      • item
        ↵ item''one''
    ▦ table
      ≡ row
        ▣ header
          ↵ a
        ▣ header
          ↵ b
      " row note
    "#);
}

#[test]
fn test_events_json_is_balanced() {
    let registry = FormatRegistry::default();
    let events = registry.parse(KITCHENSINK, "fswiki").unwrap();
    let json = registry.serialize(&events, "events-json").unwrap();

    let value: Value = serde_json::from_str(&json).unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), events.len());

    let opens = events.iter().filter(|e| e.is_open()).count();
    let closes = events.iter().filter(|e| e.is_close()).count();
    assert_eq!(opens, closes);
}

#[test]
fn test_inspection_formats_reject_options() {
    let registry = FormatRegistry::default();
    let mut options = std::collections::HashMap::new();
    options.insert("table-align".to_string(), "left".to_string());

    assert!(registry
        .serialize_with_options(&[], "events-json", &options)
        .is_err());
    assert!(registry
        .serialize_with_options(&[], "fswiki", &options)
        .is_ok());
}

#[test]
fn test_heading_level_is_the_marker_count() {
    let registry = FormatRegistry::default();
    let events = registry.parse("!!!big\n!!mid\n!small\n", "fswiki").unwrap();
    let json = registry.serialize(&events, "events-json").unwrap();

    let value: Value = serde_json::from_str(&json).unwrap();
    let levels: Vec<u64> = value
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|item| item.get("HeadingOpen"))
        .map(|open| open["level"].as_u64().unwrap())
        .collect();
    assert_eq!(levels, vec![3, 2, 1]);

    let tree = registry.serialize(&events, "events-treeviz").unwrap();
    assert!(tree.starts_with("⊤ h3\n"));
}
