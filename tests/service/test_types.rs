//! Tests for response type serialization.

use std::collections::HashMap;

use repostats::{LanguageBytes, RepoStats, RepoSummary};

#[test]
fn empty_record_serializes_to_empty_object() {
    let stats = RepoStats::default();
    assert_eq!(serde_json::to_string(&stats).unwrap(), "{}");
}

#[test]
fn populated_record_includes_language_bytes() {
    let mut languages = HashMap::new();
    languages.insert("Rust".to_string(), 1024u64);

    let stats = RepoStats::new(
        RepoSummary {
            full_name: Some("octocat/hello-world".to_string()),
            owner: Some("octocat".to_string()),
            repository: Some("hello-world".to_string()),
        },
        languages,
    );

    let value = serde_json::to_value(&stats).unwrap();
    assert_eq!(value["full_name"], "octocat/hello-world");
    assert_eq!(value["owner"], "octocat");
    assert_eq!(value["repository"], "hello-world");
    assert_eq!(value["languages"]["Rust"]["bytes"], 1024);
}

#[test]
fn language_bytes_wire_shape() {
    let lang = LanguageBytes { bytes: 42 };
    assert_eq!(serde_json::to_string(&lang).unwrap(), r#"{"bytes":42}"#);
}

#[test]
fn absent_summary_fields_are_omitted() {
    let stats = RepoStats::new(
        RepoSummary {
            full_name: Some("acme/widget".to_string()),
            owner: None,
            repository: None,
        },
        HashMap::new(),
    );

    let value = serde_json::to_value(&stats).unwrap();
    assert_eq!(value["full_name"], "acme/widget");
    assert!(value.get("owner").is_none());
    assert!(value.get("languages").is_none());
}

#[test]
fn coordinates_require_owner_and_name() {
    let full = RepoSummary {
        full_name: Some("acme/widget".to_string()),
        owner: Some("acme".to_string()),
        repository: Some("widget".to_string()),
    };
    assert_eq!(full.coordinates(), Some(("acme", "widget")));

    let missing = RepoSummary {
        owner: None,
        ..full.clone()
    };
    assert_eq!(missing.coordinates(), None);
    assert_eq!(missing.display_name(), "acme/widget");
}
