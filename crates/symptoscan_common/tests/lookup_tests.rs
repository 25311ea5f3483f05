//! End-to-end lookup behaviour: raw input → normalized keys → conditions.

use std::sync::Arc;
use symptoscan_common::fallback_table::TableEntry;
use symptoscan_common::{duration_advisory, normalize, FallbackTable, Resolver};

fn lookup(raw: &str) -> Vec<String> {
    Resolver::default().resolve(&normalize(raw)).into_vec()
}

#[test]
fn test_normalized_keys() {
    assert_eq!(normalize("Fever, Cough , ").keys, vec!["fever", "cough"]);
}

#[test]
fn test_fever() {
    assert_eq!(
        lookup("fever"),
        vec!["Flu", "Typhoid Fever", "COVID-19", "Common Cold"]
    );
}

#[test]
fn test_multi_symptom_union() {
    let result = lookup("Fever, runny nose, chills");
    assert_eq!(
        result,
        vec![
            "Flu",
            "Typhoid Fever",
            "COVID-19",
            "Common Cold",
            "Allergy",
            "Malaria",
            "Infection"
        ]
    );
}

#[test]
fn test_unknown_symptom() {
    assert!(lookup("xyzzy").is_empty());
}

#[test]
fn test_partial_term_widens() {
    let result = lookup("ache");
    for name in ["Flu", "Infection", "Vitamin Deficiency", "Migraine"] {
        assert!(result.iter().any(|r| r == name), "missing {}", name);
    }
}

#[test]
fn test_known_key_ignores_unknown_siblings() {
    // the unknown term does not trigger the substring pass once one key matched
    assert_eq!(lookup("xyzzy, wheezing"), vec!["Asthma"]);
}

#[test]
fn test_single_letter_matches_broadly() {
    // no minimum term length in the substring pass
    assert!(lookup("u").len() > 10);
}

#[test]
fn test_substituted_table() {
    let table = FallbackTable::from_entries(vec![
        TableEntry {
            key: "fever".to_string(),
            conditions: vec!["Test Fever".to_string()],
        },
        TableEntry {
            key: "empty".to_string(),
            conditions: Vec::new(),
        },
    ])
    .unwrap();
    let resolver = Resolver::new(Arc::new(table));

    assert_eq!(resolver.resolve_raw("Fever").into_vec(), vec!["Test Fever"]);
    assert!(resolver.resolve_raw("empty").is_empty());
    assert!(resolver.resolve_raw("cough").is_empty());
}

#[test]
fn test_repeatable() {
    let first = lookup("nausea, gas, ache");
    for _ in 0..5 {
        assert_eq!(lookup("nausea, gas, ache"), first);
    }
}

#[test]
fn test_duration_advisory() {
    assert!(duration_advisory("1-2").is_some());
    assert!(duration_advisory("2+").is_some());
    assert!(duration_advisory("<1").is_none());
}
