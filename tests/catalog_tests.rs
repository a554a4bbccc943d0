//! Catalog loading integration tests.
//!
//! These tests load catalogs from real files and exercise the one-shot
//! fallback and the empty-catalog failure mode.

use std::io::Write;

use ccg_position::cards::{load_catalog, source_for, CatalogSource, CatalogStatus, FileSource};
use ccg_position::core::CatalogError;
use tempfile::NamedTempFile;

const CARDS: &str = r#"{
    "cards": {
        "Grizzly Bears": {"types": ["CREATURE"], "power": 2, "toughness": 2},
        "Shock": {"types": ["INSTANT"], "text": "Shock deals 2 damage to any target."}
    }
}"#;

fn catalog_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

/// Test loading straight from the primary file.
#[test]
fn test_load_from_file() {
    let file = catalog_file(CARDS);
    let source = FileSource::new(file.path());

    let load = load_catalog(&source, None);

    assert!(load.status.is_loaded());
    assert_eq!(load.catalog.len(), 2);
    assert!(load.catalog.is_creature_like("Grizzly Bears"));
    assert!(load.catalog.is_spell_like("Shock"));
    assert_eq!(load.catalog.lookup("Grizzly Bears").and_then(|c| c.stats()).as_deref(), Some("2/2"));
}

/// Test falling back when the primary file is missing.
#[test]
fn test_fallback_on_missing_primary() {
    let dir = tempfile::tempdir().unwrap();
    let missing = FileSource::new(dir.path().join("cards.json"));
    let file = catalog_file(CARDS);
    let fallback = FileSource::new(file.path());

    let load = load_catalog(&missing, Some(&fallback));

    assert_eq!(
        load.status,
        CatalogStatus::Loaded {
            source: file.path().display().to_string()
        }
    );
    assert_eq!(load.catalog.len(), 2);
}

/// Test that both sources failing leaves an empty, usable catalog.
#[test]
fn test_both_sources_fail() {
    let dir = tempfile::tempdir().unwrap();
    let primary = FileSource::new(dir.path().join("a.json"));
    let broken = catalog_file("{ not json");
    let fallback = FileSource::new(broken.path());

    let load = load_catalog(&primary, Some(&fallback));

    assert!(load.catalog.is_empty());
    assert!(!load.catalog.is_creature_like("Grizzly Bears"));
    assert!(!load.catalog.is_spell_like("Shock"));
    match load.status {
        CatalogStatus::Failed { message } => assert!(message.contains("invalid catalog JSON")),
        other => panic!("expected failure, got {other:?}"),
    }
}

/// Test that parse errors name their origin.
#[test]
fn test_parse_error_names_source() {
    let broken = catalog_file("42");
    let source = FileSource::new(broken.path());

    match source.load() {
        Err(CatalogError::Parse { origin, .. }) => {
            assert_eq!(origin, broken.path().display().to_string());
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

/// Test that plain paths map to file sources.
#[test]
fn test_source_for_file_path() {
    let file = catalog_file(CARDS);
    let location = file.path().display().to_string();
    let source = source_for(&location);

    assert_eq!(source.describe(), location);
    assert_eq!(source.load().unwrap().len(), 2);
}

/// Test that URLs fail cleanly without the `http` feature.
#[cfg(not(feature = "http"))]
#[test]
fn test_url_without_http_feature() {
    let source = source_for("http://localhost:1/cards");
    assert!(matches!(source.fetch(), Err(CatalogError::Unsupported { .. })));
}
