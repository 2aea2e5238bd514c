//! Integration tests for catalog loading and queries

use ecotrack::{
    catalog::{CatalogReader, InMemoryCatalog, NoOpCatalog},
    error::{EcoTrackError, ParseErrorKind},
    model::ProductId,
};
use std::io::Write;
use std::path::Path;

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> std::path::PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

fn write_temp(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_seed_catalog() {
    let catalog = InMemoryCatalog::from_json_file(&fixture_path("catalog.json")).unwrap();

    assert_eq!(catalog.len(), 16);
    assert_eq!(
        catalog.categories(),
        vec!["Beverages", "Snacks", "Dairy", "Produce", "Cleaning"]
    );

    let cola = catalog.get(&ProductId::from("bev-001")).unwrap();
    assert_eq!(cola.product_name, "Coca-Cola 12-pack Cans");
    assert!(!cola.is_sustainable);
    assert!((cola.price - 4.99).abs() < 1e-9);
    assert!(cola.description.is_some());
}

#[test]
fn test_find_by_category_respects_flags_and_order() {
    let catalog = InMemoryCatalog::from_json_file(&fixture_path("catalog.json")).unwrap();

    let sustainable = catalog
        .find_by_category("Snacks", &ProductId::from("snk-001"), true, 3)
        .unwrap();
    let ids: Vec<&str> = sustainable.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["snk-002", "snk-004"]);

    let regular = catalog
        .find_by_category("Snacks", &ProductId::from("snk-001"), false, 3)
        .unwrap();
    let ids: Vec<&str> = regular.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["snk-003"]);

    assert!(catalog
        .find_by_category("Toys", &ProductId::from("x"), true, 3)
        .unwrap()
        .is_empty());
}

#[test]
fn test_accepts_plain_id_field() {
    let catalog = InMemoryCatalog::from_json_str(
        r#"[{"id":"a","productName":"A","category":"Snacks","carbonFootprint":1,"packagingWaste":2}]"#,
    )
    .unwrap();
    assert!(catalog.get(&ProductId::from("a")).is_some());
}

#[test]
fn test_duplicate_ids_in_file() {
    let file = write_temp(
        r#"[
            {"_id":"a","productName":"A","category":"Snacks","carbonFootprint":1,"packagingWaste":2},
            {"_id":"a","productName":"B","category":"Snacks","carbonFootprint":3,"packagingWaste":4}
        ]"#,
    );

    match InMemoryCatalog::from_json_file(file.path()) {
        Err(EcoTrackError::Parse {
            context,
            source: ParseErrorKind::DuplicateId(id),
        }) => {
            assert_eq!(id, "a");
            assert!(context.starts_with("loading catalog"));
        }
        other => panic!("expected duplicate id error, got {other:?}"),
    }
}

#[test]
fn test_malformed_json() {
    let file = write_temp(r#"[{"_id": "a", "productName": }]"#);
    let result = InMemoryCatalog::from_json_file(file.path());
    assert!(matches!(
        result,
        Err(EcoTrackError::Parse {
            source: ParseErrorKind::InvalidJson(_),
            ..
        })
    ));
}

#[test]
fn test_missing_required_field() {
    let result = InMemoryCatalog::from_json_str(r#"[{"_id":"a","category":"Snacks"}]"#);
    assert!(result.is_err());
}

#[test]
fn test_missing_file_keeps_path() {
    let result = InMemoryCatalog::from_json_file(Path::new("/definitely/not/here.json"));
    match result {
        Err(EcoTrackError::Io { path, .. }) => {
            assert_eq!(path.unwrap(), Path::new("/definitely/not/here.json"));
        }
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn test_noop_catalog_as_trait_object() {
    let catalog: Box<dyn CatalogReader> = Box::new(NoOpCatalog);
    assert!(catalog
        .find_by_ids(&[ProductId::from("bev-001")])
        .unwrap()
        .is_empty());
}
