//! Catalog loading and nearest-name lookup through the asset layer.

mod common;

use common::fixtures::catalogs;
use common::TestWorkspace;
use dominant_colors::{NearestColorMatcher, Rgb};
use huename::assets::{AssetLoader, AssetSource};
use huename::error::PipelineError;
use huename::services::CatalogStore;
use pretty_assertions::assert_eq;

fn store_for(ws: &TestWorkspace, text: &str) -> CatalogStore {
    let path = ws.write_catalog(text);
    CatalogStore::new(AssetLoader::new(Some(path), None))
}

#[test]
fn test_two_row_catalog() {
    let ws = TestWorkspace::new();
    let store = store_for(&ws, catalogs::RED_BLUE);
    let catalog = store.get().unwrap();

    let names: Vec<&str> = catalog.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Red", "Blue"]);
    assert_eq!(catalog.get("Red").unwrap().color, Rgb::new(255, 0, 0));
    assert_eq!(catalog.get("Blue").unwrap().color, Rgb::new(0, 0, 255));
    assert!(matches!(store.source(), AssetSource::File(_)));
}

#[test]
fn test_repeated_loads_share_catalog() {
    let ws = TestWorkspace::new();
    let store = store_for(&ws, catalogs::PRIMARIES);

    let first = store.get().unwrap();
    // Later edits to the file are not picked up by the same store
    ws.write_catalog(catalogs::RED_BLUE);
    let second = store.get().unwrap();

    assert!(std::sync::Arc::ptr_eq(&first, &second));
    assert_eq!(second.len(), 6);
}

#[test]
fn test_near_blue_named_blue() {
    let ws = TestWorkspace::new();
    let catalog = store_for(&ws, catalogs::RED_BLUE).get().unwrap();

    let found = NearestColorMatcher::new(&catalog)
        .find_nearest(Rgb::new(10, 0, 250))
        .unwrap();
    assert_eq!(found.name(), "Blue");
}

#[test]
fn test_malformed_row_reports_source() {
    let ws = TestWorkspace::new();
    let store = store_for(&ws, "red,Red,#FF0000,255,0,0\nblue,Blue,#0000FF,0,0\n");

    match store.get().unwrap_err() {
        PipelineError::CatalogLoad {
            source_name,
            reason,
        } => {
            assert!(source_name.ends_with("colors.csv"), "{source_name}");
            assert!(reason.contains("line 2"), "{reason}");
        }
        other => panic!("expected CatalogLoad, got {other:?}"),
    }
}

#[test]
fn test_quoted_catalog_names() {
    let ws = TestWorkspace::new();
    let catalog = store_for(&ws, catalogs::QUOTED).get().unwrap();

    let names: Vec<&str> = catalog.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Amber", "Air Force Blue (Raf)", "Blue, Crayola"]);

    let matcher = NearestColorMatcher::new(&catalog);
    assert_eq!(matcher.find_nearest(Rgb::new(250, 190, 5)).unwrap().name(), "Amber");
    assert_eq!(
        matcher.find_nearest(Rgb::new(30, 120, 250)).unwrap().name(),
        "Blue, Crayola"
    );
}

#[test]
fn test_missing_catalog_file() {
    let ws = TestWorkspace::new();
    let store = CatalogStore::new(AssetLoader::new(Some(ws.path("nope.csv")), None));
    assert!(matches!(
        store.get().unwrap_err(),
        PipelineError::CatalogLoad { .. }
    ));
}

#[test]
fn test_embedded_catalog_matches_itself() {
    let catalog = CatalogStore::new(AssetLoader::default()).get().unwrap();
    let matcher = NearestColorMatcher::new(&catalog);

    for entry in catalog.iter() {
        let found = matcher.find_nearest(entry.color).unwrap();
        assert_eq!(found.distance, 0.0);
        assert_eq!(found.entry.color, entry.color);
    }
}

#[test]
fn test_embedded_duplicates_resolve_to_first() {
    let catalog = CatalogStore::new(AssetLoader::default()).get().unwrap();
    let matcher = NearestColorMatcher::new(&catalog);

    assert_eq!(matcher.find_nearest(Rgb::new(255, 0, 255)).unwrap().name(), "Fuchsia");
    assert_eq!(matcher.find_nearest(Rgb::new(0, 255, 255)).unwrap().name(), "Aqua");
    assert_eq!(matcher.find_nearest(Rgb::new(0, 0, 130)).unwrap().name(), "Navy");
}
