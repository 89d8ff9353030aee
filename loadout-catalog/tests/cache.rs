use loadout_catalog::*;
use loadout_core::{Catalog, RawEntry};
use std::path::PathBuf;

fn catalog() -> Catalog {
    Catalog::build(
        vec![
            RawEntry::new("Lantern, hooded", "5 gp", "2 lb."),
            RawEntry::new("Vial", "1 gp", "\u{00BD} lb."),
            RawEntry::new("Candle", "1 cp", ""),
        ],
        0.5,
        false,
    )
    .unwrap()
    .catalog
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("loadout-{}-{}", std::process::id(), name))
}

#[test]
fn test_json_cache() {
    let path = temp_path("catalog.json");
    save_catalog(&path, &catalog()).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("Lantern, hooded"));
    assert_eq!(load_catalog(&path, 0.5).unwrap(), catalog());
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_compressed_cache() {
    let path = temp_path("catalog.zlib");
    save_catalog(&path, &catalog()).unwrap();
    assert_eq!(load_catalog(&path, 0.5).unwrap(), catalog());

    // densities follow the scaling constant given at load time
    let rescaled = load_catalog(&path, 1.0).unwrap();
    assert_eq!(rescaled.items()[0].value_density(), 500.0 / 3.0);
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_missing_cache() {
    assert!(load_catalog(&temp_path("missing.json"), 0.5).is_err());
}
