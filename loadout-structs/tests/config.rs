use loadout_structs::config::*;
use std::io::Write;

#[test]
fn test_defaults_match_reference_run() {
    let config = RunConfig::default();
    assert_eq!(config.cost_budget_gold, 250.0);
    assert_eq!(config.weight_budget_lbs, 610.0);
    assert_eq!(config.max_attempts, 250);
    assert_eq!(config.max_violations, 100);
    assert_eq!(config.p_uniform, 0.95);
    assert_eq!(config.scaling_constant, 0.5);
    assert!(config.seed().is_none());
    assert!(!config.lenient);
    assert!(!config.parallel);
    assert_eq!(config.url, DEFAULT_URL);
}

#[test]
fn test_load_inline_json_fills_defaults() {
    let config = RunConfig::load(r#"{"cost_budget_gold": 10, "seed": "abc"}"#).unwrap();
    assert_eq!(config.cost_budget_gold, 10.0);
    assert_eq!(config.cost_budget_base_units(), 1000.0);
    assert_eq!(config.seed().map(String::as_str), Some("abc"));
    assert_eq!(config.max_attempts, 250);
    assert_eq!(config.table_selector, DEFAULT_TABLE_SELECTOR);
}

#[test]
fn test_load_rejects_unknown_fields() {
    assert!(RunConfig::load(r#"{"gold": 10}"#).is_err());
}

#[test]
fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!("loadout-config-{}.json", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    write!(file, r#"{{"weight_budget_lbs": 5, "lenient": true}}"#).unwrap();
    drop(file);

    let config = RunConfig::load(path.to_str().unwrap()).unwrap();
    assert_eq!(config.weight_budget_lbs, 5.0);
    assert!(config.lenient);
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_load_missing_file_errors() {
    assert!(RunConfig::load("/definitely/not/here.json").is_err());
}
