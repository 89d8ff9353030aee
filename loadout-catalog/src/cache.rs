use anyhow::{anyhow, Result};
use loadout_core::{Catalog, ItemRecord};
use loadout_utils::{compress_obj, decompress_obj, jsonify_pretty};
use std::{fs, path::Path};

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Writes the parsed catalog to `path`: plain json for `*.json`, zlib-compressed
/// json otherwise.
pub fn save_catalog(path: &Path, catalog: &Catalog) -> Result<()> {
    let records = catalog.to_records();
    let bytes = if is_json(path) {
        jsonify_pretty(&records)?.into_bytes()
    } else {
        compress_obj(&records)?
    };
    fs::write(path, bytes).map_err(|e| anyhow!("Failed to write {}: {}", path.display(), e))
}

pub fn load_catalog(path: &Path, scaling_constant: f64) -> Result<Catalog> {
    let bytes =
        fs::read(path).map_err(|e| anyhow!("Failed to read {}: {}", path.display(), e))?;
    let records: Vec<ItemRecord> = if is_json(path) {
        serde_json::from_slice(&bytes)
            .map_err(|e| anyhow!("Failed to parse {}: {}", path.display(), e))?
    } else {
        decompress_obj(&bytes)?
    };
    Ok(Catalog::from_records(records, scaling_constant)?)
}
