mod report;
pub use report::*;

use anyhow::{anyhow, Result};
use loadout_core::{search, Catalog, SearchParams};
use loadout_structs::config::RunConfig;
use loadout_utils::random_seed_string;
use std::path::Path;
use tracing::{info, warn};

pub fn search_params(config: &RunConfig) -> SearchParams {
    SearchParams {
        cost_budget: config.cost_budget_base_units(),
        weight_budget: config.weight_budget_lbs,
        max_attempts: config.max_attempts,
        max_violations: config.max_violations,
        p_uniform: config.p_uniform,
    }
}

/// Loads the catalog from a cache file when given, otherwise scrapes `config.url`.
pub async fn load_catalog(config: &RunConfig, catalog_file: Option<&Path>) -> Result<Catalog> {
    if let Some(path) = catalog_file {
        let catalog = loadout_catalog::load_catalog(path, config.scaling_constant)?;
        info!("loaded {} items from {}", catalog.len(), path.display());
        return Ok(catalog);
    }

    let entries = loadout_catalog::fetch_entries(&config.url, &config.table_selector).await?;
    let build = Catalog::build(entries, config.scaling_constant, config.lenient)
        .map_err(|e| anyhow!("Failed to build catalog: {}", e))?;
    if !build.skipped.is_empty() {
        warn!("skipped {} unparseable catalog entries", build.skipped.len());
    }
    info!("catalog has {} items", build.catalog.len());
    Ok(build.catalog)
}

/// Runs the multi-trial search over `catalog` and renders the winner.
pub fn run(catalog: &Catalog, config: &RunConfig) -> Result<Report> {
    let seed = match config.seed() {
        Some(seed) => seed.clone(),
        None => {
            let seed = random_seed_string();
            info!("no seed given, using {}", seed);
            seed
        }
    };
    let params = search_params(config);
    let outcome = search(catalog, &params, &seed, config.parallel)?;
    Ok(Report::new(&outcome, config, &seed))
}
