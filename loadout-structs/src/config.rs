use crate::serializable_struct_with_getters;
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fs;

pub const DEFAULT_URL: &str = "https://open5e.com/equipment/adventuring-gear.html";
pub const DEFAULT_TABLE_SELECTOR: &str = "div#adventuring-gear table tbody tr";

/// Base units per gold piece.
pub const BASE_UNITS_PER_GOLD: f64 = 100.0;

serializable_struct_with_getters! {
    #[serde(default, deny_unknown_fields)]
    RunConfig {
        cost_budget_gold: f64,
        weight_budget_lbs: f64,
        max_attempts: usize,
        max_violations: usize,
        p_uniform: f64,
        scaling_constant: f64,
        seed: Option<String>,
        lenient: bool,
        parallel: bool,
        url: String,
        table_selector: String,
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            cost_budget_gold: 250.0,
            weight_budget_lbs: 420.0 + 190.0,
            max_attempts: 250,
            max_violations: 100,
            p_uniform: 0.95,
            scaling_constant: 0.5,
            seed: None,
            lenient: false,
            parallel: false,
            url: DEFAULT_URL.to_string(),
            table_selector: DEFAULT_TABLE_SELECTOR.to_string(),
        }
    }
}

impl RunConfig {
    /// Accepts either an inline json string or a path ending in `.json`.
    pub fn load(config: &str) -> Result<Self> {
        let config = if config.ends_with(".json") {
            fs::read_to_string(config)
                .map_err(|e| anyhow!("Failed to read config file {}: {}", config, e))?
        } else {
            config.to_string()
        };
        loadout_utils::dejsonify::<RunConfig>(&config)
            .map_err(|e| anyhow!("Failed to parse config: {}", e))
    }

    pub fn cost_budget_base_units(&self) -> f64 {
        self.cost_budget_gold * BASE_UNITS_PER_GOLD
    }
}
