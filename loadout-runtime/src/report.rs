use loadout_core::TrialOutcome;
use loadout_structs::config::{RunConfig, BASE_UNITS_PER_GOLD};
use serde::Serialize;
use std::fmt;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub name: String,
    pub cost_gold: f64,
    pub weight_lbs: f64,
    pub count: usize,
    pub value_density: f64,
}

/// Rendered form of a winning selection.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Report {
    pub rows: Vec<ReportRow>,
    pub total_cost_gold: f64,
    pub total_weight_lbs: f64,
    pub cost_budget_gold: f64,
    pub weight_budget_lbs: f64,
    pub fill_quotient: f64,
    pub trial: usize,
    pub seed: String,
}

impl Report {
    pub fn new(outcome: &TrialOutcome, config: &RunConfig, seed: &str) -> Self {
        let mut rows: Vec<ReportRow> = outcome
            .selection
            .counts()
            .into_iter()
            .map(|(item, count)| ReportRow {
                name: item.name().to_string(),
                cost_gold: item.cost() as f64 / BASE_UNITS_PER_GOLD,
                weight_lbs: item.weight(),
                count,
                value_density: item.value_density(),
            })
            .collect();
        // stable, so equal scores stay in first-accepted order
        rows.sort_by(|a, b| {
            let a_score = a.value_density * a.count as f64;
            let b_score = b.value_density * b.count as f64;
            b_score.total_cmp(&a_score)
        });

        Self {
            rows,
            total_cost_gold: outcome.selection.total_cost() as f64 / BASE_UNITS_PER_GOLD,
            total_weight_lbs: outcome.selection.total_weight(),
            cost_budget_gold: config.cost_budget_gold,
            weight_budget_lbs: config.weight_budget_lbs,
            fill_quotient: outcome.fill_quotient,
            trial: outcome.index,
            seed: seed.to_string(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name | Cost | Weight | Count")?;
        writeln!(f, "--- | --- | --- | ---")?;
        for row in &self.rows {
            writeln!(
                f,
                "{} | {:.2} gp | {:.2} lbs. | {}",
                row.name, row.cost_gold, row.weight_lbs, row.count
            )?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "Total weight:\t{:.2} lbs. (budget {:.2} lbs.)",
            self.total_weight_lbs, self.weight_budget_lbs
        )?;
        writeln!(f)?;
        write!(
            f,
            "Total cost:\t{:.2} gp (budget {:.2} gp)",
            self.total_cost_gold, self.cost_budget_gold
        )
    }
}
