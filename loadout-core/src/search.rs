use crate::{
    catalog::Catalog,
    error::{LoadoutError, Result},
    item::Item,
    weighting::SamplingDistribution,
};
use rand::{
    distributions::{Distribution, Uniform, WeightedIndex},
    Rng,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const DEFAULT_MAX_ATTEMPTS: usize = 250;
pub const DEFAULT_MAX_VIOLATIONS: usize = 100;
pub const DEFAULT_P_UNIFORM: f64 = 0.95;

/// Budgets and knobs for one search. Budgets use the same units as [`Item`]:
/// base currency units and pounds.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SearchParams {
    pub cost_budget: f64,
    pub weight_budget: f64,
    pub max_attempts: usize,
    pub max_violations: usize,
    pub p_uniform: f64,
}

impl SearchParams {
    pub fn new(cost_budget: f64, weight_budget: f64) -> Self {
        Self {
            cost_budget,
            weight_budget,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            max_violations: DEFAULT_MAX_VIOLATIONS,
            p_uniform: DEFAULT_P_UNIFORM,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.cost_budget.is_finite() && self.cost_budget >= 0.0) {
            return Err(LoadoutError::InvalidConfig(format!(
                "cost budget must be non-negative and finite, got {}",
                self.cost_budget
            )));
        }
        if !(self.weight_budget.is_finite() && self.weight_budget >= 0.0) {
            return Err(LoadoutError::InvalidConfig(format!(
                "weight budget must be non-negative and finite, got {}",
                self.weight_budget
            )));
        }
        if !(0.0..=1.0).contains(&self.p_uniform) {
            return Err(LoadoutError::InvalidConfig(format!(
                "p_uniform must be within [0, 1], got {}",
                self.p_uniform
            )));
        }
        if self.max_attempts == 0 {
            return Err(LoadoutError::InvalidConfig(
                "max_attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Sum of the two budget utilisation ratios. A zero budget contributes nothing.
    pub fn fill_quotient(&self, total_cost: u64, total_weight: f64) -> f64 {
        let weight_ratio = if self.weight_budget > 0.0 {
            total_weight / self.weight_budget
        } else {
            0.0
        };
        let cost_ratio = if self.cost_budget > 0.0 {
            total_cost as f64 / self.cost_budget
        } else {
            0.0
        };
        weight_ratio + cost_ratio
    }
}

/// Source of candidate catalog indices for a trial.
pub trait Draw {
    fn next_index(&mut self) -> usize;
}

/// Precomputed uniform and density-weighted index distributions over a catalog.
#[derive(Debug, Clone)]
pub struct CatalogSampler {
    uniform: Uniform<usize>,
    weighted: WeightedIndex<f64>,
    p_uniform: f64,
}

impl CatalogSampler {
    pub fn new(distribution: &SamplingDistribution, p_uniform: f64) -> Result<Self> {
        if distribution.is_empty() {
            return Err(LoadoutError::InvalidCatalog("catalog is empty".to_string()));
        }
        if !(0.0..=1.0).contains(&p_uniform) {
            return Err(LoadoutError::InvalidConfig(format!(
                "p_uniform must be within [0, 1], got {}",
                p_uniform
            )));
        }
        let weighted = WeightedIndex::new(distribution.probabilities())
            .map_err(|e| LoadoutError::InvalidCatalog(e.to_string()))?;
        Ok(Self {
            uniform: Uniform::new(0, distribution.len()),
            weighted,
            p_uniform,
        })
    }

    /// One policy draw, then one index draw from the chosen distribution.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        if rng.gen_bool(self.p_uniform) {
            self.uniform.sample(rng)
        } else {
            self.weighted.sample(rng)
        }
    }

    pub fn with_rng<R: Rng>(&self, rng: R) -> SampledDraw<'_, R> {
        SampledDraw { sampler: self, rng }
    }
}

/// A [`CatalogSampler`] paired with the generator owned by one trial.
pub struct SampledDraw<'a, R> {
    sampler: &'a CatalogSampler,
    rng: R,
}

impl<R: Rng> Draw for SampledDraw<'_, R> {
    fn next_index(&mut self) -> usize {
        self.sampler.draw(&mut self.rng)
    }
}

/// Items accepted during one trial, in acceptance order. Repeats are allowed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection<'a> {
    indices: Vec<usize>,
    items: Vec<&'a Item>,
    total_cost: u64,
    total_weight: f64,
}

impl<'a> Selection<'a> {
    pub fn items(&self) -> &[&'a Item] {
        &self.items
    }

    /// Catalog positions of the accepted items, parallel to [`Selection::items`].
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn total_cost(&self) -> u64 {
        self.total_cost
    }

    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Distinct items with their repeat counts, in first-accepted order.
    pub fn counts(&self) -> Vec<(&'a Item, usize)> {
        let mut positions: HashMap<usize, usize> = HashMap::new();
        let mut counts: Vec<(&'a Item, usize)> = Vec::new();
        for (&index, &item) in self.indices.iter().zip(&self.items) {
            match positions.get(&index) {
                Some(&pos) => counts[pos].1 += 1,
                None => {
                    positions.insert(index, counts.len());
                    counts.push((item, 1));
                }
            }
        }
        counts
    }

    /// Adds `item` if it fits both budgets.
    fn try_accept(&mut self, index: usize, item: &'a Item, params: &SearchParams) -> bool {
        let Some(cost) = self.total_cost.checked_add(item.cost()) else {
            return false;
        };
        let weight = self.total_weight + item.weight();
        if cost as f64 > params.cost_budget || weight > params.weight_budget {
            return false;
        }
        self.indices.push(index);
        self.items.push(item);
        self.total_cost = cost;
        self.total_weight = weight;
        true
    }
}

/// Runs one trial: keep drawing until `max_violations` consecutive draws
/// fail to fit the remaining budgets.
///
/// A catalog where every item is free and weightless is rejected up front,
/// since every draw from it would be accepted and the trial would never end.
pub fn run_trial<'a, D>(
    catalog: &'a Catalog,
    params: &SearchParams,
    draw: &mut D,
) -> Result<Selection<'a>>
where
    D: Draw + ?Sized,
{
    if catalog.is_empty() {
        return Err(LoadoutError::InvalidCatalog("catalog is empty".to_string()));
    }
    if catalog
        .items()
        .iter()
        .all(|item| item.cost() == 0 && item.weight() == 0.0)
    {
        return Err(LoadoutError::InvalidCatalog(
            "every item is free and weightless".to_string(),
        ));
    }

    let mut selection = Selection::default();
    let mut violations = 0;
    while violations < params.max_violations {
        let index = draw.next_index();
        let item = catalog.get(index).ok_or_else(|| {
            LoadoutError::InvalidCatalog(format!(
                "drew index {} from a catalog of {} items",
                index,
                catalog.len()
            ))
        })?;

        if selection.try_accept(index, item, params) {
            violations = 0;
        } else {
            violations += 1;
        }
    }
    Ok(selection)
}
