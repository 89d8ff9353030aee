use crate::{
    catalog::Catalog,
    error::{LoadoutError, Result},
};

/// Per-item draw probabilities proportional to value density.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplingDistribution {
    probabilities: Vec<f64>,
}

impl SamplingDistribution {
    pub fn new(catalog: &Catalog) -> Result<Self> {
        if catalog.is_empty() {
            return Err(LoadoutError::InvalidCatalog("catalog is empty".to_string()));
        }
        let densities: Vec<f64> = catalog.items().iter().map(|i| i.value_density()).collect();
        let total: f64 = densities.iter().sum();
        if !total.is_finite() || total <= 0.0 {
            return Err(LoadoutError::InvalidCatalog(format!(
                "value densities sum to {}",
                total
            )));
        }
        Ok(Self {
            probabilities: densities.into_iter().map(|d| d / total).collect(),
        })
    }

    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }
}
