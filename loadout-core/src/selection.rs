use crate::{
    catalog::Catalog,
    error::{LoadoutError, Result},
    search::{run_trial, CatalogSampler, SearchParams, Selection},
    weighting::SamplingDistribution,
};
use loadout_utils::trial_seed;
use rand::{rngs::SmallRng, SeedableRng};
use rayon::prelude::*;
use tracing::{debug, info};

/// The winning trial of a search.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialOutcome<'a> {
    pub index: usize,
    pub selection: Selection<'a>,
    pub fill_quotient: f64,
}

/// Keeps the first trial, then replaces it only on a strictly greater fill
/// quotient. Trials must arrive in index order for ties to resolve to the
/// earliest one.
#[derive(Debug, Default)]
pub struct BestCandidate<'a> {
    best: Option<TrialOutcome<'a>>,
}

impl<'a> BestCandidate<'a> {
    pub fn offer(&mut self, index: usize, selection: Selection<'a>, params: &SearchParams) {
        let fill_quotient =
            params.fill_quotient(selection.total_cost(), selection.total_weight());
        let promote = match &self.best {
            None => true,
            Some(best) => fill_quotient > best.fill_quotient,
        };
        if promote {
            debug!(
                "trial {}: promoted with fill quotient {:.4} ({} items)",
                index,
                fill_quotient,
                selection.len()
            );
            self.best = Some(TrialOutcome {
                index,
                selection,
                fill_quotient,
            });
        }
    }

    pub fn into_inner(self) -> Option<TrialOutcome<'a>> {
        self.best
    }
}

/// Runs `params.max_attempts` trials through `trial` sequentially and keeps the best.
pub fn best_of_trials<'a, F>(params: &SearchParams, mut trial: F) -> Result<TrialOutcome<'a>>
where
    F: FnMut(usize) -> Result<Selection<'a>>,
{
    params.validate()?;
    let mut best = BestCandidate::default();
    for index in 0..params.max_attempts {
        best.offer(index, trial(index)?, params);
    }
    // max_attempts >= 1 after validation
    best.into_inner().ok_or_else(|| {
        LoadoutError::InvalidConfig("no trials were run".to_string())
    })
}

/// Parallel counterpart of [`best_of_trials`]. Trials run on the rayon pool
/// but are reduced in index order, so the winner matches a sequential run.
pub fn best_of_trials_parallel<'a, F>(params: &SearchParams, trial: F) -> Result<TrialOutcome<'a>>
where
    F: Fn(usize) -> Result<Selection<'a>> + Sync + Send,
{
    params.validate()?;
    let selections = (0..params.max_attempts)
        .into_par_iter()
        .map(|index| trial(index))
        .collect::<Result<Vec<_>>>()?;

    let mut best = BestCandidate::default();
    for (index, selection) in selections.into_iter().enumerate() {
        best.offer(index, selection, params);
    }
    best.into_inner().ok_or_else(|| {
        LoadoutError::InvalidConfig("no trials were run".to_string())
    })
}

/// Full search over `catalog`: builds the sampling distribution once, seeds
/// every trial from `run_seed` and its index, and returns the best trial.
pub fn search<'a>(
    catalog: &'a Catalog,
    params: &SearchParams,
    run_seed: &str,
    parallel: bool,
) -> Result<TrialOutcome<'a>> {
    params.validate()?;
    let distribution = SamplingDistribution::new(catalog)?;
    let sampler = CatalogSampler::new(&distribution, params.p_uniform)?;
    debug!("sampling distribution built over {} items", distribution.len());

    let trial = |index: usize| {
        let rng = SmallRng::from_seed(trial_seed(run_seed, index));
        run_trial(catalog, params, &mut sampler.with_rng(rng))
    };
    let outcome = if parallel {
        best_of_trials_parallel(params, trial)?
    } else {
        best_of_trials(params, trial)?
    };

    info!(
        "best of {} trials: trial {} with fill quotient {:.4} (cost {}, weight {:.2})",
        params.max_attempts,
        outcome.index,
        outcome.fill_quotient,
        outcome.selection.total_cost(),
        outcome.selection.total_weight()
    );
    Ok(outcome)
}
