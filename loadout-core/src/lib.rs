//! Randomised two-budget loadout search.
//!
//! A [`Catalog`] of [`Item`]s is sampled by [`run_trial`] under a cost budget
//! and a weight budget until the trial keeps failing to fit anything more.
//! [`search`] repeats that for many independently seeded trials and keeps the
//! one that fills both budgets best.

pub mod catalog;
pub mod error;
pub mod item;
pub mod search;
pub mod selection;
pub mod weighting;

pub use catalog::{Catalog, CatalogBuild};
pub use error::{EntryError, Field, LoadoutError, Result};
pub use item::{parse_cost, parse_weight, Item, ItemRecord, RawEntry, DEFAULT_SCALING_CONSTANT};
pub use search::{run_trial, CatalogSampler, Draw, SampledDraw, SearchParams, Selection};
pub use selection::{best_of_trials, best_of_trials_parallel, search, BestCandidate, TrialOutcome};
pub use weighting::SamplingDistribution;
