//! Weighted interval scheduling solvers.
//!
//! Two solvers share one dynamic-programming recurrence and differ only in
//! how each job's predecessor is found:
//! - `linear`: a single two-pointer sweep over the end and start orders
//! - `classic`: a binary search per job, kept to cross-check `linear`

mod classic;
mod dp;
mod linear;
mod predecessor;
mod validation;

use std::collections::HashMap;
use thiserror::Error;

use crate::config::SolverConfig;
use crate::models::{Job, Schedule};
use crate::sorting::SortingError;

pub use classic::{classic_schedule, classic_weighted_scheduling};
pub use linear::{linear_schedule, linear_weighted_scheduling};
pub use predecessor::{build_predecessors, find_pred};
pub use validation::validate_jobs;

/// Errors that can occur during scheduling.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchedulingError {
    #[error("Invalid job at index {index}: {reason}")]
    InvalidJob { index: usize, reason: String },
    #[error("Total weight overflowed f64")]
    WeightOverflow,
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),
    #[error(transparent)]
    Sorting(#[from] SortingError),
}

/// Which solver to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    Linear,
    Classic,
}

impl Algorithm {
    pub fn parse(name: &str) -> Result<Self, SchedulingError> {
        match name.trim() {
            "linear" | "gpi" => Ok(Self::Linear),
            "classic" => Ok(Self::Classic),
            other => Err(SchedulingError::UnknownAlgorithm(other.to_string())),
        }
    }

    pub fn total_weight(
        self,
        jobs: &[Job],
        config: &SolverConfig,
    ) -> Result<f64, SchedulingError> {
        match self {
            Self::Linear => linear_weighted_scheduling(jobs, config),
            Self::Classic => classic_weighted_scheduling(jobs, config),
        }
    }

    pub fn schedule(
        self,
        jobs: &[Job],
        config: &SolverConfig,
    ) -> Result<Schedule, SchedulingError> {
        match self {
            Self::Linear => linear_schedule(jobs, config),
            Self::Classic => classic_schedule(jobs, config),
        }
    }
}

fn schedule_metadata(algorithm: &str, strategy: &str, jobs: usize) -> HashMap<String, String> {
    let mut metadata = HashMap::new();
    metadata.insert("algorithm".to_string(), algorithm.to_string());
    metadata.insert("strategy".to_string(), strategy.to_string());
    metadata.insert("jobs".to_string(), jobs.to_string());
    metadata
}
