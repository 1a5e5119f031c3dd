//! Rust implementation of linear-time weighted job scheduling.
//!
//! Given jobs `(start, end, weight)`, finds the maximum total weight of a
//! subset of mutually non-overlapping jobs. The linear solver replaces the
//! usual per-job binary search with linear-time sorts and a single two-pointer
//! predecessor sweep; the classic O(n log n) solver is kept for cross-checks.
//! Python bindings mirror the benchmarking harness's calling convention.

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

mod config;
pub mod logging;
mod models;
pub mod solver;
pub mod sorting;

pub use config::SolverConfig;
pub use models::{Job, JobRecord, RankedJob, Schedule};
pub use solver::{
    build_predecessors, classic_schedule, classic_weighted_scheduling, find_pred, linear_schedule,
    linear_weighted_scheduling, validate_jobs, Algorithm, SchedulingError,
};
pub use sorting::{sort_both_with_indices, sort_values, SortKey, SortStrategy, SortingError};

type JobTuple = (f64, f64, f64);
type RankedJobTuple = (f64, f64, f64, usize);

fn value_error(err: impl std::fmt::Display) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn to_jobs(jobs: Vec<JobTuple>) -> Vec<Job> {
    jobs.into_iter().map(Job::from).collect()
}

/// Maximum total weight using the linear-time algorithm.
///
/// # Arguments
/// * `jobs` - List of `(start, end, weight)` tuples
/// * `sort_algo` - "default", "radix", "bucket", "recursive bucket", or "spread"
///
/// # Raises
/// * ValueError on malformed jobs, unknown strategy, or keys the strategy cannot sort
#[pyfunction]
#[pyo3(signature = (jobs, sort_algo="default"))]
fn gpi_weighted_job_scheduling(jobs: Vec<JobTuple>, sort_algo: &str) -> PyResult<f64> {
    linear_weighted_scheduling(&to_jobs(jobs), &SolverConfig::with_strategy(sort_algo))
        .map_err(value_error)
}

/// Maximum total weight using sort + binary search per job.
#[pyfunction]
#[pyo3(signature = (jobs, sort_algo="default"))]
fn classic_weighted_interval_scheduling(jobs: Vec<JobTuple>, sort_algo: &str) -> PyResult<f64> {
    classic_weighted_scheduling(&to_jobs(jobs), &SolverConfig::with_strategy(sort_algo))
        .map_err(value_error)
}

/// Solve and return the optimal subset along with its total weight.
///
/// # Arguments
/// * `jobs` - List of `(start, end, weight)` tuples
/// * `config` - Solver configuration (strategy, tuning, verbosity)
/// * `algorithm` - "linear" or "classic"
#[pyfunction]
#[pyo3(signature = (jobs, config=None, algorithm="linear"))]
fn weighted_job_schedule(
    jobs: Vec<JobTuple>,
    config: Option<SolverConfig>,
    algorithm: &str,
) -> PyResult<Schedule> {
    let config = config.unwrap_or_default();
    Algorithm::parse(algorithm)
        .and_then(|algorithm| algorithm.schedule(&to_jobs(jobs), &config))
        .map_err(value_error)
}

/// Sort a list of floats.
#[pyfunction]
#[pyo3(signature = (vals, sort_algo="spread"))]
fn sort_floats(vals: Vec<f64>, sort_algo: &str) -> PyResult<Vec<f64>> {
    let strategy = SolverConfig::with_strategy(sort_algo)
        .sort_strategy()
        .map_err(value_error)?;
    sort_values(&vals, &strategy).map_err(value_error)
}

/// Sort `(start, end, weight)` tuples by field `key_index` (0 = start, 1 = end).
#[pyfunction]
#[pyo3(signature = (jobs, key_index, sort_algo="default"))]
fn sort_jobs(jobs: Vec<JobTuple>, key_index: usize, sort_algo: &str) -> PyResult<Vec<JobTuple>> {
    let key = SortKey::from_index(key_index).map_err(value_error)?;
    let strategy = SolverConfig::with_strategy(sort_algo)
        .sort_strategy()
        .map_err(value_error)?;
    let sorted = strategy.sort(&to_jobs(jobs), key).map_err(value_error)?;
    Ok(sorted.into_iter().map(Into::into).collect())
}

/// Sort `(start, end, weight, rank)` tuples by field `key_index`.
#[pyfunction]
#[pyo3(signature = (jobs, key_index, sort_algo="default"))]
fn sort_ranked_jobs(
    jobs: Vec<RankedJobTuple>,
    key_index: usize,
    sort_algo: &str,
) -> PyResult<Vec<RankedJobTuple>> {
    let key = SortKey::from_index(key_index).map_err(value_error)?;
    let strategy = SolverConfig::with_strategy(sort_algo)
        .sort_strategy()
        .map_err(value_error)?;
    let records: Vec<RankedJob> = jobs.into_iter().map(RankedJob::from).collect();
    let sorted = strategy.sort(&records, key).map_err(value_error)?;
    Ok(sorted.into_iter().map(Into::into).collect())
}

/// Sort by end time, tag ranks 1..n, then sort the tagged tuples by start time.
///
/// # Returns
/// * `(end_ordered, start_ordered)` lists of `(start, end, weight, rank)`
#[pyfunction]
#[pyo3(name = "sort_both_with_indices", signature = (jobs, sort_algo="spread"))]
fn py_sort_both_with_indices(
    jobs: Vec<JobTuple>,
    sort_algo: &str,
) -> PyResult<(Vec<RankedJobTuple>, Vec<RankedJobTuple>)> {
    let strategy = SolverConfig::with_strategy(sort_algo)
        .sort_strategy()
        .map_err(value_error)?;
    let (end_ordered, start_ordered) =
        sort_both_with_indices(&to_jobs(jobs), &strategy).map_err(value_error)?;
    Ok((
        end_ordered.into_iter().map(Into::into).collect(),
        start_ordered.into_iter().map(Into::into).collect(),
    ))
}

/// The Python extension module.
#[pymodule]
fn rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Data types
    m.add_class::<Job>()?;
    m.add_class::<Schedule>()?;
    m.add_class::<SolverConfig>()?;

    // Solvers
    m.add_function(wrap_pyfunction!(gpi_weighted_job_scheduling, m)?)?;
    m.add_function(wrap_pyfunction!(classic_weighted_interval_scheduling, m)?)?;
    m.add_function(wrap_pyfunction!(weighted_job_schedule, m)?)?;

    // Sorting
    m.add_function(wrap_pyfunction!(sort_floats, m)?)?;
    m.add_function(wrap_pyfunction!(sort_jobs, m)?)?;
    m.add_function(wrap_pyfunction!(sort_ranked_jobs, m)?)?;
    m.add_function(wrap_pyfunction!(py_sort_both_with_indices, m)?)?;

    Ok(())
}
