//! Linear-time solver: two linear sorts, one predecessor sweep, one dp pass.

use super::predecessor::build_predecessors;
use super::validation::validate_jobs;
use super::{dp, schedule_metadata, SchedulingError};
use crate::config::SolverConfig;
use crate::models::{Job, RankedJob, Schedule};
use crate::sorting::sort_both_with_indices;
use crate::{log_debug, log_phases, log_summary};

/// Everything one linear run produces, kept for subset reconstruction.
struct LinearRun {
    end_ordered: Vec<RankedJob>,
    predecessors: Vec<usize>,
    dp: Vec<f64>,
    total_weight: f64,
    strategy_name: &'static str,
}

fn run(jobs: &[Job], config: &SolverConfig) -> Result<LinearRun, SchedulingError> {
    let strategy = config.sort_strategy()?;
    let verbosity = config.verbosity;
    validate_jobs(jobs)?;

    let (end_ordered, start_ordered) = sort_both_with_indices(jobs, &strategy)?;
    log_phases!(
        verbosity,
        "linear_dp: sorted {} jobs by end and start ({})",
        jobs.len(),
        strategy.name()
    );

    let predecessors = build_predecessors(&end_ordered, &start_ordered);
    log_phases!(
        verbosity,
        "linear_dp: {} jobs have a compatible predecessor",
        predecessors.iter().filter(|&&p| p > 0).count()
    );
    log_debug!(verbosity, "  p = {:?}", &predecessors[1..]);

    let dp = dp::fill(&end_ordered, |i| predecessors[i]);
    log_debug!(verbosity, "  dp = {:?}", dp);

    let total_weight = dp::total_weight(&dp)?;
    log_summary!(
        verbosity,
        "linear_dp[{}]: n={} total_weight={}",
        strategy.name(),
        jobs.len(),
        total_weight
    );

    Ok(LinearRun {
        end_ordered,
        predecessors,
        dp,
        total_weight,
        strategy_name: strategy.name(),
    })
}

/// Maximum total weight of mutually compatible jobs, in O(n) after sorting.
///
/// Sorts with the configured strategy; the answer does not depend on it.
/// Returns 0 for an empty job list.
pub fn linear_weighted_scheduling(
    jobs: &[Job],
    config: &SolverConfig,
) -> Result<f64, SchedulingError> {
    Ok(run(jobs, config)?.total_weight)
}

/// Like `linear_weighted_scheduling`, also returning one optimal subset.
pub fn linear_schedule(jobs: &[Job], config: &SolverConfig) -> Result<Schedule, SchedulingError> {
    let run = run(jobs, config)?;
    let selected = dp::reconstruct(&run.end_ordered, &run.dp, |i| run.predecessors[i]);
    Ok(Schedule {
        total_weight: run.total_weight,
        selected,
        algorithm_metadata: schedule_metadata("linear_dp", run.strategy_name, jobs.len()),
    })
}
