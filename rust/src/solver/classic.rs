//! Classic O(n log n) solver: sort by end, binary-search each predecessor.
//!
//! Kept as the reference the linear solver is checked against.

use super::predecessor::find_pred;
use super::validation::validate_jobs;
use super::{dp, schedule_metadata, SchedulingError};
use crate::config::SolverConfig;
use crate::models::{Job, Schedule};
use crate::sorting::{settle_end_ties, SortKey};
use crate::{log_debug, log_summary};

/// Predecessor of end-order rank `i`, searched on the fly.
fn pred_of(end_ordered: &[Job], i: usize) -> usize {
    find_pred(end_ordered, end_ordered[i - 1].start).min(i - 1)
}

/// End-ordered jobs, the dp table, and the strategy name.
type ClassicRun = (Vec<Job>, Vec<f64>, &'static str);

fn run(jobs: &[Job], config: &SolverConfig) -> Result<ClassicRun, SchedulingError> {
    let strategy = config.sort_strategy()?;
    validate_jobs(jobs)?;

    let mut end_ordered = strategy.sort(jobs, SortKey::End)?;
    settle_end_ties(&mut end_ordered);

    let dp = dp::fill(&end_ordered, |i| pred_of(&end_ordered, i));
    log_debug!(config.verbosity, "  dp = {:?}", dp);
    log_summary!(
        config.verbosity,
        "classic_dp[{}]: n={} total_weight={}",
        strategy.name(),
        jobs.len(),
        dp[jobs.len()]
    );
    Ok((end_ordered, dp, strategy.name()))
}

/// Maximum total weight of mutually compatible jobs, with a binary search per job.
pub fn classic_weighted_scheduling(
    jobs: &[Job],
    config: &SolverConfig,
) -> Result<f64, SchedulingError> {
    let (_, dp, _) = run(jobs, config)?;
    dp::total_weight(&dp)
}

/// Like `classic_weighted_scheduling`, also returning one optimal subset.
pub fn classic_schedule(jobs: &[Job], config: &SolverConfig) -> Result<Schedule, SchedulingError> {
    let (end_ordered, dp, strategy_name) = run(jobs, config)?;
    let total_weight = dp::total_weight(&dp)?;
    let selected = dp::reconstruct(&end_ordered, &dp, |i| pred_of(&end_ordered, i));
    Ok(Schedule {
        total_weight,
        selected,
        algorithm_metadata: schedule_metadata("classic_dp", strategy_name, jobs.len()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pred_of_uses_binary_search() {
        let end_ordered = vec![
            Job::new(0.0, 3.0, 1.0),
            Job::new(1.0, 5.0, 1.0),
            Job::new(3.0, 8.0, 1.0),
            Job::new(5.0, 9.0, 1.0),
        ];
        assert_eq!(pred_of(&end_ordered, 1), 0);
        assert_eq!(pred_of(&end_ordered, 2), 0);
        assert_eq!(pred_of(&end_ordered, 3), 1);
        assert_eq!(pred_of(&end_ordered, 4), 2);
    }

    #[test]
    fn test_classic_schedule() {
        let jobs = vec![
            Job::new(0.0, 3.0, 4.0),
            Job::new(1.0, 5.0, 6.0),
            Job::new(3.0, 8.0, 5.0),
            Job::new(5.0, 9.0, 2.0),
        ];
        let schedule = classic_schedule(&jobs, &SolverConfig::default()).unwrap();
        assert_eq!(schedule.total_weight, 9.0);
        assert_eq!(
            schedule.selected,
            vec![Job::new(0.0, 3.0, 4.0), Job::new(3.0, 8.0, 5.0)]
        );
        assert_eq!(
            schedule.algorithm_metadata.get("algorithm").map(String::as_str),
            Some("classic_dp")
        );
    }
}
