//! Dynamic-programming recurrence shared by both solvers.

use super::SchedulingError;
use crate::models::{Job, JobRecord};

/// Fill `dp[0..=n]` over the end-ordered jobs.
///
/// `dp[0] = 0` and `dp[i] = max(dp[i-1], weight(i) + dp[pred(i)])`, where
/// `pred(i) < i` is the end-order rank of job `i`'s latest compatible job.
pub(crate) fn fill<T: JobRecord>(end_ordered: &[T], pred: impl Fn(usize) -> usize) -> Vec<f64> {
    let mut dp = vec![0.0; end_ordered.len() + 1];
    for (i, job) in (1..).zip(end_ordered) {
        let include = job.weight() + dp[pred(i)];
        dp[i] = dp[i - 1].max(include);
    }
    dp
}

/// The optimum, `dp[n]`.
pub(crate) fn total_weight(dp: &[f64]) -> Result<f64, SchedulingError> {
    let total = dp.last().copied().unwrap_or(0.0);
    if !total.is_finite() {
        return Err(SchedulingError::WeightOverflow);
    }
    Ok(total)
}

/// Walk `dp` back from `n` and collect one optimal subset, in end order.
pub(crate) fn reconstruct<T: JobRecord>(
    end_ordered: &[T],
    dp: &[f64],
    pred: impl Fn(usize) -> usize,
) -> Vec<Job> {
    let mut selected = Vec::new();
    let mut i = end_ordered.len();
    while i > 0 {
        let job = &end_ordered[i - 1];
        let p = pred(i);
        if job.weight() + dp[p] > dp[i - 1] {
            selected.push(job.to_job());
            i = p;
        } else {
            i -= 1;
        }
    }
    selected.reverse();
    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn end_ordered() -> Vec<Job> {
        vec![
            Job::new(1.0, 4.0, 3.0),
            Job::new(2.0, 6.0, 5.0),
            Job::new(4.0, 7.0, 2.0),
            Job::new(6.0, 8.0, 4.0),
            Job::new(3.0, 9.0, 6.0),
        ]
    }

    const PREDECESSORS: [usize; 6] = [0, 0, 0, 1, 2, 0];

    #[test]
    fn test_fill_recurrence() {
        let dp = fill(&end_ordered(), |i| PREDECESSORS[i]);
        assert_eq!(dp, vec![0.0, 3.0, 5.0, 5.0, 9.0, 9.0]);
        for pair in dp.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
    }

    #[test]
    fn test_reconstruct_picks_optimal_subset() {
        let jobs = end_ordered();
        let dp = fill(&jobs, |i| PREDECESSORS[i]);
        let selected = reconstruct(&jobs, &dp, |i| PREDECESSORS[i]);
        assert_eq!(
            selected,
            vec![Job::new(2.0, 6.0, 5.0), Job::new(6.0, 8.0, 4.0)]
        );
    }

    #[test]
    fn test_negative_weights_are_skipped() {
        let jobs = vec![Job::new(0.0, 1.0, -2.0), Job::new(1.0, 2.0, 3.0)];
        let pred = |i: usize| [0, 0, 1][i];
        let dp = fill(&jobs, pred);
        assert_eq!(dp, vec![0.0, 0.0, 3.0]);
        assert_eq!(reconstruct(&jobs, &dp, pred), vec![Job::new(1.0, 2.0, 3.0)]);
    }

    #[test]
    fn test_total_weight_overflow() {
        assert_eq!(total_weight(&[0.0]), Ok(0.0));
        assert_eq!(total_weight(&[0.0, 7.0]), Ok(7.0));
        assert_eq!(
            total_weight(&[0.0, f64::INFINITY]),
            Err(SchedulingError::WeightOverflow)
        );
    }
}
