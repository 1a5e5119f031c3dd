//! Predecessor lookup: per-job binary search and the linear two-pointer sweep.
//!
//! A job's predecessor count is the number of jobs, in end order, that finish
//! at or before it starts. Touching intervals (`end == start`) are compatible.

use crate::models::{JobRecord, RankedJob};

/// Number of records in `end_ordered` whose end time is `<= start`.
///
/// Equivalently, the 1-indexed end-order rank of the latest compatible job,
/// or 0 when there is none.
pub fn find_pred<T: JobRecord>(end_ordered: &[T], start: f64) -> usize {
    end_ordered.partition_point(|job| job.end() <= start)
}

/// Build the predecessor array `p[0..=n]` in one backward sweep.
///
/// `end_ordered` and `start_ordered` are the two views produced by
/// `sort_both_with_indices`: the same records sorted by end and by start,
/// tagged with their end-order rank. `p[rank]` receives the rank of the
/// latest compatible job; `p[0]` and jobs without a predecessor stay 0.
///
/// Walking starts from the latest to the earliest, the compatible boundary
/// in end order can only move down, so one cursor serves every job. Values
/// are capped at `rank - 1`, which only matters for zero-length jobs.
pub fn build_predecessors(end_ordered: &[RankedJob], start_ordered: &[RankedJob]) -> Vec<usize> {
    let mut predecessors = vec![0; end_ordered.len() + 1];
    let Some(latest) = start_ordered.last() else {
        return predecessors;
    };

    let mut end_index = find_pred(end_ordered, latest.start);
    for job in start_ordered.iter().rev() {
        while end_index >= 1 && end_ordered[end_index - 1].end > job.start {
            end_index -= 1;
        }
        if end_index == 0 {
            // Every earlier start is incompatible with every job too
            break;
        }
        if let Some(slot) = predecessors.get_mut(job.rank) {
            *slot = end_index.min(job.rank.saturating_sub(1));
        }
    }
    predecessors
}
