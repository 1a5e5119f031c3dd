//! Bucket sorts over the observed key range.
//!
//! Keys are scaled linearly from `[min, max]` onto bucket indices, so the
//! expected running time is linear when keys are close to uniform. Clustered
//! keys degrade towards the comparison sort used inside each bucket.

use super::{comparison_sort, SortKey};
use crate::models::JobRecord;

/// Min and max key, or `None` if the slice is empty, holds a non-finite key,
/// or spans a range too wide for `max - min` to be finite.
///
/// Any of these makes the linear scaling meaningless; callers fall back to
/// a comparison sort in that case.
fn finite_key_range<T: JobRecord>(records: &[T], key: SortKey) -> Option<(f64, f64)> {
    let mut keys = records.iter().map(|r| r.key(key));
    let first = keys.next()?;
    let mut range = (first, first);
    for value in std::iter::once(first).chain(keys) {
        if !value.is_finite() {
            return None;
        }
        range = (range.0.min(value), range.1.max(value));
    }
    (range.1 - range.0).is_finite().then_some(range)
}

/// `floor((value - min) * (buckets - 1) / (max - min))`, clamped into range.
#[inline]
fn bucket_index(value: f64, min: f64, range: f64, buckets: usize) -> usize {
    let idx = ((value - min) * (buckets - 1) as f64 / range).floor();
    if idx > 0.0 {
        (idx as usize).min(buckets - 1)
    } else {
        0
    }
}

/// Single-level bucket sort with one bucket per record.
pub(super) fn sort<T: JobRecord>(records: &mut [T], key: SortKey) {
    let n = records.len();
    if n < 2 {
        return;
    }
    let Some((min, max)) = finite_key_range(records, key) else {
        comparison_sort(records, key);
        return;
    };
    if max <= min {
        return;
    }

    let range = max - min;
    let mut buckets: Vec<Vec<T>> = vec![Vec::new(); n];
    for record in records.iter() {
        buckets[bucket_index(record.key(key), min, range, n)].push(*record);
    }

    let mut pos = 0;
    for bucket in &mut buckets {
        comparison_sort(bucket, key);
        records[pos..pos + bucket.len()].copy_from_slice(bucket);
        pos += bucket.len();
    }
}

/// Bucket sort that re-buckets oversized buckets.
///
/// Segments are processed from an explicit stack of `(lo, hi, depth)`. A
/// segment of at most `min_bucket_size` records, or one at `max_depth`, is
/// finished with a comparison sort, as is any segment whose split fails to
/// shrink it. Only strictly smaller children are pushed.
pub(super) fn sort_recursive<T: JobRecord>(
    records: &mut [T],
    key: SortKey,
    min_bucket_size: usize,
    max_depth: usize,
) {
    if records.len() < 2 {
        return;
    }

    let mut scratch: Vec<T> = records.to_vec();
    let mut indices: Vec<usize> = Vec::with_capacity(records.len());
    let mut counts: Vec<usize> = Vec::with_capacity(records.len());
    let mut stack: Vec<(usize, usize, usize)> = vec![(0, records.len(), 0)];

    while let Some((lo, hi, depth)) = stack.pop() {
        let segment = &mut records[lo..hi];
        let len = segment.len();
        if len <= min_bucket_size || depth >= max_depth {
            comparison_sort(segment, key);
            continue;
        }
        let Some((min, max)) = finite_key_range(segment, key) else {
            comparison_sort(segment, key);
            continue;
        };
        if max <= min {
            continue;
        }

        let range = max - min;
        indices.clear();
        indices.extend(
            segment
                .iter()
                .map(|r| bucket_index(r.key(key), min, range, len)),
        );
        // Rounding can leave every record in one bucket
        if indices.windows(2).all(|pair| pair[0] == pair[1]) {
            comparison_sort(segment, key);
            continue;
        }

        counts.clear();
        counts.resize(len, 0);
        for &b in &indices {
            counts[b] += 1;
        }
        let mut total = 0;
        for count in counts.iter_mut() {
            let c = *count;
            *count = total;
            total += c;
        }

        // After placement counts[b] is the end of bucket b
        let out = &mut scratch[lo..hi];
        for (record, &b) in segment.iter().zip(&indices) {
            out[counts[b]] = *record;
            counts[b] += 1;
        }
        segment.copy_from_slice(out);

        let mut start = 0;
        for &end in &counts {
            if end - start > 1 {
                stack.push((lo + start, lo + end, depth + 1));
            }
            start = end;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Job;
    use crate::sorting::tests::assert_sorted;

    fn jobs_with_starts(starts: &[f64]) -> Vec<Job> {
        starts.iter().map(|&s| Job::new(s, s + 1.0, 1.0)).collect()
    }

    #[test]
    fn test_bucket_index_formula() {
        // 5 buckets over [0, 100]: idx = floor(key * 4 / 100)
        assert_eq!(bucket_index(0.0, 0.0, 100.0, 5), 0);
        assert_eq!(bucket_index(24.9, 0.0, 100.0, 5), 0);
        assert_eq!(bucket_index(25.0, 0.0, 100.0, 5), 1);
        assert_eq!(bucket_index(99.9, 0.0, 100.0, 5), 3);
        assert_eq!(bucket_index(100.0, 0.0, 100.0, 5), 4);
    }

    #[test]
    fn test_bucket_sort_real_keys() {
        let mut jobs = jobs_with_starts(&[3.7, -1.25, 1e6, 0.0, 2.5, 2.5, 999.125, -40.0]);
        sort(&mut jobs, SortKey::Start);
        assert_sorted(&jobs, SortKey::Start);
        assert_eq!(jobs.len(), 8);
    }

    #[test]
    fn test_bucket_sort_all_equal_keeps_order() {
        let mut jobs = vec![
            Job::new(7.0, 8.0, 1.0),
            Job::new(7.0, 9.0, 2.0),
            Job::new(7.0, 10.0, 3.0),
        ];
        let before = jobs.clone();
        sort(&mut jobs, SortKey::Start);
        assert_eq!(jobs, before);
    }

    #[test]
    fn test_non_finite_keys_fall_back_to_comparison() {
        let mut jobs = jobs_with_starts(&[5.0, f64::NEG_INFINITY, 1.0, f64::INFINITY]);
        sort(&mut jobs, SortKey::Start);
        assert_sorted(&jobs, SortKey::Start);

        let mut jobs = jobs_with_starts(&[5.0, f64::NEG_INFINITY, 1.0, f64::INFINITY]);
        sort_recursive(&mut jobs, SortKey::Start, 1, 10);
        assert_sorted(&jobs, SortKey::Start);
    }

    #[test]
    fn test_recursive_handles_clustered_keys() {
        // One outlier squeezes everything else into the first bucket
        let mut starts: Vec<f64> = (0..500).map(|i| (i % 97) as f64 * 0.001).collect();
        starts.push(1e9);
        starts.reverse();
        let mut jobs = jobs_with_starts(&starts);
        sort_recursive(&mut jobs, SortKey::Start, 16, 10);
        assert_sorted(&jobs, SortKey::Start);
        assert_eq!(jobs.len(), 501);
    }

    #[test]
    fn test_extreme_range_terminates() {
        // max - min overflows to infinity for these finite keys
        let mut starts: Vec<f64> = (0..40).map(|i| -1e308 + i as f64).collect();
        starts.push(1e308);
        starts.push(0.0);
        starts.reverse();

        let mut jobs = jobs_with_starts(&starts);
        sort_recursive(&mut jobs, SortKey::Start, 1, usize::MAX);
        assert_sorted(&jobs, SortKey::Start);
        assert_eq!(jobs.len(), 42);

        let mut jobs = jobs_with_starts(&starts);
        sort(&mut jobs, SortKey::Start);
        assert_sorted(&jobs, SortKey::Start);
        assert_eq!(jobs[41].start, 1e308);
    }

    #[test]
    fn test_unbounded_depth_on_clustered_keys() {
        let mut starts: Vec<f64> = (0..300).map(|i| (i % 7) as f64 * 1e-9).collect();
        starts.push(1e12);
        let mut jobs = jobs_with_starts(&starts);
        sort_recursive(&mut jobs, SortKey::Start, 1, usize::MAX);
        assert_sorted(&jobs, SortKey::Start);
    }

    #[test]
    fn test_recursive_depth_limit_still_sorts() {
        let starts: Vec<f64> = (0..300).rev().map(|i| (i * i) as f64).collect();
        for max_depth in [0, 1, 2] {
            let mut jobs = jobs_with_starts(&starts);
            sort_recursive(&mut jobs, SortKey::Start, 2, max_depth);
            assert_sorted(&jobs, SortKey::Start);
        }
    }
}
