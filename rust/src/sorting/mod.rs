//! Sort strategies used to order jobs before scheduling.
//!
//! Implements five interchangeable strategies:
//! - `default`: comparison sort, O(n log n)
//! - `radix`: LSD radix sort over non-negative integer keys
//! - `bucket`: single-level bucket sort over the observed key range
//! - `recursive bucket`: bucket sort that re-buckets oversized buckets
//! - `spread`: distribution-adaptive MSD sort over arbitrary float keys
//!
//! None of the strategies promise stability. The scheduler only relies on
//! the output being non-decreasing by the selected key.

mod bucket;
mod radix;
mod spread;

use thiserror::Error;

pub(crate) use radix::check_base as check_radix_base;

use crate::models::{Job, JobRecord, RankedJob};

/// Which job coordinate to sort by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    Start,
    End,
}

impl SortKey {
    /// Map a tuple field index (0 = start, 1 = end) to a key.
    pub fn from_index(index: usize) -> Result<Self, SortingError> {
        match index {
            0 => Ok(Self::Start),
            1 => Ok(Self::End),
            _ => Err(SortingError::InvalidKeyIndex(index)),
        }
    }
}

/// Errors that can occur during sorting.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SortingError {
    #[error("Unknown sort strategy: {0}")]
    UnknownStrategy(String),
    #[error("{strategy} sort requires finite, non-negative integer keys up to 2^53, got {value}")]
    UnsupportedKeyDomain { strategy: &'static str, value: f64 },
    #[error("Invalid key index {0}: expected 0 (start) or 1 (end)")]
    InvalidKeyIndex(usize),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// A sort strategy, together with its tuning parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortStrategy {
    /// General comparison sort.
    #[default]
    Comparison,
    /// LSD radix sort with the given digit base.
    Radix { base: u32 },
    /// One level of `n` buckets, each finished with a comparison sort.
    Bucket,
    /// Bucket sort that re-buckets any bucket larger than `min_bucket_size`
    /// until `max_depth` levels have been used.
    RecursiveBucket {
        min_bucket_size: usize,
        max_depth: usize,
    },
    /// Distribution-adaptive MSD sort on the bit pattern of float keys.
    Spread,
}

impl SortStrategy {
    pub const DEFAULT_RADIX_BASE: u32 = 10;
    pub const DEFAULT_MIN_BUCKET_SIZE: usize = 16;
    pub const DEFAULT_MAX_BUCKET_DEPTH: usize = 10;

    /// Parse a strategy name with default tuning.
    pub fn parse(name: &str) -> Result<Self, SortingError> {
        match name.trim() {
            "default" | "comparison" => Ok(Self::Comparison),
            "radix" => Ok(Self::Radix {
                base: Self::DEFAULT_RADIX_BASE,
            }),
            "bucket" => Ok(Self::Bucket),
            "recursive bucket" | "recursive_bucket" => Ok(Self::RecursiveBucket {
                min_bucket_size: Self::DEFAULT_MIN_BUCKET_SIZE,
                max_depth: Self::DEFAULT_MAX_BUCKET_DEPTH,
            }),
            "spread" | "spreadsort" => Ok(Self::Spread),
            other => Err(SortingError::UnknownStrategy(other.to_string())),
        }
    }

    /// Canonical name, as accepted by `parse`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Comparison => "default",
            Self::Radix { .. } => "radix",
            Self::Bucket => "bucket",
            Self::RecursiveBucket { .. } => "recursive bucket",
            Self::Spread => "spread",
        }
    }

    /// Return a copy of `records` in non-decreasing order of `key`.
    pub fn sort<T: JobRecord>(&self, records: &[T], key: SortKey) -> Result<Vec<T>, SortingError> {
        let mut sorted = records.to_vec();
        match *self {
            Self::Comparison => comparison_sort(&mut sorted, key),
            Self::Radix { base } => radix::sort(&mut sorted, key, base)?,
            Self::Bucket => bucket::sort(&mut sorted, key),
            Self::RecursiveBucket {
                min_bucket_size,
                max_depth,
            } => bucket::sort_recursive(&mut sorted, key, min_bucket_size, max_depth),
            Self::Spread => spread::sort(&mut sorted, key),
        }
        Ok(sorted)
    }
}

/// Sort in place by `key` with the standard library sort.
pub(crate) fn comparison_sort<T: JobRecord>(records: &mut [T], key: SortKey) {
    records.sort_by(|a, b| a.key(key).total_cmp(&b.key(key)));
}

/// Within each run of equal end times, move zero-length jobs behind the rest.
///
/// Keeps every job's compatible predecessors a prefix of the end order that
/// ends before the job itself, whichever way the sort broke the ties.
pub(crate) fn settle_end_ties<T: JobRecord>(end_ordered: &mut [T]) {
    let mut lo = 0;
    while lo < end_ordered.len() {
        let end = end_ordered[lo].end();
        let hi = lo + 1 + end_ordered[lo + 1..].partition_point(|r| r.end() == end);
        let run = &mut end_ordered[lo..hi];
        if run.len() > 1 && run.iter().any(|r| r.start() == r.end()) {
            let (mut spans, points): (Vec<T>, Vec<T>) =
                run.iter().partition(|r| r.start() < r.end());
            spans.extend(points);
            run.copy_from_slice(&spans);
        }
        lo = hi;
    }
}

/// Sort bare time values with `strategy`.
///
/// Each value is carried as a zero-length job, so every strategy and its key
/// domain checks apply unchanged.
pub fn sort_values(values: &[f64], strategy: &SortStrategy) -> Result<Vec<f64>, SortingError> {
    let points: Vec<Job> = values.iter().map(|&v| Job::new(v, v, 0.0)).collect();
    let sorted = strategy.sort(&points, SortKey::Start)?;
    Ok(sorted.into_iter().map(|job| job.start).collect())
}

/// Build the two views the predecessor mapper needs.
///
/// Sorts by end time, tags each job with its 1-indexed end-order rank, then
/// sorts the tagged records by start time. Both views carry the same tags.
pub fn sort_both_with_indices(
    jobs: &[Job],
    strategy: &SortStrategy,
) -> Result<(Vec<RankedJob>, Vec<RankedJob>), SortingError> {
    let mut by_end = strategy.sort(jobs, SortKey::End)?;
    settle_end_ties(&mut by_end);
    let end_ordered: Vec<RankedJob> = by_end
        .into_iter()
        .enumerate()
        .map(|(i, job)| job.ranked(i + 1))
        .collect();
    let start_ordered = strategy.sort(&end_ordered, SortKey::Start)?;
    Ok((end_ordered, start_ordered))
}
