//! Core data types for weighted job scheduling.

use pyo3::prelude::*;
use std::collections::HashMap;

use crate::sorting::SortKey;

/// Common view over the 3-field and 4-field job records.
///
/// Every sort strategy is generic over this trait, so both the raw job list
/// and the rank-tagged end-ordered sequence go through the same code.
pub trait JobRecord: Copy {
    fn start(&self) -> f64;
    fn end(&self) -> f64;
    fn weight(&self) -> f64;

    /// Value of the selected sort key.
    #[inline]
    fn key(&self, key: SortKey) -> f64 {
        match key {
            SortKey::Start => self.start(),
            SortKey::End => self.end(),
        }
    }

    /// Drop any extra fields, keeping the plain job.
    fn to_job(&self) -> Job {
        Job::new(self.start(), self.end(), self.weight())
    }
}

/// A job occupying `[start, end]` with an associated weight.
#[pyclass]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Job {
    #[pyo3(get)]
    pub start: f64,
    #[pyo3(get)]
    pub end: f64,
    #[pyo3(get)]
    pub weight: f64,
}

impl Job {
    pub fn new(start: f64, end: f64, weight: f64) -> Self {
        Self { start, end, weight }
    }

    /// Tag this job with its 1-indexed end-order rank.
    pub fn ranked(self, rank: usize) -> RankedJob {
        RankedJob {
            start: self.start,
            end: self.end,
            weight: self.weight,
            rank,
        }
    }
}

#[pymethods]
impl Job {
    #[new]
    fn py_new(start: f64, end: f64, weight: f64) -> Self {
        Self::new(start, end, weight)
    }

    fn __repr__(&self) -> String {
        format!(
            "Job(start={}, end={}, weight={})",
            self.start, self.end, self.weight
        )
    }
}

impl JobRecord for Job {
    #[inline]
    fn start(&self) -> f64 {
        self.start
    }
    #[inline]
    fn end(&self) -> f64 {
        self.end
    }
    #[inline]
    fn weight(&self) -> f64 {
        self.weight
    }
}

impl From<(f64, f64, f64)> for Job {
    fn from((start, end, weight): (f64, f64, f64)) -> Self {
        Self { start, end, weight }
    }
}

impl From<Job> for (f64, f64, f64) {
    fn from(job: Job) -> Self {
        (job.start, job.end, job.weight)
    }
}

/// A job tagged with its end-order rank.
///
/// The rank is assigned once, when the end-ordered sequence is built, and
/// carried unchanged through the start-time sort.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RankedJob {
    pub start: f64,
    pub end: f64,
    pub weight: f64,
    pub rank: usize,
}

impl JobRecord for RankedJob {
    #[inline]
    fn start(&self) -> f64 {
        self.start
    }
    #[inline]
    fn end(&self) -> f64 {
        self.end
    }
    #[inline]
    fn weight(&self) -> f64 {
        self.weight
    }
}

impl From<(f64, f64, f64, usize)> for RankedJob {
    fn from((start, end, weight, rank): (f64, f64, f64, usize)) -> Self {
        Self {
            start,
            end,
            weight,
            rank,
        }
    }
}

impl From<RankedJob> for (f64, f64, f64, usize) {
    fn from(job: RankedJob) -> Self {
        (job.start, job.end, job.weight, job.rank)
    }
}

/// Result of a scheduling run.
#[pyclass]
#[derive(Clone, Debug, Default)]
pub struct Schedule {
    /// Maximum achievable total weight.
    #[pyo3(get)]
    pub total_weight: f64,
    /// One optimal subset of mutually compatible jobs, in end-time order.
    #[pyo3(get)]
    pub selected: Vec<Job>,
    #[pyo3(get)]
    pub algorithm_metadata: HashMap<String, String>,
}

#[pymethods]
impl Schedule {
    fn __repr__(&self) -> String {
        format!(
            "Schedule(total_weight={}, selected={}, metadata_keys={})",
            self.total_weight,
            self.selected.len(),
            self.algorithm_metadata.len()
        )
    }
}
