//! Configuration types for the solvers.

use pyo3::prelude::*;

use crate::sorting::{check_radix_base, SortStrategy, SortingError};

/// Configuration for sort strategy selection and tuning.
#[pyclass]
#[derive(Clone, Debug)]
pub struct SolverConfig {
    /// Sort strategy: "default", "radix", "bucket", "recursive bucket", or "spread"
    #[pyo3(get, set)]
    pub strategy: String,
    /// Digit base for radix sort
    #[pyo3(get, set)]
    pub radix_base: u32,
    /// Buckets at or below this size are finished with a comparison sort
    #[pyo3(get, set)]
    pub bucket_min_size: usize,
    /// Maximum re-bucketing depth for recursive bucket sort
    #[pyo3(get, set)]
    pub bucket_max_depth: usize,
    /// Logging verbosity (0-3), see `logging`
    #[pyo3(get, set)]
    pub verbosity: u8,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            strategy: "default".to_string(),
            radix_base: 10,
            bucket_min_size: 16,
            bucket_max_depth: 10,
            verbosity: 0,
        }
    }
}

impl SolverConfig {
    /// Default configuration with the given strategy name.
    pub fn with_strategy(strategy: &str) -> Self {
        Self {
            strategy: strategy.to_string(),
            ..Self::default()
        }
    }

    /// Resolve the strategy name into a tuned `SortStrategy`.
    pub fn sort_strategy(&self) -> Result<SortStrategy, SortingError> {
        match SortStrategy::parse(&self.strategy)? {
            SortStrategy::Radix { .. } => {
                check_radix_base(self.radix_base)?;
                Ok(SortStrategy::Radix {
                    base: self.radix_base,
                })
            }
            SortStrategy::RecursiveBucket { .. } => Ok(SortStrategy::RecursiveBucket {
                min_bucket_size: self.bucket_min_size,
                max_depth: self.bucket_max_depth,
            }),
            other => Ok(other),
        }
    }
}

#[pymethods]
impl SolverConfig {
    #[new]
    #[pyo3(signature = (
        strategy=None,
        radix_base=None,
        bucket_min_size=None,
        bucket_max_depth=None,
        verbosity=None
    ))]
    fn new(
        strategy: Option<String>,
        radix_base: Option<u32>,
        bucket_min_size: Option<usize>,
        bucket_max_depth: Option<usize>,
        verbosity: Option<u8>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            strategy: strategy.unwrap_or(defaults.strategy),
            radix_base: radix_base.unwrap_or(defaults.radix_base),
            bucket_min_size: bucket_min_size.unwrap_or(defaults.bucket_min_size),
            bucket_max_depth: bucket_max_depth.unwrap_or(defaults.bucket_max_depth),
            verbosity: verbosity.unwrap_or(defaults.verbosity),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "SolverConfig(strategy={:?}, radix_base={}, verbosity={})",
            self.strategy, self.radix_base, self.verbosity
        )
    }
}
