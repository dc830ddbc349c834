//! Benchmark configuration and algorithm selection.

use crate::error::{TspError, TspResult};
use crate::ga::GaConfig;
use crate::sa::SaConfig;

/// Which engine a benchmark runs, with its parameters.
///
/// The `seed` field of the inner config is overwritten per run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    /// Genetic Algorithm.
    Ga(GaConfig),
    /// Simulated Annealing.
    Sa(SaConfig),
}

impl Algorithm {
    /// Short identifier used in summaries and logs.
    pub fn id(&self) -> &'static str {
        match self {
            Algorithm::Ga(_) => "ga",
            Algorithm::Sa(_) => "sa",
        }
    }

    fn validate(&self) -> TspResult<()> {
        match self {
            Algorithm::Ga(config) => config.validate(),
            Algorithm::Sa(config) => config.validate(),
        }
    }
}

impl Default for Algorithm {
    fn default() -> Self {
        Algorithm::Ga(GaConfig::default())
    }
}

/// Configuration for a seeded multi-run benchmark.
///
/// # Examples
///
/// ```
/// use tsp_metaheur::benchmark::{Algorithm, BenchmarkConfig};
/// use tsp_metaheur::sa::SaConfig;
///
/// let config = BenchmarkConfig::new(Algorithm::Sa(SaConfig::default()))
///     .with_run_count(10)
///     .with_base_seed(7);
/// assert_eq!(config.seed_for(3), 10);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BenchmarkConfig {
    /// Engine under test.
    pub algorithm: Algorithm,

    /// Number of independent runs.
    pub run_count: usize,

    /// Run `i` (0-based) is seeded with `base_seed + i`.
    pub base_seed: u64,

    /// Whether to spread runs over the rayon thread pool.
    ///
    /// Has no effect without the `parallel` feature. Results are identical
    /// either way.
    pub parallel: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            run_count: 30,
            base_seed: 2000,
            parallel: true,
        }
    }
}

impl BenchmarkConfig {
    /// Default settings for the given algorithm.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            ..Self::default()
        }
    }

    pub fn with_run_count(mut self, n: usize) -> Self {
        self.run_count = n;
        self
    }

    pub fn with_base_seed(mut self, seed: u64) -> Self {
        self.base_seed = seed;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Seed of the 0-based run `index`.
    pub fn seed_for(&self, index: usize) -> u64 {
        self.base_seed.wrapping_add(index as u64)
    }

    /// Validates the harness settings.
    ///
    /// The algorithm parameters are checked per run so that the failure is
    /// recorded in the summary rather than aborting the benchmark.
    pub fn validate(&self) -> TspResult<()> {
        if self.run_count == 0 {
            return Err(TspError::config("run_count must be at least 1"));
        }
        Ok(())
    }

    /// Validates both the harness settings and the algorithm parameters.
    pub fn validate_all(&self) -> TspResult<()> {
        self.validate()?;
        self.algorithm.validate()
    }
}
