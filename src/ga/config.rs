//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::{TspError, TspResult};

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use tsp_metaheur::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.generation_count, 500);
/// assert!((config.mutation_rate - 0.01).abs() < 1e-12);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use tsp_metaheur::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_generation_count(100)
///     .with_mutation_rate(0.05)
///     .with_seed(2026);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of tours in every generation.
    pub population_size: usize,

    /// Probability that a child receives one swap mutation (0.0–1.0).
    pub mutation_rate: f64,

    /// Number of generations to evolve. There is no early stopping.
    pub generation_count: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a fresh seed per run.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            mutation_rate: 0.01,
            generation_count: 500,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the mutation rate, clamped into `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the number of generations.
    pub fn with_generation_count(mut self, n: usize) -> Self {
        self.generation_count = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> TspResult<()> {
        if self.population_size == 0 {
            return Err(TspError::config("population_size must be at least 1"));
        }
        if self.generation_count == 0 {
            return Err(TspError::config("generation_count must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(TspError::config(format!(
                "mutation_rate must be in [0, 1], got {}",
                self.mutation_rate
            )));
        }
        Ok(())
    }
}
