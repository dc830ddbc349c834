//! SA configuration.

use crate::error::{TspError, TspResult};

/// Configuration for Simulated Annealing with geometric cooling.
///
/// The temperature starts at `initial_temperature` and is multiplied by
/// `cooling_rate` after every iteration until it is no longer above
/// `stopping_temperature`. There is no reheating.
///
/// # Examples
///
/// ```
/// use tsp_metaheur::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(100.0)
///     .with_stopping_temperature(0.001)
///     .with_cooling_rate(0.995)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Starting temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Geometric cooling factor `alpha` in (0, 1). Higher = slower cooling.
    pub cooling_rate: f64,

    /// The run ends once the temperature drops to or below this floor.
    pub stopping_temperature: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            cooling_rate: 0.99,
            stopping_temperature: 1e-6,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, alpha: f64) -> Self {
        self.cooling_rate = alpha;
        self
    }

    pub fn with_stopping_temperature(mut self, t: f64) -> Self {
        self.stopping_temperature = t;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of cooling steps before the temperature drops to
    /// `stopping_temperature`: `ceil(ln(stop / initial) / ln(alpha))`.
    ///
    /// This is the termination bound of the annealing loop. Floating-point
    /// drift in the repeated multiplication can shift the actual count by
    /// one step. For `alpha` very close to 1 the value is huge (it saturates
    /// at `usize::MAX`), so callers must not allocate proportionally to it.
    pub fn max_iterations(&self) -> usize {
        let steps = (self.stopping_temperature / self.initial_temperature).ln()
            / self.cooling_rate.ln();
        steps.ceil().max(0.0) as usize
    }

    /// Validates the configuration.
    pub fn validate(&self) -> TspResult<()> {
        if !(self.initial_temperature > 0.0 && self.initial_temperature.is_finite()) {
            return Err(TspError::config("initial_temperature must be positive"));
        }
        if !(self.stopping_temperature > 0.0) {
            return Err(TspError::config("stopping_temperature must be positive"));
        }
        if self.stopping_temperature >= self.initial_temperature {
            return Err(TspError::config(
                "stopping_temperature must be less than initial_temperature",
            ));
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(TspError::config(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            )));
        }
        Ok(())
    }
}
