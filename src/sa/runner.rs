//! SA execution loop.

use super::config::SaConfig;
use super::moves::{metropolis_probability, two_opt};
use crate::distance::DistanceMatrix;
use crate::error::{TspError, TspResult};
use crate::random::{create_rng, distinct_pair, random_permutation, seed_or_entropy};
use crate::tour::{close_tour, RunResult, Tour};
use rand::rngs::StdRng;
use rand::Rng;
use std::time::Instant;
use tracing::{debug, info};

/// Iterations between two convergence-history samples.
pub const HISTORY_INTERVAL: usize = 100;

/// Ceiling on history samples reserved before the loop starts; longer
/// schedules grow the buffer on demand.
const MAX_HISTORY_PREALLOC: usize = 1 << 16;

fn history_capacity(config: &SaConfig) -> usize {
    (config.max_iterations() / HISTORY_INTERVAL)
        .saturating_add(1)
        .min(MAX_HISTORY_PREALLOC)
}

/// Simulated Annealing over tours of one distance matrix.
///
/// One neighbor is proposed per temperature step and the temperature is
/// cooled geometrically after every step.
pub struct SaEngine<'a, R: Rng = StdRng> {
    distances: &'a DistanceMatrix,
    config: SaConfig,
    rng: R,
}

impl<'a> SaEngine<'a, StdRng> {
    /// Creates an engine seeded from `config.seed`, or from entropy when
    /// no seed is set.
    pub fn new(distances: &'a DistanceMatrix, config: &SaConfig) -> TspResult<Self> {
        let rng = create_rng(seed_or_entropy(config.seed));
        Self::with_rng(distances, config, rng)
    }
}

impl<'a, R: Rng> SaEngine<'a, R> {
    /// Creates an engine drawing from the given random source.
    ///
    /// `config.seed` is ignored.
    pub fn with_rng(distances: &'a DistanceMatrix, config: &SaConfig, rng: R) -> TspResult<Self> {
        config.validate()?;
        if distances.len() < 2 {
            return Err(TspError::config(format!(
                "SA needs at least 2 cities, got {}",
                distances.len()
            )));
        }
        Ok(Self {
            distances,
            config: config.clone(),
            rng,
        })
    }

    /// The engine's configuration.
    pub fn config(&self) -> &SaConfig {
        &self.config
    }

    /// Uniformly random starting tour.
    pub fn random_initial_tour(&mut self) -> Tour {
        random_permutation(self.distances.len(), &mut self.rng)
    }

    /// 2-opt neighbor: reverses `tour[i..=j]` for random `i < j`.
    ///
    /// # Panics
    /// Panics if `tour` has fewer than two cities.
    pub fn neighbor(&mut self, tour: &[usize]) -> Tour {
        assert!(tour.len() >= 2, "2-opt neighbor needs at least two cities");
        let (i, j) = distinct_pair(tour.len(), &mut self.rng);
        two_opt(tour, i, j)
    }

    /// Metropolis criterion. Improvements are accepted without drawing;
    /// anything else is tested against a fresh uniform sample.
    pub fn accept(&mut self, delta: f64, temperature: f64) -> bool {
        if delta < 0.0 {
            return true;
        }
        self.rng.random::<f64>() < metropolis_probability(delta, temperature)
    }

    /// Anneals from `initial_temperature` down to `stopping_temperature`.
    pub fn run(mut self) -> TspResult<RunResult> {
        let start = Instant::now();
        info!(
            cities = self.distances.len(),
            initial_temperature = self.config.initial_temperature,
            cooling_rate = self.config.cooling_rate,
            stopping_temperature = self.config.stopping_temperature,
            "starting simulated annealing"
        );

        let mut current = self.random_initial_tour();
        let mut current_cost = self.distances.cost(&current)?;
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut temperature = self.config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut history = Vec::with_capacity(history_capacity(&self.config));

        while temperature > self.config.stopping_temperature {
            let candidate = self.neighbor(&current);
            let candidate_cost = self.distances.cost(&candidate)?;
            let delta = candidate_cost - current_cost;

            if self.accept(delta, temperature) {
                if delta < 0.0 {
                    improving_moves += 1;
                }
                accepted_moves += 1;
                current = candidate;
                current_cost = candidate_cost;
            }

            if current_cost < best_cost {
                best.clone_from(&current);
                best_cost = current_cost;
                debug!(iteration = iterations, temperature, best_cost, "new best tour");
            }

            temperature *= self.config.cooling_rate;
            iterations += 1;

            if iterations.is_multiple_of(HISTORY_INTERVAL) {
                history.push(best_cost);
            }
        }

        let duration = start.elapsed();
        info!(
            best_cost,
            iterations,
            accepted_moves,
            improving_moves,
            final_temperature = temperature,
            elapsed = ?duration,
            "simulated annealing finished"
        );

        Ok(RunResult {
            tour: close_tour(&best),
            best_cost,
            duration,
            convergence_history: history,
            iterations,
        })
    }
}
