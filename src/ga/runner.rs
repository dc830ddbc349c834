//! GA evolutionary loop execution.
//!
//! [`GaEngine`] orchestrates the complete evolutionary process:
//! initialization → evaluation → elitism → selection → crossover → mutation → repeat.

use super::config::GaConfig;
use super::operators::{order_crossover, swap_mutation};
use super::selection::tournament;
use crate::distance::DistanceMatrix;
use crate::error::{TspError, TspResult};
use crate::random::{create_rng, random_permutation, seed_or_entropy};
use crate::tour::{close_tour, RunResult, Tour};
use rand::rngs::StdRng;
use rand::Rng;
use std::time::Instant;
use tracing::{debug, info, trace};

/// Genetic Algorithm over tours of one distance matrix.
///
/// The engine borrows the matrix read-only and owns its random source, so
/// several engines can run side by side on the same instance.
///
/// # Usage
///
/// ```
/// use tsp_metaheur::DistanceMatrix;
/// use tsp_metaheur::ga::{GaConfig, GaEngine};
///
/// let m = DistanceMatrix::from_coordinates(&[
///     (0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.5, 2.0),
/// ]).unwrap();
/// let config = GaConfig::default().with_generation_count(50).with_seed(2026);
/// let result = GaEngine::new(&m, &config).unwrap().run().unwrap();
/// assert_eq!(result.tour.len(), 6);
/// assert_eq!(result.tour.first(), result.tour.last());
/// ```
pub struct GaEngine<'a, R: Rng = StdRng> {
    distances: &'a DistanceMatrix,
    config: GaConfig,
    rng: R,
}

impl<'a> GaEngine<'a, StdRng> {
    /// Creates an engine seeded from `config.seed`, or from entropy when
    /// no seed is set.
    pub fn new(distances: &'a DistanceMatrix, config: &GaConfig) -> TspResult<Self> {
        let rng = create_rng(seed_or_entropy(config.seed));
        Self::with_rng(distances, config, rng)
    }
}

impl<'a, R: Rng> GaEngine<'a, R> {
    /// Creates an engine drawing from the given random source.
    ///
    /// `config.seed` is ignored.
    pub fn with_rng(distances: &'a DistanceMatrix, config: &GaConfig, rng: R) -> TspResult<Self> {
        config.validate()?;
        if distances.len() < 2 {
            return Err(TspError::config(format!(
                "GA needs at least 2 cities, got {}",
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
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// `population_size` independent random permutations.
    pub fn initialize_population(&mut self) -> Vec<Tour> {
        let n = self.distances.len();
        (0..self.config.population_size)
            .map(|_| random_permutation(n, &mut self.rng))
            .collect()
    }

    /// Closed-tour cost of every individual, in population order.
    pub fn evaluate(&self, population: &[Tour]) -> TspResult<Vec<f64>> {
        population
            .iter()
            .map(|tour| self.distances.cost(tour))
            .collect()
    }

    /// Tournament winner among the population.
    pub fn select<'p>(&mut self, population: &'p [Tour], costs: &[f64]) -> &'p Tour {
        &population[tournament(costs, &mut self.rng)]
    }

    /// Ordered crossover of two parents into one child.
    pub fn crossover(&mut self, parent1: &[usize], parent2: &[usize]) -> Tour {
        order_crossover(parent1, parent2, &mut self.rng)
    }

    /// Applies swap mutation with probability `mutation_rate`.
    pub fn mutate(&mut self, mut tour: Tour) -> Tour {
        swap_mutation(&mut tour, self.config.mutation_rate, &mut self.rng);
        tour
    }

    /// Builds the next population from an evaluated one.
    ///
    /// Slot 0 is the lowest-cost tour of `population` (first one on ties),
    /// copied unmodified; the other slots are select → crossover → mutate
    /// children. `population` itself is left untouched.
    ///
    /// # Panics
    /// Panics if `population` is empty or `costs` has a different length.
    pub fn next_generation(&mut self, population: &[Tour], costs: &[f64]) -> Vec<Tour> {
        assert_eq!(population.len(), costs.len(), "one cost per individual");
        let elite = argmin(costs);

        let mut next = Vec::with_capacity(self.config.population_size);
        next.push(population[elite].clone());
        while next.len() < self.config.population_size {
            let parent1 = self.select(population, costs);
            let parent2 = self.select(population, costs);
            let child = self.crossover(parent1, parent2);
            next.push(self.mutate(child));
        }
        next
    }

    /// Runs `generation_count` generations and returns the best tour seen.
    ///
    /// Each generation is evaluated in full before the next one is built
    /// by [`next_generation`](Self::next_generation).
    pub fn run(mut self) -> TspResult<RunResult> {
        let start = Instant::now();
        let n = self.distances.len();
        info!(
            cities = n,
            population = self.config.population_size,
            generations = self.config.generation_count,
            "starting genetic algorithm"
        );

        let mut population = self.initialize_population();
        let mut best_tour: Tour = Vec::new();
        let mut best_cost = f64::INFINITY;
        let mut history = Vec::with_capacity(self.config.generation_count);

        for generation in 0..self.config.generation_count {
            let costs = self.evaluate(&population)?;
            let elite = argmin(&costs);

            // Generation 0 always seeds the best, even when every cost is infinite
            if best_tour.is_empty() || costs[elite] < best_cost {
                best_cost = costs[elite];
                best_tour = population[elite].clone();
                debug!(generation, best_cost, "new best tour");
            }
            history.push(best_cost);
            trace!(generation, generation_best = costs[elite], best_cost);

            population = self.next_generation(&population, &costs);
        }

        let duration = start.elapsed();
        info!(best_cost, elapsed = ?duration, "genetic algorithm finished");

        Ok(RunResult {
            tour: close_tour(&best_tour),
            best_cost,
            duration,
            convergence_history: history,
            iterations: self.config.generation_count,
        })
    }
}

/// Index of the lowest cost; the first one wins ties.
fn argmin(costs: &[f64]) -> usize {
    costs
        .iter()
        .enumerate()
        .fold(0, |best, (i, &c)| if c < costs[best] { i } else { best })
}

// ============================================================================
// Tests
// ============================================================================
