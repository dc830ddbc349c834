//! Seeded multi-run execution.

use super::config::{Algorithm, BenchmarkConfig};
use super::summary::{BenchmarkSummary, RunRecord, SummaryBuilder};
use crate::distance::DistanceMatrix;
use crate::error::TspResult;
use crate::ga::GaEngine;
use crate::sa::SaEngine;
use crate::tour::RunResult;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{info, warn};

/// Runs one engine `run_count` times against a fixed instance.
///
/// Every run gets its own engine and its own generator seeded with
/// `base_seed + index`, so the summary is the same whether the runs are
/// executed sequentially or on the rayon pool.
///
/// # Usage
///
/// ```
/// use tsp_metaheur::DistanceMatrix;
/// use tsp_metaheur::benchmark::{Algorithm, BenchmarkConfig, BenchmarkHarness};
/// use tsp_metaheur::ga::GaConfig;
///
/// let m = DistanceMatrix::from_coordinates(&[
///     (0.0, 0.0), (3.0, 0.0), (3.0, 4.0), (0.0, 4.0), (1.0, 2.0),
/// ]).unwrap();
/// let config = BenchmarkConfig::new(Algorithm::Ga(GaConfig::default().with_generation_count(20)))
///     .with_run_count(3);
/// let summary = BenchmarkHarness::new(config).unwrap().run(&m, None);
/// assert_eq!(summary.total_runs, 3);
/// assert!(summary.stats.is_some());
/// ```
#[derive(Debug, Clone)]
pub struct BenchmarkHarness {
    config: BenchmarkConfig,
}

impl BenchmarkHarness {
    /// Creates a harness. Fails only on harness-level settings; algorithm
    /// parameter errors are reported per run in the summary.
    pub fn new(config: BenchmarkConfig) -> TspResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Executes all runs and aggregates them.
    ///
    /// `reference_cost` is the known optimum, when available. A failing run
    /// is recorded as such and never aborts its siblings.
    pub fn run(&self, distances: &DistanceMatrix, reference_cost: Option<f64>) -> BenchmarkSummary {
        let algorithm = self.config.algorithm.id();
        info!(
            algorithm,
            cities = distances.len(),
            runs = self.config.run_count,
            ?reference_cost,
            "starting benchmark"
        );

        let records = self.execute(distances, reference_cost);

        let mut builder = SummaryBuilder::new(algorithm, distances.len(), reference_cost);
        for record in records {
            builder.push(record);
        }
        let summary = builder.finish();

        match &summary.stats {
            Some(stats) => info!(
                algorithm,
                completed = summary.completed_runs(),
                mean_cost = stats.mean_cost,
                std_cost = stats.std_cost,
                min_cost = stats.min_cost,
                "benchmark finished"
            ),
            None => warn!(algorithm, "benchmark finished without a completed run"),
        }
        summary
    }

    #[cfg(feature = "parallel")]
    fn execute(&self, distances: &DistanceMatrix, reference_cost: Option<f64>) -> Vec<RunRecord> {
        if self.config.parallel {
            (0..self.config.run_count)
                .into_par_iter()
                .map(|index| self.run_once(distances, index, reference_cost))
                .collect()
        } else {
            self.execute_sequential(distances, reference_cost)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn execute(&self, distances: &DistanceMatrix, reference_cost: Option<f64>) -> Vec<RunRecord> {
        self.execute_sequential(distances, reference_cost)
    }

    fn execute_sequential(
        &self,
        distances: &DistanceMatrix,
        reference_cost: Option<f64>,
    ) -> Vec<RunRecord> {
        (0..self.config.run_count)
            .map(|index| self.run_once(distances, index, reference_cost))
            .collect()
    }

    /// One isolated run. Errors become a failed record.
    fn run_once(
        &self,
        distances: &DistanceMatrix,
        index: usize,
        reference_cost: Option<f64>,
    ) -> RunRecord {
        let seed = self.config.seed_for(index);
        let run = index + 1;
        match run_algorithm(&self.config.algorithm, distances, seed) {
            Ok(result) => RunRecord::completed(run, seed, result, reference_cost),
            Err(err) => {
                warn!(run, seed, error = %err, "benchmark run failed");
                RunRecord::failed(run, seed, err)
            }
        }
    }
}

/// Builds the selected engine with `seed` and runs it to completion.
pub fn run_algorithm(
    algorithm: &Algorithm,
    distances: &DistanceMatrix,
    seed: u64,
) -> TspResult<RunResult> {
    match algorithm {
        Algorithm::Ga(config) => {
            let config = config.clone().with_seed(seed);
            GaEngine::new(distances, &config)?.run()
        }
        Algorithm::Sa(config) => {
            let config = config.clone().with_seed(seed);
            SaEngine::new(distances, &config)?.run()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmark::RunOutcome;
    use crate::ga::GaConfig;
    use crate::random::create_rng;
    use crate::sa::SaConfig;
    use rand::Rng;

    fn points(n: usize, seed: u64) -> DistanceMatrix {
        let mut rng = create_rng(seed);
        let pts: Vec<(f64, f64)> = (0..n)
            .map(|_| (rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)))
            .collect();
        DistanceMatrix::from_coordinates(&pts).unwrap()
    }

    fn small_ga() -> Algorithm {
        Algorithm::Ga(
            GaConfig::default()
                .with_population_size(30)
                .with_generation_count(30),
        )
    }

    fn small_sa() -> Algorithm {
        Algorithm::Sa(SaConfig::default().with_cooling_rate(0.95))
    }

    #[test]
    fn test_rejects_zero_runs() {
        let config = BenchmarkConfig::new(small_ga()).with_run_count(0);
        assert!(BenchmarkHarness::new(config).is_err());
    }

    #[test]
    fn test_seeds_and_run_numbers() {
        let m = points(6, 1);
        let config = BenchmarkConfig::new(small_sa())
            .with_run_count(4)
            .with_base_seed(100);
        let summary = BenchmarkHarness::new(config).unwrap().run(&m, None);

        assert_eq!(summary.algorithm, "sa");
        assert_eq!(summary.num_cities, 6);
        let pairs: Vec<(usize, u64)> = summary.raw_results.iter().map(|r| (r.run, r.seed)).collect();
        assert_eq!(pairs, vec![(1, 100), (2, 101), (3, 102), (4, 103)]);
    }

    #[test]
    fn test_single_run_has_zero_spread() {
        let m = points(6, 2);
        let config = BenchmarkConfig::new(small_ga()).with_run_count(1);
        let summary = BenchmarkHarness::new(config).unwrap().run(&m, None);

        let stats = summary.stats.unwrap();
        assert_eq!(stats.std_cost, 0.0);
        assert_eq!(stats.variance_cost, 0.0);
        assert_eq!(stats.min_cost, stats.max_cost);
    }

    #[test]
    fn test_gap_with_reference() {
        let m = points(5, 3);
        let reference = 50.0;
        let config = BenchmarkConfig::new(small_sa()).with_run_count(3);
        let summary = BenchmarkHarness::new(config).unwrap().run(&m, Some(reference));

        for record in &summary.raw_results {
            match &record.outcome {
                RunOutcome::Completed {
                    best_cost,
                    optimality_gap_percent,
                    ..
                } => {
                    let expected = (best_cost - reference) / reference * 100.0;
                    let gap = optimality_gap_percent.expect("reference is positive");
                    assert!((gap - expected).abs() < 1e-4);
                }
                RunOutcome::Failed { error } => panic!("unexpected failure: {error}"),
            }
        }
    }

    #[test]
    fn test_gap_absent_without_reference() {
        let m = points(5, 3);
        let config = BenchmarkConfig::new(small_ga()).with_run_count(2);
        let summary = BenchmarkHarness::new(config).unwrap().run(&m, Some(0.0));
        for record in &summary.raw_results {
            assert!(matches!(
                record.outcome,
                RunOutcome::Completed {
                    optimality_gap_percent: None,
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_failed_runs_are_recorded() {
        let m = DistanceMatrix::new(vec![vec![0.0]]).unwrap();
        let config = BenchmarkConfig::new(small_ga()).with_run_count(3);
        let summary = BenchmarkHarness::new(config).unwrap().run(&m, None);

        assert_eq!(summary.total_runs, 3);
        assert_eq!(summary.completed_runs(), 0);
        assert_eq!(summary.failures().count(), 3);
        assert!(summary.stats.is_none());
    }

    #[test]
    fn test_invalid_algorithm_config_fails_per_run() {
        let m = points(5, 4);
        let config =
            BenchmarkConfig::new(Algorithm::Ga(GaConfig::default().with_population_size(0)))
                .with_run_count(2);
        let summary = BenchmarkHarness::new(config).unwrap().run(&m, None);
        for record in &summary.raw_results {
            match &record.outcome {
                RunOutcome::Failed { error } => assert!(error.contains("population_size")),
                RunOutcome::Completed { .. } => panic!("expected failure"),
            }
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let m = points(8, 5);
        let base = BenchmarkConfig::new(small_ga()).with_run_count(6);
        let parallel = BenchmarkHarness::new(base.clone().with_parallel(true))
            .unwrap()
            .run(&m, None);
        let sequential = BenchmarkHarness::new(base.with_parallel(false))
            .unwrap()
            .run(&m, None);

        let costs = |s: &BenchmarkSummary| -> Vec<Option<f64>> {
            s.raw_results.iter().map(|r| r.best_cost()).collect()
        };
        assert_eq!(costs(&parallel), costs(&sequential));
    }

    #[test]
    fn test_run_algorithm_matches_engine() {
        let m = points(7, 6);
        let algorithm = small_sa();
        let via_harness = run_algorithm(&algorithm, &m, 2026).unwrap();
        let direct = SaEngine::new(&m, &SaConfig::default().with_cooling_rate(0.95).with_seed(2026))
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(via_harness.tour, direct.tour);
        assert_eq!(via_harness.best_cost, direct.best_cost);
    }
}
