//! Per-run records and the benchmark summary.

use super::stats::CostStatistics;
use crate::tour::{RunResult, Tour};
use std::time::Duration;

/// Percentage deviation of `best_cost` from `reference_cost`.
///
/// Returns `None` when the reference is absent or not strictly positive:
/// an unknown reference must never read as a perfect (0%) tour.
///
/// ```
/// use tsp_metaheur::benchmark::optimality_gap;
///
/// assert_eq!(optimality_gap(110.0, Some(100.0)), Some(10.0));
/// assert_eq!(optimality_gap(110.0, None), None);
/// assert_eq!(optimality_gap(110.0, Some(0.0)), None);
/// ```
pub fn optimality_gap(best_cost: f64, reference_cost: Option<f64>) -> Option<f64> {
    match reference_cost {
        Some(reference) if reference > 0.0 => Some((best_cost - reference) / reference * 100.0),
        _ => None,
    }
}

fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}

/// What happened in a single benchmark run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "status", rename_all = "lowercase"))]
pub enum RunOutcome {
    /// The engine ran to completion.
    Completed {
        best_cost: f64,
        duration: Duration,
        /// Gap to the reference in percent, rounded to 4 decimals.
        /// `None` when no usable reference was supplied.
        optimality_gap_percent: Option<f64>,
        /// Closed best tour.
        tour: Tour,
    },
    /// The engine refused to start or broke an invariant.
    Failed {
        /// Rendered [`TspError`](crate::TspError).
        error: String,
    },
}

/// One row of a benchmark: run number, its seed, and the outcome.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunRecord {
    /// 1-based run number.
    pub run: usize,
    pub seed: u64,
    pub outcome: RunOutcome,
}

impl RunRecord {
    /// Record for a finished run.
    pub fn completed(run: usize, seed: u64, result: RunResult, reference_cost: Option<f64>) -> Self {
        Self {
            run,
            seed,
            outcome: RunOutcome::Completed {
                best_cost: result.best_cost,
                duration: result.duration,
                optimality_gap_percent: optimality_gap(result.best_cost, reference_cost)
                    .map(round4),
                tour: result.tour,
            },
        }
    }

    /// Record for a run that errored.
    pub fn failed(run: usize, seed: u64, error: impl ToString) -> Self {
        Self {
            run,
            seed,
            outcome: RunOutcome::Failed {
                error: error.to_string(),
            },
        }
    }

    /// Best cost, if the run completed.
    pub fn best_cost(&self) -> Option<f64> {
        match &self.outcome {
            RunOutcome::Completed { best_cost, .. } => Some(*best_cost),
            RunOutcome::Failed { .. } => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.outcome, RunOutcome::Completed { .. })
    }
}

/// Final report of a benchmark.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BenchmarkSummary {
    /// Algorithm id (`"ga"` or `"sa"`).
    pub algorithm: String,
    /// Number of cities in the instance.
    pub num_cities: usize,
    /// Number of runs attempted.
    pub total_runs: usize,
    /// Reference cost the gaps were measured against, if any.
    pub reference_cost: Option<f64>,
    /// Statistics over completed runs; `None` if every run failed.
    pub stats: Option<CostStatistics>,
    /// All runs in run order, failed ones included.
    pub raw_results: Vec<RunRecord>,
}

impl BenchmarkSummary {
    /// Number of runs that completed.
    pub fn completed_runs(&self) -> usize {
        self.raw_results.iter().filter(|r| r.is_completed()).count()
    }

    /// Runs that failed.
    pub fn failures(&self) -> impl Iterator<Item = &RunRecord> {
        self.raw_results.iter().filter(|r| !r.is_completed())
    }
}

/// Accumulates run records one at a time and produces the summary.
#[derive(Debug, Clone)]
pub struct SummaryBuilder {
    algorithm: String,
    num_cities: usize,
    reference_cost: Option<f64>,
    records: Vec<RunRecord>,
}

impl SummaryBuilder {
    pub fn new(algorithm: impl Into<String>, num_cities: usize, reference_cost: Option<f64>) -> Self {
        Self {
            algorithm: algorithm.into(),
            num_cities,
            reference_cost,
            records: Vec::new(),
        }
    }

    /// Appends one run.
    pub fn push(&mut self, record: RunRecord) {
        self.records.push(record);
    }

    /// Number of runs appended so far.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorts the records by run number and computes the statistics.
    pub fn finish(mut self) -> BenchmarkSummary {
        self.records.sort_by_key(|r| r.run);

        let (costs, durations): (Vec<f64>, Vec<f64>) = self
            .records
            .iter()
            .filter_map(|r| match &r.outcome {
                RunOutcome::Completed {
                    best_cost,
                    duration,
                    ..
                } => Some((*best_cost, duration.as_secs_f64())),
                RunOutcome::Failed { .. } => None,
            })
            .unzip();

        BenchmarkSummary {
            algorithm: self.algorithm,
            num_cities: self.num_cities,
            total_runs: self.records.len(),
            reference_cost: self.reference_cost,
            stats: CostStatistics::from_samples(&costs, &durations),
            raw_results: self.records,
        }
    }
}
