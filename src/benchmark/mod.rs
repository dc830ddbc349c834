//! Repeated, seeded trials of one engine on one instance.
//!
//! [`BenchmarkHarness`] executes `run_count` independent runs, seeding run
//! `i` with `base_seed + i`, and folds them into a [`BenchmarkSummary`]
//! with cost and duration statistics. A run that fails is kept in the
//! summary as a failed record; it never aborts the others.
//!
//! Persisting the summary is left to the caller. With the `serde` feature
//! every type here serializes to the layout
//! `{ algorithm, num_cities, total_runs, reference_cost, stats, raw_results }`.

mod config;
mod harness;
mod stats;
mod summary;

pub use config::{Algorithm, BenchmarkConfig};
pub use harness::{run_algorithm, BenchmarkHarness};
pub use stats::CostStatistics;
pub use summary::{optimality_gap, BenchmarkSummary, RunOutcome, RunRecord, SummaryBuilder};
