//! Metaheuristics for the Traveling Salesman Problem.
//!
//! Two independent stochastic optimizers over a shared tour/cost model,
//! plus a harness that compares them across seeded trials:
//!
//! - **Genetic Algorithm (GA)**: Population-based evolution with tournament
//!   selection, Ordered Crossover, swap mutation and single-slot elitism.
//! - **Simulated Annealing (SA)**: Single-tour trajectory search with 2-opt
//!   neighbors, Metropolis acceptance and geometric cooling.
//! - **Benchmark**: Runs either engine N times with distinct seeds and
//!   aggregates cost and runtime statistics, including the optimality gap
//!   to a known reference cost when one is available.
//!
//! # Architecture
//!
//! A [`DistanceMatrix`] is built once per instance and borrowed read-only
//! by every engine. Engines own their random source and all search state,
//! so runs are independent and may execute on separate threads. Instance
//! generation, exact solvers and result persistence live outside this crate.
//!
//! # Example
//!
//! ```
//! use tsp_metaheur::DistanceMatrix;
//! use tsp_metaheur::sa::{SaConfig, SaEngine};
//!
//! let m = DistanceMatrix::from_coordinates(&[
//!     (0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0),
//! ]).unwrap();
//! let result = SaEngine::new(&m, &SaConfig::default().with_seed(42))
//!     .unwrap()
//!     .run()
//!     .unwrap();
//! assert!((result.best_cost - 8.0).abs() < 1e-9);
//! ```

pub mod benchmark;
pub mod distance;
pub mod error;
pub mod ga;
pub mod random;
pub mod sa;
pub mod tour;

pub use distance::DistanceMatrix;
pub use error::{TourViolation, TspError, TspResult};
pub use tour::{close_tour, RunResult, Tour};
