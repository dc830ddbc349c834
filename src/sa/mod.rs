//! Simulated Annealing (SA) for the TSP.
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Worsening 2-opt moves are accepted with a
//! probability that shrinks as the temperature cools geometrically,
//! allowing the search to escape local optima early on.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"
//! - Croes (1958), "A Method for Solving Traveling-Salesman Problems"

mod config;
pub mod moves;
mod runner;

pub use config::SaConfig;
pub use runner::{SaEngine, HISTORY_INTERVAL};
