//! Genetic Algorithm for the TSP.
//!
//! Evolves a fixed-size population of tours. Each generation keeps its
//! single best tour unmodified (elitism) and fills the remaining slots
//! with children produced by tournament selection, Ordered Crossover and
//! swap mutation.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, mutation rate, generations)
//! - [`GaEngine`]: Executes the evolutionary loop
//!
//! # Submodules
//!
//! - [`operators`]: Ordered Crossover (OX) and swap mutation
//! - [`selection`]: Fixed-size tournament selection
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"

mod config;
pub mod operators;
mod runner;
pub mod selection;

pub use config::GaConfig;
pub use runner::GaEngine;
