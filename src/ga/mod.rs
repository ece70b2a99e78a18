//! Binary-chromosome genetic algorithm engine.
//!
//! The engine is built from a small set of concrete types and strategy
//! traits. Problems plug in by choosing a [`FitnessFunction`]; the operators
//! are swappable through [`MutationOperator`] and [`CrossoverOperator`].
//!
//! # Core Types
//!
//! - [`Chromosome`]: fixed-length bit vector
//! - [`Individual`]: a chromosome plus its cached fitness
//! - [`Population`]: fixed-size owned collection of individuals
//! - [`Counters`]: individuals created and mutations performed
//!
//! # Key Types
//!
//! - [`GaConfig`]: population size, chromosome length, seed
//! - [`GaEngine`]: index-based façade used by a presentation shell
//! - [`GaError`]: invalid input and out-of-range failures
//!
//! # Submodules
//!
//! - [`operators`]: bit-flip mutation and single-point crossover
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod counters;
mod engine;
mod error;
mod evolution;
mod individual;
pub mod operators;
mod population;
mod types;

pub use config::GaConfig;
pub use counters::{CounterSnapshot, Counters};
pub use engine::GaEngine;
pub use error::{GaError, Result};
pub use evolution::evolve;
pub use individual::Individual;
#[cfg(feature = "serde")]
pub use individual::IndividualSnapshot;
pub use operators::{BitFlipMutation, SinglePointCrossover};
pub use population::Population;
pub use types::{Chromosome, CrossoverOperator, FitnessFunction, MutationOperator, OneMax};
