//! Minimal evolutionary engine for fixed-length binary chromosomes.
//!
//! Provides the genetic-operator engine and the population lifecycle:
//!
//! - **Chromosome / Individual**: a bit vector plus its cached fitness,
//!   recomputed whenever the chromosome changes.
//! - **Fitness**: pluggable scoring; the default counts set bits (OneMax).
//! - **Mutation**: single bit flip at a uniformly random position.
//! - **Crossover**: single-point recombination producing two fresh offspring.
//! - **Population**: fixed-size, owned collection with uniform parent choice.
//! - **Evolution step**: one mutation applied to every individual in order.
//!
//! # Architecture
//!
//! All randomness is injected through a [`rand::Rng`] parameter, and the
//! process-wide counters (individuals created, mutations performed) live in
//! an explicit [`ga::Counters`] object. Presentation concerns (menus,
//! prompts, printing) are left to the caller, which drives the engine
//! through [`ga::GaEngine`].

pub mod ga;
