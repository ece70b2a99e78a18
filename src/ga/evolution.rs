//! One-generation advance.
//!
//! A generation here is exactly one mutation per individual, applied in
//! index order. There is no selection pressure, replacement, or
//! convergence check.

use super::population::Population;
use super::types::{FitnessFunction, MutationOperator};
use rand::Rng;
use tracing::{debug, instrument};

/// Mutates every individual in `population` exactly once, in index order.
///
/// Given a seeded random source the result is deterministic.
#[instrument(level = "debug", skip_all, fields(size = population.len()))]
pub fn evolve<F, M, R>(population: &mut Population<F>, mutation: &M, rng: &mut R)
where
    F: FitnessFunction + Clone,
    M: MutationOperator,
    R: Rng,
{
    let mutated = population
        .individuals_mut()
        .iter_mut()
        .filter_map(|ind| mutation.perform(ind, rng))
        .count();
    population.counters().record_mutations(mutated as u64);

    debug!(
        mutated,
        best = population.best().fitness(),
        mean = population.mean_fitness(),
        "population evolved"
    );
}
