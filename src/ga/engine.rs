//! Index-based façade over a population.
//!
//! [`GaEngine`] owns the population, random source, operators and counters
//! of one session, and exposes the operations a presentation shell calls by
//! individual index.

use super::config::GaConfig;
use super::counters::{CounterSnapshot, Counters};
use super::error::Result;
use super::individual::Individual;
use super::operators::{BitFlipMutation, SinglePointCrossover};
use super::population::Population;
use super::types::{Chromosome, CrossoverOperator, FitnessFunction, MutationOperator, OneMax};
use rand::rngs::StdRng;
use std::sync::Arc;
use tracing::{info, instrument};

/// Drives a single population.
///
/// # Usage
///
/// ```
/// use u_bitga::ga::{GaConfig, GaEngine};
///
/// let config = GaConfig::default()
///     .with_population_size(5)
///     .with_chromosome_length(8)
///     .with_seed(42);
/// let mut engine = GaEngine::new(&config).unwrap();
///
/// let (child1, child2) = engine.crossover(0, 1).unwrap();
/// assert_eq!(child1.len(), 8);
/// assert_eq!(child2.len(), 8);
///
/// engine.evolve();
/// assert_eq!(engine.counters().mutations_performed, 5);
/// ```
pub struct GaEngine<F = OneMax, M = BitFlipMutation, C = SinglePointCrossover> {
    config: GaConfig,
    population: Population<F>,
    mutation: M,
    crossover: C,
    rng: StdRng,
    counters: Arc<Counters>,
    generation: usize,
}

impl GaEngine {
    /// Builds an engine with OneMax fitness, bit-flip mutation and
    /// single-point crossover.
    ///
    /// Returns [`GaError::InvalidInput`](super::GaError::InvalidInput) if
    /// the configuration is invalid.
    pub fn new(config: &GaConfig) -> Result<Self> {
        Self::with_operators(config, OneMax, BitFlipMutation, SinglePointCrossover)
    }
}

impl<F, M, C> GaEngine<F, M, C>
where
    F: FitnessFunction + Clone,
    M: MutationOperator,
    C: CrossoverOperator,
{
    /// Builds an engine with custom fitness and operators.
    #[instrument(level = "info", skip_all, fields(
        population_size = config.population_size,
        chromosome_length = config.chromosome_length,
        seed = ?config.seed,
    ))]
    pub fn with_operators(
        config: &GaConfig,
        fitness_fn: F,
        mutation: M,
        crossover: C,
    ) -> Result<Self> {
        config.validate()?;

        let mut rng = config.create_rng();
        let counters = Arc::new(Counters::new());
        let population = Population::new(
            config.population_size,
            config.chromosome_length,
            fitness_fn,
            counters.clone(),
            &mut rng,
        )?;
        info!(best = population.best().fitness(), "engine ready");

        Ok(Self {
            config: config.clone(),
            population,
            mutation,
            crossover,
            rng,
            counters,
            generation: 0,
        })
    }

    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    pub fn population(&self) -> &Population<F> {
        &self.population
    }

    /// Returns the individual at `index`.
    pub fn individual(&self, index: usize) -> Result<&Individual<F>> {
        self.population.individual(index)
    }

    /// Fitness of the individual at `index`.
    pub fn fitness_at(&self, index: usize) -> Result<u32> {
        Ok(self.population.individual(index)?.fitness())
    }

    /// Chromosome of the individual at `index`.
    pub fn chromosome_at(&self, index: usize) -> Result<&Chromosome> {
        Ok(self.population.individual(index)?.chromosome())
    }

    /// Mutates the individual at `index`, returning the flipped position.
    pub fn mutate(&mut self, index: usize) -> Result<Option<usize>> {
        self.population
            .mutate_with(index, &self.mutation, &mut self.rng)
    }

    /// Crosses the individuals at `first` and `second`, returning two
    /// fresh offspring. The population is not modified.
    pub fn crossover(
        &mut self,
        first: usize,
        second: usize,
    ) -> Result<(Individual<F>, Individual<F>)> {
        self.population
            .crossover_at(first, second, &self.crossover, &mut self.rng)
    }

    /// Crosses the individuals at `first` and `second` and writes the
    /// offspring back into those slots.
    ///
    /// On error neither slot is written and the counters are unchanged.
    pub fn crossover_into(&mut self, first: usize, second: usize) -> Result<()> {
        let (child1, child2) = self.crossover(first, second)?;
        self.population.replace_pair(first, second, child1, child2)
    }

    /// Index of a uniformly random parent.
    pub fn select_parent(&mut self) -> usize {
        self.population.select_parent_index(&mut self.rng)
    }

    /// Advances one generation: every individual is mutated once.
    pub fn evolve(&mut self) {
        self.population.evolve_with(&self.mutation, &mut self.rng);
        self.generation += 1;
        info!(
            generation = self.generation,
            best = self.population.best().fitness(),
            "generation complete"
        );
    }

    /// Number of [`evolve`](Self::evolve) calls so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn counters(&self) -> CounterSnapshot {
        self.counters.snapshot()
    }
}

// ============================================================================
// Tests
// ============================================================================
