//! Fixed-size population of individuals.

use super::counters::Counters;
use super::error::{GaError, Result};
use super::evolution;
use super::individual::Individual;
use super::operators::{BitFlipMutation, SinglePointCrossover};
use super::types::{CrossoverOperator, FitnessFunction, MutationOperator, OneMax};
use rand::Rng;
use std::sync::Arc;
use tracing::{debug, instrument};

/// An ordered, fixed-size collection of individuals, indexed `0..len()`.
///
/// The population owns its individuals. Its size and chromosome length
/// are fixed at construction; slots can be overwritten through
/// [`replace`](Population::replace) but never removed.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use rand::{rngs::StdRng, SeedableRng};
/// use u_bitga::ga::{Counters, Population};
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let pop = Population::random(5, 8, Arc::new(Counters::new()), &mut rng).unwrap();
///
/// assert_eq!(pop.len(), 5);
/// assert!(pop.iter().all(|ind| ind.len() == 8 && ind.fitness() <= 8));
/// ```
#[derive(Debug)]
pub struct Population<F = OneMax> {
    individuals: Vec<Individual<F>>,
    chromosome_length: usize,
    counters: Arc<Counters>,
}

impl Population<OneMax> {
    /// Creates a random population scored by [`OneMax`].
    pub fn random<R: Rng>(
        size: usize,
        chromosome_length: usize,
        counters: Arc<Counters>,
        rng: &mut R,
    ) -> Result<Self> {
        Self::new(size, chromosome_length, OneMax, counters, rng)
    }
}

impl<F: FitnessFunction + Clone> Population<F> {
    /// Creates `size` individuals with `chromosome_length` uniformly random
    /// bits each, scored by `fitness_fn`.
    ///
    /// Returns [`GaError::InvalidInput`] if `size` or `chromosome_length`
    /// is zero.
    #[instrument(level = "debug", skip(fitness_fn, counters, rng))]
    pub fn new<R: Rng>(
        size: usize,
        chromosome_length: usize,
        fitness_fn: F,
        counters: Arc<Counters>,
        rng: &mut R,
    ) -> Result<Self> {
        if size == 0 {
            return Err(GaError::invalid("population size must be at least 1"));
        }
        if chromosome_length == 0 {
            return Err(GaError::invalid("chromosome length must be at least 1"));
        }

        let individuals: Vec<Individual<F>> = (0..size)
            .map(|_| Individual::random(chromosome_length, fitness_fn.clone(), rng))
            .collect();
        counters.record_individuals(size as u64);

        let pop = Self {
            individuals,
            chromosome_length,
            counters,
        };
        debug!(
            best = pop.best().fitness(),
            mean = pop.mean_fitness(),
            "population initialized"
        );
        Ok(pop)
    }

    /// Number of individuals.
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Always `false` for a constructed population.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn chromosome_length(&self) -> usize {
        self.chromosome_length
    }

    pub fn counters(&self) -> &Arc<Counters> {
        &self.counters
    }

    pub fn individuals(&self) -> &[Individual<F>] {
        &self.individuals
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Individual<F>> {
        self.individuals.iter()
    }

    /// Returns the individual at `index`.
    ///
    /// Returns [`GaError::IndexOutOfRange`] if `index >= len()`.
    pub fn individual(&self, index: usize) -> Result<&Individual<F>> {
        self.individuals.get(index).ok_or(GaError::IndexOutOfRange {
            index,
            len: self.individuals.len(),
        })
    }

    /// Picks an index uniformly at random, with replacement across calls.
    pub fn select_parent_index<R: Rng>(&self, rng: &mut R) -> usize {
        rng.random_range(0..self.individuals.len())
    }

    /// Picks an individual uniformly at random, with replacement across
    /// calls. The population is not modified.
    pub fn select_parent<R: Rng>(&self, rng: &mut R) -> &Individual<F> {
        &self.individuals[self.select_parent_index(rng)]
    }

    /// Writes `individual` into slot `index`, returning the previous
    /// occupant.
    ///
    /// # Errors
    ///
    /// - [`GaError::IndexOutOfRange`] if `index >= len()`.
    /// - [`GaError::InvalidInput`] if the chromosome length differs from
    ///   the population's.
    ///
    /// The population is unchanged on error.
    pub fn replace(&mut self, index: usize, individual: Individual<F>) -> Result<Individual<F>> {
        let len = self.individuals.len();
        if individual.len() != self.chromosome_length {
            return Err(GaError::length_mismatch(
                self.chromosome_length,
                individual.len(),
            ));
        }
        let slot = self
            .individuals
            .get_mut(index)
            .ok_or(GaError::IndexOutOfRange { index, len })?;
        Ok(std::mem::replace(slot, individual))
    }

    /// Writes `a` into slot `first` and `b` into slot `second`.
    ///
    /// Both slots and both lengths are checked before either slot is
    /// written, so the population is unchanged on error. If `first ==
    /// second` the slot ends up holding `b`.
    pub fn replace_pair(
        &mut self,
        first: usize,
        second: usize,
        a: Individual<F>,
        b: Individual<F>,
    ) -> Result<()> {
        let len = self.individuals.len();
        for index in [first, second] {
            if index >= len {
                return Err(GaError::IndexOutOfRange { index, len });
            }
        }
        for individual in [&a, &b] {
            if individual.len() != self.chromosome_length {
                return Err(GaError::length_mismatch(
                    self.chromosome_length,
                    individual.len(),
                ));
            }
        }
        self.individuals[first] = a;
        self.individuals[second] = b;
        Ok(())
    }

    /// Applies one bit-flip mutation to the individual at `index`,
    /// returning the flipped position.
    pub fn mutate<R: Rng>(&mut self, index: usize, rng: &mut R) -> Result<Option<usize>> {
        self.mutate_with(index, &BitFlipMutation, rng)
    }

    /// Applies `mutation` to the individual at `index`.
    ///
    /// Returns [`GaError::IndexOutOfRange`] if `index >= len()`.
    #[instrument(level = "debug", skip(self, mutation, rng))]
    pub fn mutate_with<M: MutationOperator, R: Rng>(
        &mut self,
        index: usize,
        mutation: &M,
        rng: &mut R,
    ) -> Result<Option<usize>> {
        let len = self.individuals.len();
        let individual = self
            .individuals
            .get_mut(index)
            .ok_or(GaError::IndexOutOfRange { index, len })?;
        let flipped = mutation.perform(individual, rng);
        if flipped.is_some() {
            self.counters.record_mutations(1);
        }
        Ok(flipped)
    }

    /// Single-point crossover of two individuals.
    ///
    /// The parents need not belong to this population; see
    /// [`crossover_at`](Population::crossover_at) for member-only crossover.
    pub fn crossover<R: Rng>(
        &self,
        parent1: &Individual<F>,
        parent2: &Individual<F>,
        rng: &mut R,
    ) -> Result<(Individual<F>, Individual<F>)> {
        self.crossover_with(parent1, parent2, &SinglePointCrossover, rng)
    }

    /// Crosses two individuals with `crossover`, recording both offspring
    /// in the counters.
    ///
    /// Returns [`GaError::InvalidInput`] if the parents differ in length or
    /// if the operator returns an offspring of a different length. Nothing
    /// is recorded on error.
    pub fn crossover_with<C: CrossoverOperator, R: Rng>(
        &self,
        parent1: &Individual<F>,
        parent2: &Individual<F>,
        crossover: &C,
        rng: &mut R,
    ) -> Result<(Individual<F>, Individual<F>)> {
        if parent1.len() != parent2.len() {
            return Err(GaError::length_mismatch(parent1.len(), parent2.len()));
        }
        let (child1, child2) = crossover.perform(parent1, parent2, rng)?;
        for child in [&child1, &child2] {
            if child.len() != parent1.len() {
                return Err(GaError::length_mismatch(parent1.len(), child.len()));
            }
        }
        self.counters.record_individuals(2);
        Ok((child1, child2))
    }

    /// Crosses the members at `first` and `second`.
    ///
    /// Returns [`GaError::IndexOutOfRange`] if either index is out of range.
    pub fn crossover_at<C: CrossoverOperator, R: Rng>(
        &self,
        first: usize,
        second: usize,
        crossover: &C,
        rng: &mut R,
    ) -> Result<(Individual<F>, Individual<F>)> {
        let parent1 = self.individual(first)?;
        let parent2 = self.individual(second)?;
        self.crossover_with(parent1, parent2, crossover, rng)
    }

    /// Advances one generation with bit-flip mutation.
    pub fn evolve<R: Rng>(&mut self, rng: &mut R) {
        evolution::evolve(self, &BitFlipMutation, rng);
    }

    /// Advances one generation with `mutation`.
    pub fn evolve_with<M: MutationOperator, R: Rng>(&mut self, mutation: &M, rng: &mut R) {
        evolution::evolve(self, mutation, rng);
    }

    /// The individual with the highest fitness; ties go to the lowest index.
    pub fn best(&self) -> &Individual<F> {
        let mut best = &self.individuals[0];
        for ind in &self.individuals[1..] {
            if ind.fitness() > best.fitness() {
                best = ind;
            }
        }
        best
    }

    /// Mean fitness across the population.
    pub fn mean_fitness(&self) -> f64 {
        let total: u64 = self.individuals.iter().map(|i| u64::from(i.fitness())).sum();
        total as f64 / self.individuals.len() as f64
    }

    pub(crate) fn individuals_mut(&mut self) -> &mut [Individual<F>] {
        &mut self.individuals
    }
}

impl<'a, F> IntoIterator for &'a Population<F> {
    type Item = &'a Individual<F>;
    type IntoIter = std::slice::Iter<'a, Individual<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.individuals.iter()
    }
}
