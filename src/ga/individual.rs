//! A chromosome together with its cached fitness.

use super::error::{GaError, Result};
use super::operators::BitFlipMutation;
use super::types::{Chromosome, FitnessFunction, MutationOperator, OneMax};
use rand::Rng;
use std::fmt;

/// A candidate solution: one chromosome, its fitness function, and the
/// fitness it yields.
///
/// The cached fitness is recomputed by every call that changes the
/// chromosome, so [`fitness`](Individual::fitness) never returns a stale
/// value and never recomputes on read.
///
/// # Examples
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use u_bitga::ga::{Chromosome, Individual};
///
/// let mut ind = Individual::new(Chromosome::from_bits(&[1, 0, 1, 0, 1]).unwrap());
/// assert_eq!(ind.fitness(), 3);
///
/// let mut rng = StdRng::seed_from_u64(42);
/// ind.mutate(&mut rng);
/// assert!(ind.fitness() == 2 || ind.fitness() == 4);
/// ```
#[derive(Clone)]
pub struct Individual<F = OneMax> {
    chromosome: Chromosome,
    fitness: u32,
    fitness_fn: F,
}

impl Individual<OneMax> {
    /// Creates an individual scored by [`OneMax`].
    pub fn new(chromosome: Chromosome) -> Self {
        Self::with_fitness(chromosome, OneMax)
    }
}

impl<F: FitnessFunction> Individual<F> {
    /// Creates an individual scored by `fitness_fn`, computing its fitness
    /// eagerly.
    ///
    /// A zero-length chromosome is accepted and scored like any other.
    pub fn with_fitness(chromosome: Chromosome, fitness_fn: F) -> Self {
        let fitness = fitness_fn.evaluate(&chromosome);
        Self {
            chromosome,
            fitness,
            fitness_fn,
        }
    }

    /// Creates an individual with `length` uniformly random bits.
    pub fn random<R: Rng>(length: usize, fitness_fn: F, rng: &mut R) -> Self {
        Self::with_fitness(Chromosome::random(length, rng), fitness_fn)
    }

    /// The cached fitness.
    pub fn fitness(&self) -> u32 {
        self.fitness
    }

    pub fn chromosome(&self) -> &Chromosome {
        &self.chromosome
    }

    pub fn fitness_fn(&self) -> &F {
        &self.fitness_fn
    }

    /// Chromosome length.
    pub fn len(&self) -> usize {
        self.chromosome.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chromosome.is_empty()
    }

    /// Replaces the chromosome and recomputes fitness.
    ///
    /// Returns [`GaError::InvalidInput`] if the new chromosome has a
    /// different length; the individual is left unchanged.
    pub fn set_chromosome(&mut self, chromosome: Chromosome) -> Result<()> {
        if chromosome.len() != self.chromosome.len() {
            return Err(GaError::length_mismatch(
                self.chromosome.len(),
                chromosome.len(),
            ));
        }
        self.chromosome = chromosome;
        self.refresh();
        Ok(())
    }

    /// Flips the gene at `index` and recomputes fitness.
    pub fn flip(&mut self, index: usize) -> Result<()> {
        self.chromosome.flip(index)?;
        self.refresh();
        Ok(())
    }

    /// Applies one bit-flip mutation, returning the flipped position.
    ///
    /// Returns `None` only for a zero-length chromosome.
    pub fn mutate<R: Rng>(&mut self, rng: &mut R) -> Option<usize> {
        BitFlipMutation.perform(self, rng)
    }

    /// Consumes the individual, returning its chromosome.
    pub fn into_chromosome(self) -> Chromosome {
        self.chromosome
    }

    pub(crate) fn toggle(&mut self, index: usize) {
        self.chromosome.toggle(index);
        self.refresh();
    }

    fn refresh(&mut self) {
        self.fitness = self.fitness_fn.evaluate(&self.chromosome);
    }

    /// A serializable copy of the chromosome and fitness.
    #[cfg(feature = "serde")]
    pub fn snapshot(&self) -> IndividualSnapshot {
        IndividualSnapshot {
            chromosome: self.chromosome.clone(),
            fitness: self.fitness,
        }
    }
}

impl<F> PartialEq for Individual<F> {
    fn eq(&self, other: &Self) -> bool {
        self.chromosome == other.chromosome && self.fitness == other.fitness
    }
}

impl<F> fmt::Debug for Individual<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Individual")
            .field("chromosome", &self.chromosome.to_string())
            .field("fitness", &self.fitness)
            .finish_non_exhaustive()
    }
}

/// Serializable view of an [`Individual`].
#[cfg(feature = "serde")]
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct IndividualSnapshot {
    pub chromosome: Chromosome,
    pub fitness: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn bits(b: &[u8]) -> Chromosome {
        Chromosome::from_bits(b).unwrap()
    }

    #[test]
    fn test_fitness_computed_eagerly() {
        let ind = Individual::new(bits(&[1, 0, 1, 0, 1]));
        assert_eq!(ind.fitness(), 3);
        assert_eq!(ind.len(), 5);
    }

    #[test]
    fn test_empty_chromosome_has_zero_fitness() {
        let mut ind = Individual::new(Chromosome::zeros(0));
        assert!(ind.is_empty());
        assert_eq!(ind.fitness(), 0);

        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(ind.mutate(&mut rng), None);
    }

    #[test]
    fn test_mutate_flips_exactly_one_bit() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let mut ind = Individual::new(bits(&[1, 0, 1, 0, 1]));
            let before = ind.chromosome().clone();

            let flipped = ind.mutate(&mut rng).unwrap();

            assert_eq!(ind.chromosome().hamming_distance(&before), Ok(1));
            assert_ne!(ind.chromosome().gene(flipped), before.gene(flipped));
            assert!(ind.fitness() == 2 || ind.fitness() == 4);
        }
    }

    #[test]
    fn test_mutate_single_bit() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut ind = Individual::new(bits(&[0]));
        assert_eq!(ind.mutate(&mut rng), Some(0));
        assert_eq!(ind.fitness(), 1);
        assert_eq!(ind.mutate(&mut rng), Some(0));
        assert_eq!(ind.fitness(), 0);
    }

    #[test]
    fn test_mutate_is_deterministic_under_seed() {
        let mut a = Individual::new(Chromosome::zeros(32));
        let mut b = Individual::new(Chromosome::zeros(32));
        let mut rng_a = StdRng::seed_from_u64(9);
        let mut rng_b = StdRng::seed_from_u64(9);
        for _ in 0..20 {
            assert_eq!(a.mutate(&mut rng_a), b.mutate(&mut rng_b));
        }
        assert_eq!(a, b);
    }

    #[test]
    fn test_set_chromosome() {
        let mut ind = Individual::new(bits(&[0, 0, 0]));
        ind.set_chromosome(bits(&[1, 1, 0])).unwrap();
        assert_eq!(ind.fitness(), 2);
    }

    #[test]
    fn test_set_chromosome_length_mismatch() {
        let mut ind = Individual::new(bits(&[1, 0, 1]));
        let err = ind.set_chromosome(bits(&[1, 1, 1, 1])).unwrap_err();
        assert!(matches!(err, GaError::InvalidInput(_)));
        assert_eq!(ind.chromosome(), &bits(&[1, 0, 1]));
        assert_eq!(ind.fitness(), 2);
    }

    #[test]
    fn test_flip_out_of_range() {
        let mut ind = Individual::new(bits(&[1, 0]));
        assert_eq!(
            ind.flip(5),
            Err(GaError::IndexOutOfRange { index: 5, len: 2 })
        );
        assert_eq!(ind.fitness(), 1);
        ind.flip(1).unwrap();
        assert_eq!(ind.fitness(), 2);
    }

    #[test]
    fn test_custom_fitness_tracks_changes() {
        // Reward a 1 in the first position only.
        let first = |c: &Chromosome| u32::from(c.genes().first().copied().unwrap_or(false));
        let mut ind = Individual::with_fitness(bits(&[0, 1, 1]), first);
        assert_eq!(ind.fitness(), 0);
        ind.flip(0).unwrap();
        assert_eq!(ind.fitness(), 1);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_snapshot_serializes() {
        let ind = Individual::new(bits(&[1, 1, 0]));
        let json = serde_json::to_string(&ind.snapshot()).unwrap();
        let back: IndividualSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.fitness, 2);
        assert_eq!(back.chromosome, bits(&[1, 1, 0]));
    }
}
