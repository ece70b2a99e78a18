//! Genetic operators for binary chromosomes.
//!
//! # Crossover Operators
//!
//! - [`single_point_crossover`]: one random cut point, tails swapped, O(n)
//! - [`single_point_crossover_at`]: the same splice at a caller-chosen point
//! - [`SinglePointCrossover`]: [`CrossoverOperator`] strategy over individuals
//!
//! # Mutation Operators
//!
//! - [`bit_flip_mutation`]: flip one uniformly random gene, O(1)
//! - [`BitFlipMutation`]: [`MutationOperator`] strategy over individuals
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

use super::error::{GaError, Result};
use super::individual::Individual;
use super::types::{Chromosome, CrossoverOperator, FitnessFunction, MutationOperator};
use rand::Rng;
use tracing::{instrument, trace};

// ============================================================================
// Crossover operators
// ============================================================================

/// Single-point crossover at a fixed cut point.
///
/// With cut point `p`:
///
/// - child1 = `parent1[0..p] ++ parent2[p..]`
/// - child2 = `parent2[0..p] ++ parent1[p..]`
///
/// `p = 0` returns the parents swapped; `p = len` returns them unchanged.
///
/// # Errors
///
/// - [`GaError::InvalidInput`] if the parents differ in length.
/// - [`GaError::IndexOutOfRange`] if `point > len`.
pub fn single_point_crossover_at(
    parent1: &Chromosome,
    parent2: &Chromosome,
    point: usize,
) -> Result<(Chromosome, Chromosome)> {
    let n = parent1.len();
    if n != parent2.len() {
        return Err(GaError::length_mismatch(n, parent2.len()));
    }
    if point > n {
        return Err(GaError::IndexOutOfRange {
            index: point,
            len: n,
        });
    }

    let (g1, g2) = (parent1.genes(), parent2.genes());

    let mut child1 = Vec::with_capacity(n);
    child1.extend_from_slice(&g1[..point]);
    child1.extend_from_slice(&g2[point..]);

    let mut child2 = Vec::with_capacity(n);
    child2.extend_from_slice(&g2[..point]);
    child2.extend_from_slice(&g1[point..]);

    Ok((Chromosome::new(child1), Chromosome::new(child2)))
}

/// Single-point crossover with a uniformly random cut point in `[0, len)`.
///
/// Returns both children and the cut point used.
///
/// # Errors
///
/// [`GaError::InvalidInput`] if the parents differ in length.
pub fn single_point_crossover<R: Rng>(
    parent1: &Chromosome,
    parent2: &Chromosome,
    rng: &mut R,
) -> Result<(Chromosome, Chromosome, usize)> {
    if parent1.len() != parent2.len() {
        return Err(GaError::length_mismatch(parent1.len(), parent2.len()));
    }
    let point = crossover_point(parent1.len(), rng);
    let (child1, child2) = single_point_crossover_at(parent1, parent2, point)?;
    Ok((child1, child2, point))
}

/// Single-point crossover over [`Individual`]s.
///
/// Offspring carry a clone of the first parent's fitness function and
/// compute their own fitness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SinglePointCrossover;

impl SinglePointCrossover {
    /// Crosses two individuals at a caller-chosen cut point.
    pub fn perform_at<F: FitnessFunction + Clone>(
        &self,
        parent1: &Individual<F>,
        parent2: &Individual<F>,
        point: usize,
    ) -> Result<(Individual<F>, Individual<F>)> {
        let (c1, c2) =
            single_point_crossover_at(parent1.chromosome(), parent2.chromosome(), point)?;
        Ok((
            Individual::with_fitness(c1, parent1.fitness_fn().clone()),
            Individual::with_fitness(c2, parent1.fitness_fn().clone()),
        ))
    }
}

impl CrossoverOperator for SinglePointCrossover {
    #[instrument(level = "debug", skip(self, parent1, parent2, rng), fields(length = parent1.len()))]
    fn perform<F: FitnessFunction + Clone, R: Rng>(
        &self,
        parent1: &Individual<F>,
        parent2: &Individual<F>,
        rng: &mut R,
    ) -> Result<(Individual<F>, Individual<F>)> {
        if parent1.len() != parent2.len() {
            return Err(GaError::length_mismatch(parent1.len(), parent2.len()));
        }
        let point = crossover_point(parent1.len(), rng);
        trace!(point, "crossover point drawn");
        self.perform_at(parent1, parent2, point)
    }
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Bit-flip mutation: flip one uniformly random gene.
///
/// Returns the flipped position, or `None` for an empty chromosome.
///
/// # Complexity
/// O(1)
pub fn bit_flip_mutation<R: Rng>(chromosome: &mut Chromosome, rng: &mut R) -> Option<usize> {
    let n = chromosome.len();
    if n == 0 {
        return None;
    }
    let i = rng.random_range(0..n);
    chromosome.toggle(i);
    Some(i)
}

/// Bit-flip mutation over [`Individual`]s; fitness is recomputed after the
/// flip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BitFlipMutation;

impl MutationOperator for BitFlipMutation {
    fn perform<F: FitnessFunction, R: Rng>(
        &self,
        individual: &mut Individual<F>,
        rng: &mut R,
    ) -> Option<usize> {
        let n = individual.len();
        if n == 0 {
            return None;
        }
        let i = rng.random_range(0..n);
        individual.toggle(i);
        trace!(position = i, fitness = individual.fitness(), "bit flipped");
        Some(i)
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Pick a cut point in `[0, n)`; 0 for an empty chromosome.
fn crossover_point<R: Rng>(n: usize, rng: &mut R) -> usize {
    if n == 0 {
        0
    } else {
        rng.random_range(0..n)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::OneMax;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn bits(b: &[u8]) -> Chromosome {
        Chromosome::from_bits(b).unwrap()
    }

    // ---- Single-point crossover ----

    #[test]
    fn test_crossover_at_splices() {
        let p1 = bits(&[1, 1, 1, 1, 1]);
        let p2 = bits(&[0, 0, 0, 0, 0]);

        let (c1, c2) = single_point_crossover_at(&p1, &p2, 2).unwrap();
        assert_eq!(c1.to_bits(), vec![1, 1, 0, 0, 0]);
        assert_eq!(c2.to_bits(), vec![0, 0, 1, 1, 1]);
    }

    #[test]
    fn test_crossover_at_zero_swaps_parents() {
        let p1 = bits(&[1, 0, 1, 1]);
        let p2 = bits(&[0, 1, 0, 0]);

        let (c1, c2) = single_point_crossover_at(&p1, &p2, 0).unwrap();
        assert_eq!(c1, p2);
        assert_eq!(c2, p1);
    }

    #[test]
    fn test_crossover_at_last_gene() {
        let p1 = bits(&[1, 1, 1, 1]);
        let p2 = bits(&[0, 0, 0, 0]);

        let (c1, _) = single_point_crossover_at(&p1, &p2, 3).unwrap();
        assert_eq!(c1.hamming_distance(&p1), Ok(1));
        assert_eq!(c1.gene(3), Ok(false));
    }

    #[test]
    fn test_crossover_at_point_past_end() {
        let p = bits(&[1, 0]);
        assert_eq!(
            single_point_crossover_at(&p, &p, 3),
            Err(GaError::IndexOutOfRange { index: 3, len: 2 })
        );
    }

    #[test]
    fn test_crossover_rejects_length_mismatch() {
        let mut rng = StdRng::seed_from_u64(42);
        let p1 = Chromosome::zeros(5);
        let p2 = Chromosome::zeros(6);
        let err = single_point_crossover(&p1, &p2, &mut rng).unwrap_err();
        assert!(matches!(err, GaError::InvalidInput(_)));
    }

    #[test]
    fn test_crossover_complementarity() {
        let mut rng = StdRng::seed_from_u64(42);
        let p1 = Chromosome::random(16, &mut rng);
        let p2 = Chromosome::random(16, &mut rng);

        for _ in 0..100 {
            let (c1, c2, p) = single_point_crossover(&p1, &p2, &mut rng).unwrap();
            assert!(p < 16);
            assert_eq!(c1.len(), 16);
            assert_eq!(c2.len(), 16);
            assert_eq!(&c1.genes()[..p], &p1.genes()[..p]);
            assert_eq!(&c1.genes()[p..], &p2.genes()[p..]);
            assert_eq!(&c2.genes()[..p], &p2.genes()[..p]);
            assert_eq!(&c2.genes()[p..], &p1.genes()[p..]);
        }
    }

    #[test]
    fn test_crossover_empty_parents() {
        let mut rng = StdRng::seed_from_u64(42);
        let empty = Chromosome::zeros(0);
        let (c1, c2, p) = single_point_crossover(&empty, &empty, &mut rng).unwrap();
        assert_eq!(p, 0);
        assert!(c1.is_empty() && c2.is_empty());
    }

    #[test]
    fn test_strategy_leaves_parents_untouched() {
        let mut rng = StdRng::seed_from_u64(3);
        let p1 = Individual::new(bits(&[1, 1, 0, 1, 0, 1]));
        let p2 = Individual::new(bits(&[0, 0, 1, 0, 1, 0]));
        let (before1, before2) = (p1.clone(), p2.clone());

        for _ in 0..50 {
            let (o1, o2) = SinglePointCrossover.perform(&p1, &p2, &mut rng).unwrap();
            assert_eq!(o1.fitness(), OneMax.evaluate(o1.chromosome()));
            assert_eq!(o2.fitness(), OneMax.evaluate(o2.chromosome()));
        }

        assert_eq!(p1, before1);
        assert_eq!(p2, before2);
    }

    #[test]
    fn test_strategy_offspring_fitness() {
        let p1 = Individual::new(bits(&[1, 1, 1, 1]));
        let p2 = Individual::new(bits(&[0, 0, 0, 0]));

        let (o1, o2) = SinglePointCrossover.perform_at(&p1, &p2, 1).unwrap();
        assert_eq!(o1.fitness(), 1);
        assert_eq!(o2.fitness(), 3);
    }

    #[test]
    fn test_strategy_rejects_length_mismatch() {
        let mut rng = StdRng::seed_from_u64(42);
        let p1 = Individual::new(Chromosome::zeros(5));
        let p2 = Individual::new(Chromosome::zeros(6));
        assert!(matches!(
            SinglePointCrossover.perform(&p1, &p2, &mut rng),
            Err(GaError::InvalidInput(_))
        ));
    }

    // ---- Bit-flip mutation ----

    #[test]
    fn test_bit_flip_changes_one_gene() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let original = Chromosome::random(10, &mut rng);
            let mut c = original.clone();
            let i = bit_flip_mutation(&mut c, &mut rng).unwrap();
            assert_eq!(c.hamming_distance(&original), Ok(1));
            assert_ne!(c.gene(i), original.gene(i));
        }
    }

    #[test]
    fn test_bit_flip_empty() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut c = Chromosome::zeros(0);
        assert_eq!(bit_flip_mutation(&mut c, &mut rng), None);
    }

    #[test]
    fn test_bit_flip_covers_all_positions() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 4];
        let mut c = Chromosome::zeros(4);
        for _ in 0..200 {
            let i = bit_flip_mutation(&mut c, &mut rng).unwrap();
            seen[i] = true;
        }
        assert!(seen.iter().all(|&s| s), "some position never mutated");
    }

    #[test]
    fn test_strategy_mutation_changes_fitness_by_one() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut ind = Individual::new(bits(&[1, 0, 1, 0, 1]));
        for _ in 0..50 {
            let before = ind.fitness();
            BitFlipMutation.perform(&mut ind, &mut rng).unwrap();
            assert_eq!(before.abs_diff(ind.fitness()), 1);
        }
    }
}
