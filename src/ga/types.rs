//! Core types and strategy traits for the GA engine.
//!
//! [`Chromosome`] is the bit-vector representation. The strategy traits
//! [`FitnessFunction`], [`MutationOperator`] and [`CrossoverOperator`]
//! define the contract between the engine and interchangeable objectives
//! and operators.

use super::error::{GaError, Result};
use super::individual::Individual;
use rand::Rng;
use std::fmt;

/// A fixed-length bit vector.
///
/// The length is set at creation and never changes; genes can only be
/// flipped in place.
///
/// # Examples
///
/// ```
/// use u_bitga::ga::Chromosome;
///
/// let c = Chromosome::from_bits(&[1, 0, 1, 0, 1]).unwrap();
/// assert_eq!(c.len(), 5);
/// assert_eq!(c.count_ones(), 3);
/// assert_eq!(c.to_string(), "10101");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromosome {
    genes: Vec<bool>,
}

impl Chromosome {
    /// Creates a chromosome from boolean genes.
    pub fn new(genes: Vec<bool>) -> Self {
        Self { genes }
    }

    /// Creates a chromosome from 0/1 values.
    ///
    /// Returns [`GaError::InvalidInput`] if any value is neither 0 nor 1.
    pub fn from_bits(bits: &[u8]) -> Result<Self> {
        let genes = bits
            .iter()
            .enumerate()
            .map(|(i, &b)| match b {
                0 => Ok(false),
                1 => Ok(true),
                other => Err(GaError::invalid(format!(
                    "gene {i} must be 0 or 1, got {other}"
                ))),
            })
            .collect::<Result<Vec<bool>>>()?;
        Ok(Self { genes })
    }

    /// Creates a chromosome of `length` zero bits.
    pub fn zeros(length: usize) -> Self {
        Self {
            genes: vec![false; length],
        }
    }

    /// Creates a chromosome whose bits are independently 0 or 1 with
    /// probability 0.5.
    pub fn random<R: Rng>(length: usize, rng: &mut R) -> Self {
        let genes = (0..length).map(|_| rng.random_bool(0.5)).collect();
        Self { genes }
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Returns `true` for a zero-length chromosome.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Returns the gene at `index`.
    pub fn gene(&self, index: usize) -> Result<bool> {
        self.genes
            .get(index)
            .copied()
            .ok_or(GaError::IndexOutOfRange {
                index,
                len: self.genes.len(),
            })
    }

    /// All genes in order.
    pub fn genes(&self) -> &[bool] {
        &self.genes
    }

    /// Genes as 0/1 values.
    pub fn to_bits(&self) -> Vec<u8> {
        self.genes.iter().map(|&g| u8::from(g)).collect()
    }

    /// Number of genes equal to 1.
    pub fn count_ones(&self) -> usize {
        self.genes.iter().filter(|&&g| g).count()
    }

    /// Flips the gene at `index` (0 ↔ 1).
    pub fn flip(&mut self, index: usize) -> Result<()> {
        let len = self.genes.len();
        let gene = self
            .genes
            .get_mut(index)
            .ok_or(GaError::IndexOutOfRange { index, len })?;
        *gene = !*gene;
        Ok(())
    }

    /// Flips a gene whose index the caller has already bounds-checked.
    pub(crate) fn toggle(&mut self, index: usize) {
        self.genes[index] = !self.genes[index];
    }

    /// Number of positions at which the two chromosomes differ.
    ///
    /// Returns [`GaError::InvalidInput`] if the lengths differ.
    pub fn hamming_distance(&self, other: &Chromosome) -> Result<usize> {
        if self.len() != other.len() {
            return Err(GaError::length_mismatch(self.len(), other.len()));
        }
        Ok(self
            .genes
            .iter()
            .zip(other.genes.iter())
            .filter(|(a, b)| a != b)
            .count())
    }
}

impl From<Vec<bool>> for Chromosome {
    fn from(genes: Vec<bool>) -> Self {
        Self::new(genes)
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &g in &self.genes {
            f.write_str(if g { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Maps a chromosome to a non-negative fitness score.
///
/// Implementations must be pure and total: the same chromosome always
/// yields the same score. Higher is better.
///
/// Any `Fn(&Chromosome) -> u32` closure is a fitness function:
///
/// ```
/// use u_bitga::ga::{Chromosome, Individual};
///
/// // Count zeros instead of ones.
/// let zeros = |c: &Chromosome| (c.len() - c.count_ones()) as u32;
/// let ind = Individual::with_fitness(Chromosome::from_bits(&[1, 0, 0]).unwrap(), zeros);
/// assert_eq!(ind.fitness(), 2);
/// ```
pub trait FitnessFunction: Send + Sync {
    /// Scores a chromosome.
    fn evaluate(&self, chromosome: &Chromosome) -> u32;
}

impl<T> FitnessFunction for T
where
    T: Fn(&Chromosome) -> u32 + Send + Sync,
{
    fn evaluate(&self, chromosome: &Chromosome) -> u32 {
        self(chromosome)
    }
}

/// The OneMax objective: counts bits equal to 1.
///
/// Scores lie in `[0, length]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OneMax;

impl FitnessFunction for OneMax {
    fn evaluate(&self, chromosome: &Chromosome) -> u32 {
        chromosome.count_ones() as u32
    }
}

/// Perturbs an individual in place.
///
/// Implementations must leave the individual's cached fitness consistent
/// with its chromosome when they return.
pub trait MutationOperator: Send + Sync {
    /// Mutates `individual`, returning the position that changed, or `None`
    /// if nothing could be changed (zero-length chromosome).
    fn perform<F: FitnessFunction, R: Rng>(
        &self,
        individual: &mut Individual<F>,
        rng: &mut R,
    ) -> Option<usize>;
}

/// Recombines two parents into two fresh offspring.
///
/// Parents are never modified, and each offspring has the parents'
/// chromosome length. [`Population`](super::Population) rejects offspring
/// that break the length rule.
pub trait CrossoverOperator: Send + Sync {
    /// Produces two offspring from `parent1` and `parent2`.
    ///
    /// Returns [`GaError::InvalidInput`] if the parents' chromosome lengths
    /// differ. On success both offspring have length `parent1.len()`.
    fn perform<F: FitnessFunction + Clone, R: Rng>(
        &self,
        parent1: &Individual<F>,
        parent2: &Individual<F>,
        rng: &mut R,
    ) -> Result<(Individual<F>, Individual<F>)>;
}
