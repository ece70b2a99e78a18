//! GA configuration.
//!
//! [`GaConfig`] holds the parameters a presentation shell collects before
//! building a [`GaEngine`](super::GaEngine).

use super::error::{GaError, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Configuration for a binary-chromosome population.
///
/// # Defaults
///
/// ```
/// use u_bitga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 10);
/// assert_eq!(config.chromosome_length, 16);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_bitga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(5)
///     .with_chromosome_length(8)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GaConfig {
    /// Number of individuals in the population. Must be at least 1.
    pub population_size: usize,

    /// Number of bits per chromosome. Must be at least 1.
    pub chromosome_length: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 10,
            chromosome_length: 16,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the chromosome length.
    pub fn with_chromosome_length(mut self, n: usize) -> Self {
        self.chromosome_length = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns [`GaError::InvalidInput`] if any parameter is invalid.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(GaError::invalid("population_size must be at least 1"));
        }
        if self.chromosome_length == 0 {
            return Err(GaError::invalid("chromosome_length must be at least 1"));
        }
        Ok(())
    }

    /// Creates the random source for a run: seeded from [`seed`](Self::seed)
    /// when set, otherwise from a fresh random seed.
    pub fn create_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        }
    }
}
