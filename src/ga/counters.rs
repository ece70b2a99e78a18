//! Lifetime counters for a run.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counts individuals created and mutations performed.
///
/// Counters only grow. They are owned by whoever builds the population and
/// shared by reference (`Arc<Counters>`), so each test or engine gets its
/// own independent tally.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use rand::{rngs::StdRng, SeedableRng};
/// use u_bitga::ga::{Counters, Population};
///
/// let counters = Arc::new(Counters::new());
/// let mut rng = StdRng::seed_from_u64(42);
/// let mut pop = Population::random(5, 8, counters.clone(), &mut rng).unwrap();
/// pop.evolve(&mut rng);
///
/// assert_eq!(counters.individuals_created(), 5);
/// assert_eq!(counters.mutations_performed(), 5);
/// ```
#[derive(Debug, Default)]
pub struct Counters {
    individuals_created: AtomicU64,
    mutations_performed: AtomicU64,
}

impl Counters {
    /// Creates counters starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `n` to the individuals-created tally.
    pub fn record_individuals(&self, n: u64) {
        self.individuals_created.fetch_add(n, Ordering::Relaxed);
    }

    /// Adds `n` to the mutations-performed tally.
    pub fn record_mutations(&self, n: u64) {
        self.mutations_performed.fetch_add(n, Ordering::Relaxed);
    }

    /// Total individuals created so far.
    pub fn individuals_created(&self) -> u64 {
        self.individuals_created.load(Ordering::Relaxed)
    }

    /// Total mutations performed so far.
    pub fn mutations_performed(&self) -> u64 {
        self.mutations_performed.load(Ordering::Relaxed)
    }

    /// Copies both tallies at this instant.
    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            individuals_created: self.individuals_created(),
            mutations_performed: self.mutations_performed(),
        }
    }
}

/// Point-in-time copy of [`Counters`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CounterSnapshot {
    pub individuals_created: u64,
    pub mutations_performed: u64,
}
