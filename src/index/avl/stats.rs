//! Index statistics tracking.

use std::fmt;

/// Counters tracked by the index.
///
/// The index mutates only through `&mut self`, so plain integers are
/// enough; there is nothing to synchronize. The struct is `Copy`, so
/// [`crate::PriceIndex::stats`] hands out a snapshot by value that can
/// be compared, printed, or stored.
///
/// # Example
/// ```
/// use pricedex::{Price, PriceIndex, Product};
///
/// let mut index = PriceIndex::new();
/// index.insert(Product::new("A", "a", Price::from_minor(100))).unwrap();
/// assert_eq!(index.stats().inserts, 1);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IndexStats {
    /// Products inserted successfully.
    pub inserts: u64,

    /// Products removed (misses are not counted).
    pub removes: u64,

    /// Successful price updates.
    pub updates: u64,

    /// Single rotations performed while rebalancing. A double rotation
    /// counts as two.
    pub rotations: u64,
}

impl IndexStats {
    /// Create a new stats block with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rotations per successful mutation, a rough measure of how much
    /// rebalancing work the workload causes.
    pub fn rotations_per_mutation(&self) -> f64 {
        let mutations = self.inserts + self.removes + self.updates;
        if mutations == 0 {
            0.0
        } else {
            self.rotations as f64 / mutations as f64
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for IndexStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ inserts: {}, removes: {}, updates: {}, rotations: {} }}",
            self.inserts, self.removes, self.updates, self.rotations
        )
    }
}
