//! Rent/return accounting for result-node pools.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters tracking how nodes move through a
/// [`ResultPool`](super::ResultPool).
///
/// Correct teardown of a result tree shows up here as `returned() ==
/// rented()` once every owner has released; `outstanding()` is the live
/// difference while trees are in flight.
#[derive(Debug, Default)]
pub struct PoolMetrics {
    /// Nodes handed out by the pool.
    rented: AtomicU64,
    /// Nodes given back to the pool.
    returned: AtomicU64,
    /// Rents satisfied from a free list.
    reused: AtomicU64,
    /// Rents that allocated a fresh node.
    allocated: AtomicU64,
}

impl PoolMetrics {
    /// Record a rented node, either reused or freshly allocated.
    pub(crate) fn record_rent(&self, reused: bool) {
        self.rented.fetch_add(1, Ordering::Relaxed);
        if reused {
            self.reused.fetch_add(1, Ordering::Relaxed);
        } else {
            self.allocated.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record a node given back to the pool.
    pub(crate) fn record_return(&self) {
        self.returned.fetch_add(1, Ordering::Relaxed);
    }

    /// Get the number of nodes handed out.
    #[must_use]
    pub fn rented(&self) -> u64 {
        self.rented.load(Ordering::Relaxed)
    }

    /// Get the number of nodes given back.
    #[must_use]
    pub fn returned(&self) -> u64 {
        self.returned.load(Ordering::Relaxed)
    }

    /// Get the number of rents satisfied from a free list.
    #[must_use]
    pub fn reused(&self) -> u64 {
        self.reused.load(Ordering::Relaxed)
    }

    /// Get the number of rents that allocated a fresh node.
    #[must_use]
    pub fn allocated(&self) -> u64 {
        self.allocated.load(Ordering::Relaxed)
    }

    /// Nodes currently rented out and not yet returned.
    #[must_use]
    pub fn outstanding(&self) -> u64 {
        self.rented().saturating_sub(self.returned())
    }
}
