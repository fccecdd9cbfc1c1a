//! Shared pools of result-tree nodes.
//!
//! A pool keeps one free list per node shape and is shared (`Arc`) between
//! everything building or releasing result trees in a process. Renting
//! pops a retained node or allocates a fresh one; returning tears a node
//! down recursively so every pooled descendant travels back too, then
//! retains the cleared node up to a configured cap.
//!
//! The pool is thread-safe. A poisoned free-list lock degrades the pool to
//! plain allocation; accounting stays intact.

mod metrics;

pub use metrics::PoolMetrics;

use std::sync::Mutex;

use tracing::trace;

use crate::node::{ListResult, ObjectResult, ResultValue};

/// Configuration for a [`ResultPool`].
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Maximum nodes of each shape kept on the free list; nodes returned
    /// beyond this are dropped.
    pub max_retained: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self { max_retained: 256 }
    }
}

/// A shared, thread-safe pool of result-tree nodes.
#[derive(Debug, Default)]
pub struct ResultPool {
    objects: Mutex<Vec<Box<ObjectResult>>>,
    lists: Mutex<Vec<Box<ListResult>>>,
    config: PoolConfig,
    metrics: PoolMetrics,
}

impl ResultPool {
    /// Creates a pool with the given configuration.
    #[must_use]
    pub fn new(config: PoolConfig) -> Self {
        Self {
            objects: Mutex::new(Vec::new()),
            lists: Mutex::new(Vec::new()),
            config,
            metrics: PoolMetrics::default(),
        }
    }

    /// The pool configuration.
    #[must_use]
    pub const fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Rent/return counters for this pool.
    #[must_use]
    pub const fn metrics(&self) -> &PoolMetrics {
        &self.metrics
    }

    /// Rents an object node, reusing a retained one when available.
    #[must_use]
    pub fn rent_object(&self) -> Box<ObjectResult> {
        let recycled = self.objects.lock().ok().and_then(|mut free| free.pop());
        match recycled {
            Some(node) => {
                self.metrics.record_rent(true);
                node
            }
            None => {
                self.metrics.record_rent(false);
                Box::new(ObjectResult::default())
            }
        }
    }

    /// Rents a list node, reusing a retained one when available.
    #[must_use]
    pub fn rent_list(&self) -> Box<ListResult> {
        let recycled = self.lists.lock().ok().and_then(|mut free| free.pop());
        match recycled {
            Some(node) => {
                self.metrics.record_rent(true);
                node
            }
            None => {
                self.metrics.record_rent(false);
                Box::new(ListResult::default())
            }
        }
    }

    /// Returns an object node and every pooled node reachable from it.
    pub fn return_object(&self, mut node: Box<ObjectResult>) {
        for field in node.drain_fields() {
            self.release_value(field.into_value());
        }
        self.metrics.record_return();
        if let Ok(mut free) = self.objects.lock() {
            if free.len() < self.config.max_retained {
                free.push(node);
            } else {
                trace!(retained = free.len(), "dropping object node beyond retention cap");
            }
        }
    }

    /// Returns a list node and every pooled node reachable from it.
    pub fn return_list(&self, mut node: Box<ListResult>) {
        for item in node.drain_items() {
            self.release_value(item);
        }
        self.metrics.record_return();
        if let Ok(mut free) = self.lists.lock() {
            if free.len() < self.config.max_retained {
                free.push(node);
            } else {
                trace!(retained = free.len(), "dropping list node beyond retention cap");
            }
        }
    }

    /// Returns every pooled node reachable from `value`.
    ///
    /// Nulls and leaves carry no pooled allocation and are dropped as-is.
    pub fn release_value(&self, value: ResultValue) {
        match value {
            ResultValue::Object(node) => self.return_object(node),
            ResultValue::List(node) => self.return_list(node),
            ResultValue::Null | ResultValue::Leaf(_) => {}
        }
    }

    /// Number of object nodes retained and ready for reuse.
    #[must_use]
    pub fn retained_objects(&self) -> usize {
        self.objects.lock().map(|free| free.len()).unwrap_or(0)
    }

    /// Number of list nodes retained and ready for reuse.
    #[must_use]
    pub fn retained_lists(&self) -> usize {
        self.lists.lock().map(|free| free.len()).unwrap_or(0)
    }
}
