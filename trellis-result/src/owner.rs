//! One-shot ownership of a pooled result tree.

use std::sync::Arc;

use crate::node::ObjectResult;
use crate::pool::ResultPool;

/// Owns a finished result tree and returns every pooled node in it to the
/// pool exactly once.
///
/// The owner is the single handle over the tree's memory: it is move-only,
/// so the type system forbids a second owner, a second release, and any
/// read of [`data`](Self::data) after release. Release happens when the
/// owner drops; [`release`](Self::release) just states the intent
/// explicitly. The component that finishes consuming the response, usually
/// whatever flushed the serialized bytes, is the one that should let the
/// owner go.
#[derive(Debug)]
pub struct ResultMemoryOwner {
    data: Option<Box<ObjectResult>>,
    pool: Arc<ResultPool>,
}

impl ResultMemoryOwner {
    pub(crate) fn new(data: Option<Box<ObjectResult>>, pool: Arc<ResultPool>) -> Self {
        Self { data, pool }
    }

    /// An owner for a response that produced no object data.
    #[must_use]
    pub fn empty(pool: Arc<ResultPool>) -> Self {
        Self::new(None, pool)
    }

    /// The root of the owned result tree, absent when the response
    /// produced no data.
    #[must_use]
    pub fn data(&self) -> Option<&ObjectResult> {
        self.data.as_deref()
    }

    /// Releases the tree back to its pool.
    ///
    /// Equivalent to dropping the owner.
    pub fn release(self) {}
}

impl Drop for ResultMemoryOwner {
    fn drop(&mut self) {
        if let Some(root) = self.data.take() {
            self.pool.return_object(root);
        }
    }
}
