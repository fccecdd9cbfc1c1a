//! Incremental assembly of pooled result trees.

use std::sync::Arc;

use crate::node::{ListResult, ObjectResult};
use crate::owner::ResultMemoryOwner;
use crate::pool::ResultPool;

/// Assembles a result tree out of pooled nodes and hands the finished
/// tree to exactly one [`ResultMemoryOwner`].
///
/// The builder rents the root on creation; resolvers rent nodes for their
/// subtrees through it and either attach them under the root or give them
/// back with the `discard_*` methods. Dropping an unsealed builder returns
/// the root and everything attached beneath it, so an abandoned or
/// cancelled request leaks nothing.
#[derive(Debug)]
pub struct ResultBuilder {
    root: Option<Box<ObjectResult>>,
    pool: Arc<ResultPool>,
}

impl ResultBuilder {
    /// Creates a builder with a freshly rented root object.
    #[must_use]
    pub fn new(pool: Arc<ResultPool>) -> Self {
        let root = pool.rent_object();
        Self { root: Some(root), pool }
    }

    /// The pool this builder rents from.
    #[must_use]
    pub fn pool(&self) -> &Arc<ResultPool> {
        &self.pool
    }

    /// Rents an object node for a subtree.
    ///
    /// Attach it to the tree or give it back with
    /// [`discard_object`](Self::discard_object); nodes that do neither
    /// stay rented and show up as outstanding in the pool metrics.
    #[must_use]
    pub fn rent_object(&self) -> Box<ObjectResult> {
        self.pool.rent_object()
    }

    /// Rents a list node for a subtree.
    #[must_use]
    pub fn rent_list(&self) -> Box<ListResult> {
        self.pool.rent_list()
    }

    /// Returns a rented object node that will not be attached, for
    /// example after its resolver failed.
    pub fn discard_object(&self, node: Box<ObjectResult>) {
        self.pool.return_object(node);
    }

    /// Returns a rented list node that will not be attached.
    pub fn discard_list(&self, node: Box<ListResult>) {
        self.pool.return_list(node);
    }

    /// The root object under construction.
    pub fn root_mut(&mut self) -> &mut ObjectResult {
        match self.root.as_deref_mut() {
            Some(root) => root,
            // The root is only taken by seal(), which consumes the builder.
            None => unreachable!("builder root is present until sealed"),
        }
    }

    /// Seals the tree and transfers it to its owner.
    #[must_use]
    pub fn seal(mut self) -> ResultMemoryOwner {
        let root = self.root.take();
        ResultMemoryOwner::new(root, Arc::clone(&self.pool))
    }
}

impl Drop for ResultBuilder {
    fn drop(&mut self) {
        if let Some(root) = self.root.take() {
            self.pool.return_object(root);
        }
    }
}
