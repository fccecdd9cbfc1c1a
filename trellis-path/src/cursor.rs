//! The mutable traversal position over result-tree paths.

use std::sync::Arc;

use crate::path::{Path, Segment};

/// The "current position" of a depth-first result traversal.
///
/// An execution engine keeps exactly one cursor per traversal and moves it
/// with [`push_field`](Self::push_field), [`push_index`](Self::push_index),
/// [`set_index`](Self::set_index) and [`pop`](Self::pop); every movement is
/// O(1) and never touches ancestor segments. Any consumer that needs the
/// position beyond the current step takes a [`capture`](Self::capture)
/// snapshot, which stays stable no matter how the cursor moves afterwards.
///
/// The cursor must not be shared between concurrent traversals; hand
/// snapshots across thread boundaries instead.
#[derive(Debug, Clone, Default)]
pub struct PathCursor {
    current: Path,
}

impl PathCursor {
    /// Creates a cursor positioned at the root.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cursor positioned at `path`.
    #[must_use]
    pub fn at(path: Path) -> Self {
        Self { current: path }
    }

    /// The current position.
    #[must_use]
    pub const fn current(&self) -> &Path {
        &self.current
    }

    /// Depth of the current position.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.current.depth()
    }

    /// Snapshots the current position for retention.
    ///
    /// The snapshot shares structure with the live position but can never
    /// observe later cursor movement.
    #[must_use]
    pub fn capture(&self) -> Path {
        self.current.clone()
    }

    /// Descends into the field `name`.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty.
    pub fn push_field(&mut self, name: impl Into<Arc<str>>) {
        self.current = self.current.append_field(name);
    }

    /// Descends into the list element at `index`.
    pub fn push_index(&mut self, index: usize) {
        self.current = self.current.append_index(index);
    }

    /// Repositions the cursor on another element of the current list.
    ///
    /// Only the tail segment is replaced; the ancestor chain is shared
    /// with the previous position, so advancing across a list creates one
    /// segment per element and never copies the path above it.
    ///
    /// # Panics
    ///
    /// Panics if the current position is not a list element.
    pub fn set_index(&mut self, index: usize) {
        let parent = match (self.current.segment(), self.current.parent()) {
            (Some(Segment::Index(_)), Some(parent)) => parent.clone(),
            _ => panic!("set_index requires the cursor to sit on a list element"),
        };
        self.current = parent.append_index(index);
    }

    /// Ascends to the parent position.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the root.
    pub fn pop(&mut self) {
        match self.current.parent() {
            Some(parent) => self.current = parent.clone(),
            None => panic!("cannot pop the root path"),
        }
    }
}
