//! List nodes of the result tree.

use serde::ser::{Serialize, SerializeSeq, Serializer};

use super::ResultValue;

/// A list node of the result tree.
///
/// Elements keep resolution order. Like
/// [`ObjectResult`](super::ObjectResult), list nodes are rented from a
/// [`ResultPool`](crate::pool::ResultPool) and travel back to it when the
/// tree releases.
#[derive(Debug, Default)]
pub struct ListResult {
    items: Vec<ResultValue>,
}

impl ListResult {
    /// Appends an element.
    pub fn push(&mut self, value: impl Into<ResultValue>) {
        self.items.push(value.into());
    }

    /// The element at `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ResultValue> {
        self.items.get(index)
    }

    /// The elements in resolution order.
    #[must_use]
    pub fn items(&self) -> &[ResultValue] {
        &self.items
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the list has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Clears the node for reuse, keeping its capacity.
    pub fn reset(&mut self) {
        self.items.clear();
    }

    /// Moves all elements out of the node, keeping its capacity.
    pub(crate) fn drain_items(&mut self) -> std::vec::Drain<'_, ResultValue> {
        self.items.drain(..)
    }
}

impl Serialize for ListResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.items.len()))?;
        for item in &self.items {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}
