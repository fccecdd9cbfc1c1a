//! Pooled result-tree node types.
//!
//! A result tree mirrors the selection set that produced it: an
//! [`ObjectResult`] per selected object, a [`ListResult`] per list field,
//! and a [`ResultValue`] at every position. Object and list nodes are the
//! pooled allocations: they are rented from a
//! [`ResultPool`](crate::pool::ResultPool), linked into the tree as boxes,
//! and moved back to the pool when the tree's
//! [`ResultMemoryOwner`](crate::owner::ResultMemoryOwner) releases.
//!
//! Concurrent resolver tasks may populate disjoint subtrees without
//! locking: writers never share a node, and the node types are `Send` so
//! subtrees can be built on worker threads and attached afterwards.

mod list;
mod object;

pub use list::ListResult;
pub use object::{ObjectField, ObjectResult};

use serde::ser::{Serialize, Serializer};

use crate::value::Value;

/// A value at one position of the result tree.
#[derive(Debug, Default)]
pub enum ResultValue {
    /// An explicit null, either resolved or produced by error propagation.
    #[default]
    Null,
    /// A leaf scalar.
    Leaf(Value),
    /// A nested object node rented from the pool.
    Object(Box<ObjectResult>),
    /// A nested list node rented from the pool.
    List(Box<ListResult>),
}

impl ResultValue {
    /// Returns `true` if this position is null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the leaf value if this position is a leaf.
    #[must_use]
    pub const fn as_leaf(&self) -> Option<&Value> {
        match self {
            Self::Leaf(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the object node if this position is an object.
    #[must_use]
    pub fn as_object(&self) -> Option<&ObjectResult> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Returns the list node if this position is a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&ListResult> {
        match self {
            Self::List(list) => Some(list),
            _ => None,
        }
    }
}

impl From<Value> for ResultValue {
    fn from(value: Value) -> Self {
        Self::Leaf(value)
    }
}

impl From<Box<ObjectResult>> for ResultValue {
    fn from(object: Box<ObjectResult>) -> Self {
        Self::Object(object)
    }
}

impl From<Box<ListResult>> for ResultValue {
    fn from(list: Box<ListResult>) -> Self {
        Self::List(list)
    }
}

impl Serialize for ResultValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Leaf(value) => value.serialize(serializer),
            Self::Object(object) => object.serialize(serializer),
            Self::List(list) => list.serialize(serializer),
        }
    }
}
