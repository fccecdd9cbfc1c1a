//! Immutable result-tree addresses.
//!
//! A [`Path`] names one position in a hierarchical query result. Paths are
//! backward-linked: each segment holds a shared reference to its parent,
//! so descending one level never copies ancestors and many live paths can
//! share a long common prefix. Segments are immutable once created, which
//! makes every clone a cheap, permanently stable snapshot.

use std::fmt;
use std::sync::Arc;

use serde::ser::{Serialize, SerializeSeq, Serializer};

/// One link in a [`Path`]: a named field or a list index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// A named field of an object in the result.
    Field(Arc<str>),
    /// A zero-based element position in a list of the result.
    Index(usize),
}

impl Segment {
    /// Returns the field name if this is a field segment.
    #[must_use]
    pub fn as_field(&self) -> Option<&str> {
        match self {
            Self::Field(name) => Some(name),
            Self::Index(_) => None,
        }
    }

    /// Returns the element index if this is an index segment.
    #[must_use]
    pub const fn as_index(&self) -> Option<usize> {
        match self {
            Self::Index(index) => Some(*index),
            Self::Field(_) => None,
        }
    }
}

/// An address of one position in a hierarchical result tree.
///
/// The root sentinel addresses the top of the response and has depth 0;
/// every other path is a chain of [`Segment`]s ending at the root. Two
/// paths compare equal when they have the same shape and values, no matter
/// how or when they were built, and equal paths hash identically, so a
/// `Path` works as a key for deduplicating or indexing errors by location.
///
/// The printed form concatenates `.name` for fields and `[index]` for list
/// elements; the root prints as the empty string:
///
/// ```
/// use trellis_path::Path;
///
/// let path = Path::root().append_field("user").append_index(3);
/// assert_eq!(path.to_string(), ".user[3]");
/// assert_eq!(Path::root().to_string(), "");
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    node: Option<Arc<PathNode>>,
}

#[derive(Debug, PartialEq, Eq, Hash)]
struct PathNode {
    parent: Path,
    depth: usize,
    segment: Segment,
}

impl Path {
    /// The root sentinel addressing the top of the response.
    #[must_use]
    pub const fn root() -> Self {
        Self { node: None }
    }

    /// Returns `true` if this path is the root sentinel.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.node.is_none()
    }

    /// Number of segments between the root and this position, inclusive.
    ///
    /// The root has depth 0 and every segment is one deeper than its
    /// parent.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.node.as_ref().map_or(0, |node| node.depth)
    }

    /// The parent path, or `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<&Self> {
        self.node.as_ref().map(|node| &node.parent)
    }

    /// The segment this path ends in, or `None` for the root.
    #[must_use]
    pub fn segment(&self) -> Option<&Segment> {
        self.node.as_ref().map(|node| &node.segment)
    }

    /// Returns a path one level deeper, addressing the field `name`.
    ///
    /// The new path shares this path as its parent; nothing is copied.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty.
    #[must_use]
    pub fn append_field(&self, name: impl Into<Arc<str>>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "field name must not be empty");
        self.append(Segment::Field(name))
    }

    /// Returns a path one level deeper, addressing the list element at
    /// `index`.
    #[must_use]
    pub fn append_index(&self, index: usize) -> Self {
        self.append(Segment::Index(index))
    }

    fn append(&self, segment: Segment) -> Self {
        Self {
            node: Some(Arc::new(PathNode {
                parent: self.clone(),
                depth: self.depth() + 1,
                segment,
            })),
        }
    }

    /// The segments of this path ordered from the root outward.
    ///
    /// This is the order the path serializes in and the order consumers
    /// walk the result tree in.
    #[must_use]
    pub fn segments(&self) -> Vec<Segment> {
        let mut segments = Vec::with_capacity(self.depth());
        let mut current = self;
        while let Some(node) = current.node.as_deref() {
            segments.push(node.segment.clone());
            current = &node.parent;
        }
        segments.reverse();
        segments
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Recursion terminates: depth strictly decreases toward the root.
        match self.node.as_deref() {
            None => Ok(()),
            Some(node) => {
                fmt::Display::fmt(&node.parent, f)?;
                match &node.segment {
                    Segment::Field(name) => write!(f, ".{name}"),
                    Segment::Index(index) => write!(f, "[{index}]"),
                }
            }
        }
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path({self})")
    }
}

impl Serialize for Path {
    /// Serializes as the wire-style segment array, fields as strings and
    /// indices as integers: `".user[3].name"` becomes `["user", 3,
    /// "name"]`.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let segments = self.segments();
        let mut seq = serializer.serialize_seq(Some(segments.len()))?;
        for segment in &segments {
            seq.serialize_element(segment)?;
        }
        seq.end()
    }
}

impl Serialize for Segment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Field(name) => serializer.serialize_str(name),
            Self::Index(index) => serializer.serialize_u64(*index as u64),
        }
    }
}
