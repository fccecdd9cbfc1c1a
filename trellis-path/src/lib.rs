//! Trellis Path
//!
//! Result-tree path addressing for the trellis query engine.
//!
//! A query response mirrors the shape of the selection set that produced
//! it: objects nest objects, lists nest elements, and any leaf or subtree
//! may fail on its own. This crate provides the value that names a single
//! position inside that tree, so errors and diagnostics can say *where*
//! something happened without re-walking the response.
//!
//! # Overview
//!
//! - [`Path`] - an immutable, structurally shared, backward-linked address
//!   built from field names and list indices
//! - [`Segment`] - one link of a path, either a named field or a list index
//! - [`PathCursor`] - the single mutable position a depth-first traversal
//!   pushes and pops in O(1)
//!
//! # Quick Start
//!
//! ```
//! use trellis_path::PathCursor;
//!
//! let mut cursor = PathCursor::new();
//! cursor.push_field("user");
//! cursor.push_index(3);
//! cursor.push_field("name");
//!
//! // Snapshot the position for an error report; the snapshot is
//! // unaffected by any later cursor movement.
//! let at_error = cursor.capture();
//! assert_eq!(at_error.to_string(), ".user[3].name");
//! ```

pub mod cursor;
pub mod path;

#[cfg(test)]
mod proptest_tests;

pub use cursor::PathCursor;
pub use path::{Path, Segment};
