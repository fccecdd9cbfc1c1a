//! Trellis Result
//!
//! Pooled result-tree storage and ownership for the trellis query engine.
//!
//! Under high query throughput, allocating a fresh node for every object
//! and list in every response churns the heap. This crate instead rents
//! result nodes from shared pools and hands the finished tree to a single
//! [`ResultMemoryOwner`], which returns every rented node exactly once
//! when the response has been consumed.
//!
//! # Modules
//!
//! - [`value`] - leaf scalar values stored at tree leaves
//! - [`node`] - the pooled tree node types (`ObjectResult`, `ListResult`)
//! - [`pool`] - shared node pools with rent/return accounting
//! - [`builder`] - incremental assembly of a pooled tree
//! - [`owner`] - the one-shot release handle over a finished tree
//! - [`error`] - field errors carrying result-tree locations
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use trellis_result::{ResultBuilder, ResultPool, Value};
//!
//! let pool = Arc::new(ResultPool::default());
//! let mut builder = ResultBuilder::new(Arc::clone(&pool));
//!
//! let mut user = builder.rent_object();
//! user.insert("name", Value::from("Ada"));
//! builder.root_mut().insert("user", user);
//!
//! let owner = builder.seal();
//! assert!(owner.data().is_some());
//!
//! // Releasing returns every rented node to the pool.
//! owner.release();
//! assert_eq!(pool.metrics().outstanding(), 0);
//! ```

pub mod builder;
pub mod error;
pub mod node;
pub mod owner;
pub mod pool;
pub mod value;

pub use builder::ResultBuilder;
pub use error::FieldError;
pub use node::{ListResult, ObjectField, ObjectResult, ResultValue};
pub use owner::ResultMemoryOwner;
pub use pool::{PoolConfig, PoolMetrics, ResultPool};
pub use value::Value;
