//! # NearDB - A Simple Nearest-Neighbor Vector Store
//!
//! NearDB is a learning project implementing a minimal in-memory vector store.
//! Vectors are kept in insertion order and queried with a brute-force linear
//! scan using Euclidean distance. There is no indexing, no persistence and no
//! concurrency support.
//!
//! ## Example
//!
//! ```
//! use neardb::{Vector, VectorStore};
//!
//! let mut store = VectorStore::new();
//!
//! // Insert vectors
//! store.insert(Vector::new("vec_1", vec![1.0, 2.0, 3.0]));
//! store.insert(Vector::new("vec_2", vec![4.0, 5.0, 6.0]));
//!
//! // Find the nearest vector to a query point
//! let nearest = store.find_nearest(&[2.0, 3.0, 4.0]).unwrap();
//! assert_eq!(nearest.id, "vec_1");
//! ```

pub mod distance;
mod error;
mod store;

pub use error::{Result, StoreError};
pub use store::{Vector, VectorStore};
