//! # minfill-edge
//!
//! Undirected edges as hash keys for minimum fill-in and treewidth solvers.
//!
//! The solver keeps fill edges, visited edges and non-edges in hash sets. An
//! edge discovered as `(u, v)` in one place and as `(v, u)` in another must land
//! in the same slot, so [`UndirectedEdge`] hashes and compares its endpoints as
//! an unordered pair while still remembering the order it was built with.
//!
//! - [`edge`]: the key type, its canonical hash and equality, and the `u v`
//!   edge-line format.
//! - [`edge_set`]: set and map aliases over `std`, `ahash` and `indexmap`.
//! - [`pairs`]: all vertex pairs of a vertex collection, as edges.
//!
//! ```
//! use minfill_edge::{edge_set::EdgeSet, UndirectedEdge};
//!
//! let mut fill = EdgeSet::default();
//! fill.insert(UndirectedEdge::new(1, 2));
//! fill.insert(UndirectedEdge::new(2, 1));
//! assert_eq!(fill.len(), 1);
//! ```

pub mod edge;
pub mod edge_set;
pub mod pairs;

pub use edge::{EdgeParseError, UndirectedEdge, VertexId};
