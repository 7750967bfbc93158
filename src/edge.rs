//! # Undirected Edges
//!
//! [`UndirectedEdge`] is the key type used by every edge set and edge map of the
//! solver. It stores its two endpoints in the order they were given, but hashes
//! and compares them as an unordered pair:
//!
//! - `UndirectedEdge::new(1, 2) == UndirectedEdge::new(2, 1)`
//! - both hash to `31 * 1 + 2`
//! - `endpoint1()`/`endpoint2()` still report `1, 2` and `2, 1` respectively.
//!
//! Self-loops are representable and hash to `32 * v`.

use std::{
    fmt::Display,
    hash::{Hash, Hasher},
    num::ParseIntError,
    str::FromStr,
};

use derive_more::{From, Into};
use thiserror::Error;

/// Identifier of a vertex, as handed out by the graph that owns the edges.
pub type VertexId = i32;

/// Multiplier of the lower endpoint in [`UndirectedEdge::canonical_hash`].
pub const HASH_MULTIPLIER: i64 = 31;

#[derive(Clone, Copy, Debug, From, Into)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bincode", derive(bincode::Encode, bincode::Decode))]
pub struct UndirectedEdge {
    from: VertexId,
    to: VertexId,
}

impl UndirectedEdge {
    /// Edge between `from` and `to`, stored in that order.
    pub fn new(from: VertexId, to: VertexId) -> Self {
        UndirectedEdge { from, to }
    }

    /// The first endpoint, as given at construction.
    pub fn endpoint1(&self) -> VertexId {
        self.from
    }

    /// The second endpoint, as given at construction.
    pub fn endpoint2(&self) -> VertexId {
        self.to
    }

    /// Both endpoints, in construction order.
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.from, self.to)
    }

    /// The endpoints as `(smaller, larger)`.
    ///
    /// Two edges are equal exactly when their canonical pairs are equal.
    pub fn canonical(&self) -> (VertexId, VertexId) {
        if self.from < self.to {
            (self.from, self.to)
        } else {
            (self.to, self.from)
        }
    }

    /// `31 * lo + hi` over the canonical pair.
    ///
    /// Widened to `i64`, so the value is exact for every pair of `i32` endpoints.
    /// Distinct edges may collide; containers resolve that through [`PartialEq`].
    pub fn canonical_hash(&self) -> i64 {
        let (lo, hi) = self.canonical();
        HASH_MULTIPLIER * i64::from(lo) + i64::from(hi)
    }

    /// Same edge with the storage order swapped.
    pub fn reversed(&self) -> Self {
        UndirectedEdge {
            from: self.to,
            to: self.from,
        }
    }

    /// Whether both endpoints are the same vertex.
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }

    /// Whether `vertex` is one of the endpoints.
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.from == vertex || self.to == vertex
    }

    /// The endpoint across from `vertex`, or `None` if `vertex` is not incident.
    pub fn opposite(&self, vertex: VertexId) -> Option<VertexId> {
        if self.from == vertex {
            Some(self.to)
        } else if self.to == vertex {
            Some(self.from)
        } else {
            None
        }
    }
}

impl PartialEq for UndirectedEdge {
    fn eq(&self, other: &Self) -> bool {
        (self.from == other.from && self.to == other.to)
            || (self.from == other.to && self.to == other.from)
    }
}

impl Eq for UndirectedEdge {}

impl Hash for UndirectedEdge {
    // A single write, so that `CanonicalEdgeHasher` finishes on the canonical value.
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i64(self.canonical_hash());
    }
}

impl Display for UndirectedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.from, self.to)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EdgeParseError {
    #[error("Expected two endpoints, found {0}")]
    WrongArity(usize),
    #[error("Invalid vertex identifier {token:?}")]
    InvalidVertex {
        token: String,
        #[source]
        source: ParseIntError,
    },
}

fn parse_vertex(token: &str) -> Result<VertexId, EdgeParseError> {
    token
        .parse()
        .map_err(|source| EdgeParseError::InvalidVertex {
            token: token.to_owned(),
            source,
        })
}

impl FromStr for UndirectedEdge {
    type Err = EdgeParseError;

    /// Reads an edge line `u v`, keeping `u` as the first endpoint.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        match tokens.as_slice() {
            [from, to] => Ok(UndirectedEdge::new(parse_vertex(from)?, parse_vertex(to)?)),
            _ => Err(EdgeParseError::WrongArity(tokens.len())),
        }
    }
}
