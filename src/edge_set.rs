//! # Edge Sets and Maps
//!
//! Hash containers keyed by [`UndirectedEdge`]. Because the key's own `Hash` and
//! `Eq` are orientation independent, any container works; the aliases here fix
//! the hasher so call sites agree on one choice:
//!
//! - [`EdgeSet`]/[`EdgeMap`] use [`CanonicalEdgeHasher`], whose hash of an edge
//!   is exactly [`UndirectedEdge::canonical_hash`].
//! - [`AEdgeSet`]/[`AEdgeMap`] run the canonical value through `ahash`, which
//!   spreads the bits of small vertex ids better.
//! - [`IndexEdgeSet`]/[`IndexEdgeMap`] iterate in insertion order, for output
//!   that has to be reproducible.
//!
//! Inserting `(2, 1)` after `(1, 2)` leaves the stored `(1, 2)` in place.
//!
//! With the `serde` feature, the `indexmap` aliases serialize as a sequence of
//! edges in insertion order.

use std::{
    collections::{HashMap, HashSet},
    hash::{BuildHasherDefault, Hasher},
};

use ahash::{AHashMap, AHashSet};
use indexmap::{IndexMap, IndexSet};

use crate::edge::{UndirectedEdge, HASH_MULTIPLIER};

/// Passes the canonical edge hash through unchanged.
///
/// After hashing a single [`UndirectedEdge`], `finish` returns its
/// `canonical_hash` reinterpreted as `u64`. Any other input is folded
/// with the same multiplier.
#[derive(Clone, Copy, Debug, Default)]
pub struct CanonicalEdgeHasher {
    hash: u64,
}

impl Hasher for CanonicalEdgeHasher {
    fn finish(&self) -> u64 {
        self.hash
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.hash = self
                .hash
                .wrapping_mul(HASH_MULTIPLIER as u64)
                .wrapping_add(u64::from(b));
        }
    }

    fn write_i64(&mut self, i: i64) {
        self.hash = self
            .hash
            .wrapping_mul(HASH_MULTIPLIER as u64)
            .wrapping_add(i as u64);
    }
}

pub type BuildCanonicalHasher = BuildHasherDefault<CanonicalEdgeHasher>;

/// Hashes each edge to its exact canonical value.
///
/// For small vertex ids the high bits of that value are zero, which `hashbrown`
/// uses to tag slots, so lookups degrade to key comparisons. Prefer [`AEdgeSet`]
/// for large sets.
pub type EdgeSet = HashSet<UndirectedEdge, BuildCanonicalHasher>;
pub type EdgeMap<V> = HashMap<UndirectedEdge, V, BuildCanonicalHasher>;

pub type AEdgeSet = AHashSet<UndirectedEdge>;
pub type AEdgeMap<V> = AHashMap<UndirectedEdge, V>;

pub type IndexEdgeSet = IndexSet<UndirectedEdge, ahash::RandomState>;
pub type IndexEdgeMap<V> = IndexMap<UndirectedEdge, V, ahash::RandomState>;

/// Collects edges into an [`EdgeSet`], merging both orientations of an edge.
pub fn edge_set<I>(edges: I) -> EdgeSet
where
    I: IntoIterator,
    I::Item: Into<UndirectedEdge>,
{
    edges.into_iter().map(Into::into).collect()
}
