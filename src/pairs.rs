use itertools::Itertools;

use crate::edge::{UndirectedEdge, VertexId};

/// Every unordered pair of `vertices` as an edge.
///
/// Pairs `(v_i, v_j)` with `i < j` are produced in input order, so for `n` distinct
/// vertices there are `n * (n - 1) / 2` edges, none of them self-loops. Repeated
/// vertices in the input are not filtered.
pub fn vertex_pairs<I>(vertices: I) -> impl Iterator<Item = UndirectedEdge>
where
    I: IntoIterator<Item = VertexId>,
    I::IntoIter: Clone,
{
    vertices
        .into_iter()
        .tuple_combinations()
        .map(|(from, to)| UndirectedEdge::new(from, to))
}
