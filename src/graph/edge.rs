//! Defines the `Edge` type, a weighted arc between two residue classes.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A residue class modulo `a0`, i.e. a vertex of the residue graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct VertexId(pub u32);

impl VertexId {
    #[inline(always)]
    pub fn index(&self) -> usize { self.0 as usize }
    pub fn new(idx: usize) -> Self { Self(idx as u32) }
}

/// Directed arc `from -> to` paid for with one copy of a generator.
///
/// `to == (from + weight) mod a0`. Several edges may join the same pair of
/// vertices with different weights; none are merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    /// The generator value itself.
    pub weight: u32,
}

impl Edge {
    pub fn new(from: VertexId, to: VertexId, weight: u32) -> Self {
        Self { from, to, weight }
    }
}

/// Edges compare by weight first. Endpoints only break ties so that the
/// ordering stays consistent with `Eq`.
impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.from.cmp(&other.from))
            .then_with(|| self.to.cmp(&other.to))
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_order_by_weight_before_endpoints() {
        let cheap = Edge::new(VertexId(4), VertexId(0), 5);
        let dear = Edge::new(VertexId(0), VertexId(1), 9);
        assert!(cheap < dear);

        let mut edges = vec![dear, cheap, Edge::new(VertexId(1), VertexId(2), 5)];
        edges.sort();
        assert_eq!(edges.iter().map(|e| e.weight).collect::<Vec<_>>(), vec![5, 5, 9]);
        assert_eq!(edges[0].from, VertexId(1));
    }
}
