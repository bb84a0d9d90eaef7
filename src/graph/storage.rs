//! storage.rs
//! Dense edge arena with per-vertex index ranges (CSR).

use super::edge::{Edge, VertexId};

/// Out-edges of vertex `v` are `edges[ranges[v].0 .. ranges[v].0 + ranges[v].1]`.
#[derive(Debug, Clone, Default)]
pub struct EdgeStore {
    pub edges: Vec<Edge>,
    pub ranges: Vec<(usize, usize)>, // (start, count)
}

impl EdgeStore {
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            edges: Vec::with_capacity(edges),
            ranges: Vec::with_capacity(vertices),
        }
    }

    pub fn vertex_count(&self) -> usize { self.ranges.len() }
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Appends the next vertex together with its complete out-edge list.
    /// Vertices must be pushed in id order.
    pub fn push_vertex(&mut self, out: impl IntoIterator<Item = Edge>) -> VertexId {
        let id = VertexId::new(self.ranges.len());
        let start = self.edges.len();
        self.edges.extend(out);
        debug_assert!(self.edges[start..].iter().all(|e| e.from == id));
        self.ranges.push((start, self.edges.len() - start));
        id
    }

    #[inline(always)]
    pub fn out_edges(&self, id: VertexId) -> &[Edge] {
        let (start, count) = self.ranges[id.index()];
        &self.edges[start..start + count]
    }
}
