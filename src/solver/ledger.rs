//! ledger.rs
//! Distance and predecessor tables produced by a shortest-path run.

use crate::error::{FrobeniusError, Result};
use crate::graph::{Edge, VertexId};

/// Marker for "not reached". Real distances are bounded by
/// `(a0 - 1) * max(a) < 2^62`, so they can never collide with it.
pub(crate) const UNREACHED: u64 = u64::MAX;

#[derive(Debug, Clone)]
pub struct ShortestPaths {
    pub(crate) source: VertexId,
    pub(crate) dist: Vec<u64>,
    pub(crate) edge_to: Option<Vec<Option<Edge>>>,
    pub(crate) settled: usize,
}

impl ShortestPaths {
    pub(crate) fn new(vertices: usize, source: VertexId, track_predecessors: bool) -> Self {
        let mut dist = vec![UNREACHED; vertices];
        dist[source.index()] = 0;
        Self {
            source,
            dist,
            edge_to: track_predecessors.then(|| vec![None; vertices]),
            settled: 0,
        }
    }

    pub fn source(&self) -> VertexId { self.source }
    pub fn vertex_count(&self) -> usize { self.dist.len() }

    /// Number of vertices extracted from the queue during the run.
    pub fn settled_count(&self) -> usize { self.settled }

    #[inline(always)]
    pub fn dist_to(&self, v: VertexId) -> Option<u64> {
        match self.dist.get(v.index()) {
            Some(&d) if d != UNREACHED => Some(d),
            _ => None,
        }
    }

    /// Distances indexed by vertex id, `None` where unreached.
    pub fn distances(&self) -> impl Iterator<Item = Option<u64>> + '_ {
        self.dist.iter().map(|&d| (d != UNREACHED).then_some(d))
    }

    pub fn edge_to(&self, v: VertexId) -> Option<Edge> {
        self.edge_to.as_ref()?.get(v.index()).copied().flatten()
    }

    pub fn tracks_predecessors(&self) -> bool { self.edge_to.is_some() }

    /// Edges from the source to `v`, in travel order. Empty for the source
    /// itself; `None` if `v` is unreached or predecessors were not tracked.
    pub fn path_to(&self, v: VertexId) -> Option<Vec<Edge>> {
        self.dist_to(v)?;
        let edge_to = self.edge_to.as_ref()?;
        let mut path = Vec::new();
        let mut cursor = v;
        while cursor != self.source {
            let edge = edge_to[cursor.index()]?;
            path.push(edge);
            cursor = edge.from;
        }
        path.reverse();
        Some(path)
    }

    /// Fails with the lowest unreached vertex, if any.
    pub fn ensure_all_reached(&self) -> Result<()> {
        match self.dist.iter().position(|&d| d == UNREACHED) {
            Some(v) => Err(FrobeniusError::UnreachableVertex { vertex: v as u32 }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manual_paths() -> ShortestPaths {
        // 0 -(5)-> 2 -(5)-> 1, vertex 3 unreached
        let mut sp = ShortestPaths::new(4, VertexId(0), true);
        let e02 = Edge::new(VertexId(0), VertexId(2), 5);
        let e21 = Edge::new(VertexId(2), VertexId(1), 5);
        sp.dist[2] = 5;
        sp.dist[1] = 10;
        if let Some(edge_to) = sp.edge_to.as_mut() {
            edge_to[2] = Some(e02);
            edge_to[1] = Some(e21);
        }
        sp
    }

    #[test]
    fn test_source_starts_at_zero() {
        let sp = ShortestPaths::new(3, VertexId(1), false);
        assert_eq!(sp.dist_to(VertexId(1)), Some(0));
        assert_eq!(sp.dist_to(VertexId(0)), None);
        assert_eq!(sp.dist_to(VertexId(7)), None);
    }

    #[test]
    fn test_path_reconstruction() {
        let sp = manual_paths();
        let path = sp.path_to(VertexId(1)).unwrap();
        assert_eq!(path.iter().map(|e| e.to.0).collect::<Vec<_>>(), vec![2, 1]);
        assert_eq!(path.iter().map(|e| u64::from(e.weight)).sum::<u64>(), 10);
        assert_eq!(sp.path_to(VertexId(0)), Some(vec![]));
        assert_eq!(sp.path_to(VertexId(3)), None);
    }

    #[test]
    fn test_unreached_vertex_is_reported() {
        let sp = manual_paths();
        assert_eq!(sp.ensure_all_reached(), Err(FrobeniusError::UnreachableVertex { vertex: 3 }));
        assert_eq!(sp.distances().collect::<Vec<_>>(), vec![Some(0), Some(10), Some(5), None]);
    }

    #[test]
    fn test_paths_unavailable_without_tracking() {
        let sp = ShortestPaths::new(2, VertexId(0), false);
        assert!(!sp.tracks_predecessors());
        assert_eq!(sp.path_to(VertexId(0)), None);
    }
}
