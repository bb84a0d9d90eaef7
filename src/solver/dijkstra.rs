//! Label-setting single-source shortest paths over the residue graph.
use super::index_heap::IndexMinHeap;
use super::ledger::ShortestPaths;
use crate::error::{FrobeniusError, Result};
use crate::graph::{ResidueGraph, VertexId};
use log::debug;

pub struct Dijkstra<'a> {
    graph: &'a ResidueGraph,
    track_predecessors: bool,
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a ResidueGraph) -> Self {
        Self { graph, track_predecessors: true }
    }

    pub fn with_predecessors(mut self, track: bool) -> Self {
        self.track_predecessors = track;
        self
    }

    /// Computes minimum total weight from `source` to every vertex.
    ///
    /// Runs in O((V + E) log V). Vertices the search never reaches keep no
    /// distance; callers decide whether that is an error.
    pub fn run(&self, source: VertexId) -> Result<ShortestPaths> {
        let vertices = self.graph.vertex_count();
        if source.index() >= vertices {
            return Err(FrobeniusError::SourceOutOfRange {
                origin: source.0,
                vertices: vertices as u32,
            });
        }

        debug!("Finding shortest paths from residue {}", source.0);

        let mut paths = ShortestPaths::new(vertices, source, self.track_predecessors);
        let mut pq = IndexMinHeap::new(vertices);
        pq.insert(source.index(), 0u64);

        while let Some((v, _)) = pq.pop_min() {
            paths.settled += 1;
            self.relax(VertexId::new(v), &mut paths, &mut pq);
        }

        debug!("Shortest paths done: {} of {} vertices settled", paths.settled, vertices);
        Ok(paths)
    }

    fn relax(&self, v: VertexId, paths: &mut ShortestPaths, pq: &mut IndexMinHeap<u64>) {
        let base = paths.dist[v.index()];
        for edge in self.graph.out_edges(v) {
            let w = edge.to.index();
            let candidate = base.saturating_add(u64::from(edge.weight));
            if candidate < paths.dist[w] {
                paths.dist[w] = candidate;
                if let Some(edge_to) = paths.edge_to.as_mut() {
                    edge_to[w] = Some(*edge);
                }
                pq.push_or_decrease(w, candidate);
            }
        }
    }
}
