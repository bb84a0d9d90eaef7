//! Tunables for a single Frobenius solve.
use serde::{Deserialize, Serialize};

/// Default cap on the smallest generator, i.e. on the number of residue vertices.
pub const DEFAULT_MAX_VERTICES: u32 = 1 << 24;
/// Default cap on `(n - 1) * a0`, the size of the edge arena.
pub const DEFAULT_MAX_EDGES: u64 = 1 << 27;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Upper bound on `a0`, which sizes the distance and predecessor tables.
    pub max_vertices: u32,
    /// Upper bound on the `(n - 1) * a0` edges of the residue graph.
    pub max_edges: u64,
    /// Record the edge that reached each vertex. Needed for path and
    /// representation queries, costs one extra edge slot per vertex.
    pub track_predecessors: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_vertices: DEFAULT_MAX_VERTICES,
            max_edges: DEFAULT_MAX_EDGES,
            track_predecessors: true,
        }
    }
}

impl SolverConfig {
    pub fn new() -> Self { Self::default() }

    pub fn with_max_vertices(mut self, max_vertices: u32) -> Self {
        self.max_vertices = max_vertices;
        self
    }

    pub fn with_max_edges(mut self, max_edges: u64) -> Self {
        self.max_edges = max_edges;
        self
    }

    pub fn with_predecessors(mut self, track: bool) -> Self {
        self.track_predecessors = track;
        self
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
