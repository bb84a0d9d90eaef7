//! Defines the residue graph the coin problem is reduced to.
pub mod edge;
pub mod residue;
pub mod storage;

// Re-export key types for convenient access
pub use edge::{Edge, VertexId};
pub use residue::ResidueGraph;
