//! Shortest paths over the residue graph.
pub mod dijkstra;
pub mod index_heap;
pub mod ledger;

pub use dijkstra::Dijkstra;
pub use index_heap::IndexMinHeap;
pub use ledger::ShortestPaths;
