//! Runs the coin-problem pipeline end to end.
pub mod batch;
pub mod engine;

pub use batch::run_batch;
pub use engine::{Engine, FrobeniusSolution};
