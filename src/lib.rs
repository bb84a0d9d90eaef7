//! Frobenius numbers via shortest paths on a residue graph.
//!
//! The largest integer not expressible as a non-negative combination of a
//! coprime set `a0 < a1 < ... < a(n-1)` is read off the shortest distances from
//! residue 0 in a graph with one vertex per class modulo `a0`.

pub mod analysis;
pub mod compute;
pub mod config;
pub mod display;
pub mod error;
pub mod graph;
pub mod solver;

#[cfg(feature = "python")]
mod bindings {
    pub mod python;
}

pub use compute::{Engine, FrobeniusSolution};
pub use config::SolverConfig;
pub use error::{FrobeniusError, Result};

/// Frobenius number of `values` with the default configuration.
///
/// Input order and duplicates do not matter. Returns `-1` when 1 is among the
/// values.
pub fn frobenius_number(values: &[i64]) -> Result<i64> {
    Engine::run(values, &SolverConfig::default()).map(|s| s.frobenius)
}

pub fn frobenius_with_config(values: &[i64], config: &SolverConfig) -> Result<FrobeniusSolution> {
    Engine::run(values, config)
}

/// Solves independent input sets in parallel. Results keep input order.
pub fn frobenius_batch(sets: &[Vec<i64>]) -> Vec<Result<FrobeniusSolution>> {
    compute::run_batch(sets, &SolverConfig::default())
}
