//! Parallel execution over independent input sets.
//!
//! Each set is solved by the ordinary sequential pipeline; rayon only spreads
//! whole solves across threads.

use super::engine::{Engine, FrobeniusSolution};
use crate::config::SolverConfig;
use crate::error::Result;
use rayon::prelude::*;

/// Results come back in input order.
pub fn run_batch(sets: &[Vec<i64>], config: &SolverConfig) -> Vec<Result<FrobeniusSolution>> {
    sets.par_iter().map(|values| Engine::run(values, config)).collect()
}
