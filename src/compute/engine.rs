use crate::analysis::coprime;
use crate::analysis::extract::ResidueTable;
use crate::config::SolverConfig;
use crate::error::{FrobeniusError, Result};
use crate::graph::{ResidueGraph, VertexId};
use crate::solver::{Dijkstra, ShortestPaths};
use log::{debug, info};
use serde::Serialize;

/// Outcome of one solve. Serializes to the summary fields only.
#[derive(Debug, Clone, Serialize)]
pub struct FrobeniusSolution {
    /// Sorted, de-duplicated generators.
    pub terms: Vec<u32>,
    pub frobenius: i64,
    pub vertices: usize,
    pub edges: usize,
    /// Count of non-representable positive integers.
    pub genus: u64,
    #[serde(skip)]
    pub table: ResidueTable,
}

pub struct Engine;

impl Engine {
    /// Runs the full pipeline: validate, coprimality gate, build, solve, extract.
    pub fn run(values: &[i64], config: &SolverConfig) -> Result<FrobeniusSolution> {
        // 1. Input Barrier
        // Everything past this point may assume sorted positive u32 terms.
        let terms = Self::normalize_terms(values)?;

        // 2. Precondition: no graph work for a set with a common factor.
        let g = coprime::set_gcd(&terms);
        if g != 1 {
            debug!("Rejecting {:?}: gcd is {}", terms, g);
            return Err(FrobeniusError::NotCoprime { gcd: g });
        }

        // 3. Graph + Shortest Paths
        // With a0 == 1 the only residue is 0, reached at cost 0: skip the graph.
        let (paths, vertices, edges) = if terms[0] == 1 {
            debug!("Modulus is 1, every non-negative integer is representable");
            (ShortestPaths::new(1, VertexId(0), config.track_predecessors), 1, 0)
        } else {
            let graph = ResidueGraph::build(&terms, config)?;
            let paths = Dijkstra::new(&graph)
                .with_predecessors(config.track_predecessors)
                .run(VertexId(0))?;
            (paths, graph.vertex_count(), graph.edge_count())
        };

        // 4. Extraction
        let table = ResidueTable::new(&terms, paths)?;
        let frobenius = table.frobenius_number();
        info!("Frobenius number of {:?} is {}", terms, frobenius);

        Ok(FrobeniusSolution {
            frobenius,
            vertices,
            edges,
            genus: table.gap_count(),
            terms,
            table,
        })
    }

    /// Sorts ascending and drops duplicates after checking every value lies
    /// in `1..=i32::MAX`.
    pub fn normalize_terms(values: &[i64]) -> Result<Vec<u32>> {
        let mut terms = Vec::with_capacity(values.len());
        for &value in values {
            if value <= 0 {
                return Err(FrobeniusError::NonPositiveValue { value });
            }
            if value > i64::from(i32::MAX) {
                return Err(FrobeniusError::ValueOutOfRange { value });
            }
            terms.push(value as u32);
        }
        terms.sort_unstable();
        terms.dedup();

        if terms.len() < 2 {
            return Err(FrobeniusError::TooFewValues { count: terms.len() });
        }
        Ok(terms)
    }
}
