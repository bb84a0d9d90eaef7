//! residue.rs
//! The residue graph: one vertex per class modulo the smallest generator,
//! one arc per (vertex, larger generator) pair.

use super::edge::{Edge, VertexId};
use super::storage::EdgeStore;
use crate::config::SolverConfig;
use crate::error::{FrobeniusError, Result};
use log::debug;

#[derive(Debug, Clone)]
pub struct ResidueGraph {
    store: EdgeStore,
    /// Sorted generators. `terms[0]` is the modulus.
    terms: Vec<u32>,
}

impl ResidueGraph {
    /// Builds the graph for sorted, de-duplicated, positive `terms`.
    ///
    /// Edge `(j, (j + r_i) mod a0, a_i)` is added for every vertex `j` and every
    /// `i >= 1`, where `r_i = a_i mod a0`.
    pub fn build(terms: &[u32], config: &SolverConfig) -> Result<Self> {
        if terms.len() < 2 {
            return Err(FrobeniusError::TooFewValues { count: terms.len() });
        }
        let modulus = terms[0];
        if modulus == 0 {
            return Err(FrobeniusError::NonPositiveValue { value: 0 });
        }

        let (vertices, edges) = Self::required_size(terms)?;
        if modulus > config.max_vertices {
            return Err(FrobeniusError::GraphTooLarge {
                vertices: u64::from(modulus),
                edges,
                limit: u64::from(config.max_vertices),
            });
        }
        if edges > config.max_edges {
            return Err(FrobeniusError::GraphTooLarge {
                vertices: u64::from(modulus),
                edges,
                limit: config.max_edges,
            });
        }

        debug!("Generating residue graph: {} vertices, {} edges", vertices, edges);

        let residues: Vec<(u64, u32)> = terms[1..]
            .iter()
            .map(|&a| (u64::from(a % modulus), a))
            .collect();

        let m = u64::from(modulus);
        let mut store = EdgeStore::with_capacity(vertices, edges as usize);
        for j in 0..modulus {
            let from = VertexId(j);
            store.push_vertex(residues.iter().map(|&(r, weight)| {
                // j + r < 2 * a0, no wrap in u64
                let to = VertexId(((u64::from(j) + r) % m) as u32);
                Edge::new(from, to, weight)
            }));
        }

        debug!("Residue graph done");
        Ok(Self { store, terms: terms.to_vec() })
    }

    /// `(a0, (n - 1) * a0)` computed in 64 bits. Fails if the edge count does
    /// not fit the address space.
    pub fn required_size(terms: &[u32]) -> Result<(usize, u64)> {
        let modulus = terms.first().copied().unwrap_or(0);
        let larger = terms.len().saturating_sub(1) as u64;
        let edges = larger.checked_mul(u64::from(modulus));
        let too_large = || FrobeniusError::GraphTooLarge {
            vertices: u64::from(modulus),
            edges: edges.unwrap_or(u64::MAX),
            limit: usize::MAX as u64,
        };
        let edge_count = edges.ok_or_else(too_large)?;
        usize::try_from(edge_count).map_err(|_| too_large())?;
        let vertices = usize::try_from(modulus).map_err(|_| too_large())?;
        Ok((vertices, edge_count))
    }

    pub fn modulus(&self) -> u32 { self.terms[0] }
    pub fn terms(&self) -> &[u32] { &self.terms }

    pub fn vertex_count(&self) -> usize { self.store.vertex_count() }
    pub fn edge_count(&self) -> usize { self.store.edge_count() }

    pub fn out_edges(&self, v: VertexId) -> &[Edge] { self.store.out_edges(v) }

    /// All edges, grouped by source vertex in ascending order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.store.edges.iter()
    }
}
