//! Reads the Frobenius number, and other properties of the numerical
//! semigroup, off the solved residue graph.
//!
//! `dist[v]` is the smallest representable number congruent to `v` modulo
//! `a0`. Every larger number in that class is representable by adding copies
//! of `a0`, every smaller one is not.

use crate::error::{FrobeniusError, Result};
use crate::graph::VertexId;
use crate::solver::ShortestPaths;

/// Default cap for `ResidueTable::gaps`.
pub const MAX_LISTED_GAPS: u64 = 1 << 20;

/// Extracts the Frobenius number from a finished run rooted at residue 0.
///
/// Takes the largest distance over residues `1..a0` (the diameter) and steps
/// one period of `a0` below it when the diameter exceeds the modulus. For
/// `a0 == 1` there is no nonzero residue and the result is `-1`, since every
/// non-negative integer is then representable.
pub fn frobenius_from_distances(modulus: u32, paths: &ShortestPaths) -> Result<i64> {
    if modulus <= 1 {
        return Ok(-1);
    }

    let mut diameter: u64 = 0;
    for v in 1..modulus {
        let d = paths
            .dist_to(VertexId(v))
            .ok_or(FrobeniusError::UnreachableVertex { vertex: v })?;
        diameter = diameter.max(d);
    }

    let m = u64::from(modulus);
    let frobenius = if diameter < m { diameter } else { diameter - m };
    // diameter < 2^62
    Ok(frobenius as i64)
}

/// Shortest representative of every residue class, plus the tools to answer
/// representability questions from it.
#[derive(Debug, Clone)]
pub struct ResidueTable {
    terms: Vec<u32>,
    paths: ShortestPaths,
    frobenius: i64,
}

impl ResidueTable {
    /// `terms` must be the sorted generators the graph was built from and
    /// `paths` a run rooted at residue 0 that reached every one of the
    /// `terms[0]` vertices.
    pub fn new(terms: &[u32], paths: ShortestPaths) -> Result<Self> {
        if terms.len() < 2 {
            return Err(FrobeniusError::TooFewValues { count: terms.len() });
        }
        if paths.vertex_count() != terms[0] as usize {
            return Err(FrobeniusError::TableMismatch { modulus: terms[0], vertices: paths.vertex_count() });
        }
        if paths.source() != VertexId(0) {
            return Err(FrobeniusError::WrongSource { origin: paths.source().0 });
        }
        paths.ensure_all_reached()?;
        let frobenius = frobenius_from_distances(terms[0], &paths)?;
        Ok(Self { terms: terms.to_vec(), paths, frobenius })
    }

    pub fn modulus(&self) -> u32 { self.terms[0] }
    pub fn terms(&self) -> &[u32] { &self.terms }
    pub fn paths(&self) -> &ShortestPaths { &self.paths }

    /// Smallest representable number in the class of `residue`.
    pub fn minimal_in_class(&self, residue: u32) -> Option<u64> {
        self.paths.dist_to(VertexId(residue))
    }

    pub fn frobenius_number(&self) -> i64 { self.frobenius }

    pub fn is_representable(&self, m: i64) -> bool {
        let Ok(m) = u64::try_from(m) else { return false };
        let residue = (m % u64::from(self.modulus())) as u32;
        self.minimal_in_class(residue).is_some_and(|d| m >= d)
    }

    /// Non-negative coefficients `c` with `sum(c[i] * terms[i]) == m`.
    ///
    /// `None` if `m` is not representable, or if the run did not record
    /// predecessors.
    pub fn representation(&self, m: i64) -> Option<Vec<u64>> {
        if !self.is_representable(m) {
            return None;
        }
        let m = m as u64;
        let modulus = u64::from(self.modulus());
        let residue = VertexId((m % modulus) as u32);
        let path = self.paths.path_to(residue)?;
        let base = self.paths.dist_to(residue)?;

        let mut coefficients = vec![0u64; self.terms.len()];
        for edge in path {
            let slot = self.terms.binary_search(&edge.weight).ok()?;
            coefficients[slot] += 1;
        }
        coefficients[0] += (m - base) / modulus;
        Some(coefficients)
    }

    /// Number of positive integers with no representation (the genus).
    ///
    /// Class `v` is missing exactly `dist[v] / a0` members below its minimum.
    pub fn gap_count(&self) -> u64 {
        let modulus = u64::from(self.modulus());
        self.paths.distances().flatten().map(|d| d / modulus).sum()
    }

    /// All non-representable positive integers in ascending order.
    ///
    /// Class `v` contributes `dist[v] - k * a0` for `k` in `1..=dist[v] / a0`.
    /// The list has `gap_count()` entries, which grows roughly with the
    /// product of the generators, so it is refused above `limit`.
    pub fn gaps(&self, limit: u64) -> Result<Vec<u64>> {
        let genus = self.gap_count();
        if genus > limit {
            return Err(FrobeniusError::TooManyGaps { genus, limit });
        }
        let modulus = u64::from(self.modulus());
        let mut gaps = Vec::with_capacity(genus as usize);
        for d in self.paths.distances().flatten() {
            gaps.extend((1..=d / modulus).map(|k| d - k * modulus));
        }
        gaps.sort_unstable();
        Ok(gaps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SolverConfig;
    use crate::graph::ResidueGraph;
    use crate::solver::Dijkstra;
    use rstest::rstest;

    fn table(terms: &[u32]) -> ResidueTable {
        let graph = ResidueGraph::build(terms, &SolverConfig::default()).unwrap();
        let paths = Dijkstra::new(&graph).run(VertexId(0)).unwrap();
        ResidueTable::new(terms, paths).unwrap()
    }

    /// Sieve of representable numbers up to `limit`.
    fn representable_upto(terms: &[u32], limit: usize) -> Vec<bool> {
        let mut ok = vec![false; limit + 1];
        ok[0] = true;
        for m in 1..=limit {
            ok[m] = terms.iter().any(|&a| a as usize <= m && ok[m - a as usize]);
        }
        ok
    }

    #[rstest]
    #[case(&[3, 5], 7)]
    #[case(&[6, 9, 20], 43)]
    #[case(&[5, 6, 7, 8, 9], 4)]
    #[case(&[47, 74, 97, 126, 157, 188], 481)]
    fn test_frobenius_number(#[case] terms: &[u32], #[case] expected: i64) {
        assert_eq!(table(terms).frobenius_number(), expected);
    }

    #[test]
    fn test_unit_modulus_has_no_gaps() {
        let sp = ShortestPaths::new(1, VertexId(0), true);
        assert_eq!(frobenius_from_distances(1, &sp), Ok(-1));
    }

    #[test]
    fn test_extractor_refuses_unreached_residue() {
        let graph = ResidueGraph::build(&[4, 6], &SolverConfig::default()).unwrap();
        let sp = Dijkstra::new(&graph).run(VertexId(0)).unwrap();
        assert_eq!(frobenius_from_distances(4, &sp), Err(FrobeniusError::UnreachableVertex { vertex: 1 }));
        assert!(ResidueTable::new(&[4, 6], sp).is_err());
    }

    #[test]
    fn test_representability_matches_sieve() {
        let terms = [7, 11, 18];
        let t = table(&terms);
        let sieve = representable_upto(&terms, 200);
        for (m, &expected) in sieve.iter().enumerate() {
            assert_eq!(t.is_representable(m as i64), expected, "m = {}", m);
        }
        assert!(!t.is_representable(-3));
    }

    #[test]
    fn test_representation_reconstructs_value() {
        let terms = [47, 74, 97, 126, 157, 188];
        let t = table(&terms);
        for m in [0i64, 74, 482, 1000, 12345] {
            let c = t.representation(m).unwrap();
            let total: u64 = c.iter().zip(terms).map(|(&k, a)| k * u64::from(a)).sum();
            assert_eq!(total, m as u64);
        }
        assert_eq!(t.representation(481), None);
    }

    #[test]
    fn test_gaps_of_three_five() {
        let t = table(&[3, 5]);
        assert_eq!(t.gaps(MAX_LISTED_GAPS).unwrap(), vec![1, 2, 4, 7]);
        assert_eq!(t.gap_count(), 4);
    }

    #[rstest]
    #[case(&[4, 7])]
    #[case(&[6, 9, 20])]
    #[case(&[10, 11, 12, 13])]
    fn test_gap_list_matches_sieve(#[case] terms: &[u32]) {
        let t = table(terms);
        let limit = t.frobenius_number() as usize;
        let expected: Vec<u64> = representable_upto(terms, limit)
            .iter()
            .enumerate()
            .filter(|&(_, &ok)| !ok)
            .map(|(m, _)| m as u64)
            .collect();

        let gaps = t.gaps(MAX_LISTED_GAPS).unwrap();
        assert_eq!(gaps, expected);
        assert_eq!(t.gap_count(), gaps.len() as u64);
    }

    #[test]
    fn test_gap_listing_is_capped() {
        let t = table(&[3, 5]);
        assert_eq!(t.gaps(3), Err(FrobeniusError::TooManyGaps { genus: 4, limit: 3 }));
        assert_eq!(t.gaps(4).map(|g| g.len()), Ok(4));
    }

    #[test]
    fn test_large_genus_refused_without_enumerating() {
        // genus (a - 1)(b - 1) / 2 is about 2.1e9 here
        let t = table(&[65521, 65537]);
        assert_eq!(t.gap_count(), 65520 * 65536 / 2);
        assert!(matches!(t.gaps(MAX_LISTED_GAPS), Err(FrobeniusError::TooManyGaps { .. })));
    }

    #[test]
    fn test_table_rejects_paths_from_another_graph() {
        // distances solved for modulus 3 cannot describe modulus 5
        let graph = ResidueGraph::build(&[3, 5], &SolverConfig::default()).unwrap();
        let paths = Dijkstra::new(&graph).run(VertexId(0)).unwrap();
        let err = ResidueTable::new(&[5, 7], paths).unwrap_err();
        assert_eq!(err, FrobeniusError::TableMismatch { modulus: 5, vertices: 3 });
    }

    #[test]
    fn test_table_rejects_non_zero_source() {
        let graph = ResidueGraph::build(&[3, 5], &SolverConfig::default()).unwrap();
        let paths = Dijkstra::new(&graph).run(VertexId(2)).unwrap();
        let err = ResidueTable::new(&[3, 5], paths).unwrap_err();
        assert_eq!(err, FrobeniusError::WrongSource { origin: 2 });
    }

    #[test]
    fn test_representation_needs_predecessors() {
        let graph = ResidueGraph::build(&[3, 5], &SolverConfig::default()).unwrap();
        let paths = Dijkstra::new(&graph).with_predecessors(false).run(VertexId(0)).unwrap();
        let t = ResidueTable::new(&[3, 5], paths).unwrap();
        assert!(t.is_representable(8));
        assert_eq!(t.representation(8), None);
    }
}
