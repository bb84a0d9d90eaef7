use crate::analysis::MAX_LISTED_GAPS;
use crate::compute::FrobeniusSolution;
use crate::graph::VertexId;
use std::fmt::Write;

/// Renders a solution as a short human-readable report.
///
/// Below the summary, the residue with the largest shortest distance is traced
/// back edge by edge; that residue is the one the Frobenius number sits in.
pub fn format_report(solution: &FrobeniusSolution, include_gaps: bool) -> String {
    let mut out = String::new();
    let terms: Vec<String> = solution.terms.iter().map(u32::to_string).collect();

    let _ = writeln!(out, "Given {} terms: {}", solution.terms.len(), terms.join(" "));
    let _ = writeln!(out, "--------------------------------------------------");
    let _ = writeln!(out, "|-- Residue graph: {} vertices, {} edges", solution.vertices, solution.edges);
    let _ = writeln!(out, "|-- Frobenius number: {}", solution.frobenius);
    let _ = writeln!(out, "|-- Gaps (genus): {}", solution.genus);
    write_hardest_residue(&mut out, solution);

    if include_gaps {
        match solution.table.gaps(MAX_LISTED_GAPS) {
            Ok(gaps) => {
                let gaps: Vec<String> = gaps.iter().map(u64::to_string).collect();
                let _ = writeln!(out, "`-- Gap list: [{}]", gaps.join(", "));
            }
            Err(e) => {
                let _ = writeln!(out, "`-- Gap list omitted: {}", e);
            }
        }
    }
    out
}

fn write_hardest_residue(out: &mut String, solution: &FrobeniusSolution) {
    let table = &solution.table;
    let paths = table.paths();
    let hardest = (1..table.modulus())
        .filter_map(|v| paths.dist_to(VertexId(v)).map(|d| (v, d)))
        .max_by_key(|&(_, d)| d);

    let Some((residue, dist)) = hardest else {
        let _ = writeln!(out, "|-- Every residue is reached at cost 0");
        return;
    };
    let _ = writeln!(out, "|-- Hardest residue: {} (mod {}), reached at {}", residue, table.modulus(), dist);

    match paths.path_to(VertexId(residue)) {
        Some(path) => {
            let mut running: u64 = 0;
            for (i, edge) in path.iter().enumerate() {
                running += u64::from(edge.weight);
                let connector = if i + 1 == path.len() { "`--" } else { "|--" };
                let _ = writeln!(
                    out,
                    "|   {} {} -> {} (+{}) = {}",
                    connector, edge.from.0, edge.to.0, edge.weight, running
                );
            }
        }
        None => {
            let _ = writeln!(out, "|   `-- (path not recorded)");
        }
    }
}
