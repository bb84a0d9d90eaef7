// FFI Facade: the Python entry point.
// Exposes the solver as the `_frobenius` extension module.

use crate::analysis::MAX_LISTED_GAPS;
use crate::compute::Engine;
use crate::config::{SolverConfig, DEFAULT_MAX_VERTICES};
use crate::display::format_report;
use crate::error::FrobeniusError;
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

fn to_py_err(err: FrobeniusError) -> PyErr {
    match err {
        FrobeniusError::UnreachableVertex { .. }
        | FrobeniusError::SourceOutOfRange { .. }
        | FrobeniusError::WrongSource { .. }
        | FrobeniusError::TableMismatch { .. } => {
            PyRuntimeError::new_err(err.to_string())
        }
        _ => PyValueError::new_err(err.to_string()),
    }
}

/// Largest integer not representable by `values`; -1 if 1 is a value.
#[pyfunction]
#[pyo3(signature = (values, max_vertices = DEFAULT_MAX_VERTICES))]
fn frobenius_number(values: Vec<i64>, max_vertices: u32) -> PyResult<i64> {
    let cfg = SolverConfig::new().with_max_vertices(max_vertices).with_predecessors(false);
    Engine::run(&values, &cfg).map(|s| s.frobenius).map_err(to_py_err)
}

#[pyfunction]
#[pyo3(signature = (values, include_gaps = false))]
fn frobenius_report(values: Vec<i64>, include_gaps: bool) -> PyResult<String> {
    let solution = Engine::run(&values, &SolverConfig::default()).map_err(to_py_err)?;
    Ok(format_report(&solution, include_gaps))
}

/// Refuses with `ValueError` when there are more than `limit` gaps.
#[pyfunction]
#[pyo3(signature = (values, limit = MAX_LISTED_GAPS))]
fn gaps(values: Vec<i64>, limit: u64) -> PyResult<Vec<u64>> {
    let solution = Engine::run(&values, &SolverConfig::default()).map_err(to_py_err)?;
    solution.table.gaps(limit).map_err(to_py_err)
}

#[pyfunction]
fn representation(values: Vec<i64>, target: i64) -> PyResult<Option<Vec<u64>>> {
    let solution = Engine::run(&values, &SolverConfig::default()).map_err(to_py_err)?;
    Ok(solution.table.representation(target))
}

// --- Module Definition ---
#[pymodule]
fn _frobenius(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(frobenius_number, m)?)?;
    m.add_function(wrap_pyfunction!(frobenius_report, m)?)?;
    m.add_function(wrap_pyfunction!(gaps, m)?)?;
    m.add_function(wrap_pyfunction!(representation, m)?)?;
    Ok(())
}
