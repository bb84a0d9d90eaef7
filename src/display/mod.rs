//! Human-readable rendering of solutions.
pub mod report;

pub use report::format_report;
