//! Error types shared by every stage of the Frobenius pipeline.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FrobeniusError>;

/// Everything that can stop a Frobenius computation.
///
/// All variants are deterministic input or logic failures. Nothing here is
/// transient, so callers should never retry on them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrobeniusError {
    #[error("At least two values are required, got {count}")]
    TooFewValues { count: usize },
    #[error("Values must be positive, got {value}")]
    NonPositiveValue { value: i64 },
    #[error("Value {value} exceeds the supported maximum of {}", i32::MAX)]
    ValueOutOfRange { value: i64 },
    /// No finite Frobenius number exists.
    #[error("GCD of the input set is {gcd}, not 1")]
    NotCoprime { gcd: u32 },
    /// `limit` is whichever configured bound (vertices or edges) was exceeded.
    #[error("Residue graph with {vertices} vertices and {edges} edges exceeds the configured limit of {limit}")]
    GraphTooLarge { vertices: u64, edges: u64, limit: u64 },
    #[error("Source vertex {origin} is outside the graph ({vertices} vertices)")]
    SourceOutOfRange { origin: u32, vertices: u32 },
    /// Shortest paths handed to the extractor were not rooted at residue 0.
    #[error("Distances must be measured from residue 0, got residue {origin}")]
    WrongSource { origin: u32 },
    /// Shortest paths handed to the extractor belong to a graph of another size.
    #[error("Distance table covers {vertices} residues but the modulus is {modulus}")]
    TableMismatch { modulus: u32, vertices: usize },
    #[error("{genus} gaps exceed the listing limit of {limit}")]
    TooManyGaps { genus: u64, limit: u64 },
    /// Raised after solving when a residue was never settled. Only possible if
    /// the coprimality gate was bypassed.
    #[error("Residue {vertex} is unreachable from residue 0")]
    UnreachableVertex { vertex: u32 },
}
