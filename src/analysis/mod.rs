//! Number-theoretic checks that gate the graph work, and the post-processing
//! that turns shortest distances into answers.
pub mod coprime;
pub mod extract;

pub use coprime::{gcd, gcd_equals_one};
pub use extract::{frobenius_from_distances, ResidueTable, MAX_LISTED_GAPS};
