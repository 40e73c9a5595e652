//! Route validation and run statistics.
//!
//! The distance model tolerates malformed routes; the checks here are the
//! strict counterpart used at the validated solver surface.

mod stats;
mod validate;

pub use stats::TourStats;
pub use validate::{is_permutation, validate_cities, validate_route};
