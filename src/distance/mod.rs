//! Distance model.
//!
//! Euclidean edge lengths and closed-tour length, either straight from
//! coordinates or through a precomputed dense matrix.

mod euclidean;
mod matrix;

pub use euclidean::{euclidean, tour_length};
pub use matrix::DistanceMatrix;
