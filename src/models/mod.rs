//! Domain model types for the planar TSP.
//!
//! Cities are points on the plane, referenced everywhere by their index in
//! the input sequence. A tour result pairs a route (a permutation of those
//! indices) with its closed-cycle length.

mod city;
mod strategy;
mod tour;

pub use city::City;
pub use strategy::StrategyId;
pub use tour::TourResult;
