//! # u-tsp
//!
//! Heuristic solvers for the planar Euclidean travelling salesman problem:
//! given points on the plane, find a short closed tour visiting each once.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (City, TourResult, StrategyId)
//! - [`distance`] — Euclidean distance, tour length, and dense distance matrix
//! - [`evaluation`] — Route/city validation and run statistics
//! - [`constructive`] — Nearest-neighbor construction
//! - [`local_search`] — First-improvement 2-opt
//! - [`ga`] — Genetic algorithm (OX1 crossover, tournament selection, elitism)
//! - [`solver`] — [`Solver`](solver::Solver) façade and validated dispatch
//! - [`error`] — Error taxonomy for the validated surface

pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod ga;
pub mod local_search;
pub mod models;
pub mod solver;

#[cfg(feature = "wasm")]
pub mod wasm;
