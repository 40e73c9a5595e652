//! Genetic algorithm for the TSP.
//!
//! - [`GeneticSolver`] — Generational GA with elitism, tournament selection,
//!   OX1 crossover and swap mutation, reproducible from a seeded generator
//! - [`GeneticParams`] — Population, generation and operator settings
//! - [`operators`] — The permutation operators themselves
//! - [`TspGaProblem`] — [`GaProblem`](u_metaheur::ga::GaProblem) implementation
//!   for the generic `u-metaheur` runner

mod chromosome;
pub mod operators;
mod params;
mod problem;
mod solver;

pub use chromosome::TourIndividual;
pub use params::GeneticParams;
pub use problem::TspGaProblem;
pub use solver::{GenerationReport, GeneticSolver};
