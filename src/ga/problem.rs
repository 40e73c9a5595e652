//! GA problem definition for the generic `u-metaheur` runner.
//!
//! [`GeneticSolver`](super::GeneticSolver) reproduces one fixed generational
//! scheme with a documented draw order. `TspGaProblem` exposes the same tour
//! encoding and operators through [`GaProblem`] so that the framework's
//! [`GaRunner`](u_metaheur::ga::GaRunner) (with its own selection, elitism and
//! parallel evaluation) can be used instead.
//!
//! # Operators
//!
//! - **Crossover**: Order crossover (OX1), both parent orderings
//! - **Mutation**: Swap of two random positions
//! - **Evaluation**: Closed-tour Euclidean length

use rand::Rng;
use u_metaheur::ga::GaProblem;

use crate::distance::DistanceMatrix;
use crate::models::City;

use super::chromosome::TourIndividual;
use super::operators::{order_crossover, random_permutation, swap_mutation};

/// Planar TSP as a [`GaProblem`].
///
/// # Examples
///
/// ```
/// use u_tsp::models::City;
/// use u_tsp::ga::TspGaProblem;
/// use u_metaheur::ga::{GaConfig, GaRunner};
///
/// let cities = vec![
///     City::new(0.0, 0.0),
///     City::new(10.0, 0.0),
///     City::new(10.0, 10.0),
///     City::new(0.0, 10.0),
/// ];
/// let problem = TspGaProblem::new(&cities);
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_max_generations(30);
///
/// let result = GaRunner::run(&problem, &config).expect("valid GA config");
/// assert!(result.best_fitness < f64::INFINITY);
/// ```
pub struct TspGaProblem {
    distances: DistanceMatrix,
}

impl TspGaProblem {
    /// Builds the problem from city coordinates.
    pub fn new(cities: &[City]) -> Self {
        Self::from_matrix(DistanceMatrix::from_cities(cities))
    }

    /// Builds the problem from a precomputed matrix.
    pub fn from_matrix(distances: DistanceMatrix) -> Self {
        Self { distances }
    }

    fn num_cities(&self) -> usize {
        self.distances.size()
    }
}

impl GaProblem for TspGaProblem {
    type Individual = TourIndividual;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> TourIndividual {
        TourIndividual::new(random_permutation(self.num_cities(), rng))
    }

    fn evaluate(&self, individual: &TourIndividual) -> f64 {
        self.distances.tour_length(individual.route())
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &TourIndividual,
        parent2: &TourIndividual,
        rng: &mut R,
    ) -> Vec<TourIndividual> {
        let c1 = order_crossover(parent1.route(), parent2.route(), rng);
        let c2 = order_crossover(parent2.route(), parent1.route(), rng);
        vec![TourIndividual::new(c1), TourIndividual::new(c2)]
    }

    fn mutate<R: Rng>(&self, individual: &mut TourIndividual, rng: &mut R) {
        if individual.len() < 2 {
            return;
        }
        swap_mutation(individual.route_mut(), rng);
    }
}
