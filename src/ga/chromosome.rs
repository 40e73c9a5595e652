//! Tour chromosome for the generic GA framework.

use u_metaheur::ga::Individual;

/// A tour as a GA individual: a permutation of city indices plus its cached
/// fitness (tour length; lower is better).
///
/// # Examples
///
/// ```
/// use u_tsp::ga::TourIndividual;
/// use u_metaheur::ga::Individual;
///
/// let tour = TourIndividual::new(vec![2, 0, 1]);
/// assert_eq!(tour.route(), &[2, 0, 1]);
/// assert_eq!(tour.fitness(), f64::INFINITY);
/// ```
#[derive(Debug, Clone)]
pub struct TourIndividual {
    route: Vec<usize>,
    fitness: f64,
}

impl TourIndividual {
    /// Creates a new tour from a city permutation; fitness starts unevaluated (infinite).
    pub fn new(route: Vec<usize>) -> Self {
        Self {
            route,
            fitness: f64::INFINITY,
        }
    }

    /// Returns the city permutation.
    pub fn route(&self) -> &[usize] {
        &self.route
    }

    /// Returns a mutable reference to the city permutation.
    pub fn route_mut(&mut self) -> &mut Vec<usize> {
        &mut self.route
    }

    /// Consumes the individual, returning its route.
    pub fn into_route(self) -> Vec<usize> {
        self.route
    }

    /// Returns the number of cities in this tour.
    pub fn len(&self) -> usize {
        self.route.len()
    }

    /// Returns true if the tour visits no cities.
    pub fn is_empty(&self) -> bool {
        self.route.is_empty()
    }
}

impl Individual for TourIndividual {
    type Fitness = f64;

    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }
}
