//! Genetic algorithm parameters.

use serde::{Deserialize, Serialize};

/// Tuning for [`GeneticSolver`](super::GeneticSolver).
///
/// [`GeneticParams::for_cities`] derives the standard schedule from the
/// instance size; the `with_*` builders override individual fields.
///
/// # Examples
///
/// ```
/// use u_tsp::ga::GeneticParams;
///
/// let p = GeneticParams::for_cities(15);
/// assert_eq!(p.population_size, 30);
/// assert_eq!(p.generations, 75);
/// assert_eq!(p.elite_size, 6);
/// assert_eq!(p.tournament_size, 5);
///
/// let small = GeneticParams::for_cities(15).with_population_size(10);
/// assert_eq!(small.population_size, 10);
/// assert_eq!(small.elite_size, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneticParams {
    /// Individuals per generation.
    pub population_size: usize,
    /// Number of generations to evolve.
    pub generations: usize,
    /// Probability that a child is mutated.
    pub mutation_rate: f64,
    /// Best individuals copied unchanged into the next generation.
    pub elite_size: usize,
    /// Individuals sampled per tournament.
    pub tournament_size: usize,
}

/// Fraction of the population carried over by elitism.
const ELITE_FRACTION: f64 = 0.2;

impl GeneticParams {
    /// Standard schedule for `n` cities.
    ///
    /// - `population_size = clamp(2n, 20, 50)`
    /// - `generations = min(100, 5n)`
    /// - `mutation_rate = 0.02`
    /// - `elite_size = floor(0.2 * population_size)`
    /// - `tournament_size = 5`
    pub fn for_cities(n: usize) -> Self {
        let population_size = (n * 2).clamp(20, 50);
        Self {
            population_size,
            generations: (n * 5).min(100),
            mutation_rate: 0.02,
            elite_size: elite_for(population_size),
            tournament_size: 5,
        }
    }

    /// Sets the population size and rescales the elite count to match.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self.elite_size = elite_for(size);
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Sets the mutation probability.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the elite count directly.
    pub fn with_elite_size(mut self, elite_size: usize) -> Self {
        self.elite_size = elite_size;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, size: usize) -> Self {
        self.tournament_size = size;
        self
    }

    /// Clamps fields into a runnable range: at least one individual, at least
    /// one tournament entrant, no more elites than individuals, and a
    /// mutation rate within `[0, 1]`.
    pub(crate) fn normalized(&self) -> Self {
        let population_size = self.population_size.max(1);
        Self {
            population_size,
            generations: self.generations,
            mutation_rate: if self.mutation_rate.is_nan() {
                0.0
            } else {
                self.mutation_rate.clamp(0.0, 1.0)
            },
            elite_size: self.elite_size.min(population_size),
            tournament_size: self.tournament_size.max(1),
        }
    }
}

fn elite_for(population_size: usize) -> usize {
    (population_size as f64 * ELITE_FRACTION).floor() as usize
}
