//! Generational genetic algorithm for the TSP.
//!
//! # Generation step
//!
//! 1. Score every individual by tour length and sort ascending (stable).
//! 2. Copy the `elite_size` best routes unchanged into the next generation.
//! 3. Until the next generation is full: pick two parents by tournament,
//!    build one child by order crossover, and mutate it by a swap with
//!    probability `mutation_rate`.
//!
//! After the last generation the shortest route in the final population is
//! returned.
//!
//! # Random draw order
//!
//! All initial individuals are shuffled first (one Fisher-Yates pass each).
//! Then, for every bred child: tournament one, tournament two, crossover
//! range, mutation roll, and the two swap positions only when the roll hits.
//! See [`operators`](super::operators) for the draws each step makes.

use log::{debug, trace};
use rand::Rng;

use crate::distance::DistanceMatrix;
use crate::models::TourResult;

use super::operators::{
    maybe_mutate, order_crossover, random_permutation, tournament_select, Scored,
};
use super::params::GeneticParams;

/// Snapshot passed to the observer after each generation is bred.
#[derive(Debug)]
pub struct GenerationReport<'a> {
    /// Zero-based generation number.
    pub generation: usize,
    /// Total number of generations in the run.
    pub generations: usize,
    /// Shortest tour length among the individuals ranked this generation.
    pub best_distance: f64,
    /// The newly bred population.
    pub population: &'a [Vec<usize>],
}

impl GenerationReport<'_> {
    /// Fraction of the run completed, in `(0, 1]`.
    pub fn progress(&self) -> f64 {
        (self.generation + 1) as f64 / self.generations as f64
    }
}

/// Genetic algorithm over a fixed distance matrix.
///
/// # Examples
///
/// ```
/// use u_tsp::models::City;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::ga::{GeneticParams, GeneticSolver};
///
/// let cities: Vec<City> = (0..8)
///     .map(|i| {
///         let a = i as f64 * std::f64::consts::TAU / 8.0;
///         City::new(a.cos() * 10.0, a.sin() * 10.0)
///     })
///     .collect();
/// let dm = DistanceMatrix::from_cities(&cities);
/// let solver = GeneticSolver::new(&dm, GeneticParams::for_cities(cities.len()));
///
/// let mut rng = u_numflow::random::create_rng(42);
/// let result = solver.run(&mut rng);
/// assert_eq!(result.route.len(), 8);
/// assert!(result.distance > 0.0);
/// ```
pub struct GeneticSolver<'a> {
    distances: &'a DistanceMatrix,
    params: GeneticParams,
}

impl<'a> GeneticSolver<'a> {
    /// Creates a solver; out-of-range parameters are clamped to runnable values.
    pub fn new(distances: &'a DistanceMatrix, params: GeneticParams) -> Self {
        Self {
            distances,
            params: params.normalized(),
        }
    }

    /// Parameters in effect for this solver.
    pub fn params(&self) -> &GeneticParams {
        &self.params
    }

    /// Runs the algorithm to completion.
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> TourResult {
        self.run_with_observer(rng, |_| {})
    }

    /// Runs the algorithm, calling `observer` after each generation.
    ///
    /// With zero cities the run is skipped and an empty tour is returned
    /// without drawing from `rng`.
    pub fn run_with_observer<R, F>(&self, rng: &mut R, mut observer: F) -> TourResult
    where
        R: Rng + ?Sized,
        F: FnMut(&GenerationReport<'_>),
    {
        let n = self.distances.size();
        if n == 0 {
            return TourResult::empty();
        }
        let p = &self.params;

        let mut population: Vec<Vec<usize>> = (0..p.population_size)
            .map(|_| random_permutation(n, rng))
            .collect();

        for generation in 0..p.generations {
            let ranked = self.rank(population);

            let mut next: Vec<Vec<usize>> = ranked
                .iter()
                .take(p.elite_size)
                .map(|s| s.route.clone())
                .collect();

            while next.len() < p.population_size {
                let parent1 = tournament_select(&ranked, p.tournament_size, rng);
                let parent2 = tournament_select(&ranked, p.tournament_size, rng);
                let mut child = order_crossover(&parent1.route, &parent2.route, rng);
                maybe_mutate(&mut child, p.mutation_rate, rng);
                next.push(child);
            }

            population = next;
            trace!(
                "genetic: generation={generation} best={:.3}",
                ranked[0].distance
            );
            observer(&GenerationReport {
                generation,
                generations: p.generations,
                best_distance: ranked[0].distance,
                population: &population,
            });
        }

        let best = self
            .rank(population)
            .into_iter()
            .next()
            .map(|s| TourResult::new(s.route, s.distance))
            .unwrap_or_default();
        debug!(
            "genetic: cities={n} population={} generations={} distance={:.3}",
            p.population_size, p.generations, best.distance
        );
        best
    }

    /// Scores and sorts routes ascending by tour length, preserving the
    /// incoming order among equal lengths.
    fn rank(&self, population: Vec<Vec<usize>>) -> Vec<Scored> {
        let mut ranked: Vec<Scored> = population
            .into_iter()
            .map(|route| {
                let distance = self.distances.tour_length(&route);
                Scored { route, distance }
            })
            .collect();
        ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::is_permutation;
    use crate::models::City;
    use u_numflow::random::create_rng;

    fn grid(side: usize) -> DistanceMatrix {
        let cities: Vec<City> = (0..side * side)
            .map(|i| City::new((i % side) as f64, (i / side) as f64))
            .collect();
        DistanceMatrix::from_cities(&cities)
    }

    #[test]
    fn test_ga_returns_permutation() {
        let dm = grid(3);
        let solver = GeneticSolver::new(&dm, GeneticParams::for_cities(9));
        let result = solver.run(&mut create_rng(42));
        assert!(is_permutation(&result.route, 9));
        assert!((result.distance - dm.tour_length(&result.route)).abs() < 1e-9);
    }

    #[test]
    fn test_ga_reproducible_with_seed() {
        let dm = grid(3);
        let solver = GeneticSolver::new(&dm, GeneticParams::for_cities(9));
        let a = solver.run(&mut create_rng(17));
        let b = solver.run(&mut create_rng(17));
        assert_eq!(a, b);
    }

    #[test]
    fn test_ga_every_generation_valid() {
        let dm = grid(4);
        let params = GeneticParams::for_cities(16).with_mutation_rate(0.5);
        let solver = GeneticSolver::new(&dm, params.clone());
        let mut seen = 0;
        solver.run_with_observer(&mut create_rng(3), |report| {
            assert_eq!(report.population.len(), params.population_size);
            for route in report.population {
                assert!(is_permutation(route, 16));
            }
            seen += 1;
        });
        assert_eq!(seen, params.generations);
    }

    #[test]
    fn test_ga_elitism_keeps_best_monotone() {
        let dm = grid(4);
        let solver = GeneticSolver::new(&dm, GeneticParams::for_cities(16));
        let mut bests = Vec::new();
        let result = solver.run_with_observer(&mut create_rng(8), |report| {
            bests.push(report.best_distance);
        });
        for pair in bests.windows(2) {
            assert!(pair[1] <= pair[0]);
        }
        assert!(result.distance <= *bests.last().expect("ran generations"));
    }

    #[test]
    fn test_ga_progress_reaches_one() {
        let dm = grid(2);
        let solver = GeneticSolver::new(&dm, GeneticParams::for_cities(4));
        let mut last = 0.0;
        solver.run_with_observer(&mut create_rng(1), |report| last = report.progress());
        assert_eq!(last, 1.0);
    }

    #[test]
    fn test_ga_zero_generations_returns_best_initial() {
        let dm = grid(3);
        let params = GeneticParams::for_cities(9).with_generations(0);
        let solver = GeneticSolver::new(&dm, params);
        let result = solver.run(&mut create_rng(2));
        assert!(is_permutation(&result.route, 9));
    }

    #[test]
    fn test_ga_empty_and_single() {
        let empty = DistanceMatrix::from_cities(&[]);
        let result = GeneticSolver::new(&empty, GeneticParams::for_cities(0)).run(&mut create_rng(0));
        assert!(result.is_empty());

        let one = DistanceMatrix::from_cities(&[City::new(1.0, 1.0)]);
        let result = GeneticSolver::new(&one, GeneticParams::for_cities(1)).run(&mut create_rng(0));
        assert_eq!(result.route, vec![0]);
        assert_eq!(result.distance, 0.0);
    }

    /// One GA run written out inline, drawing from `rng` in the documented
    /// order without going through the operator functions.
    fn inline_run<R: Rng>(dm: &DistanceMatrix, p: &GeneticParams, rng: &mut R) -> TourResult {
        let n = dm.size();
        let rank = |population: Vec<Vec<usize>>| {
            let mut ranked: Vec<(Vec<usize>, f64)> = population
                .into_iter()
                .map(|route| {
                    let d = dm.tour_length(&route);
                    (route, d)
                })
                .collect();
            ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
            ranked
        };

        let mut population = Vec::new();
        for _ in 0..p.population_size {
            let mut perm: Vec<usize> = (0..n).collect();
            for j in (1..n).rev() {
                let k = rng.random_range(0..=j);
                perm.swap(j, k);
            }
            population.push(perm);
        }

        for _ in 0..p.generations {
            let ranked = rank(population);
            let mut next: Vec<Vec<usize>> =
                ranked.iter().take(p.elite_size).map(|e| e.0.clone()).collect();
            while next.len() < p.population_size {
                let mut parents = Vec::with_capacity(2);
                for _ in 0..2 {
                    let mut best = &ranked[rng.random_range(0..ranked.len())];
                    for _ in 1..p.tournament_size {
                        let entrant = &ranked[rng.random_range(0..ranked.len())];
                        if entrant.1 < best.1 {
                            best = entrant;
                        }
                    }
                    parents.push(best.0.clone());
                }

                let start = rng.random_range(0..n);
                let end = start + rng.random_range(0..n - start);
                let segment = &parents[0][start..=end];
                let mut rest = parents[1].iter().copied().filter(|c| !segment.contains(c));
                let mut child: Vec<usize> = (0..n)
                    .map(|i| {
                        if (start..=end).contains(&i) {
                            parents[0][i]
                        } else {
                            rest.next().expect("parents are permutations")
                        }
                    })
                    .collect();

                if rng.random::<f64>() < p.mutation_rate {
                    let a = rng.random_range(0..n);
                    let b = rng.random_range(0..n);
                    child.swap(a, b);
                }
                next.push(child);
            }
            population = next;
        }

        let (route, distance) = rank(population).into_iter().next().expect("non-empty");
        TourResult::new(route, distance)
    }

    #[test]
    fn test_ga_follows_documented_draw_order() {
        for n in 3..15 {
            let cities: Vec<City> = (0..n)
                .map(|i| City::new(((i * 37) % 23) as f64, ((i * 17) % 29) as f64))
                .collect();
            let dm = DistanceMatrix::from_cities(&cities);
            for (seed, rate) in (0..20u64).zip([0.02, 0.5].into_iter().cycle()) {
                let params = GeneticParams::for_cities(n)
                    .with_generations(12)
                    .with_mutation_rate(rate);
                let solver = GeneticSolver::new(&dm, params);
                let got = solver.run(&mut create_rng(seed));
                let want = inline_run(&dm, solver.params(), &mut create_rng(seed));
                assert_eq!(got.route, want.route, "n={n} seed={seed}");
                assert_eq!(got.distance.to_bits(), want.distance.to_bits());
            }
        }
    }

    #[test]
    fn test_ga_finds_triangle_optimum() {
        // Every tour of three cities has the same length.
        let dm = DistanceMatrix::from_cities(&[
            City::new(0.0, 0.0),
            City::new(3.0, 0.0),
            City::new(0.0, 4.0),
        ]);
        let result = GeneticSolver::new(&dm, GeneticParams::for_cities(3)).run(&mut create_rng(5));
        assert!((result.distance - 12.0).abs() < 1e-9);
    }
}
