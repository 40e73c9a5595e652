//! Solver façade over a fixed set of cities.
//!
//! A [`Solver`] snapshots the input cities and their distance matrix once.
//! Every strategy method borrows the solver immutably and builds its own
//! working state, so one solver can serve several strategies, including from
//! different threads.
//!
//! The strategy methods (`nearest_neighbor`, `two_opt`, `genetic`, `hybrid`)
//! never fail and perform no validation. [`Solver::solve`] is the checked
//! entry point: it enforces the minimum city count and seed-route shape for
//! the chosen strategy before running it.

use std::time::{Duration, Instant};

use anyhow::Context;
use log::debug;
use rand::Rng;
use serde::Serialize;

use crate::constructive::nearest_neighbor;
use crate::distance::DistanceMatrix;
use crate::error::SolveError;
use crate::evaluation::{validate_cities, validate_route, TourStats};
use crate::ga::{GenerationReport, GeneticParams, GeneticSolver};
use crate::local_search::{two_opt_improve, TwoOptParams};
use crate::models::{City, StrategyId, TourResult};

/// TSP solver over an immutable city list.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{City, StrategyId};
/// use u_tsp::solver::Solver;
///
/// let solver = Solver::new(vec![
///     City::new(0.0, 0.0),
///     City::new(10.0, 0.0),
///     City::new(10.0, 10.0),
///     City::new(0.0, 10.0),
/// ]);
///
/// let nn = solver.nearest_neighbor();
/// assert_eq!(nn.route, vec![0, 1, 2, 3]);
/// assert_eq!(solver.hybrid(), solver.two_opt(&nn.route));
///
/// let mut rng = u_numflow::random::create_rng(42);
/// let ga = solver.solve(StrategyId::Genetic, None, &mut rng).unwrap();
/// assert_eq!(ga.route.len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    cities: Vec<City>,
    distances: DistanceMatrix,
    genetic: Option<GeneticParams>,
    two_opt: Option<TwoOptParams>,
}

/// Outcome of [`Solver::solve_timed`].
#[derive(Debug, Clone, Serialize)]
pub struct SolveReport {
    /// Strategy that produced the result.
    pub strategy: StrategyId,
    /// The tour found.
    pub result: TourResult,
    /// Wall-clock time spent in the strategy.
    #[serde(skip)]
    pub elapsed: Duration,
    /// Summary statistics.
    pub stats: TourStats,
}

impl Solver {
    /// Creates a solver without checking coordinates.
    pub fn new(cities: impl Into<Vec<City>>) -> Self {
        let cities = cities.into();
        let distances = DistanceMatrix::from_cities(&cities);
        Self {
            cities,
            distances,
            genetic: None,
            two_opt: None,
        }
    }

    /// Creates a solver, rejecting cities with NaN or infinite coordinates.
    pub fn try_new(cities: impl Into<Vec<City>>) -> Result<Self, SolveError> {
        let cities = cities.into();
        validate_cities(&cities)?;
        Ok(Self::new(cities))
    }

    /// Overrides the genetic algorithm parameters derived from the city count.
    pub fn with_genetic_params(mut self, params: GeneticParams) -> Self {
        self.genetic = Some(params);
        self
    }

    /// Overrides the 2-opt pass cap derived from the city count.
    pub fn with_two_opt_params(mut self, params: TwoOptParams) -> Self {
        self.two_opt = Some(params);
        self
    }

    /// The city snapshot.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Number of cities.
    pub fn num_cities(&self) -> usize {
        self.cities.len()
    }

    /// The precomputed distance matrix.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Distance between cities `a` and `b`, or `None` if either index is
    /// out of range.
    pub fn distance(&self, a: usize, b: usize) -> Option<f64> {
        self.distances.checked_get(a, b)
    }

    /// Closed-tour length of `route`; malformed edges contribute zero.
    pub fn tour_length(&self, route: &[usize]) -> f64 {
        self.distances.tour_length(route)
    }

    /// Genetic parameters in effect (override or derived).
    pub fn genetic_params(&self) -> GeneticParams {
        self.genetic
            .clone()
            .unwrap_or_else(|| GeneticParams::for_cities(self.num_cities()))
    }

    /// 2-opt parameters in effect (override or derived).
    pub fn two_opt_params(&self) -> TwoOptParams {
        self.two_opt
            .unwrap_or_else(|| TwoOptParams::for_cities(self.num_cities()))
    }

    /// Greedy nearest-neighbor tour from city 0.
    pub fn nearest_neighbor(&self) -> TourResult {
        nearest_neighbor(&self.distances)
    }

    /// First-improvement 2-opt refinement of `seed`.
    pub fn two_opt(&self, seed: &[usize]) -> TourResult {
        two_opt_improve(seed, &self.distances, &self.two_opt_params())
    }

    /// Genetic algorithm from random permutations.
    pub fn genetic<R: Rng + ?Sized>(&self, rng: &mut R) -> TourResult {
        GeneticSolver::new(&self.distances, self.genetic_params()).run(rng)
    }

    /// Genetic algorithm with a per-generation progress callback.
    pub fn genetic_with_observer<R, F>(&self, rng: &mut R, observer: F) -> TourResult
    where
        R: Rng + ?Sized,
        F: FnMut(&GenerationReport<'_>),
    {
        GeneticSolver::new(&self.distances, self.genetic_params())
            .run_with_observer(rng, observer)
    }

    /// Nearest neighbor followed by 2-opt on its route.
    pub fn hybrid(&self) -> TourResult {
        let seed = self.nearest_neighbor();
        self.two_opt(&seed.route)
    }

    /// Checks that `strategy` can run on this instance with `seed_route`.
    pub fn check(
        &self,
        strategy: StrategyId,
        seed_route: Option<&[usize]>,
    ) -> Result<(), SolveError> {
        let n = self.num_cities();
        let required = strategy.requires_min_cities();
        if n < required {
            return Err(SolveError::InsufficientCities {
                required,
                actual: n,
            });
        }
        if strategy.needs_seed_route() {
            let seed = seed_route.ok_or(SolveError::MissingSeedRoute)?;
            validate_route(seed, n)?;
        }
        Ok(())
    }

    /// Validates the request and runs `strategy`.
    ///
    /// `seed_route` is required for [`StrategyId::TwoOpt`] and ignored
    /// otherwise. `rng` is only drawn from by [`StrategyId::Genetic`].
    /// Failures carry a [`SolveError`], recoverable with
    /// `err.downcast_ref::<SolveError>()`.
    pub fn solve<R: Rng + ?Sized>(
        &self,
        strategy: StrategyId,
        seed_route: Option<&[usize]>,
        rng: &mut R,
    ) -> anyhow::Result<TourResult> {
        self.check(strategy, seed_route)
            .with_context(|| format!("cannot run {strategy} on {} cities", self.num_cities()))?;
        debug!("solve: strategy={strategy} cities={}", self.num_cities());

        let result = match strategy {
            StrategyId::NearestNeighbor => self.nearest_neighbor(),
            StrategyId::TwoOpt => self.two_opt(seed_route.unwrap_or_default()),
            StrategyId::Genetic => self.genetic(rng),
            StrategyId::Hybrid => self.hybrid(),
        };
        Ok(result)
    }

    /// [`solve`](Self::solve) with a generator seeded from `seed`.
    pub fn solve_seeded(
        &self,
        strategy: StrategyId,
        seed_route: Option<&[usize]>,
        seed: u64,
    ) -> anyhow::Result<TourResult> {
        let mut rng = u_numflow::random::create_rng(seed);
        self.solve(strategy, seed_route, &mut rng)
    }

    /// [`solve`](Self::solve), also measuring wall-clock time.
    pub fn solve_timed<R: Rng + ?Sized>(
        &self,
        strategy: StrategyId,
        seed_route: Option<&[usize]>,
        rng: &mut R,
    ) -> anyhow::Result<SolveReport> {
        let start = Instant::now();
        let result = self.solve(strategy, seed_route, rng)?;
        let elapsed = start.elapsed();
        let stats = TourStats::new(&result, self.num_cities(), elapsed);
        Ok(SolveReport {
            strategy,
            result,
            elapsed,
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RouteDefect;
    use crate::evaluation::is_permutation;
    use u_numflow::random::create_rng;

    fn square() -> Solver {
        Solver::new(vec![
            City::new(0.0, 0.0),
            City::new(10.0, 0.0),
            City::new(10.0, 10.0),
            City::new(0.0, 10.0),
        ])
    }

    fn scattered() -> Solver {
        Solver::new(vec![
            City::new(200.0, 150.0),
            City::new(400.0, 200.0),
            City::new(350.0, 350.0),
            City::new(150.0, 300.0),
            City::new(90.0, 80.0),
            City::new(480.0, 60.0),
            City::new(260.0, 420.0),
            City::new(30.0, 400.0),
            City::new(310.0, 240.0),
        ])
    }

    fn solve_err(solver: &Solver, strategy: StrategyId, seed: Option<&[usize]>) -> SolveError {
        let err = solver
            .solve(strategy, seed, &mut create_rng(0))
            .expect_err("should be rejected");
        err.downcast_ref::<SolveError>()
            .expect("carries SolveError")
            .clone()
    }

    #[test]
    fn test_square_nn_and_two_opt() {
        let s = square();
        let nn = s.nearest_neighbor();
        assert_eq!(nn.route, vec![0, 1, 2, 3]);
        assert!((nn.distance - 40.0).abs() < 1e-10);

        let refined = s.two_opt(&nn.route);
        assert_eq!(refined.route, vec![0, 1, 2, 3]);
        assert!((refined.distance - 40.0).abs() < 1e-10);
    }

    #[test]
    fn test_hybrid_equals_two_opt_of_nn() {
        let s = scattered();
        let expected = s.two_opt(&s.nearest_neighbor().route);
        let hybrid = s.hybrid();
        assert_eq!(hybrid.route, expected.route);
        assert_eq!(hybrid.distance.to_bits(), expected.distance.to_bits());
    }

    #[test]
    fn test_hybrid_not_worse_than_nn() {
        let s = scattered();
        assert!(s.hybrid().distance <= s.nearest_neighbor().distance);
    }

    #[test]
    fn test_solve_all_strategies_return_permutations() {
        let s = scattered();
        let identity: Vec<usize> = (0..s.num_cities()).collect();
        for strategy in StrategyId::ALL {
            let result = s
                .solve(strategy, Some(&identity), &mut create_rng(21))
                .expect("valid request");
            assert!(is_permutation(&result.route, s.num_cities()), "{strategy}");
            assert!((result.distance - s.tour_length(&result.route)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_solve_rejects_too_few_cities() {
        let s = Solver::new(vec![City::new(0.0, 0.0), City::new(1.0, 1.0)]);
        for strategy in [StrategyId::TwoOpt, StrategyId::Genetic, StrategyId::Hybrid] {
            assert_eq!(
                solve_err(&s, strategy, Some(&[0, 1])),
                SolveError::InsufficientCities {
                    required: 3,
                    actual: 2
                }
            );
        }
    }

    #[test]
    fn test_solve_nn_tolerates_small_inputs() {
        let mut rng = create_rng(0);
        let empty = Solver::new(Vec::<City>::new());
        let r = empty
            .solve(StrategyId::NearestNeighbor, None, &mut rng)
            .expect("nn accepts zero cities");
        assert!(r.is_empty());
        assert_eq!(r.distance, 0.0);

        let one = Solver::new(vec![City::new(3.0, 3.0)]);
        let r = one
            .solve(StrategyId::NearestNeighbor, None, &mut rng)
            .expect("nn accepts one city");
        assert_eq!(r.route, vec![0]);
        assert_eq!(r.distance, 0.0);
    }

    #[test]
    fn test_solve_two_opt_needs_seed() {
        let s = square();
        assert_eq!(solve_err(&s, StrategyId::TwoOpt, None), SolveError::MissingSeedRoute);
    }

    #[test]
    fn test_solve_two_opt_rejects_malformed_seed() {
        let s = square();
        assert_eq!(
            solve_err(&s, StrategyId::TwoOpt, Some(&[0, 1, 1, 3])),
            SolveError::MalformedRoute(RouteDefect::Duplicate {
                position: 2,
                index: 1
            })
        );
        assert_eq!(
            solve_err(&s, StrategyId::TwoOpt, Some(&[0, 1, 2])),
            SolveError::MalformedRoute(RouteDefect::WrongLength {
                len: 3,
                expected: 4
            })
        );
    }

    #[test]
    fn test_solve_error_message_has_context() {
        let s = Solver::new(vec![City::new(0.0, 0.0)]);
        let err = s
            .solve(StrategyId::Hybrid, None, &mut create_rng(0))
            .expect_err("too few cities");
        assert_eq!(err.to_string(), "cannot run hybrid on 1 cities");
        assert_eq!(err.root_cause().to_string(), "at least 3 cities required, got 1");
    }

    #[test]
    fn test_solve_seeded_reproducible() {
        let s = scattered();
        let a = s.solve_seeded(StrategyId::Genetic, None, 99).expect("ok");
        let b = s.solve_seeded(StrategyId::Genetic, None, 99).expect("ok");
        assert_eq!(a, b);
    }

    #[test]
    fn test_solve_timed_report() {
        let s = scattered();
        let report = s
            .solve_timed(StrategyId::Hybrid, None, &mut create_rng(0))
            .expect("ok");
        assert_eq!(report.strategy, StrategyId::Hybrid);
        assert_eq!(report.stats.cities, 9);
        assert_eq!(report.stats.distance, report.result.distance);
    }

    #[test]
    fn test_solve_accepts_dyn_rng() {
        let s = scattered();
        let mut rng = create_rng(7);
        let dyn_rng: &mut dyn rand::RngCore = &mut rng;
        let via_dyn = s.solve(StrategyId::Genetic, None, dyn_rng).expect("genetic runs");
        let seeded = s.solve_seeded(StrategyId::Genetic, None, 7).expect("genetic runs");
        assert_eq!(via_dyn, seeded);
    }

    #[test]
    fn test_try_new_rejects_nan() {
        let err = Solver::try_new(vec![City::new(0.0, 0.0), City::new(f64::NAN, 1.0)])
            .expect_err("nan coordinate");
        assert_eq!(err, SolveError::NonFiniteCoordinate { index: 1 });
    }

    #[test]
    fn test_param_overrides() {
        let s = scattered()
            .with_genetic_params(GeneticParams::for_cities(9).with_generations(3))
            .with_two_opt_params(TwoOptParams::for_cities(9).with_max_iterations(1));
        assert_eq!(s.genetic_params().generations, 3);
        assert_eq!(s.two_opt_params().max_iterations, 1);

        let mut calls = 0;
        s.genetic_with_observer(&mut create_rng(4), |_| calls += 1);
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_derived_params() {
        let s = scattered();
        assert_eq!(s.genetic_params(), GeneticParams::for_cities(9));
        assert_eq!(s.two_opt_params().max_iterations, 90);
    }

    #[test]
    fn test_distance_lookup() {
        let s = square();
        assert_eq!(s.distance(0, 1), Some(10.0));
        assert_eq!(s.distance(0, 4), None);
    }

    #[test]
    fn test_strategies_do_not_mutate_cities() {
        let s = scattered();
        let before = s.cities().to_vec();
        let _ = s.hybrid();
        let _ = s.genetic(&mut create_rng(1));
        assert_eq!(s.cities(), before.as_slice());
    }
}
