//! 2-opt tour improvement.
//!
//! # Algorithm
//!
//! For each pair of positions `1 <= i < len - 2`, `i + 2 <= j < len`, reverse
//! the segment `[i..=j]` and recompute the full closed-tour length. The first
//! candidate that is strictly shorter is accepted and the scan restarts from
//! the top (first-improvement). Position 0 is never moved, so it stays the
//! fixed reference point of the cycle.
//!
//! The search stops after a pass with no accepted move, or after
//! `max_iterations` passes, whichever comes first.
//!
//! # Complexity
//!
//! O(n³) per pass (O(n²) candidates, each scored in O(n)).
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;
use crate::models::TourResult;

/// Iteration bound for [`two_opt_improve`].
///
/// # Examples
///
/// ```
/// use u_tsp::local_search::TwoOptParams;
///
/// assert_eq!(TwoOptParams::for_cities(12).max_iterations, 120);
/// assert_eq!(TwoOptParams::for_cities(500).max_iterations, 1000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwoOptParams {
    /// Maximum number of improvement passes.
    pub max_iterations: usize,
}

impl TwoOptParams {
    /// Pass cap for an instance of `n` cities: `min(1000, n * 10)`.
    pub fn for_cities(n: usize) -> Self {
        Self {
            max_iterations: (n * 10).min(1000),
        }
    }

    /// Overrides the pass cap.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Improves `seed` with first-improvement 2-opt.
///
/// The returned distance is never greater than the seed's tour length. Seeds
/// shorter than four entries admit no move and come back unchanged.
///
/// # Examples
///
/// ```
/// use u_tsp::models::City;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::local_search::{two_opt_improve, TwoOptParams};
///
/// // Six stops along a street.
/// let cities: Vec<City> = (0..6).map(|x| City::new(x as f64, 0.0)).collect();
/// let dm = DistanceMatrix::from_cities(&cities);
/// let params = TwoOptParams::for_cities(cities.len());
///
/// let seed = [0, 2, 1, 3, 5, 4];
/// assert_eq!(dm.tour_length(&seed), 12.0);
///
/// let result = two_opt_improve(&seed, &dm, &params);
/// assert_eq!(result.route, vec![0, 2, 4, 5, 3, 1]);
/// assert_eq!(result.distance, 10.0);
/// ```
pub fn two_opt_improve(
    seed: &[usize],
    distances: &DistanceMatrix,
    params: &TwoOptParams,
) -> TourResult {
    let mut best = seed.to_vec();
    let mut best_distance = distances.tour_length(&best);
    let len = best.len();

    let mut improved = true;
    let mut iterations = 0;

    while improved && iterations < params.max_iterations {
        improved = false;
        iterations += 1;

        'scan: for i in 1..len.saturating_sub(2) {
            for j in (i + 2)..len {
                best[i..=j].reverse();
                let candidate = distances.tour_length(&best);
                if candidate < best_distance {
                    trace!("two_opt: pass={iterations} reverse [{i}, {j}] distance={candidate:.3}");
                    best_distance = candidate;
                    improved = true;
                    break 'scan;
                }
                best[i..=j].reverse();
            }
        }
    }

    debug!(
        "two_opt: cities={} passes={iterations} distance={best_distance:.3}",
        distances.size()
    );
    TourResult::new(best, best_distance)
}
