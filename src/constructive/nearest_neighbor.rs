//! Nearest-neighbor constructive heuristic.
//!
//! Builds a single tour greedily: starting from city 0, always move to the
//! nearest city not yet visited.
//!
//! # Complexity
//!
//! O(n²) where n = number of cities.
//!
//! # Tie-breaking
//!
//! Candidates are scanned in ascending index order (the insertion order of
//! the unvisited set, which removals preserve). Only a strictly shorter
//! distance replaces the current choice, so the lowest index wins ties.

use indexmap::IndexSet;
use log::debug;

use crate::distance::DistanceMatrix;
use crate::models::TourResult;

/// Constructs a tour using the nearest-neighbor heuristic.
///
/// Returns an empty tour for zero cities and the single-city tour `[0]`
/// (length 0) for one city.
///
/// # Examples
///
/// ```
/// use u_tsp::models::City;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::constructive::nearest_neighbor;
///
/// let cities = vec![
///     City::new(0.0, 0.0),
///     City::new(10.0, 0.0),
///     City::new(10.0, 10.0),
///     City::new(0.0, 10.0),
/// ];
/// let dm = DistanceMatrix::from_cities(&cities);
///
/// let result = nearest_neighbor(&dm);
/// assert_eq!(result.route, vec![0, 1, 2, 3]);
/// assert!((result.distance - 40.0).abs() < 1e-10);
/// ```
pub fn nearest_neighbor(distances: &DistanceMatrix) -> TourResult {
    let n = distances.size();
    match n {
        0 => return TourResult::empty(),
        1 => return TourResult::new(vec![0], 0.0),
        _ => {}
    }

    let mut unvisited: IndexSet<usize> = (1..n).collect();
    let mut route = Vec::with_capacity(n);
    route.push(0);

    while !unvisited.is_empty() {
        let current = route[route.len() - 1];
        let mut nearest: Option<usize> = None;
        let mut min_distance = f64::INFINITY;

        for &candidate in &unvisited {
            let d = distances.get(current, candidate);
            if d < min_distance {
                min_distance = d;
                nearest = Some(candidate);
            }
        }

        // NaN or infinite distances leave `nearest` unset; fall back to the
        // first unvisited city so construction still terminates.
        let next = match nearest {
            Some(c) => {
                unvisited.shift_remove(&c);
                c
            }
            None => match unvisited.shift_remove_index(0) {
                Some(c) => c,
                None => break,
            },
        };
        route.push(next);
    }

    let distance = distances.tour_length(&route);
    debug!("nearest_neighbor: cities={n} distance={distance:.3}");
    TourResult::new(route, distance)
}
