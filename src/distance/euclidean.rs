//! Coordinate-level distance functions.

use crate::models::City;

/// Euclidean distance between two cities.
pub fn euclidean(a: &City, b: &City) -> f64 {
    a.distance_to(b)
}

/// Closed-tour length of `route` over `cities`.
///
/// Sums `distance(cities[route[i]], cities[route[(i + 1) % len]])` for every
/// position. Returns 0 when the route has fewer than two entries. An edge
/// whose endpoint is not a valid index is skipped rather than reported, so a
/// partial or malformed route still yields a finite number; use
/// [`validate_route`](crate::evaluation::validate_route) when strictness is
/// wanted.
///
/// # Examples
///
/// ```
/// use u_tsp::models::City;
/// use u_tsp::distance::tour_length;
///
/// let cities = vec![City::new(0.0, 0.0), City::new(3.0, 4.0)];
/// assert!((tour_length(&cities, &[0, 1]) - 10.0).abs() < 1e-10);
/// assert_eq!(tour_length(&cities, &[1]), 0.0);
/// ```
pub fn tour_length(cities: &[City], route: &[usize]) -> f64 {
    let len = route.len();
    if len < 2 {
        return 0.0;
    }
    let mut total = 0.0;
    for i in 0..len {
        let current = cities.get(route[i]);
        let next = cities.get(route[(i + 1) % len]);
        if let (Some(a), Some(b)) = (current, next) {
            total += euclidean(a, b);
        }
    }
    total
}
