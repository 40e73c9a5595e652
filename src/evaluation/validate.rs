//! Strict well-formedness checks for routes and city lists.

use crate::error::{RouteDefect, SolveError};
use crate::models::City;

/// Checks that `route` is a permutation of `0..num_cities`.
///
/// Reports the first defect found, scanning left to right.
///
/// # Examples
///
/// ```
/// use u_tsp::evaluation::validate_route;
/// use u_tsp::error::RouteDefect;
///
/// assert!(validate_route(&[2, 0, 1], 3).is_ok());
/// assert_eq!(
///     validate_route(&[0, 0, 1], 3),
///     Err(RouteDefect::Duplicate { position: 1, index: 0 }),
/// );
/// ```
pub fn validate_route(route: &[usize], num_cities: usize) -> Result<(), RouteDefect> {
    if route.len() != num_cities {
        return Err(RouteDefect::WrongLength {
            len: route.len(),
            expected: num_cities,
        });
    }
    let mut seen = vec![false; num_cities];
    for (position, &index) in route.iter().enumerate() {
        if index >= num_cities {
            return Err(RouteDefect::OutOfRange { position, index });
        }
        if seen[index] {
            return Err(RouteDefect::Duplicate { position, index });
        }
        seen[index] = true;
    }
    Ok(())
}

/// Returns `true` if `route` is a permutation of `0..num_cities`.
pub fn is_permutation(route: &[usize], num_cities: usize) -> bool {
    validate_route(route, num_cities).is_ok()
}

/// Checks that every city has finite coordinates.
pub fn validate_cities(cities: &[City]) -> Result<(), SolveError> {
    match cities.iter().position(|c| !c.is_finite()) {
        Some(index) => Err(SolveError::NonFiniteCoordinate { index }),
        None => Ok(()),
    }
}
