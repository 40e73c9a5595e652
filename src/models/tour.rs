//! Tour result type.

use serde::{Deserialize, Serialize};

/// A closed tour and its total Euclidean length.
///
/// `route` is a permutation of city indices; the edge from the last city back
/// to the first is implied and included in `distance`.
///
/// # Examples
///
/// ```
/// use u_tsp::models::TourResult;
///
/// let result = TourResult::new(vec![0, 1, 2, 3], 40.0);
/// assert_eq!(result.len(), 4);
/// assert_eq!(result.distance, 40.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourResult {
    /// Visiting order as city indices.
    pub route: Vec<usize>,
    /// Total cyclic length.
    pub distance: f64,
}

impl TourResult {
    /// Creates a tour result.
    pub fn new(route: Vec<usize>, distance: f64) -> Self {
        Self { route, distance }
    }

    /// The empty tour (no cities, zero length).
    pub fn empty() -> Self {
        Self::new(Vec::new(), 0.0)
    }

    /// Number of cities in the route.
    pub fn len(&self) -> usize {
        self.route.len()
    }

    /// Returns `true` if the route visits no cities.
    pub fn is_empty(&self) -> bool {
        self.route.is_empty()
    }
}

impl Default for TourResult {
    fn default() -> Self {
        Self::empty()
    }
}
