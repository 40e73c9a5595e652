//! Summary statistics for a finished run.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::models::TourResult;

/// Per-run summary: tour length normalized by city count, and timing.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_tsp::evaluation::TourStats;
/// use u_tsp::models::TourResult;
///
/// let result = TourResult::new(vec![0, 1, 2, 3], 40.0);
/// let stats = TourStats::new(&result, 4, Duration::from_millis(8));
/// assert_eq!(stats.avg_distance_per_city, 10.0);
/// assert_eq!(stats.time_per_city_ms, 2.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourStats {
    /// Number of cities in the instance.
    pub cities: usize,
    /// Total tour length.
    pub distance: f64,
    /// `distance / cities`, or 0 for an empty instance.
    pub avg_distance_per_city: f64,
    /// Wall-clock time of the run in milliseconds.
    pub elapsed_ms: f64,
    /// `elapsed_ms / cities`, or 0 for an empty instance.
    pub time_per_city_ms: f64,
}

impl TourStats {
    /// Computes statistics for `result` on an instance of `cities` cities.
    pub fn new(result: &TourResult, cities: usize, elapsed: Duration) -> Self {
        let elapsed_ms = elapsed.as_nanos() as f64 / 1e6;
        let per_city = |v: f64| if cities == 0 { 0.0 } else { v / cities as f64 };
        Self {
            cities,
            distance: result.distance,
            avg_distance_per_city: per_city(result.distance),
            elapsed_ms,
            time_per_city_ms: per_city(elapsed_ms),
        }
    }
}
