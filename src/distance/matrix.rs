//! Dense distance matrix.

use crate::models::City;

/// A dense n×n Euclidean distance matrix stored in row-major order.
///
/// Built once per [`Solver`](crate::solver::Solver) so that every strategy
/// reads edge lengths from the same cache instead of recomputing square roots.
///
/// # Examples
///
/// ```
/// use u_tsp::models::City;
/// use u_tsp::distance::DistanceMatrix;
///
/// let cities = vec![
///     City::new(0.0, 0.0),
///     City::new(3.0, 4.0),
///     City::new(6.0, 8.0),
/// ];
/// let dm = DistanceMatrix::from_cities(&cities);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.checked_get(0, 7), None);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes the matrix from city coordinates.
    pub fn from_cities(cities: &[City]) -> Self {
        let n = cities.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = cities[i].distance_to(&cities[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Self { data, size: n }
    }

    /// Returns the distance between cities `from` and `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Returns the distance, or `None` if either index is out of bounds.
    pub fn checked_get(&self, from: usize, to: usize) -> Option<f64> {
        if from < self.size && to < self.size {
            Some(self.get(from, to))
        } else {
            None
        }
    }

    /// Number of cities in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Closed-tour length of `route`, including the wrap-around edge.
    ///
    /// Returns 0 for routes shorter than two entries. Edges touching an
    /// out-of-range index contribute nothing.
    pub fn tour_length(&self, route: &[usize]) -> f64 {
        let len = route.len();
        if len < 2 {
            return 0.0;
        }
        let mut total = 0.0;
        for i in 0..len {
            if let Some(d) = self.checked_get(route[i], route[(i + 1) % len]) {
                total += d;
            }
        }
        total
    }
}
