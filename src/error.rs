//! Error types for the validated solver surface.

use std::error::Error;
use std::fmt;

/// What is wrong with a route passed to a validated entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDefect {
    /// Route length differs from the number of cities.
    WrongLength {
        /// Actual route length.
        len: usize,
        /// Number of cities.
        expected: usize,
    },
    /// A route entry is not a valid city index.
    OutOfRange {
        /// Position in the route.
        position: usize,
        /// Offending index.
        index: usize,
    },
    /// A city index appears more than once.
    Duplicate {
        /// Position of the repeated occurrence.
        position: usize,
        /// Offending index.
        index: usize,
    },
}

impl fmt::Display for RouteDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteDefect::WrongLength { len, expected } => {
                write!(f, "route has {len} entries, expected {expected}")
            }
            RouteDefect::OutOfRange { position, index } => {
                write!(f, "index {index} at position {position} is out of range")
            }
            RouteDefect::Duplicate { position, index } => {
                write!(f, "index {index} repeated at position {position}")
            }
        }
    }
}

/// Errors reported by [`Solver::solve`](crate::solver::Solver::solve) and the
/// checks in [`evaluation`](crate::evaluation).
///
/// The strategy functions themselves never fail; these errors only arise at
/// the validated surface.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveError {
    /// The strategy needs more cities than were supplied.
    InsufficientCities {
        /// Minimum city count for the strategy.
        required: usize,
        /// Cities supplied.
        actual: usize,
    },
    /// A supplied route is not a permutation of the city indices.
    MalformedRoute(RouteDefect),
    /// A city has a NaN or infinite coordinate.
    NonFiniteCoordinate {
        /// Index of the offending city.
        index: usize,
    },
    /// `two-opt` was requested without a seed route.
    MissingSeedRoute,
    /// The strategy identifier is not recognised.
    UnknownStrategy(String),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::InsufficientCities { required, actual } => {
                write!(f, "at least {required} cities required, got {actual}")
            }
            SolveError::MalformedRoute(defect) => write!(f, "malformed route: {defect}"),
            SolveError::NonFiniteCoordinate { index } => {
                write!(f, "city {index} has a non-finite coordinate")
            }
            SolveError::MissingSeedRoute => f.write_str("two-opt requires a seed route"),
            SolveError::UnknownStrategy(id) => write!(f, "unknown strategy '{id}'"),
        }
    }
}

impl Error for SolveError {}

impl From<RouteDefect> for SolveError {
    fn from(defect: RouteDefect) -> Self {
        SolveError::MalformedRoute(defect)
    }
}
