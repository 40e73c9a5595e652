//! Strategy identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SolveError;

/// Selects which heuristic a [`Solver`](crate::solver::Solver) runs.
///
/// # Examples
///
/// ```
/// use u_tsp::models::StrategyId;
///
/// let s: StrategyId = "hybrid".parse().unwrap();
/// assert_eq!(s, StrategyId::Hybrid);
/// assert_eq!(StrategyId::TwoOpt.to_string(), "two-opt");
/// assert!(StrategyId::Genetic.requires_min_cities() == 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyId {
    /// Greedy nearest-neighbor construction.
    #[serde(alias = "nearest")]
    NearestNeighbor,
    /// 2-opt refinement of a caller-supplied seed route.
    TwoOpt,
    /// Genetic algorithm from random permutations.
    Genetic,
    /// Nearest neighbor followed by 2-opt.
    Hybrid,
}

impl StrategyId {
    /// All strategies, in declaration order.
    pub const ALL: [StrategyId; 4] = [
        StrategyId::NearestNeighbor,
        StrategyId::TwoOpt,
        StrategyId::Genetic,
        StrategyId::Hybrid,
    ];

    /// Canonical identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyId::NearestNeighbor => "nearest-neighbor",
            StrategyId::TwoOpt => "two-opt",
            StrategyId::Genetic => "genetic",
            StrategyId::Hybrid => "hybrid",
        }
    }

    /// Minimum number of cities the validated entry point accepts.
    pub fn requires_min_cities(&self) -> usize {
        match self {
            StrategyId::NearestNeighbor => 0,
            StrategyId::TwoOpt | StrategyId::Genetic | StrategyId::Hybrid => 3,
        }
    }

    /// Returns `true` if the strategy consumes a caller-supplied seed route.
    pub fn needs_seed_route(&self) -> bool {
        matches!(self, StrategyId::TwoOpt)
    }
}

impl fmt::Display for StrategyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyId {
    type Err = SolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nearest-neighbor" | "nearest" => Ok(StrategyId::NearestNeighbor),
            "two-opt" => Ok(StrategyId::TwoOpt),
            "genetic" => Ok(StrategyId::Genetic),
            "hybrid" => Ok(StrategyId::Hybrid),
            other => Err(SolveError::UnknownStrategy(other.to_string())),
        }
    }
}
