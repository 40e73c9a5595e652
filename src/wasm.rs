//! Browser bindings.
//!
//! Cities and results cross the boundary as plain JS objects:
//! `[{x, y, id?}, ...]` in, `{route, distance}` out.

use wasm_bindgen::prelude::*;

use crate::models::{City, StrategyId};
use crate::solver::Solver;

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// Runs `strategy` on `cities`.
///
/// `seed_route` is only read for `"two-opt"`. `seed` drives the genetic
/// algorithm's random generator.
#[wasm_bindgen]
pub fn solve(
    cities: JsValue,
    strategy: &str,
    seed_route: Option<Vec<usize>>,
    seed: u64,
) -> Result<JsValue, JsValue> {
    let cities: Vec<City> = serde_wasm_bindgen::from_value(cities).map_err(to_js_error)?;
    let strategy: StrategyId = strategy.parse().map_err(to_js_error)?;
    let solver = Solver::try_new(cities).map_err(to_js_error)?;

    let result = solver
        .solve_seeded(strategy, seed_route.as_deref(), seed)
        .map_err(|e| to_js_error(format!("{e:#}")))?;
    serde_wasm_bindgen::to_value(&result).map_err(to_js_error)
}

/// Closed-tour length of `route` over `cities`.
#[wasm_bindgen]
pub fn tour_length(cities: JsValue, route: Vec<usize>) -> Result<f64, JsValue> {
    let cities: Vec<City> = serde_wasm_bindgen::from_value(cities).map_err(to_js_error)?;
    Ok(crate::distance::tour_length(&cities, &route))
}
