//! City type.

use serde::{Deserialize, Serialize};

/// A city on the plane.
///
/// Routes refer to cities by their position in the input sequence, never by
/// `id`. The identity token is carried only so that callers can round-trip
/// their own labels through serialization.
///
/// # Examples
///
/// ```
/// use u_tsp::models::City;
///
/// let a = City::new(0.0, 0.0);
/// let b = City::new(3.0, 4.0).with_id("b");
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// assert_eq!(b.id(), Some("b"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    x: f64,
    y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
}

impl City {
    /// Creates a city at the given coordinates with no identity token.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, id: None }
    }

    /// Attaches an opaque identity token.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Identity token, if any.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Returns `true` if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to another city.
    pub fn distance_to(&self, other: &City) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(f64, f64)> for City {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
