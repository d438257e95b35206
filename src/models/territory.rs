//! Territory geometry types.

use geo::BoundingRect;
use geo_types::{Coord, LineString, Rect};
use serde::{Deserialize, Serialize};

/// Geographic point in decimal degrees, stored as (longitude, latitude).
///
/// Values are used as-is: no range normalization or validation happens here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub lng: f64,
    pub lat: f64,
}

impl Point {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    pub fn is_finite(&self) -> bool {
        self.lng.is_finite() && self.lat.is_finite()
    }
}

impl From<Point> for Coord<f64> {
    fn from(p: Point) -> Self {
        Coord { x: p.lng, y: p.lat }
    }
}

impl From<Coord<f64>> for Point {
    fn from(c: Coord<f64>) -> Self {
        Self { lng: c.x, lat: c.y }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lng, self.lat)
    }
}

/// Polygon boundary ring.
///
/// Vertices are kept exactly as declared. The ring is treated as cyclic when
/// tested, so an explicit closing vertex is allowed but not required.
/// Serialized as `[[lng, lat], ...]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<[f64; 2]>", into = "Vec<[f64; 2]>")]
pub struct Ring {
    coords: Vec<Coord<f64>>,
}

impl Ring {
    pub fn new(coords: Vec<Coord<f64>>) -> Self {
        Self { coords }
    }

    pub fn coords(&self) -> &[Coord<f64>] {
        &self.coords
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// First and last vertex are identical
    pub fn is_closed(&self) -> bool {
        self.coords.len() > 1 && self.coords.first() == self.coords.last()
    }

    /// Get the bounding box of this ring
    pub fn bbox(&self) -> Option<Rect<f64>> {
        LineString::from(self.coords.clone()).bounding_rect()
    }
}

impl From<Vec<[f64; 2]>> for Ring {
    fn from(points: Vec<[f64; 2]>) -> Self {
        Self {
            coords: points.into_iter().map(|[x, y]| Coord { x, y }).collect(),
        }
    }
}

impl From<Ring> for Vec<[f64; 2]> {
    fn from(ring: Ring) -> Self {
        ring.coords.into_iter().map(|c| [c.x, c.y]).collect()
    }
}

/// A named service territory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Territory {
    /// Identifier returned to callers (e.g. "A")
    pub name: String,

    /// Human-readable description
    pub description: String,

    /// Boundary ring
    #[serde(rename = "polygon")]
    pub boundary: Ring,
}

impl Territory {
    pub fn new(name: impl Into<String>, description: impl Into<String>, boundary: Ring) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            boundary,
        }
    }
}
