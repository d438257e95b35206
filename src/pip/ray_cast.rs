//! Even-odd ray casting test.

use geo_types::Coord;

use crate::models::{Point, Ring};

/// Test whether `point` lies inside `ring` using the even-odd rule.
///
/// A horizontal ray is cast from the point towards positive longitude and
/// every edge it crosses flips the verdict. Edges are walked cyclically, so
/// the closing edge from the last vertex back to the first is always tested.
///
/// Points exactly on an edge or vertex may land on either side depending on
/// floating point rounding. Rings with fewer than three vertices or that
/// self-intersect never panic, but their verdict is geometrically meaningless.
pub fn contains(point: Point, ring: &Ring) -> bool {
    contains_coords(point, ring.coords())
}

pub(crate) fn contains_coords(point: Point, vertices: &[Coord<f64>]) -> bool {
    let Point { lng: x, lat: y } = point;
    let n = vertices.len();
    if n == 0 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let Coord { x: xi, y: yi } = vertices[i];
        let Coord { x: xj, y: yj } = vertices[j];

        // yi == yj can never straddle, so the division below is safe
        if (yi > y) != (yj > y) {
            let x_cross = (xj - xi) * (y - yi) / (yj - yi) + xi;
            if x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }

    inside
}

/// Test whether `point` lies exactly on a vertex or edge of `ring`.
///
/// Exact floating point comparison: only points that are representably on
/// the boundary (shared vertices in particular) are reported.
pub fn on_boundary(point: Point, ring: &Ring) -> bool {
    let vertices = ring.coords();
    let n = vertices.len();
    if n == 0 {
        return false;
    }

    let p: Coord<f64> = point.into();
    let mut j = n - 1;
    for i in 0..n {
        if on_segment(p, vertices[j], vertices[i]) {
            return true;
        }
        j = i;
    }
    false
}

fn on_segment(p: Coord<f64>, a: Coord<f64>, b: Coord<f64>) -> bool {
    if p == a || p == b {
        return true;
    }
    let cross = (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);
    cross == 0.0
        && p.x >= a.x.min(b.x)
        && p.x <= a.x.max(b.x)
        && p.y >= a.y.min(b.y)
        && p.y <= a.y.max(b.y)
}
