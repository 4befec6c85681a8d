//! Polygon algebra for the placement engine.
//!
//! Thin wrappers over the `geo` crate. Every polygon operation the engine
//! needs (construction, posing, intersection area, coverage, containment,
//! buffering) goes through this module; the solver and predicates never
//! touch polygon arithmetic directly.

use geo::{
    Area, BooleanOps, Contains, Coord, Intersects, LineString, Point, Polygon, Rect, Relate,
    Rotate, Translate,
};
use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Vertex count used to approximate each semicircular buffer cap.
const CAP_SEGMENTS: usize = 8;

/// Builds an axis-aligned rectangle centered on the origin.
pub fn rect_centered(length: f64, width: f64) -> Polygon<f64> {
    Rect::new(
        Coord {
            x: -length / 2.0,
            y: -width / 2.0,
        },
        Coord {
            x: length / 2.0,
            y: width / 2.0,
        },
    )
    .to_polygon()
}

/// Builds a rectangle in the item's local frame, rotates it about the
/// origin, then translates it to `center`.
pub fn posed_box(min: Coord<f64>, max: Coord<f64>, center: Coord<f64>, rotation_deg: f64) -> Polygon<f64> {
    Rect::new(min, max)
        .to_polygon()
        .rotate_around_point(rotation_deg, Point::new(0.0, 0.0))
        .translate(center.x, center.y)
}

/// Builds an item body rectangle at the given pose.
pub fn item_polygon(center: Coord<f64>, length: f64, width: f64, rotation_deg: f64) -> Polygon<f64> {
    rect_centered(length, width)
        .rotate_around_point(rotation_deg, Point::new(0.0, 0.0))
        .translate(center.x, center.y)
}

/// Builds an axis-aligned square centered on `center`.
pub fn square(center: Coord<f64>, half_side: f64) -> Polygon<f64> {
    Rect::new(
        Coord {
            x: center.x - half_side,
            y: center.y - half_side,
        },
        Coord {
            x: center.x + half_side,
            y: center.y + half_side,
        },
    )
    .to_polygon()
}

/// Approximates a circle with `n` vertices (minimum 8).
pub fn circle(center: Coord<f64>, radius: f64, n: usize) -> Polygon<f64> {
    let n = n.max(8);
    let step = TAU / n as f64;
    let vertices: Vec<Coord<f64>> = (0..n)
        .map(|i| {
            let angle = i as f64 * step;
            Coord {
                x: center.x + radius * angle.cos(),
                y: center.y + radius * angle.sin(),
            }
        })
        .collect();
    Polygon::new(LineString::from(vertices), vec![])
}

/// Buffers a segment by `radius`, capping both ends with polygonal arcs.
///
/// Degenerate (zero-length) segments buffer to a circle around `a`.
pub fn segment_buffer(a: Coord<f64>, b: Coord<f64>, radius: f64) -> Polygon<f64> {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len = dx.hypot(dy);
    if len < f64::EPSILON {
        return circle(a, radius, 4 * CAP_SEGMENTS);
    }

    let heading = dy.atan2(dx);
    let mut vertices = Vec::with_capacity(2 * (CAP_SEGMENTS + 1));
    for i in 0..=CAP_SEGMENTS {
        let angle = heading - FRAC_PI_2 + PI * (i as f64 / CAP_SEGMENTS as f64);
        vertices.push(Coord {
            x: b.x + radius * angle.cos(),
            y: b.y + radius * angle.sin(),
        });
    }
    for i in 0..=CAP_SEGMENTS {
        let angle = heading + FRAC_PI_2 + PI * (i as f64 / CAP_SEGMENTS as f64);
        vertices.push(Coord {
            x: a.x + radius * angle.cos(),
            y: a.y + radius * angle.sin(),
        });
    }
    Polygon::new(LineString::from(vertices), vec![])
}

/// Returns the unsigned area of a polygon.
pub fn area(polygon: &Polygon<f64>) -> f64 {
    polygon.unsigned_area()
}

/// Returns the area of the intersection of two polygons, zero when disjoint.
pub fn intersection_area(a: &Polygon<f64>, b: &Polygon<f64>) -> f64 {
    if !a.intersects(b) {
        return 0.0;
    }
    a.intersection(b).unsigned_area()
}

/// Returns true if `outer` covers `inner` (boundary contact allowed).
pub fn covers(outer: &Polygon<f64>, inner: &Polygon<f64>) -> bool {
    outer.relate(inner).is_covers()
}

/// Returns true if the polygon contains the point.
pub fn contains_point(polygon: &Polygon<f64>, point: Coord<f64>) -> bool {
    polygon.contains(&Point::from(point))
}
