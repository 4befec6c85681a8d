//! Room boundary and door types.

use crate::error::{Error, Result};
use crate::geom;
use geo::{BoundingRect, Coord, LineString, Polygon, Rect};

/// Relative probe distance used to validate a wall's inward normal.
const NORMAL_PROBE_RATIO: f64 = 1e-3;

/// One boundary segment of the room, in input order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wall {
    /// Segment start point.
    pub start: Coord<f64>,
    /// Segment end point.
    pub end: Coord<f64>,
}

impl Wall {
    /// Returns the wall length.
    pub fn length(&self) -> f64 {
        (self.end.x - self.start.x).hypot(self.end.y - self.start.y)
    }

    /// Returns the unit direction vector from start to end, or `None` for a
    /// degenerate segment.
    pub fn direction(&self) -> Option<(f64, f64)> {
        let len = self.length();
        if len < f64::EPSILON {
            return None;
        }
        Some(((self.end.x - self.start.x) / len, (self.end.y - self.start.y) / len))
    }

    /// Returns the wall midpoint.
    pub fn midpoint(&self) -> Coord<f64> {
        Coord {
            x: (self.start.x + self.end.x) / 2.0,
            y: (self.start.y + self.end.y) / 2.0,
        }
    }

    /// Returns the wall's direction angle in degrees.
    pub fn angle_deg(&self) -> f64 {
        (self.end.y - self.start.y)
            .atan2(self.end.x - self.start.x)
            .to_degrees()
    }
}

/// The room: a validated simple polygon that all items must stay inside.
///
/// Immutable for the lifetime of a solve. Walls are enumerated in the order
/// the boundary points were given, which also fixes the solver's wall scan
/// order.
#[derive(Debug, Clone)]
pub struct Room {
    vertices: Vec<Coord<f64>>,
    polygon: Polygon<f64>,
    bounds: Rect<f64>,
}

impl Room {
    /// Creates a room from an ordered boundary point list.
    ///
    /// A duplicated closing point is tolerated and removed. Rejects rings
    /// with fewer than three distinct vertices or zero area.
    pub fn new(points: Vec<(f64, f64)>) -> Result<Self> {
        let mut vertices: Vec<Coord<f64>> =
            points.into_iter().map(|(x, y)| Coord { x, y }).collect();
        if vertices.len() > 1 && vertices.first() == vertices.last() {
            vertices.pop();
        }
        if vertices.len() < 3 {
            return Err(Error::InvalidBoundary(
                "boundary must have at least 3 vertices".into(),
            ));
        }

        let polygon = Polygon::new(LineString::from(vertices.clone()), vec![]);
        if geom::area(&polygon) < f64::EPSILON {
            return Err(Error::InvalidBoundary("boundary has zero area".into()));
        }
        let bounds = polygon
            .bounding_rect()
            .ok_or_else(|| Error::InvalidBoundary("boundary has no extent".into()))?;

        Ok(Self {
            vertices,
            polygon,
            bounds,
        })
    }

    /// Returns the room polygon.
    pub fn polygon(&self) -> &Polygon<f64> {
        &self.polygon
    }

    /// Returns the boundary vertices (closing duplicate removed).
    pub fn vertices(&self) -> &[Coord<f64>] {
        &self.vertices
    }

    /// Returns the walls in input order, including the closing segment.
    pub fn walls(&self) -> Vec<Wall> {
        let n = self.vertices.len();
        (0..n)
            .map(|i| Wall {
                start: self.vertices[i],
                end: self.vertices[(i + 1) % n],
            })
            .collect()
    }

    /// Returns true if the point lies inside the room.
    pub fn contains_point(&self, point: Coord<f64>) -> bool {
        geom::contains_point(&self.polygon, point)
    }

    /// Returns the axis-aligned bounding rectangle of the room.
    pub fn bounding_rect(&self) -> Rect<f64> {
        self.bounds
    }

    /// Returns the unit normal of a wall pointing into the room interior.
    ///
    /// The candidate normal is validated by probing a point just inside the
    /// wall midpoint; if the probe lands outside, the normal is flipped.
    /// Returns `None` for a degenerate wall.
    pub fn inward_normal(&self, wall: &Wall) -> Option<(f64, f64)> {
        let (ux, uy) = wall.direction()?;
        let (nx, ny) = (-uy, ux);
        let mid = wall.midpoint();
        let probe = wall.length() * NORMAL_PROBE_RATIO;
        let inside = self.contains_point(Coord {
            x: mid.x + nx * probe,
            y: mid.y + ny * probe,
        });
        if inside {
            Some((nx, ny))
        } else {
            Some((-nx, -ny))
        }
    }
}

/// A door: a segment on (or very near) the room boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Door {
    a: Coord<f64>,
    b: Coord<f64>,
    opens_inward: bool,
}

impl Door {
    /// Creates a door from its two endpoints. Rejects zero-length doors.
    pub fn new(a: (f64, f64), b: (f64, f64), opens_inward: bool) -> Result<Self> {
        let a = Coord { x: a.0, y: a.1 };
        let b = Coord { x: b.0, y: b.1 };
        if (b.x - a.x).hypot(b.y - a.y) < f64::EPSILON {
            return Err(Error::InvalidDoor("door has zero width".into()));
        }
        Ok(Self { a, b, opens_inward })
    }

    /// Returns the door endpoints.
    pub fn endpoints(&self) -> (Coord<f64>, Coord<f64>) {
        (self.a, self.b)
    }

    /// Returns the door width (endpoint distance).
    pub fn width(&self) -> f64 {
        (self.b.x - self.a.x).hypot(self.b.y - self.a.y)
    }

    /// Returns the door midpoint.
    pub fn midpoint(&self) -> Coord<f64> {
        Coord {
            x: (self.a.x + self.b.x) / 2.0,
            y: (self.a.y + self.b.y) / 2.0,
        }
    }

    /// Returns true if the door swings into the room.
    pub fn opens_inward(&self) -> bool {
        self.opens_inward
    }
}
