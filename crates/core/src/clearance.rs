//! Clearance-zone construction: door avoidance and refrigerator door swing.

use crate::geom;
use crate::item::ItemKind;
use crate::room::{Door, Room};
use geo::{Coord, Polygon};

/// Fraction of the door width buffered around an outward-opening door line.
pub const OUTWARD_BUFFER_RATIO: f64 = 0.05;

/// Upper bound on the outward-door buffer radius, in length units.
pub const OUTWARD_BUFFER_CAP: f64 = 50.0;

/// Builds the zone excluded from all item placement around the door.
///
/// An inward-opening door sweeps a square as wide as the door, so the zone
/// is an axis-independent square of side = door width, centered half a
/// width into the room from the door midpoint. If the room does not cover
/// that square, the opposite perpendicular offset is tried; if neither side
/// fits, the zone degrades to a buffer of radius = half the door width
/// around the door segment.
///
/// An outward-opening door only needs a thin strip so items cannot block
/// the door line: a buffer of radius `min(5% of width, 50)`.
pub fn door_zone(door: &Door, room: &Room) -> Polygon<f64> {
    let (a, b) = door.endpoints();
    let width = door.width();

    if !door.opens_inward() {
        return geom::segment_buffer(a, b, (width * OUTWARD_BUFFER_RATIO).min(OUTWARD_BUFFER_CAP));
    }

    let mid = door.midpoint();
    let (ux, uy) = ((b.x - a.x) / width, (b.y - a.y) / width);
    let (px, py) = (-uy, ux);
    let half = width / 2.0;
    for sign in [1.0, -1.0] {
        let center = Coord {
            x: mid.x + px * half * sign,
            y: mid.y + py * half * sign,
        };
        let zone = geom::square(center, half);
        if geom::covers(room.polygon(), &zone) {
            return zone;
        }
    }

    // Neither perpendicular square fits the room; hug the door line instead.
    log::warn!("inward door square does not fit the room, falling back to a line buffer");
    geom::segment_buffer(a, b, half)
}

/// Builds the extra exclusion zone an item reserves for itself, if any.
///
/// Ordinary items reserve nothing. A refrigerator's double doors swing over
/// a rectangle as wide as the unit (its length edge) and as deep as half
/// its length, flush with the length edge in the item's local frame, posed
/// with the item.
pub fn item_clearance(
    kind: ItemKind,
    center: Coord<f64>,
    length: f64,
    width: f64,
    rotation_deg: f64,
) -> Option<Polygon<f64>> {
    match kind {
        ItemKind::Standard => None,
        ItemKind::Refrigerator => Some(geom::posed_box(
            Coord {
                x: -length / 2.0,
                y: width / 2.0,
            },
            Coord {
                x: length / 2.0,
                y: width / 2.0 + length / 2.0,
            },
            center,
            rotation_deg,
        )),
    }
}
