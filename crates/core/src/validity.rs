//! The geometric validity predicate.

use crate::geom;
use crate::placement::PlacedItem;
use crate::room::Room;
use geo::Polygon;
use log::trace;

/// Named tolerance constants for the validity predicate.
///
/// Centralized so boundary cases can be exercised precisely in tests
/// instead of scattering magic numbers through the checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    /// Minimum fraction of a polygon's area that must fall inside the room
    /// when exact coverage fails (tolerates boundary-touching geometry).
    pub containment_ratio: f64,
    /// Absolute intersection area with the door zone above which an item
    /// body is rejected.
    pub door_epsilon: f64,
    /// Maximum fraction of a candidate's own area that may intersect a
    /// committed body or clearance (tolerates grazing contact).
    pub collision_ratio: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            containment_ratio: 0.999,
            door_epsilon: 1e-6,
            collision_ratio: 0.01,
        }
    }
}

impl Tolerances {
    /// Sets the room-containment area ratio.
    pub fn with_containment_ratio(mut self, ratio: f64) -> Self {
        self.containment_ratio = ratio;
        self
    }

    /// Sets the absolute door-zone overlap epsilon.
    pub fn with_door_epsilon(mut self, epsilon: f64) -> Self {
        self.door_epsilon = epsilon;
        self
    }

    /// Sets the pairwise collision area ratio.
    pub fn with_collision_ratio(mut self, ratio: f64) -> Self {
        self.collision_ratio = ratio;
        self
    }
}

/// Accepts or rejects candidate poses against the room, the door zone and
/// the already-committed items.
///
/// Rejection is the expected outcome for most candidates the search
/// proposes; it is a plain `false`, never an error.
#[derive(Debug)]
pub struct ValidityChecker<'a> {
    room: &'a Room,
    door_zone: &'a Polygon<f64>,
    tolerances: Tolerances,
}

impl<'a> ValidityChecker<'a> {
    /// Creates a checker with default tolerances.
    pub fn new(room: &'a Room, door_zone: &'a Polygon<f64>) -> Self {
        Self {
            room,
            door_zone,
            tolerances: Tolerances::default(),
        }
    }

    /// Overrides the tolerance constants.
    pub fn with_tolerances(mut self, tolerances: Tolerances) -> Self {
        self.tolerances = tolerances;
        self
    }

    /// Returns the active tolerances.
    pub fn tolerances(&self) -> Tolerances {
        self.tolerances
    }

    /// Checks a candidate body (and its clearance, if any) against every
    /// placement constraint. All checks must pass:
    ///
    /// 1. the body is covered by the room (area-ratio fallback for
    ///    boundary-touching geometry),
    /// 2. the body does not overlap the door zone beyond `door_epsilon`,
    /// 3. the body does not meaningfully overlap any committed body or
    ///    committed clearance,
    /// 4. the clearance, when present, is covered by the room and clear of
    ///    the door zone and every committed body. Clearance zones of
    ///    different items may overlap each other.
    pub fn is_valid(
        &self,
        body: &Polygon<f64>,
        clearance: Option<&Polygon<f64>>,
        placed: &[PlacedItem],
    ) -> bool {
        if !self.covered_by_room(body) {
            trace!("candidate rejected: body leaves the room");
            return false;
        }
        if geom::intersection_area(body, self.door_zone) > self.tolerances.door_epsilon {
            trace!("candidate rejected: body overlaps the door zone");
            return false;
        }

        let body_area = geom::area(body);
        for item in placed {
            if self.collides(body, item.body(), body_area) {
                trace!("candidate rejected: body collides with '{}'", item.name());
                return false;
            }
            if let Some(zone) = item.clearance() {
                if self.collides(body, zone, body_area) {
                    trace!(
                        "candidate rejected: body enters clearance of '{}'",
                        item.name()
                    );
                    return false;
                }
            }
        }

        if let Some(zone) = clearance {
            if !self.covered_by_room(zone) {
                trace!("candidate rejected: clearance leaves the room");
                return false;
            }
            let zone_area = geom::area(zone);
            if self.collides(zone, self.door_zone, zone_area) {
                trace!("candidate rejected: clearance overlaps the door zone");
                return false;
            }
            for item in placed {
                if self.collides(zone, item.body(), zone_area) {
                    trace!(
                        "candidate rejected: clearance collides with '{}'",
                        item.name()
                    );
                    return false;
                }
            }
        }

        true
    }

    fn covered_by_room(&self, polygon: &Polygon<f64>) -> bool {
        if geom::covers(self.room.polygon(), polygon) {
            return true;
        }
        let inside = geom::intersection_area(self.room.polygon(), polygon);
        inside >= geom::area(polygon) * self.tolerances.containment_ratio
    }

    fn collides(&self, candidate: &Polygon<f64>, other: &Polygon<f64>, candidate_area: f64) -> bool {
        geom::intersection_area(candidate, other)
            > candidate_area * self.tolerances.collision_ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clearance;
    use crate::item::{ItemKind, ItemSpec};
    use crate::placement::{PlacedItem, Pose};
    use geo::Coord;

    fn rect_room() -> Room {
        Room::new(vec![(0.0, 0.0), (400.0, 0.0), (400.0, 300.0), (0.0, 300.0)]).unwrap()
    }

    fn far_door_zone(room: &Room) -> Polygon<f64> {
        let door = crate::room::Door::new((400.0, 105.0), (400.0, 195.0), true).unwrap();
        clearance::door_zone(&door, room)
    }

    fn commit(name: &str, kind: ItemKind, x: f64, y: f64, length: f64, width: f64) -> PlacedItem {
        let spec = ItemSpec::new(name, length, width).unwrap().with_kind(kind);
        let center = Coord { x, y };
        let body = geom::item_polygon(center, length, width, 0.0);
        let zone = clearance::item_clearance(kind, center, length, width, 0.0);
        PlacedItem::new(&spec, Pose::new(x, y, 0.0), body, zone)
    }

    #[test]
    fn test_flush_wall_placement_is_accepted() {
        let room = rect_room();
        let zone = far_door_zone(&room);
        let checker = ValidityChecker::new(&room, &zone);

        // One edge lies exactly on the room boundary.
        let body = geom::item_polygon(Coord { x: 100.0, y: 20.0 }, 200.0, 40.0, 0.0);
        assert!(checker.is_valid(&body, None, &[]));
    }

    #[test]
    fn test_body_outside_room_is_rejected() {
        let room = rect_room();
        let zone = far_door_zone(&room);
        let checker = ValidityChecker::new(&room, &zone);

        let body = geom::item_polygon(Coord { x: 390.0, y: 20.0 }, 200.0, 40.0, 0.0);
        assert!(!checker.is_valid(&body, None, &[]));
    }

    #[test]
    fn test_door_zone_overlap_is_rejected() {
        let room = rect_room();
        let zone = far_door_zone(&room);
        let checker = ValidityChecker::new(&room, &zone);

        // Door zone occupies x in [310, 400], y in [105, 195].
        let body = geom::item_polygon(Coord { x: 350.0, y: 150.0 }, 60.0, 40.0, 0.0);
        assert!(!checker.is_valid(&body, None, &[]));
    }

    #[test]
    fn test_grazing_contact_with_committed_item_is_accepted() {
        let room = rect_room();
        let zone = far_door_zone(&room);
        let checker = ValidityChecker::new(&room, &zone);

        let placed = vec![commit("a", ItemKind::Standard, 50.0, 20.0, 100.0, 40.0)];
        // Shares the x = 100 edge with the committed item.
        let body = geom::item_polygon(Coord { x: 150.0, y: 20.0 }, 100.0, 40.0, 0.0);
        assert!(checker.is_valid(&body, None, &placed));
    }

    #[test]
    fn test_meaningful_overlap_with_committed_item_is_rejected() {
        let room = rect_room();
        let zone = far_door_zone(&room);
        let checker = ValidityChecker::new(&room, &zone);

        let placed = vec![commit("a", ItemKind::Standard, 50.0, 20.0, 100.0, 40.0)];
        let body = geom::item_polygon(Coord { x: 90.0, y: 20.0 }, 100.0, 40.0, 0.0);
        assert!(!checker.is_valid(&body, None, &placed));
    }

    #[test]
    fn test_body_inside_committed_clearance_is_rejected() {
        let room = rect_room();
        let zone = far_door_zone(&room);
        let checker = ValidityChecker::new(&room, &zone);

        // Fridge at (35, 35) reserves x in [0, 70], y in [70, 105].
        let placed = vec![commit("fridge1", ItemKind::Refrigerator, 35.0, 35.0, 70.0, 70.0)];
        let body = geom::item_polygon(Coord { x: 35.0, y: 90.0 }, 40.0, 20.0, 0.0);
        assert!(!checker.is_valid(&body, None, &placed));
    }

    #[test]
    fn test_clearance_zones_may_overlap_each_other() {
        let room = rect_room();
        let zone = far_door_zone(&room);
        let checker = ValidityChecker::new(&room, &zone);

        let placed = vec![commit("fridge1", ItemKind::Refrigerator, 35.0, 35.0, 70.0, 70.0)];

        // A second fridge facing the first: the two swing zones coincide at
        // y in [70, 105] while both bodies stay clear of each other and of
        // the committed clearance.
        let center = Coord { x: 35.0, y: 140.0 };
        let body = geom::item_polygon(center, 70.0, 70.0, 180.0);
        let swing = clearance::item_clearance(ItemKind::Refrigerator, center, 70.0, 70.0, 180.0);
        assert!(checker.is_valid(&body, swing.as_ref(), &placed));
    }

    #[test]
    fn test_clearance_must_stay_inside_room() {
        let room = rect_room();
        let zone = far_door_zone(&room);
        let checker = ValidityChecker::new(&room, &zone);

        // Body fits but the swing zone would poke through the top wall.
        let center = Coord { x: 100.0, y: 260.0 };
        let body = geom::item_polygon(center, 70.0, 70.0, 0.0);
        let swing = clearance::item_clearance(ItemKind::Refrigerator, center, 70.0, 70.0, 0.0);
        assert!(!checker.is_valid(&body, swing.as_ref(), &[]));
    }

    #[test]
    fn test_tolerance_overrides_take_effect() {
        let room = rect_room();
        let zone = far_door_zone(&room);
        let tolerances = Tolerances::default().with_collision_ratio(0.5);
        let checker = ValidityChecker::new(&room, &zone).with_tolerances(tolerances);

        let placed = vec![commit("a", ItemKind::Standard, 50.0, 20.0, 100.0, 40.0)];
        // 40% overlap: rejected by default, allowed at ratio 0.5.
        let body = geom::item_polygon(Coord { x: 110.0, y: 20.0 }, 100.0, 40.0, 0.0);
        assert!(checker.is_valid(&body, None, &placed));
        let strict = ValidityChecker::new(&room, &zone);
        assert!(!strict.is_valid(&body, None, &placed));
    }
}
