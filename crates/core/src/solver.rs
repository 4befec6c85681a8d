//! The greedy first-fit placement solver.

use crate::clearance;
use crate::geom;
use crate::item::{ItemKind, ItemSpec};
use crate::placement::{normalize_degrees, PlacedItem, Pose};
use crate::result::{ResultEntry, ResultSet, NO_VALID_POSITION};
use crate::room::{Door, Room};
use crate::validity::{Tolerances, ValidityChecker};
use geo::{Coord, Polygon};
use log::{debug, info, warn};

/// Rotations tried by the free-grid fallback, in tie-break order.
pub const CARDINAL_ROTATIONS: [f64; 4] = [0.0, 90.0, 180.0, 270.0];

/// Search discretization and tolerance configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Validity predicate tolerances.
    pub tolerances: Tolerances,
    /// Minimum number of scan positions along a wall.
    pub min_wall_steps: usize,
    /// Along-wall slack per additional scan step, in length units.
    pub wall_step_length: f64,
    /// Free-grid spacing as a multiple of the item's longest dimension.
    pub grid_spacing_factor: f64,
    /// Extra inset added to the free-grid margin, in length units.
    pub grid_margin: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerances: Tolerances::default(),
            min_wall_steps: 50,
            wall_step_length: 20.0,
            grid_spacing_factor: 1.2,
            grid_margin: 10.0,
        }
    }
}

impl SolverConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the validity tolerances.
    pub fn with_tolerances(mut self, tolerances: Tolerances) -> Self {
        self.tolerances = tolerances;
        self
    }

    /// Sets the minimum number of along-wall scan positions.
    pub fn with_min_wall_steps(mut self, steps: usize) -> Self {
        self.min_wall_steps = steps.max(1);
        self
    }

    /// Sets the free-grid spacing factor.
    pub fn with_grid_spacing_factor(mut self, factor: f64) -> Self {
        self.grid_spacing_factor = factor;
        self
    }
}

/// A pose the search accepted, with the polygons it was validated with.
type AcceptedPose = (Pose, Polygon<f64>, Option<Polygon<f64>>);

/// Places a fixed set of rectangular items inside a room, one at a time.
///
/// Refrigerators are scheduled before everything else; remaining items keep
/// their input order. Each item first tries every wall (flush against it,
/// scanning from the wall start), then falls back to a free grid over the
/// room's bounding box. The first pose accepted by the
/// [`ValidityChecker`] is committed. An item the search cannot place is
/// recorded as failed and the solve continues.
///
/// `solve` takes `&self` and keeps the committed list local to the pass,
/// so repeated solves of the same solver are independent and identical.
#[derive(Debug)]
pub struct LayoutSolver {
    room: Room,
    door: Door,
    door_zone: Polygon<f64>,
    items: Vec<ItemSpec>,
    config: SolverConfig,
}

impl LayoutSolver {
    /// Creates a solver; the door zone is built once here.
    pub fn new(room: Room, door: Door, items: Vec<ItemSpec>) -> Self {
        let door_zone = clearance::door_zone(&door, &room);
        Self {
            room,
            door,
            door_zone,
            items,
            config: SolverConfig::default(),
        }
    }

    /// Overrides the solver configuration.
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the room.
    pub fn room(&self) -> &Room {
        &self.room
    }

    /// Returns the door.
    pub fn door(&self) -> &Door {
        &self.door
    }

    /// Returns the door exclusion zone.
    pub fn door_zone(&self) -> &Polygon<f64> {
        &self.door_zone
    }

    /// Places every item and returns one result entry per item.
    pub fn solve(&self) -> ResultSet {
        let checker =
            ValidityChecker::new(&self.room, &self.door_zone).with_tolerances(self.config.tolerances);

        let mut order: Vec<&ItemSpec> = self.items.iter().collect();
        order.sort_by_key(|item| item.kind() != ItemKind::Refrigerator);

        let mut committed: Vec<PlacedItem> = Vec::with_capacity(order.len());
        let mut results = ResultSet::new();

        for item in order {
            let accepted = self
                .place_along_walls(item, &checker, &committed)
                .or_else(|| self.place_on_grid(item, &checker, &committed));

            match accepted {
                Some((pose, body, zone)) => {
                    info!(
                        "placed '{}' at ({:.2}, {:.2}) rotation {}",
                        item.name(),
                        pose.x,
                        pose.y,
                        pose.rotation
                    );
                    results.push(ResultEntry::placed(item.name(), pose));
                    committed.push(PlacedItem::new(item, pose, body, zone));
                }
                None => {
                    warn!("no valid position found for '{}'", item.name());
                    results.push(ResultEntry::failed(item.name(), NO_VALID_POSITION));
                }
            }
        }

        results
    }

    /// Strategy A: slide the item flush along each wall.
    ///
    /// Walls are tried in boundary order; per wall, the item's long axis is
    /// tried parallel to the wall first, then perpendicular. The scan runs
    /// from the wall start, so the smallest along-wall offset that
    /// validates wins.
    fn place_along_walls(
        &self,
        item: &ItemSpec,
        checker: &ValidityChecker<'_>,
        committed: &[PlacedItem],
    ) -> Option<AcceptedPose> {
        for wall in self.room.walls() {
            let wall_length = wall.length();
            let Some((ux, uy)) = wall.direction() else {
                continue;
            };
            let Some((nx, ny)) = self.room.inward_normal(&wall) else {
                continue;
            };
            let wall_angle = wall.angle_deg();

            for angle_offset in [0.0, 90.0] {
                let rotation = normalize_degrees(wall_angle + angle_offset);

                // Project the origin-centered body onto the wall axes to get
                // its along-wall extent and the flush offset from the wall.
                let probe =
                    geom::item_polygon(Coord { x: 0.0, y: 0.0 }, item.length(), item.width(), rotation);
                let mut min_along = f64::INFINITY;
                let mut max_along = f64::NEG_INFINITY;
                let mut min_normal = f64::INFINITY;
                for coord in probe.exterior().coords() {
                    let along = coord.x * ux + coord.y * uy;
                    let normal = coord.x * nx + coord.y * ny;
                    min_along = min_along.min(along);
                    max_along = max_along.max(along);
                    min_normal = min_normal.min(normal);
                }
                let along_extent = max_along - min_along;
                if along_extent > wall_length {
                    debug!(
                        "'{}' does not fit wall of length {:.1} at rotation {}",
                        item.name(),
                        wall_length,
                        rotation
                    );
                    continue;
                }
                let flush_offset = -min_normal;
                let slack = wall_length - along_extent;
                let steps = ((slack / self.config.wall_step_length) as usize)
                    .max(self.config.min_wall_steps);

                for step in 0..=steps {
                    let along = slack * step as f64 / steps as f64;
                    let t = ((along + along_extent / 2.0) / wall_length).clamp(0.0, 1.0);
                    let center = Coord {
                        x: wall.start.x + t * (wall.end.x - wall.start.x) + nx * flush_offset,
                        y: wall.start.y + t * (wall.end.y - wall.start.y) + ny * flush_offset,
                    };
                    if let Some(accepted) = self.try_pose(item, center, rotation, checker, committed)
                    {
                        return Some(accepted);
                    }
                }
            }
        }
        None
    }

    /// Strategy B: regular grid over the room's bounding box.
    ///
    /// Iterates y, then x, then the four cardinal rotations, so rotation
    /// order is the primary tie-break at each grid point.
    fn place_on_grid(
        &self,
        item: &ItemSpec,
        checker: &ValidityChecker<'_>,
        committed: &[PlacedItem],
    ) -> Option<AcceptedPose> {
        let bounds = self.room.bounding_rect();
        let max_dim = item.length();
        let margin = max_dim / 2.0 + self.config.grid_margin;
        let spacing = self.config.grid_spacing_factor * max_dim;

        let xs = grid_axis(bounds.min().x, bounds.max().x, margin, spacing);
        let ys = grid_axis(bounds.min().y, bounds.max().y, margin, spacing);
        debug!(
            "free-grid fallback for '{}': {} x {} candidate centers",
            item.name(),
            xs.len(),
            ys.len()
        );

        for &y in &ys {
            for &x in &xs {
                let center = Coord { x, y };
                if !self.room.contains_point(center) {
                    continue;
                }
                for &rotation in &CARDINAL_ROTATIONS {
                    if let Some(accepted) = self.try_pose(item, center, rotation, checker, committed)
                    {
                        return Some(accepted);
                    }
                }
            }
        }
        None
    }

    /// Builds the body (and clearance) for one candidate pose and submits
    /// it to the validity predicate.
    fn try_pose(
        &self,
        item: &ItemSpec,
        center: Coord<f64>,
        rotation: f64,
        checker: &ValidityChecker<'_>,
        committed: &[PlacedItem],
    ) -> Option<AcceptedPose> {
        let body = geom::item_polygon(center, item.length(), item.width(), rotation);
        let zone = clearance::item_clearance(item.kind(), center, item.length(), item.width(), rotation);
        if checker.is_valid(&body, zone.as_ref(), committed) {
            Some((Pose::new(center.x, center.y, rotation), body, zone))
        } else {
            None
        }
    }
}

/// Candidate coordinates along one bounding-box axis: from `min + margin`
/// in `spacing` increments while short of `max - margin`, or the single
/// axis midpoint when the inset leaves no room.
fn grid_axis(min: f64, max: f64, margin: f64, spacing: f64) -> Vec<f64> {
    let mut coords = Vec::new();
    let mut value = min + margin;
    while value < max - margin {
        coords.push(value);
        value += spacing;
    }
    if coords.is_empty() {
        coords.push((min + max) / 2.0);
    }
    coords
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::result::PlacementOutcome;

    fn rect_room() -> Room {
        Room::new(vec![(0.0, 0.0), (400.0, 0.0), (400.0, 300.0), (0.0, 300.0)]).unwrap()
    }

    fn far_door() -> Door {
        Door::new((400.0, 105.0), (400.0, 195.0), true).unwrap()
    }

    #[test]
    fn test_grid_axis_spacing() {
        let coords = grid_axis(0.0, 400.0, 34.0, 57.6);
        assert!(!coords.is_empty());
        assert_relative_eq!(coords[0], 34.0);
        assert!(coords.last().unwrap() < &366.0);
        for pair in coords.windows(2) {
            assert_relative_eq!(pair[1] - pair[0], 57.6, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_grid_axis_falls_back_to_midpoint() {
        let coords = grid_axis(0.0, 400.0, 260.0, 600.0);
        assert_eq!(coords, vec![200.0]);
    }

    #[test]
    fn test_first_item_lands_flush_at_wall_start() {
        let solver = LayoutSolver::new(
            rect_room(),
            far_door(),
            vec![ItemSpec::new("shelf1", 200.0, 40.0).unwrap()],
        );
        let results = solver.solve();
        match results.get("shelf1").unwrap().outcome() {
            PlacementOutcome::Placed { x, y, rotation } => {
                // First wall, smallest offset, flush against y = 0.
                assert_relative_eq!(*x, 100.0, epsilon = 1e-9);
                assert_relative_eq!(*y, 20.0, epsilon = 1e-9);
                assert_relative_eq!(*rotation, 0.0);
            }
            PlacementOutcome::Failed { .. } => panic!("shelf1 should be placed"),
        }
    }

    #[test]
    fn test_fridge_is_scheduled_first() {
        // The fridge is listed last but still gets first pick of space.
        let solver = LayoutSolver::new(
            rect_room(),
            far_door(),
            vec![
                ItemSpec::new("shelf1", 200.0, 40.0).unwrap(),
                ItemSpec::new("fridge1", 70.0, 70.0)
                    .unwrap()
                    .with_kind(ItemKind::Refrigerator),
            ],
        );
        let results = solver.solve();
        assert!(results.is_feasible());
        assert_eq!(results.entries()[0].name(), "fridge1");
        match results.get("fridge1").unwrap().outcome() {
            PlacementOutcome::Placed { x, y, .. } => {
                assert_relative_eq!(*x, 35.0, epsilon = 1e-9);
                assert_relative_eq!(*y, 35.0, epsilon = 1e-9);
            }
            PlacementOutcome::Failed { .. } => panic!("fridge1 should be placed"),
        }
    }

    #[test]
    fn test_unplaceable_item_fails_without_aborting() {
        let solver = LayoutSolver::new(
            rect_room(),
            far_door(),
            vec![
                ItemSpec::new("huge", 500.0, 40.0).unwrap(),
                ItemSpec::new("shelf1", 100.0, 30.0).unwrap(),
            ],
        );
        let results = solver.solve();
        assert_eq!(results.len(), 2);
        assert!(!results.get("huge").unwrap().is_placed());
        assert!(results.get("shelf1").unwrap().is_placed());
        assert!(!results.is_feasible());
    }
}
