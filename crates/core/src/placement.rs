//! Pose and committed-placement types.

use crate::item::{ItemKind, ItemSpec};
use geo::{Coord, Polygon};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Normalizes an angle in degrees to the range [0, 360).
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle % 360.0;
    if wrapped < 0.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

/// A placement candidate: a center point and a rotation.
///
/// Rotation is stored in degrees, normalized to [0, 360). Wall-anchored
/// candidates derive from the wall angle plus 0 or 90 degrees, so
/// rectilinear rooms only ever produce 0, 90, 180 or 270.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pose {
    /// Center x coordinate.
    pub x: f64,
    /// Center y coordinate.
    pub y: f64,
    /// Rotation in degrees, in [0, 360).
    pub rotation: f64,
}

impl Pose {
    /// Creates a pose, normalizing the rotation to [0, 360).
    pub fn new(x: f64, y: f64, rotation: f64) -> Self {
        Self {
            x,
            y,
            rotation: normalize_degrees(rotation),
        }
    }

    /// Returns the center as a coordinate.
    pub fn center(&self) -> Coord<f64> {
        Coord { x: self.x, y: self.y }
    }
}

/// An item committed to a pose during a solve pass.
///
/// Created when the solver accepts a pose; never mutated afterwards. The
/// body polygon (and the clearance polygon for refrigerators) is what the
/// validity predicate checks subsequent candidates against.
#[derive(Debug, Clone)]
pub struct PlacedItem {
    name: String,
    kind: ItemKind,
    pose: Pose,
    body: Polygon<f64>,
    clearance: Option<Polygon<f64>>,
}

impl PlacedItem {
    /// Binds an item spec to an accepted pose.
    pub fn new(
        spec: &ItemSpec,
        pose: Pose,
        body: Polygon<f64>,
        clearance: Option<Polygon<f64>>,
    ) -> Self {
        Self {
            name: spec.name().to_string(),
            kind: spec.kind(),
            pose,
            body,
            clearance,
        }
    }

    /// Returns the item name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the placement class.
    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    /// Returns the committed pose.
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Returns the committed body polygon.
    pub fn body(&self) -> &Polygon<f64> {
        &self.body
    }

    /// Returns the clearance polygon, if the item carries one.
    pub fn clearance(&self) -> Option<&Polygon<f64>> {
        self.clearance.as_ref()
    }
}
