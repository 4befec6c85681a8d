//! Item specifications.

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Placement class of an item.
///
/// Resolved once when the input document is parsed; the solver never
/// re-derives it from the item name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ItemKind {
    /// An ordinary rectangular item.
    #[default]
    Standard,
    /// A refrigerator: scheduled first and carries a door-swing clearance
    /// zone in front of its length edge.
    Refrigerator,
}

impl ItemKind {
    /// Resolves the kind from an item name. Names containing `"fridge"`
    /// are refrigerator-class.
    pub fn from_name(name: &str) -> Self {
        if name.contains("fridge") {
            Self::Refrigerator
        } else {
            Self::Standard
        }
    }
}

/// A named rectangular item to place.
///
/// Dimensions are normalized on construction: the larger input becomes
/// `length`, the smaller becomes `width`, regardless of input order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ItemSpec {
    name: String,
    length: f64,
    width: f64,
    kind: ItemKind,
}

impl ItemSpec {
    /// Creates an item spec. Rejects non-positive or non-finite dimensions.
    pub fn new(name: impl Into<String>, dim1: f64, dim2: f64) -> Result<Self> {
        let name = name.into();
        if !(dim1.is_finite() && dim2.is_finite() && dim1 > 0.0 && dim2 > 0.0) {
            return Err(Error::InvalidItem(format!(
                "'{}' must have two positive dimensions, got [{}, {}]",
                name, dim1, dim2
            )));
        }
        Ok(Self {
            name,
            length: dim1.max(dim2),
            width: dim1.min(dim2),
            kind: ItemKind::Standard,
        })
    }

    /// Sets the placement class.
    pub fn with_kind(mut self, kind: ItemKind) -> Self {
        self.kind = kind;
        self
    }

    /// Returns the item name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the longer dimension.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Returns the shorter dimension.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the placement class.
    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    /// Returns the item footprint area.
    pub fn area(&self) -> f64 {
        self.length * self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_dimensions_are_normalized() {
        let item = ItemSpec::new("shelf1", 40.0, 200.0).unwrap();
        assert_relative_eq!(item.length(), 200.0);
        assert_relative_eq!(item.width(), 40.0);
        assert_relative_eq!(item.area(), 8000.0);
    }

    #[test]
    fn test_kind_from_name() {
        assert_eq!(ItemKind::from_name("fridge1"), ItemKind::Refrigerator);
        assert_eq!(ItemKind::from_name("big_fridge"), ItemKind::Refrigerator);
        assert_eq!(ItemKind::from_name("shelf1"), ItemKind::Standard);
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        assert!(ItemSpec::new("bad", 0.0, 10.0).is_err());
        assert!(ItemSpec::new("bad", -5.0, 10.0).is_err());
        assert!(ItemSpec::new("bad", f64::NAN, 10.0).is_err());
    }
}
