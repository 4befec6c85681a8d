//! Solve result representation.

use crate::placement::Pose;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Failure reason recorded when the search exhausts every candidate pose.
pub const NO_VALID_POSITION: &str = "no valid position found";

/// Outcome of placing a single item.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PlacementOutcome {
    /// The item was committed at the given pose.
    Placed {
        /// Center x coordinate.
        x: f64,
        /// Center y coordinate.
        y: f64,
        /// Rotation in degrees, in [0, 360).
        rotation: f64,
    },
    /// No candidate pose passed the validity predicate.
    Failed {
        /// Human-readable failure reason.
        reason: String,
    },
}

/// Per-item result entry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResultEntry {
    name: String,
    outcome: PlacementOutcome,
}

impl ResultEntry {
    /// Creates an entry for a successfully placed item.
    pub fn placed(name: impl Into<String>, pose: Pose) -> Self {
        Self {
            name: name.into(),
            outcome: PlacementOutcome::Placed {
                x: pose.x,
                y: pose.y,
                rotation: pose.rotation,
            },
        }
    }

    /// Creates an entry for an item the search could not place.
    pub fn failed(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            outcome: PlacementOutcome::Failed {
                reason: reason.into(),
            },
        }
    }

    /// Returns the item name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the placement outcome.
    pub fn outcome(&self) -> &PlacementOutcome {
        &self.outcome
    }

    /// Returns true if the item was placed.
    pub fn is_placed(&self) -> bool {
        matches!(self.outcome, PlacementOutcome::Placed { .. })
    }
}

/// Ordered per-item outcomes of one solve pass.
///
/// One entry per requested item, in processing order (refrigerators
/// first). Returned by value from `solve()`; feasibility is a property of
/// the result, not hidden solver state.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResultSet {
    entries: Vec<ResultEntry>,
}

impl ResultSet {
    /// Creates an empty result set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    pub fn push(&mut self, entry: ResultEntry) {
        self.entries.push(entry);
    }

    /// Returns all entries in processing order.
    pub fn entries(&self) -> &[ResultEntry] {
        &self.entries
    }

    /// Iterates over the entries.
    pub fn iter(&self) -> impl Iterator<Item = &ResultEntry> {
        self.entries.iter()
    }

    /// Looks up an entry by item name.
    pub fn get(&self, name: &str) -> Option<&ResultEntry> {
        self.entries.iter().find(|entry| entry.name() == name)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of placed items.
    pub fn placed_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_placed()).count()
    }

    /// Returns the number of items the search could not place.
    pub fn failed_count(&self) -> usize {
        self.len() - self.placed_count()
    }

    /// Returns true if every requested item was placed.
    pub fn is_feasible(&self) -> bool {
        self.entries.iter().all(ResultEntry::is_placed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set_is_feasible() {
        let results = ResultSet::new();
        assert!(results.is_feasible());
        assert!(results.is_empty());
    }

    #[test]
    fn test_counts_and_lookup() {
        let mut results = ResultSet::new();
        results.push(ResultEntry::placed("fridge1", Pose::new(35.0, 35.0, 0.0)));
        results.push(ResultEntry::failed("shelf1", NO_VALID_POSITION));

        assert_eq!(results.len(), 2);
        assert_eq!(results.placed_count(), 1);
        assert_eq!(results.failed_count(), 1);
        assert!(!results.is_feasible());

        assert!(results.get("fridge1").unwrap().is_placed());
        assert!(!results.get("shelf1").unwrap().is_placed());
        assert!(results.get("missing").is_none());
    }

    #[test]
    fn test_failed_entry_carries_reason() {
        let entry = ResultEntry::failed("shelf1", NO_VALID_POSITION);
        match entry.outcome() {
            PlacementOutcome::Failed { reason } => assert_eq!(reason, NO_VALID_POSITION),
            PlacementOutcome::Placed { .. } => panic!("expected a failed outcome"),
        }
    }
}
