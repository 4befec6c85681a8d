//! # Roomlay Core
//!
//! Greedy first-fit placement of rectangular appliances inside a
//! single-room polygon.
//!
//! Given a room boundary, a door and a list of named rectangular items,
//! the solver commits one pose per item (center + axis-aligned rotation)
//! such that no item leaves the room, overlaps another item, or enters the
//! door's clearance zone. Refrigerator-class items additionally reserve a
//! door-swing zone in front of their length edge and are scheduled before
//! everything else.
//!
//! ## Components
//!
//! - [`Room`] / [`Door`] — validated solve context
//! - [`ItemSpec`] / [`ItemKind`] — what to place
//! - [`clearance`] — door zone and refrigerator swing-zone construction
//! - [`ValidityChecker`] / [`Tolerances`] — the accept/reject predicate
//! - [`LayoutSolver`] / [`SolverConfig`] — wall-anchored search with a
//!   free-grid fallback
//! - [`ResultSet`] — per-item outcomes and feasibility
//!
//! ## Quick start
//!
//! ```rust
//! use roomlay_core::{Door, ItemKind, ItemSpec, LayoutSolver, Room};
//!
//! let room = Room::new(vec![(0.0, 0.0), (400.0, 0.0), (400.0, 300.0), (0.0, 300.0)])?;
//! let door = Door::new((400.0, 105.0), (400.0, 195.0), true)?;
//! let items = vec![
//!     ItemSpec::new("fridge1", 70.0, 70.0)?.with_kind(ItemKind::Refrigerator),
//!     ItemSpec::new("shelf1", 200.0, 40.0)?,
//! ];
//!
//! let results = LayoutSolver::new(room, door, items).solve();
//! assert!(results.is_feasible());
//! # Ok::<(), roomlay_core::Error>(())
//! ```
//!
//! Solving is a pure, single-threaded computation: `solve` takes `&self`,
//! repeated calls return identical results, and independent solvers may run
//! in parallel without synchronization.
//!
//! ## Feature Flags
//!
//! - `serde`: serialization support for poses, item specs and result sets

pub mod clearance;
pub mod error;
pub mod geom;
pub mod item;
pub mod placement;
pub mod result;
pub mod room;
pub mod solver;
pub mod validity;

// Re-exports
pub use error::{Error, Result};
pub use item::{ItemKind, ItemSpec};
pub use placement::{PlacedItem, Pose};
pub use result::{PlacementOutcome, ResultEntry, ResultSet, NO_VALID_POSITION};
pub use room::{Door, Room, Wall};
pub use solver::{LayoutSolver, SolverConfig, CARDINAL_ROTATIONS};
pub use validity::{Tolerances, ValidityChecker};
