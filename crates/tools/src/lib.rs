//! Developer Tooling: read-only world inspection.
//!
//! # Invariants
//! - Tools never mutate the grid.

mod inspector;

pub use inspector::{BlockInfo, Bounds, WorldInspector, WorldSummary};
