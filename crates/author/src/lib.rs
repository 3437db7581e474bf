//! In-World Authoring: place and remove blocks under the crosshair, undo/redo.
//!
//! # Invariants
//! - All authoring ops are reversible.
//! - Every authoring op produces a world event record.
//! - A miss is a no-op, never an error.

mod editor;

pub use editor::{EditCommand, EditError, Editor};
