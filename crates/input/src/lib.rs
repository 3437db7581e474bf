//! Input: movement keys held this frame, and the discrete actions a click or shortcut produces.
//!
//! # Invariants
//! - The camera reads held keys, never raw window events.
//! - Edit logic consumes [`Action`]s, so any front end drives the same world logic.

pub mod action;
pub mod keys;

pub use action::Action;
pub use keys::{HeldKeys, MoveKey, MovementKeys};
