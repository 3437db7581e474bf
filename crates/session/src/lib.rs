//! Session: the single owning context for a world grid, a camera and an editor.
//!
//! # Invariants
//! - Exactly one world and one camera per session, passed explicitly, no globals.
//! - One `tick` per rendered frame; actions run synchronously between ticks.
//! - A renderer on another thread must take a snapshot or hold the session
//!   lock for the whole tick.

mod config;
mod error;
pub mod script;
mod session;

pub use config::SessionConfig;
pub use error::SessionError;
pub use script::ScriptStep;
pub use session::{ActionOutcome, Session};
