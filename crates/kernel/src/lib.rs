//! World Kernel: the authoritative block grid and the queries that run against it.
//!
//! # Invariants
//! - A coordinate is present if and only if a solid block occupies that cell.
//! - All grid mutations flow through explicit operations and are logged.
//! - Raycasting is bounded by its step budget and never mutates the grid.

mod error;
pub mod raycast;
pub mod terrain;
pub mod world;

pub use error::ConfigError;
pub use raycast::{RayHit, RaycastConfig};
pub use terrain::TerrainConfig;
pub use world::{BlockQuery, WorldEvent, WorldGrid};
