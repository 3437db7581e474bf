//! Shared types for the block world: coordinates, face tiles, crossings, camera pose,
//! and the orientation math every other crate builds on.

pub mod orientation;
mod types;

pub use types::{Axis, BlockCoord, BlockFaces, CameraPose, Face, FaceCrossing, TileIndex};
