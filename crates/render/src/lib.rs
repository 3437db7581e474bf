//! Rendering Adapter: the first-person camera and a renderer-agnostic interface.
//!
//! # Invariants
//! - Renderer cannot mutate world truth directly.
//! - Render state derives from the world grid and the camera.
//! - Camera pitch never leaves `[-89, 89]` degrees.

mod camera;
mod renderer;

pub use camera::{Camera, CameraConfig};
pub use renderer::{DebugTextRenderer, RenderView, Renderer};
