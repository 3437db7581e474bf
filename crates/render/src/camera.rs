use blockworld_common::{CameraPose, orientation};
use blockworld_input::{HeldKeys, MoveKey};
use blockworld_kernel::ConfigError;
use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::renderer::RenderView;

/// Starting pose and handling of the camera.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: Vec3,
    /// Degrees.
    pub yaw: f32,
    /// Degrees, clamped on construction.
    pub pitch: f32,
    /// World units per second.
    pub speed: f32,
    /// Degrees per mouse count.
    pub sensitivity: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 10.0, 0.0),
            yaw: 0.0,
            pitch: 0.0,
            speed: 10.0,
            sensitivity: 0.15,
        }
    }
}

impl CameraConfig {
    /// Every field must be finite; out-of-range pitch is clamped later, not rejected.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("position", self.position.is_finite()),
            ("yaw", self.yaw.is_finite()),
            ("pitch", self.pitch.is_finite()),
            ("speed", self.speed.is_finite()),
            ("sensitivity", self.sensitivity.is_finite()),
        ];
        match fields.into_iter().find(|(_, ok)| !*ok) {
            Some((field, _)) => Err(ConfigError::NonFiniteCamera { field }),
            None => Ok(()),
        }
    }
}

/// Fly camera with position, yaw and pitch in degrees.
///
/// Movement is relative to the view: forward follows pitch, strafing stays
/// horizontal. Held keys add up without normalization, so a diagonal moves at
/// `speed * sqrt(2)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec3,
    yaw: f32,
    pitch: f32,
    pub speed: f32,
    pub sensitivity: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(&CameraConfig::default())
    }
}

impl Camera {
    pub fn new(config: &CameraConfig) -> Self {
        Self {
            position: config.position,
            yaw: config.yaw,
            pitch: orientation::clamp_pitch(config.pitch),
            speed: config.speed,
            sensitivity: config.sensitivity,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Ignored unless every component is finite.
    pub fn set_position(&mut self, position: Vec3) {
        if position.is_finite() {
            self.position = position;
        }
    }

    /// Point the camera. Pitch is clamped; yaw is kept as given. Non-finite angles are ignored.
    pub fn set_angles(&mut self, yaw: f32, pitch: f32) {
        if yaw.is_finite() && pitch.is_finite() {
            self.yaw = yaw;
            self.pitch = orientation::clamp_pitch(pitch);
        }
    }

    pub fn pose(&self) -> CameraPose {
        CameraPose::new(self.position, self.yaw, self.pitch)
    }

    pub fn direction(&self) -> Vec3 {
        orientation::direction(self.yaw, self.pitch)
    }

    /// Advance one frame from the keys held right now.
    pub fn update(&mut self, dt: f32, keys: &dyn HeldKeys) {
        let step = self.speed * dt;
        let forward = orientation::forward(self.yaw, self.pitch);
        let right = orientation::right(self.yaw);

        let mut delta = Vec3::ZERO;
        if keys.is_held(MoveKey::Forward) {
            delta += forward * step;
        }
        if keys.is_held(MoveKey::Back) {
            delta -= forward * step;
        }
        if keys.is_held(MoveKey::StrafeRight) {
            delta -= right * step;
        }
        if keys.is_held(MoveKey::StrafeLeft) {
            delta += right * step;
        }
        self.set_position(self.position + delta);
    }

    /// Accumulate a mouse delta, then clamp pitch. Moving the mouse right turns right.
    ///
    /// A delta that would leave yaw or pitch non-finite is dropped whole.
    pub fn apply_mouse_delta(&mut self, dx: f32, dy: f32) {
        let yaw = self.yaw - dx * self.sensitivity;
        let pitch = self.pitch + dy * self.sensitivity;
        self.set_angles(yaw, pitch);
    }

    /// One unit ahead of the eye along the view direction.
    pub fn look_target(&self) -> Vec3 {
        self.position + self.direction()
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.look_target(), Vec3::Y)
    }

    pub fn render_view(&self) -> RenderView {
        RenderView {
            eye: self.position,
            target: self.look_target(),
            ..RenderView::default()
        }
    }
}
