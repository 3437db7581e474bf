//! Yaw/pitch (degrees) to direction vectors.
//!
//! Yaw is never normalized to a fixed range; only its sine and cosine are used.

use glam::Vec3;

/// Pitch is held inside `[-PITCH_LIMIT, PITCH_LIMIT]` to keep the view off the poles.
pub const PITCH_LIMIT: f32 = 89.0;

/// Unit view direction for the given angles.
///
/// `(cos p * sin y, sin p, cos p * cos y)`, so yaw 0 / pitch 0 looks down +Z.
pub fn direction(yaw: f32, pitch: f32) -> Vec3 {
    let (yaw, pitch) = (yaw.to_radians(), pitch.to_radians());
    Vec3::new(pitch.cos() * yaw.sin(), pitch.sin(), pitch.cos() * yaw.cos()).normalize()
}

/// Movement forward vector. Includes pitch, so walking forward while looking up climbs.
pub fn forward(yaw: f32, pitch: f32) -> Vec3 {
    direction(yaw, pitch).normalize()
}

/// Horizontal strafe axis, independent of pitch: `(cos y, 0, -sin y)`.
///
/// With yaw 0 this is +X, which is screen-left for a +Z view in a Y-up
/// right-handed frame.
pub fn right(yaw: f32) -> Vec3 {
    let yaw = yaw.to_radians();
    Vec3::new(yaw.cos(), 0.0, -yaw.sin())
}

pub fn clamp_pitch(pitch: f32) -> f32 {
    pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPS
    }

    #[test]
    fn direction_is_unit_length() {
        for yaw in [-720.0, -135.0, -1.0, 0.0, 33.3, 90.0, 180.0, 1000.0] {
            for pitch in [-89.0, -45.0, 0.0, 12.5, 89.0] {
                let d = direction(yaw, pitch);
                assert!((d.length() - 1.0).abs() < EPS, "yaw={yaw} pitch={pitch}");
            }
        }
    }

    #[test]
    fn cardinal_directions() {
        assert!(approx(direction(0.0, 0.0), Vec3::Z));
        assert!(approx(direction(90.0, 0.0), Vec3::X));
        assert!(approx(direction(180.0, 0.0), -Vec3::Z));
        assert!(approx(direction(0.0, 90.0), Vec3::Y));
    }

    #[test]
    fn yaw_wraps_through_trig() {
        assert!(approx(direction(30.0, 10.0), direction(390.0, 10.0)));
        assert!(approx(direction(-90.0, 0.0), direction(270.0, 0.0)));
    }

    #[test]
    fn right_is_horizontal_and_perpendicular() {
        for yaw in [0.0, 45.0, 123.0, -300.0] {
            for pitch in [-60.0, 0.0, 60.0] {
                let r = right(yaw);
                assert_eq!(r.y, 0.0);
                assert!((r.length() - 1.0).abs() < EPS);
                let f = forward(yaw, pitch);
                let flat = Vec3::new(f.x, 0.0, f.z);
                assert!(r.dot(flat).abs() < EPS);
            }
        }
    }

    #[test]
    fn clamp_pitch_bounds() {
        assert_eq!(clamp_pitch(200.0), 89.0);
        assert_eq!(clamp_pitch(-1e9), -89.0);
        assert_eq!(clamp_pitch(12.0), 12.0);
    }
}
