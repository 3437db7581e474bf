//! Fixed-step ray march from a camera pose into the block grid.
//!
//! This is a plain march, not a voxel traversal: a sample lands every
//! `step_size` units, so a step that is coarse relative to the unit cell can
//! skip a corner or a whole block. Keep `step_size` well below 1.0.

use blockworld_common::{Axis, BlockCoord, CameraPose, FaceCrossing, orientation};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::world::BlockQuery;

/// Absorbs float error in `max_distance / step_size` (10.0 / 0.1 is not exactly 100 in f32).
const STEP_COUNT_EPSILON: f32 = 1e-4;

/// Upper bound on samples per cast. `validate` rejects configs that would exceed it.
pub const MAX_STEPS: u32 = 1_000_000;

/// Reach and resolution of a raycast.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RaycastConfig {
    /// Furthest distance sampled, in world units.
    pub max_distance: f32,
    /// Distance between consecutive samples.
    pub step_size: f32,
}

impl Default for RaycastConfig {
    fn default() -> Self {
        Self {
            max_distance: 10.0,
            step_size: 0.1,
        }
    }
}

impl RaycastConfig {
    /// Panics on a non-positive step or negative reach; use [`RaycastConfig::validate`]
    /// for values that come from outside the program.
    pub fn new(max_distance: f32, step_size: f32) -> Self {
        let config = Self {
            max_distance,
            step_size,
        };
        if let Err(e) = config.validate() {
            panic!("invalid raycast config: {e}");
        }
        config
    }

    /// Same step size, different reach.
    pub fn with_max_distance(self, max_distance: f32) -> Self {
        Self::new(max_distance, self.step_size)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.step_size.is_finite() && self.step_size > 0.0) {
            return Err(ConfigError::InvalidStepSize(self.step_size));
        }
        if !(self.max_distance.is_finite() && self.max_distance >= 0.0) {
            return Err(ConfigError::InvalidMaxDistance(self.max_distance));
        }
        let steps = self.max_distance / self.step_size;
        if steps > MAX_STEPS as f32 {
            return Err(ConfigError::TooManySteps {
                steps,
                max: MAX_STEPS,
            });
        }
        Ok(())
    }

    /// Number of samples taken: `floor(max_distance / step_size)`, never more than [`MAX_STEPS`].
    pub fn step_count(&self) -> u32 {
        let steps = (self.max_distance / self.step_size + STEP_COUNT_EPSILON).floor() as u32;
        steps.min(MAX_STEPS)
    }
}

/// The first solid block along a ray.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RayHit {
    pub block: BlockCoord,
    /// Boundaries crossed on the step that entered `block`, in x, y, z order.
    /// Empty when the ray starts inside an occupied cell.
    pub crossings: Vec<FaceCrossing>,
    /// Distance along the ray of the sample that landed in `block`.
    pub distance: f32,
}

impl RayHit {
    /// The crossing used for face resolution. Corner clips resolve by axis priority x > y > z.
    pub fn primary(&self) -> Option<FaceCrossing> {
        self.crossings.first().copied()
    }
}

/// March from `origin` along the yaw/pitch direction and report the first occupied cell.
pub fn cast<W>(
    origin: Vec3,
    yaw: f32,
    pitch: f32,
    world: &W,
    config: &RaycastConfig,
) -> Option<RayHit>
where
    W: BlockQuery + ?Sized,
{
    let dir = orientation::direction(yaw, pitch);
    if !(origin.is_finite() && dir.is_finite()) {
        tracing::warn!(?origin, yaw, pitch, "ray with non-finite origin or direction");
        return None;
    }
    let mut prev = BlockCoord::containing(origin);

    for i in 1..=config.step_count() {
        let distance = config.step_size * i as f32;
        let cell = BlockCoord::containing(origin + dir * distance);
        if world.contains(cell) {
            let crossings = crossings_between(prev, cell);
            tracing::debug!(block = %cell, ?crossings, distance, "ray hit");
            return Some(RayHit {
                block: cell,
                crossings,
                distance,
            });
        }
        prev = cell;
    }

    tracing::trace!(?origin, yaw, pitch, "ray missed");
    None
}

/// [`cast`] from a camera pose.
pub fn cast_from<W>(pose: &CameraPose, world: &W, config: &RaycastConfig) -> Option<RayHit>
where
    W: BlockQuery + ?Sized,
{
    cast(pose.position, pose.yaw, pose.pitch, world, config)
}

fn crossings_between(prev: BlockCoord, cell: BlockCoord) -> Vec<FaceCrossing> {
    Axis::ALL
        .into_iter()
        .filter(|&axis| cell.get(axis) != prev.get(axis))
        .map(|axis| {
            let sign = if cell.get(axis) > prev.get(axis) { 1 } else { -1 };
            FaceCrossing::new(axis, sign)
        })
        .collect()
}
