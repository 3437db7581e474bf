/// Rejected raycast, terrain or camera parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("step_size must be positive and finite, got {0}")]
    InvalidStepSize(f32),
    #[error("max_distance must be non-negative and finite, got {0}")]
    InvalidMaxDistance(f32),
    #[error("raycast would take {steps} steps, the limit is {max}")]
    TooManySteps { steps: f32, max: u32 },
    #[error("terrain scale must be positive and finite, got {0}")]
    InvalidTerrainScale(f64),
    #[error("terrain octaves must be in 1..={max}, got {got}")]
    InvalidOctaves { got: usize, max: usize },
    #[error("terrain size {0} does not fit a block coordinate")]
    TerrainTooLarge(u32),
    #[error("camera {field} must be finite")]
    NonFiniteCamera { field: &'static str },
}
