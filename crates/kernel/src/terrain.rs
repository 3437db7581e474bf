//! Initial terrain: one block per column over a finite rectangle, heights from a pluggable source.

use blockworld_common::{BlockCoord, BlockFaces};
use noise::{Fbm, MultiFractal, NoiseFn, Perlin};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::world::WorldGrid;

/// Column height lookup.
pub trait HeightSource {
    fn height(&self, x: i32, z: i32) -> i32;
}

/// Same height everywhere.
#[derive(Debug, Clone, Copy)]
pub struct FlatHeights(pub i32);

impl HeightSource for FlatHeights {
    fn height(&self, _x: i32, _z: i32) -> i32 {
        self.0
    }
}

/// Layout and shape of the generated terrain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Columns along X, starting at x = 0.
    pub size_x: u32,
    /// Columns along Z, starting at z = 0.
    pub size_z: u32,
    /// Horizontal divisor applied before sampling noise.
    pub scale: f64,
    /// Height swing around `base_height`.
    pub amplitude: f64,
    pub base_height: f64,
    pub octaves: usize,
    pub seed: u32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            size_x: 16,
            size_z: 16,
            scale: 10.0,
            amplitude: 3.0,
            base_height: 5.0,
            octaves: 3,
            seed: 0,
        }
    }
}

impl TerrainConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for size in [self.size_x, self.size_z] {
            if i32::try_from(size).is_err() {
                return Err(ConfigError::TerrainTooLarge(size));
            }
        }
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(ConfigError::InvalidTerrainScale(self.scale));
        }
        let max = Fbm::<Perlin>::MAX_OCTAVES;
        if self.octaves == 0 || self.octaves > max {
            return Err(ConfigError::InvalidOctaves {
                got: self.octaves,
                max,
            });
        }
        Ok(())
    }
}

/// Fractal Perlin heights: `floor(fbm(x / scale, z / scale) * amplitude + base_height)`.
pub struct NoiseHeights {
    fbm: Fbm<Perlin>,
    scale: f64,
    amplitude: f64,
    base_height: f64,
}

impl NoiseHeights {
    pub fn new(config: &TerrainConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            fbm: Fbm::<Perlin>::new(config.seed).set_octaves(config.octaves),
            scale: config.scale,
            amplitude: config.amplitude,
            base_height: config.base_height,
        })
    }
}

impl HeightSource for NoiseHeights {
    fn height(&self, x: i32, z: i32) -> i32 {
        let n = self
            .fbm
            .get([x as f64 / self.scale, z as f64 / self.scale]);
        (n * self.amplitude + self.base_height).floor() as i32
    }
}

/// Fill the `size_x` by `size_z` rectangle with one block per column. Returns blocks written.
pub fn generate(
    world: &mut WorldGrid,
    source: &dyn HeightSource,
    config: &TerrainConfig,
    faces: BlockFaces,
) -> usize {
    let _span = tracing::info_span!("terrain_generate").entered();
    // Unvalidated sizes past i32::MAX saturate instead of wrapping.
    let size_x = i32::try_from(config.size_x).unwrap_or(i32::MAX);
    let size_z = i32::try_from(config.size_z).unwrap_or(i32::MAX);
    let mut written = 0;
    for x in 0..size_x {
        for z in 0..size_z {
            let y = source.height(x, z);
            world.insert(BlockCoord::new(x, y, z), faces);
            written += 1;
        }
    }
    tracing::info!(
        columns = written,
        size_x = config.size_x,
        size_z = config.size_z,
        "terrain generated"
    );
    written
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_terrain_fills_every_column() {
        let mut w = WorldGrid::new();
        let n = generate(
            &mut w,
            &FlatHeights(4),
            &TerrainConfig::default(),
            BlockFaces::default(),
        );
        assert_eq!(n, 256);
        assert_eq!(w.len(), 256);
        assert!(w.contains(BlockCoord::new(0, 4, 0)));
        assert!(w.contains(BlockCoord::new(15, 4, 15)));
        assert!(!w.contains(BlockCoord::new(16, 4, 0)));
        assert!(!w.contains(BlockCoord::new(0, 5, 0)));
    }

    #[test]
    fn noise_terrain_has_one_block_per_column() {
        let config = TerrainConfig::default();
        let heights = NoiseHeights::new(&config).unwrap();
        let mut w = WorldGrid::new();
        generate(&mut w, &heights, &config, BlockFaces::default());
        assert_eq!(w.len(), 256);

        for x in 0..16 {
            for z in 0..16 {
                let in_column = w
                    .iter()
                    .filter(|(c, _)| c.x == x && c.z == z)
                    .count();
                assert_eq!(in_column, 1, "column ({x}, {z})");
            }
        }
    }

    #[test]
    fn noise_heights_stay_near_base() {
        let config = TerrainConfig::default();
        let heights = NoiseHeights::new(&config).unwrap();
        for x in 0..16 {
            for z in 0..16 {
                let y = heights.height(x, z);
                assert!((0..=10).contains(&y), "height {y} at ({x}, {z})");
            }
        }
    }

    #[test]
    fn noise_heights_are_deterministic_per_seed() {
        let config = TerrainConfig {
            seed: 7,
            ..TerrainConfig::default()
        };
        let a = NoiseHeights::new(&config).unwrap();
        let b = NoiseHeights::new(&config).unwrap();
        for x in 0..16 {
            assert_eq!(a.height(x, 3), b.height(x, 3));
        }
    }

    #[test]
    fn invalid_terrain_config_is_rejected() {
        let zero_scale = TerrainConfig {
            scale: 0.0,
            ..TerrainConfig::default()
        };
        assert!(matches!(
            NoiseHeights::new(&zero_scale),
            Err(ConfigError::InvalidTerrainScale(_))
        ));

        let no_octaves = TerrainConfig {
            octaves: 0,
            ..TerrainConfig::default()
        };
        assert!(matches!(
            no_octaves.validate(),
            Err(ConfigError::InvalidOctaves { got: 0, .. })
        ));
    }

    #[test]
    fn oversized_terrain_is_rejected() {
        let wide = TerrainConfig {
            size_x: u32::MAX,
            ..TerrainConfig::default()
        };
        assert_eq!(wide.validate(), Err(ConfigError::TerrainTooLarge(u32::MAX)));

        let deep = TerrainConfig {
            size_z: i32::MAX as u32 + 1,
            ..TerrainConfig::default()
        };
        assert_eq!(
            deep.validate(),
            Err(ConfigError::TerrainTooLarge(i32::MAX as u32 + 1))
        );
        assert!(NoiseHeights::new(&deep).is_err());

        let largest = TerrainConfig {
            size_x: i32::MAX as u32,
            ..TerrainConfig::default()
        };
        assert_eq!(largest.validate(), Ok(()));
    }
}
