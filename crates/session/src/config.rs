use std::path::Path;

use blockworld_common::BlockFaces;
use blockworld_kernel::{RaycastConfig, TerrainConfig};
use blockworld_render::CameraConfig;
use serde::{Deserialize, Serialize};

use crate::error::SessionError;

/// Everything needed to start a session. Every field has a default, so a
/// YAML file only lists what it changes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub camera: CameraConfig,
    pub raycast: RaycastConfig,
    /// `None` starts from an empty grid.
    pub terrain: Option<TerrainConfig>,
    /// Faces given to blocks placed by the editor and by terrain seeding.
    pub default_faces: BlockFaces,
}

impl SessionConfig {
    /// Defaults plus the standard 16x16 noise terrain.
    pub fn with_default_terrain() -> Self {
        Self {
            terrain: Some(TerrainConfig::default()),
            ..Self::default()
        }
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, SessionError> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, SessionError> {
        let text = std::fs::read_to_string(path).map_err(|source| SessionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text)
    }

    pub fn validate(&self) -> Result<(), SessionError> {
        self.camera.validate()?;
        self.raycast.validate()?;
        if let Some(terrain) = &self.terrain {
            terrain.validate()?;
        }
        Ok(())
    }
}
