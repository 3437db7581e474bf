use blockworld_common::{BlockCoord, BlockFaces, CameraPose};
use blockworld_kernel::{ConfigError, RaycastConfig, WorldGrid, raycast};

/// An editing command that can be applied to the grid and reversed.
///
/// Each command carries enough context to undo itself.
#[derive(Debug, Clone, PartialEq)]
pub enum EditCommand {
    /// Write a block. `replaced` is the block it overwrote, if any.
    Place {
        coord: BlockCoord,
        faces: BlockFaces,
        replaced: Option<BlockFaces>,
    },
    /// Delete a block. Undo = put it back.
    Remove { coord: BlockCoord, faces: BlockFaces },
}

impl EditCommand {
    /// Produce the inverse command (for undo).
    pub fn inverse(&self) -> Self {
        match *self {
            Self::Place {
                coord,
                faces,
                replaced: None,
            } => Self::Remove { coord, faces },
            Self::Place {
                coord,
                faces,
                replaced: Some(old),
            } => Self::Place {
                coord,
                faces: old,
                replaced: Some(faces),
            },
            Self::Remove { coord, faces } => Self::Place {
                coord,
                faces,
                replaced: None,
            },
        }
    }

    pub fn coord(&self) -> BlockCoord {
        match self {
            Self::Place { coord, .. } | Self::Remove { coord, .. } => *coord,
        }
    }
}

/// Errors from edit operations addressed by coordinate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EditError {
    #[error("no block at {0}")]
    EmptyCell(BlockCoord),
}

/// Editor with undo/redo support.
///
/// Crosshair edits cast a ray from a camera pose. Every successful edit is
/// pushed to the undo stack and clears the redo stack.
pub struct Editor {
    /// Reach and resolution of the crosshair ray. Always validated.
    raycast: RaycastConfig,
    /// Faces given to every placed block.
    pub default_faces: BlockFaces,
    undo_stack: Vec<EditCommand>,
    redo_stack: Vec<EditCommand>,
}

impl Editor {
    /// Create an editor with the default reach and grass faces.
    pub fn new() -> Self {
        Self {
            raycast: RaycastConfig::default(),
            default_faces: BlockFaces::default(),
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    pub fn with_config(
        raycast: RaycastConfig,
        default_faces: BlockFaces,
    ) -> Result<Self, ConfigError> {
        let mut editor = Self {
            default_faces,
            ..Self::new()
        };
        editor.set_raycast(raycast)?;
        Ok(editor)
    }

    pub fn raycast(&self) -> &RaycastConfig {
        &self.raycast
    }

    /// Swap the crosshair ray settings. An invalid config leaves the current one in place.
    pub fn set_raycast(&mut self, raycast: RaycastConfig) -> Result<(), ConfigError> {
        raycast.validate()?;
        self.raycast = raycast;
        Ok(())
    }

    /// Place a block against the face the crosshair hits.
    ///
    /// The new block goes one cell back along the primary crossing, i.e. just
    /// outside the struck face. An occupied target is overwritten and the old
    /// block is kept for undo. Returns the placed coordinate, or `None` on a
    /// miss or when the hit has no crossing (ray started inside a block).
    pub fn place_block(
        &mut self,
        world: &mut WorldGrid,
        pose: &CameraPose,
    ) -> Option<BlockCoord> {
        let hit = raycast::cast_from(pose, &*world, &self.raycast)?;
        let face = hit.primary()?;
        let target = face.adjacent(hit.block);
        self.place_at(world, target);
        tracing::debug!(hit = %hit.block, %face, placed = %target, "placed block");
        Some(target)
    }

    /// Remove the block the crosshair hits. Returns its coordinate, or `None` on a miss.
    pub fn remove_block(
        &mut self,
        world: &mut WorldGrid,
        pose: &CameraPose,
    ) -> Option<BlockCoord> {
        let hit = raycast::cast_from(pose, &*world, &self.raycast)?;
        // A miss between cast and delete is a no-op.
        self.remove_at(world, hit.block).ok()?;
        tracing::debug!(removed = %hit.block, "removed block");
        Some(hit.block)
    }

    /// Write a default block at `coord`. Returns the faces it overwrote.
    pub fn place_at(&mut self, world: &mut WorldGrid, coord: BlockCoord) -> Option<BlockFaces> {
        let faces = self.default_faces;
        let replaced = world.insert(coord, faces);
        self.push(EditCommand::Place {
            coord,
            faces,
            replaced,
        });
        replaced
    }

    /// Delete the block at `coord`.
    pub fn remove_at(
        &mut self,
        world: &mut WorldGrid,
        coord: BlockCoord,
    ) -> Result<BlockFaces, EditError> {
        let faces = world.remove(coord).ok_or(EditError::EmptyCell(coord))?;
        self.push(EditCommand::Remove { coord, faces });
        Ok(faces)
    }

    /// Undo the last edit. Returns true if an operation was undone.
    pub fn undo(&mut self, world: &mut WorldGrid) -> bool {
        let Some(cmd) = self.undo_stack.pop() else {
            return false;
        };
        apply_command(world, &cmd.inverse());
        tracing::debug!(coord = %cmd.coord(), "undo");
        self.redo_stack.push(cmd);
        true
    }

    /// Redo the last undone edit. Returns true if an operation was redone.
    pub fn redo(&mut self, world: &mut WorldGrid) -> bool {
        let Some(cmd) = self.redo_stack.pop() else {
            return false;
        };
        apply_command(world, &cmd);
        tracing::debug!(coord = %cmd.coord(), "redo");
        self.undo_stack.push(cmd);
        true
    }

    /// Number of operations on the undo stack.
    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of operations on the redo stack.
    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    fn push(&mut self, cmd: EditCommand) {
        self.undo_stack.push(cmd);
        self.redo_stack.clear();
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_command(world: &mut WorldGrid, cmd: &EditCommand) {
    match cmd {
        EditCommand::Place { coord, faces, .. } => {
            world.insert(*coord, *faces);
        }
        EditCommand::Remove { coord, .. } => {
            world.remove(*coord);
        }
    }
}
