use std::path::Path;

use blockworld_author::Editor;
use blockworld_common::BlockCoord;
use blockworld_input::{Action, HeldKeys};
use blockworld_kernel::{RayHit, WorldGrid, raycast, terrain};
use blockworld_render::{Camera, RenderView};

use crate::config::SessionConfig;
use crate::error::SessionError;

/// What an [`Action`] did to the session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActionOutcome {
    Placed(BlockCoord),
    Removed(BlockCoord),
    Undone,
    Redone,
    Looked,
    /// Miss, empty history, or an unbound action.
    Nothing,
}

impl ActionOutcome {
    /// Whether the world grid changed.
    pub fn changed_world(&self) -> bool {
        matches!(
            self,
            Self::Placed(_) | Self::Removed(_) | Self::Undone | Self::Redone
        )
    }
}

/// One world, one camera, one editor.
///
/// Front ends call [`Session::tick`] once per frame with the held keys and
/// [`Session::handle`] for each discrete input in between.
pub struct Session {
    pub world: WorldGrid,
    pub camera: Camera,
    pub editor: Editor,
    frame: u64,
}

impl Session {
    /// Build a session, seeding terrain if the config asks for it.
    pub fn new(config: &SessionConfig) -> Result<Self, SessionError> {
        config.validate()?;
        let mut world = WorldGrid::new();
        if let Some(terrain_config) = &config.terrain {
            let heights = terrain::NoiseHeights::new(terrain_config)?;
            terrain::generate(&mut world, &heights, terrain_config, config.default_faces);
        }
        Self::with_world(world, config)
    }

    /// Build a session around an already-populated grid. `config.terrain` is ignored.
    pub fn with_world(world: WorldGrid, config: &SessionConfig) -> Result<Self, SessionError> {
        config.camera.validate()?;
        let editor = Editor::with_config(config.raycast, config.default_faces)?;
        tracing::info!(blocks = world.len(), "session created");
        Ok(Self {
            world,
            camera: Camera::new(&config.camera),
            editor,
            frame: 0,
        })
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self, SessionError> {
        Self::new(&SessionConfig::load(path)?)
    }

    /// Frames ticked so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Advance one frame: move the camera from the held keys.
    pub fn tick(&mut self, dt: f32, keys: &dyn HeldKeys) {
        let _span = tracing::info_span!("session_tick", frame = self.frame).entered();
        self.camera.update(dt, keys);
        self.frame += 1;
        tracing::trace!(position = ?self.camera.position(), "camera moved");
    }

    /// Run one discrete action.
    pub fn handle(&mut self, action: Action) -> ActionOutcome {
        let pose = self.camera.pose();
        let outcome = match action {
            Action::PlaceBlock => self
                .editor
                .place_block(&mut self.world, &pose)
                .map_or(ActionOutcome::Nothing, ActionOutcome::Placed),
            Action::RemoveBlock => self
                .editor
                .remove_block(&mut self.world, &pose)
                .map_or(ActionOutcome::Nothing, ActionOutcome::Removed),
            Action::Undo => {
                if self.editor.undo(&mut self.world) {
                    ActionOutcome::Undone
                } else {
                    ActionOutcome::Nothing
                }
            }
            Action::Redo => {
                if self.editor.redo(&mut self.world) {
                    ActionOutcome::Redone
                } else {
                    ActionOutcome::Nothing
                }
            }
            Action::Look { dx, dy } => {
                self.camera.apply_mouse_delta(dx, dy);
                ActionOutcome::Looked
            }
            Action::Noop => ActionOutcome::Nothing,
        };
        tracing::debug!(?action, ?outcome, "handled action");
        outcome
    }

    /// The block under the crosshair right now.
    pub fn target(&self) -> Option<RayHit> {
        raycast::cast_from(&self.camera.pose(), &self.world, self.editor.raycast())
    }

    pub fn render_view(&self) -> RenderView {
        self.camera.render_view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockworld_common::BlockFaces;
    use blockworld_input::{MoveKey, MovementKeys};
    use glam::Vec3;

    fn facing_block() -> Session {
        let mut world = WorldGrid::new();
        world.insert(BlockCoord::new(0, 5, 0), BlockFaces::default());
        let mut session = Session::with_world(world, &SessionConfig::default()).unwrap();
        session.camera.set_position(Vec3::new(0.5, 5.5, -5.0));
        session
    }

    #[test]
    fn default_session_has_terrain() {
        let session = Session::new(&SessionConfig::with_default_terrain()).unwrap();
        assert_eq!(session.world.len(), 256);
        assert_eq!(session.frame(), 0);
    }

    #[test]
    fn empty_session_without_terrain() {
        let session = Session::new(&SessionConfig::default()).unwrap();
        assert!(session.world.is_empty());
    }

    #[test]
    fn tick_moves_camera_and_counts_frames() {
        let mut session = facing_block();
        session.tick(0.1, &MovementKeys::holding(&[MoveKey::Forward]));
        session.tick(0.1, &MovementKeys::none());
        assert_eq!(session.frame(), 2);
        assert!((session.camera.position().z - -4.0).abs() < 1e-4);
    }

    #[test]
    fn place_remove_undo_through_actions() {
        let mut session = facing_block();
        assert_eq!(
            session.handle(Action::PlaceBlock),
            ActionOutcome::Placed(BlockCoord::new(0, 5, -1))
        );
        assert_eq!(
            session.handle(Action::RemoveBlock),
            ActionOutcome::Removed(BlockCoord::new(0, 5, -1))
        );
        assert_eq!(session.handle(Action::Undo), ActionOutcome::Undone);
        assert!(session.world.contains(BlockCoord::new(0, 5, -1)));
        assert_eq!(session.handle(Action::Redo), ActionOutcome::Redone);
        assert_eq!(session.handle(Action::Redo), ActionOutcome::Nothing);
    }

    #[test]
    fn look_turns_camera_away_from_block() {
        let mut session = facing_block();
        assert!(session.target().is_some());
        // 1200 counts * 0.15 = 180 degrees.
        assert_eq!(
            session.handle(Action::Look { dx: 1200.0, dy: 0.0 }),
            ActionOutcome::Looked
        );
        assert!(session.target().is_none());
        assert_eq!(session.handle(Action::RemoveBlock), ActionOutcome::Nothing);
        assert_eq!(session.world.len(), 1);
    }

    #[test]
    fn non_finite_look_cannot_edit_the_origin() {
        let mut world = WorldGrid::new();
        world.insert(BlockCoord::new(0, 0, 0), BlockFaces::default());
        let mut session = Session::with_world(world, &SessionConfig::default()).unwrap();
        session.camera.set_position(Vec3::new(100.5, 50.5, -40.5));

        session.handle(Action::Look {
            dx: f32::INFINITY,
            dy: 0.0,
        });
        session.handle(Action::Look {
            dx: 0.0,
            dy: f32::NAN,
        });
        assert_eq!((session.camera.yaw(), session.camera.pitch()), (0.0, 0.0));
        assert!(session.target().is_none());
        assert_eq!(session.handle(Action::RemoveBlock), ActionOutcome::Nothing);
        assert!(session.world.contains(BlockCoord::new(0, 0, 0)));
    }

    #[test]
    fn with_world_rejects_bad_config() {
        let mut config = SessionConfig::default();
        config.camera.pitch = f32::NAN;
        assert!(matches!(
            Session::with_world(WorldGrid::new(), &config),
            Err(SessionError::Config(_))
        ));

        let mut config = SessionConfig::default();
        config.raycast.step_size = 1e-30;
        assert!(matches!(
            Session::with_world(WorldGrid::new(), &config),
            Err(SessionError::Config(_))
        ));
    }

    #[test]
    fn noop_changes_nothing() {
        let mut session = facing_block();
        let outcome = session.handle(Action::Noop);
        assert_eq!(outcome, ActionOutcome::Nothing);
        assert!(!outcome.changed_world());
    }

    #[test]
    fn render_view_follows_camera() {
        let session = facing_block();
        let view = session.render_view();
        assert_eq!(view.eye, Vec3::new(0.5, 5.5, -5.0));
        assert!((view.target - Vec3::new(0.5, 5.5, -4.0)).length() < 1e-5);
    }
}
