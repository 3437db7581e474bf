use serde::{Deserialize, Serialize};

/// A discrete, high-level action produced by a click or shortcut.
///
/// Edit operations consume actions, never raw mouse buttons, so a desktop
/// window and a scripted session share the same world logic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Place a block against the face under the crosshair.
    PlaceBlock,
    /// Remove the block under the crosshair.
    RemoveBlock,
    /// Rotate the view by a mouse delta.
    Look { dx: f32, dy: f32 },
    /// Undo the last edit.
    Undo,
    /// Redo the last undone edit.
    Redo,
    /// No-op (used for input mapping that hasn't been bound yet).
    Noop,
}

impl Action {
    /// Map a mouse button number to an edit. 1 is left, 4 is right; others are unbound.
    pub fn from_mouse_button(button: u8) -> Self {
        match button {
            1 => Action::PlaceBlock,
            4 => Action::RemoveBlock,
            _ => Action::Noop,
        }
    }

    /// Whether this action may mutate the world grid.
    pub fn is_edit(&self) -> bool {
        matches!(
            self,
            Action::PlaceBlock | Action::RemoveBlock | Action::Undo | Action::Redo
        )
    }
}
