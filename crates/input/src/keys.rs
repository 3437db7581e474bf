use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// The four movement keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKey {
    Forward,
    Back,
    StrafeLeft,
    StrafeRight,
}

impl MoveKey {
    pub const ALL: [MoveKey; 4] = [
        MoveKey::Forward,
        MoveKey::Back,
        MoveKey::StrafeLeft,
        MoveKey::StrafeRight,
    ];
}

/// "Is this key down right now", supplied by the window system once per tick.
pub trait HeldKeys {
    fn is_held(&self, key: MoveKey) -> bool;
}

/// Plain snapshot of the movement keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementKeys {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
}

impl MovementKeys {
    pub fn none() -> Self {
        Self::default()
    }

    /// Snapshot with exactly the given keys down.
    pub fn holding(keys: &[MoveKey]) -> Self {
        let mut out = Self::default();
        for key in keys {
            out.set(*key, true);
        }
        out
    }

    pub fn set(&mut self, key: MoveKey, down: bool) {
        match key {
            MoveKey::Forward => self.forward = down,
            MoveKey::Back => self.back = down,
            MoveKey::StrafeLeft => self.left = down,
            MoveKey::StrafeRight => self.right = down,
        }
    }

    pub fn any(&self) -> bool {
        self.forward || self.back || self.left || self.right
    }
}

impl HeldKeys for MovementKeys {
    fn is_held(&self, key: MoveKey) -> bool {
        match key {
            MoveKey::Forward => self.forward,
            MoveKey::Back => self.back,
            MoveKey::StrafeLeft => self.left,
            MoveKey::StrafeRight => self.right,
        }
    }
}

impl HeldKeys for HashSet<MoveKey> {
    fn is_held(&self, key: MoveKey) -> bool {
        self.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_holds_nothing() {
        let keys = MovementKeys::none();
        assert!(!keys.any());
        for k in MoveKey::ALL {
            assert!(!keys.is_held(k));
        }
    }

    #[test]
    fn holding_sets_only_listed_keys() {
        let keys = MovementKeys::holding(&[MoveKey::Forward, MoveKey::StrafeLeft]);
        assert!(keys.is_held(MoveKey::Forward));
        assert!(keys.is_held(MoveKey::StrafeLeft));
        assert!(!keys.is_held(MoveKey::Back));
        assert!(!keys.is_held(MoveKey::StrafeRight));
    }

    #[test]
    fn set_releases_key() {
        let mut keys = MovementKeys::holding(&[MoveKey::Back]);
        keys.set(MoveKey::Back, false);
        assert!(!keys.any());
    }

    #[test]
    fn hash_set_is_a_key_source() {
        let set: HashSet<MoveKey> = [MoveKey::StrafeRight].into_iter().collect();
        assert!(set.is_held(MoveKey::StrafeRight));
        assert!(!set.is_held(MoveKey::Forward));
    }
}
