use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::camera::CameraKey;

/// Maps physical key strings to logical [`CameraKey`]s.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format, which is
/// also what DOM `KeyboardEvent.code` reports: `"KeyW"`, `"ShiftLeft"`,
/// `"AltRight"`, etc. Several physical keys may map to the same logical
/// key. A `[keybindings]` table in a preset replaces the whole map.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct KeyBindings {
    /// Forward map: key string → logical key.
    bindings: HashMap<String, CameraKey>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("KeyW".into(), CameraKey::Forward),
            ("KeyS".into(), CameraKey::Back),
            ("KeyA".into(), CameraKey::Left),
            ("KeyD".into(), CameraKey::Right),
            ("KeyE".into(), CameraKey::Up),
            ("KeyQ".into(), CameraKey::Down),
            ("ShiftLeft".into(), CameraKey::Fast),
            ("ShiftRight".into(), CameraKey::Fast),
            ("AltLeft".into(), CameraKey::Slow),
            ("AltRight".into(), CameraKey::Slow),
        ]);
        Self { bindings }
    }
}

impl KeyBindings {
    /// Bindings with no keys mapped.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Look up the logical key for a physical key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<CameraKey> {
        self.bindings.get(key).copied()
    }

    /// Bind `key` to `action`, returning the previous binding if any.
    pub fn bind(
        &mut self,
        key: impl Into<String>,
        action: CameraKey,
    ) -> Option<CameraKey> {
        self.bindings.insert(key.into(), action)
    }

    /// Remove the binding for `key`, returning it if present.
    pub fn unbind(&mut self, key: &str) -> Option<CameraKey> {
        self.bindings.remove(key)
    }
}
