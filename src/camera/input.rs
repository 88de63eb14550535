use glam::Vec2;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Logical camera keys. Physical key names are resolved to these by
/// [`KeyBindings`](crate::options::KeyBindings).
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings]
/// KeyW = "forward"
/// ShiftLeft = "fast"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraKey {
    /// Move along `front`.
    Forward,
    /// Move against `front`.
    Back,
    /// Move against `right`.
    Left,
    /// Move along `right`.
    Right,
    /// Move along the camera `up` vector.
    Up,
    /// Move against the camera `up` vector.
    Down,
    /// Multiply movement speed.
    Fast,
    /// Divide movement speed.
    Slow,
}

/// Input accumulated between two frames.
///
/// Key state persists until the key is released. Pointer motion is summed
/// until [`take_motion`](Self::take_motion) consumes it, so several motion
/// events between frames turn into a single rotation.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pressed: FxHashSet<CameraKey>,
    pending_motion: Vec2,
    pointer_captured: bool,
}

impl InputState {
    /// Empty state: nothing pressed, no motion, pointer free.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key transition.
    pub fn set_key(&mut self, key: CameraKey, down: bool) {
        if down {
            let _ = self.pressed.insert(key);
        } else {
            let _ = self.pressed.remove(&key);
        }
    }

    /// Whether `key` is currently held.
    #[must_use]
    pub fn is_down(&self, key: CameraKey) -> bool {
        self.pressed.contains(&key)
    }

    /// Release every key, e.g. when the window loses focus and release
    /// events will never arrive.
    pub fn release_all(&mut self) {
        self.pressed.clear();
    }

    /// Whether pointer motion currently drives the camera.
    #[must_use]
    pub fn pointer_captured(&self) -> bool {
        self.pointer_captured
    }

    /// Set the pointer capture flag.
    pub fn set_pointer_captured(&mut self, captured: bool) {
        self.pointer_captured = captured;
    }

    /// Add a motion delta. Ignored while the pointer is free.
    pub fn accumulate_motion(&mut self, delta: Vec2) {
        if self.pointer_captured {
            self.pending_motion += delta;
        }
    }

    /// Motion accumulated since the last [`take_motion`](Self::take_motion).
    #[must_use]
    pub fn pending_motion(&self) -> Vec2 {
        self.pending_motion
    }

    /// Return the accumulated motion and reset it to zero.
    pub fn take_motion(&mut self) -> Vec2 {
        std::mem::take(&mut self.pending_motion)
    }
}
