//! Converts raw platform events into camera commands.
//!
//! The `InputProcessor` owns the key-binding map. It is the only thing that
//! sits between raw window events and
//! [`FlyCamera::execute`](crate::camera::FlyCamera::execute).

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use crate::camera::CameraCommand;
use crate::options::KeyBindings;

/// Converts raw window events into [`CameraCommand`]s.
///
/// Pointer capture follows the primary button: pressing it requests
/// capture, releasing it requests release. Hosts that actually lock the
/// cursor should forward [`CameraCommand::SetPointerCaptured`] only once
/// the lock has taken effect.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(cmd) = input_processor.handle_event(event) {
///     camera.execute(cmd);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    /// Key string → logical key mapping.
    key_bindings: KeyBindings,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeyBindings) -> Self {
        Self { key_bindings }
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeyBindings {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.key_bindings
    }

    /// Process a platform event and return the camera command it maps to,
    /// if any. Unbound keys and non-primary buttons produce nothing.
    #[must_use]
    pub fn handle_event(&self, event: InputEvent) -> Option<CameraCommand> {
        match event {
            InputEvent::Key { code, pressed } => self
                .key_bindings
                .lookup(&code)
                .map(|key| CameraCommand::SetKey { key, pressed }),
            InputEvent::PointerMotion { dx, dy } => {
                Some(CameraCommand::PointerMotion {
                    delta: Vec2::new(dx, dy),
                })
            }
            InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed,
            } => Some(CameraCommand::SetPointerCaptured(pressed)),
            InputEvent::MouseButton { .. } => None,
            // Release events never arrive after focus moves elsewhere
            // (alt+tab), so drop every held key.
            InputEvent::FocusLost => Some(CameraCommand::ReleaseAllKeys),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraKey;

    fn key(code: &str, pressed: bool) -> InputEvent {
        InputEvent::Key {
            code: code.into(),
            pressed,
        }
    }

    #[test]
    fn bound_keys_become_set_key() {
        let p = InputProcessor::new();
        assert_eq!(
            p.handle_event(key("KeyW", true)),
            Some(CameraCommand::SetKey {
                key: CameraKey::Forward,
                pressed: true
            })
        );
        assert_eq!(
            p.handle_event(key("AltLeft", false)),
            Some(CameraCommand::SetKey {
                key: CameraKey::Slow,
                pressed: false
            })
        );
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let p = InputProcessor::new();
        assert_eq!(p.handle_event(key("KeyZ", true)), None);
        // Lookup is exact; case folding is the platform adapter's job.
        assert_eq!(p.handle_event(key("keyw", true)), None);
    }

    #[test]
    fn primary_button_drives_capture() {
        let p = InputProcessor::new();
        let press = InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        };
        let release = InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: false,
        };
        let right = InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: true,
        };
        assert_eq!(
            p.handle_event(press),
            Some(CameraCommand::SetPointerCaptured(true))
        );
        assert_eq!(
            p.handle_event(release),
            Some(CameraCommand::SetPointerCaptured(false))
        );
        assert_eq!(p.handle_event(right), None);
    }

    #[test]
    fn side_buttons_never_capture() {
        let p = InputProcessor::new();
        for pressed in [true, false] {
            let back = InputEvent::MouseButton {
                button: MouseButton::Other,
                pressed,
            };
            assert_eq!(p.handle_event(back), None);
        }
    }

    #[test]
    fn motion_and_focus_loss() {
        let p = InputProcessor::new();
        assert_eq!(
            p.handle_event(InputEvent::PointerMotion { dx: 3.0, dy: -1.0 }),
            Some(CameraCommand::PointerMotion {
                delta: Vec2::new(3.0, -1.0)
            })
        );
        assert_eq!(
            p.handle_event(InputEvent::FocusLost),
            Some(CameraCommand::ReleaseAllKeys)
        );
    }

    #[test]
    fn custom_bindings_are_used() {
        let mut bindings = KeyBindings::empty();
        let _ = bindings.bind("ArrowUp", CameraKey::Forward);
        let mut p = InputProcessor::with_key_bindings(bindings);
        assert_eq!(p.handle_event(key("KeyW", true)), None);
        assert!(p.handle_event(key("ArrowUp", true)).is_some());

        let _ = p.key_bindings_mut().bind("KeyW", CameraKey::Back);
        assert_eq!(p.key_bindings().lookup("KeyW"), Some(CameraKey::Back));
    }
}
