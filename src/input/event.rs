/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`CameraCommand`](crate::camera::CameraCommand)
/// values.
///
/// # Example
///
/// ```
/// # use freecam::{FlyCamera, InputEvent, InputProcessor, Projection};
/// # use glam::Vec3;
/// let processor = InputProcessor::new();
/// let mut camera = FlyCamera::new(Vec3::ZERO, Projection::default());
/// let event = InputEvent::Key { code: "KeyW".into(), pressed: true };
/// if let Some(cmd) = processor.handle_event(event) {
///     camera.execute(cmd);
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A physical key changed state.
    Key {
        /// Physical key name in `KeyCode` debug format (`"KeyW"`).
        code: String,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Relative pointer motion, independent of cursor position.
    PointerMotion {
        /// Horizontal delta in pixels.
        dx: f32,
        /// Vertical delta in pixels (positive = down).
        dy: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// The window or canvas lost keyboard focus.
    FocusLost,
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
    /// Any other button (back, forward, extra side buttons).
    Other,
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => Self::Left,
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            winit::event::MouseButton::Back
            | winit::event::MouseButton::Forward
            | winit::event::MouseButton::Other(_) => Self::Other,
        }
    }
}

#[cfg(feature = "viewer")]
impl InputEvent {
    /// Translate a winit window event. Returns `None` for events the camera
    /// does not care about.
    #[must_use]
    pub fn from_window_event(event: &winit::event::WindowEvent) -> Option<Self> {
        use winit::event::{ElementState, WindowEvent};
        use winit::keyboard::PhysicalKey;

        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return None;
                };
                Some(Self::Key {
                    code: format!("{code:?}"),
                    pressed: event.state == ElementState::Pressed,
                })
            }
            WindowEvent::MouseInput { button, state, .. } => {
                Some(Self::MouseButton {
                    button: MouseButton::from(*button),
                    pressed: *state == ElementState::Pressed,
                })
            }
            WindowEvent::Focused(false) => Some(Self::FocusLost),
            _ => None,
        }
    }

    /// Translate a winit device event. Raw mouse motion keeps arriving while
    /// the cursor is locked, unlike `CursorMoved`.
    #[must_use]
    pub fn from_device_event(event: &winit::event::DeviceEvent) -> Option<Self> {
        match event {
            winit::event::DeviceEvent::MouseMotion { delta: (dx, dy) } => {
                Some(Self::PointerMotion {
                    dx: *dx as f32,
                    dy: *dy as f32,
                })
            }
            _ => None,
        }
    }
}

#[cfg(feature = "web")]
impl InputEvent {
    /// Translate a DOM `keydown`/`keyup` event. `KeyboardEvent.code` already
    /// uses the same physical key names as winit.
    #[must_use]
    pub fn from_keyboard_event(
        event: &web_sys::KeyboardEvent,
        pressed: bool,
    ) -> Self {
        Self::Key {
            code: event.code(),
            pressed,
        }
    }

    /// Translate a DOM `mousemove` event using its pointer-lock movement
    /// deltas.
    #[must_use]
    pub fn from_mouse_motion(event: &web_sys::MouseEvent) -> Self {
        Self::PointerMotion {
            dx: event.movement_x() as f32,
            dy: event.movement_y() as f32,
        }
    }

    /// Translate a DOM `mousedown`/`mouseup` event.
    #[must_use]
    pub fn from_mouse_button(event: &web_sys::MouseEvent, pressed: bool) -> Self {
        let button = match event.button() {
            0 => MouseButton::Left,
            1 => MouseButton::Middle,
            2 => MouseButton::Right,
            _ => MouseButton::Other,
        };
        Self::MouseButton { button, pressed }
    }
}
