//! The camera's complete interactive vocabulary.
//!
//! Every input the camera reacts to, whether it comes from the
//! [`InputProcessor`](crate::input::InputProcessor), a scripted sequence or a
//! host UI, is a `CameraCommand` passed to
//! [`FlyCamera::execute`](super::FlyCamera::execute).

use glam::Vec2;

use super::input::CameraKey;

/// A single input action applied to a [`FlyCamera`](super::FlyCamera).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraCommand {
    /// A logical key went down or up.
    SetKey {
        /// Which key changed.
        key: CameraKey,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Raw pointer motion in pixels, scaled by the look sensitivity before
    /// it reaches the orientation.
    PointerMotion {
        /// Horizontal and vertical pixel delta.
        delta: Vec2,
    },
    /// The host captured or released the pointer.
    SetPointerCaptured(bool),
    /// Forget every held key.
    ReleaseAllKeys,
}
