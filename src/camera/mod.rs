//! First-person camera: orientation, movement and the GPU uniform.
//!
//! Input events mutate an [`InputState`]; once per tick
//! [`FlyCamera::on_frame`] turns the accumulated pointer motion into yaw and
//! pitch, rebuilds the front/right/up basis, integrates movement from held
//! keys and writes the packed [`CameraUniform`] to a [`UniformSink`].

/// Commands accepted by [`FlyCamera::execute`].
pub mod command;
/// The fly camera state machine.
pub mod controller;
/// Pose, basis and projection math.
pub mod core;
/// Logical keys and per-frame input accumulation.
pub mod input;
pub mod uniform;

pub use command::CameraCommand;
pub use controller::{
    FlyCamera, DEFAULT_LOOK_SENSITIVITY, DEFAULT_MOVE_SPEED,
    DEFAULT_SPEED_MULTIPLIER,
};
pub use self::core::{CameraBasis, CameraPose, Projection, PITCH_LIMIT, WORLD_UP};
pub use input::{CameraKey, InputState};
pub use uniform::{CameraUniform, UniformSink, CAMERA_UNIFORM_SIZE};
