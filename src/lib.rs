//! First-person fly camera for wgpu applications.
//!
//! Freecam turns held keys and relative pointer motion into a yaw/pitch
//! camera and packs its view-projection, position and look target into a
//! 96-byte uniform ready for `Queue::write_buffer`.
//!
//! # Key entry points
//!
//! - [`FlyCamera`] - orientation, movement and the per-frame update
//! - [`InputProcessor`] - maps platform [`InputEvent`]s to [`CameraCommand`]s
//! - [`CameraUniform`] / [`UniformSink`] - the GPU record and where it goes
//! - [`Options`] - TOML presets for projection, tuning and key bindings
//!
//! # Frame flow
//!
//! Input handlers only record state. Once per frame the host calls
//! [`FlyCamera::on_frame`], which applies pending pointer motion, rebuilds
//! the basis, moves along held directions and writes the uniform. With the
//! `viewer` feature, `Viewer` wires all of this to a winit window that
//! draws a ground grid.

pub mod camera;
pub mod error;
pub mod gpu;
pub mod input;
pub mod options;
pub mod renderer;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use camera::{
    CameraCommand, CameraKey, CameraUniform, FlyCamera, Projection,
    UniformSink,
};
pub use error::FreecamError;
pub use input::{InputEvent, InputProcessor};
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
