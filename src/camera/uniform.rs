//! Fixed-layout camera uniform and the sink it is uploaded through.
//!
//! Byte layout (little-endian IEEE-754 `f32`, 96 bytes total):
//!
//! | offset | floats | field                                  |
//! |--------|--------|----------------------------------------|
//! | 0      | 0–15   | view-projection matrix, column-major   |
//! | 64     | 16–18  | camera world position                  |
//! | 76     | 19     | padding, always `0.0`                  |
//! | 80     | 20–22  | look target (`position + front`)       |
//! | 92     | 23     | padding, always `0.0`                  |
//!
//! This matches a WGSL `struct { view_proj: mat4x4<f32>, position:
//! vec3<f32>, look_target: vec3<f32> }` in a uniform address space.

use glam::{Mat4, Vec3};

/// Size in bytes of the packed camera uniform.
pub const CAMERA_UNIFORM_SIZE: usize = 96;
/// Byte offset of the view-projection matrix.
pub const VIEW_PROJ_OFFSET: usize = 0;
/// Byte offset of the camera position.
pub const POSITION_OFFSET: usize = 64;
/// Byte offset of the look target.
pub const LOOK_TARGET_OFFSET: usize = 80;

const FLOAT_COUNT: usize = CAMERA_UNIFORM_SIZE / 4;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform holding the view-projection matrix, camera position and look
/// target.
pub struct CameraUniform {
    /// Combined view-projection matrix, column-major.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    pub(crate) _pad0: f32,
    /// Point one unit in front of the camera.
    pub look_target: [f32; 3],
    pub(crate) _pad1: f32,
}

const _: () = assert!(size_of::<CameraUniform>() == CAMERA_UNIFORM_SIZE);

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Identity view-projection at the origin, looking down +X.
    #[must_use]
    pub fn new() -> Self {
        Self::pack(Mat4::IDENTITY, Vec3::ZERO, Vec3::X)
    }

    /// Pack the given values. Padding is zeroed; non-finite inputs are
    /// stored unchanged.
    #[must_use]
    pub fn pack(view_proj: Mat4, position: Vec3, look_target: Vec3) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            position: position.to_array(),
            _pad0: 0.0,
            look_target: look_target.to_array(),
            _pad1: 0.0,
        }
    }

    /// The record as 24 floats in layout order.
    #[must_use]
    pub fn as_floats(&self) -> [f32; FLOAT_COUNT] {
        bytemuck::cast(*self)
    }

    /// Serialize to the little-endian byte layout regardless of host
    /// endianness.
    #[must_use]
    pub fn to_le_bytes(&self) -> [u8; CAMERA_UNIFORM_SIZE] {
        let mut bytes = [0u8; CAMERA_UNIFORM_SIZE];
        for (chunk, value) in bytes.chunks_exact_mut(4).zip(self.as_floats())
        {
            chunk.copy_from_slice(&value.to_le_bytes());
        }
        bytes
    }
}

/// Destination for packed camera uniforms, usually a GPU-visible buffer.
///
/// Writes are fire-and-forget; whether the copy happens immediately or is
/// deferred is up to the implementation.
pub trait UniformSink {
    /// Write `bytes` starting at byte `offset` of the destination.
    fn write_uniform(&mut self, offset: u64, bytes: &[u8]);
}

/// Host-memory sink. Grows to fit the write.
impl UniformSink for Vec<u8> {
    fn write_uniform(&mut self, offset: u64, bytes: &[u8]) {
        let start = offset as usize;
        let end = start + bytes.len();
        if self.len() < end {
            self.resize(end, 0);
        }
        self[start..end].copy_from_slice(bytes);
    }
}

#[cfg(test)]
mod tests {
    use std::mem::offset_of;

    use super::*;

    fn read_f32(bytes: &[u8], index: usize) -> f32 {
        let mut word = [0u8; 4];
        word.copy_from_slice(&bytes[index * 4..index * 4 + 4]);
        f32::from_le_bytes(word)
    }

    fn sample_matrix() -> Mat4 {
        let values: [f32; 16] = std::array::from_fn(|i| i as f32 * 1.5 - 4.0);
        Mat4::from_cols_array(&values)
    }

    #[test]
    fn layout_matches_offset_table() {
        assert_eq!(offset_of!(CameraUniform, view_proj), VIEW_PROJ_OFFSET);
        assert_eq!(offset_of!(CameraUniform, position), POSITION_OFFSET);
        assert_eq!(offset_of!(CameraUniform, look_target), LOOK_TARGET_OFFSET);
        assert_eq!(size_of::<CameraUniform>(), CAMERA_UNIFORM_SIZE);
    }

    #[test]
    fn packed_bytes_hold_inputs_at_fixed_offsets() {
        let m = sample_matrix();
        let position = Vec3::new(-7.0, 2.0, 0.5);
        let target = Vec3::new(-6.0, 2.25, 0.125);
        let bytes = CameraUniform::pack(m, position, target).to_le_bytes();

        assert_eq!(bytes.len(), 96);
        for (i, expected) in m.to_cols_array().iter().enumerate() {
            assert_eq!(read_f32(&bytes, i), *expected);
        }
        assert_eq!(read_f32(&bytes, 16), -7.0);
        assert_eq!(read_f32(&bytes, 17), 2.0);
        assert_eq!(read_f32(&bytes, 18), 0.5);
        assert_eq!(read_f32(&bytes, 19), 0.0);
        assert_eq!(read_f32(&bytes, 20), -6.0);
        assert_eq!(read_f32(&bytes, 21), 2.25);
        assert_eq!(read_f32(&bytes, 22), 0.125);
        assert_eq!(read_f32(&bytes, 23), 0.0);
    }

    #[test]
    fn matrix_is_column_major() {
        let m = Mat4::from_translation(Vec3::new(3.0, 4.0, 5.0));
        let floats = CameraUniform::pack(m, Vec3::ZERO, Vec3::X).as_floats();
        // Translation lives in the fourth column.
        assert_eq!(&floats[12..15], &[3.0, 4.0, 5.0]);
        assert_eq!(floats[15], 1.0);
    }

    #[test]
    fn pod_view_agrees_with_le_bytes_on_little_endian_hosts() {
        let uniform =
            CameraUniform::pack(sample_matrix(), Vec3::ONE, Vec3::NEG_ONE);
        if cfg!(target_endian = "little") {
            assert_eq!(bytemuck::bytes_of(&uniform), &uniform.to_le_bytes());
        }
    }

    #[test]
    fn non_finite_values_pass_through() {
        let position = Vec3::new(f32::NAN, f32::INFINITY, 1.0);
        let floats =
            CameraUniform::pack(Mat4::IDENTITY, position, Vec3::ZERO)
                .as_floats();
        assert!(floats[16].is_nan());
        assert_eq!(floats[17], f32::INFINITY);
        assert_eq!(floats[19], 0.0);
    }

    #[test]
    fn vec_sink_writes_at_offset() {
        let mut sink: Vec<u8> = vec![0xAA; 8];
        sink.write_uniform(4, &[1, 2, 3, 4, 5, 6]);
        assert_eq!(sink, vec![0xAA, 0xAA, 0xAA, 0xAA, 1, 2, 3, 4, 5, 6]);
    }
}
