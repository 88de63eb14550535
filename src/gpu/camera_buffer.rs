//! GPU-side storage for the packed camera uniform.

use crate::camera::{CameraUniform, UniformSink, CAMERA_UNIFORM_SIZE};
use crate::gpu::pipeline_helpers;

/// A 96-byte uniform buffer holding [`CameraUniform`], plus the bind group
/// that exposes it at `@group(0) @binding(0)`.
pub struct CameraBuffer {
    /// The uniform buffer (`UNIFORM | COPY_DST`).
    pub buffer: wgpu::Buffer,
    /// Layout with a single vertex/fragment-visible uniform entry.
    pub layout: wgpu::BindGroupLayout,
    /// Bind group binding `buffer` at binding 0.
    pub bind_group: wgpu::BindGroup,
}

impl CameraBuffer {
    /// Allocate the buffer and bind group, seeded with `initial`.
    pub fn new(device: &wgpu::Device, initial: &CameraUniform) -> Self {
        use wgpu::util::DeviceExt;

        let buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer"),
                contents: &initial.to_le_bytes(),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });
        debug_assert_eq!(buffer.size(), CAMERA_UNIFORM_SIZE as u64);

        let layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Layout"),
                entries: &[pipeline_helpers::uniform_buffer(0)],
            });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });

        Self {
            buffer,
            layout,
            bind_group,
        }
    }

    /// A sink that writes into this buffer through `queue`.
    pub fn upload<'a>(&'a self, queue: &'a wgpu::Queue) -> BufferUpload<'a> {
        BufferUpload {
            queue,
            buffer: &self.buffer,
        }
    }
}

/// [`UniformSink`] backed by `Queue::write_buffer`.
pub struct BufferUpload<'a> {
    queue: &'a wgpu::Queue,
    buffer: &'a wgpu::Buffer,
}

impl UniformSink for BufferUpload<'_> {
    fn write_uniform(&mut self, offset: u64, bytes: &[u8]) {
        self.queue.write_buffer(self.buffer, offset, bytes);
    }
}
