//! GPU resource management utilities.
//!
//! Provides wgpu device/surface initialization, the camera uniform buffer
//! and shared pipeline boilerplate.

/// Camera uniform buffer, bind group and queue-backed upload sink.
pub mod camera_buffer;
/// Shared wgpu boilerplate helpers for line-list pipelines.
pub mod pipeline_helpers;
/// wgpu device, surface, and queue initialization.
pub mod render_context;
