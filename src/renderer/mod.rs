//! Scene rendering for the viewer.
//!
//! A single reference grid is enough to judge camera motion; everything is
//! drawn into the swapchain in one pass.

pub mod grid;

pub use grid::GridRenderer;

use crate::gpu::{camera_buffer::CameraBuffer, render_context::RenderContext};

/// Background clear color.
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.08,
    g: 0.09,
    b: 0.11,
    a: 1.0,
};

/// Acquire the next frame, clear it and draw the grid.
///
/// # Errors
///
/// Returns [`wgpu::SurfaceError`] when the swapchain texture cannot be
/// acquired; callers reconfigure on `Lost`/`Outdated`.
pub fn render_frame(
    context: &RenderContext,
    camera: &CameraBuffer,
    grid: &GridRenderer,
) -> Result<(), wgpu::SurfaceError> {
    let frame = context.surface.get_current_texture()?;
    let view = frame
        .texture
        .create_view(&wgpu::TextureViewDescriptor::default());
    let mut encoder = context.device.create_command_encoder(
        &wgpu::CommandEncoderDescriptor {
            label: Some("Frame Encoder"),
        },
    );
    {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Grid Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                depth_slice: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        grid.draw(&mut pass, &camera.bind_group);
    }
    let _ = context.queue.submit(std::iter::once(encoder.finish()));
    frame.present();
    Ok(())
}
