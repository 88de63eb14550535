//! Ground-plane reference grid.
//!
//! Draws `2 * (2 * HALF_EXTENT + 1)` unit-spaced lines on the XZ plane plus a
//! three-segment marker at the camera's look target. All geometry comes from
//! `vertex_index`, so the only binding is the camera uniform.

use crate::gpu::{pipeline_helpers, render_context::RenderContext};

/// Grid spans `[-HALF_EXTENT, HALF_EXTENT]` on both X and Z.
pub const HALF_EXTENT: u32 = 50;

const GRID_LINES: u32 = 2 * (2 * HALF_EXTENT + 1);
const MARKER_LINES: u32 = 3;

/// Number of vertices drawn per frame.
pub const fn vertex_count() -> u32 {
    2 * (GRID_LINES + MARKER_LINES)
}

/// Line-list pipeline for the ground grid.
pub struct GridRenderer {
    pipeline: wgpu::RenderPipeline,
}

impl GridRenderer {
    /// Build the grid pipeline for the surface format, using the camera
    /// bind group layout at group 0.
    pub fn new(
        context: &RenderContext,
        camera_layout: &wgpu::BindGroupLayout,
    ) -> Self {
        let shader = context.device.create_shader_module(
            wgpu::ShaderModuleDescriptor {
                label: Some("Grid Shader"),
                source: wgpu::ShaderSource::Wgsl(
                    include_str!("../../assets/shaders/grid.wgsl").into(),
                ),
            },
        );
        let pipeline = pipeline_helpers::create_line_pipeline(
            &context.device,
            "Grid",
            &shader,
            context.format(),
            &[camera_layout],
        );
        Self { pipeline }
    }

    /// Record the grid draw into an open render pass.
    pub fn draw(
        &self,
        pass: &mut wgpu::RenderPass<'_>,
        camera_bind_group: &wgpu::BindGroup,
    ) {
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, camera_bind_group, &[]);
        pass.draw(0..vertex_count(), 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_count_matches_shader_layout() {
        // 101 lines per axis, two axes, three marker segments.
        assert_eq!(vertex_count(), 2 * (202 + 3));
    }

    #[test]
    fn shader_constants_agree() {
        let source = include_str!("../../assets/shaders/grid.wgsl");
        assert!(source
            .contains(&format!("const HALF_EXTENT: i32 = {HALF_EXTENT};")));
        assert!(source.contains(&format!(
            "const LINES_PER_AXIS: u32 = {}u;",
            2 * HALF_EXTENT + 1
        )));
    }
}
