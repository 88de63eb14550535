//! Standalone fly-through window backed by winit.
//!
//! Opens a window over a ground grid and drives a [`FlyCamera`] from the
//! keyboard and relative mouse motion. Holding the primary mouse button
//! grabs the cursor so the view can be turned.
//!
//! ```no_run
//! # use freecam::Viewer;
//! Viewer::builder()
//!     .with_title("Grid")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use web_time::{Duration, Instant};

use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{CursorGrabMode, Window, WindowId},
};

use crate::{
    camera::{CameraCommand, FlyCamera},
    error::FreecamError,
    gpu::{camera_buffer::CameraBuffer, render_context::RenderContext},
    input::{InputEvent, InputProcessor},
    options::Options,
    renderer::{self, GridRenderer},
    util::FrameClock,
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with sensible defaults (title "Freecam", default
    /// options).
    fn new() -> Self {
        Self {
            options: None,
            title: "Freecam".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window for flying around a reference grid.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// Returns [`FreecamError::Viewer`] if the event loop cannot be created
    /// or exits with an error.
    pub fn run(self) -> Result<(), FreecamError> {
        let event_loop = EventLoop::new()
            .map_err(|e| FreecamError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let camera = FlyCamera::from_options(&self.options.camera, 16.0 / 9.0);
        let mut app = ViewerApp {
            window: None,
            gpu: None,
            clock: FrameClock::new(),
            title_refreshed: Instant::now(),
            processor: InputProcessor::with_key_bindings(
                self.options.keybindings.clone(),
            ),
            options: self.options,
            camera,
            title: self.title,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| FreecamError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

const TITLE_REFRESH: Duration = Duration::from_millis(500);

/// GPU resources created once the window exists.
struct GpuState {
    context: RenderContext,
    camera_buffer: CameraBuffer,
    grid: GridRenderer,
}

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    clock: FrameClock,
    title_refreshed: Instant,
    processor: InputProcessor,
    options: Options,
    camera: FlyCamera,
    title: String,
}

fn viewport_size(inner: winit::dpi::PhysicalSize<u32>) -> (u32, u32) {
    (inner.width.max(1), inner.height.max(1))
}

/// Cursor lock control, split out from [`Window`] so capture routing can be
/// exercised without a display.
trait CursorControl {
    /// Lock (or confine, where locking is unsupported) and hide the cursor.
    /// Returns `false` if neither grab mode took effect.
    fn grab(&self) -> bool;
    /// Free and show the cursor.
    fn release(&self);
}

impl CursorControl for Window {
    fn grab(&self) -> bool {
        let grabbed = self
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| self.set_cursor_grab(CursorGrabMode::Confined));
        match grabbed {
            Ok(()) => {
                self.set_cursor_visible(false);
                true
            }
            Err(e) => {
                log::warn!("Cursor grab unavailable: {e}");
                false
            }
        }
    }

    fn release(&self) {
        if let Err(e) = self.set_cursor_grab(CursorGrabMode::None) {
            log::warn!("Cursor release failed: {e}");
        }
        self.set_cursor_visible(true);
    }
}

/// Apply `command` to `camera`, keeping the OS cursor in step with the
/// camera's capture flag. A capture request whose grab fails is dropped.
fn route_command(
    command: CameraCommand,
    cursor: &impl CursorControl,
    camera: &mut FlyCamera,
) {
    match command {
        CameraCommand::SetPointerCaptured(true) => {
            if !cursor.grab() {
                return;
            }
        }
        CameraCommand::SetPointerCaptured(false) => cursor.release(),
        CameraCommand::ReleaseAllKeys => {
            cursor.release();
            camera.set_pointer_captured(false);
        }
        CameraCommand::SetKey { .. } | CameraCommand::PointerMotion { .. } => {}
    }
    camera.execute(command);
}

impl ViewerApp {
    /// Route an input event through the processor into the camera.
    fn dispatch(&mut self, event: InputEvent) {
        let Some(command) = self.processor.handle_event(event) else {
            return;
        };
        let Some(window) = &self.window else {
            return;
        };
        route_command(command, &**window, &mut self.camera);
    }

    /// Reconfigure the surface and rebuild the camera projection for a new
    /// viewport. The pose and held input carry over.
    fn resize(&mut self, width: u32, height: u32) {
        let Some(gpu) = &mut self.gpu else {
            return;
        };
        if let Some(aspect) = gpu.context.resize(width, height) {
            let projection = self.options.camera.projection(aspect);
            self.camera = self.camera.with_projection(projection);
        }
    }

    /// Show the smoothed frame rate in the title, twice a second.
    fn refresh_title(&mut self) {
        if self.title_refreshed.elapsed() < TITLE_REFRESH {
            return;
        }
        self.title_refreshed = Instant::now();
        if let Some(window) = &self.window {
            window.set_title(&format!(
                "{} ({:.0} fps)",
                self.title,
                self.clock.fps()
            ));
        }
    }

    fn redraw(&mut self) {
        let dt = self.clock.tick();
        self.refresh_title();
        let Some(gpu) = &self.gpu else {
            return;
        };
        self.camera
            .on_frame(dt, &mut gpu.camera_buffer.upload(&gpu.context.queue));

        match renderer::render_frame(&gpu.context, &gpu.camera_buffer, &gpu.grid)
        {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
                if let Some(w) = &self.window {
                    let (vp_w, vp_h) = viewport_size(w.inner_size());
                    self.resize(vp_w, vp_h);
                }
            }
            Err(e) => {
                log::error!("render error: {e:?}");
            }
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let monitor = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next());
        let attrs = if let Some(mon) = &monitor {
            let mon_size = mon.size();
            let scale = mon.scale_factor();
            let logical_w = (mon_size.width as f64 / scale * 0.75) as u32;
            let logical_h = (mon_size.height as f64 / scale * 0.75) as u32;
            Window::default_attributes()
                .with_title(&self.title)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    logical_w, logical_h,
                ))
        } else {
            Window::default_attributes().with_title(&self.title)
        };

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let size = viewport_size(window.inner_size());
        let context =
            match pollster::block_on(RenderContext::new(window.clone(), size))
            {
                Ok(c) => c,
                Err(e) => {
                    log::error!("Failed to initialize GPU: {e}");
                    event_loop.exit();
                    return;
                }
            };

        let projection = self.options.camera.projection(context.aspect());
        self.camera = self.camera.with_projection(projection);

        let camera_buffer =
            CameraBuffer::new(&context.device, self.camera.uniform());
        let grid = GridRenderer::new(&context, &camera_buffer.layout);

        window.request_redraw();
        self.window = Some(window);
        self.gpu = Some(GpuState {
            context,
            camera_buffer,
            grid,
        });
        self.clock = FrameClock::new();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        if self.window.is_none() || self.gpu.is_none() {
            return;
        }

        match event {
            WindowEvent::Resized(event_size) => {
                let (vp_w, vp_h) = viewport_size(event_size);
                self.resize(vp_w, vp_h);
            }

            WindowEvent::RedrawRequested => {
                self.redraw();
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            other => {
                if let Some(input) = InputEvent::from_window_event(&other) {
                    self.dispatch(input);
                }
            }
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let Some(input) = InputEvent::from_device_event(&event) {
            self.dispatch(input);
        }
    }
}
