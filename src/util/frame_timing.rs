use web_time::{Duration, Instant};

/// Longest frame delta handed to the camera. A stall (debugger, dragged
/// window) would otherwise teleport the camera along its held keys.
const MAX_DELTA: Duration = Duration::from_millis(250);

/// Weight of the newest frame in the FPS moving average.
const FPS_SMOOTHING: f32 = 0.05;

/// Frame clock producing per-frame deltas and a smoothed FPS readout.
pub struct FrameClock {
    /// Last tick timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Start the clock now.
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            smoothed_fps: 60.0,
        }
    }

    /// Advance the clock. Returns seconds since the previous tick, capped
    /// at 250 ms.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.record(elapsed)
    }

    fn record(&mut self, elapsed: Duration) -> f32 {
        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - FPS_SMOOTHING)
                + instant_fps * FPS_SMOOTHING;
        }
        elapsed.min(MAX_DELTA).as_secs_f32()
    }

    /// Get the current FPS (smoothed)
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}
