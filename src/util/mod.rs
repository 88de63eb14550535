//! Shared utilities.

/// Per-frame delta time and FPS tracking.
pub mod frame_timing;

pub use frame_timing::FrameClock;
