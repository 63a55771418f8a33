//! Tilt Balls - bouncing circles steered by device tilt
//!
//! Core modules:
//! - `sim`: Deterministic simulation (integration, walls, pairwise collisions)
//! - `tuning`: Data-driven physics constants
//! - `platform`: Frame clock and sensor feed
//! - `renderer`: CPU-side geometry for whatever draws the frame

pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use sim::{Body, Bounds, Color, Orientation, TickInput, World, step, tick};
pub use tuning::Tuning;

/// Runner configuration constants
pub mod consts {
    /// Nominal frame time (~60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;
    /// Largest Δt handed to the integrator after a stall
    pub const MAX_FRAME_DT: f32 = 0.1;
    /// How often the frame clock reports FPS (milliseconds)
    pub const FPS_REPORT_INTERVAL_MS: u64 = 5000;
    /// How long the headless runner plays before exiting (milliseconds)
    pub const RUN_DURATION_MS: u64 = 10_000;

    /// Default draw surface
    pub const DEFAULT_WIDTH: f32 = 800.0;
    pub const DEFAULT_HEIGHT: f32 = 600.0;

    /// Hello window size and how long it stays up (milliseconds)
    pub const HELLO_WIDTH: f32 = 640.0;
    pub const HELLO_HEIGHT: f32 = 480.0;
    pub const HELLO_HOLD_MS: u64 = 3000;

    /// Segments per filled circle in the body draw list
    pub const CIRCLE_SEGMENTS: u32 = 32;
}

/// Clamp `value` into `[lo, hi]` without panicking when `lo > hi`
///
/// Bounds narrower than a body's diameter collapse to `lo`.
#[inline]
pub fn clamp_axis(value: f32, lo: f32, hi: f32) -> f32 {
    value.max(lo).min(hi.max(lo))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_axis() {
        assert_eq!(clamp_axis(-5.0, 40.0, 760.0), 40.0);
        assert_eq!(clamp_axis(800.0, 40.0, 760.0), 760.0);
        assert_eq!(clamp_axis(100.0, 40.0, 760.0), 100.0);
        // Degenerate range never panics
        assert_eq!(clamp_axis(10.0, 50.0, 30.0), 50.0);
    }
}
