//! Monotonic frame clock

use std::time::{Duration, Instant};

use crate::consts::{FPS_REPORT_INTERVAL_MS, MAX_FRAME_DT};

/// Frames counted over one report interval
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub frames: u32,
    pub fps: f32,
}

/// Result of one clock tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTick {
    /// Seconds since the previous tick, clamped to `MAX_FRAME_DT`
    pub dt: f32,
    /// Set once per report interval
    pub report: Option<FrameReport>,
}

/// Produces Δt between frames and periodic FPS reports
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
    last: Instant,
    interval: Duration,
    window_start: Instant,
    frames: u32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(now: Instant) -> Self {
        Self {
            start: now,
            last: now,
            interval: Duration::from_millis(FPS_REPORT_INTERVAL_MS),
            window_start: now,
            frames: 0,
        }
    }

    /// Override the FPS report interval
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn tick(&mut self) -> FrameTick {
        self.tick_at(Instant::now())
    }

    /// Record a frame at `now`
    pub fn tick_at(&mut self, now: Instant) -> FrameTick {
        let dt = now
            .saturating_duration_since(self.last)
            .as_secs_f32()
            .min(MAX_FRAME_DT);
        self.last = now;
        self.frames += 1;

        let window = now.saturating_duration_since(self.window_start);
        let report = if window >= self.interval {
            let report = FrameReport {
                frames: self.frames,
                fps: self.frames as f32 / window.as_secs_f32(),
            };
            log::info!("{} frames in {:.1}s = {:.1} FPS", report.frames, window.as_secs_f32(), report.fps);
            self.frames = 0;
            self.window_start = now;
            Some(report)
        } else {
            None
        };

        FrameTick { dt, report }
    }

    /// Time since the clock started
    pub fn elapsed(&self) -> Duration {
        self.elapsed_at(Instant::now())
    }

    pub fn elapsed_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dt_between_ticks() {
        let t0 = Instant::now();
        let mut clock = FrameClock::starting_at(t0);

        let tick = clock.tick_at(t0 + Duration::from_millis(16));
        assert!((tick.dt - 0.016).abs() < 1e-6);
        assert!(tick.report.is_none());
    }

    #[test]
    fn test_dt_clamped_after_stall() {
        let t0 = Instant::now();
        let mut clock = FrameClock::starting_at(t0);

        let tick = clock.tick_at(t0 + Duration::from_secs(3));
        assert_eq!(tick.dt, MAX_FRAME_DT);
    }

    #[test]
    fn test_fps_report_after_interval() {
        let t0 = Instant::now();
        let mut clock = FrameClock::starting_at(t0).with_interval(Duration::from_secs(1));

        let mut reports = Vec::new();
        for i in 1..=120 {
            if let Some(report) = clock.tick_at(t0 + Duration::from_millis(i * 10)).report {
                reports.push(report);
            }
        }

        // 100 frames in the first second, 20 left over in the next window
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].frames, 100);
        assert!((reports[0].fps - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_elapsed() {
        let t0 = Instant::now();
        let clock = FrameClock::starting_at(t0);
        assert_eq!(clock.elapsed_at(t0 + Duration::from_secs(10)), Duration::from_secs(10));
    }
}
