//! Sensor feed
//!
//! Accelerometer and gyroscope samples arrive on whatever thread the platform
//! delivers them on. The integrator reads the latest pair once per tick. Both
//! vectors sit behind one lock so a snapshot never mixes an old accel with a
//! new gyro half-way through an update.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use glam::Vec2;

use crate::sim::Orientation;

/// Which sensor produced a sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorKind {
    Accelerometer,
    Gyroscope,
    /// Anything else the platform reports; ignored
    Other,
}

/// One raw sensor sample (channel 0 = x, channel 1 = y)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorEvent {
    pub kind: SensorKind,
    pub data: [f32; 3],
}

impl SensorEvent {
    pub fn new(kind: SensorKind, data: [f32; 3]) -> Self {
        Self { kind, data }
    }

    /// Build from a variable-length channel slice
    ///
    /// Samples with fewer than two channels carry no usable x/y.
    pub fn from_channels(kind: SensorKind, channels: &[f32]) -> Option<Self> {
        match channels {
            [x, y, rest @ ..] => Some(Self {
                kind,
                data: [*x, *y, rest.first().copied().unwrap_or(0.0)],
            }),
            _ => None,
        }
    }

    #[inline]
    fn xy(&self) -> Vec2 {
        Vec2::new(self.data[0], self.data[1])
    }
}

/// Shared, thread-safe orientation signal
#[derive(Debug, Clone, Default)]
pub struct SensorFeed {
    shared: Arc<Mutex<Orientation>>,
}

impl SensorFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a sample into the orientation
    ///
    /// Returns false for samples from sensors the integrator doesn't use.
    pub fn apply(&self, event: &SensorEvent) -> bool {
        let mut orientation = self.lock();
        match event.kind {
            SensorKind::Accelerometer => orientation.accel = event.xy(),
            SensorKind::Gyroscope => orientation.gyro = event.xy(),
            SensorKind::Other => return false,
        }
        true
    }

    /// Replace both vectors at once
    pub fn publish(&self, orientation: Orientation) {
        *self.lock() = orientation;
    }

    /// Copy of the latest orientation
    pub fn snapshot(&self) -> Orientation {
        *self.lock()
    }

    /// Start a producer thread that replays `script` until stopped
    pub fn spawn_script(&self, script: TiltScript) -> ScriptHandle {
        let feed = self.clone();
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = stop.clone();

        let thread = thread::spawn(move || {
            let start = Instant::now();
            while !stop_flag.load(Ordering::Relaxed) {
                let t = start.elapsed().as_secs_f32();
                for event in script.sample(t) {
                    feed.apply(&event);
                }
                thread::sleep(script.period);
            }
            log::debug!("Sensor script stopped");
        });

        ScriptHandle {
            stop,
            thread: Some(thread),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Orientation> {
        // Orientation is plain data, so a panicked writer leaves nothing half-built
        self.shared.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Synthetic tilt: the device swings in a slow circle while rocking
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltScript {
    /// Peak accelerometer reading (m/s²)
    pub magnitude: f32,
    /// Angular speed of the swing (rad/s)
    pub rate: f32,
    /// Peak gyro reading (rad/s)
    pub wobble: f32,
    /// Delay between samples
    pub period: Duration,
}

impl Default for TiltScript {
    fn default() -> Self {
        Self {
            magnitude: 9.8,
            rate: 0.6,
            wobble: 0.5,
            period: Duration::from_millis(10),
        }
    }
}

impl TiltScript {
    /// Accelerometer and gyroscope samples at `t` seconds
    pub fn sample(&self, t: f32) -> [SensorEvent; 2] {
        let phase = t * self.rate;
        let accel = Vec2::from_angle(phase) * self.magnitude;
        // Gyro is the rate of change of the tilt direction
        let gyro = Vec2::new(-phase.sin(), phase.cos()) * self.wobble;

        [
            SensorEvent::new(SensorKind::Accelerometer, [accel.x, accel.y, 0.0]),
            SensorEvent::new(SensorKind::Gyroscope, [gyro.x, gyro.y, 0.0]),
        ]
    }
}

/// Stops the producer thread when dropped
#[derive(Debug)]
pub struct ScriptHandle {
    stop: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl ScriptHandle {
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                log::error!("Sensor script thread panicked");
            }
        }
    }
}

impl Drop for ScriptHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_channels() {
        let feed = SensorFeed::new();

        assert!(feed.apply(&SensorEvent::new(SensorKind::Accelerometer, [1.0, 2.0, 9.8])));
        assert!(feed.apply(&SensorEvent::new(SensorKind::Gyroscope, [0.1, -0.2, 0.3])));

        let o = feed.snapshot();
        assert_eq!(o.accel, Vec2::new(1.0, 2.0));
        assert_eq!(o.gyro, Vec2::new(0.1, -0.2));
    }

    #[test]
    fn test_other_sensors_ignored() {
        let feed = SensorFeed::new();
        assert!(!feed.apply(&SensorEvent::new(SensorKind::Other, [5.0, 5.0, 5.0])));
        assert_eq!(feed.snapshot(), Orientation::LEVEL);
    }

    #[test]
    fn test_from_channels() {
        let event = SensorEvent::from_channels(SensorKind::Gyroscope, &[1.0, 2.0]).expect("two channels");
        assert_eq!(event.data, [1.0, 2.0, 0.0]);
        assert!(SensorEvent::from_channels(SensorKind::Gyroscope, &[1.0]).is_none());
    }

    #[test]
    fn test_clones_share_state() {
        let feed = SensorFeed::new();
        let writer = feed.clone();
        writer.publish(Orientation {
            accel: Vec2::new(3.0, 4.0),
            gyro: Vec2::ONE,
        });
        assert_eq!(feed.snapshot().accel, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_snapshots_never_torn() {
        // Writer always publishes accel == gyro; a torn read would differ
        let feed = SensorFeed::new();
        let writer = feed.clone();
        let handle = thread::spawn(move || {
            for i in 0..10_000 {
                let v = Vec2::splat(i as f32);
                writer.publish(Orientation { accel: v, gyro: v });
            }
        });

        for _ in 0..10_000 {
            let o = feed.snapshot();
            assert_eq!(o.accel, o.gyro);
        }
        handle.join().expect("writer thread");
    }

    #[test]
    fn test_script_sample() {
        let script = TiltScript::default();
        let [accel, gyro] = script.sample(0.0);

        assert_eq!(accel.kind, SensorKind::Accelerometer);
        assert!((accel.data[0] - 9.8).abs() < 1e-5);
        assert!(accel.data[1].abs() < 1e-5);
        assert_eq!(gyro.kind, SensorKind::Gyroscope);
        assert!((gyro.data[1] - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_script_thread_publishes_and_stops() {
        let feed = SensorFeed::new();
        let handle = feed.spawn_script(TiltScript {
            period: Duration::from_millis(1),
            ..Default::default()
        });

        let deadline = Instant::now() + Duration::from_secs(5);
        while feed.snapshot() == Orientation::LEVEL && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(1));
        }
        handle.stop();

        assert_ne!(feed.snapshot(), Orientation::LEVEL);
    }
}
