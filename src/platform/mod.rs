//! Platform abstraction layer
//!
//! The pieces of the outer loop that are not drawing:
//! - Frame timing (Δt and FPS reporting)
//! - Sensor samples turned into the orientation signal

pub mod clock;
pub mod sensor;

pub use clock::{FrameClock, FrameReport, FrameTick};
pub use sensor::{ScriptHandle, SensorEvent, SensorFeed, SensorKind, TiltScript};
