//! Physics tuning
//!
//! The gravity signs and the damping/restitution constants were picked by
//! feel, so they live here as data instead of in the integrator. Stored as
//! JSON; missing fields fall back to their defaults.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::sim::Color;

/// Physics and spawn constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Forces ===
    /// Accelerometer sample -> velocity added per tick
    pub gravity_scale: f32,
    /// Sign applied to each accelerometer axis (device held face-up)
    pub gravity_axes: [f32; 2],
    /// Gyro sample * dt -> velocity nudge
    pub rotation_scale: f32,
    /// Velocity multiplier applied every tick (< 1)
    pub friction: f32,

    // === Collisions ===
    /// Wall restitution
    pub bounce: f32,
    /// Body-body restitution applied to the exchanged normal velocity
    pub restitution: f32,

    // === Spawn ===
    pub ball_count: usize,
    pub ball_radius: f32,
    /// Max speed per axis at spawn (units/tick)
    pub spawn_speed: f32,
    /// Colors assigned to bodies in spawn order, wrapping around
    pub palette: Vec<Color>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity_scale: 0.1,
            gravity_axes: [-1.0, 1.0],
            rotation_scale: 5.0,
            friction: 0.99,

            bounce: 0.8,
            restitution: 0.8,

            ball_count: 8,
            ball_radius: 40.0,
            spawn_speed: 5.0,
            palette: default_palette(),
        }
    }
}

fn default_palette() -> Vec<Color> {
    vec![
        Color::new(255, 99, 71),   // tomato
        Color::new(100, 149, 237), // cornflower blue
        Color::new(50, 205, 50),   // lime green
        Color::new(255, 215, 0),   // gold
        Color::new(186, 85, 211),  // orchid
        Color::new(64, 224, 208),  // turquoise
    ]
}

/// Smallest radius a spawned body may have
const MIN_RADIUS: f32 = 1.0;
/// Largest radius a spawned body may have
const MAX_RADIUS: f32 = 10_000.0;
/// Largest spawn speed per axis (units/tick)
const MAX_SPAWN_SPEED: f32 = 1_000.0;

impl Tuning {
    /// Parse tuning from JSON (missing fields use defaults)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load tuning from a JSON file
    ///
    /// A missing or unreadable file is not fatal: the problem is logged and
    /// the defaults are used instead.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read tuning {}: {}, using defaults", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning.sanitized()
            }
            Err(e) => {
                log::warn!("Invalid tuning in {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save tuning as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let json = self.to_json().map_err(io::Error::other)?;
        fs::write(path.as_ref(), json)?;
        log::info!("Tuning saved to {}", path.as_ref().display());
        Ok(())
    }

    /// Pull every value back into a range the integrator can work with
    ///
    /// Damping and restitution factors above 1 would add energy every tick.
    pub fn sanitized(mut self) -> Self {
        for (name, value) in [
            ("friction", &mut self.friction),
            ("bounce", &mut self.bounce),
            ("restitution", &mut self.restitution),
        ] {
            let clamped = if value.is_finite() {
                value.clamp(0.0, 1.0)
            } else {
                1.0
            };
            if clamped != *value {
                log::warn!("Tuning {} = {} out of [0, 1], using {}", name, value, clamped);
                *value = clamped;
            }
        }

        if !(self.ball_radius >= MIN_RADIUS) {
            log::warn!("Tuning ball_radius = {} too small, using {}", self.ball_radius, MIN_RADIUS);
            self.ball_radius = MIN_RADIUS;
        } else if self.ball_radius > MAX_RADIUS {
            log::warn!("Tuning ball_radius = {} too large, using {}", self.ball_radius, MAX_RADIUS);
            self.ball_radius = MAX_RADIUS;
        }

        if !(self.spawn_speed >= 0.0) {
            log::warn!("Tuning spawn_speed = {} invalid, using 0", self.spawn_speed);
            self.spawn_speed = 0.0;
        } else if self.spawn_speed > MAX_SPAWN_SPEED {
            log::warn!("Tuning spawn_speed = {} too large, using {}", self.spawn_speed, MAX_SPAWN_SPEED);
            self.spawn_speed = MAX_SPAWN_SPEED;
        }

        if self.palette.is_empty() {
            log::warn!("Tuning palette is empty, using default colors");
            self.palette = default_palette();
        }

        self
    }
}
