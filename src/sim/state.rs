//! Simulation state and core types
//!
//! Everything the integrator reads or writes lives here and is owned by the
//! caller. Nothing is global.

use glam::Vec2;
use rand::distr::Uniform;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// 8-bit RGB color, cosmetic only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A circular rigid body
///
/// Radius and color are fixed at creation; position and velocity are
/// rewritten every tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    /// Velocity in units per tick
    pub vel: Vec2,
    radius: f32,
    color: Color,
}

impl Body {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, color: Color) -> Self {
        Self {
            pos,
            vel,
            radius,
            color,
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// True if the body lies fully inside `bounds` (within `eps`)
    pub fn is_contained(&self, bounds: Bounds, eps: f32) -> bool {
        let lo = Vec2::splat(self.radius - eps);
        let hi = bounds.size() - Vec2::splat(self.radius - eps);
        self.pos.cmpge(lo).all() && self.pos.cmple(hi).all()
    }
}

/// Environment orientation signal
///
/// `accel` is the linear acceleration proxy, `gyro` the angular-rate proxy.
/// Written by the sensor feed, only read by the integrator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
    pub accel: Vec2,
    pub gyro: Vec2,
}

impl Orientation {
    pub const LEVEL: Orientation = Orientation {
        accel: Vec2::ZERO,
        gyro: Vec2::ZERO,
    };
}

/// Draw surface size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    /// Spawn seed for reproducibility
    pub seed: u64,
    /// Physics constants in effect
    pub tuning: Tuning,
    /// Bodies, resolved pairwise in index order
    pub bodies: Vec<Body>,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl World {
    /// Spawn `tuning.ball_count` bodies at random inside `bounds`
    ///
    /// Colors cycle through the tuning palette in spawn order.
    pub fn new(seed: u64, tuning: Tuning, bounds: Bounds) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let r = tuning.ball_radius;
        let speed = tuning.spawn_speed;

        let bodies = (0..tuning.ball_count)
            .map(|i| {
                let pos = Vec2::new(
                    random_in(&mut rng, r, bounds.width - r),
                    random_in(&mut rng, r, bounds.height - r),
                );
                let vel = Vec2::new(
                    random_in(&mut rng, -speed, speed),
                    random_in(&mut rng, -speed, speed),
                );
                let color = palette_color(&tuning.palette, i);
                Body::new(pos, vel, r, color)
            })
            .collect();

        log::debug!(
            "Spawned {} bodies (seed {}, bounds {}x{})",
            tuning.ball_count,
            seed,
            bounds.width,
            bounds.height
        );

        Self {
            seed,
            tuning,
            bodies,
            time_ticks: 0,
        }
    }

    /// Build a world from explicit bodies (scenarios, tests)
    pub fn with_bodies(tuning: Tuning, bodies: Vec<Body>) -> Self {
        Self {
            seed: 0,
            tuning,
            bodies,
            time_ticks: 0,
        }
    }

    /// Sum of ½|v|² over all bodies (implicit unit mass)
    pub fn kinetic_energy(&self) -> f32 {
        self.bodies
            .iter()
            .map(|b| 0.5 * b.vel.length_squared())
            .sum()
    }
}

/// Uniform sample from `[lo, hi)`, or `lo` when the range is empty or too
/// wide to represent
fn random_in(rng: &mut Pcg32, lo: f32, hi: f32) -> f32 {
    match Uniform::new(lo, hi) {
        Ok(dist) => rng.sample(dist),
        Err(_) => lo,
    }
}

fn palette_color(palette: &[Color], index: usize) -> Color {
    if palette.is_empty() {
        Color::WHITE
    } else {
        palette[index % palette.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_inside_bounds() {
        let bounds = Bounds::new(800.0, 600.0);
        let world = World::new(42, Tuning::default(), bounds);

        assert_eq!(world.bodies.len(), Tuning::default().ball_count);
        for body in &world.bodies {
            assert!(body.is_contained(bounds, 0.0), "spawned outside: {:?}", body);
            assert!(body.vel.x.abs() <= world.tuning.spawn_speed);
            assert!(body.vel.y.abs() <= world.tuning.spawn_speed);
        }
    }

    #[test]
    fn test_spawn_colors_cycle() {
        let tuning = Tuning {
            ball_count: 5,
            palette: vec![Color::new(255, 0, 0), Color::new(0, 255, 0)],
            ..Default::default()
        };
        let world = World::new(7, tuning, Bounds::new(800.0, 600.0));

        let colors: Vec<Color> = world.bodies.iter().map(Body::color).collect();
        assert_eq!(colors[0], colors[2]);
        assert_eq!(colors[1], colors[3]);
        assert_eq!(colors[0], colors[4]);
        assert_ne!(colors[0], colors[1]);
    }

    #[test]
    fn test_spawn_same_seed_same_world() {
        let bounds = Bounds::new(640.0, 480.0);
        let a = World::new(1234, Tuning::default(), bounds);
        let b = World::new(1234, Tuning::default(), bounds);
        let c = World::new(1235, Tuning::default(), bounds);

        assert_eq!(a, b);
        assert_ne!(a.bodies, c.bodies);
    }

    #[test]
    fn test_spawn_in_narrow_bounds_does_not_panic() {
        // Surface narrower than a ball: every body pinned to the radius
        let world = World::new(3, Tuning::default(), Bounds::new(50.0, 50.0));
        for body in &world.bodies {
            assert_eq!(body.pos, Vec2::splat(body.radius()));
        }
    }

    #[test]
    fn test_huge_spawn_speed_from_json() {
        let tuning = Tuning::from_json(r#"{ "spawn_speed": 3e38 }"#)
            .expect("parse")
            .sanitized();
        let bounds = Bounds::new(800.0, 600.0);
        let world = World::new(1, tuning, bounds);

        for body in &world.bodies {
            assert!(body.vel.is_finite());
            assert!(body.is_contained(bounds, 0.0));
        }
    }

    #[test]
    fn test_unrepresentable_range_falls_back_to_low() {
        let mut rng = Pcg32::seed_from_u64(5);
        assert_eq!(random_in(&mut rng, -3e38, 3e38), -3e38);
        assert_eq!(random_in(&mut rng, 2.0, 1.0), 2.0);
    }

    #[test]
    fn test_empty_palette_falls_back_to_white() {
        let tuning = Tuning {
            palette: Vec::new(),
            ..Default::default()
        };
        let world = World::new(9, tuning, Bounds::new(800.0, 600.0));
        assert!(world.bodies.iter().all(|b| b.color() == Color::WHITE));
    }

    #[test]
    fn test_kinetic_energy() {
        let world = World::with_bodies(
            Tuning::default(),
            vec![
                Body::new(Vec2::ZERO, Vec2::new(3.0, 4.0), 1.0, Color::WHITE),
                Body::new(Vec2::ZERO, Vec2::new(0.0, 2.0), 1.0, Color::WHITE),
            ],
        );
        assert!((world.kinetic_energy() - 14.5).abs() < 1e-5);
    }
}
