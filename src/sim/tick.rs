//! Per-tick integration
//!
//! One call advances every body by one frame:
//! 1. forces from the orientation signal, damping, Euler position step
//! 2. wall containment
//! 3. pairwise collisions, then containment is re-asserted

use glam::Vec2;

use super::collision::{clamp_to_bounds, contain_in_bounds, resolve_pairs};
use super::state::{Body, Bounds, Orientation, World};
use crate::tuning::Tuning;

/// Inputs for a single tick, sampled by the caller
#[derive(Debug, Clone, Copy)]
pub struct TickInput {
    /// Orientation snapshot taken at the start of the tick
    pub orientation: Orientation,
    /// Current draw surface
    pub bounds: Bounds,
}

impl TickInput {
    pub fn level(bounds: Bounds) -> Self {
        Self {
            orientation: Orientation::LEVEL,
            bounds,
        }
    }
}

/// Advance the world by one tick
///
/// `dt` is the wall-clock time since the previous tick in seconds. It only
/// scales the gyro nudge; gravity and position are stepped once per tick.
pub fn tick(world: &mut World, input: &TickInput, dt: f32) {
    let tuning = &world.tuning;
    let gravity = gravity_from(&input.orientation, tuning);

    for body in &mut world.bodies {
        apply_forces(body, gravity, input.orientation.gyro, dt, tuning);
        contain_in_bounds(body, input.bounds, tuning.bounce);
    }

    let contacts = resolve_pairs(&mut world.bodies, tuning.restitution);

    // A pair push can shove a body back through a wall
    for body in &mut world.bodies {
        clamp_to_bounds(body, input.bounds);
    }

    world.time_ticks += 1;
    if contacts > 0 {
        log::trace!("tick {}: {} contacts", world.time_ticks, contacts);
    }
}

/// Value-style wrapper around [`tick`]
pub fn step(world: &World, input: &TickInput, dt: f32) -> World {
    let mut next = world.clone();
    tick(&mut next, input, dt);
    next
}

/// Gravity vector for one tick, in velocity units
pub fn gravity_from(orientation: &Orientation, tuning: &Tuning) -> Vec2 {
    orientation.accel * Vec2::from(tuning.gravity_axes) * tuning.gravity_scale
}

/// Step 1 for a single body: gyro nudge, gravity, damping, position
pub fn apply_forces(body: &mut Body, gravity: Vec2, gyro: Vec2, dt: f32, tuning: &Tuning) {
    let spin = dt * tuning.rotation_scale;
    body.vel.x -= gyro.y * spin;
    body.vel.y += gyro.x * spin;

    body.vel += gravity;
    body.vel *= tuning.friction;
    body.pos += body.vel;
}
