//! Collision detection and response for circular bodies
//!
//! Two kinds of contact: a body against the walls of the draw surface, and a
//! body against another body. Pairs are resolved one after another in index
//! order. A cluster of three or more touching bodies is corrected pair by pair
//! with no global solve, so a later pair can partly undo an earlier one within
//! the same tick.

use glam::Vec2;

use super::state::{Body, Bounds};
use crate::clamp_axis;

/// Overlap between two bodies
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit vector from the first body's center toward the second's
    pub normal: Vec2,
    /// Distance between centers
    pub distance: f32,
    /// How far the circles interpenetrate (sum of radii - distance)
    pub overlap: f32,
}

/// Check whether two bodies overlap
///
/// Coincident centers (distance exactly zero) have no usable normal and are
/// reported as no contact.
pub fn body_contact(a: &Body, b: &Body) -> Option<Contact> {
    let delta = b.pos - a.pos;
    let distance = delta.length();
    let min_distance = a.radius() + b.radius();

    if distance < min_distance && distance > 0.0 {
        Some(Contact {
            normal: delta / distance,
            distance,
            overlap: min_distance - distance,
        })
    } else {
        None
    }
}

/// Resolve one pair of bodies
///
/// Both bodies are pushed apart by half the overlap so they end up exactly
/// touching. Velocities change only if the bodies are approaching along the
/// normal: the normal components are swapped (equal unit masses) and scaled
/// by `restitution`, tangential components are kept.
///
/// Returns the contact that was resolved, if any.
pub fn resolve_pair(a: &mut Body, b: &mut Body, restitution: f32) -> Option<Contact> {
    let contact = body_contact(a, b)?;
    let n = contact.normal;

    let push = n * (contact.overlap * 0.5);
    a.pos -= push;
    b.pos += push;

    let approaching = (b.vel - a.vel).dot(n) < 0.0;
    if approaching {
        let a_normal = n * a.vel.dot(n);
        let b_normal = n * b.vel.dot(n);
        let a_tangent = a.vel - a_normal;
        let b_tangent = b.vel - b_normal;

        a.vel = a_tangent + b_normal * restitution;
        b.vel = b_tangent + a_normal * restitution;
    }

    Some(contact)
}

/// Resolve every unordered pair `(i, j)` with `i < j`, in index order
///
/// Returns the number of pairs that were in contact.
pub fn resolve_pairs(bodies: &mut [Body], restitution: f32) -> usize {
    let mut contacts = 0;
    for i in 0..bodies.len() {
        let (head, tail) = bodies.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            if resolve_pair(a, b, restitution).is_some() {
                contacts += 1;
            }
        }
    }
    contacts
}

/// Keep a body inside the draw surface
///
/// On each axis a body past a wall is moved back onto it and its velocity on
/// that axis is reflected and scaled by `bounce`. The position is then clamped
/// into `[radius, bound - radius]` whether or not a wall was hit.
///
/// Returns true if any wall was hit.
pub fn contain_in_bounds(body: &mut Body, bounds: Bounds, bounce: f32) -> bool {
    let r = body.radius();
    let hit_x = bounce_axis(&mut body.pos.x, &mut body.vel.x, r, bounds.width, bounce);
    let hit_y = bounce_axis(&mut body.pos.y, &mut body.vel.y, r, bounds.height, bounce);
    clamp_to_bounds(body, bounds);
    hit_x || hit_y
}

/// Clamp position into the surface without touching velocity
#[inline]
pub fn clamp_to_bounds(body: &mut Body, bounds: Bounds) {
    let r = body.radius();
    body.pos.x = clamp_axis(body.pos.x, r, bounds.width - r);
    body.pos.y = clamp_axis(body.pos.y, r, bounds.height - r);
}

fn bounce_axis(pos: &mut f32, vel: &mut f32, radius: f32, bound: f32, bounce: f32) -> bool {
    if *pos - radius < 0.0 {
        *pos = radius;
        *vel = -*vel * bounce;
        true
    } else if *pos + radius > bound {
        *pos = bound - radius;
        *vel = -*vel * bounce;
        true
    } else {
        false
    }
}
