//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - State is passed in explicitly, no globals
//! - Seeded RNG only
//! - Stable iteration order (by body index)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Contact, body_contact, contain_in_bounds, resolve_pair, resolve_pairs};
pub use state::{Body, Bounds, Color, Orientation, World};
pub use tick::{TickInput, apply_forces, step, tick};
