//! CPU-side rendering geometry
//!
//! Produces triangle lists and clear colors; presenting them is up to the
//! host window.

pub mod shapes;
pub mod sketch;
pub mod vertex;

pub use shapes::{Frame, Shape, body_frame, circle, clear_frame, hello_frame, triangles};
pub use sketch::{ColorCycler, ShapeSketch};
pub use vertex::{Vertex, as_bytes, rgba};
