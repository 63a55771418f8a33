//! Random shape sketch
//!
//! Each frame scatters filled rects, lines and points over the viewport. All
//! primitives are tinted from one shared color/alpha animation that steps by
//! one unit per primitive and turns around at 0 and 255.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::shapes::{Frame, Shape, triangles};
use super::vertex::{colors, rgba};
use crate::sim::Bounds;

/// Shared color/alpha animation
///
/// Color and alpha move with the same direction; whichever hits a limit first
/// turns both around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorCycler {
    pub cycle_color: bool,
    pub cycle_alpha: bool,
    direction: i32,
    color: i32,
    alpha: i32,
}

impl Default for ColorCycler {
    fn default() -> Self {
        Self {
            cycle_color: true,
            cycle_alpha: true,
            direction: 1,
            color: 255,
            alpha: 255,
        }
    }
}

impl ColorCycler {
    /// Step the animation once and return the tint for the next primitive
    pub fn advance(&mut self) -> [f32; 4] {
        if self.cycle_color {
            self.color = self.bump(self.color);
        }
        if self.cycle_alpha {
            self.alpha = self.bump(self.alpha);
        }
        self.tint()
    }

    /// Current tint: full red, green and blue following the color channel
    pub fn tint(&self) -> [f32; 4] {
        let c = self.color as f32 / 255.0;
        [1.0, c, c, self.alpha as f32 / 255.0]
    }

    pub fn color(&self) -> u8 {
        self.color as u8
    }

    pub fn alpha(&self) -> u8 {
        self.alpha as u8
    }

    fn bump(&mut self, value: i32) -> i32 {
        let next = value + self.direction;
        if next < 0 {
            self.direction = -self.direction;
            0
        } else if next > 255 {
            self.direction = -self.direction;
            255
        } else {
            next
        }
    }
}

/// Seeded generator for the shape sketch
#[derive(Debug, Clone)]
pub struct ShapeSketch {
    rng: Pcg32,
    pub cycler: ColorCycler,
    /// Lines per frame; rects get a quarter of this, points four times it
    pub object_count: usize,
}

impl ShapeSketch {
    pub fn new(seed: u64, object_count: usize) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            cycler: ColorCycler::default(),
            object_count,
        }
    }

    /// Primitives for one frame: rects, then lines, then points
    pub fn shapes(&mut self, viewport: Bounds) -> Vec<Shape> {
        let w = viewport.width as i32;
        let h = viewport.height as i32;
        let mut shapes = Vec::with_capacity(self.object_count * 6 + 4);

        self.rects(w, h, &mut shapes);
        self.lines(w, h, &mut shapes);
        self.points(w, h, &mut shapes);

        shapes
    }

    /// A full frame, lowered to triangles
    pub fn frame(&mut self, viewport: Bounds) -> Frame {
        let shapes = self.shapes(viewport);
        Frame {
            clear: rgba(colors::SKETCH_BACKGROUND, 255),
            vertices: triangles(&shapes),
        }
    }

    fn rects(&mut self, w: i32, h: i32, out: &mut Vec<Shape>) {
        for _ in 0..self.object_count / 4 {
            let color = self.cycler.advance();
            let size = Vec2::new(self.below(h / 2) as f32, self.below(h / 2) as f32);
            let x = (self.below(w * 2) - w) as f32 - size.x / 2.0;
            let y = (self.below(h * 2) - h) as f32 - size.y / 2.0;
            out.push(Shape::Rect {
                min: Vec2::new(x, y),
                size,
                color,
            });
        }
    }

    fn lines(&mut self, w: i32, h: i32, out: &mut Vec<Shape>) {
        let (right, bottom) = ((w - 1) as f32, (h - 1) as f32);
        let (mid_x, mid_y) = ((w / 2) as f32, (h / 2) as f32);

        for i in 0..self.object_count {
            let color = self.cycler.advance();
            if i == 0 {
                // Diagonals and center lines, one tint for all four
                for (from, to) in [
                    (Vec2::ZERO, Vec2::new(right, bottom)),
                    (Vec2::new(0.0, bottom), Vec2::new(right, 0.0)),
                    (Vec2::new(0.0, mid_y), Vec2::new(right, mid_y)),
                    (Vec2::new(mid_x, 0.0), Vec2::new(mid_x, bottom)),
                ] {
                    out.push(Shape::Line { from, to, color });
                }
            } else {
                let x1 = (self.below(w * 2) - w) as f32;
                let x2 = (self.below(w * 2) - w) as f32;
                let y1 = (self.below(h * 2) - h) as f32;
                let y2 = (self.below(h * 2) - h) as f32;
                out.push(Shape::Line {
                    from: Vec2::new(x1, y1),
                    to: Vec2::new(x2, y2),
                    color,
                });
            }
        }
    }

    fn points(&mut self, w: i32, h: i32, out: &mut Vec<Shape>) {
        for _ in 0..self.object_count * 4 {
            let color = self.cycler.advance();
            let pos = Vec2::new(self.below(w) as f32, self.below(h) as f32);
            out.push(Shape::Point { pos, color });
        }
    }

    /// Uniform in `[0, n)`, or 0 for an empty range
    fn below(&mut self, n: i32) -> i32 {
        if n > 0 { self.rng.random_range(0..n) } else { 0 }
    }
}
