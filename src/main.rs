//! Tilt Balls entry point
//!
//! Runs one of the demo scenes headless (the animated ones for ten seconds at
//! ~60 Hz):
//! - `tilt-balls [balls] [tuning.json]`: bouncing balls steered by a scripted tilt
//! - `tilt-balls sketch`: random rects, lines and points with cycling colors
//! - `tilt-balls hello`: one cornflower blue frame, held for three seconds
//!
//! Frames are built exactly as a window would draw them; only presenting is
//! skipped.

use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tilt_balls::Tuning;
use tilt_balls::consts::*;
use tilt_balls::platform::{FrameClock, SensorFeed, TiltScript};
use tilt_balls::renderer::{Frame, ShapeSketch, as_bytes, body_frame, hello_frame};
use tilt_balls::sim::{Bounds, TickInput, World, tick};

/// Delay between frames (~60 FPS cap)
const FRAME_DELAY: Duration = Duration::from_millis(16);

/// Lines per sketch frame
const SKETCH_OBJECTS: usize = 50;

enum Scene {
    Balls,
    Sketch,
    Hello,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("=== Tilt Balls starting ===");

    let mut args = std::env::args().skip(1).peekable();
    let scene = match args.peek().map(String::as_str) {
        Some("sketch") => {
            args.next();
            Scene::Sketch
        }
        Some("hello") => {
            args.next();
            Scene::Hello
        }
        Some("balls") => {
            args.next();
            Scene::Balls
        }
        _ => Scene::Balls,
    };

    let seed = clock_seed();
    let bounds = Bounds::new(DEFAULT_WIDTH, DEFAULT_HEIGHT);

    match scene {
        Scene::Balls => {
            let tuning = match args.next() {
                Some(path) => Tuning::load(path),
                None => Tuning::default(),
            };
            run_balls(seed, tuning, bounds);
        }
        Scene::Sketch => run_sketch(seed, bounds),
        Scene::Hello => run_hello(),
    }

    log::info!("=== Tilt Balls exiting ===");
}

fn run_balls(seed: u64, tuning: Tuning, bounds: Bounds) {
    let mut world = World::new(seed, tuning, bounds);
    log::info!(
        "Spawned {} balls in {}x{} (seed {})",
        world.bodies.len(),
        bounds.width,
        bounds.height,
        seed
    );

    let feed = SensorFeed::new();
    let script = feed.spawn_script(TiltScript::default());

    let mut clock = FrameClock::new();
    let mut uploaded = 0usize;
    run_frames(&mut clock, |dt, report| {
        let input = TickInput {
            orientation: feed.snapshot(),
            bounds,
        };
        tick(&mut world, &input, dt);

        let frame = body_frame(&world, CIRCLE_SEGMENTS);
        uploaded += present(&frame);

        if report {
            let o = input.orientation;
            log::info!(
                "tick {}: energy {:.1}, accel ({:.2}, {:.2}), gyro ({:.2}, {:.2})",
                world.time_ticks,
                world.kinetic_energy(),
                o.accel.x,
                o.accel.y,
                o.gyro.x,
                o.gyro.y
            );
        }
    });

    script.stop();
    log::info!(
        "Ran {} ticks, built {} KiB of vertices",
        world.time_ticks,
        uploaded / 1024
    );
}

fn run_sketch(seed: u64, bounds: Bounds) {
    let mut sketch = ShapeSketch::new(seed, SKETCH_OBJECTS);
    let mut frames = 0u64;

    let mut clock = FrameClock::new();
    run_frames(&mut clock, |_dt, _report| {
        let frame = sketch.frame(bounds);
        present(&frame);
        frames += 1;
    });

    log::info!("Drew {} sketch frames", frames);
}

fn run_hello() {
    log::info!("Hello window {}x{}", HELLO_WIDTH, HELLO_HEIGHT);
    present(&hello_frame());
    thread::sleep(Duration::from_millis(HELLO_HOLD_MS));
}

/// Drive `frame` until the run duration is over
fn run_frames(clock: &mut FrameClock, mut frame: impl FnMut(f32, bool)) {
    let run_for = Duration::from_millis(RUN_DURATION_MS);
    log::info!("Entering main loop...");

    while clock.elapsed() < run_for {
        let t = clock.tick();
        frame(t.dt, t.report.is_some());
        thread::sleep(FRAME_DELAY);
    }

    log::info!("{} seconds elapsed, exiting...", run_for.as_secs());
}

/// Stand-in for a vertex buffer upload; returns the bytes handed over
fn present(frame: &Frame) -> usize {
    let bytes = as_bytes(&frame.vertices);
    log::trace!(
        "frame: {} vertices, clear {:?}",
        frame.vertices.len(),
        frame.clear
    );
    bytes.len()
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
