// trail2png - Render the cursor trail offline
//
// Pipeline:
//   1. Sweep a scripted pointer along a figure-eight
//   2. Feed a few pointer moves per frame (like a fast swipe)
//   3. Step + draw into a software surface
//   4. Write each frame as PNG
//
// Usage: cargo run --bin trail2png -- <out_dir> [--width N] [--height N] [--frames N] [--seed N]

use std::env;
use std::error::Error;
use std::f32::consts::TAU;
use std::fs;
use std::path::Path;

use ambient_fx::render::RasterSurface;
use ambient_fx::{CursorTrail, FrameDriver, Input, TrailConfig};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

// Pointer events delivered between two frames
const MOVES_PER_FRAME: usize = 3;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <out_dir> [--width N] [--height N] [--frames N] [--seed N]", args[0]);
        std::process::exit(1);
    }

    // Parse arguments
    let out_dir = Path::new(&args[1]);
    let mut width = 640u32;
    let mut height = 360u32;
    let mut frames = 180usize;
    let mut seed = None;

    let mut i = 2;
    while i < args.len() {
        let value = args.get(i + 1);
        match args[i].as_str() {
            "--width" => { width = value.and_then(|s| s.parse().ok()).unwrap_or(640); i += 2; }
            "--height" => { height = value.and_then(|s| s.parse().ok()).unwrap_or(360); i += 2; }
            "--frames" => { frames = value.and_then(|s| s.parse().ok()).unwrap_or(180); i += 2; }
            "--seed" => { seed = value.and_then(|s| s.parse().ok()); i += 2; }
            _ => i += 1,
        }
    }

    fs::create_dir_all(out_dir)?;
    info!(?out_dir, width, height, frames, "rendering trail");

    let config = TrailConfig { seed, ..TrailConfig::default() };
    let mut driver = FrameDriver::new(CursorTrail::new(config), RasterSurface::new(width, height));

    // Pointer runs half the clip, then rests so the tail can fade out
    let sweep = (frames / 2).max(1);
    let steps = (sweep * MOVES_PER_FRAME) as f32;

    for f in 0..frames {
        if f < sweep {
            for m in 0..MOVES_PER_FRAME {
                let t = (f * MOVES_PER_FRAME + m) as f32 / steps;
                let (x, y) = figure_eight(t, width as f32, height as f32);
                driver.input(Input::PointerMove { x, y });
            }
        }

        driver.frame();
        debug!(frame = f, live = driver.effect().len(), "frame drawn");

        let path = out_dir.join(format!("frame_{f:04}.png"));
        driver.target().save(&path)?;
    }

    info!(frames, "done");
    Ok(())
}

/// Lissajous 1:2 curve filling the middle of the frame, t in [0, 1)
fn figure_eight(t: f32, w: f32, h: f32) -> (f32, f32) {
    let a = t * TAU;
    (w * (0.5 + 0.35 * a.sin()), h * (0.5 + 0.3 * (2.0 * a).sin()))
}
