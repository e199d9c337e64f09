//! Renders the neon "VR" logo.
//!
//! Particles are spread along the V and R letterforms, jittered, pulled
//! back towards their targets for a fixed number of noisy steps, and every
//! trajectory is stroked twice (glow, then core) onto a black canvas that
//! is written out as a PNG.

mod canvas;
mod error;
mod segments;
mod style;

use anyhow::{Context, Result};
use canvas::{Canvas, CanvasConfig};
use log::info;
use std::path::Path;
use style::LineStyle;
use trail_core::{config::SimConfig, glyph::Polyline, phases, targets::TargetSet};

const OUTPUT_PATH: &str = "vr_sharp_neon_logo.png";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = SimConfig::default();
    let mut rng = cfg.rng();

    let glyphs = [Polyline::letter_v(), Polyline::letter_r()];
    let targets = TargetSet::from_glyphs(&glyphs, cfg.particles);
    info!("placed {} targets on {} glyphs", targets.len(), glyphs.len());

    let initial = phases::scatter_phase(&targets, cfg.initial_spread, &mut rng);
    let history = phases::simulate(initial, &targets, &cfg, &mut rng)?;
    let (steps, particles) = history.shape();
    info!("simulated {particles} particles over {steps} steps");

    let lines = segments::collect(&history);

    let mut canvas = Canvas::new(CanvasConfig::default())?;
    canvas.draw_segments(&lines, &LineStyle::GLOW);
    canvas.draw_segments(&lines, &LineStyle::CORE);

    canvas
        .save(Path::new(OUTPUT_PATH))
        .with_context(|| format!("rendering {OUTPUT_PATH}"))?;

    println!("Generated {OUTPUT_PATH}");
    Ok(())
}
