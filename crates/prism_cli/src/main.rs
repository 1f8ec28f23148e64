use anyhow::{Context, Result};
use clap::Parser;
use prism_core::load_scene;
use prism_renderer::Renderer;

mod cli;

use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level.into())
        .parse_default_env()
        .init();

    log::info!("Starting Prism");

    let scene = load_scene(&args.scene)
        .with_context(|| format!("Failed to load scene {}", args.scene.display()))?;

    let renderer = Renderer::with_config(args.render_config()).context("Invalid render settings")?;

    let image = if args.parallel {
        renderer.render_parallel(&scene)
    } else {
        renderer.render(&scene)
    };

    image
        .save(&args.output)
        .with_context(|| format!("Failed to save image to {}", args.output.display()))?;

    log::info!("Saved {}", args.output.display());
    Ok(())
}
