use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use tray_core::Scene;
use tray_renderer::RayTracer;

mod cli;
mod demo;
mod logger;

use cli::Args;
use logger::init_logger;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.clone().into());

    info!("Starting Tray");

    let scene = match &args.scene {
        Some(path) => Scene::load(path)
            .with_context(|| format!("Failed to load scene {}", path.display()))?,
        None => {
            info!("No scene file given, using the demo scene");
            demo::demo_scene()
        }
    };

    let mut engine = RayTracer::new(args.width, args.height)
        .with_flags(args.trace_flags())
        .with_trace_level(args.depth);

    engine.render(&scene);

    engine
        .framebuffer()
        .save(&args.output)
        .with_context(|| {
            format!("Failed to write image {}", args.output.display())
        })?;

    Ok(())
}
