//! Headless demo that generates a biome window and writes it as a PNG.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p mapgen-demo -- --seed daniele` to render a window.
//! Run with `cargo run -p mapgen-demo -- --pan east --pan east` to scroll first.

use std::error::Error;

use clap::Parser;
use mapgen_config::{CliArgs, Config, default_config_dir};
use mapgen_terrain::GeneratorState;
use mapgen_terrain::debug_viz::{category_histogram, render_window_image};
use tracing::{info, warn};

fn main() -> Result<(), Box<dyn Error>> {
    let args = CliArgs::parse();

    // Resolve config directory
    let config_dir = args.config.clone().unwrap_or_else(default_config_dir);

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    mapgen_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    let mut state = GeneratorState::new(config.generator_settings())?;
    info!(
        seed_text = state.seed_text(),
        seed = state.seed(),
        center = %state.center(),
        "generator ready"
    );

    for command in &args.commands {
        state.execute(*command);
        info!(%command, center = %state.center(), "applied command");
    }

    for (category, count) in category_histogram(&state) {
        info!(%category, count, "category coverage");
    }

    if config.output.cell_size == 0 {
        warn!("output.cell_size is 0, skipping image output");
        return Ok(());
    }

    let image = render_window_image(&state, config.output.cell_size)?;
    image.save_png(&config.output.image_path)?;
    info!(
        path = %config.output.image_path.display(),
        width = image.width,
        height = image.height,
        "wrote window image"
    );

    Ok(())
}
