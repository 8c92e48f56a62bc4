//! Command-line argument parsing for the map generator.

use std::path::PathBuf;

use clap::Parser;
use mapgen_terrain::Command;

use crate::Config;

/// Map generator command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "mapgen", about = "Chunked biome map generator")]
pub struct CliArgs {
    /// Seed text.
    #[arg(long)]
    pub seed: Option<String>,

    /// Chunk side length in cells.
    #[arg(long)]
    pub chunk_size: Option<i32>,

    /// Row stride of packed cell ids.
    #[arg(long)]
    pub map_width: Option<i32>,

    /// Global noise scale multiplier.
    #[arg(long)]
    pub scale: Option<f64>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Output PNG path.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Commands to apply in order before rendering (north, south, east,
    /// west, rebuild). Repeatable.
    #[arg(long = "pan", value_name = "COMMAND")]
    pub commands: Vec<Command>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref seed) = args.seed {
            self.generation.seed = seed.clone();
        }
        if let Some(size) = args.chunk_size {
            self.generation.chunk_size = size;
        }
        if let Some(width) = args.map_width {
            self.generation.map_width = width;
        }
        if let Some(scale) = args.scale {
            self.generation.scale = scale;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
        if let Some(ref path) = args.output {
            self.output.image_path = path.clone();
        }
    }
}
