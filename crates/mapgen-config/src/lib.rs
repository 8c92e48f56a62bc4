//! Configuration for the map generator.
//!
//! Settings persist to disk as RON, can be overridden from the command line
//! via clap, and support hot-reload detection. Every section falls back to
//! defaults when missing.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CONFIG_FILE, Config, DebugConfig, GenerationConfig, NoiseFieldConfig, OutputConfig,
    default_config_dir,
};
pub use error::ConfigError;
