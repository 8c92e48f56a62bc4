//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use mapgen_terrain::{BandTable, ChunkPos, FieldSettings, GeneratorSettings, NoiseAlgorithm};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name of the persisted config inside the config directory.
pub const CONFIG_FILE: &str = "config.ron";

/// Top-level map generator configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Seed, chunking and window settings.
    pub generation: GenerationConfig,
    /// Altitude noise field.
    pub altitude: NoiseFieldConfig,
    /// Temperature noise field.
    pub temperature: NoiseFieldConfig,
    /// Classification band table.
    pub bands: BandTable,
    /// Image output settings.
    pub output: OutputConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Seed, chunking and window configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GenerationConfig {
    /// Seed text hashed into the world seed.
    pub seed: String,
    /// Chunk side length in cells.
    pub chunk_size: i32,
    /// Row stride of packed cell ids (at least 3 × `chunk_size`).
    pub map_width: i32,
    /// Global multiplier on both field scales.
    pub scale: f64,
    /// Initial window center, as `(chunk_x, chunk_y)`.
    pub start_chunk: (i32, i32),
}

/// One noise field: algorithm family and base coordinate scale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NoiseFieldConfig {
    /// Noise family.
    pub algorithm: NoiseAlgorithm,
    /// Base coordinate scale.
    pub scale: f64,
}

/// Debug image output configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Pixels per cell side.
    pub cell_size: u32,
    /// Where the rendered window is written.
    pub image_path: PathBuf,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for Config {
    fn default() -> Self {
        Self {
            generation: GenerationConfig::default(),
            altitude: NoiseFieldConfig::altitude(),
            temperature: NoiseFieldConfig::temperature(),
            bands: BandTable::default(),
            output: OutputConfig::default(),
            debug: DebugConfig::default(),
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            seed: "map-generation".to_string(),
            chunk_size: 40,
            map_width: 120,
            scale: 1.0,
            start_chunk: (1, 1),
        }
    }
}

impl NoiseFieldConfig {
    /// Default altitude field: fine-grained value noise.
    pub fn altitude() -> Self {
        Self {
            algorithm: NoiseAlgorithm::Value,
            scale: 0.1,
        }
    }

    /// Default temperature field: broad OpenSimplex features.
    pub fn temperature() -> Self {
        Self {
            algorithm: NoiseAlgorithm::OpenSimplex,
            scale: 0.01,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            cell_size: 10,
            image_path: PathBuf::from("map.png"),
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Conversion ---

impl Config {
    /// Settings for building a generator from this config.
    pub fn generator_settings(&self) -> GeneratorSettings {
        let (cx, cy) = self.generation.start_chunk;
        GeneratorSettings {
            seed: self.generation.seed.clone(),
            chunk_size: self.generation.chunk_size,
            map_width: self.generation.map_width,
            scale: self.generation.scale,
            start_chunk: ChunkPos::new(cx, cy),
            altitude: FieldSettings {
                algorithm: self.altitude.algorithm,
                scale: self.altitude.scale,
            },
            temperature: FieldSettings {
                algorithm: self.temperature.algorithm,
                scale: self.temperature.scale,
            },
            bands: self.bands.clone(),
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = Self::read(&config_dir.join(CONFIG_FILE))?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
        config.bands.validate().map_err(ConfigError::InvalidBands)?;
        Ok(config)
    }
}

/// Default config directory (`<platform config dir>/mapgen`), falling back
/// to the working directory.
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("mapgen"))
        .unwrap_or_else(|| PathBuf::from("."))
}
