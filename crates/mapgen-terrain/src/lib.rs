//! Chunked biome map generation: seeded noise fields, altitude bands, and a
//! 3×3 chunk window rebuilt on every pan or seed change.

mod cache;
mod command;
mod coords;
mod generator;
mod noise_field;
mod view;

pub mod biome;
pub mod debug_viz;
pub mod seed;

pub use biome::{AltitudeBand, BandRule, BandTable, Category, ClassifierError, classify};
pub use cache::WorldCache;
pub use command::{Command, ParseCommandError};
pub use coords::{CellId, ChunkPos, ChunkedCoordinate};
pub use generator::{
    CellRenderer, DisplayCell, FieldSettings, GeneratorError, GeneratorSettings, GeneratorState,
};
pub use noise::NoiseFn;
pub use noise_field::{NoiseAlgorithm, NoiseField, SourceFactory};
pub use seed::{fold_seed, hash_seed};
pub use view::{Direction, ViewWindow, WINDOW_RADIUS, WINDOW_SPAN};
