//! Generator state: owns the seed, both noise fields, the view window and
//! the world cache, and keeps them in sync.
//!
//! Every operation is synchronous. Pans and seed updates rebuild the whole
//! window before returning, so the cache never lags the view.

use std::time::Instant;

use tracing::{debug, info, trace};

use crate::biome::{BandTable, Category, ClassifierError};
use crate::cache::WorldCache;
use crate::command::Command;
use crate::coords::{CellId, ChunkPos, ChunkedCoordinate};
use crate::noise_field::{NoiseAlgorithm, NoiseField};
use crate::seed::hash_seed;
use crate::view::{Direction, ViewWindow, WINDOW_SPAN};

/// Algorithm and base scale of one noise field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldSettings {
    /// Noise family.
    pub algorithm: NoiseAlgorithm,
    /// Coordinate multiplier before the global scale is applied.
    pub scale: f64,
}

/// Everything needed to build a [`GeneratorState`].
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorSettings {
    /// Seed text, hashed into the world seed.
    pub seed: String,
    /// Chunk side length in cells.
    pub chunk_size: i32,
    /// Row stride of packed cell ids. Must be at least `3 * chunk_size`.
    pub map_width: i32,
    /// Global multiplier applied to both field scales.
    pub scale: f64,
    /// Initial window center.
    pub start_chunk: ChunkPos,
    /// Altitude field.
    pub altitude: FieldSettings,
    /// Temperature field.
    pub temperature: FieldSettings,
    /// Classification bands.
    pub bands: BandTable,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            seed: "map-generation".to_string(),
            chunk_size: 40,
            map_width: 120,
            scale: 1.0,
            start_chunk: ChunkPos::new(1, 1),
            altitude: FieldSettings {
                algorithm: NoiseAlgorithm::Value,
                scale: 0.1,
            },
            temperature: FieldSettings {
                algorithm: NoiseAlgorithm::OpenSimplex,
                scale: 0.01,
            },
            bands: BandTable::default(),
        }
    }
}

/// Errors raised when constructing a generator from settings.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum GeneratorError {
    /// Chunk size must be positive.
    #[error("chunk size must be positive, got {0}")]
    ZeroChunkSize(i32),
    /// Map width cannot hold a full window row without id collisions.
    #[error("map width {map_width} is smaller than the window span {required}")]
    MapWidthTooSmall {
        /// Configured width.
        map_width: i32,
        /// Minimum width for this chunk size.
        required: i32,
    },
    /// A scale factor is zero, negative, or not finite.
    #[error("scale must be positive and finite, got {0}")]
    InvalidScale(f64),
    /// The band table is malformed.
    #[error(transparent)]
    Classifier(#[from] ClassifierError),
}

/// A cell of the visible window, positioned in window-local display
/// coordinates (origin at the window's lowest corner).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayCell {
    /// Display column.
    pub x: i32,
    /// Display row.
    pub y: i32,
    /// Cell category.
    pub category: Category,
}

/// Something that can paint a rectangular cell region in one category.
pub trait CellRenderer {
    /// Fill `width × height` cells starting at display `(x, y)`.
    fn fill_area(&mut self, category: Category, x: i32, y: i32, width: i32, height: i32);
}

/// The complete, caller-owned state of one map generator.
#[derive(Debug)]
pub struct GeneratorState {
    seed_text: String,
    seed: u64,
    coords: ChunkedCoordinate,
    altitude: NoiseField,
    temperature: NoiseField,
    bands: BandTable,
    view: ViewWindow,
    cache: WorldCache,
}

impl GeneratorState {
    /// Validate `settings`, derive the seed, and build the initial window.
    ///
    /// # Errors
    ///
    /// Returns a [`GeneratorError`] if the chunk size, map width, scales or
    /// band table are invalid.
    pub fn new(settings: GeneratorSettings) -> Result<Self, GeneratorError> {
        Self::validate(&settings)?;
        let seed = hash_seed(&settings.seed);
        let altitude = NoiseField::new(
            settings.altitude.algorithm,
            settings.altitude.scale * settings.scale,
            seed,
        );
        let temperature = NoiseField::new(
            settings.temperature.algorithm,
            settings.temperature.scale * settings.scale,
            seed,
        );
        Ok(Self::assemble(settings, seed, altitude, temperature))
    }

    /// Build a generator around caller-supplied noise fields.
    ///
    /// The fields' own scales are kept and the `altitude`/`temperature`
    /// sections of `settings` are ignored. Both fields are reseeded from
    /// `settings.seed`.
    ///
    /// # Errors
    ///
    /// Same as [`GeneratorState::new`].
    pub fn with_fields(
        settings: GeneratorSettings,
        mut altitude: NoiseField,
        mut temperature: NoiseField,
    ) -> Result<Self, GeneratorError> {
        Self::validate(&settings)?;
        let seed = hash_seed(&settings.seed);
        altitude.update_seed(seed);
        temperature.update_seed(seed);
        Ok(Self::assemble(settings, seed, altitude, temperature))
    }

    fn validate(settings: &GeneratorSettings) -> Result<(), GeneratorError> {
        if settings.chunk_size <= 0 {
            return Err(GeneratorError::ZeroChunkSize(settings.chunk_size));
        }
        let required = WINDOW_SPAN * settings.chunk_size;
        if settings.map_width < required {
            return Err(GeneratorError::MapWidthTooSmall {
                map_width: settings.map_width,
                required,
            });
        }
        for scale in [
            settings.scale,
            settings.altitude.scale,
            settings.temperature.scale,
        ] {
            if !scale.is_finite() || scale <= 0.0 {
                return Err(GeneratorError::InvalidScale(scale));
            }
        }
        settings.bands.validate()?;
        Ok(())
    }

    fn assemble(
        settings: GeneratorSettings,
        seed: u64,
        altitude: NoiseField,
        temperature: NoiseField,
    ) -> Self {
        let mut state = Self {
            coords: ChunkedCoordinate::new(settings.chunk_size, settings.map_width),
            altitude,
            temperature,
            bands: settings.bands,
            view: ViewWindow::new(settings.start_chunk),
            cache: WorldCache::with_chunk_size(settings.chunk_size),
            seed_text: settings.seed,
            seed,
        };
        state.rebuild();
        state
    }

    /// Recompute every cell of the current window. Returns the cell count.
    pub fn rebuild(&mut self) -> usize {
        let start = Instant::now();
        let cells = self.cache.rebuild(
            &self.view,
            &self.coords,
            &self.altitude,
            &self.temperature,
            &self.bands,
        );
        debug!(
            center = %self.view.center(),
            cells,
            elapsed_us = start.elapsed().as_micros() as u64,
            "rebuilt window"
        );
        cells
    }

    /// Hash `text` into a new seed, reseed both fields, and rebuild.
    pub fn set_seed(&mut self, text: &str) {
        let seed = hash_seed(text);
        info!(seed_text = text, seed, "seed updated");
        self.seed_text = text.to_string();
        self.seed = seed;
        self.altitude.update_seed(seed);
        self.temperature.update_seed(seed);
        self.rebuild();
    }

    /// Move the window one chunk and rebuild.
    pub fn pan(&mut self, direction: Direction) {
        self.view.pan(direction);
        trace!(?direction, center = %self.view.center(), "pan");
        self.rebuild();
    }

    /// Move the window one chunk north (+Y) and rebuild.
    pub fn pan_north(&mut self) {
        self.pan(Direction::North);
    }

    /// Move the window one chunk south (-Y) and rebuild.
    pub fn pan_south(&mut self) {
        self.pan(Direction::South);
    }

    /// Move the window one chunk east (+X) and rebuild.
    pub fn pan_east(&mut self) {
        self.pan(Direction::East);
    }

    /// Move the window one chunk west (-X) and rebuild.
    pub fn pan_west(&mut self) {
        self.pan(Direction::West);
    }

    /// Apply one input-layer command.
    pub fn execute(&mut self, command: Command) {
        match command.direction() {
            Some(direction) => self.pan(direction),
            None => {
                self.rebuild();
            }
        }
    }

    /// Cached category under `id`. Only ids inside the current window are
    /// meaningful.
    pub fn read(&self, id: CellId) -> Option<Category> {
        self.cache.read(id)
    }

    /// Cached category at an absolute coordinate, or `None` outside the window.
    pub fn category_at(&self, x: i32, y: i32) -> Option<Category> {
        if !self.view.contains(self.coords.chunk_of(x, y)) {
            return None;
        }
        self.cache.read(self.coords.cell_id_at(x, y))
    }

    /// Normalized `(altitude, temperature)` at an absolute coordinate.
    pub fn sample(&self, x: i32, y: i32) -> (f64, f64) {
        (self.altitude.sample(x, y), self.temperature.sample(x, y))
    }

    /// Absolute coordinate of display cell `(0, 0)`.
    pub fn display_origin(&self) -> (i32, i32) {
        let origin = self.view.origin();
        (
            self.coords.absolute_x(origin.x, 0),
            self.coords.absolute_y(origin.y, 0),
        )
    }

    /// Side length of the window in cells.
    pub fn window_cells(&self) -> i32 {
        WINDOW_SPAN * self.coords.chunk_size()
    }

    /// Every cell of the window with its display position.
    pub fn visible_cells(&self) -> impl Iterator<Item = DisplayCell> + '_ {
        let (origin_x, origin_y) = self.display_origin();
        let side = self.window_cells();
        (0..side).flat_map(move |dx| {
            (0..side).filter_map(move |dy| {
                self.cache
                    .read(self.coords.cell_id_at(origin_x + dx, origin_y + dy))
                    .map(|category| DisplayCell {
                        x: dx,
                        y: dy,
                        category,
                    })
            })
        })
    }

    /// Hand every visible cell to `renderer` as a 1×1 fill.
    pub fn draw(&self, renderer: &mut impl CellRenderer) {
        for cell in self.visible_cells() {
            renderer.fill_area(cell.category, cell.x, cell.y, 1, 1);
        }
    }

    /// The current world seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The text the current seed was hashed from.
    pub fn seed_text(&self) -> &str {
        &self.seed_text
    }

    /// The chunk the viewer occupies.
    pub fn center(&self) -> ChunkPos {
        self.view.center()
    }

    /// The view window.
    pub fn view(&self) -> &ViewWindow {
        &self.view
    }

    /// Coordinate mapper.
    pub fn coords(&self) -> &ChunkedCoordinate {
        &self.coords
    }

    /// The world cache.
    pub fn cache(&self) -> &WorldCache {
        &self.cache
    }

    /// Altitude field.
    pub fn altitude(&self) -> &NoiseField {
        &self.altitude
    }

    /// Temperature field.
    pub fn temperature(&self) -> &NoiseField {
        &self.temperature
    }
}
