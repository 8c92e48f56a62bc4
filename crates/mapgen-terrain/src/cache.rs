//! Sparse cell-id → category cache for the resident window.

use hashbrown::HashMap;

use crate::biome::{BandTable, Category};
use crate::coords::{CellId, ChunkedCoordinate};
use crate::noise_field::NoiseField;
use crate::view::{ViewWindow, WINDOW_SPAN};

/// Categories of every cell in the most recently rebuilt window.
#[derive(Clone, Debug, Default)]
pub struct WorldCache {
    cells: HashMap<CellId, Category>,
}

impl WorldCache {
    /// Create a cache pre-sized for a window of `chunk_size`-wide chunks.
    pub fn with_chunk_size(chunk_size: i32) -> Self {
        let side = (WINDOW_SPAN * chunk_size.max(0)) as usize;
        Self {
            cells: HashMap::with_capacity(side * side),
        }
    }

    /// Recompute every cell of the window.
    ///
    /// Entries from any previous window are dropped first, then all
    /// `9 * chunk_size²` cells are sampled and classified. There is no dirty
    /// tracking; a call always does the full amount of work. Returns the
    /// number of cells written.
    pub fn rebuild(
        &mut self,
        view: &ViewWindow,
        coords: &ChunkedCoordinate,
        altitude: &NoiseField,
        temperature: &NoiseField,
        classifier: &BandTable,
    ) -> usize {
        self.cells.clear();
        let size = coords.chunk_size();
        for chunk in view.chunks() {
            for local_x in 0..size {
                for local_y in 0..size {
                    let x = coords.absolute_x(chunk.x, local_x);
                    let y = coords.absolute_y(chunk.y, local_y);
                    let category =
                        classifier.classify(altitude.sample(x, y), temperature.sample(x, y));
                    self.cells.insert(coords.cell_id_at(x, y), category);
                }
            }
        }
        self.cells.len()
    }

    /// Category stored under `id`, if the cell is in the current window.
    pub fn read(&self, id: CellId) -> Option<Category> {
        self.cells.get(&id).copied()
    }

    /// Number of cached cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` before the first rebuild.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over every cached `(id, category)` pair, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (CellId, Category)> + '_ {
        self.cells.iter().map(|(&id, &category)| (id, category))
    }
}
