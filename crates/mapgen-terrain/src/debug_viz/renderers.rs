//! Debug renderers: category map, raw field heatmaps, and category counts.

use std::collections::BTreeMap;

use super::image::{DebugImage, DebugImageError};
use crate::biome::{Category, category_color};
use crate::generator::{CellRenderer, GeneratorState};
use crate::noise_field::NoiseField;

/// A [`CellRenderer`] that paints into a [`DebugImage`], `cell_size`
/// pixels per cell. Display Y grows north, so rows are flipped.
pub struct ImageRenderer<'a> {
    image: &'a mut DebugImage,
    cell_size: u32,
}

impl<'a> ImageRenderer<'a> {
    /// Wrap an image.
    pub fn new(image: &'a mut DebugImage, cell_size: u32) -> Self {
        Self { image, cell_size }
    }
}

impl ImageRenderer<'_> {
    /// Cells to pixels, saturating past the image bounds.
    fn to_pixels(&self, cells: u64) -> u32 {
        u32::try_from(cells.saturating_mul(u64::from(self.cell_size))).unwrap_or(u32::MAX)
    }
}

impl CellRenderer for ImageRenderer<'_> {
    fn fill_area(&mut self, category: Category, x: i32, y: i32, width: i32, height: i32) {
        if x < 0 || y < 0 || width <= 0 || height <= 0 {
            return;
        }
        let top = self.to_pixels(y as u64 + height as u64);
        let Some(py) = self.image.height.checked_sub(top) else {
            return;
        };
        self.image.fill_rect(
            self.to_pixels(x as u64),
            py,
            self.to_pixels(width as u64),
            self.to_pixels(height as u64),
            category_color(category),
        );
    }
}

/// Render the generator's current window, `cell_size` pixels per cell.
///
/// # Errors
///
/// Returns [`DebugImageError::TooLarge`] if the window at this cell size
/// would exceed the image limit.
pub fn render_window_image(
    state: &GeneratorState,
    cell_size: u32,
) -> Result<DebugImage, DebugImageError> {
    let side = state.window_cells() as u64 * u64::from(cell_size);
    let mut image = DebugImage::new(side, side)?;
    state.draw(&mut ImageRenderer::new(&mut image, cell_size));
    Ok(image)
}

/// Grayscale heatmap of one field over a square of `side` cells whose
/// lower corner is `origin`. One pixel per cell, north up.
///
/// # Errors
///
/// Returns [`DebugImageError::TooLarge`] if `side` exceeds the image limit.
pub fn render_field_image(
    field: &NoiseField,
    origin: (i32, i32),
    side: u32,
) -> Result<DebugImage, DebugImageError> {
    let mut image = DebugImage::new(u64::from(side), u64::from(side))?;
    for py in 0..side {
        for px in 0..side {
            let x = origin.0 + px as i32;
            let y = origin.1 + (side - 1 - py) as i32;
            let v = (field.sample(x, y) * 255.0).round() as u8;
            image.fill_rect(px, py, 1, 1, (v, v, v));
        }
    }
    Ok(image)
}

/// Count how many visible cells fall in each category.
pub fn category_histogram(state: &GeneratorState) -> BTreeMap<Category, usize> {
    let mut counts = BTreeMap::new();
    for cell in state.visible_cells() {
        *counts.entry(cell.category).or_insert(0) += 1;
    }
    counts
}
