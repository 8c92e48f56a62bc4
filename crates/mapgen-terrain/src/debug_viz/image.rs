//! An RGBA pixel buffer used by the debug renderers.

use std::path::Path;

/// Largest image the debug renderers will allocate, in pixels (1 GiB of RGBA).
pub const MAX_PIXELS: u64 = 1 << 28;

/// Errors raised when sizing a [`DebugImage`].
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum DebugImageError {
    /// The requested dimensions overflow or exceed [`MAX_PIXELS`].
    #[error("image of {width}x{height} pixels exceeds the limit of {max} pixels")]
    TooLarge {
        /// Requested width.
        width: u64,
        /// Requested height.
        height: u64,
        /// The pixel limit.
        max: u64,
    },
}

/// A row-major RGBA image. Row 0 is the top of the picture.
#[derive(Clone, Debug)]
pub struct DebugImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height * 4` bytes.
    pub pixels: Vec<u8>,
}

impl DebugImage {
    /// A transparent black image.
    ///
    /// # Errors
    ///
    /// Returns [`DebugImageError::TooLarge`] if a side does not fit in `u32`
    /// or the pixel count exceeds [`MAX_PIXELS`].
    pub fn new(width: u64, height: u64) -> Result<Self, DebugImageError> {
        let too_large = DebugImageError::TooLarge {
            width,
            height,
            max: MAX_PIXELS,
        };
        let (Ok(w), Ok(h)) = (u32::try_from(width), u32::try_from(height)) else {
            return Err(too_large);
        };
        let count = width
            .checked_mul(height)
            .filter(|&count| count <= MAX_PIXELS)
            .ok_or(too_large)?;
        Ok(Self {
            width: w,
            height: h,
            pixels: vec![0; count as usize * 4],
        })
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Fill a rectangle with an opaque color, clipped to the image bounds.
    pub fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, rgb: (u8, u8, u8)) {
        let x_end = x.saturating_add(width).min(self.width);
        let y_end = y.saturating_add(height).min(self.height);
        for py in y.min(y_end)..y_end {
            for px in x.min(x_end)..x_end {
                let idx = self.index(px, py);
                self.pixels[idx..idx + 4].copy_from_slice(&[rgb.0, rgb.1, rgb.2, 255]);
            }
        }
    }

    /// RGBA value of one pixel.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn get_pixel(&self, x: u32, y: u32) -> (u8, u8, u8, u8) {
        let idx = self.index(x, y);
        let p = &self.pixels[idx..idx + 4];
        (p[0], p[1], p[2], p[3])
    }

    /// Number of distinct RGB colors, ignoring alpha.
    pub fn unique_color_count(&self) -> usize {
        self.pixels
            .chunks_exact(4)
            .map(|p| (p[0], p[1], p[2]))
            .collect::<std::collections::HashSet<_>>()
            .len()
    }

    /// Encode as PNG at `path`.
    ///
    /// # Errors
    ///
    /// Returns the encoder or I/O error from the `image` crate.
    pub fn save_png(&self, path: &Path) -> Result<(), ::image::ImageError> {
        ::image::save_buffer_with_format(
            path,
            &self.pixels,
            self.width,
            self.height,
            ::image::ExtendedColorType::Rgba8,
            ::image::ImageFormat::Png,
        )
    }
}
