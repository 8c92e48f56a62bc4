//! Debug visualization: render the resident window, or a raw noise field,
//! to an RGBA image.

mod image;
mod renderers;

pub use self::image::{DebugImage, DebugImageError, MAX_PIXELS};
pub use renderers::{ImageRenderer, category_histogram, render_field_image, render_window_image};
