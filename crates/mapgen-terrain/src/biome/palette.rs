//! Display colors for each terrain category.

use super::Category;

/// RGB color of a category, as used by the debug renderers.
pub const fn category_color(category: Category) -> (u8, u8, u8) {
    match category {
        // slate gray
        Category::Mountain => (112, 128, 144),
        // cricket green
        Category::Hill => (150, 164, 88),
        // kelly green
        Category::Grass => (76, 187, 23),
        // bamboo green
        Category::Forest => (0, 128, 64),
        // lapis lazuli
        Category::DeepWater => (38, 97, 156),
        // bondi blue
        Category::Water => (0, 149, 182),
        // tan
        Category::Sand => (210, 180, 140),
    }
}
