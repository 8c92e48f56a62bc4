//! Terrain category: the discrete classification held by every cell.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Discrete terrain kind of one world cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// Open ocean.
    DeepWater,
    /// Shallow water.
    Water,
    /// Beaches and dunes.
    Sand,
    /// Open grassland.
    Grass,
    /// Woodland.
    Forest,
    /// Hills.
    Hill,
    /// Mountains.
    Mountain,
}

impl Category {
    /// Every category, ordered from lowest to highest ground.
    pub const ALL: [Category; 7] = [
        Category::DeepWater,
        Category::Water,
        Category::Sand,
        Category::Grass,
        Category::Forest,
        Category::Hill,
        Category::Mountain,
    ];

    /// Snake-case name used in logs and debug output.
    pub const fn name(self) -> &'static str {
        match self {
            Category::DeepWater => "deep_water",
            Category::Water => "water",
            Category::Sand => "sand",
            Category::Grass => "grass",
            Category::Forest => "forest",
            Category::Hill => "hill",
            Category::Mountain => "mountain",
        }
    }

    /// Returns `true` for the two water categories.
    pub const fn is_water(self) -> bool {
        matches!(self, Category::DeepWater | Category::Water)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
