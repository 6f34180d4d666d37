use serde::{Deserialize, Serialize};
use std::fmt;

/// Value identity of a tile graphic: sheet index + tile number inside the sheet.
///
/// Compared and hashed by value, so it can key lookup tables independently
/// of any placed tile instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileRef {
    pub sheet: u32,
    pub number: u32,
}

impl TileRef {
    pub fn new(sheet: u32, number: u32) -> Self {
        Self { sheet, number }
    }
}

impl fmt::Display for TileRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.sheet, self.number)
    }
}

/// A tile placed on the map.
///
/// Position is in world pixels and is always a multiple of the tile size.
/// Only `sheet`/`number` change after placement (transition rewrites).
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    /// Sheet the tile graphic comes from.
    pub sheet: u32,
    /// Index of the tile graphic inside its sheet.
    pub number: u32,
    /// World x in pixels (left edge).
    pub x: i32,
    /// World y in pixels (bottom edge, y grows upward).
    pub y: i32,
    pub width: u32,
    pub height: u32,
    /// Terrain group name, empty when the tile belongs to no group.
    pub group: String,
}

impl Tile {
    /// Create an ungrouped tile.
    pub fn new(sheet: u32, number: u32, x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            sheet,
            number,
            x,
            y,
            width,
            height,
            group: String::new(),
        }
    }

    /// Set the terrain group.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    /// Identity of the tile graphic.
    pub fn tile_ref(&self) -> TileRef {
        TileRef::new(self.sheet, self.number)
    }

    /// Rewrite the tile graphic, keeping position and size.
    pub fn set_ref(&mut self, tile_ref: TileRef) {
        self.sheet = tile_ref.sheet;
        self.number = tile_ref.number;
    }

    /// Grid column (x / width).
    pub fn col(&self) -> i32 {
        self.x.div_euclid(self.width.max(1) as i32)
    }

    /// Grid row (y / height).
    pub fn row(&self) -> i32 {
        self.y.div_euclid(self.height.max(1) as i32)
    }

    /// Whether two tiles share the same terrain group.
    pub fn same_group(&self, other: &Tile) -> bool {
        self.group == other.group
    }
}
