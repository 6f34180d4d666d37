use serde::{Deserialize, Serialize};
use crate::error::Result;
use crate::map::{TileGrid, TileGroups, TileRef};

/// Map file: grid dimensions and placed tiles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapDesc {
    /// Width in tiles.
    pub width: u32,
    /// Height in tiles.
    pub height: u32,
    pub tile_width: u32,
    pub tile_height: u32,
    #[serde(default)]
    pub tiles: Vec<MapTileDesc>,
}

/// One placed tile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MapTileDesc {
    pub col: i32,
    pub row: i32,
    pub sheet: u32,
    pub number: u32,
}

impl MapDesc {
    /// Parse a map from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the grid. A tile outside the declared size fails the load.
    pub fn into_grid(self, groups: &TileGroups) -> Result<TileGrid> {
        let mut grid = TileGrid::new(self.width, self.height, self.tile_width, self.tile_height);
        for tile in &self.tiles {
            grid.place(tile.col, tile.row, TileRef::new(tile.sheet, tile.number), groups)?;
        }
        Ok(grid)
    }

    /// Describe a grid's placed tiles.
    pub fn from_grid(grid: &TileGrid) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            tile_width: grid.in_tile_width(),
            tile_height: grid.in_tile_height(),
            tiles: grid
                .tiles()
                .map(|tile| MapTileDesc {
                    col: tile.col(),
                    row: tile.row(),
                    sheet: tile.sheet,
                    number: tile.number,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TileError;

    #[test]
    fn build_grid() {
        let json = r#"{
            "width": 4, "height": 3, "tile_width": 16, "tile_height": 16,
            "tiles": [
                { "col": 0, "row": 0, "sheet": 0, "number": 1 },
                { "col": 3, "row": 2, "sheet": 1, "number": 0 }
            ]
        }"#;
        let mut groups = TileGroups::new();
        groups.insert(TileRef::new(0, 1), "grass");
        let grid = MapDesc::from_json(json).unwrap().into_grid(&groups).unwrap();
        assert_eq!(grid.tiles_number(), 2);
        assert_eq!(grid.get_tile(0, 0).unwrap().group, "grass");
        assert_eq!(grid.get_tile(3, 2).unwrap().x, 48);

        let desc = MapDesc::from_grid(&grid);
        assert_eq!(desc.tiles.len(), 2);
        assert_eq!((desc.tiles[1].col, desc.tiles[1].row), (3, 2));
    }

    #[test]
    fn tile_outside_map_fails() {
        let json = r#"{
            "width": 2, "height": 2, "tile_width": 16, "tile_height": 16,
            "tiles": [ { "col": 2, "row": 0, "sheet": 0, "number": 0 } ]
        }"#;
        let err = MapDesc::from_json(json).unwrap().into_grid(&TileGroups::new()).unwrap_err();
        assert!(matches!(err, TileError::OutOfRange { col: 2, .. }));
    }
}
