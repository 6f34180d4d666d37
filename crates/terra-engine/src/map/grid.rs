//! Tile grid storage.
//!
//! The grid stores placed tiles by (column, row). Empty cells are `None`,
//! which is distinct from a placed tile that simply has no collision.
//! Rows grow upward: row 0 is the bottom of the map.

use glam::DVec2;
use crate::error::{Result, TileError};
use crate::map::groups::TileGroups;
use crate::map::orientation::Orientation;
use crate::map::tile::{Tile, TileRef};

/// Sparse 2D tile storage.
///
/// Tiles are stored in row-major order: index = row * width + col
#[derive(Debug, Clone)]
pub struct TileGrid {
    /// Width of the map in tiles.
    width: u32,
    /// Height of the map in tiles.
    height: u32,
    /// Width of one tile in pixels.
    tile_width: u32,
    /// Height of one tile in pixels.
    tile_height: u32,
    tiles: Vec<Option<Tile>>,
}

fn cell_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

impl TileGrid {
    /// Create an empty grid of `width` x `height` tiles.
    pub fn new(width: u32, height: u32, tile_width: u32, tile_height: u32) -> Self {
        Self {
            width,
            height,
            tile_width: tile_width.max(1),
            tile_height: tile_height.max(1),
            tiles: vec![None; cell_count(width, height)],
        }
    }

    /// Reallocate the grid as `width` x `height` empty cells, dropping every placed tile.
    pub fn create(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.tiles = vec![None; cell_count(width, height)];
    }

    /// Grow the grid, keeping every placed tile at the same (col, row).
    /// Dimensions never shrink; new cells are empty.
    pub fn resize(&mut self, width: u32, height: u32) {
        let width = width.max(self.width);
        let height = height.max(self.height);
        if width == self.width && height == self.height {
            return;
        }
        let mut tiles = vec![None; cell_count(width, height)];
        for row in 0..self.height {
            for col in 0..self.width {
                let old = row as usize * self.width as usize + col as usize;
                tiles[row as usize * width as usize + col as usize] = self.tiles[old].take();
            }
        }
        self.width = width;
        self.height = height;
        self.tiles = tiles;
    }

    fn index(&self, col: i32, row: i32) -> Option<usize> {
        if col < 0 || row < 0 || col as u32 >= self.width || row as u32 >= self.height {
            return None;
        }
        Some(row as usize * self.width as usize + col as usize)
    }

    /// Place a tile at (col, row), replacing any previous one.
    ///
    /// The tile must be sized like the grid's tiles and positioned on the
    /// cell: lookups made from the tile record find the same cell.
    pub fn set_tile(&mut self, col: i32, row: i32, tile: Tile) -> Result<()> {
        let idx = self.index(col, row).ok_or(TileError::OutOfRange {
            col,
            row,
            width: self.width,
            height: self.height,
        })?;
        if tile.width != self.tile_width
            || tile.height != self.tile_height
            || tile.x != col * self.tile_width as i32
            || tile.y != row * self.tile_height as i32
        {
            return Err(TileError::Misplaced {
                col,
                row,
                x: tile.x,
                y: tile.y,
                width: tile.width,
                height: tile.height,
            });
        }
        self.tiles[idx] = Some(tile);
        Ok(())
    }

    /// Build a tile for `tile_ref` positioned on (col, row), with its group
    /// resolved through `groups`, and place it.
    pub fn place(&mut self, col: i32, row: i32, tile_ref: TileRef, groups: &TileGroups) -> Result<()> {
        let tile = Tile::new(
            tile_ref.sheet,
            tile_ref.number,
            col * self.tile_width as i32,
            row * self.tile_height as i32,
            self.tile_width,
            self.tile_height,
        )
        .with_group(groups.group_of(tile_ref));
        self.set_tile(col, row, tile)
    }

    /// Remove the tile at (col, row). Out of range cells are ignored.
    pub fn remove_tile(&mut self, col: i32, row: i32) -> Option<Tile> {
        let idx = self.index(col, row)?;
        self.tiles[idx].take()
    }

    /// Tile at (col, row). `None` both for empty cells and out of range cells.
    pub fn get_tile(&self, col: i32, row: i32) -> Option<&Tile> {
        self.index(col, row).and_then(|idx| self.tiles[idx].as_ref())
    }

    /// Mutable tile at (col, row).
    pub fn get_tile_mut(&mut self, col: i32, row: i32) -> Option<&mut Tile> {
        let idx = self.index(col, row)?;
        self.tiles[idx].as_mut()
    }

    /// Neighbor of (col, row) in the given direction.
    pub fn neighbor(&self, col: i32, row: i32, orientation: Orientation) -> Option<&Tile> {
        let (dx, dy) = orientation.delta();
        self.get_tile(col + dx, row + dy)
    }

    /// Up to 8 placed tiles around `tile`, excluding the tile itself.
    pub fn get_neighbors(&self, tile: &Tile) -> Vec<&Tile> {
        let (col, row) = (tile.col(), tile.row());
        Orientation::ALL
            .iter()
            .filter_map(|&orientation| self.neighbor(col, row, orientation))
            .collect()
    }

    /// Convert a world position in pixels to grid coordinates.
    /// The result may lie outside the grid.
    pub fn world_to_tile(&self, pos: DVec2) -> (i32, i32) {
        let col = (pos.x / self.tile_width as f64).floor() as i32;
        let row = (pos.y / self.tile_height as f64).floor() as i32;
        (col, row)
    }

    /// Tile covering the world position (x, y) in pixels.
    pub fn tile_at(&self, x: f64, y: f64) -> Option<&Tile> {
        let (col, row) = self.world_to_tile(DVec2::new(x, y));
        self.get_tile(col, row)
    }

    /// Iterate over placed tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().flatten()
    }

    /// Fill a rectangular region with copies of a tile graphic.
    pub fn fill_rect(&mut self, col: i32, row: i32, w: u32, h: u32, tile_ref: TileRef, groups: &TileGroups) {
        let max_row = (row + h as i32).min(self.height as i32);
        let max_col = (col + w as i32).min(self.width as i32);
        for r in row.max(0)..max_row {
            for c in col.max(0)..max_col {
                // In range by construction.
                let _ = self.place(c, r, tile_ref, groups);
            }
        }
    }

    /// Remove every placed tile, keeping dimensions.
    pub fn clear(&mut self) {
        self.tiles.fill(None);
    }

    /// Count of placed tiles.
    pub fn tiles_number(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_some()).count()
    }

    /// Width in tiles.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in tiles.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width of one tile in pixels.
    pub fn in_tile_width(&self) -> u32 {
        self.tile_width
    }

    /// Height of one tile in pixels.
    pub fn in_tile_height(&self) -> u32 {
        self.tile_height
    }

    /// Diagonal length of the grid in tiles, rounded up. Used for culling.
    pub fn radius(&self) -> u32 {
        let w = self.width as f64;
        let h = self.height as f64;
        (w * w + h * h).sqrt().ceil() as u32
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn get_tile_never_panics_outside(w in 0u32..20, h in 0u32..20, col in -50i32..50, row in -50i32..50) {
            let grid = TileGrid::new(w, h, 16, 16);
            prop_assert!(grid.get_tile(col, row).is_none());
        }

        #[test]
        fn set_then_get_round_trips(
            w in 1u32..20, h in 1u32..20,
            sheet in 0u32..8, number in 0u32..256,
            col_seed in 0u32..1000, row_seed in 0u32..1000,
        ) {
            let mut grid = TileGrid::new(w, h, 16, 16);
            let col = (col_seed % w) as i32;
            let row = (row_seed % h) as i32;
            let tile = Tile::new(sheet, number, col * 16, row * 16, 16, 16);
            grid.set_tile(col, row, tile.clone()).unwrap();
            let got = grid.get_tile(col, row).unwrap();
            prop_assert_eq!(
                (got.sheet, got.number, got.x, got.y, got.width, got.height),
                (tile.sheet, tile.number, tile.x, tile.y, tile.width, tile.height)
            );
        }
    }
}
