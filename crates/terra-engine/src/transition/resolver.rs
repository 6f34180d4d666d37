//! Transition resolution: rewrites a tile graphic so it blends with the
//! terrain groups around it.

use crate::map::{Orientation, TileGrid, TileGroups};
use crate::transition::catalog::{Pattern, TileTransition};
use crate::transition::table::{GroupTransition, TransitionTable};

/// Neighborhood pattern of the tile at (col, row), `None` if the cell is empty.
///
/// Rows are scanned from `row + 1` down to `row - 1`, columns from `col - 1`
/// to `col + 1`. Empty neighbor cells are "don't care".
pub fn neighborhood_pattern(grid: &TileGrid, col: i32, row: i32) -> Option<Pattern> {
    let center = grid.get_tile(col, row)?;
    let mut pattern = [None; 9];
    let mut i = 0;
    for dy in [1, 0, -1] {
        for dx in [-1, 0, 1] {
            pattern[i] = grid
                .get_tile(col + dx, row + dy)
                .map(|neighbor| neighbor.same_group(center));
            i += 1;
        }
    }
    Some(pattern)
}

/// First foreign group met in scan order around (col, row).
pub fn foreign_group(grid: &TileGrid, col: i32, row: i32) -> Option<GroupTransition> {
    let center = grid.get_tile(col, row)?;
    for dy in [1, 0, -1] {
        for dx in [-1, 0, 1] {
            if let Some(neighbor) = grid.get_tile(col + dx, row + dy) {
                if !neighbor.same_group(center) {
                    return Some(GroupTransition::new(center.group.clone(), neighbor.group.clone()));
                }
            }
        }
    }
    None
}

/// Stateless transition service: configuration only, the grid is passed per call.
#[derive(Debug, Clone)]
pub struct TransitionResolver {
    table: TransitionTable,
    groups: TileGroups,
}

impl TransitionResolver {
    pub fn new(table: TransitionTable, groups: TileGroups) -> Self {
        let resolver = Self { table, groups };
        resolver.check_table();
        resolver
    }

    fn check_table(&self) {
        for (transition, tile_ref) in self.table.tile_refs() {
            if self.groups.group_of(tile_ref).is_empty() {
                log::warn!(
                    "transition {:?} lists tile {} which belongs to no group, it will never be used",
                    transition,
                    tile_ref
                );
            }
        }
    }

    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    pub fn groups(&self) -> &TileGroups {
        &self.groups
    }

    /// Transition shape of the tile at (col, row). Empty cells give `None`.
    pub fn transition_at(&self, grid: &TileGrid, col: i32, row: i32) -> TileTransition {
        neighborhood_pattern(grid, col, row)
            .map(|pattern| TileTransition::from_pattern(&pattern))
            .unwrap_or(TileTransition::None)
    }

    /// Rewrite the tile at (col, row) with the first registered replacement
    /// for its transition shape that stays in the tile's own group.
    /// Position and size are untouched. Empty cells are ignored.
    pub fn resolve(&self, grid: &mut TileGrid, col: i32, row: i32) {
        self.resolve_changed(grid, col, row);
    }

    /// Resolve (col, row) then its 8 neighbors, whose patterns see the center.
    pub fn resolve_cascade(&self, grid: &mut TileGrid, col: i32, row: i32) {
        self.resolve_changed(grid, col, row);
        for orientation in Orientation::ALL {
            let (dx, dy) = orientation.delta();
            self.resolve_changed(grid, col + dx, row + dy);
        }
    }

    /// Resolve every placed tile of the grid, row by row.
    pub fn resolve_all(&self, grid: &mut TileGrid) {
        let mut changed = 0usize;
        for row in 0..grid.height() as i32 {
            for col in 0..grid.width() as i32 {
                if self.resolve_changed(grid, col, row) {
                    changed += 1;
                }
            }
        }
        log::debug!("resolved transitions: {} tiles rewritten", changed);
    }

    /// Returns whether the tile graphic changed.
    fn resolve_changed(&self, grid: &mut TileGrid, col: i32, row: i32) -> bool {
        let Some(pattern) = neighborhood_pattern(grid, col, row) else {
            return false;
        };
        let transition = TileTransition::from_pattern(&pattern);
        let groups = foreign_group(grid, col, row);
        let Some(tile) = grid.get_tile_mut(col, row) else {
            return false;
        };
        let replacement = self
            .table
            .candidates(groups.as_ref(), transition)
            .iter()
            .copied()
            .find(|&candidate| self.groups.group_of(candidate) == tile.group);
        match replacement {
            Some(tile_ref) if tile_ref != tile.tile_ref() => {
                tile.set_ref(tile_ref);
                true
            }
            _ => false,
        }
    }
}
