//! Constraint extraction: which tile graphics were seen next to which,
//! per direction, across a set of authored maps.

use std::collections::{BTreeMap, BTreeSet};
use serde::{Deserialize, Serialize};
use crate::error::Result;
use crate::extract::cancel::CancelFlag;
use crate::map::{Orientation, TileGrid, TileRef};

/// Neighbors observed around one tile graphic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileConstraint {
    pub neighbors: BTreeMap<Orientation, BTreeSet<TileRef>>,
}

impl TileConstraint {
    /// Tile graphics seen in direction `orientation`.
    pub fn get(&self, orientation: Orientation) -> impl Iterator<Item = &TileRef> {
        self.neighbors.get(&orientation).into_iter().flatten()
    }

    /// Whether `tile_ref` was seen in direction `orientation`.
    pub fn allows(&self, orientation: Orientation, tile_ref: TileRef) -> bool {
        self.neighbors
            .get(&orientation)
            .is_some_and(|refs| refs.contains(&tile_ref))
    }
}

/// Exported constraint of one tile graphic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintEntry {
    pub tile: TileRef,
    pub neighbors: BTreeMap<Orientation, BTreeSet<TileRef>>,
}

/// Accumulates neighbor constraints over any number of maps.
#[derive(Debug, Default)]
pub struct ConstraintExtractor {
    constraints: BTreeMap<TileRef, TileConstraint>,
    cancel: CancelFlag,
    scanned: usize,
}

impl ConstraintExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Share a cancel flag checked between tiles.
    pub fn with_cancel(mut self, cancel: CancelFlag) -> Self {
        self.cancel = cancel;
        self
    }

    /// Scan one map. Tiles scanned before a cancellation stay recorded.
    pub fn scan(&mut self, grid: &TileGrid) -> Result<()> {
        for tile in grid.tiles() {
            self.cancel.check()?;
            let (col, row) = (tile.col(), tile.row());
            let constraint = self.constraints.entry(tile.tile_ref()).or_default();
            for dy in -1..=1 {
                for dx in -1..=1 {
                    let Some(orientation) = Orientation::from_delta(dx, dy) else {
                        continue;
                    };
                    if let Some(neighbor) = grid.get_tile(col + dx, row + dy) {
                        constraint
                            .neighbors
                            .entry(orientation)
                            .or_default()
                            .insert(neighbor.tile_ref());
                    }
                }
            }
            self.scanned += 1;
        }
        log::debug!(
            "constraint extraction: {} tiles scanned, {} distinct graphics",
            self.scanned,
            self.constraints.len()
        );
        Ok(())
    }

    /// Scan several maps in order.
    pub fn scan_all<'a>(&mut self, grids: impl IntoIterator<Item = &'a TileGrid>) -> Result<()> {
        for grid in grids {
            self.scan(grid)?;
        }
        Ok(())
    }

    pub fn get(&self, tile_ref: TileRef) -> Option<&TileConstraint> {
        self.constraints.get(&tile_ref)
    }

    pub fn constraints(&self) -> &BTreeMap<TileRef, TileConstraint> {
        &self.constraints
    }

    /// Number of tiles scanned so far.
    pub fn scanned(&self) -> usize {
        self.scanned
    }

    /// Constraints as a sorted list, suitable for JSON export.
    pub fn into_entries(self) -> Vec<ConstraintEntry> {
        self.constraints
            .into_iter()
            .map(|(tile, constraint)| ConstraintEntry {
                tile,
                neighbors: constraint.neighbors,
            })
            .collect()
    }
}
