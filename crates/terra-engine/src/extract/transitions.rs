//! Transition extraction: learns which tile graphic authors used for each
//! transition shape between two groups.

use std::collections::{BTreeMap, BTreeSet};
use crate::config::{TransitionDesc, TransitionsDesc};
use crate::error::Result;
use crate::extract::cancel::CancelFlag;
use crate::map::{TileGrid, TileRef};
use crate::transition::{neighborhood_pattern, GroupTransition, TileTransition, TransitionTable};

/// Accumulates transition tiles over any number of maps.
///
/// A tile is recorded only when its shape is in the catalog and its
/// neighborhood leads into at most one foreign group. Interior tiles are
/// recorded under the pair (group, group).
#[derive(Debug, Default)]
pub struct TransitionExtractor {
    transitions: BTreeMap<GroupTransition, BTreeMap<TileTransition, BTreeSet<TileRef>>>,
    cancel: CancelFlag,
    skipped: usize,
}

impl TransitionExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Share a cancel flag checked between tiles.
    pub fn with_cancel(mut self, cancel: CancelFlag) -> Self {
        self.cancel = cancel;
        self
    }

    /// Scan one map. Tiles must carry their groups.
    pub fn scan(&mut self, grid: &TileGrid) -> Result<()> {
        for tile in grid.tiles() {
            self.cancel.check()?;
            let (col, row) = (tile.col(), tile.row());
            let Some(pattern) = neighborhood_pattern(grid, col, row) else {
                continue;
            };
            let transition = TileTransition::from_pattern(&pattern);
            let foreign: BTreeSet<&str> = grid
                .get_neighbors(tile)
                .into_iter()
                .filter(|neighbor| !neighbor.same_group(tile))
                .map(|neighbor| neighbor.group.as_str())
                .collect();
            if transition == TileTransition::None || foreign.len() > 1 {
                self.skipped += 1;
                continue;
            }
            let group_out = foreign.into_iter().next().unwrap_or(tile.group.as_str());
            let groups = GroupTransition::new(tile.group.clone(), group_out);
            self.transitions
                .entry(groups)
                .or_default()
                .entry(transition)
                .or_default()
                .insert(tile.tile_ref());
        }
        log::debug!(
            "transition extraction: {} group pairs, {} tiles skipped",
            self.transitions.len(),
            self.skipped
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

    /// Tiles recorded for a shape between two groups.
    pub fn get(&self, groups: &GroupTransition, transition: TileTransition) -> Option<&BTreeSet<TileRef>> {
        self.transitions.get(groups).and_then(|shapes| shapes.get(&transition))
    }

    /// Tiles skipped because they matched no shape or touched several groups.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Export as a transition file. Interior pairs are exported without
    /// groups so they act as the fallback table.
    pub fn into_desc(self) -> TransitionsDesc {
        let mut transitions = Vec::new();
        for (groups, shapes) in self.transitions {
            for (transition, tiles) in shapes {
                transitions.push(TransitionDesc {
                    transition,
                    groups: (!groups.is_same()).then(|| groups.clone()),
                    tiles: tiles.into_iter().collect(),
                });
            }
        }
        TransitionsDesc { transitions }
    }

    /// Runtime table for a [`TransitionResolver`](crate::transition::TransitionResolver).
    pub fn into_table(self) -> TransitionTable {
        self.into_desc().into_table()
    }
}
