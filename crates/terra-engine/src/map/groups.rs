use std::collections::HashMap;
use crate::map::tile::TileRef;

/// Group name of tiles that were never assigned to a terrain group.
pub const NO_GROUP: &str = "";

/// Lookup table from tile graphic to terrain group name.
/// Many tile graphics can share a group.
#[derive(Debug, Clone, Default)]
pub struct TileGroups {
    groups: HashMap<TileRef, String>,
    names: Vec<String>,
}

impl TileGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `tile_ref` as a member of `group`, replacing any previous membership.
    pub fn insert(&mut self, tile_ref: TileRef, group: impl Into<String>) {
        let group = group.into();
        if !self.names.contains(&group) {
            self.names.push(group.clone());
        }
        self.groups.insert(tile_ref, group);
    }

    /// Register a range of tile numbers of one sheet.
    pub fn insert_range(&mut self, sheet: u32, numbers: std::ops::RangeInclusive<u32>, group: &str) {
        for number in numbers {
            self.insert(TileRef::new(sheet, number), group);
        }
    }

    /// Group of a tile graphic, [`NO_GROUP`] when unregistered.
    pub fn group_of(&self, tile_ref: TileRef) -> &str {
        self.groups.get(&tile_ref).map(String::as_str).unwrap_or(NO_GROUP)
    }

    /// Group names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Tile graphics registered under `group`, sorted by identity.
    pub fn members(&self, group: &str) -> Vec<TileRef> {
        let mut members: Vec<TileRef> = self
            .groups
            .iter()
            .filter(|(_, name)| name.as_str() == group)
            .map(|(tile_ref, _)| *tile_ref)
            .collect();
        members.sort();
        members
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
