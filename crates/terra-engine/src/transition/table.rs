use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use crate::map::TileRef;
use crate::transition::catalog::TileTransition;

/// Ordered pair of terrain groups meeting at a transition: the group of the
/// tile being resolved and the foreign group around it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GroupTransition {
    pub group_in: String,
    pub group_out: String,
}

impl GroupTransition {
    pub fn new(group_in: impl Into<String>, group_out: impl Into<String>) -> Self {
        Self {
            group_in: group_in.into(),
            group_out: group_out.into(),
        }
    }

    /// Whether both sides are the same group (interior tiles).
    pub fn is_same(&self) -> bool {
        self.group_in == self.group_out
    }
}

/// Replacement candidates per transition shape.
///
/// Candidates are tried in insertion order. The group-keyed table is
/// consulted before the shape-only one.
#[derive(Debug, Clone, Default)]
pub struct TransitionTable {
    by_shape: HashMap<TileTransition, Vec<TileRef>>,
    by_groups: HashMap<GroupTransition, HashMap<TileTransition, Vec<TileRef>>>,
}

impl TransitionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a candidate for a shape, whatever the groups around it.
    pub fn insert(&mut self, transition: TileTransition, tile_ref: TileRef) {
        push_unique(self.by_shape.entry(transition).or_default(), tile_ref);
    }

    /// Register a candidate for a shape between two specific groups.
    pub fn insert_for(&mut self, groups: GroupTransition, transition: TileTransition, tile_ref: TileRef) {
        let shapes = self.by_groups.entry(groups).or_default();
        push_unique(shapes.entry(transition).or_default(), tile_ref);
    }

    /// Candidates for `transition`, preferring the ones registered for `groups`.
    pub fn candidates(&self, groups: Option<&GroupTransition>, transition: TileTransition) -> &[TileRef] {
        groups
            .and_then(|groups| self.by_groups.get(groups))
            .and_then(|shapes| shapes.get(&transition))
            .or_else(|| self.by_shape.get(&transition))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every candidate of the table, in no particular order.
    pub fn tile_refs(&self) -> impl Iterator<Item = (TileTransition, TileRef)> + '_ {
        let shapes = self
            .by_shape
            .iter()
            .flat_map(|(transition, refs)| refs.iter().map(move |r| (*transition, *r)));
        let groups = self.by_groups.values().flat_map(|shapes| {
            shapes
                .iter()
                .flat_map(|(transition, refs)| refs.iter().map(move |r| (*transition, *r)))
        });
        shapes.chain(groups)
    }

    pub fn is_empty(&self) -> bool {
        self.by_shape.is_empty() && self.by_groups.is_empty()
    }
}

fn push_unique(refs: &mut Vec<TileRef>, tile_ref: TileRef) {
    if !refs.contains(&tile_ref) {
        refs.push(tile_ref);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_candidates_take_precedence() {
        let mut table = TransitionTable::new();
        table.insert(TileTransition::Top, TileRef::new(0, 1));
        table.insert_for(
            GroupTransition::new("grass", "water"),
            TileTransition::Top,
            TileRef::new(0, 5),
        );

        let water = GroupTransition::new("grass", "water");
        let sand = GroupTransition::new("grass", "sand");
        assert_eq!(table.candidates(Some(&water), TileTransition::Top), &[TileRef::new(0, 5)]);
        assert_eq!(table.candidates(Some(&sand), TileTransition::Top), &[TileRef::new(0, 1)]);
        assert_eq!(table.candidates(None, TileTransition::Top), &[TileRef::new(0, 1)]);
        assert!(table.candidates(None, TileTransition::Left).is_empty());
    }

    #[test]
    fn duplicates_are_ignored() {
        let mut table = TransitionTable::new();
        table.insert(TileTransition::Center, TileRef::new(0, 0));
        table.insert(TileTransition::Center, TileRef::new(0, 0));
        assert_eq!(table.candidates(None, TileTransition::Center).len(), 1);
        assert_eq!(table.tile_refs().count(), 1);
    }

    #[test]
    fn group_transition_sameness() {
        assert!(GroupTransition::new("grass", "grass").is_same());
        assert!(!GroupTransition::new("grass", "water").is_same());
    }
}
