use std::collections::{BTreeMap, BTreeSet};
use serde::{Deserialize, Serialize};
use crate::map::Orientation;

/// Neighbor groups that suppress a formula, per orthogonal direction.
///
/// A formula is removed from a tile when the neighbor in direction `o`
/// belongs to one of the groups listed under `o` and has collision itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CollisionConstraint {
    groups: BTreeMap<Orientation, BTreeSet<String>>,
}

impl CollisionConstraint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, orientation: Orientation, group: impl Into<String>) -> Self {
        self.add(orientation, group);
        self
    }

    pub fn add(&mut self, orientation: Orientation, group: impl Into<String>) {
        self.groups.entry(orientation).or_default().insert(group.into());
    }

    /// Whether `group` is constrained in direction `orientation`.
    pub fn has(&self, orientation: Orientation, group: &str) -> bool {
        self.groups
            .get(&orientation)
            .is_some_and(|groups| groups.contains(group))
    }

    /// Groups constrained in direction `orientation`.
    pub fn get(&self, orientation: Orientation) -> impl Iterator<Item = &str> {
        self.groups
            .get(&orientation)
            .into_iter()
            .flat_map(|groups| groups.iter().map(String::as_str))
    }

    pub fn is_empty(&self) -> bool {
        self.groups.values().all(BTreeSet::is_empty)
    }
}
