use glam::DVec2;
use crate::collision::CollisionResult;

/// Generational handle to an entity of a [`Scene`](super::Scene).
///
/// A despawned slot is reused with a bumped generation, so stale handles
/// never reach the new occupant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct EntityId {
    pub index: u32,
    pub generation: u32,
}

impl EntityId {
    pub fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }
}

/// A moving object tested against the tile map each tick.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Assigned by the scene on spawn.
    pub id: EntityId,
    /// Inactive entities are neither moved nor collided.
    pub active: bool,
    /// Position in world pixels, y up.
    pub pos: DVec2,
    /// Position at the start of the last update.
    pub old_pos: DVec2,
    /// Displacement per tick.
    pub velocity: DVec2,
    /// Collision categories tested in order. Only set through
    /// [`with_category`](Self::with_category) so a spawned entity keeps the
    /// categories validated by [`TileWorld::spawn`](super::TileWorld::spawn).
    pub(crate) categories: Vec<String>,
    /// Collisions met during the last update.
    pub contacts: Vec<CollisionResult>,
}

impl Entity {
    pub fn new() -> Self {
        Self {
            id: EntityId::default(),
            active: true,
            pos: DVec2::ZERO,
            old_pos: DVec2::ZERO,
            velocity: DVec2::ZERO,
            categories: Vec::new(),
            contacts: Vec::new(),
        }
    }

    // -- Builder pattern --

    /// Place the entity. The old position follows so the first update does
    /// not sweep from the origin.
    pub fn with_pos(mut self, pos: DVec2) -> Self {
        self.pos = pos;
        self.old_pos = pos;
        self
    }

    pub fn with_velocity(mut self, velocity: DVec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.push(category.into());
        self
    }

    /// Collision categories, in test order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Whether the last update hit something.
    pub fn collided(&self) -> bool {
        !self.contacts.is_empty()
    }
}

impl Default for Entity {
    fn default() -> Self {
        Self::new()
    }
}
