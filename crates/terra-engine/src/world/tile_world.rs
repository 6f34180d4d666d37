use glam::DVec2;
use crate::collision::{
    Axis, CollisionCategory, CollisionConfig, CollisionResolver, CollisionResult, MapTileCollision,
};
use crate::config::{CollisionDesc, MapDesc, TileGroupsDesc, TransitionsDesc};
use crate::error::Result;
use crate::map::{TileGrid, TileRef};
use crate::transition::TransitionResolver;
use crate::world::entity::{Entity, EntityId};
use crate::world::scene::Scene;

/// A loaded level: the tile grid with its collision and transition state,
/// and the entities moving over it.
///
/// Owned and mutated by the update loop only; one tick is one [`update`](Self::update).
#[derive(Debug)]
pub struct TileWorld {
    grid: TileGrid,
    collision: CollisionConfig,
    collisions: MapTileCollision,
    transitions: TransitionResolver,
    scene: Scene,
}

impl TileWorld {
    /// Build the per-tile collision sets of `grid` and wrap everything up.
    pub fn new(grid: TileGrid, collision: CollisionConfig, transitions: TransitionResolver) -> Self {
        let collisions = MapTileCollision::load(&grid, &collision);
        log::debug!(
            "world loaded: {}x{} tiles, {} placed, {} collidable",
            grid.width(),
            grid.height(),
            grid.tiles_number(),
            collisions.collidable_count()
        );
        Self {
            grid,
            collision,
            collisions,
            transitions,
            scene: Scene::new(),
        }
    }

    /// Load a level from its configuration descriptors.
    pub fn from_descs(
        map: MapDesc,
        groups: TileGroupsDesc,
        collision: CollisionDesc,
        transitions: TransitionsDesc,
    ) -> Result<Self> {
        let groups = groups.into_groups();
        let grid = map.into_grid(&groups)?;
        let collision = collision.into_config()?;
        let transitions = TransitionResolver::new(transitions.into_table(), groups);
        Ok(Self::new(grid, collision, transitions))
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn collision_config(&self) -> &CollisionConfig {
        &self.collision
    }

    pub fn collisions(&self) -> &MapTileCollision {
        &self.collisions
    }

    pub fn transitions(&self) -> &TransitionResolver {
        &self.transitions
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Collision queries against the current map state.
    pub fn resolver(&self) -> CollisionResolver<'_> {
        CollisionResolver::new(&self.grid, &self.collisions, &self.collision)
    }

    /// Spawn an entity. Every category it lists must be configured.
    pub fn spawn(&mut self, entity: Entity) -> Result<EntityId> {
        for name in &entity.categories {
            self.collision.get_collision_category(name)?;
        }
        Ok(self.scene.spawn(entity))
    }

    pub fn despawn(&mut self, id: EntityId) -> Option<Entity> {
        self.scene.despawn(id)
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.scene.get(id)
    }

    /// Advance one tick. `extrp` scales every velocity (frame extrapolation).
    ///
    /// Each active entity moves, then tests its categories in order from its
    /// old position to its new one and snaps onto every result.
    pub fn update(&mut self, extrp: f64) {
        let resolver = CollisionResolver::new(&self.grid, &self.collisions, &self.collision);
        for entity in self.scene.iter_mut().filter(|e| e.active) {
            entity.contacts.clear();
            entity.old_pos = entity.pos;
            entity.pos += entity.velocity * extrp;
            for name in &entity.categories {
                // Checked by `spawn`, and the configuration never changes afterwards.
                let Ok(category) = self.collision.get_collision_category(name) else {
                    continue;
                };
                if let Some(result) = resolver.compute_collision(entity.old_pos, entity.pos, category) {
                    snap(&mut entity.pos, &mut entity.velocity, entity.old_pos, category, &result);
                    entity.contacts.push(result);
                }
            }
        }
    }

    /// Paint a tile graphic at (col, row): collision sets around the cell
    /// are rebuilt and transitions are resolved on the cell and its 8
    /// neighbors.
    pub fn paint(&mut self, col: i32, row: i32, tile_ref: TileRef) -> Result<()> {
        self.grid.place(col, row, tile_ref, self.transitions.groups())?;
        self.collisions.refresh_around(&self.grid, &self.collision, col, row);
        self.transitions.resolve_cascade(&mut self.grid, col, row);
        Ok(())
    }

    /// Remove the tile at (col, row), updating collisions and transitions around it.
    pub fn erase(&mut self, col: i32, row: i32) -> Option<TileRef> {
        let tile = self.grid.remove_tile(col, row)?;
        self.collisions.refresh_around(&self.grid, &self.collision, col, row);
        self.transitions.resolve_cascade(&mut self.grid, col, row);
        Some(tile.tile_ref())
    }

    /// Resolve transitions over the whole map, typically once after load.
    pub fn resolve_transitions(&mut self) {
        self.transitions.resolve_all(&mut self.grid);
    }
}

/// Move onto a collision result. The axis that is neither computed nor
/// allowed to slide goes back to its old value.
fn snap(pos: &mut DVec2, velocity: &mut DVec2, old: DVec2, category: &CollisionCategory, result: &CollisionResult) {
    if let Some(x) = result.x {
        pos.x = x;
        velocity.x = 0.0;
    }
    if let Some(y) = result.y {
        pos.y = y;
        velocity.y = 0.0;
    }
    let other = category.axis.other();
    if category.slide_axis != Some(other) {
        match other {
            Axis::X => pos.x = old.x,
            Axis::Y => pos.y = old.y,
        }
    }
}
