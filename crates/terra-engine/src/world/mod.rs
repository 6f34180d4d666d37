// world/mod.rs
//
// Runtime level: entities stored in a scene, moved each tick and snapped
// onto the tile collision surfaces.

pub mod entity;
pub mod scene;
pub mod tile_world;

pub use entity::{Entity, EntityId};
pub use scene::Scene;
pub use tile_world::TileWorld;
