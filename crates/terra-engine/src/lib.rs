pub mod error;
pub mod map;
pub mod collision;
pub mod transition;
pub mod extract;
pub mod config;
pub mod world;

// Re-export key types at crate root for convenience
pub use error::{Result, TileError};
pub use map::{Orientation, Tile, TileGrid, TileGroups, TileRef, NO_GROUP};
pub use collision::{
    Axis, CollisionCategory, CollisionConfig, CollisionConstraint, CollisionFormula, CollisionFunction,
    CollisionGroup, CollisionRange, CollisionResolver, CollisionResult, FormulaId, MapTileCollision,
    TileCollision,
};
pub use collision::{collision_overlay, formula_points};
pub use transition::{GroupTransition, Pattern, TileTransition, TransitionResolver, TransitionTable};
pub use extract::{CancelFlag, ConstraintEntry, ConstraintExtractor, TileConstraint, TransitionExtractor};
pub use config::{CollisionDesc, MapDesc, TileGroupsDesc, TransitionsDesc};
pub use world::{Entity, EntityId, Scene, TileWorld};
