// collision/mod.rs
//
// Tile collision: formulas, groups, categories, per-tile active sets and
// the ray-marched resolver.

pub mod function;
pub mod range;
pub mod constraint;
pub mod formula;
pub mod group;
pub mod category;
pub mod config;
pub mod tile_collision;
pub mod resolver;
pub mod debug;

pub use function::{Axis, CollisionFunction};
pub use range::CollisionRange;
pub use constraint::CollisionConstraint;
pub use formula::{CollisionFormula, FormulaId};
pub use group::CollisionGroup;
pub use category::CollisionCategory;
pub use config::CollisionConfig;
pub use tile_collision::{MapTileCollision, TileCollision};
pub use resolver::{CollisionResolver, CollisionResult};
pub use debug::{collision_overlay, formula_points};
