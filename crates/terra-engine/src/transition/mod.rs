// transition/mod.rs
//
// Terrain transitions: shape catalog, replacement tables and the resolver
// that rewrites tiles so neighboring groups blend.

pub mod catalog;
pub mod table;
pub mod resolver;

pub use catalog::{Cell, Pattern, TileTransition};
pub use table::{GroupTransition, TransitionTable};
pub use resolver::{foreign_group, neighborhood_pattern, TransitionResolver};
