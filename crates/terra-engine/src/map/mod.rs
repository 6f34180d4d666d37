pub mod tile;
pub mod orientation;
pub mod groups;
pub mod grid;

pub use tile::{Tile, TileRef};
pub use orientation::Orientation;
pub use groups::{TileGroups, NO_GROUP};
pub use grid::TileGrid;
