// config/mod.rs
//
// JSON configuration descriptors. Each one parses with `from_json` and is
// then resolved into its typed runtime counterpart, failing on the first
// unknown name.

pub mod collision;
pub mod groups;
pub mod transitions;
pub mod map;

pub use collision::{CategoryDesc, CollisionDesc, FormulaDesc, GroupDesc};
pub use groups::{TileGroupDesc, TileGroupsDesc, TileRangeDesc};
pub use transitions::{TransitionDesc, TransitionsDesc};
pub use map::{MapDesc, MapTileDesc};
