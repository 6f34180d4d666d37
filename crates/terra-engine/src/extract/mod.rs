// extract/mod.rs
//
// Offline analysis of authored maps. Extractors accumulate over any number
// of grids and can be cancelled between tiles.

pub mod cancel;
pub mod constraints;
pub mod transitions;

pub use cancel::CancelFlag;
pub use constraints::{ConstraintEntry, ConstraintExtractor, TileConstraint};
pub use transitions::TransitionExtractor;
