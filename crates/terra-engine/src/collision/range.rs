use serde::{Deserialize, Serialize};
use crate::collision::function::Axis;
use crate::error::{Result, TileError};

/// Rectangular sub-region of a tile, in local pixels, where a formula applies.
///
/// Bounds are inclusive pixel indices. A range with inverted bounds covers
/// no pixel and never collides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollisionRange {
    /// Axis the formula outputs.
    pub output: Axis,
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl CollisionRange {
    pub fn new(output: Axis, min_x: i32, max_x: i32, min_y: i32, max_y: i32) -> Self {
        Self {
            output,
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Range covering a whole `width` x `height` tile.
    pub fn full(output: Axis, width: u32, height: u32) -> Self {
        Self::new(output, 0, width as i32 - 1, 0, height as i32 - 1)
    }

    /// Whether the local position lies inside the range.
    pub fn contains(&self, local_x: f64, local_y: f64) -> bool {
        let x = local_x.floor();
        let y = local_y.floor();
        x >= self.min_x as f64 && x <= self.max_x as f64 && y >= self.min_y as f64 && y <= self.max_y as f64
    }

    /// Inclusive bounds along one axis.
    pub fn bounds(&self, axis: Axis) -> (i32, i32) {
        match axis {
            Axis::X => (self.min_x, self.max_x),
            Axis::Y => (self.min_y, self.max_y),
        }
    }

    /// Reject inverted bounds. `formula` names the owner in the error.
    pub fn validate(&self, formula: &str) -> Result<()> {
        for axis in [Axis::X, Axis::Y] {
            let (min, max) = self.bounds(axis);
            if min > max {
                return Err(TileError::InvalidRange {
                    formula: formula.to_string(),
                    reason: format!("min {:?} {} is greater than max {}", axis, min, max),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_range_covers_tile() {
        let range = CollisionRange::full(Axis::Y, 16, 16);
        assert!(range.contains(0.0, 0.0));
        assert!(range.contains(15.9, 15.9));
        assert!(!range.contains(16.0, 8.0));
        assert!(!range.contains(-0.1, 8.0));
    }

    #[test]
    fn inverted_range_never_contains() {
        let range = CollisionRange::new(Axis::Y, 8, 4, 0, 15);
        assert!(!range.contains(6.0, 2.0));
        assert!(range.validate("broken").is_err());
    }

    #[test]
    fn validate_accepts_single_pixel() {
        let range = CollisionRange::new(Axis::X, 3, 3, 0, 15);
        assert!(range.validate("pillar").is_ok());
        assert!(range.contains(3.5, 0.0));
    }
}
