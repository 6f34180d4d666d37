use serde::{Deserialize, Serialize};

/// The 8 directions of a tile's Moore neighborhood.
///
/// Rows grow upward, so `North` is `row + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Orientation {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Orientation {
    pub const ALL: [Orientation; 8] = [
        Orientation::North,
        Orientation::NorthEast,
        Orientation::East,
        Orientation::SouthEast,
        Orientation::South,
        Orientation::SouthWest,
        Orientation::West,
        Orientation::NorthWest,
    ];

    /// The 4 orthogonal directions used by collision constraints.
    pub const CARDINALS: [Orientation; 4] = [
        Orientation::North,
        Orientation::South,
        Orientation::East,
        Orientation::West,
    ];

    /// Column/row offset of the neighbor in this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Orientation::North => (0, 1),
            Orientation::NorthEast => (1, 1),
            Orientation::East => (1, 0),
            Orientation::SouthEast => (1, -1),
            Orientation::South => (0, -1),
            Orientation::SouthWest => (-1, -1),
            Orientation::West => (-1, 0),
            Orientation::NorthWest => (-1, 1),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Orientation::North => Orientation::South,
            Orientation::NorthEast => Orientation::SouthWest,
            Orientation::East => Orientation::West,
            Orientation::SouthEast => Orientation::NorthWest,
            Orientation::South => Orientation::North,
            Orientation::SouthWest => Orientation::NorthEast,
            Orientation::West => Orientation::East,
            Orientation::NorthWest => Orientation::SouthEast,
        }
    }

    /// Orientation pointing from a tile to a neighbor offset by `(dx, dy)` cells.
    ///
    /// The angle of the delta is snapped to the nearest multiple of 45 degrees.
    /// Returns `None` for the zero delta.
    pub fn from_delta(dx: i32, dy: i32) -> Option<Self> {
        if dx == 0 && dy == 0 {
            return None;
        }
        let angle = (dy as f64).atan2(dx as f64).to_degrees();
        let octant = ((angle / 45.0).round() as i32).rem_euclid(8);
        // Octant 0 is east, counting counter-clockwise.
        Some(match octant {
            0 => Orientation::East,
            1 => Orientation::NorthEast,
            2 => Orientation::North,
            3 => Orientation::NorthWest,
            4 => Orientation::West,
            5 => Orientation::SouthWest,
            6 => Orientation::South,
            _ => Orientation::SouthEast,
        })
    }
}
