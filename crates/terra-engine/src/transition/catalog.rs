//! Catalog of transition shapes.
//!
//! Each shape is a 3x3 pattern over a tile's neighborhood, scanned from the
//! top row (row + 1) down to the bottom row (row - 1), left to right:
//!
//! ```text
//!   0 1 2      NW N NE
//!   3 4 5  =   W  C  E
//!   6 7 8      SW S SE
//! ```
//!
//! `Some(true)` means "same group as the center", `Some(false)` "another
//! group" and `None` "don't care". The center slot is always `Some(true)`.

use serde::{Deserialize, Serialize};

/// One cell of a neighborhood pattern.
pub type Cell = Option<bool>;

/// A neighborhood pattern in scan order.
pub type Pattern = [Cell; 9];

const T: Cell = Some(true);
const F: Cell = Some(false);
const N: Cell = None;

macro_rules! transitions {
    ($($name:ident => $pattern:expr,)*) => {
        /// Named transition shapes, in matching priority order.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        pub enum TileTransition {
            $($name,)*
            /// No catalog shape matches.
            None,
        }

        impl TileTransition {
            /// Every shape with a pattern, in declaration order.
            pub const CATALOG: &'static [(TileTransition, Pattern)] = &[
                $((TileTransition::$name, $pattern),)*
            ];
        }
    };
}

transitions! {
    Center => [T, T, T, T, T, T, T, T, T],

    Top => [N, F, N, T, T, T, T, T, T],
    Bottom => [T, T, T, T, T, T, N, F, N],
    Left => [N, T, T, F, T, T, N, T, T],
    Right => [T, T, N, T, T, F, T, T, N],

    TopLeft => [N, F, N, F, T, T, N, T, T],
    TopRight => [N, F, N, T, T, F, T, T, N],
    BottomLeft => [N, T, T, F, T, T, N, F, N],
    BottomRight => [T, T, N, T, T, F, N, F, N],

    CornerInTopLeft => [F, T, T, T, T, T, T, T, T],
    CornerInTopRight => [T, T, F, T, T, T, T, T, T],
    CornerInBottomLeft => [T, T, T, T, T, T, F, T, T],
    CornerInBottomRight => [T, T, T, T, T, T, T, T, F],

    CornerOutTopLeftBottomRight => [F, T, T, T, T, T, T, T, F],
    CornerOutTopRightBottomLeft => [T, T, F, T, T, T, F, T, T],

    MiddleTop => [N, F, N, F, T, F, N, T, N],
    MiddleBottom => [N, T, N, F, T, F, N, F, N],
    MiddleLeft => [N, F, N, F, T, T, N, F, N],
    MiddleRight => [N, F, N, T, T, F, N, F, N],
    MiddleHorizontal => [N, F, N, T, T, T, N, F, N],
    MiddleVertical => [N, T, N, F, T, F, N, T, N],

    TopAngleBottomLeft => [N, F, N, T, T, T, F, T, T],
    TopAngleBottomRight => [N, F, N, T, T, T, T, T, F],
    BottomAngleTopLeft => [F, T, T, T, T, T, N, F, N],
    BottomAngleTopRight => [T, T, F, T, T, T, N, F, N],
    LeftAngleTopRight => [N, T, F, F, T, T, N, T, T],
    LeftAngleBottomRight => [N, T, T, F, T, T, N, T, F],
    RightAngleTopLeft => [F, T, N, T, T, F, T, T, N],
    RightAngleBottomLeft => [T, T, N, T, T, F, F, T, N],

    DiagonalTopLeft => [N, F, N, F, T, T, N, T, F],
    DiagonalTopRight => [N, F, N, T, T, F, F, T, N],
    DiagonalBottomLeft => [N, T, F, F, T, T, N, F, N],
    DiagonalBottomRight => [F, T, N, T, T, F, N, F, N],

    Isolated => [N, F, N, F, T, F, N, F, N],
}

impl TileTransition {
    /// First catalog shape matching `pattern`, [`TileTransition::None`] otherwise.
    ///
    /// A `None` cell on either side matches anything.
    pub fn from_pattern(pattern: &Pattern) -> Self {
        Self::CATALOG
            .iter()
            .find(|(_, shape)| matches(shape, pattern))
            .map(|(transition, _)| *transition)
            .unwrap_or(TileTransition::None)
    }

    /// Pattern of this shape, `None` for [`TileTransition::None`].
    pub fn pattern(self) -> Option<&'static Pattern> {
        Self::CATALOG
            .iter()
            .find(|(transition, _)| *transition == self)
            .map(|(_, pattern)| pattern)
    }
}

fn matches(shape: &Pattern, pattern: &Pattern) -> bool {
    shape
        .iter()
        .zip(pattern.iter())
        .all(|(expected, actual)| match (expected, actual) {
            (Some(expected), Some(actual)) => expected == actual,
            _ => true,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_same_is_center() {
        assert_eq!(TileTransition::from_pattern(&[T; 9]), TileTransition::Center);
    }

    #[test]
    fn north_foreign_is_top() {
        let pattern = [T, F, T, T, T, T, T, T, T];
        assert_eq!(TileTransition::from_pattern(&pattern), TileTransition::Top);
    }

    #[test]
    fn unknown_neighbors_match_anything() {
        // Map corner: only east, south-east and south are known.
        let pattern = [N, N, N, N, T, T, N, T, T];
        assert_eq!(TileTransition::from_pattern(&pattern), TileTransition::Center);
    }

    #[test]
    fn unmatched_pattern_is_none() {
        // North foreign and both southern corners foreign.
        let pattern = [T, F, T, T, T, T, F, T, F];
        assert_eq!(TileTransition::from_pattern(&pattern), TileTransition::None);
    }

    #[test]
    fn catalog_shapes_match_themselves() {
        for (transition, pattern) in TileTransition::CATALOG {
            assert_eq!(pattern[4], T, "{:?} center", transition);
            let concrete = pattern.map(|cell| cell.or(Some(true)));
            // Shapes never overlap on concrete patterns.
            assert_eq!(TileTransition::from_pattern(&concrete), *transition);
        }
    }

    #[test]
    fn corner_shapes() {
        assert_eq!(
            TileTransition::from_pattern(&[T, F, T, F, T, T, T, T, T]),
            TileTransition::TopLeft
        );
        assert_eq!(
            TileTransition::from_pattern(&[T, T, T, T, T, T, T, T, F]),
            TileTransition::CornerInBottomRight
        );
        assert_eq!(
            TileTransition::from_pattern(&[F, F, F, F, T, F, F, F, F]),
            TileTransition::Isolated
        );
    }

    #[test]
    fn pattern_lookup() {
        assert_eq!(TileTransition::Top.pattern(), Some(&[N, F, N, T, T, T, T, T, T]));
        assert!(TileTransition::None.pattern().is_none());
        assert_eq!(TileTransition::CATALOG.len(), 34);
    }

    #[test]
    fn serializes_screaming_case() {
        let json = serde_json::to_string(&TileTransition::CornerInTopLeft).unwrap();
        assert_eq!(json, "\"CORNER_IN_TOP_LEFT\"");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn every_concrete_pattern_resolves(bits in 0u16..512) {
            let mut pattern = [T; 9];
            for (i, cell) in pattern.iter_mut().enumerate() {
                if i != 4 {
                    *cell = Some(bits & (1 << i) != 0);
                }
            }
            let transition = TileTransition::from_pattern(&pattern);
            if let Some(shape) = transition.pattern() {
                prop_assert!(matches(shape, &pattern));
            } else {
                prop_assert_eq!(transition, TileTransition::None);
            }
        }
    }
}
