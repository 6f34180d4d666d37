use serde::{Deserialize, Serialize};

/// A world axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// The orthogonal axis.
    pub fn other(self) -> Self {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

/// Linear collision surface in tile-local pixels: `output = input * value + offset`.
///
/// The output axis is carried by the formula's [`CollisionRange`](super::CollisionRange).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollisionFunction {
    /// Axis the function reads its input from.
    pub input: Axis,
    /// Slope coefficient.
    pub value: f64,
    /// Constant term, in pixels.
    pub offset: i32,
}

impl CollisionFunction {
    pub fn new(input: Axis, value: f64, offset: i32) -> Self {
        Self { input, value, offset }
    }

    /// Flat surface at `offset` whatever the input.
    pub fn flat(input: Axis, offset: i32) -> Self {
        Self::new(input, 0.0, offset)
    }

    pub fn compute(&self, input: f64) -> f64 {
        input * self.value + self.offset as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_ignores_input() {
        let f = CollisionFunction::flat(Axis::X, 16);
        assert_eq!(f.compute(0.0), 16.0);
        assert_eq!(f.compute(11.5), 16.0);
    }

    #[test]
    fn slope() {
        let f = CollisionFunction::new(Axis::X, 0.5, 2);
        assert_eq!(f.compute(8.0), 6.0);
        assert_eq!(f.compute(-4.0), 0.0);
    }

    #[test]
    fn other_axis() {
        assert_eq!(Axis::X.other(), Axis::Y);
        assert_eq!(Axis::Y.other(), Axis::X);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn compute_is_exact_and_stable(value in -64.0f64..64.0, offset in -256i32..256, input in -1024.0f64..1024.0) {
            let f = CollisionFunction::new(Axis::X, value, offset);
            let expected = input * value + offset as f64;
            prop_assert_eq!(f.compute(input), expected);
            prop_assert_eq!(f.compute(input), f.compute(input));
        }
    }
}
