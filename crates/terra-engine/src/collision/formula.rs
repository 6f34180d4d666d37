use crate::collision::constraint::CollisionConstraint;
use crate::collision::function::CollisionFunction;
use crate::collision::range::CollisionRange;

/// Index of a formula inside its [`CollisionConfig`](super::CollisionConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FormulaId(pub u32);

/// A named collision surface local to one tile: function, validity range
/// and neighbor constraint.
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionFormula {
    pub name: String,
    pub function: CollisionFunction,
    pub range: CollisionRange,
    pub constraint: CollisionConstraint,
}

impl CollisionFormula {
    /// Unconstrained formula.
    pub fn new(name: impl Into<String>, function: CollisionFunction, range: CollisionRange) -> Self {
        Self {
            name: name.into(),
            function,
            range,
            constraint: CollisionConstraint::default(),
        }
    }

    pub fn with_constraint(mut self, constraint: CollisionConstraint) -> Self {
        self.constraint = constraint;
        self
    }

    /// Evaluate the formula's function.
    pub fn compute(&self, input: f64) -> f64 {
        self.function.compute(input)
    }
}
