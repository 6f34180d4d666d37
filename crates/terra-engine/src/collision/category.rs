use crate::collision::formula::FormulaId;
use crate::collision::function::Axis;

/// Collision profile presented by a moving entity ("legs", "head", ...).
///
/// Only formulas whose output axis equals `axis` produce results for this
/// category. Formula order is the tie-break order: the first listed formula
/// that matches a tile wins.
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionCategory {
    pub name: String,
    /// Axis of the coordinate this category computes.
    pub axis: Axis,
    /// Axis the entity keeps moving along when this category collides.
    /// `None` stops the entity on both axes.
    pub slide_axis: Option<Axis>,
    /// Horizontal offset of the test point relative to the entity position.
    pub offset_x: i32,
    /// Vertical offset of the test point relative to the entity position.
    pub offset_y: i32,
    pub formulas: Vec<FormulaId>,
}

impl CollisionCategory {
    /// Category sliding along the orthogonal axis, with no offset.
    pub fn new(name: impl Into<String>, axis: Axis) -> Self {
        Self {
            name: name.into(),
            axis,
            slide_axis: Some(axis.other()),
            offset_x: 0,
            offset_y: 0,
            formulas: Vec::new(),
        }
    }

    pub fn with_offset(mut self, offset_x: i32, offset_y: i32) -> Self {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
        self
    }

    pub fn with_slide_axis(mut self, slide_axis: Option<Axis>) -> Self {
        self.slide_axis = slide_axis;
        self
    }

    /// Append a formula, keeping insertion order and ignoring duplicates.
    pub fn with_formula(mut self, formula: FormulaId) -> Self {
        if !self.formulas.contains(&formula) {
            self.formulas.push(formula);
        }
        self
    }

    /// Offset along `axis`.
    pub fn offset(&self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.offset_x,
            Axis::Y => self.offset_y,
        }
    }
}
