use crate::collision::formula::FormulaId;

/// Formulas applied to every tile of one terrain group.
///
/// The name matches a tile group name (see [`TileGroups`](crate::map::TileGroups)).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollisionGroup {
    pub name: String,
    /// Formulas in declaration order.
    pub formulas: Vec<FormulaId>,
}

impl CollisionGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            formulas: Vec::new(),
        }
    }

    pub fn with_formula(mut self, formula: FormulaId) -> Self {
        if !self.formulas.contains(&formula) {
            self.formulas.push(formula);
        }
        self
    }
}
