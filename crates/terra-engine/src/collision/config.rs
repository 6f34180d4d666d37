//! Collision configuration registry.
//!
//! Formulas, groups and categories are stored in insertion order so that
//! every "first match wins" rule is deterministic. Lookups by name fail fast
//! with a named error; nothing is ever substituted.

use std::collections::HashMap;
use crate::collision::category::CollisionCategory;
use crate::collision::formula::{CollisionFormula, FormulaId};
use crate::collision::group::CollisionGroup;
use crate::error::{Result, TileError};

/// Immutable-after-load collision configuration.
#[derive(Debug, Clone, Default)]
pub struct CollisionConfig {
    formulas: Vec<CollisionFormula>,
    formula_index: HashMap<String, FormulaId>,
    groups: Vec<CollisionGroup>,
    group_index: HashMap<String, usize>,
    categories: Vec<CollisionCategory>,
    category_index: HashMap<String, usize>,
}

impl CollisionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a formula. Its range is validated and its name must be unique.
    pub fn add_formula(&mut self, formula: CollisionFormula) -> Result<FormulaId> {
        formula.range.validate(&formula.name)?;
        if self.formula_index.contains_key(&formula.name) {
            return Err(TileError::DuplicateName {
                kind: "formula",
                name: formula.name,
            });
        }
        let id = FormulaId(self.formulas.len() as u32);
        self.formula_index.insert(formula.name.clone(), id);
        self.formulas.push(formula);
        Ok(id)
    }

    /// Register a group. Every referenced formula must exist.
    pub fn add_group(&mut self, group: CollisionGroup) -> Result<()> {
        self.check_formulas(&group.formulas)?;
        if self.group_index.contains_key(&group.name) {
            return Err(TileError::DuplicateName {
                kind: "group",
                name: group.name,
            });
        }
        self.group_index.insert(group.name.clone(), self.groups.len());
        self.groups.push(group);
        Ok(())
    }

    /// Register a category. Every referenced formula must exist.
    pub fn add_category(&mut self, category: CollisionCategory) -> Result<()> {
        self.check_formulas(&category.formulas)?;
        if self.category_index.contains_key(&category.name) {
            return Err(TileError::DuplicateName {
                kind: "category",
                name: category.name,
            });
        }
        self.category_index.insert(category.name.clone(), self.categories.len());
        self.categories.push(category);
        Ok(())
    }

    fn check_formulas(&self, formulas: &[FormulaId]) -> Result<()> {
        match formulas.iter().find(|id| id.0 as usize >= self.formulas.len()) {
            Some(id) => Err(TileError::FormulaNotFound(format!("#{}", id.0))),
            None => Ok(()),
        }
    }

    /// Id of the formula named `name`.
    pub fn formula_id(&self, name: &str) -> Result<FormulaId> {
        self.formula_index
            .get(name)
            .copied()
            .ok_or_else(|| TileError::FormulaNotFound(name.to_string()))
    }

    pub fn get_collision_formula(&self, name: &str) -> Result<&CollisionFormula> {
        let id = self.formula_id(name)?;
        self.formula(id)
            .ok_or_else(|| TileError::FormulaNotFound(name.to_string()))
    }

    /// Formula by id, `None` for an id this registry never handed out.
    pub fn formula(&self, id: FormulaId) -> Option<&CollisionFormula> {
        self.formulas.get(id.0 as usize)
    }

    pub fn get_collision_group(&self, name: &str) -> Result<&CollisionGroup> {
        self.group(name)
            .ok_or_else(|| TileError::GroupNotFound(name.to_string()))
    }

    /// Group matching a tile group name. Tiles of unknown groups have no collision.
    pub fn group(&self, name: &str) -> Option<&CollisionGroup> {
        self.group_index.get(name).map(|&idx| &self.groups[idx])
    }

    pub fn get_collision_category(&self, name: &str) -> Result<&CollisionCategory> {
        self.category_index
            .get(name)
            .map(|&idx| &self.categories[idx])
            .ok_or_else(|| TileError::CategoryNotFound(name.to_string()))
    }

    pub fn formulas(&self) -> impl Iterator<Item = (FormulaId, &CollisionFormula)> {
        self.formulas
            .iter()
            .enumerate()
            .map(|(idx, formula)| (FormulaId(idx as u32), formula))
    }

    pub fn groups(&self) -> impl Iterator<Item = &CollisionGroup> {
        self.groups.iter()
    }

    pub fn categories(&self) -> impl Iterator<Item = &CollisionCategory> {
        self.categories.iter()
    }
}
