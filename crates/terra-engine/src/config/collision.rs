use serde::{Deserialize, Serialize};
use crate::collision::{
    Axis, CollisionCategory, CollisionConfig, CollisionConstraint, CollisionFormula, CollisionFunction,
    CollisionGroup, CollisionRange, FormulaId,
};
use crate::error::Result;

/// Collision configuration file: formulas, groups and categories.
/// Loaded from a JSON file at level load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollisionDesc {
    #[serde(default)]
    pub formulas: Vec<FormulaDesc>,
    #[serde(default)]
    pub groups: Vec<GroupDesc>,
    #[serde(default)]
    pub categories: Vec<CategoryDesc>,
}

/// Describes a single formula.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormulaDesc {
    pub name: String,
    pub function: CollisionFunction,
    pub range: CollisionRange,
    #[serde(default)]
    pub constraint: CollisionConstraint,
}

/// Formulas of a terrain group, by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupDesc {
    pub name: String,
    pub formulas: Vec<String>,
}

/// Describes an entity collision category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDesc {
    pub name: String,
    pub axis: Axis,
    /// Keep moving along the other axis on collision (default: true).
    #[serde(default = "default_slide")]
    pub slide: bool,
    #[serde(default)]
    pub offset_x: i32,
    #[serde(default)]
    pub offset_y: i32,
    /// Formulas tested by the category, in priority order.
    #[serde(default)]
    pub formulas: Vec<String>,
    /// Groups whose formulas are appended after `formulas`, in order.
    #[serde(default)]
    pub groups: Vec<String>,
}

fn default_slide() -> bool {
    true
}

impl CollisionDesc {
    /// Parse a collision configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolve names into a [`CollisionConfig`]. Unknown names fail the whole load.
    pub fn into_config(self) -> Result<CollisionConfig> {
        let mut config = CollisionConfig::new();
        for desc in self.formulas {
            let formula = CollisionFormula::new(desc.name, desc.function, desc.range)
                .with_constraint(desc.constraint);
            config.add_formula(formula)?;
        }
        for desc in self.groups {
            let mut group = CollisionGroup::new(desc.name);
            for name in &desc.formulas {
                group = group.with_formula(config.formula_id(name)?);
            }
            config.add_group(group)?;
        }
        for desc in self.categories {
            let slide_axis = desc.slide.then(|| desc.axis.other());
            let mut category = CollisionCategory::new(desc.name, desc.axis)
                .with_offset(desc.offset_x, desc.offset_y)
                .with_slide_axis(slide_axis);
            for id in category_formulas(&config, &desc.formulas, &desc.groups)? {
                category = category.with_formula(id);
            }
            config.add_category(category)?;
        }
        log::debug!(
            "collision config: {} formulas, {} groups, {} categories",
            config.formulas().count(),
            config.groups().count(),
            config.categories().count()
        );
        Ok(config)
    }
}

fn category_formulas(config: &CollisionConfig, formulas: &[String], groups: &[String]) -> Result<Vec<FormulaId>> {
    let mut ids = Vec::new();
    for name in formulas {
        ids.push(config.formula_id(name)?);
    }
    for name in groups {
        ids.extend_from_slice(&config.get_collision_group(name)?.formulas);
    }
    Ok(ids)
}
