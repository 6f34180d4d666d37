//! Ray-marched collision search against tile formulas.
//!
//! The movement vector is walked one pixel at a time from the old position
//! to the new one. Each step advances the vertical component first and tests,
//! then the horizontal component and tests again, so a thin tile edge can
//! not be skipped. The first tile that yields a result wins.

use glam::DVec2;
use crate::collision::category::CollisionCategory;
use crate::collision::config::CollisionConfig;
use crate::collision::function::Axis;
use crate::collision::tile_collision::MapTileCollision;
use crate::map::{Tile, TileGrid};

/// Where a moving entity hits a tile surface.
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionResult {
    /// Collision x, set when the category computes the X axis.
    pub x: Option<f64>,
    /// Collision y, set when the category computes the Y axis.
    pub y: Option<f64>,
    /// Tile that was hit.
    pub tile: Tile,
}

/// Stateless collision query service over a loaded map.
#[derive(Debug, Clone, Copy)]
pub struct CollisionResolver<'a> {
    grid: &'a TileGrid,
    collisions: &'a MapTileCollision,
    config: &'a CollisionConfig,
}

impl<'a> CollisionResolver<'a> {
    pub fn new(grid: &'a TileGrid, collisions: &'a MapTileCollision, config: &'a CollisionConfig) -> Self {
        Self {
            grid,
            collisions,
            config,
        }
    }

    /// First collision met while moving from `old` to `new` with `category`.
    ///
    /// Both positions are shifted by the category offset. A zero length
    /// movement never collides.
    pub fn compute_collision(&self, old: DVec2, new: DVec2, category: &CollisionCategory) -> Option<CollisionResult> {
        let offset = DVec2::new(category.offset_x as f64, category.offset_y as f64);
        let start = old + offset;
        let delta = (new + offset) - start;
        let norm = delta.length();
        if norm == 0.0 || !norm.is_finite() {
            return None;
        }
        let step = delta / norm;

        let mut current = start;
        let mut count = 0u32;
        while (count as f64) < norm {
            current.y += step.y;
            if let Some(result) = self.test(category, start, current, delta) {
                return Some(result);
            }
            current.x += step.x;
            if let Some(result) = self.test(category, start, current, delta) {
                return Some(result);
            }
            count += 1;
        }
        None
    }

    /// Test the tile under `current`.
    fn test(&self, category: &CollisionCategory, start: DVec2, current: DVec2, delta: DVec2) -> Option<CollisionResult> {
        let sample = current.round();
        let tile = self.grid.tile_at(sample.x, sample.y)?;
        let active = self.collisions.formulas_of(tile);
        if active.is_empty() {
            return None;
        }
        let origin = DVec2::new(tile.x as f64, tile.y as f64);
        let local = sample - origin;

        // Ids unknown to the config never match.
        let formula = category.formulas.iter().find_map(|&id| {
            let formula = self.config.formula(id)?;
            let matches = active.contains(&id)
                && formula.range.output == category.axis
                && formula.range.contains(local.x, local.y);
            matches.then_some(formula)
        })?;

        // Surface position is taken where the entity was, not where it goes.
        let input = match formula.function.input {
            Axis::X => start.x - origin.x,
            Axis::Y => start.y - origin.y,
        };
        let (tile_origin, moving) = match category.axis {
            Axis::X => (origin.x, delta.x),
            Axis::Y => (origin.y, delta.y),
        };
        let mut coord = tile_origin + formula.compute(input) - category.offset(category.axis) as f64;
        if moving > 0.0 {
            coord -= 1.0;
        } else if moving < 0.0 {
            coord += 1.0;
        }

        let (x, y) = match category.axis {
            Axis::X => (Some(coord), None),
            Axis::Y => (None, Some(coord)),
        };
        Some(CollisionResult {
            x,
            y,
            tile: tile.clone(),
        })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::collision::{CollisionFormula, CollisionFunction, CollisionGroup, CollisionRange};
    use crate::map::{TileGroups, TileRef};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn marching_terminates(
            ox in -200.0f64..200.0, oy in -200.0f64..200.0,
            nx in -200.0f64..200.0, ny in -200.0f64..200.0,
        ) {
            let mut groups = TileGroups::new();
            groups.insert(TileRef::new(0, 0), "ground");
            let mut config = CollisionConfig::new();
            let id = config
                .add_formula(CollisionFormula::new(
                    "ground",
                    CollisionFunction::flat(Axis::X, 16),
                    CollisionRange::full(Axis::Y, 16, 16),
                ))
                .unwrap();
            config.add_group(CollisionGroup::new("ground").with_formula(id)).unwrap();
            let mut grid = TileGrid::new(4, 4, 16, 16);
            grid.fill_rect(0, 0, 4, 1, TileRef::new(0, 0), &groups);
            let collisions = MapTileCollision::load(&grid, &config);
            let resolver = CollisionResolver::new(&grid, &collisions, &config);
            let legs = CollisionCategory::new("legs", Axis::Y).with_formula(id);

            let old = DVec2::new(ox, oy);
            let new = DVec2::new(nx, ny);
            let result = resolver.compute_collision(old, new, &legs);
            if old == new {
                prop_assert!(result.is_none());
            }
            if let Some(result) = result {
                prop_assert!(result.y.is_some());
                prop_assert_eq!(result.tile.row(), 0);
            }
        }
    }
}
