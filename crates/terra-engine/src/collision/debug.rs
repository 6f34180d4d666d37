//! Debug overlay: collision formulas rasterized as world points.
//!
//! Call `collision_overlay()` after loading a map to see every active
//! surface. Points use the same `compute` as the collision resolver, one
//! sample per pixel along the formula's input axis.

use crate::collision::config::CollisionConfig;
use crate::collision::formula::CollisionFormula;
use crate::collision::function::Axis;
use crate::collision::tile_collision::MapTileCollision;
use crate::map::{Tile, TileGrid};

/// World points of one formula drawn across one tile.
///
/// Samples whose output falls outside the formula range are skipped, so a
/// steep slope leaves the tile instead of being clamped to its border.
pub fn formula_points(tile: &Tile, formula: &CollisionFormula) -> Vec<[f64; 2]> {
    let range = &formula.range;
    let input_axis = formula.function.input;
    let (min_in, max_in) = range.bounds(input_axis);
    let (min_out, max_out) = range.bounds(range.output);
    let mut points = Vec::new();
    for input in min_in..=max_in {
        let output = formula.compute(input as f64);
        if output < min_out as f64 || output > max_out as f64 + 1.0 {
            continue;
        }
        let (local_x, local_y) = match range.output {
            Axis::Y => (input as f64, output),
            Axis::X => (output, input as f64),
        };
        points.push([tile.x as f64 + local_x, tile.y as f64 + local_y]);
    }
    points
}

/// One polyline per active formula of every placed tile.
pub fn collision_overlay(
    grid: &TileGrid,
    collisions: &MapTileCollision,
    config: &CollisionConfig,
) -> Vec<Vec<[f64; 2]>> {
    let mut lines = Vec::new();
    for tile in grid.tiles() {
        for &id in collisions.formulas_of(tile) {
            let Some(formula) = config.formula(id) else {
                continue;
            };
            let points = formula_points(tile, formula);
            if !points.is_empty() {
                lines.push(points);
            }
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::{CollisionFunction, CollisionGroup, CollisionRange};
    use crate::map::{TileGroups, TileRef};

    #[test]
    fn flat_formula_draws_tile_width() {
        let tile = Tile::new(0, 0, 32, 16, 16, 16);
        let formula = CollisionFormula::new(
            "ground",
            CollisionFunction::flat(Axis::X, 16),
            CollisionRange::full(Axis::Y, 16, 16),
        );
        let points = formula_points(&tile, &formula);
        assert_eq!(points.len(), 16);
        assert_eq!(points[0], [32.0, 32.0]);
        assert_eq!(points[15], [47.0, 32.0]);
    }

    #[test]
    fn steep_slope_leaves_range() {
        let tile = Tile::new(0, 0, 0, 0, 16, 16);
        let formula = CollisionFormula::new(
            "steep",
            CollisionFunction::new(Axis::X, 2.0, 0),
            CollisionRange::full(Axis::Y, 16, 16),
        );
        let points = formula_points(&tile, &formula);
        // Outputs 0, 2, .. 16 stay inside; the rest leave the tile.
        assert_eq!(points.len(), 9);
        assert_eq!(points[8], [8.0, 16.0]);
    }

    #[test]
    fn overlay_covers_active_formulas() {
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
        let mut grid = TileGrid::new(4, 1, 16, 16);
        grid.fill_rect(0, 0, 3, 1, TileRef::new(0, 0), &groups);
        let collisions = MapTileCollision::load(&grid, &config);

        let lines = collision_overlay(&grid, &collisions, &config);
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|line| line.len() == 16));
    }
}
