//! Per-tile active collision formulas.
//!
//! A tile starts with the formulas of the collision group matching its
//! terrain group. Constraint pruning then removes every formula whose
//! constraint lists the group of an orthogonal neighbor that has collision
//! itself. Neighbors are always judged on their group-derived sets, never on
//! already pruned ones, so the result does not depend on processing order.

use crate::collision::config::CollisionConfig;
use crate::collision::formula::FormulaId;
use crate::map::{Orientation, Tile, TileGrid};

/// Active formulas of one placed tile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileCollision {
    formulas: Vec<FormulaId>,
}

impl TileCollision {
    pub fn formulas(&self) -> &[FormulaId] {
        &self.formulas
    }

    pub fn contains(&self, formula: FormulaId) -> bool {
        self.formulas.contains(&formula)
    }

    pub fn is_empty(&self) -> bool {
        self.formulas.is_empty()
    }

    pub fn remove(&mut self, formula: FormulaId) {
        self.formulas.retain(|&id| id != formula);
    }
}

/// Active formula sets for every cell of a [`TileGrid`].
///
/// Stored row-major like the grid. Cells without a tile have an empty set.
#[derive(Debug, Clone, Default)]
pub struct MapTileCollision {
    width: u32,
    height: u32,
    cells: Vec<TileCollision>,
}

impl MapTileCollision {
    /// Build and prune the active sets of every tile of `grid`.
    pub fn load(grid: &TileGrid, config: &CollisionConfig) -> Self {
        let (width, height) = (grid.width(), grid.height());
        let mut cells = Vec::with_capacity(width as usize * height as usize);
        let mut pruned = 0usize;
        for row in 0..height as i32 {
            for col in 0..width as i32 {
                let initial = group_formulas(grid.get_tile(col, row), config).len();
                let cell = pruned_cell(grid, config, col, row);
                pruned += initial - cell.formulas.len();
                cells.push(cell);
            }
        }
        let collision = Self { width, height, cells };
        log::debug!(
            "loaded tile collisions: {} tiles with formulas, {} formulas pruned by constraints",
            collision.cells.iter().filter(|c| !c.is_empty()).count(),
            pruned
        );
        collision
    }

    fn index(&self, col: i32, row: i32) -> Option<usize> {
        if col < 0 || row < 0 || col as u32 >= self.width || row as u32 >= self.height {
            return None;
        }
        Some(row as usize * self.width as usize + col as usize)
    }

    /// Active set of the cell at (col, row).
    pub fn get(&self, col: i32, row: i32) -> Option<&TileCollision> {
        self.index(col, row).map(|idx| &self.cells[idx])
    }

    /// Active formulas of the cell at (col, row), empty when out of range.
    pub fn formulas(&self, col: i32, row: i32) -> &[FormulaId] {
        self.get(col, row).map(TileCollision::formulas).unwrap_or(&[])
    }

    /// Active formulas of a placed tile.
    pub fn formulas_of(&self, tile: &Tile) -> &[FormulaId] {
        self.formulas(tile.col(), tile.row())
    }

    /// Recompute the cells whose result depends on (col, row): the cell itself
    /// and its 4 orthogonal neighbors. Call after the tile there changed group.
    /// The grid may have grown since the last load.
    pub fn refresh_around(&mut self, grid: &TileGrid, config: &CollisionConfig, col: i32, row: i32) {
        if grid.width() != self.width || grid.height() != self.height {
            *self = Self::load(grid, config);
            return;
        }
        let mut cells = vec![(col, row)];
        cells.extend(Orientation::CARDINALS.iter().map(|o| {
            let (dx, dy) = o.delta();
            (col + dx, row + dy)
        }));
        for (c, r) in cells {
            if let Some(idx) = self.index(c, r) {
                self.cells[idx] = pruned_cell(grid, config, c, r);
            }
        }
    }

    /// Number of cells with at least one active formula.
    pub fn collidable_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }
}

/// Group-derived formulas of a tile, before pruning.
fn group_formulas<'a>(tile: Option<&Tile>, config: &'a CollisionConfig) -> &'a [FormulaId] {
    tile.and_then(|tile| config.group(&tile.group))
        .map(|group| group.formulas.as_slice())
        .unwrap_or(&[])
}

fn pruned_cell(grid: &TileGrid, config: &CollisionConfig, col: i32, row: i32) -> TileCollision {
    let mut cell = TileCollision {
        formulas: group_formulas(grid.get_tile(col, row), config).to_vec(),
    };
    for &id in group_formulas(grid.get_tile(col, row), config) {
        let Some(formula) = config.formula(id) else {
            continue;
        };
        let constraint = &formula.constraint;
        if constraint.is_empty() {
            continue;
        }
        let suppressed = Orientation::CARDINALS.iter().any(|&orientation| {
            grid.neighbor(col, row, orientation).is_some_and(|neighbor| {
                constraint.has(orientation, &neighbor.group)
                    && !group_formulas(Some(neighbor), config).is_empty()
            })
        });
        if suppressed {
            cell.remove(id);
        }
    }
    cell
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::{
        Axis, CollisionConstraint, CollisionFormula, CollisionFunction, CollisionGroup, CollisionRange,
    };
    use crate::map::{TileGroups, TileRef};

    const GROUND: TileRef = TileRef { sheet: 0, number: 0 };
    const WALL: TileRef = TileRef { sheet: 0, number: 1 };
    const DECOR: TileRef = TileRef { sheet: 0, number: 2 };

    fn setup() -> (TileGroups, CollisionConfig, FormulaId) {
        let mut groups = TileGroups::new();
        groups.insert(GROUND, "ground");
        groups.insert(WALL, "wall");
        groups.insert(DECOR, "decor");

        let mut config = CollisionConfig::new();
        let top = config
            .add_formula(
                CollisionFormula::new(
                    "top",
                    CollisionFunction::flat(Axis::X, 16),
                    CollisionRange::full(Axis::Y, 16, 16),
                )
                .with_constraint(
                    CollisionConstraint::new()
                        .with(Orientation::North, "ground")
                        .with(Orientation::North, "decor"),
                ),
            )
            .unwrap();
        let side = config
            .add_formula(CollisionFormula::new(
                "side",
                CollisionFunction::flat(Axis::Y, 0),
                CollisionRange::full(Axis::X, 16, 16),
            ))
            .unwrap();
        config
            .add_group(CollisionGroup::new("ground").with_formula(top))
            .unwrap();
        config
            .add_group(CollisionGroup::new("wall").with_formula(side))
            .unwrap();
        (groups, config, top)
    }

    #[test]
    fn tiles_take_group_formulas() {
        let (groups, config, top) = setup();
        let mut grid = TileGrid::new(3, 3, 16, 16);
        grid.place(0, 0, GROUND, &groups).unwrap();
        grid.place(2, 2, DECOR, &groups).unwrap();
        let collision = MapTileCollision::load(&grid, &config);
        assert_eq!(collision.formulas(0, 0), &[top]);
        assert!(collision.formulas(2, 2).is_empty());
        assert!(collision.formulas(1, 1).is_empty());
        assert!(collision.formulas(-1, 7).is_empty());
        assert_eq!(collision.collidable_count(), 1);
    }

    #[test]
    fn north_neighbor_with_collision_suppresses() {
        let (groups, config, top) = setup();
        let mut grid = TileGrid::new(1, 2, 16, 16);
        grid.place(0, 0, GROUND, &groups).unwrap();
        grid.place(0, 1, GROUND, &groups).unwrap();
        let collision = MapTileCollision::load(&grid, &config);
        assert!(!collision.get(0, 0).unwrap().contains(top));
        // The top tile has nothing above it.
        assert!(collision.get(0, 1).unwrap().contains(top));
    }

    /// A ground tile in the middle of a 3x3 map whose only formula is
    /// dropped by a ground neighbor on `side`.
    fn constrained_on(side: Orientation) -> (TileGroups, CollisionConfig, FormulaId) {
        let mut groups = TileGroups::new();
        groups.insert(GROUND, "ground");
        let mut config = CollisionConfig::new();
        let formula = config
            .add_formula(
                CollisionFormula::new(
                    "edge",
                    CollisionFunction::flat(Axis::X, 8),
                    CollisionRange::full(Axis::Y, 16, 16),
                )
                .with_constraint(CollisionConstraint::new().with(side, "ground")),
            )
            .unwrap();
        config
            .add_group(CollisionGroup::new("ground").with_formula(formula))
            .unwrap();
        (groups, config, formula)
    }

    #[test]
    fn each_cardinal_suppresses_on_its_own_side() {
        for side in [Orientation::South, Orientation::East, Orientation::West] {
            let (groups, config, formula) = constrained_on(side);
            let (dx, dy) = side.delta();

            let mut grid = TileGrid::new(3, 3, 16, 16);
            grid.place(1, 1, GROUND, &groups).unwrap();
            grid.place(1 + dx, 1 + dy, GROUND, &groups).unwrap();
            let collision = MapTileCollision::load(&grid, &config);
            assert!(collision.formulas(1, 1).is_empty(), "{side:?} neighbor kept the formula");
            // The neighbor has nothing further out on that side.
            assert_eq!(collision.formulas(1 + dx, 1 + dy), &[formula], "{side:?}");

            // A neighbor on the opposite side does not count.
            let mut grid = TileGrid::new(3, 3, 16, 16);
            grid.place(1, 1, GROUND, &groups).unwrap();
            grid.place(1 - dx, 1 - dy, GROUND, &groups).unwrap();
            let collision = MapTileCollision::load(&grid, &config);
            assert_eq!(collision.formulas(1, 1), &[formula], "{side:?} opposite");
        }
    }

    #[test]
    fn south_neighbor_suppresses_the_upper_tile() {
        let (groups, config, formula) = constrained_on(Orientation::South);
        // Rows grow upwards: row 0 is below row 1.
        let mut grid = TileGrid::new(1, 2, 16, 16);
        grid.place(0, 0, GROUND, &groups).unwrap();
        grid.place(0, 1, GROUND, &groups).unwrap();
        let collision = MapTileCollision::load(&grid, &config);
        assert_eq!(collision.formulas(0, 0), &[formula]);
        assert!(collision.formulas(0, 1).is_empty());
    }

    #[test]
    fn neighbor_without_collision_does_not_suppress() {
        let (groups, config, top) = setup();
        let mut grid = TileGrid::new(1, 2, 16, 16);
        grid.place(0, 0, GROUND, &groups).unwrap();
        grid.place(0, 1, DECOR, &groups).unwrap();
        let collision = MapTileCollision::load(&grid, &config);
        assert_eq!(collision.formulas(0, 0), &[top]);
    }

    #[test]
    fn unlisted_orientation_does_not_suppress() {
        let (groups, config, top) = setup();
        let mut grid = TileGrid::new(2, 1, 16, 16);
        grid.place(0, 0, GROUND, &groups).unwrap();
        grid.place(1, 0, GROUND, &groups).unwrap();
        let collision = MapTileCollision::load(&grid, &config);
        assert_eq!(collision.formulas(0, 0), &[top]);
        assert_eq!(collision.formulas(1, 0), &[top]);
    }

    #[test]
    fn pruning_uses_unpruned_neighbor_sets() {
        let (groups, config, top) = setup();
        // A column of three ground tiles: both lower tiles lose their top,
        // including the middle one whose own formula is pruned too.
        let mut grid = TileGrid::new(1, 3, 16, 16);
        for row in 0..3 {
            grid.place(0, row, GROUND, &groups).unwrap();
        }
        let collision = MapTileCollision::load(&grid, &config);
        assert!(collision.formulas(0, 0).is_empty());
        assert!(collision.formulas(0, 1).is_empty());
        assert_eq!(collision.formulas(0, 2), &[top]);
    }

    #[test]
    fn refresh_after_paint() {
        let (groups, config, top) = setup();
        let mut grid = TileGrid::new(1, 2, 16, 16);
        grid.place(0, 0, GROUND, &groups).unwrap();
        let mut collision = MapTileCollision::load(&grid, &config);
        assert_eq!(collision.formulas(0, 0), &[top]);

        grid.place(0, 1, GROUND, &groups).unwrap();
        collision.refresh_around(&grid, &config, 0, 1);
        assert!(collision.formulas(0, 0).is_empty());
        assert_eq!(collision.formulas(0, 1), &[top]);
    }
}
