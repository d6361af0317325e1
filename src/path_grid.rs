use crate::GridError;
use core::fmt;
use grid_util::grid::{BoolGrid, Grid};
use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;

/// The four axis-aligned moves in search order: up, right, down, left.
/// The order is part of the contract since it decides which of several
/// equal-cost optimal paths a search returns.
const NEIGHBOUR_OFFSETS: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// [PathGrid] owns the static shape of the search space: a [BoolGrid] of
/// obstacle flags ([true] meaning blocked) together with connected components
/// over the free cells, maintained with a [UnionFind] structure. Components
/// make "no path exists" queries cheap, avoiding flood-filling the whole grid
/// for an enclosed goal. No per-search state lives here.
#[derive(Clone, Debug)]
pub struct PathGrid {
    grid: BoolGrid,
    components: UnionFind<usize>,
    components_dirty: bool,
}

impl PathGrid {
    /// Creates an obstacle-free grid. Both dimensions must be positive.
    pub fn new(width: usize, height: usize) -> Result<PathGrid, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidGrid { width, height });
        }
        let mut path_grid = PathGrid {
            grid: BoolGrid::new(width, height, false),
            components: UnionFind::new(width * height),
            components_dirty: false,
        };
        path_grid.generate_components();
        Ok(path_grid)
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && self.grid.index_in_bounds(x as usize, y as usize)
    }

    /// Whether the cell at `(x, y)` is blocked.
    pub fn obstacle(&self, x: i32, y: i32) -> Result<bool, GridError> {
        if !self.in_bounds(x, y) {
            return Err(GridError::OutOfBounds { x, y });
        }
        Ok(self.grid.get(x as usize, y as usize))
    }

    /// Blocks or frees the cell at `(x, y)`. Off-grid coordinates are
    /// rejected rather than ignored. Blocking a free cell may split a
    /// component, so the components are flagged dirty; freeing a cell joins
    /// it with its traversable neighbours right away.
    pub fn set_obstacle(&mut self, x: i32, y: i32, blocked: bool) -> Result<(), GridError> {
        if !self.in_bounds(x, y) {
            return Err(GridError::OutOfBounds { x, y });
        }
        let was_blocked = self.grid.get(x as usize, y as usize);
        self.grid.set(x as usize, y as usize, blocked);
        if blocked {
            if !was_blocked {
                self.components_dirty = true;
            }
        } else {
            let ix = self.grid.get_ix(x as usize, y as usize);
            for n in self.neighbours(Point::new(x, y)) {
                self.components
                    .union(ix, self.grid.get_ix(n.x as usize, n.y as usize));
            }
        }
        Ok(())
    }

    pub(crate) fn can_move_to(&self, pos: Point) -> bool {
        self.in_bounds(pos.x, pos.y) && !self.grid.get(pos.x as usize, pos.y as usize)
    }

    /// The traversable neighbours of `p` in up, right, down, left order.
    pub fn neighbours(&self, p: Point) -> Vec<Point> {
        NEIGHBOUR_OFFSETS
            .iter()
            .map(|&(dx, dy)| Point::new(p.x + dx, p.y + dy))
            .filter(|n| self.can_move_to(*n))
            .collect()
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> usize {
        self.components.find(self.grid.get_ix_point(point))
    }

    /// Checks if start and goal are on the same component. Either endpoint
    /// being blocked or off-grid makes the pair unreachable.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.can_move_to(*start) && self.can_move_to(*goal) {
            let start_ix = self.grid.get_ix_point(start);
            let goal_ix = self.grid.get_ix_point(goal);
            !self.components.equiv(start_ix, goal_ix)
        } else {
            true
        }
    }

    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("components are dirty: regenerating");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up grid neighbours on
    /// the same component. Only the right and down neighbours are unioned;
    /// the sweep visits every cell, so the symmetric pairs are covered.
    pub fn generate_components(&mut self) {
        let w = self.grid.width();
        let h = self.grid.height();
        self.components = UnionFind::new(w * h);
        self.components_dirty = false;
        for x in 0..w as i32 {
            for y in 0..h as i32 {
                let point = Point::new(x, y);
                if !self.can_move_to(point) {
                    continue;
                }
                let parent_ix = self.grid.get_ix(x as usize, y as usize);
                for p in [Point::new(x + 1, y), Point::new(x, y + 1)] {
                    if self.can_move_to(p) {
                        let ix = self.grid.get_ix(p.x as usize, p.y as usize);
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }
}

impl fmt::Display for PathGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for y in 0..self.grid.height() {
            let values = (0..self.grid.width())
                .map(|x| self.grid.get(x, y) as i32)
                .collect::<Vec<i32>>();
            writeln!(f, "{:?}", values)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sized_grids_are_rejected() {
        assert_eq!(
            PathGrid::new(0, 5).unwrap_err(),
            GridError::InvalidGrid { width: 0, height: 5 }
        );
        assert_eq!(
            PathGrid::new(5, 0).unwrap_err(),
            GridError::InvalidGrid { width: 5, height: 0 }
        );
        assert!(PathGrid::new(1, 1).is_ok());
    }

    #[test]
    fn obstacle_edits_are_bounds_checked() {
        let mut grid = PathGrid::new(3, 3).unwrap();
        assert_eq!(
            grid.set_obstacle(3, 0, true).unwrap_err(),
            GridError::OutOfBounds { x: 3, y: 0 }
        );
        assert_eq!(
            grid.set_obstacle(0, -1, true).unwrap_err(),
            GridError::OutOfBounds { x: 0, y: -1 }
        );
        assert_eq!(
            grid.obstacle(-1, 0).unwrap_err(),
            GridError::OutOfBounds { x: -1, y: 0 }
        );
        grid.set_obstacle(1, 1, true).unwrap();
        assert!(grid.obstacle(1, 1).unwrap());
    }

    /// Neighbour order is up, right, down, left with blocked and off-grid
    /// cells dropped in place.
    #[test]
    fn neighbour_order() {
        let mut grid = PathGrid::new(3, 3).unwrap();
        assert_eq!(
            grid.neighbours(Point::new(1, 1)),
            vec![
                Point::new(1, 0),
                Point::new(2, 1),
                Point::new(1, 2),
                Point::new(0, 1)
            ]
        );
        // Corner cell only has right and down neighbours.
        assert_eq!(
            grid.neighbours(Point::new(0, 0)),
            vec![Point::new(1, 0), Point::new(0, 1)]
        );
        grid.set_obstacle(1, 0, true).unwrap();
        assert_eq!(
            grid.neighbours(Point::new(1, 1)),
            vec![Point::new(2, 1), Point::new(1, 2), Point::new(0, 1)]
        );
    }

    /// A wall across the grid separates the components; freeing a gap joins
    /// them again without an explicit regeneration.
    #[test]
    fn component_maintenance() {
        let mut grid = PathGrid::new(3, 3).unwrap();
        let left = Point::new(0, 0);
        let right = Point::new(2, 0);
        assert!(grid.reachable(&left, &right));
        for y in 0..3 {
            grid.set_obstacle(1, y, true).unwrap();
        }
        grid.update();
        assert!(grid.unreachable(&left, &right));
        grid.set_obstacle(1, 1, false).unwrap();
        assert!(grid.reachable(&left, &right));
    }

    #[test]
    fn blocked_endpoints_are_unreachable() {
        let mut grid = PathGrid::new(3, 3).unwrap();
        grid.set_obstacle(2, 2, true).unwrap();
        grid.update();
        assert!(grid.unreachable(&Point::new(0, 0), &Point::new(2, 2)));
        assert!(grid.unreachable(&Point::new(2, 2), &Point::new(0, 0)));
        // Off-grid endpoints are unreachable rather than a panic.
        assert!(grid.unreachable(&Point::new(0, 0), &Point::new(5, 5)));
    }
}
