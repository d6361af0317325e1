use crate::astar::astar_search;
use crate::{manhattan_distance, GridError, PathGrid};
use grid_util::grid::{Grid, SimpleGrid};
use grid_util::point::Point;
use log::info;

/// A search engine bound to one [PathGrid]. Holds the grid plus the
/// expansion-order diagnostics of the most recent search; all transient
/// search state (the node arena and the open heap) is rebuilt inside every
/// [find_path](Self::find_path) call, so a second search can never observe
/// costs or parent links left over from the first.
#[derive(Clone, Debug)]
pub struct Pathfinder {
    grid: PathGrid,
    visit_order: SimpleGrid<u32>,
    expansions: u32,
}

impl Pathfinder {
    /// Takes ownership of the grid; retrieve it with [grid_mut](Self::grid_mut)
    /// for obstacle edits between searches, or [into_grid](Self::into_grid).
    pub fn new(grid: PathGrid) -> Pathfinder {
        let visit_order = SimpleGrid::new(grid.width(), grid.height(), 0);
        Pathfinder {
            grid,
            visit_order,
            expansions: 0,
        }
    }

    pub fn grid(&self) -> &PathGrid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut PathGrid {
        &mut self.grid
    }

    pub fn into_grid(self) -> PathGrid {
        self.grid
    }

    /// Clears the expansion-order diagnostics. Calling this between searches
    /// is optional: [find_path](Self::find_path) clears them itself on entry.
    pub fn reset(&mut self) {
        self.visit_order = SimpleGrid::new(self.grid.width(), self.grid.height(), 0);
        self.expansions = 0;
    }

    /// The 1-based order in which the cell was expanded during the most
    /// recent search, or [None] if it was never expanded (or lies off-grid).
    /// The goal cell is recognized before expansion, so it never carries an
    /// order.
    pub fn visit_order(&self, x: i32, y: i32) -> Option<u32> {
        if !self.grid.in_bounds(x, y) {
            return None;
        }
        match self.visit_order.get(x as usize, y as usize) {
            0 => None,
            order => Some(order),
        }
    }

    /// Computes a shortest path from `start` to `goal` over 4-directional
    /// moves of uniform cost 1, using the Manhattan distance as heuristic.
    ///
    /// Returns the full cell sequence from start to goal inclusive, or
    /// [None] if no path exists; `start == goal` yields the single-cell
    /// path. A blocked start or goal also yields [None]: an endpoint sitting
    /// on an obstacle is an unreachable configuration, not a caller error.
    /// Off-grid endpoints are an error.
    ///
    /// Node selection is fully deterministic: minimum `g + h` first, ties by
    /// minimum `h`, remaining ties by earliest discovery. Identical inputs
    /// always produce the identical path.
    ///
    /// # Errors
    ///
    /// [GridError::OutOfBounds] if either endpoint lies outside the grid.
    pub fn find_path(
        &mut self,
        start: Point,
        goal: Point,
    ) -> Result<Option<Vec<Point>>, GridError> {
        for p in [&start, &goal] {
            if !self.grid.in_bounds(p.x, p.y) {
                return Err(GridError::OutOfBounds { x: p.x, y: p.y });
            }
        }
        self.reset();
        self.grid.update();
        if !self.grid.can_move_to(start) || !self.grid.can_move_to(goal) {
            return Ok(None);
        }
        if start == goal {
            return Ok(Some(vec![start]));
        }
        // Component check: an enclosed goal is answered without expanding
        // anything.
        if self.grid.unreachable(&start, &goal) {
            info!("{:?} is not reachable from {:?}", goal, start);
            return Ok(None);
        }
        let grid = &self.grid;
        let visit_order = &mut self.visit_order;
        let expansions = &mut self.expansions;
        let result = astar_search(
            &start,
            |node| {
                *expansions += 1;
                visit_order.set_point(*node, *expansions);
                grid.neighbours(*node)
                    .into_iter()
                    .map(|n| (n, 1))
                    .collect::<Vec<(Point, i32)>>()
            },
            |node| manhattan_distance(node, &goal),
            |node| *node == goal,
        );
        Ok(result.map(|(path, _cost)| path))
    }
}
