//! # grid_astar
//!
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) pathfinding on a
//! uniform-cost grid with 4-directional movement and a
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry)
//! heuristic. Pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! to avoid flood-filling behaviour if no path exists. Node selection is
//! fully deterministic, so identical grids always yield identical paths.
//!
//! ```
//! use grid_astar::{PathGrid, Pathfinder, Point};
//!
//! let mut grid = PathGrid::new(3, 3)?;
//! grid.set_obstacle(1, 1, true)?;
//! let mut pathfinder = Pathfinder::new(grid);
//! let path = pathfinder.find_path(Point::new(0, 0), Point::new(2, 2))?;
//! assert_eq!(path.unwrap().len(), 5);
//! # Ok::<(), grid_astar::GridError>(())
//! ```
mod astar;
mod path_grid;
mod pathfinder;

pub use crate::path_grid::PathGrid;
pub use crate::pathfinder::Pathfinder;
pub use grid_util::point::Point;

use core::fmt;

/// The `|dx| + |dy|` distance: the admissible and consistent heuristic for
/// 4-directional movement at uniform cost.
pub fn manhattan_distance(a: &Point, b: &Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Errors for out-of-range coordinates and degenerate grid shapes. An
/// unreachable goal is not an error; it is reported as an absent path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate outside the grid extents. Never silently clamped or
    /// ignored.
    OutOfBounds { x: i32, y: i32 },
    /// A grid constructed with a zero dimension.
    InvalidGrid { width: usize, height: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GridError::OutOfBounds { x, y } => {
                write!(f, "coordinate ({}, {}) is outside the grid", x, y)
            }
            GridError::InvalidGrid { width, height } => {
                write!(f, "invalid grid dimensions {}x{}", width, height)
            }
        }
    }
}

impl std::error::Error for GridError {}
