use grid_astar::{PathGrid, Pathfinder, Point};

// In this demo a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Cells have a 4-neighbourhood, so the path has to bend around the obstacle.

fn main() -> Result<(), grid_astar::GridError> {
    let mut grid = PathGrid::new(3, 3)?;
    grid.set_obstacle(1, 1, true)?;
    println!("{}", grid);
    let mut pathfinder = Pathfinder::new(grid);
    let start = Point::new(0, 0);
    let end = Point::new(2, 2);
    let path = pathfinder.find_path(start, end)?.unwrap();
    println!("Path:");
    for p in path {
        println!("{:?}", p);
    }
    Ok(())
}
