use grid_astar::{PathGrid, Pathfinder, Point};

// Runs three searches on a 10x10 maze with two barred walls and a sealed
// pocket, printing each outcome with
// - S marking the start
// - G marking the goal
// - # marking obstacles
// - . marking the found path

fn print_grid(pathfinder: &Pathfinder, start: Point, goal: Point, path: &Option<Vec<Point>>) {
    let grid = pathfinder.grid();
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let p = Point::new(x, y);
            if p == start {
                print!("S ");
            } else if p == goal {
                print!("G ");
            } else if grid.obstacle(x, y).unwrap() {
                print!("# ");
            } else if path.as_ref().is_some_and(|path| path.contains(&p)) {
                print!(". ");
            } else {
                print!("_ ");
            }
        }
        println!();
    }
    println!();
}

fn main() -> Result<(), grid_astar::GridError> {
    let mut grid = PathGrid::new(10, 10)?;
    // Horizontal barrier with a gap at (2, 4).
    for y in 0..10 {
        if y != 4 {
            grid.set_obstacle(2, y, true)?;
        }
    }
    for y in [0, 2, 3, 4, 5] {
        grid.set_obstacle(4, y, true)?;
    }
    // Vertical barrier with a gap at (5, 6).
    for x in 0..10 {
        if x != 5 {
            grid.set_obstacle(x, 6, true)?;
        }
    }
    let mut pathfinder = Pathfinder::new(grid);

    let start = Point::new(0, 0);
    for goal in [Point::new(9, 9), Point::new(0, 5), Point::new(1, 7)] {
        let path = pathfinder.find_path(start, goal)?;
        match &path {
            Some(path) => println!(
                "Path to {:?} found with {} cells:",
                goal,
                path.len()
            ),
            None => println!("No path to {:?}:", goal),
        }
        print_grid(&pathfinder, start, goal, &path);
    }
    Ok(())
}
