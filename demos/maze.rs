//! Carve a random maze, run the pathfinder corner to corner, and print
//! the result as ASCII art.
//!
//! Usage: `maze [width] [height] [seed]`

use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;

use gridwall_core::{MazeGen, Point, Wall, WallGrid};
use gridwall_paths::find_path;

fn main() {
    let mut args = std::env::args().skip(1);
    let width: i32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(16);
    let height: i32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(10);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(2026);

    let mut grid = WallGrid::new(width, height);
    MazeGen::new(StdRng::seed_from_u64(seed)).carve(&mut grid);

    let from = Point::ZERO;
    let to = Point::new(width - 1, height - 1);
    let path = match find_path(&grid, from, to) {
        Ok(Some(path)) => path,
        Ok(None) => {
            eprintln!("no path from {from} to {to}");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("search failed: {e}");
            std::process::exit(1);
        }
    };

    let cost: i32 = path
        .windows(2)
        .map(|w| gridwall_paths::octile(w[0], w[1]))
        .sum();
    println!(
        "maze {width}x{height} (seed {seed}): {} steps, cost {cost}",
        path.len() - 1
    );
    print_maze(&grid, &path);
}

fn print_maze(grid: &WallGrid, path: &[Point]) {
    let on_path: HashSet<Point> = path.iter().copied().collect();
    let bounds = grid.bounds();

    for y in bounds.min.y..bounds.max.y {
        // Upper boundary of this row.
        let mut top = String::new();
        for x in bounds.min.x..bounds.max.x {
            top.push('+');
            if grid.has_wall(Point::new(x, y), Wall::Up) {
                top.push_str("--");
            } else {
                top.push_str("  ");
            }
        }
        top.push('+');
        println!("{top}");

        // Cell row with left-side walls.
        let mut row = String::new();
        for x in bounds.min.x..bounds.max.x {
            let p = Point::new(x, y);
            row.push(if grid.has_wall(p, Wall::Left) { '|' } else { ' ' });
            row.push_str(if on_path.contains(&p) { "()" } else { "  " });
        }
        let last = Point::new(bounds.max.x - 1, y);
        row.push(if grid.has_wall(last, Wall::Right) { '|' } else { ' ' });
        println!("{row}");
    }

    // Bottom boundary of the final row.
    let mut bottom = String::new();
    let y = bounds.max.y - 1;
    for x in bounds.min.x..bounds.max.x {
        bottom.push('+');
        if grid.has_wall(Point::new(x, y), Wall::Down) {
            bottom.push_str("--");
        } else {
            bottom.push_str("  ");
        }
    }
    bottom.push('+');
    println!("{bottom}");
}
