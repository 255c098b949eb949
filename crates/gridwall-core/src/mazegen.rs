//! Maze generation for [`WallGrid`] maps.
//!
//! Uses the recursive-backtracker algorithm (iterative, stack-based):
//! start from a fully walled grid and knock out wall pairs along a random
//! spanning tree of cardinal moves. The result is a *perfect* maze —
//! every cell is reachable from every other by exactly one passage route.

use rand::{Rng, RngExt};

use crate::geom::Point;
use crate::grid::WallGrid;
use crate::wall::{Wall, WallSet};

/// Maze generator operating on a [`WallGrid`].
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator with the given random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Carve a maze into `grid`, replacing its current wall state.
    ///
    /// Every cell first gets all four walls, then passages are opened on
    /// both sides at once, so carved openings are always symmetric.
    pub fn carve(&mut self, grid: &mut WallGrid) {
        let bounds = grid.bounds();
        if bounds.is_empty() {
            return;
        }
        for p in bounds {
            grid.set_walls(p, WallSet::ALL);
        }

        let width = bounds.width() as usize;
        let flat = |p: Point| {
            (p.y - bounds.min.y) as usize * width + (p.x - bounds.min.x) as usize
        };

        let mut visited = vec![false; bounds.len()];
        let mut stack = vec![bounds.min];
        visited[flat(bounds.min)] = true;

        let mut candidates: Vec<Wall> = Vec::with_capacity(4);
        while let Some(&cur) = stack.last() {
            candidates.clear();
            for side in Wall::SIDES {
                let next = cur + side.delta();
                if bounds.contains(next) && !visited[flat(next)] {
                    candidates.push(side);
                }
            }
            if candidates.is_empty() {
                stack.pop();
                continue;
            }
            let dir = candidates[self.rng.random_range(0..candidates.len())];
            let next = cur + dir.delta();
            // Open the passage on both sides: the entry side of each cell.
            grid.remove_wall(next, dir.opposite());
            grid.remove_wall(cur, dir);
            visited[flat(next)] = true;
            stack.push(next);
        }
    }
}
