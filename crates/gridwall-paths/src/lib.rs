//! **gridwall-paths** — A* pathfinding over walled grids.
//!
//! Computes shortest paths between cells of a grid whose traversal is
//! restricted by per-side wall flags (see [`gridwall_core::WallGrid`]):
//! a cell refuses entry through any side that carries a wall, and wall
//! configurations may be asymmetric, so one-way passages are ordinary.
//!
//! The search is A* with an octile-distance heuristic over 8-way
//! movement (cardinal steps cost 10, diagonal steps 14). The open list
//! is an [`IndexedMinHeap`], a handle-based binary heap supporting the
//! in-place cost updates A* relaxation needs in O(log n).
//!
//! # Example
//!
//! ```
//! use gridwall_core::{Point, Wall, WallGrid};
//! use gridwall_paths::find_path;
//!
//! let mut grid = WallGrid::new(3, 3);
//! grid.add_wall(Point::new(1, 1), Wall::Left);
//!
//! let path = find_path(&grid, Point::new(0, 0), Point::new(2, 2))
//!     .expect("endpoints are in bounds")
//!     .expect("the grid is connected");
//! assert_eq!(path.first(), Some(&Point::new(0, 0)));
//! assert_eq!(path.last(), Some(&Point::new(2, 2)));
//! ```

mod astar;
mod distance;
mod errors;
mod heap;
mod traits;

pub use astar::find_path;
pub use distance::{DIAGONAL_COST, STRAIGHT_COST, octile};
pub use errors::{HeapError, PathError};
pub use heap::{IndexedMinHeap, NodeId};
pub use traits::WallPather;
