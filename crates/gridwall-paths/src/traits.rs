//! The collaborator seam between the search and the map.

use gridwall_core::{Point, Range, Wall, WallGrid};

/// Map interface consumed by [`find_path`](crate::find_path).
///
/// Implementations supply adjacency and wall state; the engine never
/// touches map storage directly.
pub trait WallPather {
    /// The valid coordinate range. Queries outside it are rejected.
    fn bounds(&self) -> Range;

    /// Append all in-grid neighbors of `p` (including diagonals) into
    /// `buf`. The caller clears `buf` before calling. The enumeration
    /// order must be fixed — equal-cost path choices depend on it.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);

    /// Whether the cell at `p` has a wall on `side`, as of now. Must be
    /// a pure read of current map state.
    fn has_wall(&self, p: Point, side: Wall) -> bool;
}

impl WallPather for WallGrid {
    fn bounds(&self) -> Range {
        WallGrid::bounds(self)
    }

    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        WallGrid::neighbors(self, p, buf);
    }

    fn has_wall(&self, p: Point, side: Wall) -> bool {
        WallGrid::has_wall(self, p, side)
    }
}
