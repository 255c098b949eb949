//! A 2D grid of cells with per-side walls: [`WallGrid`].

use crate::geom::{Point, Range};
use crate::wall::{Wall, WallSet};

/// A rectangular grid where each cell carries its own [`WallSet`].
///
/// The grid stores adjacency and wall state only; it knows nothing about
/// pathfinding. Reads on out-of-bounds points report no walls, and
/// authoring calls on out-of-bounds points are ignored.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "WallGridRepr"))]
pub struct WallGrid {
    cells: Vec<WallSet>,
    bounds: Range,
}

/// Unvalidated mirror of [`WallGrid`] used during deserialization, so a
/// cell vector whose length disagrees with the bounds is rejected
/// instead of producing a grid that indexes out of range.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct WallGridRepr {
    cells: Vec<WallSet>,
    bounds: Range,
}

#[cfg(feature = "serde")]
impl TryFrom<WallGridRepr> for WallGrid {
    type Error = String;

    fn try_from(repr: WallGridRepr) -> Result<Self, Self::Error> {
        if repr.cells.len() != repr.bounds.len() {
            return Err(format!(
                "wall grid has {} cells for bounds {} ({} cells expected)",
                repr.cells.len(),
                repr.bounds,
                repr.bounds.len()
            ));
        }
        Ok(Self {
            cells: repr.cells,
            bounds: repr.bounds,
        })
    }
}

impl WallGrid {
    /// Create a grid of the given size with every cell fully open.
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        Self {
            cells: vec![WallSet::NONE; bounds.len()],
            bounds,
        }
    }

    /// The bounding range of the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Width of the grid.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height of the grid.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether the grid contains the given point.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Convert a point to a flat index. Returns `None` if out of bounds.
    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        let x = (p.x - self.bounds.min.x) as usize;
        let y = (p.y - self.bounds.min.y) as usize;
        Some(y * self.bounds.width() as usize + x)
    }

    /// The walls present on the cell at `p` (none if out of bounds).
    #[inline]
    pub fn walls(&self, p: Point) -> WallSet {
        match self.idx(p) {
            Some(i) => self.cells[i],
            None => WallSet::NONE,
        }
    }

    /// Whether the cell at `p` has a wall on `side`.
    #[inline]
    pub fn has_wall(&self, p: Point, side: Wall) -> bool {
        self.walls(p).contains(side)
    }

    /// Add a wall on `side` of the cell at `p`.
    pub fn add_wall(&mut self, p: Point, side: Wall) {
        if let Some(i) = self.idx(p) {
            self.cells[i].insert(side);
        }
    }

    /// Remove the wall on `side` of the cell at `p`, if present.
    pub fn remove_wall(&mut self, p: Point, side: Wall) {
        if let Some(i) = self.idx(p) {
            self.cells[i].remove(side);
        }
    }

    /// Replace the full wall set of the cell at `p`.
    pub fn set_walls(&mut self, p: Point, walls: WallSet) {
        if let Some(i) = self.idx(p) {
            self.cells[i] = walls;
        }
    }

    /// Append all in-bounds neighbours of `p` (8-way, clockwise from
    /// north) into `buf`. The caller clears `buf` before calling.
    ///
    /// Adjacency only: wall state is not consulted here. Movement
    /// legality between two adjacent cells is the caller's concern.
    pub fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.neighbors_8() {
            if self.bounds.contains(n) {
                buf.push(n);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_open() {
        let g = WallGrid::new(4, 3);
        assert_eq!(g.width(), 4);
        assert_eq!(g.height(), 3);
        for p in g.bounds() {
            assert!(g.walls(p).is_empty());
        }
    }

    #[test]
    fn add_and_remove_walls() {
        let mut g = WallGrid::new(3, 3);
        let p = Point::new(1, 1);
        g.add_wall(p, Wall::Up);
        g.add_wall(p, Wall::Left);
        assert!(g.has_wall(p, Wall::Up));
        assert!(g.has_wall(p, Wall::Left));
        assert!(!g.has_wall(p, Wall::Down));
        g.remove_wall(p, Wall::Up);
        assert!(!g.has_wall(p, Wall::Up));
        // Other cells are untouched.
        assert!(g.walls(Point::new(0, 0)).is_empty());
    }

    #[test]
    fn set_walls_replaces() {
        let mut g = WallGrid::new(2, 2);
        let p = Point::new(0, 1);
        g.add_wall(p, Wall::Up);
        g.set_walls(p, WallSet::LEFT | WallSet::RIGHT);
        assert!(!g.has_wall(p, Wall::Up));
        assert!(g.has_wall(p, Wall::Left));
        assert!(g.has_wall(p, Wall::Right));
    }

    #[test]
    fn out_of_bounds_reads_and_writes() {
        let mut g = WallGrid::new(2, 2);
        let oob = Point::new(5, 5);
        assert!(!g.contains(oob));
        assert_eq!(g.walls(oob), WallSet::NONE);
        // Authoring on out-of-bounds points is a no-op, not a panic.
        g.add_wall(oob, Wall::Up);
        assert!(!g.has_wall(oob, Wall::Up));
    }

    #[test]
    fn neighbors_clipped_to_bounds() {
        let g = WallGrid::new(3, 3);
        let mut buf = Vec::new();

        g.neighbors(Point::new(1, 1), &mut buf);
        assert_eq!(buf.len(), 8);

        buf.clear();
        g.neighbors(Point::new(0, 0), &mut buf);
        assert_eq!(buf.len(), 3);
        // Clockwise from north, clipped: E, SE, S.
        assert_eq!(buf, vec![Point::new(1, 0), Point::new(1, 1), Point::new(0, 1)]);

        buf.clear();
        g.neighbors(Point::new(2, 2), &mut buf);
        assert_eq!(buf.len(), 3);
    }

    #[test]
    fn neighbors_ignore_walls() {
        let mut g = WallGrid::new(3, 3);
        g.set_walls(Point::new(1, 0), WallSet::ALL);
        let mut buf = Vec::new();
        g.neighbors(Point::new(1, 1), &mut buf);
        // Fully walled cells are still adjacent.
        assert!(buf.contains(&Point::new(1, 0)));
    }

    #[test]
    fn zero_sized_grid() {
        let g = WallGrid::new(0, 5);
        assert!(g.bounds().is_empty());
        assert!(!g.contains(Point::ZERO));
        let mut buf = Vec::new();
        g.neighbors(Point::ZERO, &mut buf);
        assert!(buf.is_empty());
    }
}
