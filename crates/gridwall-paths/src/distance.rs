//! Grid distance metrics.

use gridwall_core::Point;

/// Cost of one cardinal step.
pub const STRAIGHT_COST: i32 = 10;

/// Cost of one diagonal step (≈ √2 × [`STRAIGHT_COST`]).
pub const DIAGONAL_COST: i32 = 14;

/// Octile distance between two points, in tenths of a step.
///
/// The shortest 8-way move sequence between `a` and `b` takes
/// `min(dx, dy)` diagonal steps and `|dx - dy|` straight steps; this is
/// that sequence's cost. For adjacent points it reduces to the single
/// step's movement cost (10 straight, 14 diagonal).
#[inline]
pub fn octile(a: Point, b: Point) -> i32 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    DIAGONAL_COST * dx.min(dy) + STRAIGHT_COST * (dx - dy).abs()
}
