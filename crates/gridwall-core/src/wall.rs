//! Directional wall flags: [`Wall`] and [`WallSet`].
//!
//! Walls are a per-cell, per-side property: a wall on side `S` of a cell
//! blocks any movement that would enter that cell *through* side `S`.
//! Because each cell carries its own flags, wall configurations may be
//! asymmetric: a cell can refuse entry from the west while its western
//! neighbour freely accepts entry from the east.

use crate::geom::Point;

// ---------------------------------------------------------------------------
// Wall
// ---------------------------------------------------------------------------

/// One of the four sides of a cell. `Up` is toward smaller `y`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Wall {
    Up,
    Right,
    Down,
    Left,
}

impl Wall {
    /// All four sides, clockwise from `Up`.
    pub const SIDES: [Wall; 4] = [Wall::Up, Wall::Right, Wall::Down, Wall::Left];

    /// The side facing the opposite direction.
    #[inline]
    pub const fn opposite(self) -> Wall {
        match self {
            Wall::Up => Wall::Down,
            Wall::Right => Wall::Left,
            Wall::Down => Wall::Up,
            Wall::Left => Wall::Right,
        }
    }

    /// Unit step toward this side (e.g. `Up` is `(0, -1)`).
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Wall::Up => Point::new(0, -1),
            Wall::Right => Point::new(1, 0),
            Wall::Down => Point::new(0, 1),
            Wall::Left => Point::new(-1, 0),
        }
    }
}

// ---------------------------------------------------------------------------
// WallSet
// ---------------------------------------------------------------------------

/// Bitmask of the walls present on a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WallSet(pub u8);

impl WallSet {
    pub const NONE: Self = Self(0);
    pub const UP: Self = Self(1 << 0);
    pub const RIGHT: Self = Self(1 << 1);
    pub const DOWN: Self = Self(1 << 2);
    pub const LEFT: Self = Self(1 << 3);
    pub const ALL: Self = Self(0b1111);

    #[inline]
    const fn bit(side: Wall) -> u8 {
        match side {
            Wall::Up => Self::UP.0,
            Wall::Right => Self::RIGHT.0,
            Wall::Down => Self::DOWN.0,
            Wall::Left => Self::LEFT.0,
        }
    }

    /// Whether the set contains a wall on `side`.
    #[inline]
    pub const fn contains(self, side: Wall) -> bool {
        (self.0 & Self::bit(side)) != 0
    }

    /// Add a wall on `side`.
    #[inline]
    pub const fn insert(&mut self, side: Wall) {
        self.0 |= Self::bit(side);
    }

    /// Remove the wall on `side`, if present.
    #[inline]
    pub const fn remove(&mut self, side: Wall) {
        self.0 &= !Self::bit(side);
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for WallSet {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl From<Wall> for WallSet {
    #[inline]
    fn from(side: Wall) -> Self {
        Self(Self::bit(side))
    }
}
