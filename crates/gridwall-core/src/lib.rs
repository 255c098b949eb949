//! **gridwall-core** — Walled-grid map types for grid-based games.
//!
//! This crate provides the map-side types used across the *gridwall*
//! workspace: geometry primitives, per-side wall flags, the [`WallGrid`]
//! cell container, and a maze generator for authoring wall layouts.
//!
//! Unlike an occupancy grid, a [`WallGrid`] cell is never "blocked" as a
//! whole: each of its four sides independently refuses or accepts entry,
//! so two adjacent open cells may still be separated by a wall.

pub mod geom;
pub mod grid;
pub mod mazegen;
pub mod wall;

pub use geom::{Point, Range};
pub use grid::WallGrid;
pub use mazegen::MazeGen;
pub use wall::{Wall, WallSet};
