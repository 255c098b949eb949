//! Error types for pathfinding queries.

use gridwall_core::{Point, Range};

/// Error from [`IndexedMinHeap`](crate::IndexedMinHeap) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HeapError {
    /// Removal was attempted on an empty queue.
    #[error("pop on an empty priority queue")]
    Empty,
}

/// Error from [`find_path`](crate::find_path).
///
/// An unreachable goal is *not* an error: it is reported as `Ok(None)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// A query endpoint lies outside the grid.
    #[error("point {pos} outside grid bounds {bounds}")]
    OutOfBounds { pos: Point, bounds: Range },

    /// The open queue misbehaved mid-search. The loop condition makes
    /// this unreachable unless an internal invariant was violated.
    #[error(transparent)]
    Heap(#[from] HeapError),
}
