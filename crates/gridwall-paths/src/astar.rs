//! A* shortest-path search over walled grids.

use std::collections::{HashMap, HashSet};

use log::debug;

use gridwall_core::{Point, Wall};

use crate::distance::octile;
use crate::errors::PathError;
use crate::heap::{IndexedMinHeap, NodeId};
use crate::traits::WallPather;

/// One discovered cell. The open list's arena doubles as the node table
/// storage; `parent` is a coordinate key into that table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SearchNode {
    pos: Point,
    parent: Option<Point>,
    /// Best known travel cost from the start.
    g: i32,
    /// Octile estimate of the remaining cost to the goal. Always the
    /// distance to the goal, both at discovery and after relaxation.
    h: i32,
}

impl SearchNode {
    #[inline]
    fn f(&self) -> i32 {
        self.g + self.h
    }
}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Lowest f first; among equals, the node nearer the goal.
        self.f().cmp(&other.f()).then(self.h.cmp(&other.h))
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Whether a wall forbids moving from `from` to the adjacent `to`.
///
/// A move is checked against the walls of the cell being *entered*, one
/// check per axis of the movement delta: entering through a side is
/// blocked when that side carries a wall. A diagonal move must pass both
/// of its axis checks. Only the destination's walls are consulted, so
/// one-way passages are representable.
#[inline]
fn blocked<P: WallPather>(pather: &P, from: Point, to: Point) -> bool {
    (to.y > from.y && pather.has_wall(to, Wall::Up))
        || (to.y < from.y && pather.has_wall(to, Wall::Down))
        || (to.x > from.x && pather.has_wall(to, Wall::Left))
        || (to.x < from.x && pather.has_wall(to, Wall::Right))
}

/// Compute the shortest wall-respecting path from `from` to `to`.
///
/// Returns the full path including both endpoints, `Ok(None)` when the
/// goal is unreachable, or [`PathError::OutOfBounds`] when an endpoint
/// lies outside `pather.bounds()`. When `from == to` the path is the
/// single-element sequence `[from]`.
///
/// Costs are octile: 10 per cardinal step, 14 per diagonal step. Among
/// equal-cost paths the result is deterministic, fixed by the pather's
/// neighbor order and the open list's (f, h) ordering.
///
/// All search state is local to the call; concurrent searches over a
/// shared, read-only pather are safe.
pub fn find_path<P: WallPather>(
    pather: &P,
    from: Point,
    to: Point,
) -> Result<Option<Vec<Point>>, PathError> {
    let bounds = pather.bounds();
    for p in [from, to] {
        if !bounds.contains(p) {
            return Err(PathError::OutOfBounds { pos: p, bounds });
        }
    }
    if from == to {
        return Ok(Some(vec![from]));
    }

    let mut open: IndexedMinHeap<SearchNode> = IndexedMinHeap::new();
    let mut table: HashMap<Point, NodeId> = HashMap::new();
    let mut closed: HashSet<Point> = HashSet::new();
    let mut nbuf: Vec<Point> = Vec::with_capacity(8);
    let mut expanded = 0usize;

    let start = open.insert(SearchNode {
        pos: from,
        parent: None,
        g: 0,
        h: octile(from, to),
    });
    table.insert(from, start);

    while !open.is_empty() {
        let cur_id = open.pop_min()?;
        let cur = *open.get(cur_id);

        if cur.pos == to {
            let path = reconstruct(&open, &table, cur_id);
            debug!(
                "path {from} -> {to}: {} steps, cost {}, {expanded} nodes expanded",
                path.len() - 1,
                cur.g
            );
            return Ok(Some(path));
        }

        closed.insert(cur.pos);
        expanded += 1;

        nbuf.clear();
        pather.neighbors(cur.pos, &mut nbuf);
        for &np in nbuf.iter() {
            if closed.contains(&np) {
                continue;
            }
            if blocked(pather, cur.pos, np) {
                continue;
            }
            let g = cur.g + octile(cur.pos, np);
            match table.get(&np).copied() {
                Some(id) => {
                    // Relax: reparent only on a strict improvement.
                    if g < open.get(id).g {
                        open.update(id, |n| {
                            n.g = g;
                            n.h = octile(np, to);
                            n.parent = Some(cur.pos);
                        });
                    }
                }
                None => {
                    let id = open.insert(SearchNode {
                        pos: np,
                        parent: Some(cur.pos),
                        g,
                        h: octile(np, to),
                    });
                    table.insert(np, id);
                }
            }
        }
    }

    debug!("no path {from} -> {to}, {expanded} nodes expanded");
    Ok(None)
}

/// Walk parent keys back from the goal node and reverse.
///
/// Parent links form a tree rooted at the start node, so the walk always
/// terminates; a missing table entry would be an engine defect and
/// panics rather than producing a truncated path.
fn reconstruct(
    open: &IndexedMinHeap<SearchNode>,
    table: &HashMap<Point, NodeId>,
    goal: NodeId,
) -> Vec<Point> {
    let mut path = Vec::new();
    let mut cur = *open.get(goal);
    path.push(cur.pos);
    while let Some(parent) = cur.parent {
        cur = *open.get(table[&parent]);
        path.push(cur.pos);
    }
    path.reverse();
    path
}
