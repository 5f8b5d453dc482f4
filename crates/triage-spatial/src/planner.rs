//! Path-planning trait and default A* implementation.
//!
//! # Pluggability
//!
//! `triage-sim` plans doctor movement through the [`PathPlanner`] trait, so
//! applications can swap in another search without touching the tick loop.
//! The default [`AStarPlanner`] searches the 4-connected torus.
//!
//! # Cost model
//!
//! | Term | Definition                                                      |
//! |------|-----------------------------------------------------------------|
//! | g    | steps from the start (every move costs 1)                       |
//! | h    | squared Euclidean distance to the goal on unwrapped coordinates |
//! | f    | g + h                                                           |
//!
//! `h` overestimates and ignores wrap-around, so the returned path is not
//! guaranteed shortest.  It is always a valid, obstacle-free walk.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use triage_core::GridPos;

use crate::SpatialGrid;

/// Neighbour order: up, down, left, right.
const NEIGHBOURS: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

// ── GridPath ──────────────────────────────────────────────────────────────────

/// The result of a planning query: every cell from start to goal inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridPath {
    pub cells: Vec<GridPos>,
}

impl GridPath {
    /// Number of positions, including start and goal.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of moves needed to walk the path.
    #[inline]
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    /// The cell one move from the start, or `None` if start is the goal.
    #[inline]
    pub fn next_step(&self) -> Option<GridPos> {
        self.cells.get(1).copied()
    }

    /// `true` if the start and goal are the same cell.
    #[inline]
    pub fn is_trivial(&self) -> bool {
        self.cells.len() <= 1
    }
}

// ── PathPlanner trait ─────────────────────────────────────────────────────────

/// Pluggable path search over a [`SpatialGrid`].
pub trait PathPlanner {
    /// Plan a path from `start` to `goal`.
    ///
    /// `blocked(pos)` reports whether a cell is impassable.  It is consulted
    /// only for cells other than `goal`; the goal is always enterable.  The
    /// start cell is never consulted.
    ///
    /// Returns `None` if the goal is unreachable.  That is an ordinary
    /// outcome, not a failure.
    fn plan(
        &self,
        grid:    &SpatialGrid,
        start:   GridPos,
        goal:    GridPos,
        blocked: &dyn Fn(GridPos) -> bool,
    ) -> Option<GridPath>;
}

// ── PathNode ──────────────────────────────────────────────────────────────────

/// One search node.  Lives only inside a single planning call's arena;
/// `parent` indexes that arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathNode {
    pub parent: Option<usize>,
    pub pos:    GridPos,
    pub g:      u64,
    pub h:      u64,
    pub f:      u64,
}

impl PathNode {
    fn new(parent: Option<usize>, pos: GridPos, g: u64, goal: GridPos) -> Self {
        let h = pos.distance_sq(goal);
        Self { parent, pos, g, h, f: g + h }
    }
}

// ── AStarPlanner ──────────────────────────────────────────────────────────────

/// A* over the 4-connected torus.  Stateless; nothing is cached between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStarPlanner;

impl PathPlanner for AStarPlanner {
    fn plan(
        &self,
        grid:    &SpatialGrid,
        start:   GridPos,
        goal:    GridPos,
        blocked: &dyn Fn(GridPos) -> bool,
    ) -> Option<GridPath> {
        astar(grid, grid.wrap(start), grid.wrap(goal), blocked)
    }
}

// ── A* internals ──────────────────────────────────────────────────────────────

fn astar(
    grid:    &SpatialGrid,
    start:   GridPos,
    goal:    GridPos,
    blocked: &dyn Fn(GridPos) -> bool,
) -> Option<GridPath> {
    let n = grid.cell_count();
    let mut nodes: Vec<PathNode> = Vec::new();
    // closed[c] = cell c has been expanded.
    let mut closed = vec![false; n];
    // open_g[c] = lowest g of any node for cell c pushed so far.
    let mut open_g = vec![u64::MAX; n];

    // Min-heap on (f, insertion seq).  The sequence number makes equal-f
    // pops follow insertion order.
    let mut open: BinaryHeap<Reverse<(u64, usize)>> = BinaryHeap::new();

    nodes.push(PathNode::new(None, start, 0, goal));
    open_g[grid.cell_id(start).index()] = 0;
    open.push(Reverse((nodes[0].f, 0)));

    while let Some(Reverse((_, idx))) = open.pop() {
        let node = nodes[idx];
        if node.pos == goal {
            return Some(reconstruct(&nodes, idx));
        }

        let cell = grid.cell_id(node.pos).index();
        // Skip superseded entries for an already-expanded cell.
        if closed[cell] {
            continue;
        }
        closed[cell] = true;

        for (dx, dy) in NEIGHBOURS {
            let next = grid.wrap(node.pos.offset(dx, dy));
            let next_cell = grid.cell_id(next).index();
            if closed[next_cell] {
                continue;
            }
            if next != goal && blocked(next) {
                continue;
            }

            let g = node.g + 1;
            if open_g[next_cell] <= g {
                continue;
            }
            open_g[next_cell] = g;

            let child = PathNode::new(Some(idx), next, g, goal);
            let seq = nodes.len();
            open.push(Reverse((child.f, seq)));
            nodes.push(child);
        }
    }

    None
}

fn reconstruct(nodes: &[PathNode], goal_idx: usize) -> GridPath {
    let mut cells = Vec::new();
    let mut cur = Some(goal_idx);
    while let Some(i) = cur {
        cells.push(nodes[i].pos);
        cur = nodes[i].parent;
    }
    cells.reverse();
    GridPath { cells }
}
