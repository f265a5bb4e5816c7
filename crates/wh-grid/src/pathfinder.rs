//! Pathfinding trait and default A* implementation.
//!
//! # Pluggability
//!
//! `wh-sim` requests paths through the [`Pathfinder`] trait, so applications
//! can swap in another search without touching the tick scheduler.  The
//! default [`AStarPathfinder`] is a 4-connected, unit-cost A* with a
//! Manhattan heuristic.
//!
//! # Traversal rules
//!
//! A neighbour cell may be entered when it is in bounds, not occupied by
//! another agent (as recorded in the request's [`Occupancy`] snapshot), and
//! either not a shelf or exactly the requester's own claimed shelf.  Other
//! agents' claims never make a shelf walkable.
//!
//! # Goal substitution
//!
//! Asking for a shelf that is not the requester's own claim re-targets the
//! search at the in-bounds, non-shelf side of that shelf closest (Manhattan)
//! to `start`.  If the shelf has no such side the request fails with
//! [`GridError::NoAccessibleSide`].
//!
//! # Tie-breaking
//!
//! The open set is ordered by `(f, g, insertion)` ascending: lowest estimated
//! total first, then the entry closest to the start, then first-pushed.
//! Neighbours are pushed in [`Cell::neighbors`] order (E, W, S, N).  The
//! result is fully deterministic for identical inputs.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use wh_core::Cell;

use crate::{GridError, GridLayout, GridResult, Occupancy};

// ── Path ──────────────────────────────────────────────────────────────────────

/// An ordered sequence of cells from the step after the start up to and
/// including the goal.  Empty when the agent already stands on the goal or
/// has no plan.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    steps: VecDeque<Cell>,
}

impl Path {
    pub fn new(steps: impl IntoIterator<Item = Cell>) -> Self {
        Self { steps: steps.into_iter().collect() }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// The next cell to step onto, without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<Cell> {
        self.steps.front().copied()
    }

    /// Consume and return the next cell.
    #[inline]
    pub fn pop(&mut self) -> Option<Cell> {
        self.steps.pop_front()
    }

    /// Final cell of the path.
    #[inline]
    pub fn goal(&self) -> Option<Cell> {
        self.steps.back().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn clear(&mut self) {
        self.steps.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.steps.iter().copied()
    }
}

// ── PathRequest ───────────────────────────────────────────────────────────────

/// One path query.
#[derive(Clone, Copy, Debug)]
pub struct PathRequest<'a> {
    pub start: Cell,
    pub goal:  Cell,
    /// Cell of the shelf the requester has claimed, if any.  The only shelf
    /// the search may step onto.
    pub own_shelf: Option<Cell>,
    /// Positions of every other agent at request time.
    pub obstacles: &'a Occupancy,
}

/// `true` if an agent whose claimed shelf is `own_shelf` may step onto
/// `cell` given the current `obstacles`.
///
/// Shared by the search and by per-step re-validation of stored paths.
#[inline]
pub fn is_traversable(
    grid:      &GridLayout,
    cell:      Cell,
    obstacles: &Occupancy,
    own_shelf: Option<Cell>,
) -> bool {
    if !grid.in_bounds(cell) || obstacles.is_occupied(cell) {
        return false;
    }
    !grid.is_shelf(cell) || own_shelf == Some(cell)
}

// ── Pathfinder trait ──────────────────────────────────────────────────────────

/// Pluggable path search.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so a simulation holding one can be
/// moved across threads by its driver.
pub trait Pathfinder: Send + Sync {
    /// Compute a path for `req` over `grid`.
    ///
    /// Returns an empty [`Path`] when `start` already equals the (possibly
    /// substituted) goal, and [`GridError::PathNotFound`] when the goal is
    /// unreachable.  Callers treat both errors as "wait and retry".
    fn find_path(&self, grid: &GridLayout, req: &PathRequest<'_>) -> GridResult<Path>;
}

// ── AStarPathfinder ───────────────────────────────────────────────────────────

/// Unit-cost A* with Manhattan heuristic over the 4-neighbourhood.
#[derive(Clone, Copy, Debug, Default)]
pub struct AStarPathfinder;

impl Pathfinder for AStarPathfinder {
    fn find_path(&self, grid: &GridLayout, req: &PathRequest<'_>) -> GridResult<Path> {
        let goal = resolve_goal(grid, req)?;
        astar(grid, req, goal)
    }
}

// ── A* internals ──────────────────────────────────────────────────────────────

/// Apply the goal-substitution rule for foreign shelves.
fn resolve_goal(grid: &GridLayout, req: &PathRequest<'_>) -> GridResult<Cell> {
    if !grid.is_shelf(req.goal) || req.own_shelf == Some(req.goal) {
        return Ok(req.goal);
    }
    req.goal
        .neighbors()
        .into_iter()
        .filter(|&side| grid.in_bounds(side) && !grid.is_shelf(side))
        .min_by_key(|side| req.start.manhattan(*side))
        .ok_or(GridError::NoAccessibleSide(req.goal))
}

const UNREACHED: usize = usize::MAX;

fn astar(grid: &GridLayout, req: &PathRequest<'_>, goal: Cell) -> GridResult<Path> {
    let not_found = GridError::PathNotFound { from: req.start, to: goal };

    if req.start == goal {
        return Ok(Path::empty());
    }
    let (Some(start_idx), Some(goal_idx)) = (grid.cell_index(req.start), grid.cell_index(goal))
    else {
        return Err(not_found);
    };

    let n = grid.cell_count();
    // g[v] = best known step count to reach v.
    let mut g      = vec![u32::MAX; n];
    // prev[v] = cell index we reached v from; UNREACHED for unvisited cells.
    let mut prev   = vec![UNREACHED; n];
    let mut closed = vec![false; n];
    let mut seq: u64 = 0;

    // Min-heap on (f, g, insertion order, cell index).
    let mut open: BinaryHeap<Reverse<(u32, u32, u64, usize)>> = BinaryHeap::new();
    g[start_idx] = 0;
    open.push(Reverse((req.start.manhattan(goal), 0, seq, start_idx)));

    while let Some(Reverse((_, cost, _, idx))) = open.pop() {
        if closed[idx] {
            continue;
        }
        closed[idx] = true;

        if idx == goal_idx {
            return Ok(reconstruct(grid, &prev, start_idx, goal_idx));
        }

        for neighbor in grid.cell_at(idx).neighbors() {
            if !is_traversable(grid, neighbor, req.obstacles, req.own_shelf) {
                continue;
            }
            let Some(nidx) = grid.cell_index(neighbor) else {
                continue;
            };
            let tentative = cost + 1;
            if tentative < g[nidx] {
                g[nidx]    = tentative;
                prev[nidx] = idx;
                seq += 1;
                open.push(Reverse((tentative + neighbor.manhattan(goal), tentative, seq, nidx)));
            }
        }
    }

    Err(not_found)
}

fn reconstruct(grid: &GridLayout, prev: &[usize], start_idx: usize, goal_idx: usize) -> Path {
    let mut steps = Vec::new();
    let mut cur = goal_idx;
    while cur != start_idx && cur != UNREACHED {
        steps.push(grid.cell_at(cur));
        cur = prev[cur];
    }
    steps.reverse();
    Path::new(steps)
}
