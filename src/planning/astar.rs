//! Grid-restricted A* planner.
//!
//! Searches the implicit lattice graph (nodes = lattice positions, edges =
//! 8-connectivity) between two snapped endpoints, rejecting neighbors that
//! the caller's predicate reports as blocked.
//!
//! The heuristic is Manhattan distance in raw coordinate units while edge
//! costs are euclidean step distances, so it is not provably admissible for
//! diagonal moves. The result is a plausible collision-free path, not a
//! guaranteed shortest one.

use std::collections::{HashMap, HashSet};

use log::{trace, warn};
use serde::{Deserialize, Serialize};

use crate::core::Point;
use crate::grid::GridCoord;

/// Configuration for the grid A* planner.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GridPlannerConfig {
    /// Lattice step size in world units.
    /// Default: 40.0
    pub step: f32,
    /// Maximum number of nodes to expand before giving up.
    /// Default: 100_000
    pub max_iterations: usize,
}

impl Default for GridPlannerConfig {
    fn default() -> Self {
        Self {
            step: 40.0,
            max_iterations: 100_000,
        }
    }
}

impl GridPlannerConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for the lattice step.
    pub fn with_step(mut self, step: f32) -> Self {
        self.step = step;
        self
    }

    /// Builder-style setter for the iteration limit.
    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = max;
        self
    }
}

/// Grid A* planner.
#[derive(Clone, Debug)]
pub struct GridPlanner {
    config: GridPlannerConfig,
}

impl GridPlanner {
    /// Create a new planner with configuration.
    pub fn new(config: GridPlannerConfig) -> Self {
        Self { config }
    }

    /// Create a new planner with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(GridPlannerConfig::default())
    }

    /// Get the configuration.
    pub fn config(&self) -> &GridPlannerConfig {
        &self.config
    }

    /// Find a lattice path from `start` to `end`.
    ///
    /// Both endpoints are snapped to the lattice first. `is_blocked` is
    /// called with raw world coordinates of each candidate lattice position;
    /// blocked positions are never expanded, so a successfully found path
    /// contains no blocked point.
    ///
    /// When the goal is unreachable (open set exhausted or the iteration
    /// limit hit) the planner degrades to the two-point segment
    /// `[start, end]` instead of signaling failure. A 2-point result may
    /// therefore still cross an obstacle; callers that need a guaranteed
    /// collision-free path must re-validate it.
    pub fn find_path<F>(&self, start: Point, end: Point, is_blocked: F) -> Vec<Point>
    where
        F: Fn(f32, f32) -> bool,
    {
        let step = self.config.step;
        let start_coord = GridCoord::snap(start, step);
        let goal_coord = GridCoord::snap(end, step);
        let goal_point = goal_coord.to_point(step);

        trace!(
            "[GridPlanner] find_path: start=({},{}) goal=({},{}) step={}",
            start_coord.x, start_coord.y, goal_coord.x, goal_coord.y, step
        );

        // Open list kept in insertion order; selection scans linearly for
        // the lowest f score, so ties resolve to the earliest insertion.
        // Linear scans are fine at the dozens-of-nodes scale this targets;
        // a priority queue is the drop-in upgrade for larger lattices.
        let mut open: Vec<GridCoord> = vec![start_coord];
        let mut closed: HashSet<GridCoord> = HashSet::new();
        let mut came_from: HashMap<GridCoord, GridCoord> = HashMap::new();
        let mut g_scores: HashMap<GridCoord, f32> = HashMap::new();
        let mut f_scores: HashMap<GridCoord, f32> = HashMap::new();

        g_scores.insert(start_coord, 0.0);
        f_scores.insert(start_coord, manhattan(start_coord.to_point(step), goal_point));

        let mut iterations = 0;

        while !open.is_empty() {
            iterations += 1;
            if iterations > self.config.max_iterations {
                warn!(
                    "[GridPlanner] exceeded {} iterations, degrading to straight segment",
                    self.config.max_iterations
                );
                return vec![start, end];
            }

            let mut best = 0;
            for i in 1..open.len() {
                if f_scores[&open[i]] < f_scores[&open[best]] {
                    best = i;
                }
            }
            // remove (not swap_remove) keeps the insertion order of the rest
            let current = open.remove(best);

            if current == goal_coord {
                return reconstruct_path(&came_from, current, step);
            }

            closed.insert(current);
            let current_point = current.to_point(step);
            let current_g = g_scores[&current];

            for neighbor in current.neighbors_8() {
                if closed.contains(&neighbor) {
                    continue;
                }

                let neighbor_point = neighbor.to_point(step);
                if is_blocked(neighbor_point.x, neighbor_point.y) {
                    continue;
                }

                let tentative_g = current_g + current_point.distance(&neighbor_point);
                let in_open = open.contains(&neighbor);

                if in_open
                    && tentative_g >= g_scores.get(&neighbor).copied().unwrap_or(f32::INFINITY)
                {
                    continue;
                }
                if !in_open {
                    open.push(neighbor);
                }

                came_from.insert(neighbor, current);
                g_scores.insert(neighbor, tentative_g);
                f_scores.insert(neighbor, tentative_g + manhattan(neighbor_point, goal_point));
            }
        }

        warn!("[GridPlanner] no lattice path found, degrading to straight segment");
        vec![start, end]
    }
}

/// Manhattan distance in raw coordinate units (not step counts).
#[inline]
fn manhattan(a: Point, b: Point) -> f32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Walk predecessor links back to the start and return lattice points.
fn reconstruct_path(came_from: &HashMap<GridCoord, GridCoord>, goal: GridCoord, step: f32) -> Vec<Point> {
    let mut coords = vec![goal];
    let mut current = goal;
    while let Some(&prev) = came_from.get(&current) {
        coords.push(prev);
        current = prev;
    }
    coords.reverse();
    coords.into_iter().map(|c| c.to_point(step)).collect()
}

/// Quick path finding with the default iteration limit and a custom step.
pub fn find_path<F>(start: Point, end: Point, step: f32, is_blocked: F) -> Vec<Point>
where
    F: Fn(f32, f32) -> bool,
{
    GridPlanner::new(GridPlannerConfig::default().with_step(step)).find_path(start, end, is_blocked)
}
