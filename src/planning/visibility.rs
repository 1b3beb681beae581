//! Visibility-graph planner over boundary-sampled virtual points.
//!
//! # Algorithm
//!
//! 1. Sample "virtual points" on an offset ring around each obstacle
//! 2. Collect nodes: start + virtual points + end
//! 3. Build edges: connect pairs whose straight segment clears every circle
//! 4. Search: Dijkstra from start to end
//!
//! Virtual points are regenerated in full per query as a pure function of
//! the obstacle set; nothing is cached across queries.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::core::geometry::{distance, point_in_circle, segment_intersects_circle};
use crate::core::{Circle, Point};

/// Edges shorter than this are not added to the graph.
const MIN_EDGE_LENGTH: f32 = 1e-3;

/// Configuration for virtual point sampling.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VirtualPointConfig {
    /// Offset of the sampling ring beyond each circle's radius.
    /// Default: 15.0
    pub margin: f32,
    /// Angular spacing between samples on the ring, in degrees.
    /// Default: 30.0 (12 samples per circle)
    pub angle_step_deg: f32,
    /// Maximum total number of virtual points. Bounds the O(P²) graph
    /// build for large obstacle sets.
    /// Default: 1000
    pub max_points: usize,
}

impl Default for VirtualPointConfig {
    fn default() -> Self {
        Self {
            margin: 15.0,
            angle_step_deg: 30.0,
            max_points: 1000,
        }
    }
}

impl VirtualPointConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for the ring margin.
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    /// Builder-style setter for the angular spacing.
    pub fn with_angle_step_deg(mut self, deg: f32) -> Self {
        self.angle_step_deg = deg;
        self
    }

    /// Builder-style setter for the point budget.
    pub fn with_max_points(mut self, max: usize) -> Self {
        self.max_points = max;
        self
    }
}

/// Sample virtual points around every obstacle.
///
/// For each circle, points are placed at `radius + margin` from the center
/// every `angle_step_deg` degrees. A point that falls strictly inside any
/// *other* circle is discarded (duplicates in the obstacle set still test
/// against each other, by index). The full set is recomputed on every call.
pub fn generate_virtual_points(circles: &[Circle], config: &VirtualPointConfig) -> Vec<Point> {
    if config.angle_step_deg <= 0.0 {
        warn!("[VirtualPoints] non-positive angle step, returning no points");
        return Vec::new();
    }

    let mut points = Vec::new();

    for (i, circle) in circles.iter().enumerate() {
        let ring = circle.radius + config.margin;
        let mut angle = 0.0f32;
        while angle < 360.0 {
            let p = circle.center().point_at(angle.to_radians(), ring);

            let inside_other = circles
                .iter()
                .enumerate()
                .any(|(j, other)| j != i && point_in_circle(p, other));

            if !inside_other {
                if points.len() >= config.max_points {
                    warn!(
                        "[VirtualPoints] truncating at {} points ({} circles)",
                        config.max_points,
                        circles.len()
                    );
                    return points;
                }
                points.push(p);
            }

            angle += config.angle_step_deg;
        }
    }

    points
}

/// Check that a straight segment clears every obstacle circle.
pub fn segment_is_clear(a: Point, b: Point, circles: &[Circle]) -> bool {
    circles.iter().all(|c| !segment_intersects_circle(a, b, c))
}

/// Visibility graph over a candidate point set.
///
/// Nodes are points (start + virtual points + end); edges connect pairs
/// with an unobstructed straight-line connection, weighted by euclidean
/// distance. Built fresh per query.
#[derive(Clone, Debug)]
pub struct VisibilityGraph {
    /// Node positions.
    nodes: Vec<Point>,
    /// Adjacency list: for each node, list of (neighbor_idx, distance).
    edges: Vec<Vec<(usize, f32)>>,
}

impl VisibilityGraph {
    /// Build a visibility graph over `nodes` against the obstacle set.
    ///
    /// O(P²·C) for P points and C circles; P is bounded by the virtual
    /// point budget (12 samples per circle by default).
    pub fn build(nodes: Vec<Point>, circles: &[Circle]) -> Self {
        let n = nodes.len();
        let mut edges: Vec<Vec<(usize, f32)>> = vec![Vec::new(); n];

        for i in 0..n {
            for j in (i + 1)..n {
                let length = distance(nodes[i], nodes[j]);
                if length < MIN_EDGE_LENGTH {
                    continue;
                }
                if segment_is_clear(nodes[i], nodes[j], circles) {
                    edges[i].push((j, length));
                    edges[j].push((i, length));
                }
            }
        }

        Self { nodes, edges }
    }

    /// Get node position by index.
    pub fn node(&self, idx: usize) -> Option<&Point> {
        self.nodes.get(idx)
    }

    /// Get all nodes.
    pub fn nodes(&self) -> &[Point] {
        &self.nodes
    }

    /// Get number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get number of (undirected) edges.
    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(|e| e.len()).sum::<usize>() / 2
    }

    /// Get the adjacency list of edges.
    pub fn edges(&self) -> &[Vec<(usize, f32)>] {
        &self.edges
    }

    /// Find the minimum-weight path between two node indices.
    ///
    /// Standard Dijkstra with an array-scanned frontier (no heap; linear
    /// selection is fine at this node count and keeps tie-breaking on the
    /// lowest index). Selection stops as soon as the end index comes up.
    ///
    /// If the end index is unreachable the predecessor chase from `end`
    /// yields a truncated sequence (in the worst case just `[end]`). That
    /// degraded result is part of the contract, not an error; callers that
    /// need a guaranteed valid path must check the first point themselves.
    pub fn shortest_path(&self, start_idx: usize, end_idx: usize) -> Vec<Point> {
        let n = self.nodes.len();
        if start_idx >= n || end_idx >= n {
            return Vec::new();
        }

        let mut dist = vec![f32::INFINITY; n];
        let mut prev: Vec<Option<usize>> = vec![None; n];
        let mut visited = vec![false; n];

        dist[start_idx] = 0.0;

        loop {
            let mut current = None;
            let mut best = f32::INFINITY;
            for (i, &d) in dist.iter().enumerate() {
                if !visited[i] && d < best {
                    best = d;
                    current = Some(i);
                }
            }

            let Some(current) = current else { break };
            if current == end_idx {
                break;
            }
            visited[current] = true;

            for &(to, weight) in &self.edges[current] {
                let candidate = dist[current] + weight;
                if candidate < dist[to] {
                    dist[to] = candidate;
                    prev[to] = Some(current);
                }
            }
        }

        let mut path = Vec::new();
        let mut current = Some(end_idx);
        while let Some(idx) = current {
            path.push(self.nodes[idx]);
            current = prev[idx];
        }
        path.reverse();
        path
    }
}

/// High-level planner: virtual points + visibility graph + Dijkstra.
#[derive(Clone, Debug)]
pub struct VisibilityPlanner {
    config: VirtualPointConfig,
}

impl VisibilityPlanner {
    /// Create a new planner with configuration.
    pub fn new(config: VirtualPointConfig) -> Self {
        Self { config }
    }

    /// Create a new planner with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(VirtualPointConfig::default())
    }

    /// Get the configuration.
    pub fn config(&self) -> &VirtualPointConfig {
        &self.config
    }

    /// Find a path from `start` to `end` around the obstacle circles.
    ///
    /// Tries the direct segment first; when it is obstructed, builds a
    /// visibility graph over `[start, virtual points…, end]` and runs
    /// Dijkstra over it.
    ///
    /// When no obstacle-free path exists the returned sequence is
    /// truncated (see [`VisibilityGraph::shortest_path`]); a result whose
    /// first point differs from `start` did not reach the goal.
    pub fn find_path(&self, start: Point, end: Point, circles: &[Circle]) -> Vec<Point> {
        if segment_is_clear(start, end, circles) {
            return vec![start, end];
        }

        let virtual_points = generate_virtual_points(circles, &self.config);
        debug!(
            "[VisibilityPlanner] direct segment blocked, {} virtual points",
            virtual_points.len()
        );

        let mut nodes = Vec::with_capacity(virtual_points.len() + 2);
        nodes.push(start);
        nodes.extend(virtual_points);
        nodes.push(end);
        let end_idx = nodes.len() - 1;

        let graph = VisibilityGraph::build(nodes, circles);
        graph.shortest_path(0, end_idx)
    }
}
