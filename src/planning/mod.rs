//! Pathfinding strategies and route stitching.
//!
//! This module provides:
//! - Grid-restricted A* over an implicit 8-connected lattice
//! - Visibility-graph Dijkstra over boundary-sampled virtual points
//! - Route stitching that splices detours between user waypoints
//!
//! ## Grid A*
//!
//! ```rust
//! use marga_nav::planning::astar::{GridPlanner, GridPlannerConfig};
//! use marga_nav::Point;
//!
//! let planner = GridPlanner::new(GridPlannerConfig::default().with_step(40.0));
//! let path = planner.find_path(Point::ZERO, Point::new(200.0, 0.0), |_x, _y| false);
//! assert!(path.len() >= 2);
//! ```
//!
//! ## Visibility graph
//!
//! ```rust
//! use marga_nav::planning::visibility::VisibilityPlanner;
//! use marga_nav::{Circle, Point};
//!
//! let circles = vec![Circle::new(100.0, 100.0, 50.0)];
//! let planner = VisibilityPlanner::with_defaults();
//! let path = planner.find_path(Point::new(0.0, 100.0), Point::new(200.0, 100.0), &circles);
//! assert!(path.len() >= 3); // direct segment is blocked
//! ```

pub mod astar;
pub mod route;
pub mod visibility;

pub use astar::{find_path, GridPlanner, GridPlannerConfig};
pub use route::{Route, RouteError, RouteStitcher, Strategy, Waypoint, WaypointKind};
pub use visibility::{
    generate_virtual_points, segment_is_clear, VirtualPointConfig, VisibilityGraph,
    VisibilityPlanner,
};
