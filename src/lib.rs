//! # Marga-Nav: Waypoint Route Planning Around Circular Obstacles
//!
//! Computes collision-free routes between ordered 2-D waypoints around a set
//! of circular obstacles. Two independent shortest-path strategies share one
//! set of geometric primitives:
//!
//! - **Grid A***: search over an implicit square lattice with 8-connectivity,
//!   rejecting nodes inside obstacles
//! - **Visibility graph**: Dijkstra over "virtual points" sampled on an
//!   offset ring around each obstacle
//!
//! The crate consumes plain geometric data and returns plain geometric data;
//! rendering, input handling, and obstacle/waypoint ownership belong to the
//! caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use marga_nav::{Circle, Point, RouteStitcher, Strategy, Waypoint};
//!
//! let circles = vec![Circle::new(100.0, 100.0, 50.0)];
//! let waypoints = vec![
//!     Waypoint::original(Point::new(0.0, 100.0)),
//!     Waypoint::original(Point::new(200.0, 100.0)),
//! ];
//!
//! let stitcher = RouteStitcher::with_defaults();
//! let route = stitcher.stitch(&waypoints, &circles, Strategy::Visibility).unwrap();
//! assert!(route.detour_count() >= 1); // the direct segment crosses the circle
//! ```
//!
//! ## Degraded results
//!
//! Neither strategy signals unreachable goals as errors:
//!
//! - the grid planner degrades to the two-point segment `[start, end]`
//! - the visibility planner returns a truncated sequence whose first point
//!   differs from the start
//!
//! Both results may still cross an obstacle; callers that need a guaranteed
//! valid path must re-validate degraded results. The only hard failure is
//! input validation: [`RouteStitcher::stitch`] rejects waypoints placed
//! strictly inside an obstacle.
//!
//! ## Architecture
//!
//! - [`core`]: fundamental types ([`Point`], [`Circle`]) and geometric
//!   primitives ([`core::geometry`])
//! - [`grid`]: lattice coordinate mapper ([`GridCoord`])
//! - [`planning`]: the two planners and the route stitcher

pub mod core;
pub mod grid;
pub mod planning;

pub use crate::core::{Circle, Point};
pub use crate::grid::GridCoord;
pub use crate::planning::{
    generate_virtual_points, GridPlanner, GridPlannerConfig, Route, RouteError, RouteStitcher,
    Strategy, VirtualPointConfig, VisibilityGraph, VisibilityPlanner, Waypoint, WaypointKind,
};
