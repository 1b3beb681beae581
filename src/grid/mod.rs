//! Lattice coordinate mapper for grid-restricted planning.
//!
//! The grid A* planner searches an implicit graph whose vertices are points
//! snapped to a fixed-size square lattice. [`GridCoord`] stores the lattice
//! indices directly, so it can be used as a hash map key with structural
//! equality instead of formatting coordinates into strings.

use serde::{Deserialize, Serialize};

use crate::core::Point;

/// Lattice coordinates (integer cell indices).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCoord {
    /// X lattice index
    pub x: i32,
    /// Y lattice index
    pub y: i32,
}

impl GridCoord {
    /// Create a new lattice coordinate
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Snap a continuous point to the nearest lattice node.
    ///
    /// Each coordinate is rounded to the nearest integer multiple of `step`.
    #[inline]
    pub fn snap(point: Point, step: f32) -> Self {
        Self {
            x: (point.x / step).round() as i32,
            y: (point.y / step).round() as i32,
        }
    }

    /// Convert this lattice node back to a world point.
    #[inline]
    pub fn to_point(self, step: f32) -> Point {
        Point::new(self.x as f32 * step, self.y as f32 * step)
    }

    /// Get the 8 lattice neighbors (4 axis-aligned + 4 diagonal).
    #[inline]
    pub fn neighbors_8(&self) -> [GridCoord; 8] {
        [
            GridCoord::new(self.x + 1, self.y),
            GridCoord::new(self.x - 1, self.y),
            GridCoord::new(self.x, self.y + 1),
            GridCoord::new(self.x, self.y - 1),
            GridCoord::new(self.x + 1, self.y + 1),
            GridCoord::new(self.x - 1, self.y + 1),
            GridCoord::new(self.x + 1, self.y - 1),
            GridCoord::new(self.x - 1, self.y - 1),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_rounds_to_nearest_node() {
        assert_eq!(GridCoord::snap(Point::new(0.0, 0.0), 40.0), GridCoord::new(0, 0));
        assert_eq!(GridCoord::snap(Point::new(19.9, 19.9), 40.0), GridCoord::new(0, 0));
        assert_eq!(GridCoord::snap(Point::new(20.1, 60.0), 40.0), GridCoord::new(1, 2));
        assert_eq!(
            GridCoord::snap(Point::new(-20.1, -59.9), 40.0),
            GridCoord::new(-1, -1)
        );
    }

    #[test]
    fn test_to_point_is_lattice_multiple() {
        let node = GridCoord::new(3, -2);
        let p = node.to_point(40.0);
        assert_eq!(p, Point::new(120.0, -80.0));
        // Round trip is exact on lattice points
        assert_eq!(GridCoord::snap(p, 40.0), node);
    }

    #[test]
    fn test_neighbors_8() {
        let c = GridCoord::new(5, 5);
        let neighbors = c.neighbors_8();
        assert_eq!(neighbors.len(), 8);
        for n in neighbors {
            assert_ne!(n, c);
            assert!((n.x - c.x).abs() <= 1 && (n.y - c.y).abs() <= 1);
        }
        // All neighbors distinct
        for i in 0..8 {
            for j in (i + 1)..8 {
                assert_ne!(neighbors[i], neighbors[j]);
            }
        }
    }
}
