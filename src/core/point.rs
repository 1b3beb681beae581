//! Point and obstacle types for route planning.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// A 2-D point in world coordinates (f32).
///
/// Pure value type: two points are equal iff their coordinates are equal.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Create a new point
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Zero point (origin)
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: &Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Dot product with another point (as vectors)
    #[inline]
    pub fn dot(&self, other: &Point) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Create a point at a given angle (radians, CCW from +X) and distance from this point
    #[inline]
    pub fn point_at(&self, angle: f32, distance: f32) -> Point {
        Point::new(
            self.x + distance * angle.cos(),
            self.y + distance * angle.sin(),
        )
    }
}

impl Add for Point {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f32> for Point {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Point::new(self.x * scalar, self.y * scalar)
    }
}

/// A circular obstacle.
///
/// Obstacles are immutable once added; the caller owns the obstacle set as a
/// plain ordered sequence. Duplicates are permitted and overlaps are not
/// resolved.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Center X coordinate
    pub x: f32,
    /// Center Y coordinate
    pub y: f32,
    /// Radius
    pub radius: f32,
}

impl Circle {
    /// Create a new circle
    #[inline]
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Self { x, y, radius }
    }

    /// Center of the circle as a point
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }
}
