//! Stateless geometric primitives shared by both planners.
//!
//! Both the grid A* planner and the visibility-graph planner rely on these
//! tests; they must stay consistent with each other. All containment checks
//! are strict: a point exactly on a circle boundary counts as outside.

use crate::core::{Circle, Point};

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Point, b: Point) -> f32 {
    a.distance(&b)
}

/// Check whether a point lies strictly inside a circle.
///
/// Boundary points (distance exactly equal to the radius) count as outside.
#[inline]
pub fn point_in_circle(p: Point, circle: &Circle) -> bool {
    p.distance(&circle.center()) < circle.radius
}

/// Closest point on the segment `a`..`b` to `query`.
///
/// Projects `query` onto the infinite line through the segment and clamps
/// the projection parameter to `[0, 1]`. A zero-length segment is treated
/// as the single point `a`.
pub fn closest_point_on_segment(a: Point, b: Point, query: Point) -> Point {
    let d = b - a;
    let length_sq = d.dot(&d);
    if length_sq == 0.0 {
        // Degenerate segment: both endpoints coincide
        return a;
    }
    let t = ((query - a).dot(&d) / length_sq).clamp(0.0, 1.0);
    a + d * t
}

/// Check whether the segment `a`..`b` passes strictly inside a circle.
///
/// Agrees with [`point_in_circle`] at both endpoints: if either endpoint is
/// inside the circle, the segment intersects it.
#[inline]
pub fn segment_intersects_circle(a: Point, b: Point, circle: &Circle) -> bool {
    let closest = closest_point_on_segment(a, b, circle.center());
    closest.distance(&circle.center()) < circle.radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_point_in_circle_strict_boundary() {
        let c = Circle::new(0.0, 0.0, 50.0);

        assert!(point_in_circle(Point::new(0.0, 0.0), &c));
        assert!(point_in_circle(Point::new(49.9, 0.0), &c));
        // Boundary is outside
        assert!(!point_in_circle(Point::new(50.0, 0.0), &c));
        assert!(!point_in_circle(Point::new(0.0, 50.1), &c));
    }

    #[test]
    fn test_closest_point_interior_projection() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        let closest = closest_point_on_segment(a, b, Point::new(4.0, 3.0));
        assert_relative_eq!(closest.x, 4.0, epsilon = 1e-5);
        assert_relative_eq!(closest.y, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_closest_point_clamps_to_endpoints() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);

        assert_eq!(closest_point_on_segment(a, b, Point::new(-5.0, 2.0)), a);
        assert_eq!(closest_point_on_segment(a, b, Point::new(15.0, -2.0)), b);
    }

    #[test]
    fn test_closest_point_degenerate_segment() {
        let p = Point::new(3.0, 3.0);
        assert_eq!(closest_point_on_segment(p, p, Point::new(100.0, 100.0)), p);
    }

    #[test]
    fn test_segment_crossing_circle() {
        let c = Circle::new(100.0, 100.0, 50.0);
        // Horizontal segment straight through the center
        assert!(segment_intersects_circle(
            Point::new(0.0, 100.0),
            Point::new(200.0, 100.0),
            &c,
        ));
        // Parallel segment well above the circle
        assert!(!segment_intersects_circle(
            Point::new(0.0, 200.0),
            Point::new(200.0, 200.0),
            &c,
        ));
    }

    #[test]
    fn test_segment_tangent_counts_as_outside() {
        let c = Circle::new(0.0, 0.0, 50.0);
        // Segment touching the boundary at exactly one point
        assert!(!segment_intersects_circle(
            Point::new(-100.0, 50.0),
            Point::new(100.0, 50.0),
            &c,
        ));
    }

    #[test]
    fn test_segment_agrees_with_point_in_circle_at_endpoints() {
        let c = Circle::new(0.0, 0.0, 50.0);
        let inside = Point::new(10.0, 10.0);
        let far = Point::new(500.0, 500.0);

        assert!(point_in_circle(inside, &c));
        assert!(segment_intersects_circle(inside, far, &c));
        assert!(segment_intersects_circle(far, inside, &c));

        // Both endpoints outside, segment passing wide of the circle
        let a = Point::new(100.0, 0.0);
        let b = Point::new(100.0, 100.0);
        assert!(!point_in_circle(a, &c));
        assert!(!point_in_circle(b, &c));
        assert!(!segment_intersects_circle(a, b, &c));
    }

    #[test]
    fn test_degenerate_segment_matches_point_test() {
        let c = Circle::new(0.0, 0.0, 50.0);
        let inside = Point::new(1.0, 1.0);
        let outside = Point::new(60.0, 0.0);

        assert!(segment_intersects_circle(inside, inside, &c));
        assert!(!segment_intersects_circle(outside, outside, &c));
    }
}
