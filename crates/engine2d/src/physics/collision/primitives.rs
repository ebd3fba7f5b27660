//! Primitive 2D shapes and pairwise overlap predicates
//!
//! Every predicate is a total function: degenerate inputs (zero-size boxes,
//! zero-radius circles, zero-length segments) produce a definite answer.

use crate::foundation::math::{orientation, Vec2};

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Lower corner
    pub min: Vec2,
    /// Upper corner
    pub max: Vec2,
}

impl Aabb {
    /// Creates a rectangle from its corners
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Creates a rectangle from center and full size
    ///
    /// A negative size is kept as given and yields `min > max`. Such a box
    /// only overlaps boxes that span it and never needs a push-out.
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self::new(center - half, center + half)
    }

    /// Corners in counter-clockwise order starting at `min`
    pub fn corners(&self) -> [Vec2; 4] {
        [
            self.min,
            Vec2::new(self.max.x, self.min.y),
            self.max,
            Vec2::new(self.min.x, self.max.y),
        ]
    }

    /// The four edges as segments
    pub fn edges(&self) -> [Segment; 4] {
        let [a, b, c, d] = self.corners();
        [
            Segment::new(a, b),
            Segment::new(b, c),
            Segment::new(c, d),
            Segment::new(d, a),
        ]
    }

    /// Closest point inside the rectangle to `point`
    pub fn clamp(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            point.x.max(self.min.x).min(self.max.x),
            point.y.max(self.min.y).min(self.max.y),
        )
    }
}

/// Circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Center
    pub center: Vec2,
    /// Radius
    pub radius: f32,
}

impl Circle {
    /// Creates a circle
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// Line segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Start point
    pub start: Vec2,
    /// End point
    pub end: Vec2,
}

impl Segment {
    /// Creates a segment
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Closest point on the segment to `point`
    ///
    /// A zero-length segment collapses to its start point.
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        let edge = self.end - self.start;
        let length_squared = edge.magnitude_squared();
        if length_squared == 0.0 {
            return self.start;
        }
        let t = ((point - self.start).dot(&edge) / length_squared).clamp(0.0, 1.0);
        self.start + edge * t
    }
}

/// Box-box: open-interval overlap, touching edges do not count
pub fn aabb_aabb(a: &Aabb, b: &Aabb) -> bool {
    a.min.x < b.max.x && a.max.x > b.min.x && a.min.y < b.max.y && a.max.y > b.min.y
}

/// Circle-circle: squared center distance against squared radius sum
///
/// Strict comparison; circles that only touch do not collide, matching the
/// box-box rule.
pub fn circle_circle(a: &Circle, b: &Circle) -> bool {
    let distance_squared = (a.center - b.center).magnitude_squared();
    let radius_sum = a.radius + b.radius;
    distance_squared < radius_sum * radius_sum
}

/// Box-circle: clamp the center into the box and compare distances
pub fn aabb_circle(aabb: &Aabb, circle: &Circle) -> bool {
    let closest = aabb.clamp(circle.center);
    (circle.center - closest).magnitude_squared() <= circle.radius * circle.radius
}

/// Segment-segment: strict orientation test
///
/// Intersecting iff each segment's end points lie on different sides of the
/// other segment. Colinear overlap is not detected.
pub fn segment_segment(a: &Segment, b: &Segment) -> bool {
    let o1 = orientation(a.start, a.end, b.start);
    let o2 = orientation(a.start, a.end, b.end);
    let o3 = orientation(b.start, b.end, a.start);
    let o4 = orientation(b.start, b.end, a.end);

    o1 != o2 && o3 != o4
}

/// Segment-circle: distance from the center to the closest point on the segment
pub fn segment_circle(segment: &Segment, circle: &Circle) -> bool {
    let closest = segment.closest_point(circle.center);
    (circle.center - closest).magnitude_squared() <= circle.radius * circle.radius
}

/// Segment-box: the segment crosses one of the four box edges
///
/// A segment lying entirely inside the box crosses no edge and is not
/// reported.
pub fn segment_aabb(segment: &Segment, aabb: &Aabb) -> bool {
    aabb.edges().iter().any(|edge| segment_segment(segment, edge))
}
