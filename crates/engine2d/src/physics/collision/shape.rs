//! Shape-pair dispatch
//!
//! Turns a `(ShapeKind, transform)` pair into concrete geometry and picks the
//! one predicate that handles the pair. Mirrored pairs call the same
//! predicate with the arguments swapped, so `overlap(a, b) == overlap(b, a)`.

use super::primitives::{
    aabb_aabb, aabb_circle, circle_circle, segment_aabb, segment_circle, segment_segment, Aabb,
    Circle, Segment,
};
use crate::ecs::components::TransformComponent;
use crate::foundation::math::direction;
use crate::physics::ShapeKind;

/// Concrete geometry of one collider
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeGeometry {
    /// Axis-aligned box; rotation is ignored
    Box(Aabb),
    /// Circle with radius `scale.x / 2`
    Circle(Circle),
    /// Segment of length `scale.x` along `rotation`
    Line(Segment),
}

impl ShapeGeometry {
    /// Interpret a transform according to the shape kind
    pub fn from_transform(shape: ShapeKind, transform: &TransformComponent) -> Self {
        match shape {
            ShapeKind::Box => Self::Box(Aabb::from_center_size(transform.position, transform.scale)),
            ShapeKind::Circle => Self::Circle(Circle::new(transform.position, transform.scale.x * 0.5)),
            ShapeKind::Line => {
                let start = transform.position;
                let end = start + direction(transform.rotation) * transform.scale.x;
                Self::Line(Segment::new(start, end))
            }
        }
    }

    /// Test this shape against another
    pub fn overlaps(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Box(a), Self::Box(b)) => aabb_aabb(a, b),
            (Self::Circle(a), Self::Circle(b)) => circle_circle(a, b),
            (Self::Line(a), Self::Line(b)) => segment_segment(a, b),

            (Self::Box(aabb), Self::Circle(circle)) | (Self::Circle(circle), Self::Box(aabb)) => {
                aabb_circle(aabb, circle)
            }
            (Self::Line(segment), Self::Circle(circle)) | (Self::Circle(circle), Self::Line(segment)) => {
                segment_circle(segment, circle)
            }
            (Self::Line(segment), Self::Box(aabb)) | (Self::Box(aabb), Self::Line(segment)) => {
                segment_aabb(segment, aabb)
            }
        }
    }
}

/// Narrow-phase test for two shapes given by kind and transform
pub fn shapes_overlap(
    shape_a: ShapeKind,
    transform_a: &TransformComponent,
    shape_b: ShapeKind,
    transform_b: &TransformComponent,
) -> bool {
    ShapeGeometry::from_transform(shape_a, transform_a)
        .overlaps(&ShapeGeometry::from_transform(shape_b, transform_b))
}
