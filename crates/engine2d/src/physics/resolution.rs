//! Minimum-translation push-out for blocking bodies
//!
//! Both colliders are treated as rectangles built from their transforms
//! (`position ∓ scale / 2`), whatever their actual shape. This is exact for
//! boxes and an approximation for circles and lines.
//!
//! One pass, one axis: a body pushed into a third body is not corrected until
//! the pair involving the third body is visited, possibly on a later tick.

use super::collision::Aabb;
use crate::foundation::math::Vec2;

/// Translation that separates `blocking` from `other` along one axis
///
/// Returns `None` when the rectangles do not overlap on both axes. Otherwise
/// picks the axis with the smaller overlap and pushes away from `other`'s
/// lower edge on that axis: negative when `blocking` starts below it, positive
/// otherwise.
pub fn minimum_translation(blocking: &Aabb, other: &Aabb) -> Option<Vec2> {
    let overlap_x = blocking.max.x.min(other.max.x) - blocking.min.x.max(other.min.x);
    let overlap_y = blocking.max.y.min(other.max.y) - blocking.min.y.max(other.min.y);

    if overlap_x <= 0.0 || overlap_y <= 0.0 {
        return None;
    }

    let translation = if overlap_x < overlap_y {
        let sign = if blocking.min.x < other.min.x { -1.0 } else { 1.0 };
        Vec2::new(sign * overlap_x, 0.0)
    } else {
        let sign = if blocking.min.y < other.min.y { -1.0 } else { 1.0 };
        Vec2::new(0.0, sign * overlap_y)
    };

    Some(translation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn rect(min: (f32, f32), max: (f32, f32)) -> Aabb {
        Aabb::new(Vec2::new(min.0, min.1), Vec2::new(max.0, max.1))
    }

    #[test]
    fn test_resolves_along_smaller_overlap() {
        let blocking = rect((0.0, 0.0), (2.0, 2.0));
        let other = rect((1.0, 0.0), (3.0, 2.0));

        let push = minimum_translation(&blocking, &other).unwrap();
        assert_relative_eq!(push, Vec2::new(-1.0, 0.0));

        // After the push the X overlap is gone
        let moved = Aabb::new(blocking.min + push, blocking.max + push);
        assert_relative_eq!(moved.max.x, other.min.x, epsilon = 1e-6);
    }

    #[test]
    fn test_pushes_positive_when_right_of_other_min() {
        let blocking = rect((2.0, 0.0), (4.0, 2.0));
        let other = rect((1.0, 0.0), (3.0, 2.0));

        let push = minimum_translation(&blocking, &other).unwrap();
        assert_relative_eq!(push, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_resolves_vertically() {
        let blocking = rect((0.0, 1.5), (4.0, 3.5));
        let other = rect((0.0, 0.0), (4.0, 2.0));

        let push = minimum_translation(&blocking, &other).unwrap();
        assert_relative_eq!(push, Vec2::new(0.0, 0.5));
    }

    #[test]
    fn test_equal_overlap_prefers_y() {
        let blocking = rect((0.0, 0.0), (2.0, 2.0));
        let other = rect((1.0, 1.0), (3.0, 3.0));

        let push = minimum_translation(&blocking, &other).unwrap();
        assert_relative_eq!(push, Vec2::new(0.0, -1.0));
    }

    #[test]
    fn test_touching_needs_no_resolution() {
        let blocking = rect((0.0, 0.0), (2.0, 2.0));
        let other = rect((2.0, 0.0), (4.0, 2.0));

        assert_eq!(minimum_translation(&blocking, &other), None);
    }

    #[test]
    fn test_degenerate_boxes_need_no_resolution() {
        let other = rect((-5.0, -5.0), (5.0, 5.0));
        let point = Aabb::from_center_size(Vec2::new(1.0, 1.0), Vec2::zeros());
        let inverted = Aabb::from_center_size(Vec2::zeros(), Vec2::new(-2.0, -2.0));

        assert_eq!(minimum_translation(&point, &other), None);
        assert_eq!(minimum_translation(&inverted, &other), None);
    }
}
