//! 2D math helpers on top of nalgebra
//!
//! Coordinate convention: +X right, +Y up, angles in radians measured
//! counter-clockwise from +X.

/// 2D vector used throughout the engine
pub type Vec2 = nalgebra::Vector2<f32>;

/// Turn direction of an ordered point triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Points turn clockwise (negative cross product)
    Clockwise,
    /// Points turn counter-clockwise (positive cross product)
    CounterClockwise,
    /// Points lie on one line
    Colinear,
}

/// Unit vector pointing along `rotation`
pub fn direction(rotation: f32) -> Vec2 {
    Vec2::new(rotation.cos(), rotation.sin())
}

/// Rotate a vector counter-clockwise by `angle` radians
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Perp-dot product (z component of the 3D cross product)
pub fn cross(a: Vec2, b: Vec2) -> f32 {
    a.x * b.y - a.y * b.x
}

/// Orientation of the triple `(p, q, r)`
pub fn orientation(p: Vec2, q: Vec2, r: Vec2) -> Orientation {
    let value = cross(q - p, r - p);
    if value > 0.0 {
        Orientation::CounterClockwise
    } else if value < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Colinear
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_direction_axes() {
        assert_relative_eq!(direction(0.0), Vec2::new(1.0, 0.0), epsilon = EPSILON);
        assert_relative_eq!(direction(FRAC_PI_2), Vec2::new(0.0, 1.0), epsilon = EPSILON);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let rotated = rotate(Vec2::new(1.0, 0.0), FRAC_PI_2);
        assert_relative_eq!(rotated, Vec2::new(0.0, 1.0), epsilon = EPSILON);
    }

    #[test]
    fn test_orientation() {
        let p = Vec2::new(0.0, 0.0);
        let q = Vec2::new(1.0, 0.0);

        assert_eq!(orientation(p, q, Vec2::new(1.0, 1.0)), Orientation::CounterClockwise);
        assert_eq!(orientation(p, q, Vec2::new(1.0, -1.0)), Orientation::Clockwise);
        assert_eq!(orientation(p, q, Vec2::new(2.0, 0.0)), Orientation::Colinear);
    }
}
