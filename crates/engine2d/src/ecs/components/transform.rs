//! Transform component for the ECS system
//!
//! Pure data component: position, rotation (radians) and per-axis scale.
//! Colliders reuse the same type for their local transform, where the scale
//! doubles as shape parameters (see [`ShapeKind`](crate::physics::ShapeKind)).

use serde::{Deserialize, Serialize};

use crate::foundation::math::{rotate, Vec2};

/// 2D transform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformComponent {
    /// Position
    pub position: Vec2,

    /// Rotation in radians, counter-clockwise
    pub rotation: f32,

    /// Per-axis scale
    pub scale: Vec2,
}

impl Default for TransformComponent {
    fn default() -> Self {
        Self {
            position: Vec2::zeros(),
            rotation: 0.0,
            scale: Vec2::new(1.0, 1.0),
        }
    }
}

impl TransformComponent {
    /// Create identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create from position only
    pub fn from_position(position: Vec2) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create from position and scale
    pub fn from_position_scale(position: Vec2, scale: Vec2) -> Self {
        Self {
            position,
            scale,
            ..Default::default()
        }
    }

    /// Create from full transform specification
    pub fn from_transform(position: Vec2, rotation: f32, scale: Vec2) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Builder pattern: Set position
    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    /// Builder pattern: Set rotation (radians)
    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    /// Builder pattern: Set scale (non-uniform)
    pub fn with_scale(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        self
    }

    /// Apply this transform as the parent of `local`
    ///
    /// Scale, then rotate, then translate: the local offset is scaled by the
    /// parent scale and rotated by the parent rotation.
    pub fn compose(&self, local: &Self) -> Self {
        let offset = rotate(local.position.component_mul(&self.scale), self.rotation);
        Self {
            position: self.position + offset,
            rotation: self.rotation + local.rotation,
            scale: self.scale.component_mul(&local.scale),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_transform_identity() {
        let transform = TransformComponent::identity();

        assert_eq!(transform.position, Vec2::zeros());
        assert_eq!(transform.rotation, 0.0);
        assert_eq!(transform.scale, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_compose_with_identity_parent_is_noop() {
        let local = TransformComponent::from_transform(Vec2::new(3.0, -1.0), 0.5, Vec2::new(2.0, 4.0));
        let composed = TransformComponent::identity().compose(&local);

        assert_relative_eq!(composed.position, local.position, epsilon = EPSILON);
        assert_relative_eq!(composed.rotation, local.rotation, epsilon = EPSILON);
        assert_relative_eq!(composed.scale, local.scale, epsilon = EPSILON);
    }

    #[test]
    fn test_compose_translates_rotates_and_scales() {
        let parent = TransformComponent::from_transform(Vec2::new(10.0, 0.0), FRAC_PI_2, Vec2::new(2.0, 2.0));
        let local = TransformComponent::from_position(Vec2::new(1.0, 0.0));
        let composed = parent.compose(&local);

        // (1,0) scaled to (2,0), rotated a quarter turn to (0,2), then offset by the parent
        assert_relative_eq!(composed.position, Vec2::new(10.0, 2.0), epsilon = 1e-5);
        assert_relative_eq!(composed.rotation, FRAC_PI_2, epsilon = EPSILON);
        assert_relative_eq!(composed.scale, Vec2::new(2.0, 2.0), epsilon = EPSILON);
    }
}
