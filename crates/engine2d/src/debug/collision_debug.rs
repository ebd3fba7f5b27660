//! Collision-specific debug visualization
//!
//! Unlike the narrow phase, drawing always composes the owner's world
//! transform with the collider's local transform, so outlines follow the
//! entity on screen.

use super::draw::{Color, DebugShape};
use crate::ecs::components::TransformComponent;
use crate::foundation::math::direction;
use crate::physics::{Collidable, ColliderType, ShapeKind};

/// Color scheme for collision visualization, one color per collider type
#[derive(Clone, Debug, PartialEq)]
pub struct CollisionDebugColors {
    /// Blocking bodies
    pub blocking: Color,

    /// Attack sources (hitboxes)
    pub attack_source: Color,

    /// Attack targets (hurtboxes)
    pub attack_target: Color,

    /// Trigger zones
    pub zone: Color,
}

impl Default for CollisionDebugColors {
    fn default() -> Self {
        Self {
            blocking: Color::new(0.0, 1.0, 0.0, 0.8),       // Green
            attack_source: Color::new(1.0, 0.0, 0.0, 0.8),  // Red
            attack_target: Color::new(1.0, 1.0, 0.0, 0.8),  // Yellow
            zone: Color::new(0.0, 1.0, 1.0, 0.4),           // Cyan, transparent
        }
    }
}

impl CollisionDebugColors {
    /// Color for a collider type
    pub fn for_type(&self, collider_type: ColliderType) -> Color {
        match collider_type {
            ColliderType::Blocking => self.blocking,
            ColliderType::AttackSource => self.attack_source,
            ColliderType::AttackTarget => self.attack_target,
            ColliderType::NonBlockingZone => self.zone,
        }
    }
}

/// Outline of a collider placed in world space
pub fn collider_debug_shape(
    collider: &dyn Collidable,
    owner_transform: &TransformComponent,
    colors: &CollisionDebugColors,
) -> DebugShape {
    let world = owner_transform.compose(collider.transform());
    let color = colors.for_type(collider.collider_type());

    match collider.shape() {
        ShapeKind::Box => DebugShape::Box {
            center: world.position,
            size: world.scale,
            rotation: world.rotation,
            color,
        },
        ShapeKind::Circle => DebugShape::Circle {
            center: world.position,
            radius: world.scale.x * 0.5,
            color,
        },
        ShapeKind::Line => DebugShape::Line {
            start: world.position,
            end: world.position + direction(world.rotation) * world.scale.x,
            color,
        },
    }
}
