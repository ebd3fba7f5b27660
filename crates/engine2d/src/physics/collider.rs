//! Collider data model
//!
//! A collider is a shape kind, a type tag and a local transform whose scale
//! doubles as shape parameters:
//!
//! | Shape    | `position`  | `rotation`          | `scale`             |
//! |----------|-------------|---------------------|---------------------|
//! | `Box`    | center      | ignored             | (width, height)     |
//! | `Circle` | center      | ignored             | x = diameter        |
//! | `Line`   | start point | direction (radians) | x = length          |
//!
//! Geometry reads the collider's own transform only. Composing it with the
//! owner's world transform is opt-in, see
//! [`ColliderSpace`](crate::physics::ColliderSpace).

use serde::{Deserialize, Serialize};

use crate::ecs::components::TransformComponent;
use crate::ecs::EntityId;
use crate::foundation::math::{direction, Vec2};

/// Geometric shape of a collider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    /// Axis-aligned box
    Box,
    /// Circle
    Circle,
    /// Line segment
    Line,
}

impl ShapeKind {
    /// Every shape kind
    pub const ALL: [Self; 3] = [Self::Box, Self::Circle, Self::Line];

    /// Stable integer code used by saved scenes
    pub const fn code(self) -> i32 {
        match self {
            Self::Box => 0,
            Self::Circle => 1,
            Self::Line => 2,
        }
    }

    /// Inverse of [`code`](Self::code)
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Box),
            1 => Some(Self::Circle),
            2 => Some(Self::Line),
            _ => None,
        }
    }
}

/// Gameplay role of a collider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColliderType {
    /// Solid body; prevents interpenetration
    Blocking,
    /// Offensive hitbox
    AttackSource,
    /// Damageable hurtbox
    AttackTarget,
    /// Trigger area; notifies, never pushes
    NonBlockingZone,
}

impl ColliderType {
    /// Every collider type
    pub const ALL: [Self; 4] = [
        Self::Blocking,
        Self::AttackSource,
        Self::AttackTarget,
        Self::NonBlockingZone,
    ];

    /// Dense index for table lookups
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Blocking => 0,
            Self::AttackSource => 1,
            Self::AttackTarget => 2,
            Self::NonBlockingZone => 3,
        }
    }
}

/// State shared by every collider variant
#[derive(Debug, Clone, PartialEq)]
pub struct ColliderCore {
    owner: EntityId,
    shape: ShapeKind,

    /// Local transform; scale carries the shape parameters
    pub transform: TransformComponent,

    enabled: bool,
}

impl ColliderCore {
    /// Create an enabled collider owned by `owner`
    pub fn new(owner: EntityId, shape: ShapeKind, transform: TransformComponent) -> Self {
        Self {
            owner,
            shape,
            transform,
            enabled: true,
        }
    }

    /// Axis-aligned box centered at `center` with the given size
    pub fn rect(owner: EntityId, center: Vec2, size: Vec2) -> Self {
        Self::new(owner, ShapeKind::Box, TransformComponent::from_position_scale(center, size))
    }

    /// Circle of the given radius
    pub fn circle(owner: EntityId, center: Vec2, radius: f32) -> Self {
        let diameter = radius * 2.0;
        Self::new(
            owner,
            ShapeKind::Circle,
            TransformComponent::from_position_scale(center, Vec2::new(diameter, diameter)),
        )
    }

    /// Segment starting at `start`, pointing along `rotation` for `length` units
    pub fn line(owner: EntityId, start: Vec2, rotation: f32, length: f32) -> Self {
        Self::new(
            owner,
            ShapeKind::Line,
            TransformComponent::from_transform(start, rotation, Vec2::new(length, 1.0)),
        )
    }

    /// Builder pattern: start disabled or enabled
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Owning entity
    pub fn owner(&self) -> EntityId {
        self.owner
    }

    /// Shape kind
    pub fn shape(&self) -> ShapeKind {
        self.shape
    }

    /// Whether the collider takes part in scanning and drawing
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable the collider
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Lower corner of the local box, `position - scale / 2`
    pub fn min(&self) -> Vec2 {
        self.transform.position - self.transform.scale * 0.5
    }

    /// Upper corner of the local box, `position + scale / 2`
    pub fn max(&self) -> Vec2 {
        self.transform.position + self.transform.scale * 0.5
    }

    /// Circle radius, half of `scale.x`
    pub fn radius(&self) -> f32 {
        self.transform.scale.x * 0.5
    }

    /// Line segment end points
    pub fn segment(&self) -> (Vec2, Vec2) {
        let start = self.transform.position;
        (start, start + direction(self.transform.rotation) * self.transform.scale.x)
    }
}

/// Read-only snapshot of a collider, handed to the other side of a contact
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColliderInfo {
    /// Owning entity
    pub owner: EntityId,
    /// Collider type
    pub collider_type: ColliderType,
    /// Shape kind
    pub shape: ShapeKind,
    /// Local transform at the time of the contact
    pub transform: TransformComponent,
}

/// Gameplay event queued by a collider when notified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColliderEvent {
    /// An attack source owned by `attacker` touched this hurtbox
    Hit {
        /// Owner of the attack source
        attacker: EntityId,
    },
    /// A collider owned by `visitor` touched this zone
    ZoneEntered {
        /// Owner of the visiting collider
        visitor: EntityId,
    },
}

/// Capability every collider variant exposes to the collision engine
///
/// Variants differ only in [`collider_type`](Self::collider_type) and
/// [`on_collision`](Self::on_collision); geometry and lifecycle live in the
/// shared [`ColliderCore`].
pub trait Collidable: Send + Sync {
    /// Shared collider state
    fn core(&self) -> &ColliderCore;

    /// Shared collider state, mutable
    fn core_mut(&mut self) -> &mut ColliderCore;

    /// Type tag, constant for the lifetime of the collider
    fn collider_type(&self) -> ColliderType;

    /// Contact notification
    ///
    /// Called once on each participant of an overlap, with a snapshot of the
    /// other side. The order of the two calls is unspecified.
    fn on_collision(&mut self, other: &ColliderInfo);

    /// Shape kind
    fn shape(&self) -> ShapeKind {
        self.core().shape()
    }

    /// Local transform
    fn transform(&self) -> &TransformComponent {
        &self.core().transform
    }

    /// Whether the collider takes part in scanning and drawing
    fn is_enabled(&self) -> bool {
        self.core().is_enabled()
    }

    /// Owning entity
    fn owner(&self) -> EntityId {
        self.core().owner()
    }

    /// Lower corner of the local box
    fn min(&self) -> Vec2 {
        self.core().min()
    }

    /// Upper corner of the local box
    fn max(&self) -> Vec2 {
        self.core().max()
    }

    /// Drain gameplay events queued by [`on_collision`](Self::on_collision)
    ///
    /// Variants that only log keep nothing and return an empty list.
    fn drain_events(&mut self) -> Vec<ColliderEvent> {
        Vec::new()
    }

    /// Snapshot handed to the other participant of a contact
    fn info(&self) -> ColliderInfo {
        ColliderInfo {
            owner: self.owner(),
            collider_type: self.collider_type(),
            shape: self.shape(),
            transform: *self.transform(),
        }
    }
}
