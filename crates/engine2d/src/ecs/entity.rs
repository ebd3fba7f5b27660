//! Entity implementation

use crate::ecs::components::TransformComponent;
use crate::physics::Collidable;

slotmap::new_key_type! {
    /// Generational entity handle
    ///
    /// Stays valid as a lookup key after the entity is despawned; lookups of a
    /// stale handle simply fail instead of aliasing a newer entity.
    pub struct EntityId;
}

/// Address of one collider: owning entity plus position in its collider list
///
/// The index is positional. Removing a collider shifts every later collider
/// of the same entity down by one, so handles taken before a removal may
/// point at a different collider afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColliderHandle {
    /// Owning entity
    pub entity: EntityId,
    /// Index into the entity's collider list
    pub index: usize,
}

/// Per-entity storage held by the [`World`](crate::ecs::World)
pub struct EntityData {
    /// Debug name
    pub name: String,

    /// World transform; the resolution step writes `position` in place
    pub transform: TransformComponent,

    pub(crate) colliders: Vec<Box<dyn Collidable>>,
}

impl EntityData {
    pub(crate) fn new(name: impl Into<String>, transform: TransformComponent) -> Self {
        Self {
            name: name.into(),
            transform,
            colliders: Vec::new(),
        }
    }

    /// Colliders attached to this entity
    pub fn colliders(&self) -> &[Box<dyn Collidable>] {
        &self.colliders
    }
}

impl std::fmt::Debug for EntityData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityData")
            .field("name", &self.name)
            .field("transform", &self.transform)
            .field("colliders", &self.colliders.len())
            .finish()
    }
}
