//! Scan-level tests: whole worlds run through the collision engine

mod collision_config;
mod debug_drawing;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::ecs::components::TransformComponent;
use crate::ecs::{ColliderHandle, EntityId, World};
use crate::foundation::math::Vec2;
use crate::physics::{Collidable, ColliderCore, ColliderInfo, ColliderType};

/// Collider that only counts how often it was notified
pub(super) struct CountingCollider {
    core: ColliderCore,
    collider_type: ColliderType,
    calls: Arc<AtomicUsize>,
}

impl Collidable for CountingCollider {
    fn core(&self) -> &ColliderCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ColliderCore {
        &mut self.core
    }

    fn collider_type(&self) -> ColliderType {
        self.collider_type
    }

    fn on_collision(&mut self, _other: &ColliderInfo) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

/// Shared call counter of a counting collider
#[derive(Clone, Default)]
pub(super) struct Calls(Arc<AtomicUsize>);

impl Calls {
    pub(super) fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// Spawn an entity at `position` with one counting box collider
pub(super) fn spawn_counted(
    world: &mut World,
    name: &str,
    position: Vec2,
    collider_type: ColliderType,
    center: Vec2,
    size: Vec2,
) -> (EntityId, ColliderHandle, Calls) {
    let calls = Calls::default();
    let entity = world.spawn(name, TransformComponent::from_position(position));
    let counter = Arc::clone(&calls.0);
    let handle = world
        .attach_collider(entity, |owner| CountingCollider {
            core: ColliderCore::rect(owner, center, size),
            collider_type,
            calls: counter,
        })
        .unwrap();
    (entity, handle, calls)
}

/// Spawn an entity at `position` with one box collider of the given type
pub(super) fn spawn_box(
    world: &mut World,
    name: &str,
    position: Vec2,
    collider_type: ColliderType,
    center: Vec2,
    size: Vec2,
) -> EntityId {
    let entity = world.spawn(name, TransformComponent::from_position(position));
    let collider = collider_type.build(ColliderCore::rect(entity, center, size));
    world.attach_boxed(collider).unwrap();
    entity
}

pub(super) fn position(world: &World, entity: EntityId) -> Vec2 {
    world.transform(entity).unwrap().position
}
