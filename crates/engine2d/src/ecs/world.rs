//! ECS World implementation

use slotmap::SlotMap;

use super::components::TransformComponent;
use super::entity::{ColliderHandle, EntityData, EntityId};
use crate::physics::{Collidable, ColliderEvent, ColliderType};

/// World errors
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum WorldError {
    /// The entity handle is stale or was never issued by this world
    #[error("Entity not found: {0:?}")]
    EntityNotFound(EntityId),

    /// The entity exists but has no collider at that index
    #[error("Collider {index} not found on entity {entity:?}")]
    ColliderNotFound {
        /// Owning entity
        entity: EntityId,
        /// Requested index
        index: usize,
    },
}

/// ECS World containing all entities and their colliders
#[derive(Default)]
pub struct World {
    entities: SlotMap<EntityId, EntityData>,
    /// Spawn order; the collision scan walks entities in this order
    order: Vec<EntityId>,
}

impl World {
    /// Create a new world
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new entity with the given world transform
    pub fn spawn(&mut self, name: impl Into<String>, transform: TransformComponent) -> EntityId {
        let id = self.entities.insert(EntityData::new(name, transform));
        self.order.push(id);
        log::trace!("Spawned entity {:?}", id);
        id
    }

    /// Destroy an entity together with every collider it owns
    pub fn despawn(&mut self, id: EntityId) -> Result<EntityData, WorldError> {
        let data = self.entities.remove(id).ok_or(WorldError::EntityNotFound(id))?;
        self.order.retain(|&other| other != id);
        log::trace!("Despawned entity {:?} ({} colliders)", id, data.colliders.len());
        Ok(data)
    }

    /// Whether the handle refers to a live entity
    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(id)
    }

    /// Number of live entities
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the world has no entities
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Live entity handles in spawn order
    pub fn entity_ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.order.iter().copied()
    }

    /// Entity storage
    pub fn entity(&self, id: EntityId) -> Option<&EntityData> {
        self.entities.get(id)
    }

    /// World transform of an entity
    pub fn transform(&self, id: EntityId) -> Option<&TransformComponent> {
        self.entities.get(id).map(|data| &data.transform)
    }

    /// Mutable world transform of an entity
    pub fn transform_mut(&mut self, id: EntityId) -> Option<&mut TransformComponent> {
        self.entities.get_mut(id).map(|data| &mut data.transform)
    }

    /// Attach a collider built for this entity
    ///
    /// The builder receives the owner handle, so a collider can never exist
    /// without its owner and the owner is fixed for the collider's lifetime.
    pub fn attach_collider<C, F>(&mut self, id: EntityId, build: F) -> Result<ColliderHandle, WorldError>
    where
        C: Collidable + 'static,
        F: FnOnce(EntityId) -> C,
    {
        let data = self.entities.get_mut(id).ok_or(WorldError::EntityNotFound(id))?;
        let collider = build(id);
        debug_assert_eq!(collider.owner(), id, "collider built for a different owner");

        data.colliders.push(Box::new(collider));
        Ok(ColliderHandle {
            entity: id,
            index: data.colliders.len() - 1,
        })
    }

    /// Attach an already boxed collider (used when restoring saved colliders)
    pub fn attach_boxed(&mut self, collider: Box<dyn Collidable>) -> Result<ColliderHandle, WorldError> {
        let id = collider.owner();
        let data = self.entities.get_mut(id).ok_or(WorldError::EntityNotFound(id))?;
        data.colliders.push(collider);
        Ok(ColliderHandle {
            entity: id,
            index: data.colliders.len() - 1,
        })
    }

    /// Detach and return a collider
    ///
    /// Later colliders on the same entity shift down by one index.
    pub fn remove_collider(&mut self, handle: ColliderHandle) -> Result<Box<dyn Collidable>, WorldError> {
        let data = self
            .entities
            .get_mut(handle.entity)
            .ok_or(WorldError::EntityNotFound(handle.entity))?;
        if handle.index >= data.colliders.len() {
            return Err(WorldError::ColliderNotFound {
                entity: handle.entity,
                index: handle.index,
            });
        }
        Ok(data.colliders.remove(handle.index))
    }

    /// All colliders attached to an entity
    pub fn colliders(&self, id: EntityId) -> &[Box<dyn Collidable>] {
        match self.entities.get(id) {
            Some(data) => data.colliders.as_slice(),
            None => &[],
        }
    }

    /// Mutable view over all colliders attached to an entity
    pub fn colliders_mut(&mut self, id: EntityId) -> &mut [Box<dyn Collidable>] {
        match self.entities.get_mut(id) {
            Some(data) => data.colliders.as_mut_slice(),
            None => &mut [],
        }
    }

    /// Colliders of one type attached to an entity
    pub fn colliders_of_type(
        &self,
        id: EntityId,
        collider_type: ColliderType,
    ) -> impl Iterator<Item = &dyn Collidable> + '_ {
        self.colliders(id)
            .iter()
            .map(|collider| &**collider)
            .filter(move |collider| collider.collider_type() == collider_type)
    }

    /// Drain gameplay events queued on every collider of an entity
    pub fn drain_events(&mut self, id: EntityId) -> Vec<ColliderEvent> {
        self.colliders_mut(id)
            .iter_mut()
            .flat_map(|collider| collider.drain_events())
            .collect()
    }

    /// Look up a single collider
    pub fn collider(&self, handle: ColliderHandle) -> Option<&dyn Collidable> {
        self.colliders(handle.entity)
            .get(handle.index)
            .map(|collider| &**collider)
    }

    /// Look up a single collider mutably
    pub fn collider_mut(&mut self, handle: ColliderHandle) -> Option<&mut (dyn Collidable + 'static)> {
        self.colliders_mut(handle.entity)
            .get_mut(handle.index)
            .map(|collider| &mut **collider)
    }
}

impl std::fmt::Debug for World {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("World")
            .field("entities", &self.entities.len())
            .finish()
    }
}
