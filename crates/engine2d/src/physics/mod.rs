//! Physics module for collision detection and response
//!
//! Colliders are classified by type before any geometry runs, tested pairwise
//! by shape, and blocking overlaps are pushed apart along a single axis.

pub mod behaviors;
pub mod collider;
pub mod collision;
pub mod collision_system;
pub mod interaction;
pub mod persist;
pub mod resolution;

#[cfg(test)]
mod tests;

pub use behaviors::{
    AttackSourceCollider, AttackTargetCollider, BlockingCollider, HitEvent, NonBlockingZoneCollider,
};
pub use collider::{Collidable, ColliderCore, ColliderEvent, ColliderInfo, ColliderType, ShapeKind};
pub use collision_system::{ColliderSpace, CollisionConfig, CollisionEngine, ScanStats};
pub use interaction::{Interaction, InteractionMatrix, InteractionRule};
pub use persist::{ColliderRecord, PersistError};
