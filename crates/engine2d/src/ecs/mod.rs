//! Entity container
//!
//! Entities live in a generational arena. Each entity owns its world
//! transform and the colliders attached to it; colliders refer back to their
//! owner through a stable [`EntityId`] rather than a pointer.

pub mod world;
pub mod entity;
pub mod system;
pub mod components;

#[cfg(test)]
mod tests;

pub use world::{World, WorldError};
pub use entity::{ColliderHandle, EntityData, EntityId};
pub use system::System;
