//! # Engine2D
//!
//! A small 2D entity runtime built around a brute-force collision core.
//!
//! ## Features
//!
//! - **Entity Arena**: Entities live in a generational arena, colliders hold stable handles
//! - **Collider Family**: Blocking, attack source, attack target and trigger-zone colliders
//! - **Narrow Phase**: Box, circle and line segment pair tests
//! - **Interaction Matrix**: Injected policy table deciding which collider types meet
//! - **Resolution**: Single-axis minimum-translation push-out for blocking bodies
//! - **Debug Drawing**: Pluggable renderer seam for collider visualization
//!
//! ## Quick Start
//!
//! ```rust
//! use engine2d::prelude::*;
//!
//! let mut world = World::new();
//! let wall = world.spawn("wall", TransformComponent::identity());
//! world
//!     .attach_collider(wall, |owner| {
//!         BlockingCollider::new(ColliderCore::new(
//!             owner,
//!             ShapeKind::Box,
//!             TransformComponent::from_position_scale(Vec2::new(0.0, 0.0), Vec2::new(2.0, 2.0)),
//!         ))
//!     })
//!     .unwrap();
//!
//! let engine = CollisionEngine::new(CollisionConfig::default());
//! engine.handle_collisions(&mut world);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod ecs;
pub mod physics;
pub mod debug;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError},
        debug::{ColliderRenderer, DebugDrawList, DebugShape},
        ecs::{
            components::TransformComponent,
            ColliderHandle, EntityId, System, World, WorldError,
        },
        foundation::math::Vec2,
        physics::{
            AttackSourceCollider, AttackTargetCollider, BlockingCollider, Collidable, ColliderEvent,
            ColliderCore, ColliderInfo, ColliderSpace, ColliderType, CollisionConfig,
            CollisionEngine, HitEvent, Interaction, InteractionMatrix,
            NonBlockingZoneCollider, ScanStats, ShapeKind,
        },
    };
}
