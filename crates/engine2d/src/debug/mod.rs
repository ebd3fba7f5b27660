//! Debug module for visualization and debugging tools
//!
//! The engine never talks to a graphics backend directly; it hands
//! [`DebugShape`]s to whatever [`ColliderRenderer`] it was constructed with.

pub mod draw;
pub mod collision_debug;

pub use draw::{Color, ColliderRenderer, DebugDrawList, DebugShape};
pub use collision_debug::{collider_debug_shape, CollisionDebugColors};
