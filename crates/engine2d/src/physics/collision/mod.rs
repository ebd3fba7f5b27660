//! Narrow-phase collision geometry
//!
//! # Module Organization
//!
//! - [`primitives`] - Rectangles, circles, segments and the pair predicates
//! - [`shape`] - Builds primitives from collider transforms and dispatches pairs
//!
//! There is no broad phase: every type-compatible pair goes straight to the
//! shape test.

pub mod primitives;
pub mod shape;

pub use primitives::{Aabb, Circle, Segment};
pub use shape::{shapes_overlap, ShapeGeometry};
