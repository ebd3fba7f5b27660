//! Debug drawing primitives and the renderer seam

use crate::foundation::math::Vec2;

/// RGBA color, components in `0.0..=1.0`
pub type Color = nalgebra::Vector4<f32>;

/// Debug shape primitives that can be rendered for visualization
#[derive(Clone, Debug, PartialEq)]
pub enum DebugShape {
    /// Axis-aligned box at center with full size
    Box {
        /// Center
        center: Vec2,
        /// Width and height
        size: Vec2,
        /// Rotation in radians (drawn, not collided)
        rotation: f32,
        /// Outline color
        color: Color,
    },

    /// Circle at center with radius
    Circle {
        /// Center
        center: Vec2,
        /// Radius
        radius: f32,
        /// Outline color
        color: Color,
    },

    /// Line segment from start to end
    Line {
        /// Start point
        start: Vec2,
        /// End point
        end: Vec2,
        /// Color
        color: Color,
    },
}

impl DebugShape {
    /// Color of the shape
    pub fn color(&self) -> Color {
        match self {
            Self::Box { color, .. } | Self::Circle { color, .. } | Self::Line { color, .. } => *color,
        }
    }
}

/// Anything that can draw debug shapes (editor overlay, GPU backend, tests)
pub trait ColliderRenderer {
    /// Queue one shape for drawing
    fn draw(&mut self, shape: DebugShape);
}

/// Renderer that records shapes until cleared
///
/// Used by the editor overlay to keep the last frame's collider outlines and
/// by tests to inspect what would have been drawn.
#[derive(Debug, Default, Clone)]
pub struct DebugDrawList {
    shapes: Vec<DebugShape>,
}

impl DebugDrawList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded shapes in draw order
    pub fn shapes(&self) -> &[DebugShape] {
        &self.shapes
    }

    /// Number of recorded shapes
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Forget every recorded shape
    pub fn clear(&mut self) {
        self.shapes.clear();
    }
}

impl ColliderRenderer for DebugDrawList {
    fn draw(&mut self, shape: DebugShape) {
        self.shapes.push(shape);
    }
}

/// Shared draw list: the engine records, the editor overlay reads
impl ColliderRenderer for std::sync::Arc<std::sync::Mutex<DebugDrawList>> {
    fn draw(&mut self, shape: DebugShape) {
        let mut list = match self.lock() {
            Ok(list) => list,
            Err(poisoned) => poisoned.into_inner(),
        };
        list.draw(shape);
    }
}
