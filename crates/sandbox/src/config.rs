//! Sandbox configuration
//!
//! Loaded from `sandbox.toml` (or `.ron`) next to the working directory;
//! every field falls back to its default when missing.

use engine2d::config::Config;
use engine2d::physics::{ColliderSpace, CollisionConfig};
use serde::{Deserialize, Serialize};

/// Sandbox configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    /// Arena and simulation settings
    pub arena: ArenaConfig,

    /// Collision engine settings
    pub collision: CollisionConfig,

    /// Debug output settings
    pub debug: DebugConfig,
}

/// Arena and simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Number of simulation ticks to run
    pub ticks: u32,

    /// Fixed time step (seconds)
    pub timestep: f32,

    /// Half width of the square arena
    pub half_extent: f32,

    /// Player speed in units per second
    pub player_speed: f32,

    /// Loose crates scattered in the arena
    pub crate_count: u32,

    /// Seed for crate placement
    pub seed: u64,
}

/// Debug output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Collect collider outlines every N ticks, 0 disables drawing
    pub draw_interval: u32,

    /// Write the final scene here and read it back
    pub scene_path: Option<String>,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            arena: ArenaConfig::default(),
            // Entities move in the sandbox, so collide where they are drawn
            collision: CollisionConfig {
                space: ColliderSpace::World,
                ..CollisionConfig::default()
            },
            debug: DebugConfig::default(),
        }
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            ticks: 240,
            timestep: 1.0 / 60.0,
            half_extent: 10.0,
            player_speed: 6.0,
            crate_count: 4,
            seed: 7,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            draw_interval: 60,
            scene_path: None,
        }
    }
}

impl Config for SandboxConfig {}
