//! Per-tick collision scan
//!
//! Brute force by design: every unordered pair of entities, every collider of
//! one against every collider of the other. No broad phase, no state kept
//! between ticks. The driver calls [`CollisionEngine::handle_collisions`]
//! explicitly once per simulation tick; nothing schedules it implicitly.
//!
//! Per collider pair:
//! 1. skip if either side is disabled or both share an owner
//! 2. look the pair's types up in the [`InteractionMatrix`]; ignored pairs stop here
//! 3. run the shape-pair test
//! 4. on overlap notify both sides, then for `Resolve` pairs push the
//!    blocking entity out (the first side if both block)
//!
//! Resolution writes entity positions while the scan is still running, so
//! with live positions later pairs see earlier corrections and the outcome
//! depends on spawn order. [`CollisionConfig::snapshot_positions`] freezes
//! positions at tick start instead.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::collider::{ColliderInfo, ColliderType};
use super::collision::{shapes_overlap, Aabb};
use super::interaction::{Interaction, InteractionMatrix};
use super::resolution::minimum_translation;
use crate::config::Config;
use crate::debug::{collider_debug_shape, ColliderRenderer, CollisionDebugColors};
use crate::ecs::components::TransformComponent;
use crate::ecs::{ColliderHandle, EntityId, System, World};

/// Which transform the narrow phase reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColliderSpace {
    /// The collider's own transform only; the owner's position is not applied.
    /// Colliders behave as if their owner sat at the origin.
    #[default]
    Local,
    /// Owner world transform composed with the collider transform, the same
    /// placement used for drawing
    World,
}

/// Collision engine settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionConfig {
    /// Transform space for geometry tests
    pub space: ColliderSpace,

    /// Read owner positions as they were at tick start instead of live
    pub snapshot_positions: bool,

    /// Type interaction table
    pub matrix: InteractionMatrix,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            space: ColliderSpace::Local,
            snapshot_positions: false,
            matrix: InteractionMatrix::default(),
        }
    }
}

impl Config for CollisionConfig {}

/// Counters from one scan, for logging and tests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Unordered entity pairs visited
    pub entity_pairs: usize,
    /// Collider pairs visited
    pub collider_pairs: usize,
    /// Pairs that reached the shape test
    pub narrow_phase_tests: usize,
    /// Overlapping pairs (each notified both sides)
    pub contacts: usize,
    /// Positional corrections applied
    pub resolutions: usize,
}

/// One side of a collider pair, copied out of the world before notifying
struct PairSide {
    handle: ColliderHandle,
    info: ColliderInfo,
    geometry: TransformComponent,
}

/// Stateless per-tick collision scanner
pub struct CollisionEngine {
    config: CollisionConfig,
    renderer: Option<Box<dyn ColliderRenderer>>,
    colors: CollisionDebugColors,
}

impl CollisionEngine {
    /// Create an engine with the given settings and no renderer
    pub fn new(config: CollisionConfig) -> Self {
        Self {
            config,
            renderer: None,
            colors: CollisionDebugColors::default(),
        }
    }

    /// Builder pattern: attach a renderer for collider outlines
    pub fn with_renderer(mut self, renderer: Box<dyn ColliderRenderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Builder pattern: custom outline colors
    pub fn with_colors(mut self, colors: CollisionDebugColors) -> Self {
        self.colors = colors;
        self
    }

    /// Current settings
    pub fn config(&self) -> &CollisionConfig {
        &self.config
    }

    /// Interaction table in use
    pub fn matrix(&self) -> &InteractionMatrix {
        &self.config.matrix
    }

    /// Scan every collider pair once, notify contacts and resolve blocking overlaps
    ///
    /// Both sides of a contact are notified on every tick it persists. Targets
    /// and zones keep at most one pending event per other entity, so a caller
    /// that drains less often than once per tick sees each contact once.
    pub fn handle_collisions(&self, world: &mut World) -> ScanStats {
        let ids: Vec<EntityId> = world.entity_ids().collect();
        let snapshot: Option<HashMap<EntityId, TransformComponent>> = self
            .config
            .snapshot_positions
            .then(|| ids.iter().filter_map(|&id| world.transform(id).map(|t| (id, *t))).collect());

        let mut stats = ScanStats::default();
        for (i, &entity_a) in ids.iter().enumerate() {
            for &entity_b in &ids[i + 1..] {
                stats.entity_pairs += 1;

                let count_a = world.colliders(entity_a).len();
                let count_b = world.colliders(entity_b).len();
                for index_a in 0..count_a {
                    for index_b in 0..count_b {
                        self.visit_pair(
                            world,
                            snapshot.as_ref(),
                            ColliderHandle { entity: entity_a, index: index_a },
                            ColliderHandle { entity: entity_b, index: index_b },
                            &mut stats,
                        );
                    }
                }
            }
        }

        log::debug!(
            "Collision scan: {} entity pairs, {} collider pairs, {} tests, {} contacts, {} resolutions",
            stats.entity_pairs,
            stats.collider_pairs,
            stats.narrow_phase_tests,
            stats.contacts,
            stats.resolutions
        );
        stats
    }

    fn visit_pair(
        &self,
        world: &mut World,
        snapshot: Option<&HashMap<EntityId, TransformComponent>>,
        handle_a: ColliderHandle,
        handle_b: ColliderHandle,
        stats: &mut ScanStats,
    ) {
        stats.collider_pairs += 1;

        let Some((side_a, side_b, interaction)) = self.classify(world, snapshot, handle_a, handle_b) else {
            return;
        };

        stats.narrow_phase_tests += 1;
        if !shapes_overlap(side_a.info.shape, &side_a.geometry, side_b.info.shape, &side_b.geometry) {
            return;
        }
        stats.contacts += 1;
        log::trace!(
            "Contact: {:?} {:?} <-> {:?} {:?}",
            side_a.info.owner,
            side_a.info.collider_type,
            side_b.info.owner,
            side_b.info.collider_type
        );

        if let Some(collider) = world.collider_mut(side_a.handle) {
            collider.on_collision(&side_b.info);
        }
        if let Some(collider) = world.collider_mut(side_b.handle) {
            collider.on_collision(&side_a.info);
        }

        if interaction == Interaction::Resolve && Self::resolve(world, &side_a, &side_b) {
            stats.resolutions += 1;
        }
    }

    /// Copy out both sides and the pair's interaction, or `None` if the pair is skipped
    fn classify(
        &self,
        world: &World,
        snapshot: Option<&HashMap<EntityId, TransformComponent>>,
        handle_a: ColliderHandle,
        handle_b: ColliderHandle,
    ) -> Option<(PairSide, PairSide, Interaction)> {
        let a = world.collider(handle_a)?;
        let b = world.collider(handle_b)?;

        if !a.is_enabled() || !b.is_enabled() {
            return None;
        }
        if a.owner() == b.owner() {
            return None;
        }

        let interaction = self.config.matrix.interaction(a.collider_type(), b.collider_type());
        if !interaction.is_tested() {
            return None;
        }

        let side_a = PairSide {
            handle: handle_a,
            info: a.info(),
            geometry: self.geometry_transform(world, snapshot, a.owner(), a.transform()),
        };
        let side_b = PairSide {
            handle: handle_b,
            info: b.info(),
            geometry: self.geometry_transform(world, snapshot, b.owner(), b.transform()),
        };
        Some((side_a, side_b, interaction))
    }

    fn geometry_transform(
        &self,
        world: &World,
        snapshot: Option<&HashMap<EntityId, TransformComponent>>,
        owner: EntityId,
        local: &TransformComponent,
    ) -> TransformComponent {
        match self.config.space {
            ColliderSpace::Local => *local,
            ColliderSpace::World => {
                let parent = snapshot
                    .and_then(|frozen| frozen.get(&owner))
                    .or_else(|| world.transform(owner))
                    .copied()
                    .unwrap_or_default();
                parent.compose(local)
            }
        }
    }

    /// Push the blocking side's entity out of the other side; returns whether it moved
    fn resolve(world: &mut World, side_a: &PairSide, side_b: &PairSide) -> bool {
        let (blocking, other) = if side_a.info.collider_type == ColliderType::Blocking {
            (side_a, side_b)
        } else if side_b.info.collider_type == ColliderType::Blocking {
            (side_b, side_a)
        } else {
            return false;
        };

        let blocking_box = Aabb::from_center_size(blocking.geometry.position, blocking.geometry.scale);
        let other_box = Aabb::from_center_size(other.geometry.position, other.geometry.scale);
        let Some(push) = minimum_translation(&blocking_box, &other_box) else {
            return false;
        };

        match world.transform_mut(blocking.info.owner) {
            Some(transform) => {
                transform.position += push;
                log::trace!("Resolved {:?} by {:?}", blocking.info.owner, push);
                true
            }
            None => false,
        }
    }

    /// Send the outline of every enabled collider to the attached renderer
    ///
    /// Returns the number of outlines drawn; zero when no renderer is attached.
    pub fn draw_colliders(&mut self, world: &World) -> usize {
        let Some(renderer) = self.renderer.as_mut() else {
            return 0;
        };

        let mut drawn = 0;
        for id in world.entity_ids() {
            let Some(entity) = world.entity(id) else {
                continue;
            };
            for collider in entity.colliders().iter().filter(|c| c.is_enabled()) {
                renderer.draw(collider_debug_shape(&**collider, &entity.transform, &self.colors));
                drawn += 1;
            }
        }
        drawn
    }
}

impl Default for CollisionEngine {
    fn default() -> Self {
        Self::new(CollisionConfig::default())
    }
}

impl System for CollisionEngine {
    fn run(&mut self, world: &mut World) {
        self.handle_collisions(world);
    }
}
