//! Concrete collider variants
//!
//! All four wrap a [`ColliderCore`]; they differ only in type tag and in what
//! they do when notified of a contact.

use super::collider::{Collidable, ColliderCore, ColliderEvent, ColliderInfo, ColliderType};
use crate::ecs::EntityId;

/// Combat hit recorded by an [`AttackTargetCollider`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitEvent {
    /// Entity owning the attack source that landed the hit
    pub attacker: EntityId,
}

/// Solid body collider
#[derive(Debug, Clone)]
pub struct BlockingCollider {
    core: ColliderCore,
}

impl BlockingCollider {
    /// Wrap shared collider state
    pub fn new(core: ColliderCore) -> Self {
        Self { core }
    }
}

impl Collidable for BlockingCollider {
    fn core(&self) -> &ColliderCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ColliderCore {
        &mut self.core
    }

    fn collider_type(&self) -> ColliderType {
        ColliderType::Blocking
    }

    fn on_collision(&mut self, other: &ColliderInfo) {
        log::trace!(
            "Blocking collider of {:?} touched {:?} collider of {:?}",
            self.core.owner(),
            other.collider_type,
            other.owner
        );
    }
}

/// Offensive hitbox
#[derive(Debug, Clone)]
pub struct AttackSourceCollider {
    core: ColliderCore,
    hits_dealt: u32,
}

impl AttackSourceCollider {
    /// Wrap shared collider state
    pub fn new(core: ColliderCore) -> Self {
        Self { core, hits_dealt: 0 }
    }

    /// Number of contacts with attack targets since creation
    pub fn hits_dealt(&self) -> u32 {
        self.hits_dealt
    }
}

impl Collidable for AttackSourceCollider {
    fn core(&self) -> &ColliderCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ColliderCore {
        &mut self.core
    }

    fn collider_type(&self) -> ColliderType {
        ColliderType::AttackSource
    }

    fn on_collision(&mut self, other: &ColliderInfo) {
        self.hits_dealt = self.hits_dealt.saturating_add(1);
        log::debug!("{:?} hit {:?}", self.core.owner(), other.owner);
    }
}

/// Damageable hurtbox
///
/// Each contact queues a [`HitEvent`]; gameplay drains them with
/// [`take_hits`](Self::take_hits).
#[derive(Debug, Clone)]
pub struct AttackTargetCollider {
    core: ColliderCore,
    pending_hits: Vec<HitEvent>,
}

impl AttackTargetCollider {
    /// Wrap shared collider state
    pub fn new(core: ColliderCore) -> Self {
        Self {
            core,
            pending_hits: Vec::new(),
        }
    }

    /// Hits received and not yet drained, at most one per attacker
    pub fn pending_hits(&self) -> &[HitEvent] {
        &self.pending_hits
    }

    /// Drain queued hits
    pub fn take_hits(&mut self) -> Vec<HitEvent> {
        std::mem::take(&mut self.pending_hits)
    }
}

impl Collidable for AttackTargetCollider {
    fn core(&self) -> &ColliderCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ColliderCore {
        &mut self.core
    }

    fn collider_type(&self) -> ColliderType {
        ColliderType::AttackTarget
    }

    /// Queues one hit per attacker until drained
    fn on_collision(&mut self, other: &ColliderInfo) {
        let hit = HitEvent { attacker: other.owner };
        if self.pending_hits.contains(&hit) {
            return;
        }
        log::debug!("{:?} was hit by {:?}", self.core.owner(), other.owner);
        self.pending_hits.push(hit);
    }

    fn drain_events(&mut self) -> Vec<ColliderEvent> {
        self.take_hits()
            .into_iter()
            .map(|hit| ColliderEvent::Hit { attacker: hit.attacker })
            .collect()
    }
}

/// Trigger area
#[derive(Debug, Clone)]
pub struct NonBlockingZoneCollider {
    core: ColliderCore,
    visitors: Vec<EntityId>,
}

impl NonBlockingZoneCollider {
    /// Wrap shared collider state
    pub fn new(core: ColliderCore) -> Self {
        Self {
            core,
            visitors: Vec::new(),
        }
    }

    /// Owners of colliders that touched the zone and were not yet drained
    pub fn visitors(&self) -> &[EntityId] {
        &self.visitors
    }

    /// Drain recorded visitors
    pub fn take_visitors(&mut self) -> Vec<EntityId> {
        std::mem::take(&mut self.visitors)
    }
}

impl Collidable for NonBlockingZoneCollider {
    fn core(&self) -> &ColliderCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ColliderCore {
        &mut self.core
    }

    fn collider_type(&self) -> ColliderType {
        ColliderType::NonBlockingZone
    }

    /// Records each visitor once until drained
    fn on_collision(&mut self, other: &ColliderInfo) {
        if self.visitors.contains(&other.owner) {
            return;
        }
        log::trace!("{:?} entered zone of {:?}", other.owner, self.core.owner());
        self.visitors.push(other.owner);
    }

    fn drain_events(&mut self) -> Vec<ColliderEvent> {
        self.take_visitors()
            .into_iter()
            .map(|visitor| ColliderEvent::ZoneEntered { visitor })
            .collect()
    }
}

impl ColliderType {
    /// Build the concrete variant for this type around shared state
    pub fn build(self, core: ColliderCore) -> Box<dyn Collidable> {
        match self {
            Self::Blocking => Box::new(BlockingCollider::new(core)),
            Self::AttackSource => Box::new(AttackSourceCollider::new(core)),
            Self::AttackTarget => Box::new(AttackTargetCollider::new(core)),
            Self::NonBlockingZone => Box::new(NonBlockingZoneCollider::new(core)),
        }
    }
}
