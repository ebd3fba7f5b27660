//! Arena entities and the text scene format
//!
//! A scene file lists entities, each followed by its colliders:
//!
//! ```text
//! entity player 0 0 0 1 1
//! collider Blocking
//! enabled 1
//! transform 0 0 0 1 1
//! shape 0
//! end
//! ```
//!
//! The entity line carries the world transform as `px py rotation sx sy`;
//! names may not contain whitespace. The collider body is the engine's
//! collider record.

use engine2d::ecs::components::TransformComponent;
use engine2d::ecs::{EntityId, World, WorldError};
use engine2d::foundation::math::Vec2;
use engine2d::physics::persist::{parse_record, write_record};
use engine2d::physics::{Collidable, ColliderCore, ColliderRecord, ColliderType, PersistError};
use rand::Rng;

/// Scene errors
#[derive(thiserror::Error, Debug)]
pub enum SceneError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed collider record
    #[error("Line {line}: {source}")]
    Record {
        /// Line of the `collider` header
        line: usize,
        /// Underlying record error
        source: PersistError,
    },

    /// Malformed scene line
    #[error("Line {line}: {message}")]
    Syntax {
        /// One-based line number
        line: usize,
        /// What went wrong
        message: String,
    },

    /// Entity name cannot be written as a single token
    #[error("Entity name '{0}' is empty or contains whitespace")]
    InvalidName(String),

    /// A restored scene differs from the world it was written from
    #[error("Restored scene differs at entity '{0}'")]
    Mismatch(String),

    /// Entity bookkeeping failed
    #[error(transparent)]
    World(#[from] WorldError),
}

/// Handles of the scripted arena actors
#[derive(Debug, Clone, Copy)]
pub struct Actors {
    /// Moving blocking body with a hitbox
    pub player: EntityId,
    /// Stationary hurtbox
    pub dummy: EntityId,
    /// Trigger area in the arena center
    pub zone: EntityId,
}

/// Populate an arena: walls, player, dummy, zone and loose crates
pub fn build_arena(
    world: &mut World,
    half_extent: f32,
    crate_count: u32,
    rng: &mut impl Rng,
) -> Result<Actors, SceneError> {
    // Side walls stop where the top and bottom walls begin, so no two walls overlap
    let side = Vec2::new(1.0, half_extent * 2.0 - 1.0);
    let cap = Vec2::new(half_extent * 2.0 + 1.0, 1.0);
    for (name, position, size) in [
        ("wall_left", Vec2::new(-half_extent, 0.0), side),
        ("wall_right", Vec2::new(half_extent, 0.0), side),
        ("wall_bottom", Vec2::new(0.0, -half_extent), cap),
        ("wall_top", Vec2::new(0.0, half_extent), cap),
    ] {
        let wall = world.spawn(name, TransformComponent::from_position(position));
        world.attach_boxed(ColliderType::Blocking.build(ColliderCore::rect(wall, Vec2::zeros(), size)))?;
    }

    let player = world.spawn("player", TransformComponent::from_position(Vec2::new(-half_extent * 0.5, 0.0)));
    world.attach_boxed(ColliderType::Blocking.build(ColliderCore::rect(player, Vec2::zeros(), Vec2::new(1.0, 1.0))))?;
    // Sword swing in front of the player
    world.attach_boxed(ColliderType::AttackSource.build(ColliderCore::line(player, Vec2::new(0.5, 0.0), 0.0, 1.5)))?;

    let dummy = world.spawn("dummy", TransformComponent::from_position(Vec2::new(half_extent * 0.5, 0.0)));
    world.attach_boxed(ColliderType::AttackTarget.build(ColliderCore::circle(dummy, Vec2::zeros(), 0.75)))?;

    let zone = world.spawn("zone", TransformComponent::identity());
    world.attach_boxed(ColliderType::NonBlockingZone.build(ColliderCore::rect(zone, Vec2::zeros(), Vec2::new(3.0, 3.0))))?;

    let spread = half_extent * 0.8;
    for i in 0..crate_count {
        let position = Vec2::new(rng.gen_range(-spread..spread), rng.gen_range(-spread..spread));
        let id = world.spawn(format!("crate{i}"), TransformComponent::from_position(position));
        world.attach_boxed(ColliderType::Blocking.build(ColliderCore::rect(id, Vec2::zeros(), Vec2::new(0.8, 0.8))))?;
    }

    log::info!("Arena built with {} entities", world.len());
    Ok(Actors { player, dummy, zone })
}

/// Tag used for a collider type in scene files
pub fn type_tag(collider_type: ColliderType) -> &'static str {
    match collider_type {
        ColliderType::Blocking => "Blocking",
        ColliderType::AttackSource => "AttackSource",
        ColliderType::AttackTarget => "AttackTarget",
        ColliderType::NonBlockingZone => "NonBlockingZone",
    }
}

fn parse_type_tag(tag: &str) -> Option<ColliderType> {
    ColliderType::ALL.into_iter().find(|&collider_type| type_tag(collider_type) == tag)
}

/// Serialize every entity and collider
pub fn write_scene(world: &World) -> Result<String, SceneError> {
    let mut out = String::new();
    for id in world.entity_ids() {
        let Some(entity) = world.entity(id) else {
            continue;
        };
        if entity.name.is_empty() || entity.name.chars().any(char::is_whitespace) {
            return Err(SceneError::InvalidName(entity.name.clone()));
        }

        let t = &entity.transform;
        out.push_str(&format!(
            "entity {} {} {} {} {} {}\n",
            entity.name, t.position.x, t.position.y, t.rotation, t.scale.x, t.scale.y
        ));
        for collider in entity.colliders() {
            out.push_str(&format!("collider {}\n", type_tag(collider.collider_type())));
            out.push_str(&write_record(&ColliderRecord::from_collider(&**collider)));
        }
    }
    Ok(out)
}

/// Check that `restored` holds the same entities, transforms and colliders as `original`
pub fn verify_restored(original: &World, restored: &World) -> Result<(), SceneError> {
    let originals: Vec<_> = original.entity_ids().filter_map(|id| original.entity(id)).collect();
    let copies: Vec<_> = restored.entity_ids().filter_map(|id| restored.entity(id)).collect();
    if originals.len() != copies.len() {
        return Err(SceneError::Mismatch("<entity count>".to_string()));
    }

    for (a, b) in originals.iter().zip(&copies) {
        let same_colliders = a.colliders().len() == b.colliders().len()
            && a.colliders().iter().zip(b.colliders()).all(|(x, y)| {
                x.collider_type() == y.collider_type()
                    && ColliderRecord::from_collider(&**x) == ColliderRecord::from_collider(&**y)
            });
        if a.name != b.name || a.transform != b.transform || !same_colliders {
            return Err(SceneError::Mismatch(a.name.clone()));
        }
    }
    Ok(())
}

/// Rebuild a scene into `world`, returning the number of colliders restored
pub fn read_scene(world: &mut World, text: &str) -> Result<usize, SceneError> {
    let mut lines = text.lines().enumerate().map(|(i, line)| (i + 1, line));
    let mut current: Option<EntityId> = None;
    let mut restored = 0;

    while let Some((line, content)) = lines.next() {
        let tokens: Vec<&str> = content.split_whitespace().collect();
        match tokens.as_slice() {
            [] => {}
            ["entity", name, px, py, rotation, sx, sy] => {
                let transform = TransformComponent::from_transform(
                    Vec2::new(parse_number(line, px)?, parse_number(line, py)?),
                    parse_number(line, rotation)?,
                    Vec2::new(parse_number(line, sx)?, parse_number(line, sy)?),
                );
                current = Some(world.spawn(*name, transform));
            }
            ["collider", tag] => {
                let owner = current.ok_or_else(|| SceneError::Syntax {
                    line,
                    message: "collider before any entity".to_string(),
                })?;
                let collider_type = parse_type_tag(tag).ok_or_else(|| SceneError::Syntax {
                    line,
                    message: format!("unknown collider type '{tag}'"),
                })?;

                let mut body = lines.by_ref().map(|(_, content)| content);
                let record = parse_record(&mut body).map_err(|source| SceneError::Record { line, source })?;
                world.attach_boxed(record.build(collider_type, owner))?;
                restored += 1;
            }
            _ => {
                return Err(SceneError::Syntax {
                    line,
                    message: format!("unexpected '{content}'"),
                })
            }
        }
    }

    Ok(restored)
}

fn parse_number(line: usize, value: &str) -> Result<f32, SceneError> {
    value.parse().map_err(|_| SceneError::Syntax {
        line,
        message: format!("invalid number '{value}'"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use engine2d::physics::ShapeKind;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_arena_layout() {
        let mut world = World::new();
        let mut rng = StdRng::seed_from_u64(1);

        let actors = build_arena(&mut world, 10.0, 3, &mut rng).unwrap();

        // 4 walls, player, dummy, zone, 3 crates
        assert_eq!(world.len(), 10);
        assert_eq!(world.colliders(actors.player).len(), 2);
        assert_eq!(world.colliders(actors.dummy)[0].shape(), ShapeKind::Circle);
        assert_eq!(world.colliders(actors.zone)[0].collider_type(), ColliderType::NonBlockingZone);
    }

    #[test]
    fn test_scene_text_restores_world() {
        let mut world = World::new();
        let mut rng = StdRng::seed_from_u64(2);
        build_arena(&mut world, 8.0, 2, &mut rng).unwrap();
        let text = write_scene(&world).unwrap();

        let mut restored = World::new();
        let count = read_scene(&mut restored, &text).unwrap();

        assert_eq!(count, 4 + 2 + 1 + 1 + 2);
        assert_eq!(restored.len(), world.len());
        assert_eq!(write_scene(&restored).unwrap(), text);
        verify_restored(&world, &restored).unwrap();
    }

    #[test]
    fn test_entity_rotation_and_scale_survive() {
        let mut world = World::new();
        let mut rng = StdRng::seed_from_u64(3);
        let actors = build_arena(&mut world, 8.0, 0, &mut rng).unwrap();
        let player = world.transform_mut(actors.player).unwrap();
        player.rotation = std::f32::consts::PI;
        player.scale = Vec2::new(2.0, 0.5);

        let mut restored = World::new();
        read_scene(&mut restored, &write_scene(&world).unwrap()).unwrap();

        let copy = restored
            .entity_ids()
            .find_map(|id| restored.entity(id).filter(|entity| entity.name == "player"))
            .unwrap();
        assert_relative_eq!(copy.transform.rotation, std::f32::consts::PI);
        assert_relative_eq!(copy.transform.scale.x, 2.0);
        assert_relative_eq!(copy.transform.scale.y, 0.5);
        verify_restored(&world, &restored).unwrap();
    }

    #[test]
    fn test_names_with_whitespace_rejected() {
        let mut world = World::new();
        world.spawn("big crate", TransformComponent::identity());

        assert!(matches!(write_scene(&world), Err(SceneError::InvalidName(name)) if name == "big crate"));
    }

    #[test]
    fn test_verify_detects_changed_transform() {
        let mut world = World::new();
        let id = world.spawn("crate", TransformComponent::identity());
        let mut restored = World::new();
        read_scene(&mut restored, &write_scene(&world).unwrap()).unwrap();

        world.transform_mut(id).unwrap().rotation = 1.0;

        assert!(matches!(verify_restored(&world, &restored), Err(SceneError::Mismatch(name)) if name == "crate"));
    }

    #[test]
    fn test_scene_errors_carry_line_numbers() {
        let mut world = World::new();

        let err = read_scene(&mut world, "collider Blocking\nshape 0\nend\n").unwrap_err();
        assert!(matches!(err, SceneError::Syntax { line: 1, .. }));

        let err = read_scene(&mut world, "entity a 0 0 0 1 1\n\ncollider Blocking\nenabled 1\nend\n").unwrap_err();
        assert!(matches!(
            err,
            SceneError::Record {
                line: 3,
                source: PersistError::MissingField("shape"),
            }
        ));

        let err = read_scene(&mut world, "entity a 0 0 0 1 1\ncollider Wall\n").unwrap_err();
        assert!(matches!(err, SceneError::Syntax { line: 2, .. }));
    }
}
