//! Collider outlines through an injected renderer

use std::sync::{Arc, Mutex};

use approx::assert_relative_eq;

use super::spawn_box;
use crate::debug::{CollisionDebugColors, DebugDrawList, DebugShape};
use crate::ecs::World;
use crate::foundation::math::Vec2;
use crate::physics::{ColliderCore, ColliderType, CollisionEngine};

#[test]
fn test_draws_enabled_colliders_in_world_space() {
    let mut world = World::new();
    let wall = spawn_box(
        &mut world,
        "wall",
        Vec2::new(10.0, 0.0),
        ColliderType::Blocking,
        Vec2::new(1.0, 0.0),
        Vec2::new(2.0, 2.0),
    );
    world
        .attach_boxed(ColliderType::NonBlockingZone.build(
            ColliderCore::circle(wall, Vec2::zeros(), 3.0).with_enabled(false),
        ))
        .unwrap();

    let list = Arc::new(Mutex::new(DebugDrawList::new()));
    let colors = CollisionDebugColors::default();
    let mut engine = CollisionEngine::default().with_renderer(Box::new(Arc::clone(&list)));

    assert_eq!(engine.draw_colliders(&world), 1);

    let list = list.lock().unwrap();
    match list.shapes() {
        [DebugShape::Box { center, size, color, .. }] => {
            assert_relative_eq!(*center, Vec2::new(11.0, 0.0));
            assert_relative_eq!(*size, Vec2::new(2.0, 2.0));
            assert_eq!(*color, colors.blocking);
        }
        other => panic!("expected one box, got {other:?}"),
    }
}

#[test]
fn test_custom_colors() {
    let mut world = World::new();
    spawn_box(
        &mut world,
        "hurtbox",
        Vec2::zeros(),
        ColliderType::AttackTarget,
        Vec2::zeros(),
        Vec2::new(1.0, 1.0),
    );

    let list = Arc::new(Mutex::new(DebugDrawList::new()));
    let colors = CollisionDebugColors {
        attack_target: nalgebra::Vector4::new(0.2, 0.4, 0.6, 1.0),
        ..Default::default()
    };
    let mut engine = CollisionEngine::default()
        .with_renderer(Box::new(Arc::clone(&list)))
        .with_colors(colors.clone());

    engine.draw_colliders(&world);

    let list = list.lock().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list.shapes()[0].color(), colors.attack_target);
}

#[test]
fn test_no_renderer_draws_nothing() {
    let mut world = World::new();
    spawn_box(&mut world, "wall", Vec2::zeros(), ColliderType::Blocking, Vec2::zeros(), Vec2::new(1.0, 1.0));

    assert_eq!(CollisionEngine::default().draw_colliders(&world), 0);
}
