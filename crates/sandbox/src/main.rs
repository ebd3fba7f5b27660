//! Headless collision sandbox
//!
//! Builds a walled arena, drives a player across it at a fixed time step and
//! runs one collision scan per tick. Hits, zone entries and push-outs are
//! logged; collider outlines are collected into a shared draw list the way an
//! editor overlay would read them.
//!
//! Usage: `sandbox [config.toml|config.ron]`

mod config;
mod scene;

use std::sync::{Arc, Mutex};

use engine2d::config::Config;
use engine2d::debug::DebugDrawList;
use engine2d::ecs::World;
use engine2d::foundation::math::Vec2;
use engine2d::physics::{ColliderEvent, CollisionEngine};
use rand::rngs::StdRng;
use rand::SeedableRng;

use config::SandboxConfig;
use scene::Actors;

const DEFAULT_CONFIG: &str = "sandbox.toml";

/// Running totals over the whole simulation
#[derive(Debug, Default)]
struct Tally {
    hits: usize,
    zone_entries: usize,
    contacts: usize,
    resolutions: usize,
}

struct SandboxApp {
    config: SandboxConfig,
    world: World,
    engine: CollisionEngine,
    overlay: Arc<Mutex<DebugDrawList>>,
    actors: Actors,
    velocity: Vec2,
    tally: Tally,
}

impl SandboxApp {
    fn new(config: SandboxConfig) -> Result<Self, scene::SceneError> {
        let mut world = World::new();
        let mut rng = StdRng::seed_from_u64(config.arena.seed);
        let actors = scene::build_arena(
            &mut world,
            config.arena.half_extent,
            config.arena.crate_count,
            &mut rng,
        )?;

        let overlay = Arc::new(Mutex::new(DebugDrawList::new()));
        let engine = CollisionEngine::new(config.collision.clone()).with_renderer(Box::new(Arc::clone(&overlay)));
        let velocity = Vec2::new(config.arena.player_speed, 0.0);

        Ok(Self {
            config,
            world,
            engine,
            overlay,
            actors,
            velocity,
            tally: Tally::default(),
        })
    }

    fn run(&mut self) -> Result<(), scene::SceneError> {
        log::info!(
            "Running {} ticks at {:.4}s ({:?} space, snapshot positions: {})",
            self.config.arena.ticks,
            self.config.arena.timestep,
            self.config.collision.space,
            self.config.collision.snapshot_positions
        );

        for tick in 0..self.config.arena.ticks {
            self.update(tick);
        }

        log::info!(
            "Done: {} contacts, {} resolutions, {} hits on the dummy, {} zone entries",
            self.tally.contacts,
            self.tally.resolutions,
            self.tally.hits,
            self.tally.zone_entries
        );

        if let Some(path) = self.config.debug.scene_path.clone() {
            self.save_and_verify_scene(&path)?;
        }
        Ok(())
    }

    fn update(&mut self, tick: u32) {
        self.move_player();

        let stats = self.engine.handle_collisions(&mut self.world);
        self.tally.contacts += stats.contacts;
        self.tally.resolutions += stats.resolutions;

        for event in self.world.drain_events(self.actors.dummy) {
            if let ColliderEvent::Hit { attacker } = event {
                self.tally.hits += 1;
                log::debug!("Tick {}: dummy hit by {:?}", tick, attacker);
            }
        }
        for event in self.world.drain_events(self.actors.zone) {
            if let ColliderEvent::ZoneEntered { visitor } = event {
                self.tally.zone_entries += 1;
                let name = self.world.entity(visitor).map_or("?", |entity| entity.name.as_str());
                log::debug!("Tick {}: {} inside the zone", tick, name);
            }
        }

        let interval = self.config.debug.draw_interval;
        if interval > 0 && tick % interval == 0 {
            self.draw_overlay(tick);
        }
    }

    /// Walk the player along X, turning around at the arena edges
    fn move_player(&mut self) {
        let limit = self.config.arena.half_extent * 0.8;
        let dt = self.config.arena.timestep;
        let Some(transform) = self.world.transform_mut(self.actors.player) else {
            return;
        };

        transform.position += self.velocity * dt;
        if transform.position.x.abs() > limit {
            transform.position.x = transform.position.x.clamp(-limit, limit);
            self.velocity = -self.velocity;
            transform.rotation = if self.velocity.x < 0.0 { std::f32::consts::PI } else { 0.0 };
        }
    }

    fn draw_overlay(&mut self, tick: u32) {
        let drawn = self.engine.draw_colliders(&self.world);
        let mut overlay = match self.overlay.lock() {
            Ok(overlay) => overlay,
            Err(poisoned) => poisoned.into_inner(),
        };
        log::info!("Tick {}: {} collider outlines ({} queued)", tick, drawn, overlay.len());
        for shape in overlay.shapes() {
            log::trace!("  {:?}", shape);
        }
        overlay.clear();
    }

    fn save_and_verify_scene(&self, path: &str) -> Result<(), scene::SceneError> {
        let text = scene::write_scene(&self.world)?;
        std::fs::write(path, &text)?;

        let mut restored = World::new();
        let colliders = scene::read_scene(&mut restored, &text)?;
        scene::verify_restored(&self.world, &restored)?;
        log::info!(
            "Saved scene to {} and read back {} entities with {} colliders",
            path,
            restored.len(),
            colliders
        );
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let config_path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG.to_string());
    let config = SandboxConfig::load_or_default(&config_path)?;
    log::info!("Starting sandbox with config {}", config_path);

    let mut app = SandboxApp::new(config)?;
    app.run()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn quiet_config() -> SandboxConfig {
        let mut config = SandboxConfig::default();
        config.arena.crate_count = 0;
        config.debug.draw_interval = 0;
        config
    }

    #[test]
    fn test_player_reaches_dummy() {
        let mut config = quiet_config();
        config.arena.ticks = 120;
        let mut app = SandboxApp::new(config).unwrap();

        app.run().unwrap();

        assert!(app.tally.hits > 0);
        assert!(app.tally.zone_entries > 0);
    }

    #[test]
    fn test_player_turns_at_edge() {
        let mut app = SandboxApp::new(quiet_config()).unwrap();
        let limit = app.config.arena.half_extent * 0.8;
        app.world.transform_mut(app.actors.player).unwrap().position.x = limit;

        app.move_player();

        let position = app.world.transform(app.actors.player).unwrap().position;
        assert_relative_eq!(position.x, limit);
        assert!(app.velocity.x < 0.0);
    }

    #[test]
    fn test_overlay_cleared_after_draw() {
        let mut config = quiet_config();
        config.debug.draw_interval = 1;
        let mut app = SandboxApp::new(config).unwrap();

        app.update(0);

        assert!(app.overlay.lock().unwrap().is_empty());
    }
}
