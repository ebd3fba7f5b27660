//! Engine settings through the config layer

use crate::config::{Config, ConfigError};
use crate::physics::{ColliderSpace, ColliderType, CollisionConfig, Interaction, InteractionMatrix};

fn custom() -> CollisionConfig {
    CollisionConfig {
        space: ColliderSpace::World,
        snapshot_positions: true,
        matrix: InteractionMatrix::default().with(
            ColliderType::AttackTarget,
            ColliderType::Blocking,
            Interaction::Resolve,
        ),
    }
}

#[test]
fn test_toml_text_round_trip() {
    let config = custom();
    let text = toml::to_string(&config).unwrap();
    let parsed: CollisionConfig = toml::from_str(&text).unwrap();

    assert_eq!(parsed, config);
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let parsed: CollisionConfig = toml::from_str("space = \"World\"\n").unwrap();

    assert_eq!(parsed.space, ColliderSpace::World);
    assert!(!parsed.snapshot_positions);
    assert_eq!(parsed.matrix, InteractionMatrix::default());
}

#[test]
fn test_matrix_rules_from_toml() {
    let text = r#"
        [[matrix]]
        a = "NonBlockingZone"
        b = "AttackSource"
        interaction = "Notify"
    "#;
    let parsed: CollisionConfig = toml::from_str(text).unwrap();

    assert_eq!(
        parsed.matrix.interaction(ColliderType::AttackSource, ColliderType::NonBlockingZone),
        Interaction::Notify
    );
    // An explicit list replaces the defaults entirely
    assert!(!parsed.matrix.allows(ColliderType::Blocking, ColliderType::Blocking));
}

#[test]
fn test_save_and_load_both_formats() {
    let config = custom();
    let dir = std::env::temp_dir();

    for name in ["engine2d_collision_test.toml", "engine2d_collision_test.ron"] {
        let path = dir.join(name);
        config.save_to_file(&path).unwrap();
        let loaded = CollisionConfig::load_from_file(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, config, "format of {name}");
    }
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let path = std::env::temp_dir().join("engine2d_collision_missing.toml");
    let _ = std::fs::remove_file(&path);

    assert_eq!(CollisionConfig::load_or_default(&path).unwrap(), CollisionConfig::default());
}

#[test]
fn test_unknown_extension_rejected() {
    let path = std::env::temp_dir().join("engine2d_collision_test.json");
    let result = CollisionConfig::default().save_to_file(&path);

    assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
}
