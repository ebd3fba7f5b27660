//! Line-oriented collider records for saved scenes
//!
//! ```text
//! enabled 1
//! transform 0 0 0 2 2
//! shape 0
//! end
//! ```
//!
//! `transform` is `posX posY rotation scaleX scaleY`; `shape` is the integer
//! code from [`ShapeKind::code`]. The record ends at the `end` sentinel. The
//! collider type is not part of the record: the scene format stores it with
//! the component name and passes it to [`ColliderRecord::build`].

use super::collider::{Collidable, ColliderCore, ColliderType, ShapeKind};
use crate::ecs::components::TransformComponent;
use crate::ecs::EntityId;
use crate::foundation::math::Vec2;

/// Line terminating a collider record
pub const SENTINEL: &str = "end";

/// Persistence errors
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PersistError {
    /// Input ran out before the sentinel line
    #[error("Collider record is missing its 'end' line")]
    MissingSentinel,

    /// A required key never appeared
    #[error("Collider record is missing '{0}'")]
    MissingField(&'static str),

    /// A value failed to parse as a number
    #[error("Invalid value '{value}' for '{key}'")]
    InvalidNumber {
        /// Key of the offending line
        key: String,
        /// Offending token
        value: String,
    },

    /// A line had the wrong number of values
    #[error("'{key}' expects {expected} values, found {found}")]
    WrongArity {
        /// Key of the offending line
        key: String,
        /// Expected value count
        expected: usize,
        /// Actual value count
        found: usize,
    },

    /// Shape code outside the known set
    #[error("Unknown shape code {0}")]
    UnknownShape(i32),
}

/// Persisted collider state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColliderRecord {
    /// Enabled flag
    pub enabled: bool,
    /// Local transform
    pub transform: TransformComponent,
    /// Shape kind
    pub shape: ShapeKind,
}

impl ColliderRecord {
    /// Capture a live collider
    pub fn from_collider(collider: &dyn Collidable) -> Self {
        Self {
            enabled: collider.is_enabled(),
            transform: *collider.transform(),
            shape: collider.shape(),
        }
    }

    /// Recreate a collider of the given type for `owner`
    pub fn build(&self, collider_type: ColliderType, owner: EntityId) -> Box<dyn Collidable> {
        let core = ColliderCore::new(owner, self.shape, self.transform).with_enabled(self.enabled);
        collider_type.build(core)
    }
}

/// Serialize a record, sentinel line included
pub fn write_record(record: &ColliderRecord) -> String {
    let t = &record.transform;
    format!(
        "enabled {}\ntransform {} {} {} {} {}\nshape {}\n{SENTINEL}\n",
        u8::from(record.enabled),
        t.position.x,
        t.position.y,
        t.rotation,
        t.scale.x,
        t.scale.y,
        record.shape.code()
    )
}

/// Parse one record, consuming lines up to and including the sentinel
///
/// Blank lines are skipped. Unknown keys are logged and skipped so newer
/// files still load. `enabled` defaults to true and `transform` to identity;
/// `shape` is required.
pub fn parse_record<'a, I>(lines: &mut I) -> Result<ColliderRecord, PersistError>
where
    I: Iterator<Item = &'a str>,
{
    let mut enabled = true;
    let mut transform = TransformComponent::identity();
    let mut shape = None;

    for line in lines {
        let mut tokens = line.split_whitespace();
        let Some(key) = tokens.next() else {
            continue;
        };
        let values: Vec<&str> = tokens.collect();

        match key {
            SENTINEL => {
                let shape = shape.ok_or(PersistError::MissingField("shape"))?;
                return Ok(ColliderRecord { enabled, transform, shape });
            }
            "enabled" => {
                let [value] = expect_values::<1>(key, &values)?;
                enabled = parse_number::<i32>(key, value)? != 0;
            }
            "transform" => {
                let [px, py, rotation, sx, sy] = expect_values::<5>(key, &values)?;
                transform = TransformComponent::from_transform(
                    Vec2::new(parse_number(key, px)?, parse_number(key, py)?),
                    parse_number(key, rotation)?,
                    Vec2::new(parse_number(key, sx)?, parse_number(key, sy)?),
                );
            }
            "shape" => {
                let [value] = expect_values::<1>(key, &values)?;
                let code: i32 = parse_number(key, value)?;
                shape = Some(ShapeKind::from_code(code).ok_or(PersistError::UnknownShape(code))?);
            }
            other => log::warn!("Skipping unknown collider key '{}'", other),
        }
    }

    Err(PersistError::MissingSentinel)
}

fn expect_values<'a, const N: usize>(key: &str, values: &[&'a str]) -> Result<[&'a str; N], PersistError> {
    <[&str; N]>::try_from(values).map_err(|_| PersistError::WrongArity {
        key: key.to_string(),
        expected: N,
        found: values.len(),
    })
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, PersistError> {
    value.parse().map_err(|_| PersistError::InvalidNumber {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::World;

    #[test]
    fn test_write_format() {
        let record = ColliderRecord {
            enabled: false,
            transform: TransformComponent::from_transform(Vec2::new(1.5, -2.0), 0.25, Vec2::new(3.0, 4.0)),
            shape: ShapeKind::Circle,
        };

        assert_eq!(
            write_record(&record),
            "enabled 0\ntransform 1.5 -2 0.25 3 4\nshape 1\nend\n"
        );
    }

    #[test]
    fn test_parse_what_was_written() {
        let record = ColliderRecord {
            enabled: true,
            transform: TransformComponent::from_transform(Vec2::new(0.1, 0.2), 1.0, Vec2::new(5.0, 1.0)),
            shape: ShapeKind::Line,
        };
        let text = write_record(&record);

        assert_eq!(parse_record(&mut text.lines()), Ok(record));
    }

    #[test]
    fn test_parse_stops_at_sentinel() {
        let text = "shape 0\nend\nshape 1\nend\n";
        let mut lines = text.lines();

        assert_eq!(parse_record(&mut lines).map(|r| r.shape), Ok(ShapeKind::Box));
        assert_eq!(parse_record(&mut lines).map(|r| r.shape), Ok(ShapeKind::Circle));
        assert_eq!(parse_record(&mut lines), Err(PersistError::MissingSentinel));
    }

    #[test]
    fn test_parse_defaults_and_unknown_keys() {
        let text = "\nlayer 3\nshape 2\nend";
        let record = parse_record(&mut text.lines()).unwrap();

        assert!(record.enabled);
        assert_eq!(record.transform, TransformComponent::identity());
        assert_eq!(record.shape, ShapeKind::Line);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_record(&mut "enabled 1\nend".lines()),
            Err(PersistError::MissingField("shape"))
        );
        assert_eq!(
            parse_record(&mut "shape 9\nend".lines()),
            Err(PersistError::UnknownShape(9))
        );
        assert_eq!(
            parse_record(&mut "transform 1 2 3\nshape 0\nend".lines()),
            Err(PersistError::WrongArity {
                key: "transform".to_string(),
                expected: 5,
                found: 3,
            })
        );
        assert_eq!(
            parse_record(&mut "enabled yes\nshape 0\nend".lines()),
            Err(PersistError::InvalidNumber {
                key: "enabled".to_string(),
                value: "yes".to_string(),
            })
        );
    }

    #[test]
    fn test_build_restores_collider() {
        let mut world = World::new();
        let owner = world.spawn("crate", TransformComponent::identity());
        let record = parse_record(&mut "enabled 0\ntransform 1 1 0 2 2\nshape 0\nend".lines()).unwrap();

        let collider = record.build(ColliderType::Blocking, owner);
        assert_eq!(collider.owner(), owner);
        assert_eq!(collider.collider_type(), ColliderType::Blocking);
        assert!(!collider.is_enabled());
        assert_eq!(ColliderRecord::from_collider(&*collider), record);

        world.attach_boxed(collider).unwrap();
        assert_eq!(world.colliders(owner).len(), 1);
    }
}
