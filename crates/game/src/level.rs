//! Level descriptions and loading.
//!
//! A [`Level`] is plain data: a spawn point, the player's body size and a
//! list of brushes. [`Level::to_world`] turns it into a [`CollisionWorld`].

use std::path::Path;

use glam::Vec2;
use ledge_physics::{CollisionMask, CollisionWorld};
use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// A game level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    /// Display name.
    pub name: String,

    /// Center of the player's body at spawn.
    pub spawn: Vec2,

    /// Width and height of the player's body.
    #[serde(default = "default_body_size")]
    pub body_size: Vec2,

    /// Static collision geometry.
    #[serde(default)]
    pub brushes: Vec<BrushDesc>,
}

fn default_body_size() -> Vec2 {
    Vec2::new(1.0, 2.0)
}

/// One piece of static geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BrushDesc {
    Box(BoxDesc),
    Slope(SlopeDesc),
    Polygon(PolygonDesc),
}

/// Axis-aligned box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxDesc {
    pub center: Vec2,
    pub half_extents: Vec2,
    #[serde(default)]
    pub mask: Option<CollisionMask>,
}

/// Right-triangle ramp rising `rise` over `run` from `foot`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlopeDesc {
    pub foot: Vec2,
    pub run: f32,
    pub rise: f32,
    #[serde(default)]
    pub mask: Option<CollisionMask>,
}

/// Convex polygon (the hull of `points` is used).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonDesc {
    pub points: Vec<Vec2>,
    #[serde(default)]
    pub mask: Option<CollisionMask>,
}

impl BrushDesc {
    fn mask(&self) -> CollisionMask {
        let mask = match self {
            BrushDesc::Box(b) => b.mask,
            BrushDesc::Slope(s) => s.mask,
            BrushDesc::Polygon(p) => p.mask,
        };
        mask.unwrap_or(CollisionMask::SOLID)
    }
}

impl Level {
    /// Create an empty level.
    pub fn new(name: &str, spawn: Vec2) -> Self {
        Self {
            name: name.to_string(),
            spawn,
            body_size: default_body_size(),
            brushes: Vec::new(),
        }
    }

    /// Builder: add a box.
    #[must_use]
    pub fn with_box(mut self, center: Vec2, half_extents: Vec2) -> Self {
        self.brushes.push(BrushDesc::Box(BoxDesc {
            center,
            half_extents,
            mask: None,
        }));
        self
    }

    /// Builder: add a ramp.
    #[must_use]
    pub fn with_slope(mut self, foot: Vec2, run: f32, rise: f32) -> Self {
        self.brushes.push(BrushDesc::Slope(SlopeDesc {
            foot,
            run,
            rise,
            mask: None,
        }));
        self
    }

    /// Builder: add a convex polygon.
    #[must_use]
    pub fn with_polygon(mut self, points: &[Vec2]) -> Self {
        self.brushes.push(BrushDesc::Polygon(PolygonDesc {
            points: points.to_vec(),
            mask: None,
        }));
        self
    }

    /// Built-in course for development and the headless runner.
    ///
    /// Left to right: a bounding wall, a 30° ramp up to a plateau, a 45°
    /// drop back to the floor, a low ceiling block and an 85° wall.
    pub fn test_course() -> Self {
        let ramp_rise = 4.0 * 30f32.to_radians().tan();
        let wall_rise = 0.5 * 85f32.to_radians().tan();

        Self::new("Test Course", Vec2::new(-8.0, 1.0))
            // Floor
            .with_box(Vec2::new(20.0, -0.5), Vec2::new(40.0, 0.5))
            // Left wall
            .with_box(Vec2::new(-10.5, 5.0), Vec2::new(0.5, 5.0))
            // 30° ramp and plateau
            .with_slope(Vec2::new(0.0, 0.0), 4.0, ramp_rise)
            .with_box(Vec2::new(6.0, ramp_rise * 0.5), Vec2::new(2.0, ramp_rise * 0.5))
            // 45° drop
            .with_polygon(&[
                Vec2::new(8.0, ramp_rise),
                Vec2::new(8.0, 0.0),
                Vec2::new(8.0 + ramp_rise, 0.0),
            ])
            // Ceiling block
            .with_box(Vec2::new(15.0, 3.0), Vec2::new(2.0, 0.5))
            // 85° wall
            .with_slope(Vec2::new(22.0, 0.0), 0.5, wall_rise)
    }

    /// Parse a level from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, GameError> {
        let level: Level = serde_json::from_str(json)?;
        level.validate()?;
        Ok(level)
    }

    /// Load a level from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let level = Self::from_json_str(&json)?;
        log::info!(
            "loaded level '{}' from {} ({} brushes)",
            level.name,
            path.display(),
            level.brushes.len()
        );
        Ok(level)
    }

    /// Check spawn and body size.
    pub fn validate(&self) -> Result<(), GameError> {
        if !self.spawn.is_finite() {
            return Err(GameError::InvalidLevel(format!(
                "spawn {:?} is not finite",
                self.spawn
            )));
        }
        if !self.body_size.is_finite() || self.body_size.min_element() <= 0.0 {
            return Err(GameError::InvalidLevel(format!(
                "body size {:?} must be positive",
                self.body_size
            )));
        }
        Ok(())
    }

    /// Build the collision world for this level.
    pub fn to_world(&self) -> Result<CollisionWorld, GameError> {
        self.validate()?;

        let mut world = CollisionWorld::new();
        for (index, brush) in self.brushes.iter().enumerate() {
            let mask = brush.mask();
            let added = match brush {
                BrushDesc::Box(b) => {
                    if !b.half_extents.is_finite() || b.half_extents.min_element() <= 0.0 {
                        None
                    } else {
                        Some(world.add_box(b.center, b.half_extents, mask))
                    }
                }
                BrushDesc::Slope(s) => world.add_slope(s.foot, s.run, s.rise, mask),
                BrushDesc::Polygon(p) => world.add_convex_polygon(&p.points, mask),
            };

            if added.is_none() {
                return Err(GameError::InvalidLevel(format!(
                    "brush {index} in '{}' is degenerate: {brush:?}",
                    self.name
                )));
            }
        }

        log::debug!("built world for '{}': {} brushes", self.name, world.brush_count());
        Ok(world)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_test_course() {
        let level = Level::test_course();
        let world = level.to_world().unwrap();

        assert_eq!(world.brush_count(), level.brushes.len());
        assert_eq!(level.body_size, Vec2::new(1.0, 2.0));
    }

    #[test]
    fn test_spawn_is_above_floor() {
        let level = Level::test_course();
        let world = level.to_world().unwrap();

        let feet = level.spawn - Vec2::new(0.0, level.body_size.y * 0.5);
        let hit = world
            .raycast(feet + Vec2::Y * 0.1, Vec2::NEG_Y, 10.0, CollisionMask::ALL)
            .unwrap();
        assert!((hit.distance - 0.1).abs() < 1e-4);
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "name": "tiny",
            "spawn": [0.0, 2.0],
            "brushes": [
                {"type": "box", "center": [0.0, -0.5], "half_extents": [10.0, 0.5]},
                {"type": "slope", "foot": [2.0, 0.0], "run": 2.0, "rise": 1.0, "mask": 2},
                {"type": "polygon", "points": [[5.0, 0.0], [6.0, 0.0], [5.5, 1.0]]}
            ]
        }"#;

        let level = Level::from_json_str(json).unwrap();
        assert_eq!(level.name, "tiny");
        assert_eq!(level.body_size, Vec2::new(1.0, 2.0));
        assert_eq!(level.brushes.len(), 3);
        assert_eq!(level.brushes[1].mask(), CollisionMask::PLATFORM);
        assert_eq!(level.brushes[2].mask(), CollisionMask::SOLID);
        assert_eq!(level.to_world().unwrap().brush_count(), 3);
    }

    #[test]
    fn test_degenerate_polygon_is_rejected() {
        let level = Level::new("flat", Vec2::ZERO).with_polygon(&[
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(2.0, 0.0),
        ]);

        assert!(matches!(level.to_world(), Err(GameError::InvalidLevel(_))));
    }

    #[test]
    fn test_bad_body_size_is_rejected() {
        let json = r#"{"name": "bad", "spawn": [0.0, 0.0], "body_size": [0.0, 2.0]}"#;
        assert!(matches!(
            Level::from_json_str(json),
            Err(GameError::InvalidLevel(_))
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Level::from_json_str("{ not json"),
            Err(GameError::Json(_))
        ));
    }
}
