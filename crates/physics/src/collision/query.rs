//! Ray query results and the query capability the controller consumes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::flags::CollisionMask;

/// Nearest hit of a ray cast.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RayHit {
    /// Distance from the ray origin to the impact point.
    pub distance: f32,

    /// Surface normal at the impact point, pointing away from the surface.
    pub normal: Vec2,

    /// World position of the impact point.
    pub point: Vec2,
}

impl RayHit {
    /// Create a hit result.
    pub fn new(distance: f32, normal: Vec2, point: Vec2) -> Self {
        Self {
            distance,
            normal,
            point,
        }
    }

    /// Angle in degrees between the hit normal and world up.
    ///
    /// 0 for a flat floor, 90 for a vertical wall, 180 for a flat ceiling.
    pub fn slope_angle(&self) -> f32 {
        let normal = self.normal.normalize_or_zero();
        normal.dot(Vec2::Y).clamp(-1.0, 1.0).acos().to_degrees()
    }
}

/// Nearest-hit ray cast against environment geometry.
///
/// This is the only thing the controller needs from the environment. It must
/// be synchronous and free of side effects; the resolver may call it several
/// times per step and relies on identical answers for identical questions.
///
/// `max_distance` may be `f32::INFINITY` for an unbounded ray.
pub trait EnvironmentQuery {
    /// Cast a ray from `origin` along `direction` and report the nearest hit
    /// within `max_distance` on layers intersecting `mask`.
    fn cast(
        &self,
        origin: Vec2,
        direction: Vec2,
        max_distance: f32,
        mask: CollisionMask,
    ) -> Option<RayHit>;
}

impl<F> EnvironmentQuery for F
where
    F: Fn(Vec2, Vec2, f32, CollisionMask) -> Option<RayHit>,
{
    fn cast(
        &self,
        origin: Vec2,
        direction: Vec2,
        max_distance: f32,
        mask: CollisionMask,
    ) -> Option<RayHit> {
        self(origin, direction, max_distance, mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slope_angle() {
        let floor = RayHit::new(1.0, Vec2::Y, Vec2::ZERO);
        let wall = RayHit::new(1.0, -Vec2::X, Vec2::ZERO);
        let ramp = RayHit::new(1.0, Vec2::new(-1.0, 1.0), Vec2::ZERO);

        assert!(floor.slope_angle().abs() < 1e-4);
        assert!((wall.slope_angle() - 90.0).abs() < 1e-4);
        assert!((ramp.slope_angle() - 45.0).abs() < 1e-3);
    }

    #[test]
    fn test_closure_query() {
        let query = |origin: Vec2, _dir: Vec2, max: f32, _mask: CollisionMask| {
            (max > 2.0).then(|| RayHit::new(2.0, Vec2::Y, origin))
        };

        assert!(query
            .cast(Vec2::ZERO, -Vec2::Y, 5.0, CollisionMask::SOLID)
            .is_some());
        assert!(query
            .cast(Vec2::ZERO, -Vec2::Y, 1.0, CollisionMask::SOLID)
            .is_none());
    }
}
