//! Controller configuration.
//!
//! All tuning for a controlled body is grouped here. Values are static per
//! body and host-supplied.

use serde::{Deserialize, Serialize};

use crate::collision::CollisionMask;

/// Fewest rays allowed along one edge: one from each corner.
pub const MIN_RAY_COUNT: usize = 2;

/// Configuration for a raycast controller.
///
/// Distances are in world units, angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    // ========================================================================
    // Probing
    // ========================================================================
    /// Inset applied to ray origins and subtracted from every hit distance.
    pub skin_width: f32,

    /// Rays cast sideways, spread over the body's height.
    pub horizontal_ray_count: usize,

    /// Rays cast up or down, spread over the body's width.
    pub vertical_ray_count: usize,

    // ========================================================================
    // Slopes
    // ========================================================================
    /// Steepest slope the body walks up. Anything steeper is a wall.
    pub max_climb_angle: f32,

    /// Steepest slope the body sticks to while walking down.
    pub max_descend_angle: f32,

    // ========================================================================
    // Filtering
    // ========================================================================
    /// Layers the rays collide with.
    pub collision_mask: CollisionMask,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            skin_width: 0.015,
            horizontal_ray_count: 4,
            vertical_ray_count: 4,
            max_climb_angle: 80.0,
            max_descend_angle: 80.0,
            collision_mask: CollisionMask::MASK_PLAYER_SOLID,
        }
    }
}

impl ControllerConfig {
    /// Return a copy with every value forced into its usable range.
    ///
    /// Ray counts below two, negative or non-finite skin widths and angles
    /// outside `[0, 90]` are clamped rather than reported.
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();

        let skin_width = if self.skin_width.is_finite() {
            self.skin_width.max(0.0)
        } else {
            defaults.skin_width
        };

        let clamp_angle = |angle: f32, fallback: f32| {
            if angle.is_finite() {
                angle.clamp(0.0, 90.0)
            } else {
                fallback
            }
        };

        let sanitized = Self {
            skin_width,
            horizontal_ray_count: self.horizontal_ray_count.max(MIN_RAY_COUNT),
            vertical_ray_count: self.vertical_ray_count.max(MIN_RAY_COUNT),
            max_climb_angle: clamp_angle(self.max_climb_angle, defaults.max_climb_angle),
            max_descend_angle: clamp_angle(self.max_descend_angle, defaults.max_descend_angle),
            collision_mask: self.collision_mask,
        };

        if sanitized != *self {
            log::debug!("controller config clamped: {:?} -> {:?}", self, sanitized);
        }

        sanitized
    }
}
