//! Per-step collision resolution.
//!
//! The resolver takes the displacement a body wants to make this step and
//! corrects it against the environment using fans of rays:
//!
//! 1. Descent check: stick to a downward slope instead of skipping off it
//! 2. Horizontal pass: stop at walls, turn travel up climbable slopes
//! 3. Vertical pass: stop at floors and ceilings, then re-probe the crest of
//!    a climbed slope
//!
//! Each pass takes the current [`Resolution`] by value and returns the
//! updated one, so the displacement and contact state are threaded through
//! the step explicitly.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::collision::{EnvironmentQuery, RayHit};

use super::config::{ControllerConfig, MIN_RAY_COUNT};
use super::contacts::ContactState;
use super::origins::{RaySpacing, RaycastOrigins};

/// Sign used for every direction decision in the resolver.
///
/// Zero (either sign of it) counts as positive, so a body with no horizontal
/// motion probes as if it were moving right.
#[inline]
pub fn direction_sign(value: f32) -> f32 {
    if value < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Best-known displacement and contacts at some point in a step.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Resolution {
    /// Corrected displacement.
    pub displacement: Vec2,
    /// Contacts recorded so far.
    pub contacts: ContactState,
}

impl Resolution {
    pub fn new(displacement: Vec2, contacts: ContactState) -> Self {
        Self {
            displacement,
            contacts,
        }
    }
}

/// Turn horizontal travel up a slope of `slope_angle` degrees.
///
/// The travel distance `d = |x|` is redirected to `(cos θ·d, sin θ·d)`. If
/// the body is already rising faster than the slope would carry it (a jump),
/// nothing changes: climbing never eats upward speed.
pub fn climb_slope(mut step: Resolution, slope_angle: f32) -> Resolution {
    let move_distance = step.displacement.x.abs();
    let (sin, cos) = slope_angle.to_radians().sin_cos();
    let climb_velocity_y = sin * move_distance;

    if step.displacement.y <= climb_velocity_y {
        step.displacement.y = climb_velocity_y;
        step.displacement.x = cos * move_distance * direction_sign(step.displacement.x);

        step.contacts.below = true;
        step.contacts.climbing_slope = true;
        step.contacts.slope_angle = slope_angle;
    }

    step
}

/// Resolves one step of movement for a single box body.
///
/// Built fresh every step. Everything that must survive to the next step
/// lives in the [`ContactState`] the caller threads through.
pub struct Resolver<'a, Q: EnvironmentQuery + ?Sized> {
    config: &'a ControllerConfig,
    origins: RaycastOrigins,
    spacing: RaySpacing,
    query: &'a Q,
}

impl<'a, Q: EnvironmentQuery + ?Sized> Resolver<'a, Q> {
    /// Create a resolver for one step.
    ///
    /// `origins` must come from the body's current bounds and `spacing` from
    /// its current size, both inset by `config.skin_width`.
    pub fn new(
        config: &'a ControllerConfig,
        origins: RaycastOrigins,
        spacing: RaySpacing,
        query: &'a Q,
    ) -> Self {
        Self {
            config,
            origins,
            spacing,
            query,
        }
    }

    /// Correct `desired` against the environment.
    ///
    /// `contacts` is the state left by the previous step. The returned
    /// contacts replace it.
    pub fn resolve(&self, desired: Vec2, contacts: ContactState) -> Resolution {
        let mut step = Resolution::new(desired, contacts.begin_step(desired));

        if step.displacement.y < 0.0 {
            step = self.descend_slope(step);
        }
        if step.displacement.x != 0.0 {
            step = self.horizontal_collisions(step);
        }
        if step.displacement.y != 0.0 {
            step = self.vertical_collisions(step);
        }

        step
    }

    /// Snap a falling, forward-moving body onto a downward slope under it.
    pub fn descend_slope(&self, mut step: Resolution) -> Resolution {
        let direction_x = direction_sign(step.displacement.x);
        let origin = self.origins.trailing_bottom(direction_x);

        let Some(hit) = self.cast(origin, -Vec2::Y, f32::INFINITY) else {
            return step;
        };

        let slope_angle = hit.slope_angle();
        if slope_angle == 0.0 || slope_angle > self.config.max_descend_angle {
            return step;
        }
        // The slope must fall away in the direction of travel.
        if direction_sign(hit.normal.x) != direction_x {
            return step;
        }

        let move_distance = step.displacement.x.abs();
        let (sin, cos) = slope_angle.to_radians().sin_cos();
        let drop = slope_angle.to_radians().tan() * move_distance;
        if hit.distance - self.config.skin_width > drop {
            return step;
        }

        step.displacement.x = cos * move_distance * direction_sign(step.displacement.x);
        step.displacement.y -= sin * move_distance;

        step.contacts.slope_angle = slope_angle;
        step.contacts.descending_slope = true;
        step.contacts.below = true;

        log::trace!(
            "descending {:.2} deg slope, displacement {:?}",
            slope_angle,
            step.displacement
        );

        step
    }

    /// Sweep rays sideways along the direction of horizontal travel.
    pub fn horizontal_collisions(&self, mut step: Resolution) -> Resolution {
        let skin = self.config.skin_width;
        let max_climb = self.config.max_climb_angle;
        let direction_x = direction_sign(step.displacement.x);
        let direction = Vec2::X * direction_x;
        let mut ray_length = step.displacement.x.abs() + skin;

        for i in 0..self.config.horizontal_ray_count.max(MIN_RAY_COUNT) {
            let origin = self.origins.leading_bottom(direction_x)
                + Vec2::Y * (self.spacing.horizontal * i as f32);

            let Some(hit) = self.cast(origin, direction, ray_length) else {
                continue;
            };

            let slope_angle = hit.slope_angle();

            if i == 0 && slope_angle <= max_climb {
                if step.contacts.descending_slope {
                    step.contacts.descending_slope = false;
                    step.displacement = step.contacts.velocity_old;
                }

                // On a new slope, walk flat to its foot first and only climb
                // with what is left.
                let mut distance_to_slope_start = 0.0;
                if slope_angle != step.contacts.slope_angle_old {
                    distance_to_slope_start = hit.distance - skin;
                    step.displacement.x -= distance_to_slope_start * direction_x;
                }
                step = climb_slope(step, slope_angle);
                step.displacement.x += distance_to_slope_start * direction_x;

                if step.contacts.climbing_slope {
                    log::trace!("climbing {:.2} deg slope", slope_angle);
                }
            }

            if !step.contacts.climbing_slope || slope_angle > max_climb {
                step.displacement.x = (hit.distance - skin) * direction_x;
                ray_length = hit.distance;

                if step.contacts.climbing_slope {
                    let tan = step.contacts.slope_angle.to_radians().tan();
                    step.displacement.y = tan * step.displacement.x.abs();
                }

                step.contacts.left = direction_x < 0.0;
                step.contacts.right = direction_x > 0.0;
            }
        }

        step
    }

    /// Sweep rays up or down, offset by the horizontal travel already
    /// resolved this step.
    pub fn vertical_collisions(&self, mut step: Resolution) -> Resolution {
        let skin = self.config.skin_width;
        let direction_y = direction_sign(step.displacement.y);
        let direction = Vec2::Y * direction_y;
        let mut ray_length = step.displacement.y.abs() + skin;

        for i in 0..self.config.vertical_ray_count.max(MIN_RAY_COUNT) {
            let origin = self.origins.vertical_edge(direction_y)
                + Vec2::X * (self.spacing.vertical * i as f32 + step.displacement.x);

            let Some(hit) = self.cast(origin, direction, ray_length) else {
                continue;
            };

            step.displacement.y = (hit.distance - skin) * direction_y;
            ray_length = hit.distance;

            if step.contacts.climbing_slope {
                let tan = step.contacts.slope_angle.to_radians().tan();
                if tan.abs() > f32::EPSILON {
                    step.displacement.x =
                        step.displacement.y / tan * direction_sign(step.displacement.x);
                }
            }

            step.contacts.below = direction_y < 0.0;
            step.contacts.above = direction_y > 0.0;
        }

        if step.contacts.climbing_slope {
            step = self.crest_probe(step);
        }

        step
    }

    /// Look ahead from the raised leading corner for a change in slope.
    fn crest_probe(&self, mut step: Resolution) -> Resolution {
        let skin = self.config.skin_width;
        let direction_x = direction_sign(step.displacement.x);
        let ray_length = step.displacement.x.abs() + skin;
        let origin = self.origins.leading_bottom(direction_x) + Vec2::Y * step.displacement.y;

        if let Some(hit) = self.cast(origin, Vec2::X * direction_x, ray_length) {
            let slope_angle = hit.slope_angle();
            if slope_angle != step.contacts.slope_angle {
                log::trace!(
                    "slope changes from {:.2} to {:.2} deg ahead",
                    step.contacts.slope_angle,
                    slope_angle
                );
                step.displacement.x = (hit.distance - skin) * direction_x;
                step.contacts.slope_angle = slope_angle;
            }
        }

        step
    }

    #[inline]
    fn cast(&self, origin: Vec2, direction: Vec2, max_distance: f32) -> Option<RayHit> {
        self.query
            .cast(origin, direction, max_distance, self.config.collision_mask)
    }
}
