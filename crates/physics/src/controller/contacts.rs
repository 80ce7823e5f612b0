//! Contact state shared between one step and the next.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// What the body touched during the last resolved step.
///
/// Higher-level movement reads this to stop vertical speed on floors and
/// ceilings, gate jumping on `below`, or react to walls. The resolver is the
/// only writer.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ContactState {
    pub above: bool,
    pub below: bool,
    pub left: bool,
    pub right: bool,

    /// Horizontal travel is being turned up a slope.
    pub climbing_slope: bool,

    /// Horizontal travel is being turned down a slope.
    pub descending_slope: bool,

    /// Angle of the slope being followed this step, in degrees. 0 when flat.
    pub slope_angle: f32,

    /// `slope_angle` from the previous step.
    pub slope_angle_old: f32,

    /// Displacement requested this step before any slope correction.
    pub velocity_old: Vec2,
}

impl ContactState {
    /// Start a new step.
    ///
    /// Clears the four side flags and both slope flags, moves `slope_angle`
    /// into `slope_angle_old` and zeroes `slope_angle`. `velocity_old` is left
    /// for the resolver to overwrite.
    pub fn reset(&mut self) {
        self.above = false;
        self.below = false;
        self.left = false;
        self.right = false;
        self.climbing_slope = false;
        self.descending_slope = false;

        self.slope_angle_old = self.slope_angle;
        self.slope_angle = 0.0;
    }

    /// Value form of [`reset`](Self::reset).
    #[must_use]
    pub fn begin_step(mut self, velocity: Vec2) -> Self {
        self.reset();
        self.velocity_old = velocity;
        self
    }

    /// Standing on something, including a slope being walked.
    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.below
    }

    /// Pressed against a wall on either side.
    #[inline]
    pub fn touching_wall(&self) -> bool {
        self.left || self.right
    }

    /// On a slope this step, going up or down.
    #[inline]
    pub fn on_slope(&self) -> bool {
        self.climbing_slope || self.descending_slope
    }

    /// Flags that differ from `previous`, for logging.
    pub fn changes_since(&self, previous: &ContactState) -> ContactChange {
        ContactChange {
            landed: self.below && !previous.below,
            left_ground: !self.below && previous.below,
            hit_ceiling: self.above && !previous.above,
            hit_wall: self.touching_wall() && !previous.touching_wall(),
            slope_changed: self.slope_angle != previous.slope_angle,
        }
    }
}

/// Transitions between two consecutive contact states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContactChange {
    pub landed: bool,
    pub left_ground: bool,
    pub hit_ceiling: bool,
    pub hit_wall: bool,
    pub slope_changed: bool,
}

impl ContactChange {
    /// Check if anything changed.
    pub fn any(&self) -> bool {
        self.landed || self.left_ground || self.hit_ceiling || self.hit_wall || self.slope_changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touching_everything() -> ContactState {
        ContactState {
            above: true,
            below: true,
            left: true,
            right: true,
            climbing_slope: true,
            descending_slope: true,
            slope_angle: 30.0,
            slope_angle_old: 10.0,
            velocity_old: Vec2::new(1.0, -1.0),
        }
    }

    #[test]
    fn test_reset_clears_flags_and_carries_angle() {
        let mut contacts = touching_everything();
        contacts.reset();

        assert!(!contacts.above && !contacts.below && !contacts.left && !contacts.right);
        assert!(!contacts.climbing_slope && !contacts.descending_slope);
        assert_eq!(contacts.slope_angle, 0.0);
        assert_eq!(contacts.slope_angle_old, 30.0);
        assert_eq!(contacts.velocity_old, Vec2::new(1.0, -1.0));
    }

    #[test]
    fn test_reset_twice() {
        let mut contacts = touching_everything();
        contacts.reset();
        let angle_before_second = contacts.slope_angle;
        contacts.reset();

        assert!(!contacts.above && !contacts.below && !contacts.left && !contacts.right);
        assert!(!contacts.on_slope());
        assert_eq!(contacts.slope_angle, 0.0);
        assert_eq!(contacts.slope_angle_old, angle_before_second);
    }

    #[test]
    fn test_begin_step_snapshots_velocity() {
        let contacts = touching_everything().begin_step(Vec2::new(0.5, 0.25));

        assert_eq!(contacts.velocity_old, Vec2::new(0.5, 0.25));
        assert_eq!(contacts.slope_angle_old, 30.0);
        assert!(!contacts.is_grounded());
    }

    #[test]
    fn test_changes_since() {
        let airborne = ContactState::default();
        let landed = ContactState {
            below: true,
            ..Default::default()
        };

        let change = landed.changes_since(&airborne);
        assert!(change.landed);
        assert!(!change.left_ground);
        assert!(change.any());

        assert!(!landed.changes_since(&landed).any());
        assert!(airborne.changes_since(&landed).left_ground);
    }
}
