//! Player entity and movement policy.

use glam::Vec2;
use ledge_physics::{Bounds, ContactState, Controller2D, ControllerConfig, EnvironmentQuery};
use serde::{Deserialize, Serialize};

use crate::input::PlayerInput;

/// Tuning for the player's movement policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Horizontal run speed (units/s).
    pub move_speed: f32,

    /// Vertical acceleration (units/s²). Negative pulls down.
    pub gravity: f32,

    /// Upward speed applied on jump (units/s).
    pub jump_velocity: f32,

    /// Terminal fall speed (units/s).
    pub max_fall_speed: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            move_speed: 6.0,
            gravity: -20.0,
            jump_velocity: 8.0,
            max_fall_speed: 30.0,
        }
    }
}

/// A player in the game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Collision body.
    pub controller: Controller2D,

    /// Current velocity (units/s).
    pub velocity: Vec2,

    /// Movement tuning.
    pub config: PlayerConfig,
}

impl Player {
    /// Create a player with its body centered on `spawn`.
    pub fn new(
        spawn: Vec2,
        size: Vec2,
        config: PlayerConfig,
        controller_config: ControllerConfig,
    ) -> Self {
        Self {
            controller: Controller2D::new(
                controller_config,
                Bounds::from_center_size(spawn, size),
            ),
            velocity: Vec2::ZERO,
            config,
        }
    }

    /// Get the player's current position.
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.controller.position()
    }

    #[inline]
    pub fn contacts(&self) -> &ContactState {
        self.controller.contacts()
    }

    /// Check if the player is standing on something.
    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.controller.contacts().below
    }

    /// Advance one step.
    ///
    /// Jumping is gated on the ground contact from the previous step.
    /// Vertical speed is zeroed after the move whenever the body touched a
    /// floor or ceiling, so gravity does not accumulate while resting.
    pub fn update<Q>(&mut self, input: &PlayerInput, delta_time: f32, world: &Q) -> Vec2
    where
        Q: EnvironmentQuery + ?Sized,
    {
        let cfg = self.config;

        self.velocity.x = input.axis() * cfg.move_speed;

        if input.jump && self.is_grounded() {
            self.velocity.y = cfg.jump_velocity;
            log::trace!("jump from {:?}", self.position());
        }

        self.velocity.y = (self.velocity.y + cfg.gravity * delta_time).max(-cfg.max_fall_speed);

        let applied = self.controller.move_by(self.velocity * delta_time, world);

        let contacts = self.controller.contacts();
        if contacts.above || contacts.below {
            self.velocity.y = 0.0;
        }

        applied
    }

    /// Move the player to `position`, clearing velocity and contacts.
    pub fn respawn(&mut self, position: Vec2) {
        self.controller.teleport(position);
        self.velocity = Vec2::ZERO;
    }
}
