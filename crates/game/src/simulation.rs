//! Game simulation - the fixed-step loop.
//!
//! The simulation is deterministic: the same level, configuration and input
//! sequence always produce the same snapshots.

use std::path::Path;

use glam::Vec2;
use ledge_physics::{CollisionWorld, ContactState, ControllerConfig};
use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::input::PlayerInput;
use crate::level::Level;
use crate::player::{Player, PlayerConfig};

/// Game simulation configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Simulation tick rate (ticks per second).
    pub tick_rate: u32,

    /// Player movement policy.
    pub player: PlayerConfig,

    /// Collision controller settings.
    pub controller: ControllerConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_rate: 60,
            player: PlayerConfig::default(),
            controller: ControllerConfig::default(),
        }
    }
}

impl SimulationConfig {
    /// Get the time step per tick in seconds.
    pub fn delta_time(&self) -> f32 {
        1.0 / self.tick_rate as f32
    }

    /// Parse a configuration from JSON. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, GameError> {
        let config: SimulationConfig = serde_json::from_str(json)?;
        if config.tick_rate == 0 {
            return Err(GameError::InvalidConfig("tick_rate must be positive".into()));
        }
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }
}

/// State of the player after one tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Frame number after the tick.
    pub frame: u64,
    pub position: Vec2,
    pub velocity: Vec2,
    pub contacts: ContactState,
}

/// The main game simulation.
#[derive(Debug)]
pub struct Simulation {
    /// Current frame/tick number.
    pub frame: u64,

    /// Simulation configuration.
    pub config: SimulationConfig,

    /// Current level.
    pub level: Level,

    /// The controlled player.
    pub player: Player,

    /// Collision geometry built from `level`.
    world: CollisionWorld,
}

impl Simulation {
    /// Create a new simulation with the given configuration and level.
    pub fn new(config: SimulationConfig, level: Level) -> Result<Self, GameError> {
        if config.tick_rate == 0 {
            return Err(GameError::InvalidConfig("tick_rate must be positive".into()));
        }

        let world = level.to_world()?;
        let player = Player::new(level.spawn, level.body_size, config.player, config.controller);

        log::info!(
            "simulation ready: '{}' at {} Hz, spawn {:?}",
            level.name,
            config.tick_rate,
            level.spawn
        );

        Ok(Self {
            frame: 0,
            config,
            level,
            player,
            world,
        })
    }

    /// Create a simulation with default configuration and the test course.
    pub fn test() -> Result<Self, GameError> {
        Self::new(SimulationConfig::default(), Level::test_course())
    }

    /// Collision geometry for the current level.
    pub fn world(&self) -> &CollisionWorld {
        &self.world
    }

    /// Advance the simulation by one tick.
    pub fn step(&mut self, input: &PlayerInput) -> Snapshot {
        let delta_time = self.config.delta_time();
        self.player.update(input, delta_time, &self.world);
        self.frame += 1;
        self.snapshot()
    }

    /// Run every input in order, one tick each.
    pub fn run<I>(&mut self, inputs: I) -> Vec<Snapshot>
    where
        I: IntoIterator<Item = PlayerInput>,
    {
        inputs.into_iter().map(|input| self.step(&input)).collect()
    }

    /// Current player state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            frame: self.frame,
            position: self.player.position(),
            velocity: self.player.velocity,
            contacts: *self.player.contacts(),
        }
    }

    /// Put the player back on the level's spawn point.
    pub fn respawn(&mut self) {
        self.player.respawn(self.level.spawn);
    }

    /// Get the delta time for this simulation.
    pub fn delta_time(&self) -> f32 {
        self.config.delta_time()
    }
}

// ============================================================================
// Tests
// ============================================================================
