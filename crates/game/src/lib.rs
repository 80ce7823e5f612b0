//! Ledge Game Logic
//!
//! This crate drives a raycast-controlled body from player input:
//!
//! - Player movement policy (gravity, run, jump)
//! - Input and scripted input sequences
//! - Level descriptions that build a collision world
//! - A fixed-timestep simulation loop
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                        Simulation                         │
//! │  ┌─────────┐    ┌────────────┐    ┌────────────────────┐  │
//! │  │ Input   │───►│ Player     │───►│ Controller2D       │  │
//! │  │ (axis,  │    │ (velocity, │    │ (ray resolution,   │  │
//! │  │  jump)  │    │  gravity)  │    │  contact state)    │  │
//! │  └─────────┘    └────────────┘    └────────────────────┘  │
//! └───────────────────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod input;
pub mod level;
pub mod player;
pub mod simulation;

// Re-export main types
pub use error::GameError;
pub use input::{InputScript, PlayerInput};
pub use level::{BrushDesc, Level};
pub use player::{Player, PlayerConfig};
pub use simulation::{Simulation, SimulationConfig, Snapshot};

// Re-export physics types for convenience
pub use ledge_physics::{
    Bounds, CollisionMask, CollisionWorld, ContactState, Controller2D, ControllerConfig,
};
