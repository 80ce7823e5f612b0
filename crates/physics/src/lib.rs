//! Ledge Physics
//!
//! A deterministic raycast character controller for 2D platformers. A single
//! axis-aligned box body is moved through static geometry by probing with
//! fans of rays instead of sweeping the full shape.
//!
//! # Architecture
//!
//! The physics crate is split into two main systems:
//!
//! - **Collision**: Static geometry and the nearest-hit ray query the
//!   controller consumes ([`EnvironmentQuery`])
//! - **Controller**: Ray origin/spacing derivation and the per-step resolver
//!   that corrects a desired displacement and records contacts
//!
//! # Design Principles
//!
//! 1. **Determinism**: Same bounds, displacement and geometry always produce
//!    the same corrected displacement and contact state
//! 2. **Injected queries**: The resolver never reaches for a global physics
//!    world, so it can run against synthetic geometry in tests
//! 3. **Tolerance**: Bad ray counts or margins are clamped, never reported

pub mod collision;
pub mod controller;

// Re-export commonly used types
pub use collision::{Bounds, CollisionMask, CollisionWorld, EnvironmentQuery, RayHit};
pub use controller::{
    compute_origins, compute_spacing, ContactState, Controller2D, ControllerConfig,
    RaySpacing, RaycastOrigins, Resolution, Resolver,
};
