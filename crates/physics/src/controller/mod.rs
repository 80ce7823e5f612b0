//! Raycast controller for a single axis-aligned box body.
//!
//! This module implements platformer-style kinematic movement:
//!
//! - Corner ray origins inset by a skin width
//! - Horizontal and vertical ray sweeps that clamp travel to the nearest hit
//! - Walking up slopes up to a maximum angle, sticking to slopes going down
//! - Contact flags carried from one step to the next
//!
//! # Design
//!
//! Movement is driven by the [`Controller2D`], which owns the body's bounds
//! and contact state and builds a [`Resolver`] for every step. The resolver
//! itself is pure: given the same origins, displacement, contacts and
//! geometry it always returns the same [`Resolution`].

mod body;
mod config;
mod contacts;
mod origins;
mod resolve;

pub use body::Controller2D;
pub use config::{ControllerConfig, MIN_RAY_COUNT};
pub use contacts::{ContactChange, ContactState};
pub use origins::{compute_origins, compute_spacing, RaySpacing, RaycastOrigins};
pub use resolve::{climb_slope, direction_sign, Resolution, Resolver};
