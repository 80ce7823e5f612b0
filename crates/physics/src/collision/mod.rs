//! Collision environment for raycast movement.
//!
//! # Key Types
//!
//! - [`CollisionWorld`]: Static geometry backed by parry2d shapes
//! - [`EnvironmentQuery`]: The nearest-hit ray cast the controller consumes
//! - [`RayHit`]: Output from a ray query
//! - [`Bounds`]: Axis-aligned rectangle used for the controlled body
//! - [`CollisionMask`]: Layer filter applied to every query

mod bounds;
mod flags;
mod query;
mod world;

pub use bounds::Bounds;
pub use flags::CollisionMask;
pub use query::{EnvironmentQuery, RayHit};
pub use world::{BrushId, CollisionWorld};
