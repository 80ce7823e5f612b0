//! Host-facing controller for one box body.
//!
//! This is the main entry point for movement. The host's movement policy
//! decides what displacement it wants each step and hands it to
//! [`Controller2D::move_by`], then reads [`Controller2D::contacts`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::collision::{Bounds, EnvironmentQuery};

use super::config::ControllerConfig;
use super::contacts::ContactState;
use super::origins::{compute_origins, compute_spacing, RaySpacing};
use super::resolve::Resolver;

/// Raycast controller for a single axis-aligned box.
///
/// # Example
///
/// ```ignore
/// let mut controller = Controller2D::new(ControllerConfig::default(), spawn_bounds);
///
/// // Each step:
/// controller.move_by(velocity * delta_time, &world);
/// if controller.contacts().below {
///     velocity.y = 0.0;
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Controller2D {
    config: ControllerConfig,
    bounds: Bounds,
    spacing: RaySpacing,
    contacts: ContactState,
}

impl Controller2D {
    /// Create a controller for a body occupying `bounds`.
    ///
    /// The configuration is sanitized before use.
    pub fn new(config: ControllerConfig, bounds: Bounds) -> Self {
        let config = config.sanitized();
        let spacing = Self::spacing_for(&config, &bounds);

        Self {
            config,
            bounds,
            spacing,
            contacts: ContactState::default(),
        }
    }

    /// Create a controller with default configuration.
    pub fn with_default_config(bounds: Bounds) -> Self {
        Self::new(ControllerConfig::default(), bounds)
    }

    /// Move the body by `desired`, corrected against `world`.
    ///
    /// Recomputes the ray origins from the current bounds, resolves the
    /// step, translates the bounds by the corrected displacement and
    /// publishes the new contact state. Returns the displacement applied.
    pub fn move_by<Q>(&mut self, desired: Vec2, world: &Q) -> Vec2
    where
        Q: EnvironmentQuery + ?Sized,
    {
        let origins = compute_origins(&self.bounds, self.config.skin_width);
        let previous = self.contacts;

        let resolution =
            Resolver::new(&self.config, origins, self.spacing, world).resolve(desired, previous);

        self.bounds = self.bounds.translated(resolution.displacement);
        self.contacts = resolution.contacts;

        let change = self.contacts.changes_since(&previous);
        if change.any() {
            log::debug!(
                "contacts changed at {:?}: {:?} (slope {:.2} deg)",
                self.bounds.center(),
                change,
                self.contacts.slope_angle
            );
        }

        resolution.displacement
    }

    /// Resize the body around its current center.
    pub fn set_size(&mut self, size: Vec2) {
        self.bounds = Bounds::from_center_size(self.bounds.center(), size);
        self.spacing = Self::spacing_for(&self.config, &self.bounds);
    }

    /// Replace the configuration. Spacing is recomputed.
    pub fn set_config(&mut self, config: ControllerConfig) {
        self.config = config.sanitized();
        self.spacing = Self::spacing_for(&self.config, &self.bounds);
    }

    /// Place the body's center at `center` without collision, clearing
    /// contacts.
    pub fn teleport(&mut self, center: Vec2) {
        self.bounds = Bounds::from_center_size(center, self.bounds.size());
        self.contacts = ContactState::default();
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Center of the body.
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.bounds.center()
    }

    /// Contact state from the last [`move_by`](Self::move_by).
    #[inline]
    pub fn contacts(&self) -> &ContactState {
        &self.contacts
    }

    #[inline]
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    #[inline]
    pub fn spacing(&self) -> RaySpacing {
        self.spacing
    }

    fn spacing_for(config: &ControllerConfig, bounds: &Bounds) -> RaySpacing {
        compute_spacing(
            bounds,
            config.skin_width,
            config.horizontal_ray_count,
            config.vertical_ray_count,
        )
    }
}
