//! Ray origins and spacing derived from the body's bounds.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::collision::Bounds;

use super::config::MIN_RAY_COUNT;

/// The four corners rays are cast from, inset by the skin width.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RaycastOrigins {
    pub bottom_left: Vec2,
    pub bottom_right: Vec2,
    pub top_left: Vec2,
    pub top_right: Vec2,
}

impl RaycastOrigins {
    /// Bottom corner on the side the body is moving toward.
    #[inline]
    pub fn leading_bottom(&self, direction_x: f32) -> Vec2 {
        if direction_x < 0.0 {
            self.bottom_left
        } else {
            self.bottom_right
        }
    }

    /// Bottom corner on the side the body is moving away from.
    #[inline]
    pub fn trailing_bottom(&self, direction_x: f32) -> Vec2 {
        if direction_x < 0.0 {
            self.bottom_right
        } else {
            self.bottom_left
        }
    }

    /// Left corner of the edge facing `direction_y`.
    #[inline]
    pub fn vertical_edge(&self, direction_y: f32) -> Vec2 {
        if direction_y < 0.0 {
            self.bottom_left
        } else {
            self.top_left
        }
    }
}

/// Distance between neighbouring rays along each edge.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RaySpacing {
    /// Vertical gap between horizontally cast rays.
    pub horizontal: f32,
    /// Horizontal gap between vertically cast rays.
    pub vertical: f32,
}

/// Corners of `bounds` after insetting every side by `skin_width`.
pub fn compute_origins(bounds: &Bounds, skin_width: f32) -> RaycastOrigins {
    let inner = bounds.shrink(skin_width);

    RaycastOrigins {
        bottom_left: inner.bottom_left(),
        bottom_right: inner.bottom_right(),
        top_left: inner.top_left(),
        top_right: inner.top_right(),
    }
}

/// Spacing for `horizontal_ray_count` rays over the inset height and
/// `vertical_ray_count` rays over the inset width.
///
/// Counts below two are raised to two so the first and last ray always sit
/// on the corners. A collapsed axis gives zero spacing: every ray on that
/// edge starts from the same point.
pub fn compute_spacing(
    bounds: &Bounds,
    skin_width: f32,
    horizontal_ray_count: usize,
    vertical_ray_count: usize,
) -> RaySpacing {
    let size = bounds.shrink(skin_width).size();
    let horizontal_ray_count = horizontal_ray_count.max(MIN_RAY_COUNT);
    let vertical_ray_count = vertical_ray_count.max(MIN_RAY_COUNT);

    RaySpacing {
        horizontal: size.y / (horizontal_ray_count - 1) as f32,
        vertical: size.x / (vertical_ray_count - 1) as f32,
    }
}
