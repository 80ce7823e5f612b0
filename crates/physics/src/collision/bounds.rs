//! Axis-aligned rectangle for the controlled body.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle given by its min and max corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Bottom-left corner.
    pub min: Vec2,
    /// Top-right corner.
    pub max: Vec2,
}

impl Bounds {
    /// Create bounds from two corners, ordering them per axis.
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Create bounds centered on `center` with the given full size.
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size.abs() * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Inset every side by `amount`.
    ///
    /// An axis thinner than `2 * amount` collapses onto its midpoint instead
    /// of turning inside out, so the result always has a non-negative size.
    pub fn shrink(&self, amount: f32) -> Self {
        let center = self.center();
        let half = (self.size() * 0.5 - Vec2::splat(amount)).max(Vec2::ZERO);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Same size, moved by `offset`.
    #[inline]
    pub fn translated(&self, offset: Vec2) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Check for overlap deeper than `tolerance` on both axes.
    pub fn overlaps(&self, other: &Bounds, tolerance: f32) -> bool {
        let depth = self.max.min(other.max) - self.min.max(other.min);
        depth.x > tolerance && depth.y > tolerance
    }

    #[inline]
    pub fn bottom_left(&self) -> Vec2 {
        self.min
    }

    #[inline]
    pub fn bottom_right(&self) -> Vec2 {
        Vec2::new(self.max.x, self.min.y)
    }

    #[inline]
    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.min.x, self.max.y)
    }

    #[inline]
    pub fn top_right(&self) -> Vec2 {
        self.max
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::from_center_size(Vec2::ZERO, Vec2::ONE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_center_size() {
        let bounds = Bounds::from_center_size(Vec2::new(0.0, 1.0), Vec2::new(1.0, 2.0));
        assert_eq!(bounds.min, Vec2::new(-0.5, 0.0));
        assert_eq!(bounds.max, Vec2::new(0.5, 2.0));
        assert_eq!(bounds.center(), Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_shrink() {
        let bounds = Bounds::new(Vec2::ZERO, Vec2::new(1.0, 2.0)).shrink(0.25);
        assert_eq!(bounds.min, Vec2::new(0.25, 0.25));
        assert_eq!(bounds.max, Vec2::new(0.75, 1.75));
    }

    #[test]
    fn test_shrink_collapses_instead_of_inverting() {
        let bounds = Bounds::new(Vec2::ZERO, Vec2::new(0.01, 2.0)).shrink(0.015);
        assert_eq!(bounds.size().x, 0.0);
        assert_eq!(bounds.min.x, 0.005);
        assert!(bounds.size().y > 0.0);
    }

    #[test]
    fn test_overlaps() {
        let a = Bounds::new(Vec2::ZERO, Vec2::ONE);
        let b = a.translated(Vec2::new(0.5, 0.5));
        let c = a.translated(Vec2::new(1.0, 0.0));

        assert!(a.overlaps(&b, 0.0));
        assert!(!a.overlaps(&c, 0.0));
        assert!(!a.overlaps(&b, 0.6));
    }
}
