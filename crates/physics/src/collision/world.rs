//! Static collision geometry for raycast movement.
//!
//! The collision world stores brushes (boxes, ramps, convex polygons and
//! one-sided segments) and answers nearest-hit ray queries through them.

use glam::Vec2;
use parry2d::math::{Isometry, Point, Real, Vector};
use parry2d::query::Ray;
use parry2d::shape::SharedShape;

use super::flags::CollisionMask;
use super::query::{EnvironmentQuery, RayHit};

/// Identifier returned when adding a brush.
pub type BrushId = u32;

/// Longest ray the world will trace. Unbounded queries are clamped to this.
const MAX_RAY_DISTANCE: f32 = 1.0e6;

/// A piece of collision geometry in the world.
#[derive(Clone)]
struct CollisionBrush {
    id: BrushId,
    shape: SharedShape,
    transform: Isometry<Real>,
    layers: CollisionMask,
}

impl std::fmt::Debug for CollisionBrush {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollisionBrush")
            .field("id", &self.id)
            .field("shape", &self.shape.shape_type())
            .field("layers", &self.layers)
            .finish()
    }
}

/// The collision world containing all static geometry.
///
/// Supports:
/// - Axis-aligned boxes
/// - Right-triangle ramps
/// - Convex polygons
/// - Line segments
///
/// The world is immutable while queried and answers every ray
/// deterministically: brushes are visited in insertion order and ties keep
/// the earliest brush.
#[derive(Debug, Default, Clone)]
pub struct CollisionWorld {
    brushes: Vec<CollisionBrush>,
    next_id: BrushId,
}

impl CollisionWorld {
    /// Create an empty collision world.
    pub fn new() -> Self {
        Self {
            brushes: Vec::new(),
            next_id: 0,
        }
    }

    /// Add an axis-aligned box.
    ///
    /// # Arguments
    ///
    /// * `center` - Center of the box in world space
    /// * `half_extents` - Half-size on each axis
    /// * `layers` - Layers used for query filtering
    pub fn add_box(&mut self, center: Vec2, half_extents: Vec2, layers: CollisionMask) -> BrushId {
        let half = half_extents.abs();
        let shape = SharedShape::cuboid(half.x, half.y);
        self.push(shape, Isometry::translation(center.x, center.y), layers)
    }

    /// Add a right-triangle ramp.
    ///
    /// The ramp's foot is at `foot`. It extends `run` units horizontally
    /// (negative runs go to the left) and climbs `rise` units over that
    /// distance, so the walkable face makes `atan(rise / |run|)` with the
    /// floor. Returns `None` for a degenerate triangle.
    pub fn add_slope(
        &mut self,
        foot: Vec2,
        run: f32,
        rise: f32,
        layers: CollisionMask,
    ) -> Option<BrushId> {
        let end = foot + Vec2::new(run, 0.0);
        let top = foot + Vec2::new(run, rise);
        self.add_convex_polygon(&[foot, end, top], layers)
    }

    /// Add a convex polygon, taking the convex hull of `points`.
    ///
    /// Returns `None` if the hull is degenerate (fewer than three
    /// non-collinear points).
    pub fn add_convex_polygon(&mut self, points: &[Vec2], layers: CollisionMask) -> Option<BrushId> {
        let parry_points: Vec<Point<Real>> = points.iter().map(|p| Point::new(p.x, p.y)).collect();
        let shape = SharedShape::convex_hull(&parry_points)?;
        Some(self.push(shape, Isometry::identity(), layers))
    }

    /// Add a line segment from `a` to `b`.
    pub fn add_segment(&mut self, a: Vec2, b: Vec2, layers: CollisionMask) -> BrushId {
        let shape = SharedShape::segment(Point::new(a.x, a.y), Point::new(b.x, b.y));
        self.push(shape, Isometry::identity(), layers)
    }

    /// Remove all collision geometry.
    pub fn clear(&mut self) {
        self.brushes.clear();
    }

    /// Get the number of collision brushes.
    pub fn brush_count(&self) -> usize {
        self.brushes.len()
    }

    /// Perform a raycast through the world.
    ///
    /// # Arguments
    ///
    /// * `origin` - Ray starting position
    /// * `direction` - Ray direction (will be normalized)
    /// * `max_distance` - Maximum trace distance, `f32::INFINITY` for unbounded
    /// * `mask` - Layers to collide with
    pub fn raycast(
        &self,
        origin: Vec2,
        direction: Vec2,
        max_distance: f32,
        mask: CollisionMask,
    ) -> Option<RayHit> {
        let dir = direction.normalize_or_zero();
        if dir == Vec2::ZERO || !(max_distance >= 0.0) {
            return None;
        }
        let max_distance = max_distance.min(MAX_RAY_DISTANCE);

        let ray = Ray::new(Point::new(origin.x, origin.y), Vector::new(dir.x, dir.y));

        let mut closest: Option<(f32, Vec2)> = None;

        for brush in &self.brushes {
            if !mask.intersects(brush.layers) {
                continue;
            }

            let Some(hit) =
                brush
                    .shape
                    .cast_ray_and_get_normal(&brush.transform, &ray, max_distance, true)
            else {
                continue;
            };

            let toi = hit.time_of_impact;
            if toi > max_distance {
                continue;
            }
            if closest.is_some_and(|(best, _)| toi >= best) {
                continue;
            }

            let mut normal = Vec2::new(hit.normal.x, hit.normal.y);
            if normal.length_squared() < 1e-8 {
                // Origin inside the brush: parry reports no face normal.
                normal = -dir;
            }
            closest = Some((toi, normal.normalize()));
        }

        closest.map(|(distance, normal)| RayHit::new(distance, normal, origin + dir * distance))
    }

    fn push(&mut self, shape: SharedShape, transform: Isometry<Real>, layers: CollisionMask) -> BrushId {
        let id = self.next_id;
        self.next_id += 1;

        self.brushes.push(CollisionBrush {
            id,
            shape,
            transform,
            layers,
        });

        id
    }
}

impl EnvironmentQuery for CollisionWorld {
    fn cast(
        &self,
        origin: Vec2,
        direction: Vec2,
        max_distance: f32,
        mask: CollisionMask,
    ) -> Option<RayHit> {
        self.raycast(origin, direction, max_distance, mask)
    }
}

// ============================================================================
// Tests
// ============================================================================
