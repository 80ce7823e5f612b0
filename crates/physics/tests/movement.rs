//! End-to-end movement against parry-backed geometry.

use glam::Vec2;
use ledge_physics::{Bounds, CollisionMask, CollisionWorld, Controller2D, ControllerConfig};
use proptest::prelude::*;

const SKIN: f32 = 0.015;
const DT: f32 = 1.0 / 60.0;
const GRAVITY: f32 = -20.0;

fn body_at(center: Vec2) -> Controller2D {
    Controller2D::new(
        ControllerConfig::default(),
        Bounds::from_center_size(center, Vec2::new(1.0, 2.0)),
    )
}

fn flat_floor(world: &mut CollisionWorld) {
    world.add_box(Vec2::new(0.0, -0.5), Vec2::new(100.0, 0.5), CollisionMask::SOLID);
}

/// Walk at `speed` with gravity for `steps` ticks, calling `inspect` after
/// every move.
fn walk(
    controller: &mut Controller2D,
    world: &CollisionWorld,
    speed: f32,
    steps: usize,
    mut inspect: impl FnMut(&Controller2D),
) {
    let mut velocity = Vec2::ZERO;
    for _ in 0..steps {
        let contacts = *controller.contacts();
        if contacts.above || contacts.below {
            velocity.y = 0.0;
        }
        velocity.x = speed;
        velocity.y += GRAVITY * DT;
        controller.move_by(velocity * DT, world);
        inspect(controller);
    }
}

#[test]
fn test_scenario_resting_on_floor() {
    let mut world = CollisionWorld::new();
    flat_floor(&mut world);

    // Width 1, height 2, bottom exactly on the floor.
    let mut controller = body_at(Vec2::new(0.0, 1.0));
    let applied = controller.move_by(Vec2::new(0.0, -5.0), &world);

    assert!(applied.y.abs() < 1e-3, "moved {applied:?}");
    assert!(controller.bounds().min.y.abs() < 1e-3);

    let contacts = controller.contacts();
    assert!(contacts.below);
    assert!(!contacts.above && !contacts.left && !contacts.right);
}

#[test]
fn test_drop_lands_on_floor() {
    let mut world = CollisionWorld::new();
    flat_floor(&mut world);

    let mut controller = body_at(Vec2::new(0.0, 4.0));
    let applied = controller.move_by(Vec2::new(0.0, -50.0), &world);

    assert!((applied.y + 3.0).abs() < 1e-3);
    assert!(controller.contacts().below);
}

/// Closed room of four walls with inner faces at `±(half - thickness / 2)`.
fn room(half: f32, thickness: f32) -> (CollisionWorld, [Bounds; 4]) {
    let span = 2.0 * half + thickness;
    let walls = [
        Bounds::from_center_size(Vec2::new(-half, 0.0), Vec2::new(thickness, span)),
        Bounds::from_center_size(Vec2::new(half, 0.0), Vec2::new(thickness, span)),
        Bounds::from_center_size(Vec2::new(0.0, -half), Vec2::new(span, thickness)),
        Bounds::from_center_size(Vec2::new(0.0, half), Vec2::new(span, thickness)),
    ];

    let mut world = CollisionWorld::new();
    for wall in &walls {
        world.add_box(wall.center(), wall.size() * 0.5, CollisionMask::SOLID);
    }
    (world, walls)
}

proptest! {
    #[test]
    fn test_no_tunneling_inside_room(
        angle in 0.0f32..360.0,
        magnitude in 0.0f32..60.0,
        thickness in 0.01f32..1.0,
        start_x in -3.0f32..3.0,
        start_y in -2.0f32..2.0,
    ) {
        let (world, walls) = room(5.0, thickness);
        let radians = angle.to_radians();
        let direction = Vec2::new(radians.cos(), radians.sin());

        let mut controller = body_at(Vec2::new(start_x, start_y));
        controller.move_by(direction * magnitude, &world);

        let bounds = controller.bounds();
        for wall in &walls {
            prop_assert!(
                !bounds.overlaps(wall, SKIN),
                "angle {} magnitude {} thickness {} ended in a wall: {:?}",
                angle,
                magnitude,
                thickness,
                bounds
            );
        }
    }
}

#[test]
fn test_thin_wall_blocks_fast_move() {
    let mut world = CollisionWorld::new();
    flat_floor(&mut world);
    world.add_box(Vec2::new(3.0, 2.0), Vec2::new(0.025, 2.0), CollisionMask::SOLID);

    let mut controller = body_at(Vec2::new(0.0, 1.0));
    controller.move_by(Vec2::new(40.0, 0.0), &world);

    assert!((controller.bounds().max.x - 2.975).abs() < 1e-3);
    assert!(controller.contacts().right);
}

#[test]
fn test_walk_up_ramp() {
    let angle = 30f32;
    let tan = angle.to_radians().tan();
    let mut world = CollisionWorld::new();
    flat_floor(&mut world);
    world
        .add_slope(Vec2::new(2.0, 0.0), 6.0, 6.0 * tan, CollisionMask::SOLID)
        .expect("valid ramp");

    let mut controller = body_at(Vec2::new(0.0, 1.0));
    let mut climbed_steps = 0;
    walk(&mut controller, &world, 6.0, 60, |c| {
        if c.contacts().climbing_slope {
            climbed_steps += 1;
            assert!(c.contacts().below);
            assert!((c.contacts().slope_angle - angle).abs() < 0.01);

            // The leading bottom corner rides the slope surface.
            let bounds = c.bounds();
            let surface = (bounds.max.x - 2.0) * tan;
            assert!(bounds.min.y > surface - 2.0 * SKIN, "sank into ramp: {bounds:?}");
            assert!(bounds.min.y < surface + 0.1, "floated off ramp: {bounds:?}");
        }
    });

    assert!(climbed_steps > 20);
    assert!(controller.bounds().min.y > 1.0);
    assert!(!controller.contacts().right);
}

#[test]
fn test_steep_ramp_is_a_wall() {
    let mut world = CollisionWorld::new();
    flat_floor(&mut world);
    let rise = 85f32.to_radians().tan() * 0.5;
    world
        .add_slope(Vec2::new(2.0, 0.0), 0.5, rise, CollisionMask::SOLID)
        .expect("valid ramp");

    let mut controller = body_at(Vec2::new(0.0, 1.0));
    walk(&mut controller, &world, 6.0, 60, |c| {
        assert!(!c.contacts().climbing_slope);
    });

    assert!(controller.contacts().right);
    assert!(controller.bounds().max.x < 2.01);
    assert!(controller.bounds().min.y.abs() < 0.01);
}

#[test]
fn test_walk_down_ramp_stays_grounded() {
    let mut world = CollisionWorld::new();
    // Plateau with its top at y=2 ending at x=0.
    world.add_box(Vec2::new(-5.0, 1.0), Vec2::new(5.0, 1.0), CollisionMask::SOLID);
    // Ramp from (0, 2) down to (4, 0).
    world
        .add_convex_polygon(
            &[Vec2::new(0.0, 2.0), Vec2::new(0.0, 0.0), Vec2::new(4.0, 0.0)],
            CollisionMask::SOLID,
        )
        .expect("valid ramp");
    world.add_box(Vec2::new(20.0, -0.5), Vec2::new(16.0, 0.5), CollisionMask::SOLID);

    let slope_angle = 0.5f32.atan().to_degrees();
    let mut controller = body_at(Vec2::new(-0.6, 3.0));
    let mut checked = 0;
    walk(&mut controller, &world, 3.0, 90, |c| {
        let bounds = c.bounds();
        if bounds.min.x > 0.5 && bounds.min.x < 2.9 {
            checked += 1;
            let contacts = c.contacts();
            assert!(contacts.below, "airborne on ramp at {bounds:?}");
            assert!(contacts.descending_slope, "not snapped at {bounds:?}");
            assert!((contacts.slope_angle - slope_angle).abs() < 0.01);
        }
    });

    assert!(checked > 20);
}

#[test]
fn test_filter_mask_ignores_triggers() {
    let mut world = CollisionWorld::new();
    flat_floor(&mut world);
    world.add_box(Vec2::new(2.0, 1.0), Vec2::new(0.5, 1.0), CollisionMask::TRIGGER);

    let mut controller = body_at(Vec2::new(0.0, 1.0));
    controller.move_by(Vec2::new(4.0, 0.0), &world);

    assert!((controller.position().x - 4.0).abs() < 1e-4);
    assert!(!controller.contacts().right);
}

#[test]
fn test_identical_runs_match() {
    let mut world = CollisionWorld::new();
    flat_floor(&mut world);
    world
        .add_slope(Vec2::new(2.0, 0.0), 3.0, 2.0, CollisionMask::SOLID)
        .expect("valid ramp");

    let record = || {
        let mut controller = body_at(Vec2::new(0.0, 2.0));
        let mut trail = Vec::new();
        walk(&mut controller, &world, 5.0, 90, |c| trail.push((c.bounds(), *c.contacts())));
        trail
    };

    assert_eq!(record(), record());
}
