//! Collision tests against the gap edges and the system behavior.

mod common;

use bevy_ecs::system::RunSystemOnce;
use glam::Vec2;
use speculoos::prelude::*;

use common::{create_test_world, spawn_obstacle_at};
use flappy::systems::{collides, collision_system, Obstacle, Position, SessionState};

fn obstacle(top: f32, bottom: f32) -> Obstacle {
    Obstacle {
        top,
        bottom,
        width: 50.0,
        speed: 2.0,
        passed: false,
    }
}

// Viewport height 600, top column 100, gap 200, bottom column 300: the gap
// spans y in (100, 300).
const VIEWPORT_HEIGHT: f32 = 600.0;

#[test]
fn test_avatar_below_gap_collides() {
    let hit = collides(
        Vec2::new(50.0, 250.0),
        Vec2::new(67.0, 69.8),
        40.0,
        &obstacle(100.0, 300.0),
        VIEWPORT_HEIGHT,
    );

    assert_that(&hit).is_true();
}

#[test]
fn test_avatar_inside_gap_is_safe() {
    let hit = collides(
        Vec2::new(50.0, 150.0),
        Vec2::new(67.0, 69.8),
        40.0,
        &obstacle(100.0, 300.0),
        VIEWPORT_HEIGHT,
    );

    assert_that(&hit).is_false();
}

#[test]
fn test_avatar_overlapping_top_column_collides() {
    let hit = collides(
        Vec2::new(50.0, 50.0),
        Vec2::new(67.0, 69.8),
        40.0,
        &obstacle(100.0, 300.0),
        VIEWPORT_HEIGHT,
    );

    assert_that(&hit).is_true();
}

#[test]
fn test_no_horizontal_overlap_never_collides() {
    // Vertically inside the top column, but far to the left of it.
    let hit = collides(
        Vec2::new(50.0, 10.0),
        Vec2::new(67.0, 69.8),
        500.0,
        &obstacle(100.0, 300.0),
        VIEWPORT_HEIGHT,
    );

    assert_that(&hit).is_false();
}

#[test]
fn test_touching_edges_exactly_is_not_a_collision() {
    let size = Vec2::new(67.0, 69.8);
    let column = obstacle(100.0, 300.0);

    // Obstacle's trailing edge exactly at the avatar's left edge.
    let behind = collides(Vec2::new(100.0, 10.0), size, 50.0, &column, VIEWPORT_HEIGHT);
    // Obstacle's leading edge exactly at the avatar's right edge.
    let ahead = collides(Vec2::new(100.0, 10.0), size, 167.0, &column, VIEWPORT_HEIGHT);

    assert_that(&behind).is_false();
    assert_that(&ahead).is_false();
}

#[test]
fn test_collision_system_ends_session() {
    let (mut world, avatar) = create_test_world();
    // Avatar at its default x=50; obstacle overlapping it with the avatar
    // inside the top column's span.
    world.get_mut::<Position>(avatar).unwrap().0.y = 10.0;
    spawn_obstacle_at(&mut world, 40.0, 100.0, 300.0, 2.0);

    world.run_system_once(collision_system).unwrap();

    assert_that(&world.resource::<SessionState>().playing()).is_false();
}

#[test]
fn test_collision_system_leaves_live_session_alone() {
    let (mut world, avatar) = create_test_world();
    world.get_mut::<Position>(avatar).unwrap().0.y = 150.0;
    spawn_obstacle_at(&mut world, 40.0, 100.0, 300.0, 2.0);

    world.run_system_once(collision_system).unwrap();

    assert_that(&world.resource::<SessionState>().playing()).is_true();
}
