//! Axis-aligned collision between the avatar and obstacle columns.

use bevy_ecs::prelude::*;
use glam::Vec2;
use tracing::debug;

use crate::systems::components::{Avatar, Collider, Obstacle, Position, SessionState, Viewport};

/// Whether the avatar's box overlaps either column of an obstacle.
///
/// Both columns share the obstacle's x extent, so the check is one horizontal
/// overlap test plus a vertical test against the gap edges. All comparisons
/// are strict: touching edges exactly does not collide.
pub fn collides(
    avatar_position: Vec2,
    avatar_size: Vec2,
    obstacle_x: f32,
    obstacle: &Obstacle,
    viewport_height: f32,
) -> bool {
    let horizontal = avatar_position.x < obstacle_x + obstacle.width
        && avatar_position.x + avatar_size.x > obstacle_x;
    if !horizontal {
        return false;
    }

    avatar_position.y < obstacle.top
        || avatar_position.y + avatar_size.y > viewport_height - obstacle.bottom
}

/// End the session when the avatar hits any obstacle.
pub fn collision_system(
    viewport: Res<Viewport>,
    mut session: ResMut<SessionState>,
    avatar: Single<(&Position, &Collider), With<Avatar>>,
    obstacles: Query<(&Obstacle, &Position), Without<Avatar>>,
) {
    let (avatar_position, collider) = avatar.into_inner();

    for (obstacle, position) in obstacles.iter() {
        if collides(
            avatar_position.0,
            collider.size,
            position.0.x,
            obstacle,
            viewport.size.y,
        ) {
            debug!(x = position.0.x, "Obstacle collision");
            *session = SessionState::GameOver;
            return;
        }
    }
}
