//! Obstacle lifecycle: spawning, scrolling and pruning.

use bevy_ecs::prelude::*;
use glam::Vec2;
use rand::Rng;
use tracing::trace;

use crate::constants::obstacle;
use crate::systems::components::{
    FrameCount, Obstacle, ObstacleBundle, ObstacleRng, Position, Viewport,
};

/// Roll a new obstacle for the current viewport.
///
/// The top column height is uniform over `[0, height / 2)`, the gap is a
/// third of the viewport, and the bottom column takes whatever remains, so
/// the three always sum to the full height.
pub fn place_obstacle(viewport: &Viewport, rng: &mut impl Rng) -> Obstacle {
    let top = rng.random_range(0.0..viewport.size.y / 2.0);
    let bottom = viewport.size.y - top - viewport.gap_height();
    Obstacle {
        top,
        bottom,
        width: obstacle::WIDTH,
        speed: viewport.scroll_speed(),
        passed: false,
    }
}

/// Spawn an obstacle at the right edge whenever the frame counter hits a
/// multiple of the spawn interval. Frame zero spawns immediately.
pub fn spawn_obstacle_system(
    frame: Res<FrameCount>,
    viewport: Res<Viewport>,
    mut rng: ResMut<ObstacleRng>,
    mut commands: Commands,
) {
    if frame.0 % viewport.spawn_interval() != 0 {
        return;
    }

    let obstacle = place_obstacle(&viewport, &mut rng.0);
    trace!(top = obstacle.top, bottom = obstacle.bottom, "Spawning obstacle");
    commands.spawn(ObstacleBundle {
        obstacle,
        position: Position(Vec2::new(viewport.size.x, 0.0)),
    });
}

/// Scroll each obstacle left at the speed captured when it spawned.
pub fn obstacle_movement_system(mut query: Query<(&Obstacle, &mut Position)>) {
    for (obstacle, mut position) in query.iter_mut() {
        position.0.x -= obstacle.speed;
    }
}

/// Despawn obstacles once their trailing edge has left the viewport.
pub fn prune_obstacle_system(
    query: Query<(Entity, &Obstacle, &Position)>,
    mut commands: Commands,
) {
    for (entity, obstacle, position) in query.iter() {
        if position.0.x + obstacle.width <= 0.0 {
            trace!(x = position.0.x, "Pruning obstacle");
            commands.entity(entity).despawn();
        }
    }
}

/// Advance the session frame counter. Runs after spawning so the counter's
/// zero value lines up with the first spawn.
pub fn advance_frame_system(mut frame: ResMut<FrameCount>) {
    frame.0 += 1;
}
