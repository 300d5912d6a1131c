//! Score accounting for obstacles the avatar has cleared.

use bevy_ecs::prelude::*;
use tracing::debug;

use crate::systems::components::{Avatar, Obstacle, Position, Score};

/// Award one point per obstacle, the first tick its trailing edge is
/// strictly left of the avatar's leading edge.
pub fn scoring_system(
    mut score: ResMut<Score>,
    avatar: Single<&Position, With<Avatar>>,
    mut obstacles: Query<(&mut Obstacle, &Position), Without<Avatar>>,
) {
    for (mut obstacle, position) in obstacles.iter_mut() {
        if !obstacle.passed && position.0.x + obstacle.width < avatar.0.x {
            obstacle.passed = true;
            score.0 += 1;
            debug!(score = score.0, "Obstacle passed");
        }
    }
}
