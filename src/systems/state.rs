//! Session reset handling.

use bevy_ecs::prelude::*;
use tracing::info;

use crate::constants::avatar as avatar_constants;
use crate::events::ResetRequest;
use crate::systems::components::{Avatar, FrameCount, Obstacle, Position, Score, SessionState};

/// Rebuild the session from scratch when a reset was requested this tick.
///
/// Everything session-scoped goes back to its initial value: the avatar
/// returns to its start position at rest, all obstacles despawn, and the
/// score and frame counter zero out. Any number of requests in one tick
/// produce exactly one reset.
pub fn session_reset_system(
    mut requests: EventReader<ResetRequest>,
    mut session: ResMut<SessionState>,
    mut score: ResMut<Score>,
    mut frame: ResMut<FrameCount>,
    avatar: Single<(&mut Avatar, &mut Position)>,
    obstacles: Query<Entity, With<Obstacle>>,
    mut commands: Commands,
) {
    if requests.is_empty() {
        return;
    }
    requests.clear();

    let (mut avatar_state, mut position) = avatar.into_inner();
    *avatar_state = Avatar::at_rest();
    position.0 = avatar_constants::START_POSITION;

    for entity in obstacles.iter() {
        commands.entity(entity).despawn();
    }

    *score = Score(0);
    *frame = FrameCount(0);
    *session = SessionState::Playing;
    info!("Session reset");
}
