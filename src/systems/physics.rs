//! Avatar motion: gravity, tilt animation and ground contact.

use bevy_ecs::prelude::*;
use tracing::debug;

use crate::constants::{avatar, physics};
use crate::systems::components::{Avatar, Collider, Position, SessionState, Viewport};

/// Advance the avatar one tick.
///
/// Gravity integrates first, then position, so a flap this tick still loses
/// one gravity step before the avatar moves. Touching the bottom edge ends
/// the session; the top edge is open and the avatar may fly above it.
pub fn avatar_physics_system(
    viewport: Res<Viewport>,
    mut session: ResMut<SessionState>,
    mut query: Query<(&mut Avatar, &mut Position, &Collider)>,
) {
    for (mut avatar_state, mut position, collider) in query.iter_mut() {
        avatar_state.velocity += physics::GRAVITY;
        position.0.y += avatar_state.velocity;

        avatar_state.flap_timer = avatar_state.flap_timer.saturating_sub(1);

        // Tilt downward only while falling; flaps may have wound the angle
        // arbitrarily far upward and that is left as is.
        if avatar_state.velocity > 0.0 && avatar_state.angle < avatar::MAX_DIVE_ANGLE {
            avatar_state.angle = (avatar_state.angle + avatar::TILT_STEP).min(avatar::MAX_DIVE_ANGLE);
        }

        if position.0.y + collider.size.y >= viewport.size.y {
            debug!(y = position.0.y, "Ground contact");
            *session = SessionState::GameOver;
        }
    }
}
