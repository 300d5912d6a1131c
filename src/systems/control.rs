//! Routes [`GameEvent`]s to gameplay and process state.

use bevy_ecs::prelude::*;
use tracing::info;

use crate::events::{GameCommand, GameEvent, ResetRequest};
use crate::systems::components::{Avatar, GlobalState, SessionState, Viewport};

/// Apply pending game events.
///
/// A flap during play moves the avatar; after a game over the same input
/// requests a restart instead. Resizes always restart the session with the
/// new viewport.
pub fn control_system(
    mut events: EventReader<GameEvent>,
    mut state: ResMut<GlobalState>,
    session: Res<SessionState>,
    mut viewport: ResMut<Viewport>,
    mut avatar: Single<&mut Avatar>,
    mut resets: EventWriter<ResetRequest>,
) {
    for event in events.read() {
        match event {
            GameEvent::Command(GameCommand::Flap) => {
                if session.playing() {
                    avatar.flap();
                } else {
                    resets.write(ResetRequest);
                }
            }
            GameEvent::Command(GameCommand::Exit) => {
                info!("Exit requested");
                state.exit = true;
            }
            GameEvent::Resized { width, height } => {
                info!(width, height, "Viewport resized");
                *viewport = Viewport::new(*width, *height);
                resets.write(ResetRequest);
            }
        }
    }
}
