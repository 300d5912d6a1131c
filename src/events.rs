use bevy_ecs::prelude::*;

/// Discrete commands produced by the input layer.
///
/// Keyboard, pointer and touch flap sources all collapse into the same
/// [`GameCommand::Flap`]; the control system never learns which device
/// delivered it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameCommand {
    Flap,
    Exit,
}

#[derive(Event, Clone, Copy, Debug, PartialEq)]
pub enum GameEvent {
    Command(GameCommand),
    /// The window surface changed size; carries the new drawable size.
    Resized { width: f32, height: f32 },
}

impl From<GameCommand> for GameEvent {
    fn from(command: GameCommand) -> Self {
        GameEvent::Command(command)
    }
}

/// Request for a full session reset.
///
/// Written on restart-after-game-over and on every viewport resize. Multiple
/// requests within one tick collapse into a single reset.
#[derive(Event, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResetRequest;
