//! Translation from SDL events to [`GameEvent`]s.
//!
//! The SDL event pump is only available on the main thread, so the polling
//! system takes it as a non-send resource. The actual mapping logic is kept
//! in pure functions so it can be tested without a window.

use bevy_ecs::prelude::*;
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;
use sdl2::EventPump;
use std::collections::HashMap;
use tracing::debug;

use crate::events::{GameCommand, GameEvent};

/// Keyboard bindings. Pointer and touch input are hardwired to flap and do
/// not go through this table.
#[derive(Resource, Debug)]
pub struct Bindings(HashMap<Keycode, GameCommand>);

impl Default for Bindings {
    fn default() -> Self {
        let mut map = HashMap::new();
        map.insert(Keycode::Space, GameCommand::Flap);
        map.insert(Keycode::Up, GameCommand::Flap);
        map.insert(Keycode::W, GameCommand::Flap);
        map.insert(Keycode::Escape, GameCommand::Exit);
        map.insert(Keycode::Q, GameCommand::Exit);
        Bindings(map)
    }
}

impl Bindings {
    pub fn command(&self, key: Keycode) -> Option<GameCommand> {
        self.0.get(&key).copied()
    }
}

/// Device-agnostic form of the SDL events the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawInput {
    KeyDown(Keycode),
    PointerDown,
    TouchDown,
    WindowResized { width: f32, height: f32 },
    Quit,
}

/// Map raw inputs to game events. Unbound keys produce nothing.
pub fn translate_inputs(bindings: &Bindings, inputs: &[RawInput]) -> Vec<GameEvent> {
    inputs
        .iter()
        .filter_map(|input| match input {
            RawInput::KeyDown(key) => bindings.command(*key).map(GameEvent::from),
            RawInput::PointerDown | RawInput::TouchDown => Some(GameCommand::Flap.into()),
            RawInput::WindowResized { width, height } => Some(GameEvent::Resized {
                width: *width,
                height: *height,
            }),
            RawInput::Quit => Some(GameCommand::Exit.into()),
        })
        .collect()
}

/// Drain the SDL event pump and emit the resulting [`GameEvent`]s.
pub fn input_system(
    bindings: Res<Bindings>,
    mut writer: EventWriter<GameEvent>,
    mut event_pump: NonSendMut<EventPump>,
) {
    let mut raw = Vec::new();
    for event in event_pump.poll_iter() {
        match event {
            Event::Quit { .. } => raw.push(RawInput::Quit),
            Event::KeyDown {
                keycode: Some(keycode),
                repeat: false,
                ..
            } => raw.push(RawInput::KeyDown(keycode)),
            Event::MouseButtonDown { .. } => raw.push(RawInput::PointerDown),
            Event::FingerDown { .. } => raw.push(RawInput::TouchDown),
            Event::Window {
                win_event: WindowEvent::SizeChanged(width, height),
                ..
            } => raw.push(RawInput::WindowResized {
                width: width as f32,
                height: height as f32,
            }),
            _ => {}
        }
    }

    for event in translate_inputs(&bindings, &raw) {
        debug!(?event, "Input event");
        writer.write(event);
    }
}
