//! SDL bootstrap and the fixed-rate outer loop.

use std::time::Instant;

use sdl2::render::{Canvas, TextureCreator};
use sdl2::video::{Window, WindowContext};
use tracing::warn;

use crate::constants::{DEFAULT_WINDOW_SIZE, LOOP_TIME};
use crate::error::{GameError, GameResult};
use crate::game::Game;

pub struct App {
    pub game: Game,
    // Kept alive for the lifetime of the app; SDL shuts down when dropped.
    _sdl_context: sdl2::Sdl,
}

impl App {
    pub fn new() -> GameResult<Self> {
        let sdl_context = sdl2::init().map_err(GameError::Sdl)?;
        let video_subsystem = sdl_context.video().map_err(GameError::Sdl)?;
        let event_pump = sdl_context.event_pump().map_err(GameError::Sdl)?;

        let window = video_subsystem
            .window(
                "Flappy",
                DEFAULT_WINDOW_SIZE.x as u32,
                DEFAULT_WINDOW_SIZE.y as u32,
            )
            .position_centered()
            .resizable()
            .build()
            .map_err(|e| GameError::Sdl(e.to_string()))?;

        let canvas: Canvas<Window> = window
            .into_canvas()
            .accelerated()
            .build()
            .map_err(|e| GameError::Sdl(e.to_string()))?;
        let texture_creator: TextureCreator<WindowContext> = canvas.texture_creator();

        let game = Game::new(canvas, texture_creator, event_pump)?;

        Ok(App {
            game,
            _sdl_context: sdl_context,
        })
    }

    /// Run one frame, then sleep out the rest of the frame budget.
    /// Returns `false` once the game wants to exit.
    pub fn run(&mut self) -> bool {
        let start = Instant::now();

        if self.game.tick() {
            return false;
        }

        let elapsed = start.elapsed();
        if let Some(remaining) = LOOP_TIME.checked_sub(elapsed) {
            spin_sleep::sleep(remaining);
        } else {
            warn!(?elapsed, "Frame ran over budget");
        }

        true
    }
}
