//! This module contains all the tuning constants used in the game.
//!
//! Physics constants are expressed per simulation tick; the simulation runs
//! at a fixed 60 Hz, so a tick and a rendered frame are the same thing.

use std::time::Duration;

use glam::Vec2;

pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// Window size before the first resize notification, in pixels.
pub const DEFAULT_WINDOW_SIZE: Vec2 = Vec2::new(800.0, 600.0);

pub mod physics {
    /// Downward acceleration added to the avatar's velocity every tick, in px/tick².
    pub const GRAVITY: f32 = 0.15;
    /// Magnitude of the upward impulse a flap sets the velocity to, in px/tick.
    pub const FLAP_IMPULSE: f32 = 4.6;
}

pub mod avatar {
    use glam::Vec2;

    /// Start position of the avatar's top-left corner. The x coordinate is
    /// fixed for the whole session; only y moves.
    pub const START_POSITION: Vec2 = Vec2::new(50.0, 150.0);
    /// Bounding-box extent of the avatar, in pixels.
    pub const SIZE: Vec2 = Vec2::new(67.0, 69.8);
    /// Maximum downward tilt while diving, in radians.
    pub const MAX_DIVE_ANGLE: f32 = std::f32::consts::FRAC_PI_2;
    /// Tilt added per tick while falling, up to [`MAX_DIVE_ANGLE`].
    pub const TILT_STEP: f32 = 0.045;
    /// Immediate upward tilt a flap subtracts from the angle. There is no
    /// matching upward clamp; rapid flapping winds the angle past upright.
    pub const FLAP_TILT_KICK: f32 = 0.35;
    /// Ticks the wing-up sprite stays selected after a flap.
    pub const FLAP_DISPLAY_TICKS: u8 = 6;
}

pub mod obstacle {
    /// Width of each obstacle column, in pixels.
    pub const WIDTH: f32 = 50.0;
    /// The vertical gap is this fraction of the viewport height.
    pub const GAP_FRACTION: f32 = 1.0 / 3.0;
    /// Bounds for the viewport-derived spawn interval, in ticks.
    pub const MIN_SPAWN_INTERVAL: u64 = 60;
    pub const MAX_SPAWN_INTERVAL: u64 = 180;
    /// Scroll speed is `max(width, height) / SPEED_DIVISOR`, clamped below.
    pub const SPEED_DIVISOR: f32 = 640.0;
    pub const MIN_SPEED: f32 = 1.0;
    pub const MAX_SPEED: f32 = 3.0;
}

pub mod ui {
    /// Glyph scale of the score line in the top-left corner.
    pub const HUD_TEXT_SCALE: f32 = 2.0;
    pub const OVERLAY_TITLE_SCALE: f32 = 5.0;
    pub const OVERLAY_HINT_SCALE: f32 = 2.0;
    /// Alpha of the dimming layer drawn over the final frame on game over.
    pub const OVERLAY_ALPHA: u8 = 128;
}
