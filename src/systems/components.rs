//! Components and resources shared across the gameplay systems.

use bevy_ecs::prelude::*;
use glam::Vec2;
use rand::rngs::SmallRng;

use crate::constants::{avatar, obstacle, DEFAULT_WINDOW_SIZE};

/// The player's avatar. Position lives in [`Position`]; this component holds
/// the vertical velocity and the presentation state derived from it.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Avatar {
    /// Vertical velocity in px/tick. Positive is downward.
    pub velocity: f32,
    /// Tilt in radians. Positive rotates the nose downward.
    pub angle: f32,
    /// Remaining ticks to show the wing-up sprite after a flap.
    pub flap_timer: u8,
}

impl Avatar {
    /// An avatar with no motion and no tilt, as at the start of a session.
    pub fn at_rest() -> Self {
        Self {
            velocity: 0.0,
            angle: 0.0,
            flap_timer: 0,
        }
    }

    /// Apply a flap: the velocity snaps to the full upward impulse no matter
    /// how fast the avatar was falling, and the nose kicks upward.
    pub fn flap(&mut self) {
        self.velocity = -crate::constants::physics::FLAP_IMPULSE;
        self.angle -= avatar::FLAP_TILT_KICK;
        self.flap_timer = avatar::FLAP_DISPLAY_TICKS;
    }
}

impl Default for Avatar {
    fn default() -> Self {
        Self::at_rest()
    }
}

/// Top-left corner of an entity, in viewport pixels.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct Position(pub Vec2);

/// Axis-aligned bounding box extent, anchored at the entity's [`Position`].
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    pub size: Vec2,
}

/// A single obstacle column pair.
///
/// Everything but `passed` is fixed at spawn time; in particular the scroll
/// speed is captured from the viewport at spawn and never revised, so columns
/// spawned before a resize keep their original speed.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    /// Height of the upper column, from the top edge down.
    pub top: f32,
    /// Height of the lower column, from the bottom edge up.
    pub bottom: f32,
    pub width: f32,
    /// Leftward scroll speed in px/tick, captured at spawn.
    pub speed: f32,
    /// Whether this obstacle has already awarded its score point.
    pub passed: bool,
}

#[derive(Bundle)]
pub struct AvatarBundle {
    pub avatar: Avatar,
    pub position: Position,
    pub collider: Collider,
}

impl Default for AvatarBundle {
    fn default() -> Self {
        Self {
            avatar: Avatar::at_rest(),
            position: Position(avatar::START_POSITION),
            collider: Collider { size: avatar::SIZE },
        }
    }
}

#[derive(Bundle)]
pub struct ObstacleBundle {
    pub obstacle: Obstacle,
    pub position: Position,
}

/// Current drawable size of the window, plus the constants derived from it.
///
/// All derived values are recomputed on the fly so a resize only has to
/// replace this resource.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub size: Vec2,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
        }
    }

    /// Vertical gap between an obstacle's columns.
    pub fn gap_height(&self) -> f32 {
        self.size.y * obstacle::GAP_FRACTION
    }

    /// Ticks between obstacle spawns. Wider windows spawn less often, within
    /// fixed bounds so extreme sizes stay playable.
    pub fn spawn_interval(&self) -> u64 {
        ((self.size.x / 3.0) as u64).clamp(obstacle::MIN_SPAWN_INTERVAL, obstacle::MAX_SPAWN_INTERVAL)
    }

    /// Leftward scroll speed for obstacles spawned right now, in px/tick.
    pub fn scroll_speed(&self) -> f32 {
        (self.size.x.max(self.size.y) / obstacle::SPEED_DIVISOR)
            .clamp(obstacle::MIN_SPEED, obstacle::MAX_SPEED)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            size: DEFAULT_WINDOW_SIZE,
        }
    }
}

/// Whether the session is live or showing the game-over overlay.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Playing,
    GameOver,
}

impl SessionState {
    pub fn playing(&self) -> bool {
        matches!(self, SessionState::Playing)
    }
}

/// Obstacles passed this session.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score(pub u32);

/// Ticks elapsed this session. Drives obstacle spawn timing and resets to
/// zero with the rest of the session.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameCount(pub u64);

/// Process-level state that outlives any one session.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GlobalState {
    pub exit: bool,
}

/// Seedable randomness source for obstacle placement.
#[derive(Resource, Debug)]
pub struct ObstacleRng(pub SmallRng);

#[cfg(test)]
mod tests {
    use speculoos::prelude::*;

    use super::*;
    use crate::constants::physics;

    #[test]
    fn test_flap_overrides_downward_velocity() {
        let mut avatar = Avatar {
            velocity: 12.0,
            angle: 0.8,
            flap_timer: 0,
        };
        avatar.flap();

        assert_that(&avatar.velocity).is_equal_to(-physics::FLAP_IMPULSE);
        assert_that(&avatar.flap_timer).is_equal_to(crate::constants::avatar::FLAP_DISPLAY_TICKS);
    }

    #[test]
    fn test_viewport_interval_scales_with_width() {
        let narrow = Viewport::new(300.0, 600.0);
        let wide = Viewport::new(450.0, 600.0);

        assert_that(&narrow.spawn_interval()).is_equal_to(100);
        assert_that(&wide.spawn_interval()).is_equal_to(150);
    }

    #[test]
    fn test_viewport_interval_clamped() {
        assert_that(&Viewport::new(10.0, 600.0).spawn_interval())
            .is_equal_to(obstacle::MIN_SPAWN_INTERVAL);
        assert_that(&Viewport::new(10_000.0, 600.0).spawn_interval())
            .is_equal_to(obstacle::MAX_SPAWN_INTERVAL);
    }

    #[test]
    fn test_scroll_speed_uses_longer_dimension() {
        let landscape = Viewport::new(1280.0, 600.0);
        let portrait = Viewport::new(600.0, 1280.0);

        assert_that(&landscape.scroll_speed()).is_equal_to(portrait.scroll_speed());
        assert_that(&landscape.scroll_speed()).is_equal_to(2.0);
    }

    #[test]
    fn test_scroll_speed_clamped() {
        assert_that(&Viewport::new(100.0, 100.0).scroll_speed()).is_equal_to(obstacle::MIN_SPEED);
        assert_that(&Viewport::new(9000.0, 100.0).scroll_speed()).is_equal_to(obstacle::MAX_SPEED);
    }
}
