//! Draws the full frame: background, obstacles, avatar, HUD and overlay.
//!
//! Rendering failures are logged and skipped rather than propagated; a
//! dropped draw call costs one frame, not the process.

use bevy_ecs::prelude::*;
use glam::Vec2;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;
use tracing::warn;

use crate::constants::ui;
use crate::systems::components::{
    Avatar, Collider, Obstacle, Position, Score, SessionState, Viewport,
};
use crate::texture::sprite::SpriteSet;
use crate::texture::text::GlyphAtlas;

/// Convert a position and size into an SDL rect, clamping at the viewport
/// origin. Obstacles straddling the left edge render their visible part.
fn rect(position: Vec2, size: Vec2) -> Rect {
    Rect::new(
        position.x as i32,
        position.y as i32,
        size.x.max(0.0) as u32,
        size.y.max(0.0) as u32,
    )
}

pub fn render_system(
    mut canvas: NonSendMut<Canvas<Window>>,
    sprites: NonSendMut<SpriteSet>,
    mut glyphs: NonSendMut<GlyphAtlas>,
    viewport: Res<Viewport>,
    session: Res<SessionState>,
    score: Res<Score>,
    avatar: Single<(&Avatar, &Position, &Collider)>,
    obstacles: Query<(&Obstacle, &Position), Without<Avatar>>,
) {
    canvas.set_draw_color(Color::BLACK);
    canvas.clear();

    if let Err(e) = canvas.copy(&sprites.background, None, None) {
        warn!(error = %e, "Failed to draw background");
    }

    for (obstacle, position) in obstacles.iter() {
        let top_rect = rect(
            Vec2::new(position.0.x, 0.0),
            Vec2::new(obstacle.width, obstacle.top),
        );
        let bottom_rect = rect(
            Vec2::new(position.0.x, viewport.size.y - obstacle.bottom),
            Vec2::new(obstacle.width, obstacle.bottom),
        );

        if let Err(e) = canvas.copy(&sprites.pipe_top, None, top_rect) {
            warn!(error = %e, "Failed to draw obstacle");
        }
        if let Err(e) = canvas.copy(&sprites.pipe_bottom, None, bottom_rect) {
            warn!(error = %e, "Failed to draw obstacle");
        }
    }

    let (avatar_state, position, collider) = avatar.into_inner();
    let sprite = if avatar_state.flap_timer > 0 {
        &sprites.avatar_wing_up
    } else {
        &sprites.avatar_wing_down
    };
    let dest = rect(position.0, collider.size);
    if let Err(e) = canvas.copy_ex(
        sprite,
        None,
        dest,
        avatar_state.angle.to_degrees() as f64,
        None,
        false,
        false,
    ) {
        warn!(error = %e, "Failed to draw avatar");
    }

    let hud = format!("SCORE {}", score.0);
    if let Err(e) = glyphs.render(
        &mut canvas,
        &hud,
        Vec2::new(10.0, 10.0),
        ui::HUD_TEXT_SCALE,
        Color::WHITE,
    ) {
        warn!(error = %e, "Failed to draw HUD");
    }

    if !session.playing() {
        canvas.set_blend_mode(BlendMode::Blend);
        canvas.set_draw_color(Color::RGBA(0, 0, 0, ui::OVERLAY_ALPHA));
        if let Err(e) = canvas.fill_rect(None) {
            warn!(error = %e, "Failed to draw overlay");
        }

        let title = "GAME OVER";
        let hint = "PRESS SPACE OR CLICK TO RESTART";
        let center_x = viewport.size.x / 2.0;
        let center_y = viewport.size.y / 2.0;

        let title_position = Vec2::new(
            center_x - GlyphAtlas::text_width(title, ui::OVERLAY_TITLE_SCALE) / 2.0,
            center_y - 60.0,
        );
        let hint_position = Vec2::new(
            center_x - GlyphAtlas::text_width(hint, ui::OVERLAY_HINT_SCALE) / 2.0,
            center_y + 20.0,
        );

        if let Err(e) = glyphs.render(
            &mut canvas,
            title,
            title_position,
            ui::OVERLAY_TITLE_SCALE,
            Color::WHITE,
        ) {
            warn!(error = %e, "Failed to draw overlay title");
        }
        if let Err(e) = glyphs.render(
            &mut canvas,
            hint,
            hint_position,
            ui::OVERLAY_HINT_SCALE,
            Color::WHITE,
        ) {
            warn!(error = %e, "Failed to draw overlay hint");
        }
    }

    canvas.present();
}
