//! Bitmap text rendering from an embedded glyph sheet.
//!
//! The sheet is a 16-column grid of 8x8 cells covering ASCII `' '..='_'`,
//! which is enough for uppercase text, digits and basic punctuation.
//! Lowercase input is folded to uppercase before lookup.

use glam::Vec2;
use sdl2::image::LoadTexture;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, RenderTarget, Texture, TextureCreator};
use sdl2::video::WindowContext;

use crate::asset::Asset;
use crate::error::{GameResult, TextureError};

const GLYPH_SIZE: u32 = 8;
const GRID_COLUMNS: u32 = 16;
const FIRST_CHAR: u8 = b' ';
const LAST_CHAR: u8 = b'_';

/// Source rectangle of a character's cell in the sheet, if it has one.
fn glyph_src(c: char) -> Option<Rect> {
    let folded = c.to_ascii_uppercase();
    if !folded.is_ascii() {
        return None;
    }
    let byte = folded as u8;
    if !(FIRST_CHAR..=LAST_CHAR).contains(&byte) {
        return None;
    }

    let index = (byte - FIRST_CHAR) as u32;
    let column = index % GRID_COLUMNS;
    let row = index / GRID_COLUMNS;
    Some(Rect::new(
        (column * GLYPH_SIZE) as i32,
        (row * GLYPH_SIZE) as i32,
        GLYPH_SIZE,
        GLYPH_SIZE,
    ))
}

/// Glyph sheet texture plus a cached color modulation.
///
/// The sheet is white-on-transparent; text color is applied via color mod,
/// and the last applied color is remembered to skip redundant mod calls.
pub struct GlyphAtlas {
    texture: Texture,
    last_modulation: Option<Color>,
}

impl GlyphAtlas {
    pub fn load(texture_creator: &TextureCreator<WindowContext>) -> GameResult<Self> {
        let texture = texture_creator
            .load_texture_bytes(Asset::GlyphSheet.bytes())
            .map_err(|e| TextureError::LoadFailed(format!("glyph sheet: {e}")))?;
        Ok(Self {
            texture,
            last_modulation: None,
        })
    }

    /// Draw `text` with its top-left corner at `position`. Characters with no
    /// glyph in the sheet advance the cursor without drawing.
    pub fn render<C: RenderTarget>(
        &mut self,
        canvas: &mut Canvas<C>,
        text: &str,
        position: Vec2,
        scale: f32,
        color: Color,
    ) -> Result<(), TextureError> {
        if self.last_modulation != Some(color) {
            self.texture.set_color_mod(color.r, color.g, color.b);
            self.texture.set_alpha_mod(color.a);
            self.last_modulation = Some(color);
        }

        let advance = GLYPH_SIZE as f32 * scale;
        let mut x = position.x;
        for c in text.chars() {
            if let Some(src) = glyph_src(c) {
                let dest = Rect::new(
                    x as i32,
                    position.y as i32,
                    advance as u32,
                    advance as u32,
                );
                canvas
                    .copy(&self.texture, src, dest)
                    .map_err(TextureError::RenderFailed)?;
            }
            x += advance;
        }
        Ok(())
    }

    /// Width in pixels `text` will occupy at `scale`.
    pub fn text_width(text: &str, scale: f32) -> f32 {
        text.chars().count() as f32 * GLYPH_SIZE as f32 * scale
    }
}
