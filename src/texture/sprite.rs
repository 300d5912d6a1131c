//! GPU textures for every sprite the renderer draws.

use sdl2::image::LoadTexture;
use sdl2::render::{Texture, TextureCreator};
use sdl2::video::WindowContext;
use tracing::debug;

use crate::asset::Asset;
use crate::error::{GameResult, TextureError};

/// All sprite textures, loaded once at startup from the embedded assets.
pub struct SpriteSet {
    pub background: Texture,
    pub avatar_wing_up: Texture,
    pub avatar_wing_down: Texture,
    pub pipe_top: Texture,
    pub pipe_bottom: Texture,
}

impl SpriteSet {
    pub fn load(texture_creator: &TextureCreator<WindowContext>) -> GameResult<Self> {
        let load = |asset: Asset| -> GameResult<Texture> {
            texture_creator
                .load_texture_bytes(asset.bytes())
                .map_err(|e| TextureError::LoadFailed(format!("{asset:?}: {e}")).into())
        };

        let set = Self {
            background: load(Asset::Background)?,
            avatar_wing_up: load(Asset::AvatarWingUp)?,
            avatar_wing_down: load(Asset::AvatarWingDown)?,
            pipe_top: load(Asset::PipeTop)?,
            pipe_bottom: load(Asset::PipeBottom)?,
        };
        debug!("Loaded sprite set");
        Ok(set)
    }
}
