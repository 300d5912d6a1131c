//! Embedded asset bytes, addressed by opaque handle.
//!
//! Assets are compiled into the binary; the rest of the crate only ever sees
//! the [`Asset`] enum and never touches file paths.

use strum_macros::EnumIter;

/// Handles for the compiled-in visual assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Asset {
    Background,
    AvatarWingUp,
    AvatarWingDown,
    PipeTop,
    PipeBottom,
    /// 8x8 bitmap glyph sheet used for all text rendering.
    GlyphSheet,
}

impl Asset {
    /// Raw bytes for this asset, embedded at compile time.
    pub fn bytes(self) -> &'static [u8] {
        match self {
            Asset::Background => include_bytes!("../assets/background.png"),
            Asset::AvatarWingUp => include_bytes!("../assets/bird_wing_up.png"),
            Asset::AvatarWingDown => include_bytes!("../assets/bird_wing_down.png"),
            Asset::PipeTop => include_bytes!("../assets/pipe_top.png"),
            Asset::PipeBottom => include_bytes!("../assets/pipe_bottom.png"),
            Asset::GlyphSheet => include_bytes!("../assets/glyphs.png"),
        }
    }
}
