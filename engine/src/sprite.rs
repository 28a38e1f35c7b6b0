// Distributed under the GNU Affero General Public License v3.0 or later.
// See accompanying file LICENSE or https://www.gnu.org/licenses/agpl-3.0.html for details.

use std::path::Path;

use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas, RenderTarget, Texture, TextureCreator};

use crate::error::EngineError;

/// One decoded image on the GPU, exclusively owned.
///
/// A sprite is either loaded (texture present, dimensions match the source
/// image) or empty (no texture, dimensions zero). Loading replaces any prior
/// texture, freeing it first. An empty sprite renders nothing.
pub struct Sprite<'tc> {
    texture: Option<Texture<'tc>>,
    width: u32,
    height: u32,
}

impl<'tc> Sprite<'tc> {
    pub fn new() -> Self {
        Self {
            texture: None,
            width: 0,
            height: 0,
        }
    }

    /// Decodes a PNG and uploads it through `creator`. On failure the sprite
    /// is left empty.
    pub fn load_from_file<C>(
        &mut self,
        creator: &'tc TextureCreator<C>,
        path: &Path,
    ) -> Result<(), EngineError> {
        use sdl2::image::LoadTexture;

        self.free();

        let texture = creator
            .load_texture(path)
            .map_err(|message| EngineError::TextureLoad {
                path: path.to_path_buf(),
                message,
            })?;

        let query = texture.query();
        self.width = query.width;
        self.height = query.height;
        self.texture = Some(texture);
        Ok(())
    }

    /// Drops the texture and zeroes the dimensions. Idempotent.
    pub fn free(&mut self) {
        self.texture = None;
        self.width = 0;
        self.height = 0;
    }

    /// Draws the sprite at (x, y), sized to the full texture or to `clip`
    /// when one is given. Empty sprites draw nothing.
    pub fn render<T: RenderTarget>(
        &self,
        canvas: &mut Canvas<T>,
        x: i32,
        y: i32,
        clip: Option<Rect>,
    ) -> Result<(), EngineError> {
        let Some(texture) = self.texture.as_ref() else {
            return Ok(());
        };

        let (width, height) = match clip {
            Some(rect) => (rect.width(), rect.height()),
            None => (self.width, self.height),
        };
        let dst = Rect::new(x, y, width, height);

        canvas.copy(texture, clip, dst).map_err(EngineError::Sdl)
    }

    pub fn set_color_mod(&mut self, red: u8, green: u8, blue: u8) {
        if let Some(texture) = self.texture.as_mut() {
            texture.set_color_mod(red, green, blue);
        }
    }

    pub fn set_blend_mode(&mut self, blending: BlendMode) {
        if let Some(texture) = self.texture.as_mut() {
            texture.set_blend_mode(blending);
        }
    }

    pub fn set_alpha_mod(&mut self, alpha: u8) {
        if let Some(texture) = self.texture.as_mut() {
            texture.set_alpha_mod(alpha);
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_loaded(&self) -> bool {
        self.texture.is_some()
    }
}

impl Default for Sprite<'_> {
    fn default() -> Self {
        Self::new()
    }
}
