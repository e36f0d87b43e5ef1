use std::path::Path;

use pmx_core::{TextureData, TextureLoadError, TextureLoader};

/// Decodes textures from disk with the `image` crate.
#[derive(Copy, Clone, Debug, Default)]
pub struct ImageTextureLoader;

impl TextureLoader for ImageTextureLoader {
    fn load(&self, path: &Path) -> Result<TextureData, TextureLoadError> {
        let rgba = image::open(path)
            .map_err(|e| TextureLoadError::new(path, e))?
            .to_rgba8();
        Ok(TextureData {
            width: rgba.width(),
            height: rgba.height(),
            rgba: rgba.into_raw(),
        })
    }
}
