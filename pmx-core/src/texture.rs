use std::path::Path;

use crate::TextureLoadError;

/// Decoded RGBA8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Turns a texture path into pixel data.
pub trait TextureLoader {
    fn load(&self, path: &Path) -> Result<TextureData, TextureLoadError>;
}
