pub mod error;
pub mod model;
pub mod texture;

pub use error::{MalformedModelError, PmxError, PmxResult, TextureLoadError};
pub use model::{ModelDescription, ModelMaterial, ModelVertex, NO_TEXTURE};
pub use texture::{TextureData, TextureLoader};
