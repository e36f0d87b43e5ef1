use std::path::PathBuf;

/// Structural problems in a parsed model that make it unsafe to index into.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedModelError {
    #[error("material {material}: run {offset}+{count} exceeds face index buffer ({len})")]
    OutOfRange {
        material: usize,
        offset: usize,
        count: usize,
        len: usize,
    },
    #[error("material {material}: face vertex count {count} is not a multiple of 3")]
    NotTriangles { material: usize, count: usize },
    #[error("material {material}: index {position} names vertex {vertex} of {vertex_count}")]
    VertexOutOfRange {
        material: usize,
        position: usize,
        vertex: u32,
        vertex_count: usize,
    },
    #[error("material {material} does not exist ({material_count} materials)")]
    MaterialOutOfRange {
        material: usize,
        material_count: usize,
    },
    #[error("materials consume {consumed} face indices, but the face index buffer holds {len}")]
    UnusedIndices { consumed: usize, len: usize },
}

/// Failure reported by a [`crate::TextureLoader`].
#[derive(thiserror::Error, Debug)]
#[error("failed to load texture {}", .path.display())]
pub struct TextureLoadError {
    pub path: PathBuf,
    #[source]
    pub source: Box<dyn std::error::Error + Send + Sync>,
}

impl TextureLoadError {
    pub fn new(
        path: impl Into<PathBuf>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            path: path.into(),
            source: source.into(),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum PmxError {
    #[error("malformed model: {0}")]
    Malformed(#[from] MalformedModelError),
    #[error("material {material}: texture {index} out of range ({texture_count} textures)")]
    InvalidTextureIndex {
        material: usize,
        index: u32,
        texture_count: usize,
    },
    #[error(transparent)]
    TextureLoad(#[from] TextureLoadError),
}

pub type PmxResult<T> = Result<T, PmxError>;
