use bytemuck::{Pod, Zeroable};

pub mod asset;
pub mod options;
pub mod processor;
pub mod scene;
pub mod texture;

pub use asset::SegmentAsset;
pub use options::{BuildOptions, VertexLayout};
pub use processor::{
    FlatMaterial, MeshSegment, Pack, SegmentMaterial, TexturedMaterial, process_model,
};
pub use scene::{RenderHost, Scene, SceneLighting, load_scene};
pub use texture::ImageTextureLoader;

/// Interleaved vertex for GPU upload.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3], // 12 bytes
    pub normal: [f32; 3],   // 12 bytes
    pub uv: [f32; 2],       // 8 bytes, 32 total
}
