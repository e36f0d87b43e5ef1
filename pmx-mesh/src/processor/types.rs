use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::MeshVertex;

/// The face indices belonging to one material.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pack {
    pub material_index: u32,
    /// Position of the first index in the model's face index buffer.
    pub face_offset: usize,
    /// Triangle list in parsed order; winding is preserved.
    pub plane_indices: Vec<u32>,
    /// Distinct values of `plane_indices`, ascending.
    pub referenced_vertices: Vec<u32>,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlatMaterial {
    pub diffuse_color: [f32; 4],
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TexturedMaterial {
    pub base_folder: PathBuf,
    pub relative_path: PathBuf,
    /// `base_folder` joined with `relative_path`.
    pub texture_path: PathBuf,
    pub reflective_color: [f32; 4],
    pub specular_color: [f32; 4],
    pub ambient_color: [f32; 4],
    pub specular_shininess: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SegmentMaterial {
    Flat(FlatMaterial),
    Textured(TexturedMaterial),
}

impl SegmentMaterial {
    pub fn texture_path(&self) -> Option<&std::path::Path> {
        match self {
            SegmentMaterial::Flat(_) => None,
            SegmentMaterial::Textured(t) => Some(&t.texture_path),
        }
    }
}

/// One indexed triangle mesh ready for a render host.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeshSegment {
    pub material_index: u32,
    pub positions: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
    pub material: SegmentMaterial,
}

impl MeshSegment {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn interleaved(&self) -> Vec<MeshVertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .zip(&self.uvs)
            .map(|((&position, &normal), &uv)| MeshVertex {
                position,
                normal,
                uv,
            })
            .collect()
    }
}
