use std::path::PathBuf;

/// Texture index meaning "this material has no texture".
pub const NO_TEXTURE: u32 = u32::MAX;

#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct ModelVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ModelMaterial {
    /// Number of entries this material owns in the face index buffer.
    pub face_vertex_count: u32,
    pub texture_index: u32,
}

impl ModelMaterial {
    pub fn untextured(face_vertex_count: u32) -> Self {
        Self {
            face_vertex_count,
            texture_index: NO_TEXTURE,
        }
    }

    pub fn textured(face_vertex_count: u32, texture_index: u32) -> Self {
        Self {
            face_vertex_count,
            texture_index,
        }
    }

    pub fn texture(&self) -> Option<u32> {
        (self.texture_index != NO_TEXTURE).then_some(self.texture_index)
    }
}

/// A parsed polygon model, as handed over by a file parser.
///
/// Face indices are stored flat; material `i` owns the run of
/// `materials[i].face_vertex_count` indices following the runs of all
/// materials before it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModelDescription {
    pub vertices: Vec<ModelVertex>,
    pub materials: Vec<ModelMaterial>,
    pub face_vertex_index: Vec<u32>,
    pub texture_files: Vec<PathBuf>,
    pub base_folder: PathBuf,
}

impl ModelDescription {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.materials
            .iter()
            .map(|m| m.face_vertex_count as usize)
            .sum::<usize>()
            / 3
    }

    /// Absolute path of a texture, or `None` if the index is out of range.
    pub fn texture_path(&self, index: u32) -> Option<PathBuf> {
        self.texture_files
            .get(index as usize)
            .map(|file| self.base_folder.join(file))
    }
}
