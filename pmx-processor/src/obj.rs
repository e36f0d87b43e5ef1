use anyhow::{Context, Result};
use pmx_core::{ModelDescription, ModelMaterial, ModelVertex, NO_TEXTURE};
use std::path::{Path, PathBuf};

/// Load an OBJ file (and its MTL library) as a model description.
///
/// Every OBJ model becomes one material run. Models sharing a diffuse
/// texture share a texture index.
pub fn load_obj_model(path: &Path) -> Result<ModelDescription> {
    let load_options = tobj::LoadOptions {
        single_index: true,
        triangulate: true,
        ..Default::default()
    };
    let (models, materials) = tobj::load_obj(path, &load_options)
        .with_context(|| format!("Failed to load OBJ file: {}", path.display()))?;

    let materials = materials.unwrap_or_else(|e| {
        log::warn!("No material library for {}: {}", path.display(), e);
        Vec::new()
    });

    let mut description = ModelDescription {
        base_folder: path.parent().map(Path::to_path_buf).unwrap_or_default(),
        ..Default::default()
    };

    for model in &models {
        let mesh = &model.mesh;
        let index_offset = description.vertices.len() as u32;

        for i in 0..mesh.positions.len() / 3 {
            let uv = if mesh.texcoords.len() >= (i + 1) * 2 {
                [mesh.texcoords[i * 2], mesh.texcoords[i * 2 + 1]]
            } else {
                [0.0, 0.0]
            };
            description.vertices.push(ModelVertex {
                position: [
                    mesh.positions[i * 3],
                    mesh.positions[i * 3 + 1],
                    mesh.positions[i * 3 + 2],
                ],
                uv,
            });
        }
        description
            .face_vertex_index
            .extend(mesh.indices.iter().map(|&index| index + index_offset));

        let diffuse_texture = mesh
            .material_id
            .and_then(|id| materials.get(id))
            .and_then(|m| m.diffuse_texture.as_deref());
        let texture_index = match diffuse_texture {
            Some(file) => texture_slot(&mut description.texture_files, file),
            None => NO_TEXTURE,
        };

        log::debug!(
            "OBJ model {:?}: {} vertices, {} triangles",
            model.name,
            mesh.positions.len() / 3,
            mesh.indices.len() / 3
        );
        description.materials.push(ModelMaterial {
            face_vertex_count: mesh.indices.len() as u32,
            texture_index,
        });
    }

    Ok(description)
}

fn texture_slot(texture_files: &mut Vec<PathBuf>, file: &str) -> u32 {
    let file = PathBuf::from(file);
    match texture_files.iter().position(|f| *f == file) {
        Some(index) => index as u32,
        None => {
            texture_files.push(file);
            (texture_files.len() - 1) as u32
        }
    }
}
