use pmx_core::{MalformedModelError, ModelDescription, PmxError, PmxResult};

use crate::processor::types::{FlatMaterial, SegmentMaterial, TexturedMaterial};

const REFLECTIVE_COLOR: [f32; 4] = [1.0, 0.5, 0.5, 1.0];
const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
const SPECULAR_SHININESS: f32 = 10.0;

/// Pick a flat or textured material for `material_index`.
///
/// The texture itself is not decoded here; see [`crate::scene::load_scene`].
pub fn select_material(
    model: &ModelDescription,
    material_index: usize,
    flat_color: [f32; 4],
) -> PmxResult<SegmentMaterial> {
    let material = model.materials.get(material_index).ok_or(
        MalformedModelError::MaterialOutOfRange {
            material: material_index,
            material_count: model.materials.len(),
        },
    )?;
    let Some(index) = material.texture() else {
        return Ok(SegmentMaterial::Flat(FlatMaterial {
            diffuse_color: flat_color,
        }));
    };

    let (relative_path, texture_path) = model
        .texture_files
        .get(index as usize)
        .zip(model.texture_path(index))
        .ok_or(PmxError::InvalidTextureIndex {
            material: material_index,
            index,
            texture_count: model.texture_files.len(),
        })?;

    Ok(SegmentMaterial::Textured(TexturedMaterial {
        base_folder: model.base_folder.clone(),
        relative_path: relative_path.clone(),
        texture_path,
        reflective_color: REFLECTIVE_COLOR,
        specular_color: WHITE,
        ambient_color: WHITE,
        specular_shininess: SPECULAR_SHININESS,
    }))
}
