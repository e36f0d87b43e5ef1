use pmx_core::{MalformedModelError, ModelDescription};

use crate::processor::types::Pack;

/// Split the flat face index buffer into one pack per material, in material order.
pub fn partition(model: &ModelDescription) -> Result<Vec<Pack>, MalformedModelError> {
    let faces = model.face_vertex_index.as_slice();
    let vertex_count = model.vertex_count();

    let (consumed, packs) = model.materials.iter().enumerate().try_fold(
        (0usize, Vec::with_capacity(model.materials.len())),
        |(offset, mut packs), (material, m)| {
            let count = m.face_vertex_count as usize;
            let plane_indices = offset
                .checked_add(count)
                .and_then(|end| faces.get(offset..end))
                .ok_or(MalformedModelError::OutOfRange {
                    material,
                    offset,
                    count,
                    len: faces.len(),
                })?;
            if count % 3 != 0 {
                return Err(MalformedModelError::NotTriangles { material, count });
            }
            if let Some((i, &vertex)) = plane_indices
                .iter()
                .enumerate()
                .find(|&(_, &v)| v as usize >= vertex_count)
            {
                return Err(MalformedModelError::VertexOutOfRange {
                    material,
                    position: offset + i,
                    vertex,
                    vertex_count,
                });
            }

            packs.push(Pack {
                material_index: material as u32,
                face_offset: offset,
                plane_indices: plane_indices.to_vec(),
                referenced_vertices: distinct_vertices(plane_indices),
            });
            Ok((offset + count, packs))
        },
    )?;

    if consumed != faces.len() {
        return Err(MalformedModelError::UnusedIndices {
            consumed,
            len: faces.len(),
        });
    }

    log::debug!(
        "Partitioned {} face indices into {} packs",
        consumed,
        packs.len()
    );
    Ok(packs)
}

fn distinct_vertices(indices: &[u32]) -> Vec<u32> {
    let mut vertices = indices.to_vec();
    vertices.sort_unstable();
    vertices.dedup();
    vertices
}
