use std::borrow::Cow;

use glam::Vec3;
use pmx_core::{MalformedModelError, ModelDescription, PmxResult};
use rayon::prelude::*;

use crate::options::{BuildOptions, VertexLayout};
use crate::processor::material::select_material;
use crate::processor::normals::compute_normals;
use crate::processor::reassign::{ReassignmentTable, Unmapped};
use crate::processor::types::{MeshSegment, Pack};

/// Turns packs into mesh segments. Packs are independent of each other,
/// so one builder can be shared across threads.
pub struct MeshBuilder<'a> {
    model: &'a ModelDescription,
    options: BuildOptions,
    /// Model positions after `options.transform`, in global order.
    positions: Vec<[f32; 3]>,
    shared_table: ReassignmentTable,
}

impl<'a> MeshBuilder<'a> {
    pub fn new(model: &'a ModelDescription, options: BuildOptions) -> Self {
        let positions = model
            .vertices
            .iter()
            .map(|v| (options.transform * Vec3::from_array(v.position)).to_array())
            .collect();

        Self {
            model,
            options,
            positions,
            shared_table: ReassignmentTable::identity(model.vertex_count()),
        }
    }

    pub fn reassignment_table(&self, pack: &Pack) -> Cow<'_, ReassignmentTable> {
        match self.options.vertex_layout {
            VertexLayout::Shared => Cow::Borrowed(&self.shared_table),
            VertexLayout::Compact => Cow::Owned(ReassignmentTable::compact(
                self.model.vertex_count(),
                &pack.referenced_vertices,
            )),
        }
    }

    pub fn build_segment(&self, pack: &Pack) -> PmxResult<MeshSegment> {
        let material_index = pack.material_index as usize;
        let table = self.reassignment_table(pack);

        let indices = table.remap(&pack.plane_indices).map_err(
            |Unmapped { position, vertex }| MalformedModelError::VertexOutOfRange {
                material: material_index,
                position: pack.face_offset + position,
                vertex,
                vertex_count: self.model.vertex_count(),
            },
        )?;

        let positions: Vec<[f32; 3]> = table
            .sources()
            .iter()
            .map(|&g| self.positions[g as usize])
            .collect();
        let uvs = table
            .sources()
            .iter()
            .map(|&g| self.model.vertices[g as usize].uv)
            .collect();
        let normals = compute_normals(&positions, &indices);
        let material = select_material(self.model, material_index, self.options.flat_color)?;

        log::debug!(
            "Material {}: {} vertices, {} triangles",
            material_index,
            positions.len(),
            indices.len() / 3
        );

        Ok(MeshSegment {
            material_index: pack.material_index,
            positions,
            uvs,
            normals,
            indices,
            material,
        })
    }

    /// Build every pack. Segment order always follows pack order.
    pub fn build_all(&self, packs: &[Pack]) -> PmxResult<Vec<MeshSegment>> {
        if self.options.parallel {
            packs.par_iter().map(|pack| self.build_segment(pack)).collect()
        } else {
            packs.iter().map(|pack| self.build_segment(pack)).collect()
        }
    }
}
