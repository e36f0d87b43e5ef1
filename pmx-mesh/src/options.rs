use glam::Quat;

/// Neutral gray used for materials without a texture.
pub const DEFAULT_FLAT_COLOR: [f32; 4] = [160.0 / 255.0, 160.0 / 255.0, 160.0 / 255.0, 1.0];

/// How global vertex indices map into a segment's vertex buffer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum VertexLayout {
    /// Every segment carries the whole vertex array; indices pass through unchanged.
    #[default]
    Shared,
    /// Every segment carries only the vertices its faces reference.
    Compact,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BuildOptions {
    /// Applied to every position. Corrects the authoring tool's axis convention.
    pub transform: Quat,
    pub flat_color: [f32; 4],
    pub vertex_layout: VertexLayout,
    /// Build packs on the rayon pool. Output order is unaffected.
    pub parallel: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            transform: Quat::from_rotation_y(std::f32::consts::PI),
            flat_color: DEFAULT_FLAT_COLOR,
            vertex_layout: VertexLayout::Shared,
            parallel: false,
        }
    }
}
