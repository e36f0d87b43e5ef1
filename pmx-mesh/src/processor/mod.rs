pub mod builder;
pub mod material;
pub mod normals;
pub mod partitioner;
pub mod reassign;
pub mod types;

pub use builder::MeshBuilder;
pub use partitioner::partition;
pub use reassign::ReassignmentTable;
pub use types::*;

use pmx_core::{ModelDescription, PmxResult};

use crate::BuildOptions;

/// Split a model into per-material packs and build one mesh segment for each,
/// in material order.
pub fn process_model(
    model: &ModelDescription,
    options: &BuildOptions,
) -> PmxResult<Vec<MeshSegment>> {
    let start = std::time::Instant::now();

    let packs = partition(model)?;
    let builder = MeshBuilder::new(model, *options);
    let segments = builder.build_all(&packs)?;

    log::info!(
        "Built {} segments ({} vertices, {} triangles) in {:.2}ms",
        segments.len(),
        model.vertex_count(),
        model.triangle_count(),
        start.elapsed().as_secs_f64() * 1000.0
    );
    Ok(segments)
}
