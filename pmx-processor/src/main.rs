use anyhow::{Context, Result};
use clap::Parser;
use pmx_mesh::{
    BuildOptions, ImageTextureLoader, SceneLighting, SegmentAsset, VertexLayout, load_scene,
    process_model,
};
use std::path::PathBuf;

mod obj;

/// Build per-material mesh segments from a model and write them to an asset file.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Model to process (.obj).
    input: PathBuf,
    /// Segment asset to write.
    output: PathBuf,
    /// Give every segment only the vertices its faces use.
    #[arg(long)]
    compact: bool,
    /// Build segments on all cores.
    #[arg(long)]
    parallel: bool,
    /// Decode every referenced texture before writing, failing on the first broken one.
    #[arg(long)]
    decode_textures: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start_total = std::time::Instant::now();
    let model = obj::load_obj_model(&args.input)?;
    log::info!(
        "Loaded {} ({} vertices, {} materials) in {:.2}s",
        args.input.display(),
        model.vertex_count(),
        model.materials.len(),
        start_total.elapsed().as_secs_f32()
    );

    let options = BuildOptions {
        vertex_layout: if args.compact {
            VertexLayout::Compact
        } else {
            VertexLayout::Shared
        },
        parallel: args.parallel,
        ..Default::default()
    };

    let build_start = std::time::Instant::now();
    let (segments, lighting) = if args.decode_textures {
        let scene = load_scene(&model, &options, &ImageTextureLoader)
            .with_context(|| format!("Failed to load {}", args.input.display()))?;
        (scene.segments, scene.lighting)
    } else {
        let segments = process_model(&model, &options)
            .with_context(|| format!("Failed to build {}", args.input.display()))?;
        (segments, SceneLighting::default())
    };
    log::info!(
        "Built {} segments in {:.2}s",
        segments.len(),
        build_start.elapsed().as_secs_f32()
    );

    SegmentAsset::new(segments, lighting).save_to_file(&args.output)?;
    log::info!(
        "Saved to {} (total {:.2}s)",
        args.output.display(),
        start_total.elapsed().as_secs_f32()
    );
    Ok(())
}
