use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::processor::MeshSegment;
use crate::scene::SceneLighting;

const MAGIC: [u8; 4] = *b"PMXS";
const VERSION: u32 = 1;

/// Built segments persisted to disk, so a host can skip the build step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SegmentAsset {
    pub magic: [u8; 4],
    pub version: u32,
    pub lighting: SceneLighting,
    pub segments: Vec<MeshSegment>,
}

impl SegmentAsset {
    pub fn new(segments: Vec<MeshSegment>, lighting: SceneLighting) -> Self {
        Self {
            magic: MAGIC,
            version: VERSION,
            lighting,
            segments,
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("Failed to create asset file: {:?}", path))?;
        let mut writer = BufWriter::with_capacity(1024 * 1024, file);
        bincode::serialize_into(&mut writer, self).context("Failed to serialize segments")?;
        writer.flush()?;
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open asset file: {:?}", path))?;
        let asset: Self = bincode::deserialize_from(BufReader::new(file))
            .with_context(|| format!("Failed to decode asset file: {:?}", path))?;

        if asset.magic != MAGIC {
            anyhow::bail!("Invalid segment asset magic. Did you re-process the model?");
        }
        if asset.version != VERSION {
            anyhow::bail!(
                "Unsupported segment asset version {} (expected {})",
                asset.version,
                VERSION
            );
        }
        Ok(asset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processor::{FlatMaterial, SegmentMaterial};

    fn segment() -> MeshSegment {
        MeshSegment {
            material_index: 0,
            positions: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            uvs: vec![[0.0, 0.0]; 3],
            normals: vec![[0.0, 0.0, 1.0]; 3],
            indices: vec![0, 1, 2],
            material: SegmentMaterial::Flat(FlatMaterial {
                diffuse_color: [0.5, 0.5, 0.5, 1.0],
            }),
        }
    }

    #[test]
    fn saved_asset_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.pmxs");
        let asset = SegmentAsset::new(vec![segment()], SceneLighting::default());

        asset.save_to_file(&path).unwrap();
        assert_eq!(SegmentAsset::load_from_file(&path).unwrap(), asset);
    }

    #[test]
    fn rejects_foreign_magic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.pmxs");
        let mut asset = SegmentAsset::new(vec![], SceneLighting::default());
        asset.magic = *b"LLAD";
        asset.save_to_file(&path).unwrap();

        let err = SegmentAsset::load_from_file(&path).unwrap_err();
        assert!(err.to_string().contains("magic"));
    }
}
