use std::collections::BTreeMap;
use std::path::PathBuf;

use pmx_core::{ModelDescription, PmxResult, TextureData, TextureLoader};
use serde::{Deserialize, Serialize};

use crate::BuildOptions;
use crate::processor::{MeshSegment, process_model};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneLighting {
    pub ambient_color: [f32; 4],
    pub directional_color: [f32; 4],
    pub directional_direction: [f32; 3],
}

impl Default for SceneLighting {
    fn default() -> Self {
        Self {
            ambient_color: [0.1, 0.1, 0.1, 1.0],
            directional_color: [1.0, 1.0, 1.0, 1.0],
            directional_direction: [-2.0, -5.0, -2.0],
        }
    }
}

/// Consumes mesh segments and draws them.
pub trait RenderHost {
    type Error;

    fn set_lighting(&mut self, lighting: &SceneLighting) -> Result<(), Self::Error>;

    /// Called once per segment, in material order.
    fn add_segment(
        &mut self,
        segment: &MeshSegment,
        texture: Option<&TextureData>,
    ) -> Result<(), Self::Error>;
}

/// A fully loaded model: geometry plus decoded textures.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub lighting: SceneLighting,
    pub segments: Vec<MeshSegment>,
    /// One entry per distinct texture path.
    pub textures: BTreeMap<PathBuf, TextureData>,
}

impl Scene {
    pub fn texture_for(&self, segment: &MeshSegment) -> Option<&TextureData> {
        segment
            .material
            .texture_path()
            .and_then(|path| self.textures.get(path))
    }

    pub fn submit<H: RenderHost>(&self, host: &mut H) -> Result<(), H::Error> {
        host.set_lighting(&self.lighting)?;
        for segment in &self.segments {
            host.add_segment(segment, self.texture_for(segment))?;
        }
        Ok(())
    }
}

/// Build every segment and decode every texture they reference.
///
/// Any texture failure aborts the whole load.
pub fn load_scene<L: TextureLoader>(
    model: &ModelDescription,
    options: &BuildOptions,
    loader: &L,
) -> PmxResult<Scene> {
    let segments = process_model(model, options)?;

    let mut textures = BTreeMap::new();
    for path in segments.iter().filter_map(|s| s.material.texture_path()) {
        if textures.contains_key(path) {
            continue;
        }
        let texture = loader.load(path)?;
        log::debug!(
            "Loaded texture {} ({}x{})",
            path.display(),
            texture.width,
            texture.height
        );
        textures.insert(path.to_path_buf(), texture);
    }

    log::info!(
        "Scene ready: {} segments, {} textures",
        segments.len(),
        textures.len()
    );
    Ok(Scene {
        lighting: SceneLighting::default(),
        segments,
        textures,
    })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::path::Path;

    use pmx_core::{ModelMaterial, ModelVertex, PmxError, TextureLoadError};

    use super::*;

    fn model() -> ModelDescription {
        ModelDescription {
            vertices: vec![ModelVertex::default(); 4],
            materials: vec![
                ModelMaterial::textured(3, 0),
                ModelMaterial::untextured(3),
                ModelMaterial::textured(3, 0),
            ],
            face_vertex_index: vec![0, 1, 2, 1, 2, 3, 0, 2, 3],
            texture_files: vec!["tex.png".into()],
            base_folder: "/models/x".into(),
        }
    }

    #[derive(Default)]
    struct FakeLoader {
        requests: RefCell<Vec<PathBuf>>,
        fail: bool,
    }

    impl TextureLoader for FakeLoader {
        fn load(&self, path: &Path) -> Result<TextureData, TextureLoadError> {
            self.requests.borrow_mut().push(path.to_path_buf());
            if self.fail {
                return Err(TextureLoadError::new(path, "corrupt png"));
            }
            Ok(TextureData {
                width: 1,
                height: 1,
                rgba: vec![255, 0, 0, 255],
            })
        }
    }

    #[derive(Default)]
    struct RecordingHost {
        lighting: Option<SceneLighting>,
        added: Vec<(u32, bool)>,
    }

    impl RenderHost for RecordingHost {
        type Error = std::convert::Infallible;

        fn set_lighting(&mut self, lighting: &SceneLighting) -> Result<(), Self::Error> {
            self.lighting = Some(*lighting);
            Ok(())
        }

        fn add_segment(
            &mut self,
            segment: &MeshSegment,
            texture: Option<&TextureData>,
        ) -> Result<(), Self::Error> {
            self.added.push((segment.material_index, texture.is_some()));
            Ok(())
        }
    }

    #[test]
    fn decodes_each_texture_once() {
        let loader = FakeLoader::default();
        let scene = load_scene(&model(), &BuildOptions::default(), &loader).unwrap();

        assert_eq!(*loader.requests.borrow(), [PathBuf::from("/models/x/tex.png")]);
        assert_eq!(scene.textures.len(), 1);
        assert!(scene.texture_for(&scene.segments[0]).is_some());
        assert!(scene.texture_for(&scene.segments[1]).is_none());
    }

    #[test]
    fn texture_failure_fails_the_load() {
        let loader = FakeLoader {
            fail: true,
            ..Default::default()
        };
        let err = load_scene(&model(), &BuildOptions::default(), &loader).unwrap_err();
        let PmxError::TextureLoad(err) = err else {
            panic!("expected texture load error, got {err:?}");
        };
        assert_eq!(err.path, Path::new("/models/x/tex.png"));
        assert_eq!(err.source.to_string(), "corrupt png");
    }

    #[test]
    fn submit_hands_segments_over_in_material_order() {
        let scene = load_scene(&model(), &BuildOptions::default(), &FakeLoader::default()).unwrap();
        let mut host = RecordingHost::default();
        scene.submit(&mut host).unwrap();

        assert_eq!(host.lighting, Some(SceneLighting::default()));
        assert_eq!(host.added, [(0, true), (1, false), (2, true)]);
    }
}
