//! Texture loading backed by the `image` crate
//!
//! Only dimensions are read; pixel upload stays with the host renderer.

use super::renderer_data::TextureInfo;
use super::TextureLoader;
use crate::error::{CarouselError, CarouselResult};
use std::path::{Path, PathBuf};

/// Loads texture dimensions from image files under a root directory
#[derive(Debug, Clone, Default)]
pub struct ImageTextureLoader {
    pub root: PathBuf,
}

impl ImageTextureLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl TextureLoader for ImageTextureLoader {
    fn load_texture(&mut self, path: &Path) -> CarouselResult<TextureInfo> {
        let full_path = self.root.join(path);
        let (width, height) =
            image::image_dimensions(&full_path).map_err(|e| CarouselError::TextureLoad {
                path: full_path.display().to_string(),
                error: e.to_string(),
            })?;

        log::debug!(
            "[ImageTextureLoader::load_texture] {} -> {}x{}",
            full_path.display(),
            width,
            height
        );

        Ok(TextureInfo {
            name: path.display().to_string(),
            width,
            height,
        })
    }
}
