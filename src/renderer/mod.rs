//! Renderer Module - the seam to the host's compositing library
//!
//! The carousel consumes three capabilities: draw a textured quad from four
//! corners, draw a text label, and report texture dimensions.

pub mod renderer_data;
pub mod renderer_operations;
pub mod texture_loader;

use crate::error::CarouselResult;
use crate::plane::PlaneId;
use std::path::Path;

pub use renderer_data::{
    DisplayTransform, PlaneTextures, QuadMapping, QuadVertex, RecordingRenderer, TextureInfo,
};
pub use renderer_operations::{
    build_quad_vertices, carousel_to_screen, display_transform, local_to_carousel, plane_label,
    validate_texture,
};
pub use texture_loader::ImageTextureLoader;

/// Host drawing capability
pub trait QuadRenderer {
    /// Re-project a plane's texture onto the given quad
    fn render_quad(&mut self, mapping: &QuadMapping);

    /// Replace the text label attached to a plane
    fn render_text(&mut self, plane_id: PlaneId, text: &str);
}

/// Host texture capability
pub trait TextureLoader {
    fn load_texture(&mut self, path: &Path) -> CarouselResult<TextureInfo>;
}

impl QuadRenderer for RecordingRenderer {
    fn render_quad(&mut self, mapping: &QuadMapping) {
        self.map_calls += 1;
        self.quads.insert(mapping.plane_id, *mapping);
    }

    fn render_text(&mut self, plane_id: PlaneId, text: &str) {
        self.labels.insert(plane_id, text.to_string());
    }
}
