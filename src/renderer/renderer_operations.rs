//! Renderer Operations - Pure DOP Functions
//!
//! Conversions from carousel data to what a host renderer consumes.

use super::renderer_data::{DisplayTransform, QuadMapping, QuadVertex, TextureInfo};
use crate::error::{CarouselError, CarouselResult};
use crate::DisplayConfig;
use glam::Vec2;

/// UVs matching corner order top-left, top-right, bottom-right, bottom-left
const QUAD_UVS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

/// Reject textures that have not reported real dimensions yet
pub fn validate_texture(texture: &TextureInfo) -> CarouselResult<()> {
    if texture.width == 0 || texture.height == 0 {
        log::warn!(
            "[renderer_operations::validate_texture] '{}' reports {}x{}",
            texture.name,
            texture.width,
            texture.height
        );
        return Err(CarouselError::TextureNotReady {
            name: texture.name.clone(),
            width: texture.width,
            height: texture.height,
        });
    }
    Ok(())
}

/// Centre the carousel in the viewport at the configured scale
pub fn display_transform(display: &DisplayConfig) -> DisplayTransform {
    DisplayTransform {
        scale: display.scale,
        origin: Vec2::new(
            display.viewport_width as f32 / 2.0,
            display.viewport_height as f32 / 2.0,
        ),
    }
}

/// Map a texture-local corner into carousel space
pub fn local_to_carousel(mapping: &QuadMapping, local: Vec2) -> Vec2 {
    mapping.position - mapping.pivot + local
}

/// Map a carousel-space point into screen space
pub fn carousel_to_screen(display: &DisplayTransform, point: Vec2) -> Vec2 {
    display.origin + point * display.scale
}

/// Screen-space vertices for one quad, ready for a vertex buffer
pub fn build_quad_vertices(mapping: &QuadMapping, display: &DisplayTransform) -> [QuadVertex; 4] {
    let mut vertices = [QuadVertex {
        position: [0.0, 0.0],
        uv: [0.0, 0.0],
    }; 4];
    for (i, vertex) in vertices.iter_mut().enumerate() {
        let screen = carousel_to_screen(display, local_to_carousel(mapping, mapping.corners[i]));
        vertex.position = screen.to_array();
        vertex.uv = QUAD_UVS[i];
    }
    vertices
}

/// Debug label shown on each plane
pub fn plane_label(plane_id: usize, carousel_index: usize) -> String {
    format!("id: {}\ncId: {}", plane_id, carousel_index)
}
