//! Renderer Data - Pure DOP
//!
//! Data handed across the rendering seam. The carousel never draws; it only
//! describes what a host should draw.

use crate::geometry::QuadCorners;
use crate::plane::PlaneId;
use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use std::collections::HashMap;

/// Texture dimensions as reported by the host's loader
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureInfo {
    pub name: String,
    pub width: u32,
    pub height: u32,
}

impl TextureInfo {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

/// The two textures every plane is built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaneTextures {
    /// Frame texture: defines the base rectangle and pivot of each plane
    pub frame: TextureInfo,
    /// Face texture: drawn inside the quad, drives skew magnitudes
    pub face: TextureInfo,
}

/// One plane's projection request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadMapping {
    pub plane_id: PlaneId,
    /// Texture-local corners, top-left clockwise
    pub corners: QuadCorners,
    /// Container position in carousel space
    pub position: Vec2,
    /// Container pivot (frame texture centre)
    pub pivot: Vec2,
    pub visible: bool,
}

/// Carousel space -> screen space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayTransform {
    pub scale: f32,
    /// Screen position of the carousel origin
    pub origin: Vec2,
}

/// GPU-ready quad vertex (screen space position + texture coordinate)
/// Must match shader layout exactly
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct QuadVertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
}

/// Headless renderer that remembers the latest mapping and label per plane
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub quads: HashMap<PlaneId, QuadMapping>,
    pub labels: HashMap<PlaneId, String>,
    pub map_calls: usize,
}
