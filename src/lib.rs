// Hearth Carousel - Data-Oriented Programming (DOP) Architecture
//
// A pseudo-3D carousel: a ring of textured quads whose edges are skewed and
// squeezed outward from a centre slot, and rotated by walking edges along a
// captured snapshot.
// - *_data.rs files hold plain data
// - *_operations.rs files hold pure functions over that data
// - CarouselState is the one context that owns everything

// Constants module
pub mod constants;

// Core modules
pub mod error;
pub mod geometry;
pub mod plane;
pub mod ring;

// Carousel systems
pub mod animation;
pub mod input;
pub mod layout;
pub mod rotation;

// Host seam
pub mod renderer;

pub mod carousel_state;

use serde::{Deserialize, Serialize};
use std::path::Path;

pub use animation::{AnimationTask, FrameClock, ManualClock, TaskHandle};
pub use carousel_state::{load_plane_textures, CarouselState};
pub use error::{CarouselError, CarouselResult, OptionExt};
pub use geometry::{Bounds, EdgeSide, QuadCorners};
pub use input::{InputCommand, InputEvent, Key};
pub use layout::{CarouselSnapshot, LayoutParams, PlaneSnapshot};
pub use plane::{PlaneData, PlaneId};
pub use renderer::{
    ImageTextureLoader, PlaneTextures, QuadMapping, QuadRenderer, QuadVertex, RecordingRenderer,
    TextureInfo, TextureLoader,
};
pub use ring::RingData;
pub use rotation::{RotationData, RotationTickReport};

/// Where and how large the carousel is drawn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub scale: f32,
    pub viewport_width: u32,
    pub viewport_height: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            scale: constants::display::SCALE,
            viewport_width: constants::display::VIEWPORT_WIDTH,
            viewport_height: constants::display::VIEWPORT_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Visible planes; must be odd
    pub plane_count: usize,
    pub rotation_speed: f32,
    pub skew: f32,
    pub skew_increment: f32,
    pub width_scale: f32,
    pub width_increment: f32,
    pub frame_texture: String,
    pub face_texture: String,
    /// Emit "id / slot" debug labels through the renderer
    pub show_labels: bool,
    pub fps_max: u32,
    pub display: DisplayConfig,
}

fn invalid(field: &str, value: impl ToString, reason: &str) -> CarouselError {
    CarouselError::InvalidConfig {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

impl CarouselConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> CarouselResult<()> {
        if self.plane_count == 0 || self.plane_count % 2 == 0 {
            return Err(invalid(
                "plane_count",
                self.plane_count,
                "must be odd so one plane sits in the centre slot",
            ));
        }

        if !self.rotation_speed.is_finite() || self.rotation_speed <= 0.0 {
            return Err(invalid(
                "rotation_speed",
                self.rotation_speed,
                "must be a positive finite number",
            ));
        }

        for (field, value) in [
            ("skew", self.skew),
            ("skew_increment", self.skew_increment),
            ("width_increment", self.width_increment),
        ] {
            if !value.is_finite() {
                return Err(invalid(field, value, "must be finite"));
            }
        }

        if !self.width_scale.is_finite() || self.width_scale <= 0.0 {
            return Err(invalid("width_scale", self.width_scale, "must be positive"));
        }

        if !self.display.scale.is_finite() || self.display.scale <= 0.0 {
            return Err(invalid("display.scale", self.display.scale, "must be positive"));
        }

        if self.fps_max == 0 {
            return Err(invalid("fps_max", self.fps_max, "cannot be 0"));
        }

        log::info!("[CarouselConfig] Configuration validated successfully");
        Ok(())
    }

    /// Parse from TOML text. Missing keys fall back to defaults.
    pub fn from_toml_str(text: &str) -> CarouselResult<Self> {
        let config: CarouselConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file
    pub fn load(path: impl AsRef<Path>) -> CarouselResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| CarouselError::Io {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        log::info!("[CarouselConfig::load] Loading {}", path.display());
        Self::from_toml_str(&text)
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            plane_count: constants::layout::PLANE_COUNT,
            rotation_speed: constants::rotation::SPEED,
            skew: constants::layout::SKEW,
            skew_increment: constants::layout::SKEW_INCREMENT,
            width_scale: constants::layout::WIDTH_SCALE,
            width_increment: constants::layout::WIDTH_INCREMENT,
            frame_texture: constants::textures::FRAME_TEXTURE.to_string(),
            face_texture: constants::textures::FACE_TEXTURE.to_string(),
            show_labels: true,
            fps_max: constants::display::FPS_MAX,
            display: DisplayConfig::default(),
        }
    }
}
