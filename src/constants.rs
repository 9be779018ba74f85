//! Carousel tuning constants
//!
//! Defaults for layout, rotation and display. `CarouselConfig::default()`
//! reads from here so every host starts from the same shape.

/// Layout defaults for the static fan.
pub mod layout {
    /// Number of visible planes. Must be odd so one plane sits in the middle.
    pub const PLANE_COUNT: usize = 9;
    /// Skew added per step outward from the centre (normalised, negative lifts).
    pub const SKEW: f32 = -0.034;
    /// Extra skew per step index, accumulated on top of `SKEW`.
    pub const SKEW_INCREMENT: f32 = -0.02;
    /// Horizontal squeeze multiplier applied at the first step.
    pub const WIDTH_SCALE: f32 = 1.85;
    /// Fraction of `WIDTH_SCALE` added to the squeeze per step.
    pub const WIDTH_INCREMENT: f32 = 0.68;
}

/// Rotation defaults.
pub mod rotation {
    /// Fraction of a slot's width travelled per unit of frame delta.
    pub const SPEED: f32 = 0.03;
}

/// Display defaults.
pub mod display {
    pub const SCALE: f32 = 0.6;
    pub const VIEWPORT_WIDTH: u32 = 1280;
    pub const VIEWPORT_HEIGHT: u32 = 720;
    pub const FPS_MAX: u32 = 60;
}

/// Texture defaults.
pub mod textures {
    pub const FRAME_TEXTURE: &str = "images/wooden_plane_dummy.png";
    pub const FACE_TEXTURE: &str = "images/wooden_plane_front.jpg";
}
