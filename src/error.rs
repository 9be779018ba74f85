//! Error handling for Hearth Carousel
//!
//! The geometry core has no recoverable failures at frame time. Errors come
//! from construction preconditions (config, textures) and from topology checks.

/// Main error type for Hearth Carousel
#[derive(Debug, thiserror::Error)]
pub enum CarouselError {
    // Configuration Errors
    #[error("Invalid config: {field} = {value} ({reason})")]
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },
    #[error("Config parse error: {0}")]
    ConfigParse(String),

    // Resource Errors
    #[error("Texture '{name}' not ready: {width}x{height}")]
    TextureNotReady { name: String, width: u32, height: u32 },
    #[error("Texture load failed for {path}: {error}")]
    TextureLoad { path: String, error: String },
    #[error("IO error for {path}: {error}")]
    Io { path: String, error: String },

    // Topology Errors
    #[error("Plane not found: {id}")]
    PlaneNotFound { id: usize },
    #[error("Slot {slot} out of range (ring has {slots} slots)")]
    SlotOutOfRange { slot: usize, slots: usize },
    #[error("Ring integrity violated: {0}")]
    RingIntegrity(String),
    #[error("Starting snapshot has not been captured")]
    SnapshotMissing,
}

/// Type alias for Results in Hearth Carousel
pub type CarouselResult<T> = Result<T, CarouselError>;

impl From<toml::de::Error> for CarouselError {
    fn from(error: toml::de::Error) -> Self {
        CarouselError::ConfigParse(error.to_string())
    }
}

impl From<image::ImageError> for CarouselError {
    fn from(error: image::ImageError) -> Self {
        CarouselError::TextureLoad {
            path: String::new(),
            error: error.to_string(),
        }
    }
}

/// Convert Option to Result with context
pub trait OptionExt<T> {
    fn ok_or_carousel<F>(self, f: F) -> CarouselResult<T>
    where
        F: FnOnce() -> CarouselError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_carousel<F>(self, f: F) -> CarouselResult<T>
    where
        F: FnOnce() -> CarouselError,
    {
        self.ok_or_else(f)
    }
}
