//! Quad data structures - Pure DOP
//!
//! NO METHODS beyond trivial accessors. Just data.
//! All transformations happen in quad_operations.rs

use glam::Vec2;
use serde::{Deserialize, Serialize};

pub const TOP_LEFT: usize = 0;
pub const TOP_RIGHT: usize = 1;
pub const BOTTOM_RIGHT: usize = 2;
pub const BOTTOM_LEFT: usize = 3;

/// Four corners in texture-local space, clockwise from top-left
pub type QuadCorners = [Vec2; 4];

/// Which vertical edge of a quad an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeSide {
    /// Top-left + bottom-left corners
    Left,
    /// Top-right + bottom-right corners
    Right,
}

impl EdgeSide {
    /// The side a neighbour shares with this one
    pub fn opposite(self) -> Self {
        match self {
            EdgeSide::Left => EdgeSide::Right,
            EdgeSide::Right => EdgeSide::Left,
        }
    }
}

/// Axis-aligned bounds in carousel space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }
}
