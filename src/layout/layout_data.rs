//! Layout data structures - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in layout_operations.rs

use crate::geometry::QuadCorners;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Parameters of the outward skew sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutParams {
    /// Skew added per step (normalised, negative lifts the edge)
    pub skew: f32,
    /// Extra skew per step index
    pub skew_increment: f32,
    /// Horizontal squeeze multiplier at the first step
    pub width_scale: f32,
    /// Fraction of `width_scale` added per step
    pub width_increment: f32,
}

/// Captured geometry of one slot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneSnapshot {
    pub position: Vec2,
    pub vector_coords: QuadCorners,
    pub delta_vector_coords: QuadCorners,
}

/// Immutable per-slot geometry taken right after the first static layout.
/// Reset target and rotation target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselSnapshot {
    /// Indexed by slot
    pub slots: Vec<PlaneSnapshot>,
    /// Geometry of the transitional (last) slot, where relinked planes land
    pub right_end: PlaneSnapshot,
}
