//! Rotation data structures - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in rotation_operations.rs

use crate::plane::PlaneId;
use glam::Vec2;

/// Rotation state carried between ticks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationData {
    /// Fraction of a slot's width travelled per unit of frame delta
    pub speed: f32,
    /// Ticks advanced since creation
    pub ticks: u64,
    /// End-of-segment relinks since creation
    pub relinks: u64,
}

/// What happened during one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RotationTickReport {
    /// Planes whose trailing edge snapped shut, with the clamped step applied
    pub snapped: Vec<(PlaneId, Vec2)>,
    /// Planes moved to the far end of the ring this tick
    pub relinked: Vec<PlaneId>,
}
