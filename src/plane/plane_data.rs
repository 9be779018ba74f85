//! Plane data structures - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in plane_operations.rs (single plane) and
//! ring_operations.rs (anything touching neighbours).

use crate::geometry::QuadCorners;
use glam::Vec2;

/// Stable plane identity, also its index in the ring's plane array
pub type PlaneId = usize;

/// One carousel segment
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneData {
    /// Permanent identity (0..=plane_count)
    pub id: PlaneId,

    /// Texture-local corners, mutated to fake perspective
    pub vector_coords: QuadCorners,

    /// Cumulative edge offsets, moved in lockstep with `vector_coords`
    pub delta_vector_coords: QuadCorners,

    /// Container position in carousel space
    pub position: Vec2,

    /// Position assigned at construction, restored on reset
    pub starting_position: Vec2,

    /// Untransformed size (frame texture dimensions)
    pub base_size: Vec2,

    /// Container pivot, the centre of the base rectangle
    pub pivot: Vec2,

    /// Ring links (indices into the ring's plane array)
    pub left_neighbour: Option<PlaneId>,
    pub right_neighbour: Option<PlaneId>,

    /// Current logical slot, distinct from `id`
    pub carousel_index: usize,

    /// Set when the trailing edge snapped shut this frame
    pub reached_carousel_end: bool,

    pub visible: bool,
}
