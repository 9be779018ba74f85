/// Rotation Module - continuous rotation through a fixed pool of planes
///
/// - rotation_data.rs: rotation state and per-tick report
/// - rotation_operations.rs: edge stepping, snapping, relinking, reindexing
///

pub mod rotation_data;
pub mod rotation_operations;

pub use rotation_data::{RotationData, RotationTickReport};

pub use rotation_operations::{
    advance_rotation,
    compute_step,
    create_rotation,
    recycle_head_plane,
    reindex_planes,
};
