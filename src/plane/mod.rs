/// Plane Module - Data-Oriented Programming (DOP) style
///
/// - plane_data.rs: one carousel segment, pure data
/// - plane_operations.rs: functions over a single plane (no neighbour access)
///

pub mod plane_data;
pub mod plane_operations;

pub use plane_data::{PlaneData, PlaneId};

pub use plane_operations::{
    copy_left_edge_from_right_edge,
    create_plane,
    edge_gap,
    map_to_quad,
    quad_mapping,
    reset_to_base,
    set_carousel_index,
    set_coords,
    translate_own_edge,
    world_corners,
};
