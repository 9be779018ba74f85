/// Ring Module - Data-Oriented Programming (DOP) style
///
/// The ring owns every plane and links them by index, never by reference.
/// - ring_data.rs: plane array + slot-order view
/// - ring_operations.rs: construction, cascading translations, relinking
///

pub mod ring_data;
pub mod ring_operations;

pub use ring_data::RingData;

pub use ring_operations::{
    // Construction
    create_ring,
    mid_slot,
    transitional_slot,
    ring_len,

    // Access
    plane,
    plane_mut,
    plane_at_slot,
    head_plane,
    tail_plane,

    // Translation
    translate_edge,
    translate_edges,
    translate_edges_x,
    translate_edges_y,
    translate_plane_x,
    translate_plane_y,

    // Topology
    reset_ring,
    relink_to_tail,
    rebuild_order,
    verify_ring_integrity,

    // Rendering
    map_all,
    compute_backdrop,
};
