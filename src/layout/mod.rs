/// Layout Module - the static fanned resting shape
///
/// - layout_data.rs: sweep parameters and the starting snapshot
/// - layout_operations.rs: skew sweeps, transitional closure, snapshot capture
///

pub mod layout_data;
pub mod layout_operations;

pub use layout_data::{CarouselSnapshot, LayoutParams, PlaneSnapshot};

pub use layout_operations::{
    apply_snapshot_slot,
    capture_snapshot,
    close_transitional_plane,
    compute_layout,
    skew_plane,
    snapshot_positions,
    update_carousel,
};
