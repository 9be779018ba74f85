/// Geometry Module - Data-Oriented Programming (DOP) style
///
/// - quad_data.rs: corner layout, edge sides, bounds
/// - quad_operations.rs: pure functions over corner arrays
///

pub mod quad_data;
pub mod quad_operations;

pub use quad_data::{
    Bounds, EdgeSide, QuadCorners, BOTTOM_LEFT, BOTTOM_RIGHT, TOP_LEFT, TOP_RIGHT,
};

pub use quad_operations::{
    base_rectangle,
    bounds_of,
    corners_abs_diff_eq,
    edge_corners,
    translate_corners,
    zero_corners,
};
