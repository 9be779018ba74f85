//! Quad operations - Pure DOP functions
//!
//! All functions take corner arrays and either return new data or mutate the
//! arrays handed to them. No plane or ring knowledge lives here.

use super::quad_data::{Bounds, EdgeSide, QuadCorners, BOTTOM_LEFT, BOTTOM_RIGHT, TOP_LEFT, TOP_RIGHT};
use glam::Vec2;

/// Untransformed rectangle for a texture of the given size
pub fn base_rectangle(width: f32, height: f32) -> QuadCorners {
    [
        Vec2::new(0.0, 0.0),
        Vec2::new(width, 0.0),
        Vec2::new(width, height),
        Vec2::new(0.0, height),
    ]
}

/// All-zero corner offsets
pub fn zero_corners() -> QuadCorners {
    [Vec2::ZERO; 4]
}

/// Corner indices (top, bottom) making up an edge
pub fn edge_corners(side: EdgeSide) -> (usize, usize) {
    match side {
        EdgeSide::Left => (TOP_LEFT, BOTTOM_LEFT),
        EdgeSide::Right => (TOP_RIGHT, BOTTOM_RIGHT),
    }
}

/// Translate both corners of an edge, keeping the delta corners in lockstep
pub fn translate_corners(
    coords: &mut QuadCorners,
    delta: &mut QuadCorners,
    side: EdgeSide,
    offset: Vec2,
) {
    let (top, bottom) = edge_corners(side);
    coords[top] += offset;
    coords[bottom] += offset;
    delta[top] += offset;
    delta[bottom] += offset;
}

/// Bounding box over a set of corners. Returns None for an empty set.
pub fn bounds_of<'a, I>(corners: I) -> Option<Bounds>
where
    I: IntoIterator<Item = &'a Vec2>,
{
    let mut iter = corners.into_iter();
    let first = *iter.next()?;
    let (min, max) = iter.fold((first, first), |(min, max), c| (min.min(*c), max.max(*c)));
    Some(Bounds { min, max })
}

/// Compare two quads corner by corner within `epsilon`
pub fn corners_abs_diff_eq(a: &QuadCorners, b: &QuadCorners, epsilon: f32) -> bool {
    a.iter().zip(b.iter()).all(|(p, q)| p.abs_diff_eq(*q, epsilon))
}
