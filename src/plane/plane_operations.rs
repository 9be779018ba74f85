//! Plane operations - DOP functions over a single plane
//!
//! Nothing here follows neighbour links. Cascading translations live in
//! ring_operations.rs where the whole plane array is available.

use super::plane_data::{PlaneData, PlaneId};
use crate::geometry::{
    base_rectangle, translate_corners, zero_corners, EdgeSide, QuadCorners, BOTTOM_LEFT,
    BOTTOM_RIGHT, TOP_LEFT, TOP_RIGHT,
};
use crate::renderer::{local_to_carousel, plane_label, QuadMapping, QuadRenderer, TextureInfo};
use glam::Vec2;

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Create a plane with the base rectangle of the frame texture
pub fn create_plane(
    id: PlaneId,
    starting_position: Vec2,
    frame: &TextureInfo,
    left_neighbour: Option<PlaneId>,
    right_neighbour: Option<PlaneId>,
) -> PlaneData {
    let base_size = frame.size();
    PlaneData {
        id,
        vector_coords: base_rectangle(base_size.x, base_size.y),
        delta_vector_coords: zero_corners(),
        position: starting_position,
        starting_position,
        base_size,
        pivot: base_size / 2.0,
        left_neighbour,
        right_neighbour,
        carousel_index: id,
        reached_carousel_end: false,
        visible: true,
    }
}

/// Restore the untransformed rectangle and starting placement, then re-map
pub fn reset_to_base<R: QuadRenderer + ?Sized>(plane: &mut PlaneData, renderer: &mut R) {
    plane.vector_coords = base_rectangle(plane.base_size.x, plane.base_size.y);
    plane.delta_vector_coords = zero_corners();
    plane.position = plane.starting_position;
    plane.visible = true;
    plane.reached_carousel_end = false;
    map_to_quad(plane, renderer);
}

// ============================================================================
// COORDINATES
// ============================================================================

/// Overwrite all corners; optionally re-map immediately
pub fn set_coords<R: QuadRenderer + ?Sized>(
    plane: &mut PlaneData,
    vector_coords: &QuadCorners,
    delta_vector_coords: &QuadCorners,
    remap: bool,
    renderer: &mut R,
) {
    plane.vector_coords = *vector_coords;
    plane.delta_vector_coords = *delta_vector_coords;
    if remap {
        map_to_quad(plane, renderer);
    }
}

/// Translate one edge of this plane only. Zero offsets are ignored.
/// Returns whether anything moved, which callers use to decide on cascading.
pub fn translate_own_edge(plane: &mut PlaneData, side: EdgeSide, offset: Vec2) -> bool {
    if offset == Vec2::ZERO {
        return false;
    }
    translate_corners(
        &mut plane.vector_coords,
        &mut plane.delta_vector_coords,
        side,
        offset,
    );
    true
}

/// Make `target`'s left edge coincide with `source`'s right edge
pub fn copy_left_edge_from_right_edge(target: &mut PlaneData, source: &PlaneData) {
    target.vector_coords[TOP_LEFT] = source.vector_coords[TOP_RIGHT];
    target.vector_coords[BOTTOM_LEFT] = source.vector_coords[BOTTOM_RIGHT];
    target.delta_vector_coords[TOP_LEFT] = source.delta_vector_coords[TOP_RIGHT];
    target.delta_vector_coords[BOTTOM_LEFT] = source.delta_vector_coords[BOTTOM_RIGHT];
}

/// Horizontal distance from the left edge to the right edge along the top
pub fn edge_gap(plane: &PlaneData) -> f32 {
    plane.vector_coords[TOP_RIGHT].x - plane.vector_coords[TOP_LEFT].x
}

// ============================================================================
// RENDERING
// ============================================================================

/// Snapshot of what the renderer needs for this plane
pub fn quad_mapping(plane: &PlaneData) -> QuadMapping {
    QuadMapping {
        plane_id: plane.id,
        corners: plane.vector_coords,
        position: plane.position,
        pivot: plane.pivot,
        visible: plane.visible,
    }
}

/// Corners in carousel space
pub fn world_corners(plane: &PlaneData) -> QuadCorners {
    let mapping = quad_mapping(plane);
    plane
        .vector_coords
        .map(|corner| local_to_carousel(&mapping, corner))
}

/// Hand the current corners to the renderer
pub fn map_to_quad<R: QuadRenderer + ?Sized>(plane: &PlaneData, renderer: &mut R) {
    renderer.render_quad(&quad_mapping(plane));
}

/// Assign a logical slot, refreshing the debug label when enabled
pub fn set_carousel_index<R: QuadRenderer + ?Sized>(
    plane: &mut PlaneData,
    carousel_index: usize,
    show_label: bool,
    renderer: &mut R,
) {
    plane.carousel_index = carousel_index;
    if show_label {
        renderer.render_text(plane.id, &plane_label(plane.id, carousel_index));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::RecordingRenderer;

    fn frame() -> TextureInfo {
        TextureInfo {
            name: "frame".to_string(),
            width: 200,
            height: 100,
        }
    }

    #[test]
    fn test_create_plane() {
        let plane = create_plane(2, Vec2::new(-400.0, 0.0), &frame(), Some(1), None);
        assert_eq!(plane.carousel_index, 2);
        assert_eq!(plane.pivot, Vec2::new(100.0, 50.0));
        assert_eq!(plane.vector_coords[BOTTOM_RIGHT], Vec2::new(200.0, 100.0));
        assert_eq!(plane.left_neighbour, Some(1));
        assert!(plane.visible);
    }

    #[test]
    fn test_zero_translation_is_noop() {
        let mut plane = create_plane(0, Vec2::ZERO, &frame(), None, None);
        let before = plane.clone();
        assert!(!translate_own_edge(&mut plane, EdgeSide::Left, Vec2::ZERO));
        assert_eq!(plane, before);
    }

    #[test]
    fn test_reset_to_base_restores_rectangle() {
        let mut renderer = RecordingRenderer::default();
        let mut plane = create_plane(1, Vec2::new(10.0, 0.0), &frame(), None, None);
        translate_own_edge(&mut plane, EdgeSide::Right, Vec2::new(-30.0, 5.0));
        plane.position.x = 99.0;
        plane.visible = false;
        plane.reached_carousel_end = true;

        reset_to_base(&mut plane, &mut renderer);

        let fresh = create_plane(1, Vec2::new(10.0, 0.0), &frame(), None, None);
        assert_eq!(plane, fresh);
        assert_eq!(renderer.map_calls, 1);
    }

    #[test]
    fn test_set_coords_remap() {
        let mut renderer = RecordingRenderer::default();
        let mut plane = create_plane(0, Vec2::ZERO, &frame(), None, None);
        let coords = base_rectangle(10.0, 10.0);
        let delta = [Vec2::ONE; 4];

        set_coords(&mut plane, &coords, &delta, false, &mut renderer);
        assert_eq!(renderer.map_calls, 0);
        set_coords(&mut plane, &coords, &delta, true, &mut renderer);
        assert_eq!(renderer.map_calls, 1);
        assert_eq!(renderer.quads[&0].corners, coords);
        assert_eq!(plane.delta_vector_coords, delta);
    }

    #[test]
    fn test_world_corners_use_pivot() {
        let plane = create_plane(0, Vec2::new(200.0, 0.0), &frame(), None, None);
        let corners = world_corners(&plane);
        assert_eq!(corners[TOP_LEFT], Vec2::new(100.0, -50.0));
        assert_eq!(corners[BOTTOM_RIGHT], Vec2::new(300.0, 50.0));
    }

    #[test]
    fn test_label_follows_slot() {
        let mut renderer = RecordingRenderer::default();
        let mut plane = create_plane(4, Vec2::ZERO, &frame(), None, None);
        set_carousel_index(&mut plane, 3, true, &mut renderer);
        assert_eq!(plane.carousel_index, 3);
        assert_eq!(renderer.labels[&4], "id: 4\ncId: 3");

        set_carousel_index(&mut plane, 2, false, &mut renderer);
        assert_eq!(renderer.labels[&4], "id: 4\ncId: 3");
    }
}
