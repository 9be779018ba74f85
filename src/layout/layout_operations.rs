//! Layout operations - static fan and snapshot
//!
//! The sweep starts at the centre slot and walks outward in both directions.
//! Each step lifts and squeezes the outer edge a bit more than the last, and
//! the cascade drags the next plane's shared edge along with it.

use super::layout_data::{CarouselSnapshot, LayoutParams, PlaneSnapshot};
use crate::error::{CarouselError, CarouselResult, OptionExt};
use crate::plane::{copy_left_edge_from_right_edge, set_coords, PlaneData, PlaneId};
use crate::renderer::{QuadRenderer, TextureInfo};
use crate::ring::{
    map_all, mid_slot, plane, plane_mut, reset_ring, translate_edges_x, translate_edges_y,
    RingData,
};
use crate::CarouselConfig;
use glam::Vec2;

impl From<&CarouselConfig> for LayoutParams {
    fn from(config: &CarouselConfig) -> Self {
        LayoutParams {
            skew: config.skew,
            skew_increment: config.skew_increment,
            width_scale: config.width_scale,
            width_increment: config.width_increment,
        }
    }
}

/// Skew one edge of a plane.
///
/// `skew` is normalised against the face texture: the edge rises by
/// `skew * height` and moves inward by `|skew * width| * width_scale`.
pub fn skew_plane(
    ring: &mut RingData,
    id: PlaneId,
    skew: f32,
    width_scale: f32,
    face: &TextureInfo,
    skew_right_line: bool,
    cascade: bool,
) -> CarouselResult<()> {
    let face_size = face.size();
    let translate_y = skew * face_size.y;
    let translate_x = (skew * face_size.x).abs() * width_scale;

    let (left_x, right_x) = if skew_right_line {
        (0.0, -translate_x)
    } else {
        (translate_x, 0.0)
    };
    let (left_y, right_y) = if skew_right_line {
        (0.0, translate_y)
    } else {
        (translate_y, 0.0)
    };

    translate_edges_x(ring, id, left_x, right_x, cascade)?;
    translate_edges_y(ring, id, left_y, right_y, cascade)
}

/// Fan the planes out from the centre slot. Expects a freshly reset ring.
pub fn compute_layout<R: QuadRenderer + ?Sized>(
    ring: &mut RingData,
    params: &LayoutParams,
    face: &TextureInfo,
    renderer: &mut R,
) -> CarouselResult<()> {
    let plane_count = ring.plane_count;
    let mid = mid_slot(ring);

    // centre -> right
    let mut skew = 0.0;
    let mut width_scale = params.width_scale;
    for i in mid..plane_count {
        let step = (i - mid) as f32;
        skew_plane(ring, i, skew, width_scale, face, true, i + 1 < plane_count)?;
        skew += params.skew + params.skew_increment * step;
        width_scale += params.width_increment * params.width_scale;
    }

    // centre -> left
    let mut skew = 0.0;
    let mut width_scale = params.width_scale;
    for i in (0..=mid).rev() {
        let step = (mid - i) as f32;
        skew_plane(ring, i, skew, width_scale, face, false, true)?;
        skew += params.skew + params.skew_increment * step;
        width_scale += params.width_increment * params.width_scale;
    }

    close_transitional_plane(ring)?;
    map_all(ring, renderer);

    log::debug!(
        "[layout_operations::compute_layout] fanned {} planes around slot {}",
        plane_count,
        mid
    );
    Ok(())
}

/// Park the transitional plane on top of the last visible plane with a
/// zero-width quad whose left edge is that plane's right edge.
pub fn close_transitional_plane(ring: &mut RingData) -> CarouselResult<()> {
    let last_id = ring.plane_count.checked_sub(1).ok_or_carousel(|| {
        CarouselError::RingIntegrity("ring has no visible planes".to_string())
    })?;
    let transitional_id = ring.plane_count;
    let last: PlaneData = plane(ring, last_id)?.clone();

    let transitional = plane_mut(ring, transitional_id)?;
    transitional.position.x = last.position.x;
    transitional.vector_coords = last.vector_coords;
    transitional.delta_vector_coords = last.delta_vector_coords;
    copy_left_edge_from_right_edge(transitional, &last);
    Ok(())
}

/// Reset the ring and lay out the static fan
pub fn update_carousel<R: QuadRenderer + ?Sized>(
    ring: &mut RingData,
    params: &LayoutParams,
    face: &TextureInfo,
    snapshot: Option<&CarouselSnapshot>,
    show_labels: bool,
    renderer: &mut R,
) -> CarouselResult<()> {
    let positions = snapshot.map(snapshot_positions);
    reset_ring(ring, positions.as_deref(), show_labels, renderer);
    compute_layout(ring, params, face, renderer)
}

/// Capture every slot's geometry. Call once, right after the first layout.
pub fn capture_snapshot(ring: &RingData) -> CarouselResult<CarouselSnapshot> {
    let mut slots = Vec::with_capacity(ring.ordered.len());
    for &id in &ring.ordered {
        let p = plane(ring, id)?;
        slots.push(PlaneSnapshot {
            position: p.position,
            vector_coords: p.vector_coords,
            delta_vector_coords: p.delta_vector_coords,
        });
    }
    let right_end = *slots
        .last()
        .ok_or_carousel(|| CarouselError::SnapshotMissing)?;

    log::info!(
        "[layout_operations::capture_snapshot] captured {} slots",
        slots.len()
    );
    Ok(CarouselSnapshot { slots, right_end })
}

/// Starting positions by slot
pub fn snapshot_positions(snapshot: &CarouselSnapshot) -> Vec<Vec2> {
    snapshot.slots.iter().map(|s| s.position).collect()
}

/// Restore a plane to the captured geometry of `slot` and re-map it
pub fn apply_snapshot_slot<R: QuadRenderer + ?Sized>(
    plane: &mut PlaneData,
    snapshot: &CarouselSnapshot,
    slot: usize,
    renderer: &mut R,
) -> CarouselResult<()> {
    let captured = snapshot
        .slots
        .get(slot)
        .ok_or_carousel(|| CarouselError::SlotOutOfRange {
            slot,
            slots: snapshot.slots.len(),
        })?;
    plane.position.x = captured.position.x;
    set_coords(
        plane,
        &captured.vector_coords,
        &captured.delta_vector_coords,
        true,
        renderer,
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{
        base_rectangle, corners_abs_diff_eq, BOTTOM_LEFT, BOTTOM_RIGHT, TOP_LEFT, TOP_RIGHT,
    };
    use crate::plane::world_corners;
    use crate::renderer::RecordingRenderer;
    use crate::ring::create_ring;

    const EPSILON: f32 = 1e-3;

    fn texture(width: u32, height: u32) -> TextureInfo {
        TextureInfo {
            name: "plane".to_string(),
            width,
            height,
        }
    }

    fn default_params() -> LayoutParams {
        LayoutParams::from(&CarouselConfig::default())
    }

    fn laid_out_ring() -> (RingData, RecordingRenderer) {
        let mut renderer = RecordingRenderer::default();
        let frame = texture(300, 400);
        let mut ring = create_ring(9, &frame).expect("Failed to create ring");
        update_carousel(&mut ring, &default_params(), &frame, None, false, &mut renderer)
            .expect("Layout should succeed");
        (ring, renderer)
    }

    #[test]
    fn test_centre_plane_stays_unskewed() {
        let (ring, _) = laid_out_ring();
        assert_eq!(ring.planes[4].vector_coords, base_rectangle(300.0, 400.0));
        assert_eq!(ring.planes[4].delta_vector_coords, [Vec2::ZERO; 4]);
    }

    #[test]
    fn test_outer_plane_accumulates_four_skew_steps() {
        let (ring, _) = laid_out_ring();
        let params = default_params();
        // four steps outward: 4 * skew + increment * (0 + 1 + 2 + 3)
        let accumulated = 4.0 * params.skew + params.skew_increment * 6.0;
        assert!((accumulated - -0.256).abs() < 1e-6);

        let lift = ring.planes[8].delta_vector_coords[TOP_RIGHT].y;
        assert!((lift - accumulated * 400.0).abs() < EPSILON);
        assert!((ring.planes[0].delta_vector_coords[TOP_LEFT].y - accumulated * 400.0).abs() < EPSILON);
    }

    #[test]
    fn test_fan_is_symmetric() {
        let (ring, _) = laid_out_ring();
        for offset in 1..=4 {
            let left = &ring.planes[4 - offset];
            let right = &ring.planes[4 + offset];
            let left_width = left.vector_coords[TOP_RIGHT].x - left.vector_coords[TOP_LEFT].x;
            let right_width = right.vector_coords[TOP_RIGHT].x - right.vector_coords[TOP_LEFT].x;
            assert!((left_width - right_width).abs() < EPSILON);
            assert!(right_width > 0.0, "plane {} folded over", 4 + offset);
        }
    }

    #[test]
    fn test_shared_edges_coincide() {
        let (ring, _) = laid_out_ring();
        for p in &ring.planes {
            let Some(r) = p.right_neighbour else { continue };
            let n = &ring.planes[r];
            assert!(p.delta_vector_coords[TOP_RIGHT].abs_diff_eq(n.delta_vector_coords[TOP_LEFT], EPSILON));
            assert!(p.delta_vector_coords[BOTTOM_RIGHT].abs_diff_eq(n.delta_vector_coords[BOTTOM_LEFT], EPSILON));
            let pw = world_corners(p);
            let nw = world_corners(n);
            assert!(pw[TOP_RIGHT].abs_diff_eq(nw[TOP_LEFT], EPSILON), "planes {} / {}", p.id, r);
            assert!(pw[BOTTOM_RIGHT].abs_diff_eq(nw[BOTTOM_LEFT], EPSILON));
        }
    }

    #[test]
    fn test_transitional_plane_closes_ring() {
        let (ring, _) = laid_out_ring();
        let last = &ring.planes[8];
        let transitional = &ring.planes[9];
        assert_eq!(transitional.position, last.position);
        assert_eq!(transitional.vector_coords[TOP_LEFT], last.vector_coords[TOP_RIGHT]);
        assert_eq!(transitional.vector_coords[BOTTOM_LEFT], last.vector_coords[BOTTOM_RIGHT]);
        assert_eq!(transitional.delta_vector_coords[TOP_LEFT], last.delta_vector_coords[TOP_RIGHT]);
        assert!(!transitional.visible);
    }

    #[test]
    fn test_reset_then_layout_reproduces_snapshot() {
        let (mut ring, mut renderer) = laid_out_ring();
        let snapshot = capture_snapshot(&ring).expect("snapshot");
        let frame = texture(300, 400);

        update_carousel(&mut ring, &default_params(), &frame, Some(&snapshot), false, &mut renderer)
            .expect("Layout should succeed");

        for (slot, captured) in snapshot.slots.iter().enumerate() {
            let p = &ring.planes[ring.ordered[slot]];
            assert_eq!(p.position, captured.position);
            assert!(corners_abs_diff_eq(&p.vector_coords, &captured.vector_coords, 1e-6));
            assert!(corners_abs_diff_eq(&p.delta_vector_coords, &captured.delta_vector_coords, 1e-6));
        }
        assert_eq!(snapshot.right_end, snapshot.slots[9]);
    }

    #[test]
    fn test_layout_maps_every_plane_once() {
        let mut renderer = RecordingRenderer::default();
        let frame = texture(300, 400);
        let mut ring = create_ring(5, &frame).expect("Failed to create ring");
        compute_layout(&mut ring, &default_params(), &frame, &mut renderer).expect("layout");
        assert_eq!(renderer.map_calls, 6);
    }

    #[test]
    fn test_apply_snapshot_slot_out_of_range() {
        let (mut ring, mut renderer) = laid_out_ring();
        let snapshot = capture_snapshot(&ring).expect("snapshot");
        let result = apply_snapshot_slot(&mut ring.planes[0], &snapshot, 99, &mut renderer);
        assert!(matches!(result, Err(CarouselError::SlotOutOfRange { slot: 99, .. })));
    }
}
