//! Rotation operations
//!
//! Every slot's trailing (right) edge walks toward its leading (left) edge
//! along the direction captured in the snapshot. The head plane has nothing
//! on its left, so it collapses; when it closes it is moved behind the tail,
//! every slot shifts down by one, and the whole ring snaps back to the
//! snapshot shape for its new slots.
//!
//! Within a tick all edge steps happen before any relink. Relinking mid-sweep
//! would hand later planes stale neighbour links.

use super::rotation_data::{RotationData, RotationTickReport};
use crate::error::CarouselResult;
use crate::geometry::{EdgeSide, TOP_LEFT, TOP_RIGHT};
use crate::layout::{apply_snapshot_slot, CarouselSnapshot, PlaneSnapshot};
use crate::plane::{copy_left_edge_from_right_edge, set_carousel_index, PlaneData, PlaneId};
use crate::renderer::QuadRenderer;
use crate::ring::{
    map_all, plane, plane_at_slot, plane_mut, rebuild_order, relink_to_tail, translate_edge,
    verify_ring_integrity, RingData,
};
use glam::Vec2;

/// Create rotation state
pub fn create_rotation(speed: f32) -> RotationData {
    RotationData {
        speed,
        ticks: 0,
        relinks: 0,
    }
}

/// This tick's right-edge step for one plane, and whether it snapped shut.
///
/// The step follows the captured slot's top edge (left corner minus right
/// corner). A plane with no left neighbour may not overshoot its own left
/// edge: the step is clamped to exactly close the gap.
pub fn compute_step(
    plane: &PlaneData,
    captured: &PlaneSnapshot,
    delta_time: f32,
    speed: f32,
) -> (Vec2, bool) {
    let translation = captured.vector_coords[TOP_LEFT] - captured.vector_coords[TOP_RIGHT];
    let step = translation * delta_time * speed;

    let overshoots = plane.vector_coords[TOP_RIGHT].x + step.x <= plane.vector_coords[TOP_LEFT].x;
    if overshoots && plane.left_neighbour.is_none() {
        let closing = plane.vector_coords[TOP_LEFT] - plane.vector_coords[TOP_RIGHT];
        (closing, true)
    } else {
        (step, false)
    }
}

/// Advance the rotation by one tick
pub fn advance_rotation<R: QuadRenderer + ?Sized>(
    ring: &mut RingData,
    snapshot: &CarouselSnapshot,
    rotation: &mut RotationData,
    delta_time: f32,
    show_labels: bool,
    renderer: &mut R,
) -> CarouselResult<RotationTickReport> {
    let mut report = RotationTickReport::default();
    rotation.ticks += 1;

    // 1. step every slot's trailing edge
    for slot in 0..ring.ordered.len() {
        let id = plane_at_slot(ring, slot)?;
        let captured = match snapshot.slots.get(slot) {
            Some(c) => c,
            None => {
                log::warn!(
                    "[rotation_operations::advance_rotation] no snapshot for slot {}",
                    slot
                );
                continue;
            }
        };

        let current = plane_mut(ring, id)?;
        current.visible = true;
        let (step, reached_end) = compute_step(current, captured, delta_time, rotation.speed);
        current.reached_carousel_end = reached_end;

        translate_edge(ring, id, EdgeSide::Right, step, true)?;
        if reached_end {
            report.snapped.push((id, step));
        }
    }

    // 2. recycle planes that closed, then shift every slot down
    let closed: Vec<PlaneId> = ring
        .planes
        .iter()
        .filter(|p| p.reached_carousel_end)
        .map(|p| p.id)
        .collect();

    if closed.is_empty() {
        map_all(ring, renderer);
        log::trace!(
            "[rotation_operations::advance_rotation] tick {} delta {:.3}",
            rotation.ticks,
            delta_time
        );
        return Ok(report);
    }

    for id in closed {
        recycle_head_plane(ring, snapshot, id)?;
        reindex_planes(ring, snapshot, show_labels, renderer)?;
        rotation.relinks += 1;
        report.relinked.push(id);
    }

    verify_ring_integrity(ring)?;
    log::debug!(
        "[rotation_operations::advance_rotation] tick {}: relinked {:?} (total {})",
        rotation.ticks,
        report.relinked,
        rotation.relinks
    );
    Ok(report)
}

/// Move a closed head plane behind the tail, shaped like the right-end slot
/// with its left edge glued to the old tail, and hide it.
pub fn recycle_head_plane(
    ring: &mut RingData,
    snapshot: &CarouselSnapshot,
    id: PlaneId,
) -> CarouselResult<()> {
    let old_tail = relink_to_tail(ring, id)?;
    let tail: PlaneData = plane(ring, old_tail)?.clone();

    let recycled = plane_mut(ring, id)?;
    recycled.reached_carousel_end = false;
    recycled.position.x = snapshot.right_end.position.x;
    recycled.vector_coords = snapshot.right_end.vector_coords;
    recycled.delta_vector_coords = snapshot.right_end.delta_vector_coords;
    copy_left_edge_from_right_edge(recycled, &tail);
    recycled.visible = false;
    Ok(())
}

/// Shift every plane down one slot (slot 0 wraps to the last slot), rebuild
/// the slot view and restore each plane to its new slot's snapshot.
pub fn reindex_planes<R: QuadRenderer + ?Sized>(
    ring: &mut RingData,
    snapshot: &CarouselSnapshot,
    show_labels: bool,
    renderer: &mut R,
) -> CarouselResult<()> {
    let last_slot = ring.planes.len().saturating_sub(1);
    for p in ring.planes.iter_mut() {
        let next = if p.carousel_index == 0 {
            last_slot
        } else {
            p.carousel_index - 1
        };
        set_carousel_index(p, next, show_labels, renderer);
    }

    rebuild_order(ring)?;

    for p in ring.planes.iter_mut() {
        let slot = p.carousel_index;
        apply_snapshot_slot(p, snapshot, slot, renderer)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{corners_abs_diff_eq, BOTTOM_LEFT, BOTTOM_RIGHT};
    use crate::layout::{capture_snapshot, update_carousel, LayoutParams};
    use crate::renderer::{RecordingRenderer, TextureInfo};
    use crate::ring::{create_ring, ring_len, translate_edge};
    use crate::CarouselConfig;

    const EPSILON: f32 = 1e-3;

    fn texture() -> TextureInfo {
        TextureInfo {
            name: "plane".to_string(),
            width: 300,
            height: 400,
        }
    }

    fn fanned(plane_count: usize) -> (RingData, CarouselSnapshot, RecordingRenderer) {
        let mut renderer = RecordingRenderer::default();
        let params = LayoutParams::from(&CarouselConfig::default());
        let mut ring = create_ring(plane_count, &texture()).expect("Failed to create ring");
        update_carousel(&mut ring, &params, &texture(), None, false, &mut renderer)
            .expect("Layout should succeed");
        let snapshot = capture_snapshot(&ring).expect("snapshot");
        (ring, snapshot, renderer)
    }

    fn assert_slots_unique(ring: &RingData) {
        let mut seen: Vec<usize> = ring.planes.iter().map(|p| p.carousel_index).collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..ring_len(ring)).collect::<Vec<_>>());
    }

    fn assert_matches_snapshot(ring: &RingData, snapshot: &CarouselSnapshot) {
        for p in &ring.planes {
            let captured = &snapshot.slots[p.carousel_index];
            assert_eq!(p.position.x, captured.position.x);
            assert!(corners_abs_diff_eq(&p.vector_coords, &captured.vector_coords, 1e-6));
            assert!(corners_abs_diff_eq(&p.delta_vector_coords, &captured.delta_vector_coords, 1e-6));
        }
    }

    fn assert_ring_closed(ring: &RingData) {
        let last = ring.ordered.len() - 1;
        let tail = &ring.planes[ring.ordered[last]];
        let before = &ring.planes[ring.ordered[last - 1]];
        assert!(tail.delta_vector_coords[TOP_LEFT].abs_diff_eq(before.delta_vector_coords[TOP_RIGHT], EPSILON));
        assert!(tail.delta_vector_coords[BOTTOM_LEFT].abs_diff_eq(before.delta_vector_coords[BOTTOM_RIGHT], EPSILON));
    }

    #[test]
    fn test_step_is_clamped_at_open_seam() {
        let mut ring = create_ring(3, &texture()).expect("Failed to create ring");
        let snapshot = capture_snapshot(&ring).expect("snapshot");
        // leave a 2px gap on the head plane
        translate_edge(&mut ring, 0, EdgeSide::Right, Vec2::new(-298.0, 0.0), true)
            .expect("translate");

        let head = &ring.planes[0];
        let (step, reached) = compute_step(head, &snapshot.slots[0], 1.0, 0.03);
        assert!(reached);
        assert_eq!(step, Vec2::new(-2.0, 0.0));

        // the same plane with a left neighbour just keeps going
        let mut linked = head.clone();
        linked.left_neighbour = Some(3);
        let (step, reached) = compute_step(&linked, &snapshot.slots[0], 1.0, 0.03);
        assert!(!reached);
        assert!(step.abs_diff_eq(Vec2::new(-9.0, 0.0), 1e-5));
    }

    #[test]
    fn test_snap_triggers_relink() {
        let mut renderer = RecordingRenderer::default();
        let mut ring = create_ring(3, &texture()).expect("Failed to create ring");
        let snapshot = capture_snapshot(&ring).expect("snapshot");
        translate_edge(&mut ring, 0, EdgeSide::Right, Vec2::new(-298.0, 0.0), true)
            .expect("translate");
        let mut rotation = create_rotation(0.03);

        let report = advance_rotation(&mut ring, &snapshot, &mut rotation, 1.0, false, &mut renderer)
            .expect("tick");

        assert_eq!(report.snapped, vec![(0, Vec2::new(-2.0, 0.0))]);
        assert_eq!(report.relinked, vec![0]);
        assert_eq!(rotation.relinks, 1);
        assert_eq!(ring.ordered, vec![1, 2, 3, 0]);
        assert!(!ring.planes[0].visible);
        assert!(!ring.planes[0].reached_carousel_end);
        verify_ring_integrity(&ring).expect("Ring should be consistent");
    }

    #[test]
    fn test_tick_without_relink_keeps_edges_joined() {
        let (mut ring, snapshot, mut renderer) = fanned(9);
        let mut rotation = create_rotation(0.03);
        renderer.map_calls = 0;

        let report = advance_rotation(&mut ring, &snapshot, &mut rotation, 1.0, false, &mut renderer)
            .expect("tick");
        assert!(report.relinked.is_empty());
        assert_eq!(renderer.map_calls, ring_len(&ring));
        assert!(ring.planes.iter().all(|p| p.visible));

        for p in &ring.planes {
            let Some(r) = p.right_neighbour else { continue };
            let n = &ring.planes[r];
            assert!(p.delta_vector_coords[TOP_RIGHT].abs_diff_eq(n.delta_vector_coords[TOP_LEFT], EPSILON));
            assert!(p.delta_vector_coords[BOTTOM_RIGHT].abs_diff_eq(n.delta_vector_coords[BOTTOM_LEFT], EPSILON));
        }
    }

    #[test]
    fn test_full_cycle_returns_every_plane_home() {
        let (mut ring, snapshot, mut renderer) = fanned(9);
        let mut rotation = create_rotation(0.03);
        let cycle = ring_len(&ring) as u64;

        let mut ticks = 0;
        while rotation.relinks < cycle {
            ticks += 1;
            assert!(ticks < 5_000, "rotation stalled after {} relinks", rotation.relinks);

            let report = advance_rotation(&mut ring, &snapshot, &mut rotation, 1.0, false, &mut renderer)
                .expect("tick");
            assert_slots_unique(&ring);

            if !report.relinked.is_empty() {
                assert_matches_snapshot(&ring, &snapshot);
                assert_ring_closed(&ring);
                let recycled = report.relinked[0];
                assert_eq!(ring.planes[recycled].carousel_index, ring_len(&ring) - 1);
            }
        }

        assert!(ring.planes.iter().all(|p| p.carousel_index == p.id));
        assert_eq!(ring.ordered, (0..ring_len(&ring)).collect::<Vec<_>>());
        verify_ring_integrity(&ring).expect("Ring should be consistent after a full cycle");
    }

    #[test]
    fn test_labels_follow_reindex() {
        let mut renderer = RecordingRenderer::default();
        let mut ring = create_ring(3, &texture()).expect("Failed to create ring");
        let snapshot = capture_snapshot(&ring).expect("snapshot");
        recycle_head_plane(&mut ring, &snapshot, 0).expect("recycle");
        reindex_planes(&mut ring, &snapshot, true, &mut renderer).expect("reindex");
        assert_eq!(renderer.labels[&0], "id: 0\ncId: 3");
        assert_eq!(renderer.labels[&1], "id: 1\ncId: 0");
    }
}
