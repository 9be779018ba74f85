//! Ring operations - DOP functions over the whole plane array
//!
//! Neighbour links are plain indices, so cascading and relinking are array
//! lookups. A missing neighbour always means "stop here", never an error.

use super::ring_data::RingData;
use crate::error::{CarouselError, CarouselResult, OptionExt};
use crate::geometry::{bounds_of, Bounds, EdgeSide, TOP_LEFT};
use crate::plane::{
    create_plane, map_to_quad, reset_to_base, set_carousel_index, translate_own_edge,
    world_corners, PlaneData, PlaneId,
};
use crate::renderer::{QuadRenderer, TextureInfo};
use glam::Vec2;

// ============================================================================
// CONSTRUCTION
// ============================================================================

/// Build `plane_count + 1` planes laid side by side around the centre slot,
/// linked left to right in id order.
pub fn create_ring(plane_count: usize, frame: &TextureInfo) -> CarouselResult<RingData> {
    if plane_count == 0 || plane_count % 2 == 0 {
        return Err(CarouselError::InvalidConfig {
            field: "plane_count".to_string(),
            value: plane_count.to_string(),
            reason: "must be odd so one plane sits in the centre slot".to_string(),
        });
    }

    let mid = plane_count / 2;
    let ring_length = plane_count + 1;
    let mut planes = Vec::with_capacity(ring_length);

    for i in 0..ring_length {
        let offset = i as f32 - mid as f32;
        let position = Vec2::new(frame.width as f32 * offset, 0.0);
        let left = if i > 0 { Some(i - 1) } else { None };
        let right = if i + 1 < ring_length { Some(i + 1) } else { None };
        planes.push(create_plane(i, position, frame, left, right));
    }

    if let Some(transitional) = planes.last_mut() {
        transitional.visible = false;
    }

    log::info!(
        "[ring_operations::create_ring] {} planes + 1 transitional, centre slot {}",
        plane_count,
        mid
    );

    Ok(RingData {
        planes,
        ordered: (0..ring_length).collect(),
        plane_count,
    })
}

/// Centre slot of the visible planes
pub fn mid_slot(ring: &RingData) -> usize {
    ring.plane_count / 2
}

/// Slot reserved for the hidden plane that feeds the ring during rotation
pub fn transitional_slot(ring: &RingData) -> usize {
    ring.plane_count
}

/// Total number of planes and slots
pub fn ring_len(ring: &RingData) -> usize {
    ring.planes.len()
}

// ============================================================================
// ACCESS
// ============================================================================

pub fn plane(ring: &RingData, id: PlaneId) -> CarouselResult<&PlaneData> {
    ring.planes
        .get(id)
        .ok_or_carousel(|| CarouselError::PlaneNotFound { id })
}

pub fn plane_mut(ring: &mut RingData, id: PlaneId) -> CarouselResult<&mut PlaneData> {
    ring.planes
        .get_mut(id)
        .ok_or_carousel(|| CarouselError::PlaneNotFound { id })
}

/// Plane currently occupying a slot
pub fn plane_at_slot(ring: &RingData, slot: usize) -> CarouselResult<PlaneId> {
    ring.ordered
        .get(slot)
        .copied()
        .ok_or_carousel(|| CarouselError::SlotOutOfRange {
            slot,
            slots: ring.ordered.len(),
        })
}

/// The plane at the open seam with no left neighbour
pub fn head_plane(ring: &RingData) -> Option<PlaneId> {
    ring.planes
        .iter()
        .find(|p| p.left_neighbour.is_none())
        .map(|p| p.id)
}

/// The plane at the open seam with no right neighbour
pub fn tail_plane(ring: &RingData) -> Option<PlaneId> {
    ring.planes
        .iter()
        .find(|p| p.right_neighbour.is_none())
        .map(|p| p.id)
}

// ============================================================================
// TRANSLATION
// ============================================================================

/// Translate one edge of a plane. With `cascade`, the neighbour on that side
/// gets the same offset on its shared edge. One hop only; nothing is mapped.
pub fn translate_edge(
    ring: &mut RingData,
    id: PlaneId,
    side: EdgeSide,
    offset: Vec2,
    cascade: bool,
) -> CarouselResult<()> {
    let target = plane_mut(ring, id)?;
    if !translate_own_edge(target, side, offset) || !cascade {
        return Ok(());
    }

    let neighbour = match side {
        EdgeSide::Left => target.left_neighbour,
        EdgeSide::Right => target.right_neighbour,
    };

    if let Some(neighbour_id) = neighbour {
        match ring.planes.get_mut(neighbour_id) {
            Some(n) => {
                translate_own_edge(n, side.opposite(), offset);
            }
            None => log::warn!(
                "[ring_operations::translate_edge] plane {} links to missing neighbour {}",
                id,
                neighbour_id
            ),
        }
    }
    Ok(())
}

/// Translate both edges of a plane
pub fn translate_edges(
    ring: &mut RingData,
    id: PlaneId,
    left: Vec2,
    right: Vec2,
    cascade: bool,
) -> CarouselResult<()> {
    translate_edge(ring, id, EdgeSide::Left, left, cascade)?;
    translate_edge(ring, id, EdgeSide::Right, right, cascade)
}

/// Horizontal-only edge translation
pub fn translate_edges_x(
    ring: &mut RingData,
    id: PlaneId,
    left: f32,
    right: f32,
    cascade: bool,
) -> CarouselResult<()> {
    translate_edges(ring, id, Vec2::new(left, 0.0), Vec2::new(right, 0.0), cascade)
}

/// Vertical-only edge translation
pub fn translate_edges_y(
    ring: &mut RingData,
    id: PlaneId,
    left: f32,
    right: f32,
    cascade: bool,
) -> CarouselResult<()> {
    translate_edges(ring, id, Vec2::new(0.0, left), Vec2::new(0.0, right), cascade)
}

/// Shift a whole plane sideways, dragging both neighbours' shared edges along
pub fn translate_plane_x(ring: &mut RingData, id: PlaneId, value: f32) -> CarouselResult<()> {
    translate_edges_x(ring, id, value, value, true)
}

/// Shift a whole plane vertically, dragging both neighbours' shared edges along
pub fn translate_plane_y(ring: &mut RingData, id: PlaneId, value: f32) -> CarouselResult<()> {
    translate_edges_y(ring, id, value, value, true)
}

// ============================================================================
// TOPOLOGY
// ============================================================================

/// Return every plane to its base rectangle, id-ordered links and identity
/// slots. When starting positions are known they replace the constructor's x.
pub fn reset_ring<R: QuadRenderer + ?Sized>(
    ring: &mut RingData,
    starting_positions: Option<&[Vec2]>,
    show_labels: bool,
    renderer: &mut R,
) {
    let ring_length = ring.planes.len();
    ring.ordered.clear();

    for (i, plane) in ring.planes.iter_mut().enumerate() {
        reset_to_base(plane, renderer);
        plane.left_neighbour = if i == 0 { None } else { Some(i - 1) };
        plane.right_neighbour = if i + 1 >= ring_length { None } else { Some(i + 1) };
        set_carousel_index(plane, i, show_labels, renderer);

        if let Some(x) = starting_positions.and_then(|p| p.get(i)).map(|p| p.x) {
            plane.position.x = x;
        }
        ring.ordered.push(i);
    }

    if let Some(transitional) = ring.planes.last_mut() {
        transitional.visible = false;
    }
    log::debug!("[ring_operations::reset_ring] {} planes reset", ring_length);
}

/// Move the head plane to the far end: it leaves its right neighbour (the new
/// head) and attaches after the current tail. Returns the old tail.
pub fn relink_to_tail(ring: &mut RingData, id: PlaneId) -> CarouselResult<PlaneId> {
    let last_slot = ring.ordered.len().saturating_sub(1);
    let tail = plane_at_slot(ring, last_slot)?;

    let moving = plane(ring, id)?;
    if moving.left_neighbour.is_some() {
        return Err(CarouselError::RingIntegrity(format!(
            "plane {} is not at the open seam",
            id
        )));
    }
    if tail == id {
        return Err(CarouselError::RingIntegrity(format!(
            "plane {} is both head and tail",
            id
        )));
    }
    let old_right = moving.right_neighbour;

    if let Some(right_id) = old_right {
        plane_mut(ring, right_id)?.left_neighbour = None;
    }
    {
        let moving = plane_mut(ring, id)?;
        moving.right_neighbour = None;
        moving.left_neighbour = Some(tail);
    }
    plane_mut(ring, tail)?.right_neighbour = Some(id);

    log::debug!(
        "[ring_operations::relink_to_tail] plane {} now follows plane {}",
        id,
        tail
    );
    Ok(tail)
}

/// Rebuild the slot-order view from every plane's `carousel_index`
pub fn rebuild_order(ring: &mut RingData) -> CarouselResult<()> {
    let slots = ring.planes.len();
    let mut ordered: Vec<Option<PlaneId>> = vec![None; slots];

    for plane in &ring.planes {
        let entry = ordered
            .get_mut(plane.carousel_index)
            .ok_or_carousel(|| CarouselError::SlotOutOfRange {
                slot: plane.carousel_index,
                slots,
            })?;
        if let Some(other) = entry {
            return Err(CarouselError::RingIntegrity(format!(
                "planes {} and {} both claim slot {}",
                other, plane.id, plane.carousel_index
            )));
        }
        *entry = Some(plane.id);
    }

    ring.ordered = ordered.into_iter().flatten().collect();
    Ok(())
}

/// Check link symmetry, the single open seam, and that walking the chain from
/// the head visits slots 0, 1, 2, ... in order.
pub fn verify_ring_integrity(ring: &RingData) -> CarouselResult<()> {
    let slots = ring.planes.len();

    for p in &ring.planes {
        if let Some(r) = p.right_neighbour {
            if plane(ring, r)?.left_neighbour != Some(p.id) {
                return Err(CarouselError::RingIntegrity(format!(
                    "plane {} -> {} is not mirrored",
                    p.id, r
                )));
            }
        }
        if let Some(l) = p.left_neighbour {
            if plane(ring, l)?.right_neighbour != Some(p.id) {
                return Err(CarouselError::RingIntegrity(format!(
                    "plane {} <- {} is not mirrored",
                    p.id, l
                )));
            }
        }
    }

    let heads = ring
        .planes
        .iter()
        .filter(|p| p.left_neighbour.is_none())
        .count();
    if heads != 1 {
        return Err(CarouselError::RingIntegrity(format!(
            "expected one open seam, found {} heads",
            heads
        )));
    }

    let mut current = head_plane(ring);
    let mut visited = 0;
    while let Some(id) = current {
        let p = plane(ring, id)?;
        if p.carousel_index != visited {
            return Err(CarouselError::RingIntegrity(format!(
                "plane {} at chain position {} holds slot {}",
                id, visited, p.carousel_index
            )));
        }
        if ring.ordered.get(visited) != Some(&id) {
            return Err(CarouselError::RingIntegrity(format!(
                "slot view disagrees at slot {}",
                visited
            )));
        }
        visited += 1;
        if visited > slots {
            return Err(CarouselError::RingIntegrity("chain loops".to_string()));
        }
        current = p.right_neighbour;
    }

    if visited != slots {
        return Err(CarouselError::RingIntegrity(format!(
            "chain reaches {} of {} planes",
            visited, slots
        )));
    }
    Ok(())
}

// ============================================================================
// RENDERING
// ============================================================================

/// Re-map every plane once
pub fn map_all<R: QuadRenderer + ?Sized>(ring: &RingData, renderer: &mut R) {
    for plane in &ring.planes {
        map_to_quad(plane, renderer);
    }
}

/// Backdrop rectangle behind the carousel: the bounds of every plane corner,
/// pushed down by half of plane 0's top-left lift.
pub fn compute_backdrop(ring: &RingData) -> Option<Bounds> {
    let corners: Vec<Vec2> = ring.planes.iter().flat_map(world_corners).collect();
    let mut bounds = bounds_of(corners.iter())?;
    let lift = ring
        .planes
        .first()
        .map(|p| p.delta_vector_coords[TOP_LEFT].y / 2.0)
        .unwrap_or(0.0);
    bounds.min.y += lift;
    bounds.max.y += lift;
    Some(bounds)
}
