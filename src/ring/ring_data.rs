//! Ring data structures - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in ring_operations.rs

use crate::plane::{PlaneData, PlaneId};

/// Every plane of the carousel plus the slot-order view
#[derive(Debug, Clone, PartialEq)]
pub struct RingData {
    /// Indexed by plane id. Length is `plane_count + 1`; the extra plane
    /// feeds the transitional slot during rotation.
    pub planes: Vec<PlaneData>,

    /// Indexed by slot, holds the plane currently occupying it.
    /// Rebuilt from `carousel_index` whenever planes are reindexed.
    pub ordered: Vec<PlaneId>,

    /// Number of visible slots (odd)
    pub plane_count: usize,
}
