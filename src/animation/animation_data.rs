//! Animation data structures - Pure DOP
//!
//! NO METHODS. Just data.

/// Per-frame work the carousel can run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationTask {
    /// Hold the static fan on its captured shape
    FanPreview,
    /// Rotate planes through the ring
    Rotation,
}

/// Typed registration handle handed to the frame clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle {
    pub id: u64,
    pub task: AnimationTask,
}

/// Active task list. At most one entry while the exclusivity rule holds.
#[derive(Debug, Clone, Default)]
pub struct AnimationDriverData {
    pub active: Vec<TaskHandle>,
    pub next_id: u64,
    pub is_carousel_rotating: bool,
}

/// Frame clock stand-in that records registrations
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    pub registered: Vec<TaskHandle>,
    pub register_calls: usize,
    pub unregister_calls: usize,
}
