/// Animation Module - frame-ticked task registry
///
/// - animation_data.rs: task kinds, handles, driver state, manual clock
/// - animation_operations.rs: exclusive start, stop-all, queries
///

pub mod animation_data;
pub mod animation_operations;

pub use animation_data::{AnimationDriverData, AnimationTask, ManualClock, TaskHandle};

pub use animation_operations::{
    active_task,
    create_driver,
    is_active,
    start_task,
    stop_all_tasks,
};

/// Host per-frame clock. Registered tasks are ticked once per frame by the
/// owner of the carousel; the clock only needs to know which are live.
pub trait FrameClock {
    fn register_task(&mut self, handle: TaskHandle);
    fn unregister_task(&mut self, handle: TaskHandle);
}

impl FrameClock for ManualClock {
    fn register_task(&mut self, handle: TaskHandle) {
        self.registered.push(handle);
        self.register_calls += 1;
    }

    fn unregister_task(&mut self, handle: TaskHandle) {
        self.registered.retain(|h| *h != handle);
        self.unregister_calls += 1;
    }
}
