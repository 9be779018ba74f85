//! Animation driver operations
//!
//! Starting a task always stops every other task first, so the plane array
//! only ever has one writer per frame.

use super::animation_data::{AnimationDriverData, AnimationTask, TaskHandle};
use super::FrameClock;

/// Create an idle driver
pub fn create_driver() -> AnimationDriverData {
    AnimationDriverData::default()
}

/// Stop everything, then register `task` with the clock
pub fn start_task<C: FrameClock + ?Sized>(
    driver: &mut AnimationDriverData,
    task: AnimationTask,
    clock: &mut C,
) -> TaskHandle {
    stop_all_tasks(driver, clock);

    let handle = TaskHandle {
        id: driver.next_id,
        task,
    };
    driver.next_id += 1;
    driver.active.push(handle);
    driver.is_carousel_rotating = task == AnimationTask::Rotation;
    clock.register_task(handle);

    log::debug!(
        "[animation_operations::start_task] started {:?} as task {}",
        task,
        handle.id
    );
    handle
}

/// Deregister every active task and clear the rotating flag
pub fn stop_all_tasks<C: FrameClock + ?Sized>(driver: &mut AnimationDriverData, clock: &mut C) {
    for handle in driver.active.drain(..) {
        clock.unregister_task(handle);
        log::debug!(
            "[animation_operations::stop_all_tasks] stopped {:?} (task {})",
            handle.task,
            handle.id
        );
    }
    driver.is_carousel_rotating = false;
}

pub fn is_active(driver: &AnimationDriverData, task: AnimationTask) -> bool {
    driver.active.iter().any(|h| h.task == task)
}

/// The running task, if any
pub fn active_task(driver: &AnimationDriverData) -> Option<AnimationTask> {
    driver.active.first().map(|h| h.task)
}
