/// Handle to a scheduled task that can be stopped exactly once.
pub trait Cancel {
    fn cancel(self);
}

/// Exclusive owner of at most one running periodic task.
///
/// Releasing an empty slot does nothing, and a dropped slot releases whatever
/// it still holds, so the task cannot outlive its owner.
pub struct TimerSlot<H: Cancel> {
    handle: Option<H>,
}

impl<H: Cancel> TimerSlot<H> {
    pub fn new() -> Self {
        Self { handle: None }
    }

    /// Takes ownership of `handle`, cancelling any task already held.
    pub fn acquire(&mut self, handle: H) {
        self.release();
        self.handle = Some(handle);
    }

    /// Returns true when a task was actually cancelled.
    pub fn release(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                handle.cancel();
                true
            }
            None => false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }
}

impl<H: Cancel> Default for TimerSlot<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Cancel> Drop for TimerSlot<H> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct CountedTask {
        live: Rc<Cell<i32>>,
    }

    impl CountedTask {
        fn start(live: &Rc<Cell<i32>>) -> Self {
            live.set(live.get() + 1);
            Self { live: live.clone() }
        }
    }

    impl Cancel for CountedTask {
        fn cancel(self) {
            self.live.set(self.live.get() - 1);
        }
    }

    #[test]
    fn release_is_idempotent() {
        let live = Rc::new(Cell::new(0));
        let mut slot = TimerSlot::new();
        assert!(!slot.release());
        slot.acquire(CountedTask::start(&live));
        assert_eq!(live.get(), 1);
        assert!(slot.release());
        assert!(!slot.release());
        assert_eq!(live.get(), 0);
        assert!(!slot.is_active());
    }

    #[test]
    fn acquire_replaces_previous_task() {
        let live = Rc::new(Cell::new(0));
        let mut slot = TimerSlot::new();
        slot.acquire(CountedTask::start(&live));
        slot.acquire(CountedTask::start(&live));
        assert_eq!(live.get(), 1);
    }

    #[test]
    fn drop_releases_task() {
        let live = Rc::new(Cell::new(0));
        for _ in 0..25 {
            let mut slot = TimerSlot::new();
            slot.acquire(CountedTask::start(&live));
            assert_eq!(live.get(), 1);
        }
        assert_eq!(live.get(), 0);
    }
}
