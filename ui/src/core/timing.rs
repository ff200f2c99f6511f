//! Timer scheduling with explicit cancellation handles.

pub trait Scheduler {
    /// Run `f` once after `delay_ms`.
    fn after(&self, delay_ms: u32, f: Box<dyn FnOnce()>);

    /// Run `f` every `period_ms` until the returned handle is cancelled.
    fn every(&self, period_ms: u32, f: Box<dyn FnMut()>) -> TimerHandle;
}

/// Cancellation handle for a repeating timer.
///
/// Dropping the handle detaches it: the timer keeps running for the rest of
/// the page session. Only `cancel` stops it.
pub struct TimerHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TimerHandle {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerHandle").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn cancel_runs_the_cancellation_once() {
        let cancelled = Rc::new(Cell::new(0));
        let handle = TimerHandle::new({
            let cancelled = Rc::clone(&cancelled);
            move || cancelled.set(cancelled.get() + 1)
        });
        handle.cancel();
        assert_eq!(cancelled.get(), 1);
    }

    #[test]
    fn dropping_the_handle_detaches_without_cancelling() {
        let cancelled = Rc::new(Cell::new(false));
        let handle = TimerHandle::new({
            let cancelled = Rc::clone(&cancelled);
            move || cancelled.set(true)
        });
        drop(handle);
        assert!(!cancelled.get());
    }
}
