use gloo_timers::callback::Timeout;

/// A one-shot callback registered with a [`Scheduler`].
pub type Task = Box<dyn FnOnce()>;

/// Owns a scheduled callback. Dropping the handle cancels the callback;
/// once `cancel` or `drop` returns the callback is guaranteed not to run.
pub struct TaskHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TaskHandle {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        TaskHandle {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for TaskHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskHandle")
            .field("armed", &self.cancel.is_some())
            .finish()
    }
}

/// Delayed execution, injected into the controllers so that tests can drive
/// time by hand.
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Task) -> TaskHandle;
}

/// Browser timers via `setTimeout`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GlooScheduler;

impl Scheduler for GlooScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) -> TaskHandle {
        let timeout = Timeout::new(delay_ms, task);
        // Timeout clears itself when dropped
        TaskHandle::new(move || drop(timeout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ManualScheduler;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> Task) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let make = {
            let log = log.clone();
            move |name: &'static str| -> Task {
                let log = log.clone();
                Box::new(move || log.borrow_mut().push(name))
            }
        };
        (log, make)
    }

    #[test]
    fn tasks_run_in_due_order() {
        let scheduler = ManualScheduler::new();
        let (log, task) = recorder();
        let _late = scheduler.schedule(300, task("late"));
        let _early = scheduler.schedule(100, task("early"));
        let _tie = scheduler.schedule(100, task("tie"));

        scheduler.advance(99);
        assert!(log.borrow().is_empty());
        scheduler.advance(1);
        assert_eq!(*log.borrow(), vec!["early", "tie"]);
        scheduler.advance(500);
        assert_eq!(*log.borrow(), vec!["early", "tie", "late"]);
        assert_eq!(scheduler.now(), 600);
    }

    #[test]
    fn dropping_the_handle_cancels() {
        let scheduler = ManualScheduler::new();
        let (log, task) = recorder();
        let handle = scheduler.schedule(10, task("dropped"));
        let kept = scheduler.schedule(10, task("kept"));
        drop(handle);
        assert_eq!(scheduler.pending(), 1);

        scheduler.advance(10);
        assert_eq!(*log.borrow(), vec!["kept"]);
        // Cancelling after the task already ran is a no-op
        kept.cancel();
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn task_scheduled_from_a_task_uses_its_fire_time() {
        let scheduler = ManualScheduler::new();
        let fired_at = Rc::new(RefCell::new(Vec::new()));
        let follow_up: Rc<RefCell<Option<TaskHandle>>> = Rc::new(RefCell::new(None));

        let outer = scheduler.clone();
        let recorded = fired_at.clone();
        let slot = follow_up.clone();
        let _first = scheduler.schedule(
            50,
            Box::new(move || {
                recorded.borrow_mut().push(outer.now());
                let clock = outer.clone();
                let recorded = recorded.clone();
                let handle = outer.schedule(
                    50,
                    Box::new(move || recorded.borrow_mut().push(clock.now())),
                );
                *slot.borrow_mut() = Some(handle);
            }),
        );

        scheduler.advance(1_000);
        assert_eq!(*fired_at.borrow(), vec![50, 100]);
    }
}
