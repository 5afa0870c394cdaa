use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::scheduler::{Scheduler, TaskHandle};

/// Milliseconds between steps when counting to `target` over `duration_ms`.
///
/// Counts move one unit per tick, so large targets get a zero interval and
/// finish as fast as the timer allows.
pub fn tick_interval_ms(target: u32, duration_ms: u32) -> u32 {
    if target == 0 {
        return 0;
    }
    duration_ms / target
}

struct Inner {
    target: u32,
    interval_ms: u32,
    value: u32,
    timer: Option<TaskHandle>,
}

/// Animated number for hero statistics, counting up from zero to `target`.
pub struct CounterController {
    inner: Rc<RefCell<Inner>>,
    scheduler: Rc<dyn Scheduler>,
    listener: Rc<dyn Fn(u32)>,
}

impl CounterController {
    pub fn start(
        target: u32,
        duration_ms: u32,
        scheduler: Rc<dyn Scheduler>,
        listener: impl Fn(u32) + 'static,
    ) -> Self {
        let controller = CounterController {
            inner: Rc::new(RefCell::new(Inner {
                target,
                interval_ms: tick_interval_ms(target, duration_ms),
                value: 0,
                timer: None,
            })),
            scheduler,
            listener: Rc::new(listener),
        };
        if target > 0 {
            schedule_step(&controller.inner, &controller.scheduler, &controller.listener);
        }
        controller
    }

    pub fn value(&self) -> u32 {
        self.inner.borrow().value
    }

    pub fn is_finished(&self) -> bool {
        let inner = self.inner.borrow();
        inner.value >= inner.target
    }
}

impl Drop for CounterController {
    fn drop(&mut self) {
        let timer = self.inner.borrow_mut().timer.take();
        drop(timer);
    }
}

fn schedule_step(inner: &Rc<RefCell<Inner>>, scheduler: &Rc<dyn Scheduler>, listener: &Rc<dyn Fn(u32)>) {
    let delay = inner.borrow().interval_ms;
    let weak: Weak<RefCell<Inner>> = Rc::downgrade(inner);
    let next_scheduler = scheduler.clone();
    let listener = listener.clone();
    let handle = scheduler.schedule(
        delay,
        Box::new(move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let (value, done) = {
                let mut state = inner.borrow_mut();
                state.timer = None;
                state.value += 1;
                (state.value, state.value >= state.target)
            };
            listener(value);
            if !done {
                schedule_step(&inner, &next_scheduler, &listener);
            }
        }),
    );
    inner.borrow_mut().timer = Some(handle);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ManualScheduler;

    fn counting(target: u32) -> (ManualScheduler, CounterController, Rc<RefCell<Vec<u32>>>) {
        let scheduler = ManualScheduler::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let counter = CounterController::start(target, 2000, Rc::new(scheduler.clone()), move |v| {
            sink.borrow_mut().push(v)
        });
        (scheduler, counter, seen)
    }

    #[test]
    fn interval_spreads_over_the_duration() {
        assert_eq!(tick_interval_ms(4, 2000), 500);
        assert_eq!(tick_interval_ms(3, 2000), 666);
        assert_eq!(tick_interval_ms(5000, 2000), 0);
        assert_eq!(tick_interval_ms(0, 2000), 0);
    }

    #[test]
    fn counts_up_to_the_target_and_stops() {
        let (scheduler, counter, seen) = counting(4);
        scheduler.advance(1000);
        assert_eq!(counter.value(), 2);
        scheduler.advance(5000);
        assert_eq!(*seen.borrow(), vec![1, 2, 3, 4]);
        assert!(counter.is_finished());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn zero_target_never_ticks() {
        let (scheduler, counter, seen) = counting(0);
        assert_eq!(scheduler.pending(), 0);
        assert!(counter.is_finished());
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn large_target_still_lands_exactly() {
        let (scheduler, counter, _) = counting(2500);
        scheduler.advance(0);
        assert_eq!(counter.value(), 2500);
    }

    #[test]
    fn drop_stops_counting() {
        let (scheduler, counter, seen) = counting(10);
        scheduler.advance(400);
        drop(counter);
        scheduler.advance(10_000);
        assert_eq!(*seen.borrow(), vec![1, 2]);
    }
}
