//! Deterministic stand-ins for browser timers and intersection observers.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::error::PlatformError;
use crate::scheduler::{Scheduler, Task, TaskHandle};
use crate::visibility::{Subscription, VisibilityCallback, VisibilitySource};

#[derive(Default)]
struct Queue {
    now: u64,
    next_id: u64,
    tasks: BTreeMap<(u64, u64), Task>,
}

/// Fake clock. Time only moves through [`ManualScheduler::advance`].
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<Queue>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u64 {
        self.queue.borrow().now
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().tasks.len()
    }

    /// Runs every task due within the next `ms` milliseconds, in due order,
    /// with the clock set to each task's due time while it runs.
    pub fn advance(&self, ms: u64) {
        let target = self.now() + ms;
        loop {
            let task = {
                let mut queue = self.queue.borrow_mut();
                match queue.tasks.keys().next().copied() {
                    Some(key) if key.0 <= target => {
                        queue.now = key.0;
                        queue.tasks.remove(&key)
                    }
                    _ => {
                        queue.now = target;
                        None
                    }
                }
            };
            match task {
                Some(task) => task(),
                None => break,
            }
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) -> TaskHandle {
        let key = {
            let mut queue = self.queue.borrow_mut();
            let key = (queue.now + u64::from(delay_ms), queue.next_id);
            queue.next_id += 1;
            queue.tasks.insert(key, task);
            key
        };
        let queue = Rc::downgrade(&self.queue);
        TaskHandle::new(move || {
            if let Some(queue) = queue.upgrade() {
                let removed = queue.borrow_mut().tasks.remove(&key);
                drop(removed);
            }
        })
    }
}

/// Scriptable visibility: tests flip it with [`ManualVisibility::set_visible`].
#[derive(Clone, Default)]
pub struct ManualVisibility {
    subscribers: Rc<RefCell<Vec<(u64, Rc<dyn Fn(bool)>)>>>,
    next_id: Rc<Cell<u64>>,
}

impl ManualVisibility {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    pub fn set_visible(&self, visible: bool) {
        let current: Vec<_> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();
        for callback in current {
            callback(visible);
        }
    }
}

impl VisibilitySource for ManualVisibility {
    fn observe(&self, on_change: VisibilityCallback) -> Result<Subscription, PlatformError> {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.subscribers.borrow_mut().push((id, Rc::from(on_change)));

        let subscribers = Rc::downgrade(&self.subscribers);
        Ok(Subscription::new(move || {
            if let Some(subscribers) = subscribers.upgrade() {
                subscribers.borrow_mut().retain(|(other, _)| *other != id);
            }
        }))
    }
}

/// Source whose observer can never be created.
#[derive(Clone, Copy, Default)]
pub struct BrokenVisibility;

impl VisibilitySource for BrokenVisibility {
    fn observe(&self, _on_change: VisibilityCallback) -> Result<Subscription, PlatformError> {
        Err(PlatformError::Observer("unsupported".to_string()))
    }
}
