//! Scroll-triggered reveal: watches one element and flips `revealed` once
//! it has scrolled into view.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::debug;

use crate::config::{DEFAULT_REVEAL_ROOT_MARGIN, DEFAULT_REVEAL_THRESHOLD};
use crate::error::PlatformError;
use crate::scheduler::{Scheduler, TaskHandle};
use crate::visibility::{Subscription, VisibilitySource};

#[derive(Clone, Debug, PartialEq)]
pub struct RevealConfig {
    /// Visible fraction of the element, 0.0 to 1.0.
    pub threshold: f64,
    /// CSS margin applied to the viewport before intersecting.
    pub root_margin: String,
    pub trigger_once: bool,
    /// Wait between entering the viewport and revealing. Leaving is instant.
    pub delay_ms: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        RevealConfig {
            threshold: DEFAULT_REVEAL_THRESHOLD,
            root_margin: DEFAULT_REVEAL_ROOT_MARGIN.to_string(),
            trigger_once: true,
            delay_ms: 0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    pub has_intersected: bool,
    pub is_revealed: bool,
}

struct Shared {
    config: RevealConfig,
    scheduler: Rc<dyn Scheduler>,
    listener: Option<Rc<dyn Fn(bool)>>,
    state: Cell<RevealState>,
    pending: RefCell<Option<TaskHandle>>,
    released: Cell<bool>,
}

/// One instance per observed element. Dropping the controller releases the
/// observation and cancels a reveal that is still waiting on its delay.
pub struct RevealController {
    shared: Rc<Shared>,
    subscription: Option<Subscription>,
}

impl RevealController {
    pub fn new(config: RevealConfig, scheduler: Rc<dyn Scheduler>) -> Self {
        Self::build(config, scheduler, None)
    }

    /// Like [`RevealController::new`], calling `listener` whenever
    /// `is_revealed` changes.
    pub fn with_listener(
        config: RevealConfig,
        scheduler: Rc<dyn Scheduler>,
        listener: impl Fn(bool) + 'static,
    ) -> Self {
        Self::build(config, scheduler, Some(Rc::new(listener)))
    }

    fn build(
        config: RevealConfig,
        scheduler: Rc<dyn Scheduler>,
        listener: Option<Rc<dyn Fn(bool)>>,
    ) -> Self {
        RevealController {
            shared: Rc::new(Shared {
                config,
                scheduler,
                listener,
                state: Cell::new(RevealState::default()),
                pending: RefCell::new(None),
                released: Cell::new(false),
            }),
            subscription: None,
        }
    }

    /// Starts observing. Attaching again replaces the previous subscription,
    /// so there is never more than one per controller.
    pub fn attach(&mut self, source: &dyn VisibilitySource) -> Result<(), PlatformError> {
        if self.shared.released.get() {
            return Ok(());
        }
        self.subscription = None;
        let weak = Rc::downgrade(&self.shared);
        let subscription = source.observe(Box::new(move |visible| {
            if let Some(shared) = weak.upgrade() {
                on_visibility(&shared, visible);
            }
        }))?;
        self.subscription = Some(subscription);
        Ok(())
    }

    pub fn config(&self) -> &RevealConfig {
        &self.shared.config
    }

    pub fn state(&self) -> RevealState {
        self.shared.state.get()
    }

    pub fn is_revealed(&self) -> bool {
        self.state().is_revealed
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn has_pending_reveal(&self) -> bool {
        self.shared.pending.borrow().is_some()
    }

    /// Stops observing and drops any pending reveal. Safe to call repeatedly.
    pub fn release(&mut self) {
        if self.shared.released.replace(true) {
            return;
        }
        let subscription = self.subscription.take();
        drop(subscription);
        let pending = self.shared.pending.borrow_mut().take();
        drop(pending);
        debug!("Reveal controller released");
    }
}

impl Drop for RevealController {
    fn drop(&mut self) {
        self.release();
    }
}

fn on_visibility(shared: &Rc<Shared>, visible: bool) {
    if shared.released.get() {
        return;
    }
    let mut state = shared.state.get();

    if visible {
        if !state.has_intersected {
            state.has_intersected = true;
            shared.state.set(state);
        }
        if state.is_revealed || shared.pending.borrow().is_some() {
            return;
        }
        let delay_ms = shared.config.delay_ms;
        if delay_ms == 0 {
            set_revealed(shared, true);
            return;
        }
        let weak: Weak<Shared> = Rc::downgrade(shared);
        let handle = shared.scheduler.schedule(
            delay_ms,
            Box::new(move || {
                let Some(shared) = weak.upgrade() else {
                    return;
                };
                if shared.released.get() {
                    return;
                }
                let fired = shared.pending.borrow_mut().take();
                drop(fired);
                set_revealed(&shared, true);
            }),
        );
        *shared.pending.borrow_mut() = Some(handle);
    } else if !shared.config.trigger_once {
        let pending = shared.pending.borrow_mut().take();
        drop(pending);
        if state.is_revealed {
            set_revealed(shared, false);
        }
    }
}

fn set_revealed(shared: &Shared, revealed: bool) {
    let mut state = shared.state.get();
    if state.is_revealed == revealed {
        return;
    }
    state.is_revealed = revealed;
    shared.state.set(state);
    debug!("Element {}", if revealed { "revealed" } else { "hidden again" });
    if let Some(listener) = shared.listener.clone() {
        listener(revealed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{BrokenVisibility, ManualScheduler, ManualVisibility};
    use proptest::prelude::*;

    struct Harness {
        scheduler: ManualScheduler,
        source: ManualVisibility,
        changes: Rc<RefCell<Vec<bool>>>,
        controller: RevealController,
    }

    fn harness(config: RevealConfig) -> Harness {
        let scheduler = ManualScheduler::new();
        let source = ManualVisibility::new();
        let changes = Rc::new(RefCell::new(Vec::new()));
        let recorded = changes.clone();
        let mut controller = RevealController::with_listener(
            config,
            Rc::new(scheduler.clone()),
            move |revealed| recorded.borrow_mut().push(revealed),
        );
        controller.attach(&source).unwrap();
        Harness {
            scheduler,
            source,
            changes,
            controller,
        }
    }

    fn repeat(delay_ms: u32) -> RevealConfig {
        RevealConfig {
            trigger_once: false,
            delay_ms,
            ..RevealConfig::default()
        }
    }

    #[test]
    fn defaults_match_the_site() {
        let config = RevealConfig::default();
        assert_eq!(config.threshold, 0.1);
        assert_eq!(config.root_margin, "0px 0px -50px 0px");
        assert!(config.trigger_once);
        assert_eq!(config.delay_ms, 0);
    }

    #[test]
    fn unattached_controller_stays_idle() {
        let scheduler = ManualScheduler::new();
        let controller = RevealController::new(RevealConfig::default(), Rc::new(scheduler.clone()));
        scheduler.advance(10_000);
        assert!(!controller.is_attached());
        assert_eq!(controller.state(), RevealState::default());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn reveals_immediately_without_delay() {
        let h = harness(RevealConfig::default());
        assert!(!h.controller.is_revealed());
        h.source.set_visible(true);
        assert!(h.controller.is_revealed());
        assert!(h.controller.state().has_intersected);
        assert_eq!(*h.changes.borrow(), vec![true]);
    }

    #[test]
    fn entry_delay_postpones_the_reveal() {
        let h = harness(RevealConfig {
            delay_ms: 300,
            ..RevealConfig::default()
        });
        h.source.set_visible(true);
        assert!(h.controller.state().has_intersected);
        assert!(h.controller.has_pending_reveal());

        h.scheduler.advance(299);
        assert!(!h.controller.is_revealed());
        h.scheduler.advance(1);
        assert!(h.controller.is_revealed());
        assert!(!h.controller.has_pending_reveal());
    }

    #[test]
    fn repeated_entry_while_pending_schedules_once() {
        let h = harness(RevealConfig {
            delay_ms: 100,
            ..RevealConfig::default()
        });
        h.source.set_visible(true);
        h.source.set_visible(true);
        assert_eq!(h.scheduler.pending(), 1);
        h.scheduler.advance(100);
        assert_eq!(*h.changes.borrow(), vec![true]);
    }

    #[test]
    fn once_mode_never_hides_again() {
        let h = harness(RevealConfig::default());
        for visible in [true, false, true, false, false, true] {
            h.source.set_visible(visible);
            assert!(h.controller.is_revealed());
        }
        assert_eq!(*h.changes.borrow(), vec![true]);
    }

    #[test]
    fn once_mode_keeps_pending_reveal_after_leaving() {
        let h = harness(RevealConfig {
            delay_ms: 200,
            ..RevealConfig::default()
        });
        h.source.set_visible(true);
        h.source.set_visible(false);
        h.scheduler.advance(200);
        assert!(h.controller.is_revealed());
    }

    #[test]
    fn repeat_mode_follows_the_viewport() {
        let h = harness(repeat(0));
        h.source.set_visible(true);
        assert!(h.controller.is_revealed());
        h.source.set_visible(false);
        assert!(!h.controller.is_revealed());
        h.source.set_visible(true);
        assert!(h.controller.is_revealed());
        assert_eq!(*h.changes.borrow(), vec![true, false, true]);
    }

    #[test]
    fn repeat_mode_leaving_cancels_pending_reveal() {
        let h = harness(repeat(250));
        h.source.set_visible(true);
        h.scheduler.advance(100);
        h.source.set_visible(false);
        assert_eq!(h.scheduler.pending(), 0);

        h.scheduler.advance(1_000);
        assert!(!h.controller.is_revealed());
        assert!(h.changes.borrow().is_empty());
    }

    #[test]
    fn repeat_mode_hides_without_delay() {
        let h = harness(repeat(250));
        h.source.set_visible(true);
        h.scheduler.advance(250);
        assert!(h.controller.is_revealed());
        h.source.set_visible(false);
        assert!(!h.controller.is_revealed());
    }

    #[test]
    fn teardown_with_pending_reveal_changes_nothing() {
        let Harness {
            scheduler,
            source,
            changes,
            controller,
        } = harness(RevealConfig {
            delay_ms: 500,
            ..RevealConfig::default()
        });
        source.set_visible(true);
        assert_eq!(scheduler.pending(), 1);

        drop(controller);
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(source.subscriber_count(), 0);

        scheduler.advance(5_000);
        source.set_visible(true);
        assert!(changes.borrow().is_empty());
    }

    #[test]
    fn release_is_idempotent() {
        let mut h = harness(repeat(0));
        h.controller.release();
        h.controller.release();
        assert!(!h.controller.is_attached());
        h.source.set_visible(true);
        assert!(!h.controller.is_revealed());

        // Attaching after release does not resurrect the controller
        h.controller.attach(&h.source).unwrap();
        assert_eq!(h.source.subscriber_count(), 0);
    }

    #[test]
    fn reattach_keeps_a_single_subscription() {
        let mut h = harness(RevealConfig::default());
        h.controller.attach(&h.source).unwrap();
        assert_eq!(h.source.subscriber_count(), 1);
    }

    #[test]
    fn failing_source_leaves_controller_idle() {
        let scheduler = ManualScheduler::new();
        let mut controller = RevealController::new(RevealConfig::default(), Rc::new(scheduler));
        assert!(matches!(
            controller.attach(&BrokenVisibility),
            Err(PlatformError::Observer(_))
        ));
        assert!(!controller.is_attached());
        assert!(!controller.is_revealed());
    }

    #[derive(Clone, Debug)]
    enum Event {
        Visible(bool),
        Wait(u32),
    }

    fn events() -> impl Strategy<Value = Vec<Event>> {
        prop::collection::vec(
            prop_oneof![
                any::<bool>().prop_map(Event::Visible),
                (0u32..400).prop_map(Event::Wait),
            ],
            0..40,
        )
    }

    proptest! {
        #[test]
        fn once_mode_is_monotonic(delay_ms in 0u32..300, script in events()) {
            let h = harness(RevealConfig { delay_ms, ..RevealConfig::default() });
            let mut was_revealed = false;
            for event in script {
                match event {
                    Event::Visible(visible) => h.source.set_visible(visible),
                    Event::Wait(ms) => h.scheduler.advance(u64::from(ms)),
                }
                let now = h.controller.is_revealed();
                prop_assert!(!was_revealed || now);
                was_revealed = now;
            }
            prop_assert!(h.changes.borrow().len() <= 1);
        }

        #[test]
        fn repeat_mode_mirrors_latest_intersection(delay_ms in 0u32..300, script in events()) {
            let h = harness(repeat(delay_ms));
            // Time the element last came into view, if it is in view now
            let mut entered_at: Option<u64> = None;
            for event in script {
                match event {
                    Event::Visible(visible) => {
                        h.source.set_visible(visible);
                        entered_at = match (visible, entered_at) {
                            (true, None) => Some(h.scheduler.now()),
                            (true, since) => since,
                            (false, _) => None,
                        };
                    }
                    Event::Wait(ms) => h.scheduler.advance(u64::from(ms)),
                }
                let revealed = h.controller.is_revealed();
                if entered_at.is_none() {
                    prop_assert!(!revealed);
                }
                let expected = entered_at
                    .map_or(false, |since| h.scheduler.now() - since >= u64::from(delay_ms));
                prop_assert_eq!(revealed, expected);
            }
        }
    }
}
