//! Yew bindings for the controllers. Each hook owns its controller inside an
//! effect, so unmounting the component drops it and releases timers and
//! observers.

use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use web_sys::Element;
use yew::prelude::*;

use crate::carousel::{CarouselConfig, CarouselController, Pager};
use crate::counter::CounterController;
use crate::reveal::{RevealConfig, RevealController};
use crate::scheduler::{GlooScheduler, Scheduler};
use crate::visibility::{IntersectionSource, VisibilitySource};

pub struct UseRevealHandle {
    /// Bind this to the element that should be observed.
    pub node_ref: NodeRef,
    pub is_revealed: bool,
}

#[hook]
pub fn use_scroll_reveal(config: RevealConfig) -> UseRevealHandle {
    let node_ref = use_node_ref();
    let revealed = use_state_eq(|| false);

    {
        let node_ref = node_ref.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |config: &RevealConfig| {
                // An unbound ref is a valid idle state, nothing to observe
                let source = node_ref.cast::<Element>().map(|element| {
                    IntersectionSource::new(element, config.threshold, config.root_margin.clone())
                });
                let controller = start_reveal(
                    config.clone(),
                    Rc::new(GlooScheduler),
                    source.as_ref().map(|s| s as &dyn VisibilitySource),
                    move |value| revealed.set(value),
                );
                move || drop(controller)
            },
            config,
        );
    }

    UseRevealHandle {
        node_ref,
        is_revealed: *revealed,
    }
}

/// Builds a controller for `config` and pushes its initial state through
/// `on_change` before observing, so a replaced controller never leaves a
/// stale reveal behind.
fn start_reveal(
    config: RevealConfig,
    scheduler: Rc<dyn Scheduler>,
    source: Option<&dyn VisibilitySource>,
    on_change: impl Fn(bool) + 'static,
) -> RevealController {
    let on_change = Rc::new(on_change);
    let listener = on_change.clone();
    let mut controller =
        RevealController::with_listener(config, scheduler, move |value| listener(value));
    on_change(controller.is_revealed());
    if let Some(source) = source {
        if let Err(e) = controller.attach(source) {
            warn!("Scroll reveal disabled: {}", e);
        }
    }
    controller
}

#[derive(Clone)]
pub struct UseCarouselHandle {
    pub current_page: usize,
    pub page_count: usize,
    pub pager: Pager,
    controller: Rc<RefCell<Option<CarouselController>>>,
}

impl UseCarouselHandle {
    fn with(&self, f: impl FnOnce(&CarouselController)) {
        if let Some(controller) = self.controller.borrow().as_ref() {
            f(controller);
        }
    }

    pub fn go_to(&self, page: i64) {
        self.with(|c| c.go_to(page));
    }

    pub fn next(&self) {
        self.with(CarouselController::next);
    }

    pub fn previous(&self) {
        self.with(CarouselController::previous);
    }

    pub fn set_suspended(&self, suspended: bool) {
        self.with(|c| c.set_suspended(suspended));
    }
}

#[hook]
pub fn use_carousel(item_count: usize, config: CarouselConfig) -> UseCarouselHandle {
    let controller = use_mut_ref(|| None::<CarouselController>);
    let page = use_state_eq(|| 0usize);

    {
        let controller = controller.clone();
        let page = page.clone();
        use_effect_with_deps(
            move |_| {
                *controller.borrow_mut() = Some(CarouselController::with_listener(
                    item_count,
                    config,
                    Rc::new(GlooScheduler),
                    move |current| page.set(current),
                ));
                move || {
                    let released = controller.borrow_mut().take();
                    drop(released);
                }
            },
            (),
        );
    }

    {
        let controller = controller.clone();
        use_effect_with_deps(
            move |(item_count, config): &(usize, CarouselConfig)| {
                if let Some(controller) = controller.borrow().as_ref() {
                    controller.configure(*item_count, *config);
                }
                || ()
            },
            (item_count, config),
        );
    }

    let mut pager = Pager::new(item_count, config.items_per_view);
    // The listener catches up one render after a clamp
    pager.go_to((*page).min(pager.page_count() - 1) as i64);

    UseCarouselHandle {
        current_page: pager.current_page(),
        page_count: pager.page_count(),
        pager,
        controller,
    }
}

/// Counts from zero to `target` once the returned value is first rendered
/// with `start` set. Finished counters keep their value.
#[hook]
pub fn use_counter(target: u32, duration_ms: u32, start: bool) -> u32 {
    let value = use_state_eq(|| 0u32);

    {
        let value = value.clone();
        use_effect_with_deps(
            move |(target, duration_ms, start): &(u32, u32, bool)| {
                let counter = start.then(|| {
                    CounterController::start(*target, *duration_ms, Rc::new(GlooScheduler), move |v| {
                        value.set(v)
                    })
                });
                move || drop(counter)
            },
            (target, duration_ms, start),
        );
    }

    *value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{BrokenVisibility, ManualScheduler, ManualVisibility};

    fn recording() -> (Rc<RefCell<Vec<bool>>>, impl Fn(bool) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |value| sink.borrow_mut().push(value))
    }

    #[test]
    fn replacing_the_controller_clears_a_stale_reveal() {
        let scheduler = ManualScheduler::new();
        let source = ManualVisibility::new();
        let (seen, on_change) = recording();
        let first = start_reveal(
            RevealConfig::default(),
            Rc::new(scheduler.clone()),
            Some(&source),
            on_change,
        );
        source.set_visible(true);
        assert!(first.is_revealed());
        drop(first);

        // New config while the element is off-screen: the observer's first
        // report is "not visible", which the fresh controller would swallow
        let (replaced, on_change) = recording();
        let second = start_reveal(
            RevealConfig {
                trigger_once: false,
                ..RevealConfig::default()
            },
            Rc::new(scheduler),
            Some(&source),
            on_change,
        );
        source.set_visible(false);
        assert_eq!(*seen.borrow(), vec![false, true]);
        assert_eq!(*replaced.borrow(), vec![false]);
        assert!(!second.is_revealed());
        assert_eq!(source.subscriber_count(), 1);
    }

    #[test]
    fn unbound_or_broken_source_still_reports_hidden() {
        let (seen, on_change) = recording();
        let idle = start_reveal(
            RevealConfig::default(),
            Rc::new(ManualScheduler::new()),
            None,
            on_change,
        );
        assert!(!idle.is_attached());

        let (broken, on_change) = recording();
        let failed = start_reveal(
            RevealConfig::default(),
            Rc::new(ManualScheduler::new()),
            Some(&BrokenVisibility),
            on_change,
        );
        assert!(!failed.is_attached());
        assert_eq!(*seen.borrow(), vec![false]);
        assert_eq!(*broken.borrow(), vec![false]);
    }
}
