//! Paging state for carousels and paged panels.
//!
//! [`Pager`] is the pure ring arithmetic. [`CarouselController`] adds the
//! auto-advance timer and hover suspension on top of it.

use std::cell::RefCell;
use std::ops::Range;
use std::rc::{Rc, Weak};

use log::debug;

use crate::config::DEFAULT_AUTO_PLAY_INTERVAL_MS;
use crate::scheduler::{Scheduler, TaskHandle};

/// Current page over `item_count` items shown `items_per_view` at a time.
///
/// Invariant: `current_page < page_count()` after every operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    item_count: usize,
    items_per_view: usize,
    current_page: usize,
}

impl Pager {
    pub fn new(item_count: usize, items_per_view: usize) -> Self {
        Pager {
            item_count,
            items_per_view: items_per_view.max(1),
            current_page: 0,
        }
    }

    pub fn page_count_for(item_count: usize, items_per_view: usize) -> usize {
        item_count.div_ceil(items_per_view.max(1)).max(1)
    }

    pub fn page_count(&self) -> usize {
        Self::page_count_for(self.item_count, self.items_per_view)
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn items_per_view(&self) -> usize {
        self.items_per_view
    }

    /// Normalizes any index onto the ring, negative ones included.
    pub fn go_to(&mut self, page: i64) {
        let count = self.page_count() as i64;
        self.current_page = page.rem_euclid(count) as usize;
    }

    pub fn next(&mut self) {
        self.go_to(self.current_page as i64 + 1);
    }

    pub fn previous(&mut self) {
        self.go_to(self.current_page as i64 - 1);
    }

    /// Changes both dimensions and clamps once against the final shape.
    pub fn reshape(&mut self, item_count: usize, items_per_view: usize) {
        self.item_count = item_count;
        self.items_per_view = items_per_view.max(1);
        self.clamp();
    }

    fn clamp(&mut self) {
        let last = self.page_count() - 1;
        if self.current_page > last {
            self.current_page = last;
        }
    }

    /// Flat item indices shown on `page`. The last page may be short; pages
    /// past the end are empty.
    pub fn page_range(&self, page: usize) -> Range<usize> {
        let start = page.saturating_mul(self.items_per_view).min(self.item_count);
        let end = start.saturating_add(self.items_per_view).min(self.item_count);
        start..end
    }

    pub fn page_items<'a, T>(&self, items: &'a [T], page: usize) -> &'a [T] {
        let range = self.page_range(page);
        let end = range.end.min(items.len());
        &items[range.start.min(end)..end]
    }

    pub fn current_items<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        self.page_items(items, self.current_page)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselConfig {
    pub items_per_view: usize,
    pub auto_play: bool,
    pub auto_play_interval_ms: u32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        CarouselConfig {
            items_per_view: 1,
            auto_play: false,
            auto_play_interval_ms: DEFAULT_AUTO_PLAY_INTERVAL_MS,
        }
    }
}

struct State {
    pager: Pager,
    auto_play: bool,
    interval_ms: u32,
    suspended: bool,
    released: bool,
    timer: Option<TaskHandle>,
}

struct Inner {
    scheduler: Rc<dyn Scheduler>,
    listener: Option<Rc<dyn Fn(usize)>>,
    state: RefCell<State>,
}

/// A carousel's page index plus its auto-advance timer.
///
/// The timer is re-armed only after a tick has been applied, so ticks never
/// overlap, and it is cancelled for good when the controller is dropped.
pub struct CarouselController {
    inner: Rc<Inner>,
}

impl CarouselController {
    pub fn new(item_count: usize, config: CarouselConfig, scheduler: Rc<dyn Scheduler>) -> Self {
        Self::build(item_count, config, scheduler, None)
    }

    /// Like [`CarouselController::new`], calling `listener` with the new page
    /// whenever it changes.
    pub fn with_listener(
        item_count: usize,
        config: CarouselConfig,
        scheduler: Rc<dyn Scheduler>,
        listener: impl Fn(usize) + 'static,
    ) -> Self {
        Self::build(item_count, config, scheduler, Some(Rc::new(listener)))
    }

    fn build(
        item_count: usize,
        config: CarouselConfig,
        scheduler: Rc<dyn Scheduler>,
        listener: Option<Rc<dyn Fn(usize)>>,
    ) -> Self {
        let controller = CarouselController {
            inner: Rc::new(Inner {
                scheduler,
                listener,
                state: RefCell::new(State {
                    pager: Pager::new(item_count, config.items_per_view),
                    auto_play: config.auto_play,
                    interval_ms: config.auto_play_interval_ms,
                    suspended: false,
                    released: false,
                    timer: None,
                }),
            }),
        };
        rearm(&controller.inner);
        controller
    }

    pub fn current_page(&self) -> usize {
        self.inner.state.borrow().pager.current_page()
    }

    pub fn page_count(&self) -> usize {
        self.inner.state.borrow().pager.page_count()
    }

    pub fn pager(&self) -> Pager {
        self.inner.state.borrow().pager
    }

    pub fn is_suspended(&self) -> bool {
        self.inner.state.borrow().suspended
    }

    pub fn is_ticking(&self) -> bool {
        self.inner.state.borrow().timer.is_some()
    }

    pub fn go_to(&self, page: i64) {
        navigate(&self.inner, |pager| pager.go_to(page));
    }

    pub fn next(&self) {
        navigate(&self.inner, Pager::next);
    }

    pub fn previous(&self) {
        navigate(&self.inner, Pager::previous);
    }

    /// Hovering suspends auto-advance. Resuming starts a fresh interval;
    /// ticks missed while suspended are not replayed.
    pub fn set_suspended(&self, suspended: bool) {
        {
            let mut state = self.inner.state.borrow_mut();
            if state.released || state.suspended == suspended {
                return;
            }
            state.suspended = suspended;
        }
        debug!("Carousel {}", if suspended { "suspended" } else { "resumed" });
        rearm(&self.inner);
    }

    /// Replaces the item sequence length. The page is clamped right away
    /// if the carousel shrank.
    pub fn set_item_count(&self, item_count: usize) {
        let items_per_view = self.pager().items_per_view();
        self.reshape(item_count, items_per_view);
    }

    pub fn set_items_per_view(&self, items_per_view: usize) {
        let item_count = self.pager().item_count();
        self.reshape(item_count, items_per_view);
    }

    /// Sets item count and items per view together, so a page that is valid
    /// under the new shape is never clamped on the way there.
    pub fn reshape(&self, item_count: usize, items_per_view: usize) {
        self.apply(|state| {
            state.pager.reshape(item_count, items_per_view);
            false
        });
    }

    /// Applies a new item count and configuration in one step, keeping the
    /// current page where possible. The timer restarts only if the timing
    /// or the net page count changed.
    pub fn configure(&self, item_count: usize, config: CarouselConfig) {
        self.apply(|state| {
            let timing_changed = state.auto_play != config.auto_play
                || state.interval_ms != config.auto_play_interval_ms;
            state.auto_play = config.auto_play;
            state.interval_ms = config.auto_play_interval_ms;
            state.pager.reshape(item_count, config.items_per_view);
            timing_changed
        });
    }

    /// Runs `change` on the state; it returns whether the timing changed.
    fn apply(&self, change: impl FnOnce(&mut State) -> bool) {
        let (before, after, timing_changed) = {
            let mut state = self.inner.state.borrow_mut();
            if state.released {
                return;
            }
            let before = state.pager;
            let timing_changed = change(&mut state);
            (before, state.pager, timing_changed)
        };
        if timing_changed || before.page_count() != after.page_count() {
            rearm(&self.inner);
        }
        if before.current_page() != after.current_page() {
            notify(&self.inner, after.current_page());
        }
    }

    /// Cancels the timer for good. Safe to call more than once.
    pub fn release(&self) {
        let timer = {
            let mut state = self.inner.state.borrow_mut();
            state.released = true;
            state.timer.take()
        };
        drop(timer);
    }
}

impl Drop for CarouselController {
    fn drop(&mut self) {
        self.release();
    }
}

fn navigate(inner: &Rc<Inner>, step: impl FnOnce(&mut Pager)) {
    let moved = {
        let mut state = inner.state.borrow_mut();
        if state.released {
            return;
        }
        let before = state.pager.current_page();
        step(&mut state.pager);
        let after = state.pager.current_page();
        (before != after).then_some(after)
    };
    if let Some(page) = moved {
        notify(inner, page);
    }
}

fn notify(inner: &Inner, page: usize) {
    debug!("Carousel moved to page {}", page);
    if let Some(listener) = inner.listener.clone() {
        listener(page);
    }
}

/// Drops the current timer and starts a fresh interval if auto-play should run.
fn rearm(inner: &Rc<Inner>) {
    let (old, delay) = {
        let mut state = inner.state.borrow_mut();
        let old = state.timer.take();
        let should_tick = !state.released && state.auto_play && !state.suspended;
        (old, should_tick.then_some(state.interval_ms))
    };
    drop(old);

    if let Some(delay) = delay {
        let weak = Rc::downgrade(inner);
        let handle = inner
            .scheduler
            .schedule(delay, Box::new(move || tick(&weak)));
        inner.state.borrow_mut().timer = Some(handle);
    }
}

fn tick(weak: &Weak<Inner>) {
    let Some(inner) = weak.upgrade() else {
        return;
    };
    {
        let state = inner.state.borrow();
        if state.released || state.suspended || !state.auto_play {
            return;
        }
    }
    navigate(&inner, Pager::next);
    rearm(&inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ManualScheduler;
    use proptest::prelude::*;

    fn auto(interval: u32, per_view: usize) -> CarouselConfig {
        CarouselConfig {
            items_per_view: per_view,
            auto_play: true,
            auto_play_interval_ms: interval,
        }
    }

    fn recorded(
        item_count: usize,
        config: CarouselConfig,
    ) -> (ManualScheduler, CarouselController, Rc<RefCell<Vec<usize>>>) {
        let scheduler = ManualScheduler::new();
        let pages = Rc::new(RefCell::new(Vec::new()));
        let sink = pages.clone();
        let controller = CarouselController::with_listener(
            item_count,
            config,
            Rc::new(scheduler.clone()),
            move |page| sink.borrow_mut().push(page),
        );
        (scheduler, controller, pages)
    }

    #[test]
    fn ten_items_three_per_page() {
        let pager = Pager::new(10, 3);
        let items: Vec<_> = (0..10).collect();
        assert_eq!(pager.page_count(), 4);
        for page in 0..3 {
            assert_eq!(pager.page_items(&items, page).len(), 3);
        }
        assert_eq!(pager.page_items(&items, 3), &[9]);
        assert_eq!(pager.page_range(1), 3..6);
    }

    #[test]
    fn empty_carousel_is_a_single_page() {
        let (_, carousel, pages) = recorded(0, CarouselConfig { items_per_view: 3, ..Default::default() });
        assert_eq!(carousel.page_count(), 1);
        assert_eq!(carousel.current_page(), 0);
        carousel.next();
        assert_eq!(carousel.current_page(), 0);
        carousel.previous();
        assert_eq!(carousel.current_page(), 0);
        assert!(pages.borrow().is_empty());
        assert!(carousel.pager().current_items::<u8>(&[]).is_empty());
    }

    #[test]
    fn zero_per_view_is_treated_as_one() {
        let pager = Pager::new(5, 0);
        assert_eq!(pager.items_per_view(), 1);
        assert_eq!(pager.page_count(), 5);
    }

    #[test]
    fn previous_from_first_page_wraps_to_last() {
        let mut pager = Pager::new(7, 2);
        pager.previous();
        assert_eq!(pager.current_page(), 3);
        pager.next();
        assert_eq!(pager.current_page(), 0);
    }

    #[test]
    fn pager_reshape_clamps_against_the_final_shape() {
        // 10 items by 3: page 3 holds item 9
        let mut pager = Pager::new(10, 3);
        pager.go_to(3);
        pager.reshape(20, 5);
        assert_eq!(pager.current_page(), 3);
        pager.reshape(4, 0);
        assert_eq!(pager.items_per_view(), 1);
        assert_eq!(pager.current_page(), 3);
        pager.reshape(2, 1);
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn shrinking_clamps_immediately() {
        let (_, carousel, pages) = recorded(10, CarouselConfig::default());
        carousel.go_to(8);
        carousel.set_item_count(4);
        assert_eq!(carousel.current_page(), 3);
        carousel.set_items_per_view(3);
        assert_eq!(carousel.page_count(), 2);
        assert_eq!(carousel.current_page(), 1);
        assert_eq!(*pages.borrow(), vec![8, 3, 1]);
    }

    #[test]
    fn auto_play_advances_every_interval() {
        let (scheduler, carousel, pages) = recorded(3, auto(3000, 1));
        scheduler.advance(2999);
        assert_eq!(carousel.current_page(), 0);
        scheduler.advance(1);
        assert_eq!(carousel.current_page(), 1);
        scheduler.advance(6000);
        assert_eq!(*pages.borrow(), vec![1, 2, 0]);
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn auto_play_off_never_schedules() {
        let (scheduler, carousel, _) = recorded(3, CarouselConfig::default());
        assert!(!carousel.is_ticking());
        scheduler.advance(60_000);
        assert_eq!(carousel.current_page(), 0);
    }

    #[test]
    fn suspension_pauses_without_catch_up() {
        let (scheduler, carousel, _) = recorded(5, auto(1000, 1));
        scheduler.advance(700);
        carousel.set_suspended(true);
        assert!(!carousel.is_ticking());
        scheduler.advance(10_000);
        assert_eq!(carousel.current_page(), 0);

        carousel.set_suspended(false);
        scheduler.advance(999);
        assert_eq!(carousel.current_page(), 0);
        scheduler.advance(1);
        assert_eq!(carousel.current_page(), 1);
    }

    #[test]
    fn suspending_keeps_the_page() {
        let (_, carousel, _) = recorded(5, auto(1000, 1));
        carousel.go_to(3);
        carousel.set_suspended(true);
        carousel.set_suspended(true);
        assert!(carousel.is_suspended());
        assert_eq!(carousel.current_page(), 3);
    }

    #[test]
    fn manual_navigation_does_not_reset_the_interval() {
        let (scheduler, carousel, _) = recorded(5, auto(1000, 1));
        scheduler.advance(600);
        carousel.next();
        scheduler.advance(400);
        assert_eq!(carousel.current_page(), 2);
    }

    #[test]
    fn changing_the_interval_restarts_the_timer() {
        let (scheduler, carousel, _) = recorded(4, auto(1000, 1));
        scheduler.advance(900);
        carousel.configure(4, auto(500, 1));
        scheduler.advance(499);
        assert_eq!(carousel.current_page(), 0);
        scheduler.advance(1);
        assert_eq!(carousel.current_page(), 1);
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn page_count_change_restarts_the_timer() {
        let (scheduler, carousel, _) = recorded(4, auto(1000, 1));
        scheduler.advance(900);
        carousel.set_item_count(6);
        scheduler.advance(900);
        assert_eq!(carousel.current_page(), 0);
        scheduler.advance(100);
        assert_eq!(carousel.current_page(), 1);
    }

    #[test]
    fn combined_reshape_keeps_a_page_valid_under_the_final_shape() {
        let (scheduler, carousel, pages) = recorded(10, auto(1000, 3));
        carousel.go_to(3);
        scheduler.advance(900);
        // 4 pages before and after, though 5 per view over 10 items is only 2
        carousel.configure(20, auto(1000, 5));
        assert_eq!(carousel.page_count(), 4);
        assert_eq!(carousel.current_page(), 3);
        scheduler.advance(100);
        assert_eq!(carousel.current_page(), 0);
        assert_eq!(*pages.borrow(), vec![3, 0]);
    }

    #[test]
    fn reshape_restarts_the_timer_only_when_page_count_changes() {
        let (scheduler, carousel, _) = recorded(6, auto(1000, 2));
        scheduler.advance(900);
        carousel.reshape(9, 3);
        scheduler.advance(100);
        assert_eq!(carousel.current_page(), 1);

        scheduler.advance(900);
        carousel.reshape(9, 2);
        assert_eq!(carousel.page_count(), 5);
        scheduler.advance(100);
        assert_eq!(carousel.current_page(), 1);
        scheduler.advance(900);
        assert_eq!(carousel.current_page(), 2);
    }

    #[test]
    fn drop_cancels_the_timer() {
        let (scheduler, carousel, pages) = recorded(3, auto(1000, 1));
        drop(carousel);
        assert_eq!(scheduler.pending(), 0);
        scheduler.advance(5000);
        assert!(pages.borrow().is_empty());
    }

    #[test]
    fn released_controller_ignores_everything() {
        let (scheduler, carousel, pages) = recorded(3, auto(1000, 1));
        carousel.release();
        carousel.release();
        carousel.next();
        carousel.set_suspended(true);
        carousel.set_suspended(false);
        scheduler.advance(5000);
        assert_eq!(carousel.current_page(), 0);
        assert!(pages.borrow().is_empty());
        assert_eq!(scheduler.pending(), 0);
    }

    proptest! {
        #[test]
        fn go_to_is_euclidean_modulo(items in 0usize..50, per_view in 0usize..6, k in any::<i32>()) {
            let mut pager = Pager::new(items, per_view);
            let p = pager.page_count() as i64;
            pager.go_to(i64::from(k));
            prop_assert_eq!(pager.current_page() as i64, ((i64::from(k) % p) + p) % p);
        }

        #[test]
        fn navigation_stays_on_the_ring(items in 0usize..40, per_view in 1usize..5, steps in prop::collection::vec(any::<bool>(), 0..60)) {
            let mut pager = Pager::new(items, per_view);
            let p = pager.page_count();
            for forward in steps {
                if forward { pager.next() } else { pager.previous() }
                prop_assert!(pager.current_page() < p);
            }
            let start = pager.current_page();
            for _ in 0..p {
                pager.next();
            }
            prop_assert_eq!(pager.current_page(), start);
        }
    }
}
