use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::PlatformError;

/// Receives `true` when the observed element counts as visible.
pub type VisibilityCallback = Box<dyn Fn(bool)>;

/// Keeps an observation alive. Dropping it stops delivery synchronously.
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Subscription {
            release: Some(Box::new(release)),
        }
    }

    pub fn unsubscribe(mut self) {
        self.run_release();
    }

    fn run_release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// Something that can tell whether an element is on screen.
pub trait VisibilitySource {
    fn observe(&self, on_change: VisibilityCallback) -> Result<Subscription, PlatformError>;
}

/// `IntersectionObserver` bound to a single element.
#[derive(Clone, Debug)]
pub struct IntersectionSource {
    element: Element,
    threshold: f64,
    root_margin: String,
}

impl IntersectionSource {
    pub fn new(element: Element, threshold: f64, root_margin: impl Into<String>) -> Self {
        IntersectionSource {
            element,
            threshold: threshold.clamp(0.0, 1.0),
            root_margin: root_margin.into(),
        }
    }
}

impl VisibilitySource for IntersectionSource {
    fn observe(&self, on_change: VisibilityCallback) -> Result<Subscription, PlatformError> {
        let threshold = self.threshold;
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                        let visible =
                            entry.is_intersecting() && entry.intersection_ratio() >= threshold;
                        on_change(visible);
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        init.set_root_margin(&self.root_margin);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(PlatformError::observer)?;
        observer.observe(&self.element);
        debug!("Observing element with threshold {} and margin {}", threshold, self.root_margin);

        // The closure has to outlive the observer, so both go into the release
        let slot = Rc::new(RefCell::new(Some((observer, callback))));
        Ok(Subscription::new(move || {
            if let Some((observer, callback)) = slot.borrow_mut().take() {
                observer.disconnect();
                drop(callback);
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ManualVisibility;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn updates_stop_after_unsubscribe() {
        let source = ManualVisibility::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let subscription = {
            let seen = seen.clone();
            source
                .observe(Box::new(move |visible| seen.borrow_mut().push(visible)))
                .unwrap()
        };
        assert_eq!(source.subscriber_count(), 1);

        source.set_visible(true);
        source.set_visible(false);
        subscription.unsubscribe();
        source.set_visible(true);

        assert_eq!(*seen.borrow(), vec![true, false]);
        assert_eq!(source.subscriber_count(), 0);
    }
}
