//! Scroll and intersection signals.
//!
//! Components never touch `window` listeners directly. They subscribe
//! through a [`ViewportSource`] and hold on to the returned
//! [`Subscription`] for as long as they are mounted; dropping the handle
//! deregisters the listener.

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};

use crate::state::ScrollMonitor;

/// Handle to a registered listener. Released exactly once, on drop.
#[must_use = "dropping a subscription deregisters its listener"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A handle that owns nothing, for when registration never happened.
    pub fn noop() -> Self {
        Self { release: None }
    }

    pub fn release(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

pub trait ViewportSource {
    /// What an intersection watcher is attached to.
    type Target;

    /// Calls `handler` with the vertical scroll offset on every scroll event.
    fn on_scroll<F>(&self, handler: F) -> Subscription
    where
        F: FnMut(f64) + 'static;

    /// Calls `handler` with the intersection status of each report for `target`.
    fn observe<F>(&self, target: &Self::Target, handler: F) -> Subscription
    where
        F: FnMut(bool) + 'static;
}

/// Feeds the "scrolled past threshold" flag to `on_change` on every scroll event.
pub fn watch_scroll<S, F>(source: &S, monitor: ScrollMonitor, mut on_change: F) -> Subscription
where
    S: ViewportSource,
    F: FnMut(bool) + 'static,
{
    source.on_scroll(move |offset| on_change(monitor.is_scrolled(offset)))
}

/// Feeds the visibility of `target` to `on_change` on every crossing, in or out.
pub fn watch_visibility<S, F>(source: &S, target: &S::Target, mut on_change: F) -> Subscription
where
    S: ViewportSource,
    F: FnMut(bool) + 'static,
{
    source.observe(target, move |intersecting| on_change(intersecting))
}

/// The real page: window scroll events and `IntersectionObserver`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserViewport;

impl ViewportSource for BrowserViewport {
    type Target = Element;

    fn on_scroll<F>(&self, mut handler: F) -> Subscription
    where
        F: FnMut(f64) + 'static,
    {
        let Some(window) = web_sys::window() else {
            warn!("No window available, scroll listener not registered");
            return Subscription::noop();
        };

        let reader = window.clone();
        let callback = Closure::<dyn FnMut()>::new(move || match reader.scroll_y() {
            Ok(offset) => handler(offset),
            Err(err) => warn!("Failed to read scroll offset: {:?}", err),
        });

        if let Err(err) =
            window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
        {
            warn!("Failed to register scroll listener: {:?}", err);
            return Subscription::noop();
        }
        debug!("Scroll listener registered");

        Subscription::new(move || {
            if let Err(err) = window
                .remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            {
                warn!("Failed to remove scroll listener: {:?}", err);
            }
            debug!("Scroll listener released");
        })
    }

    fn observe<F>(&self, target: &Element, mut handler: F) -> Subscription
    where
        F: FnMut(bool) + 'static,
    {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                        handler(entry.is_intersecting());
                    }
                }
            },
        );

        let observer = match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => observer,
            Err(err) => {
                warn!("Failed to create intersection observer: {:?}", err);
                return Subscription::noop();
            }
        };
        observer.observe(target);
        debug!("Intersection observer attached");

        Subscription::new(move || {
            observer.disconnect();
            drop(callback);
            debug!("Intersection observer disconnected");
        })
    }
}


#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::synthetic::SyntheticViewport;
    use super::*;
    use crate::state::FadeState;

    #[test]
    fn scroll_flag_tracks_most_recent_offset() {
        let viewport = SyntheticViewport::default();
        let scrolled = Rc::new(Cell::new(false));
        let _sub = {
            let scrolled = scrolled.clone();
            watch_scroll(&viewport, ScrollMonitor::default(), move |flag| scrolled.set(flag))
        };

        viewport.scroll_to(49.0);
        assert!(!scrolled.get());
        viewport.scroll_to(51.0);
        assert!(scrolled.get());
        viewport.scroll_to(10.0);
        assert!(!scrolled.get());
    }

    #[test]
    fn offset_at_threshold_is_not_scrolled() {
        let viewport = SyntheticViewport::default();
        let scrolled = Rc::new(Cell::new(true));
        let _sub = {
            let scrolled = scrolled.clone();
            watch_scroll(&viewport, ScrollMonitor::default(), move |flag| scrolled.set(flag))
        };

        viewport.scroll_to(50.0);
        assert!(!scrolled.get());
    }

    #[test]
    fn every_scroll_event_is_reported() {
        let viewport = SyntheticViewport::default();
        let calls = Rc::new(Cell::new(0));
        let _sub = {
            let calls = calls.clone();
            watch_scroll(&viewport, ScrollMonitor::default(), move |_| {
                calls.set(calls.get() + 1)
            })
        };

        viewport.scroll_to(100.0);
        viewport.scroll_to(120.0);
        viewport.scroll_to(140.0);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn dropping_subscription_stops_scroll_updates() {
        let viewport = SyntheticViewport::default();
        let scrolled = Rc::new(Cell::new(false));
        let sub = {
            let scrolled = scrolled.clone();
            watch_scroll(&viewport, ScrollMonitor::default(), move |flag| scrolled.set(flag))
        };
        assert_eq!(viewport.live_scroll_listeners(), 1);

        sub.release();
        assert_eq!(viewport.live_scroll_listeners(), 0);

        viewport.scroll_to(500.0);
        assert!(!scrolled.get());
    }

    #[test]
    fn intersection_reports_only_reach_the_watched_target() {
        let viewport = SyntheticViewport::default();
        let first = Rc::new(Cell::new(false));
        let second = Rc::new(Cell::new(false));
        let _a = {
            let first = first.clone();
            viewport.observe(&1, move |visible| first.set(visible))
        };
        let _b = {
            let second = second.clone();
            viewport.observe(&2, move |visible| second.set(visible))
        };

        viewport.set_intersecting(1, true);
        assert!(first.get());
        assert!(!second.get());
    }

    #[test]
    fn dropped_observer_is_disconnected() {
        let viewport = SyntheticViewport::default();
        {
            let _sub = viewport.observe(&7, |_| {});
            assert_eq!(viewport.live_observers(), 1);
        }
        assert_eq!(viewport.live_observers(), 0);
    }

    #[test]
    fn noop_subscription_leaves_listeners_alone() {
        let viewport = SyntheticViewport::default();
        let _live = viewport.on_scroll(|_| {});

        Subscription::noop().release();
        assert_eq!(viewport.live_scroll_listeners(), 1);
    }

    #[test]
    fn visibility_follows_every_crossing() {
        let viewport = SyntheticViewport::default();
        let fade = Rc::new(Cell::new(FadeState::new(0)));
        let _sub = {
            let fade = fade.clone();
            watch_visibility(&viewport, &3, move |visible| fade.set(fade.get().apply(visible)))
        };
        assert!(!fade.get().visible);

        viewport.set_intersecting(3, true);
        assert_eq!(fade.get().class_name(), "fade-in visible");
        viewport.set_intersecting(3, false);
        assert_eq!(fade.get().class_name(), "fade-in");
        viewport.set_intersecting(3, true);
        assert!(fade.get().visible);
    }

    #[test]
    fn visibility_stops_after_release() {
        let viewport = SyntheticViewport::default();
        let visible = Rc::new(Cell::new(false));
        let sub = {
            let visible = visible.clone();
            watch_visibility(&viewport, &4, move |flag| visible.set(flag))
        };
        assert_eq!(viewport.live_observers(), 1);

        sub.release();
        assert_eq!(viewport.live_observers(), 0);
        viewport.set_intersecting(4, true);
        assert!(!visible.get());
    }

    #[test]
    fn handler_can_drop_its_own_subscription() {
        let viewport = SyntheticViewport::default();
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let calls = Rc::new(Cell::new(0));
        let sub = {
            let slot = slot.clone();
            let calls = calls.clone();
            viewport.on_scroll(move |_| {
                calls.set(calls.get() + 1);
                slot.borrow_mut().take();
            })
        };
        *slot.borrow_mut() = Some(sub);

        viewport.scroll_to(80.0);
        assert_eq!(viewport.live_scroll_listeners(), 0);
        viewport.scroll_to(90.0);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn release_runs_once() {
        let runs = Rc::new(Cell::new(0));
        let sub = {
            let runs = runs.clone();
            Subscription::new(move || runs.set(runs.get() + 1))
        };
        sub.release();
        assert_eq!(runs.get(), 1);
    }
}
