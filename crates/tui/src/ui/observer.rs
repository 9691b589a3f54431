//! Width observation for laid-out regions.
//!
//! Components that need to react to their own width (the overflow nav bar)
//! subscribe through [`WidthObserver`] instead of reading terminal size
//! directly. The render pass is the host: after computing the layout it calls
//! [`LayoutObserver::report`] for each observed target, and subscribers are
//! notified only when the width actually changed. Nothing polls.
//!
//! The returned [`Subscription`] detaches its callback when dropped, so an
//! observer can never call back into a component that has been torn down.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

use thiserror::Error;
use tracing::trace;

/// Callback receiving the new width of an observed target.
pub type WidthCallback = Box<dyn FnMut(u32)>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObserveError {
    #[error("width observation is unavailable in this environment")]
    Unavailable,
}

/// Capability to observe width changes of a named layout target.
pub trait WidthObserver {
    /// Registers `callback` for `target`. If the target already has a known
    /// width the callback fires once immediately with it.
    fn observe(&self, target: &str, callback: WidthCallback) -> Result<Subscription, ObserveError>;
}

/// Handle that keeps a callback registered; dropping it unsubscribes.
#[must_use = "dropping a Subscription detaches its callback"]
pub struct Subscription {
    detach: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    fn new(detach: impl FnOnce() + 'static) -> Self {
        Self {
            detach: Some(Box::new(detach)),
        }
    }

    /// Detaches the callback now.
    pub fn unsubscribe(mut self) {
        self.detach_now();
    }

    fn detach_now(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("attached", &self.detach.is_some()).finish()
    }
}

type SharedCallback = Rc<RefCell<WidthCallback>>;

#[derive(Default)]
struct TargetWatch {
    last_width: Option<u32>,
    callbacks: Vec<(u64, SharedCallback)>,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    targets: HashMap<String, TargetWatch>,
}

impl Registry {
    fn is_registered(&self, target: &str, id: u64) -> bool {
        self.targets
            .get(target)
            .is_some_and(|watch| watch.callbacks.iter().any(|(existing, _)| *existing == id))
    }
}

/// Observer fed by the render pass.
#[derive(Clone, Default)]
pub struct LayoutObserver {
    registry: Rc<RefCell<Registry>>,
}

impl fmt::Debug for LayoutObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registry = self.registry.borrow();
        f.debug_struct("LayoutObserver")
            .field("targets", &registry.targets.len())
            .finish()
    }
}

impl LayoutObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports the laid-out width of `target`.
    ///
    /// Subscribers fire only when the width differs from the last report.
    /// Returns `true` when the width changed.
    pub fn report(&self, target: &str, width: u32) -> bool {
        let snapshot = {
            let mut registry = self.registry.borrow_mut();
            let watch = registry.targets.entry(target.to_string()).or_default();
            if watch.last_width == Some(width) {
                return false;
            }
            trace!(target_id = target, width, previous = ?watch.last_width, "layout width changed");
            watch.last_width = Some(width);
            watch.callbacks.clone()
        };

        for (id, callback) in snapshot {
            // A callback may have been detached by an earlier one in this dispatch.
            if self.registry.borrow().is_registered(target, id) {
                (callback.borrow_mut())(width);
            }
        }
        true
    }

    /// Number of live subscriptions for `target`.
    #[cfg(test)]
    pub fn subscriber_count(&self, target: &str) -> usize {
        self.registry
            .borrow()
            .targets
            .get(target)
            .map(|watch| watch.callbacks.len())
            .unwrap_or_default()
    }
}

impl WidthObserver for LayoutObserver {
    fn observe(&self, target: &str, mut callback: WidthCallback) -> Result<Subscription, ObserveError> {
        let (id, initial) = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;
            let initial = registry.targets.get(target).and_then(|watch| watch.last_width);
            (id, initial)
        };

        if let Some(width) = initial {
            callback(width);
        }

        self.registry
            .borrow_mut()
            .targets
            .entry(target.to_string())
            .or_default()
            .callbacks
            .push((id, Rc::new(RefCell::new(callback))));

        let registry: Weak<RefCell<Registry>> = Rc::downgrade(&self.registry);
        let target = target.to_string();
        Ok(Subscription::new(move || {
            let Some(registry) = registry.upgrade() else {
                return;
            };
            let mut registry = registry.borrow_mut();
            if let Some(watch) = registry.targets.get_mut(&target) {
                watch.callbacks.retain(|(existing, _)| *existing != id);
            }
        }))
    }
}

/// Observer for hosts without layout notifications; every call fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableObserver;

impl WidthObserver for UnavailableObserver {
    fn observe(&self, _target: &str, _callback: WidthCallback) -> Result<Subscription, ObserveError> {
        Err(ObserveError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn recording_callback(sink: &Rc<RefCell<Vec<u32>>>) -> WidthCallback {
        let sink = Rc::clone(sink);
        Box::new(move |width| sink.borrow_mut().push(width))
    }

    #[test]
    fn fires_only_on_width_changes() {
        let observer = LayoutObserver::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let _subscription = observer.observe("nav", recording_callback(&seen)).expect("observe");

        assert!(observer.report("nav", 80));
        assert!(!observer.report("nav", 80));
        assert!(observer.report("nav", 60));
        assert!(observer.report("other", 10));

        assert_eq!(*seen.borrow(), vec![80, 60]);
    }

    #[test]
    fn late_subscriber_receives_current_width() {
        let observer = LayoutObserver::new();
        observer.report("nav", 120);

        let seen = Rc::new(RefCell::new(Vec::new()));
        let _subscription = observer.observe("nav", recording_callback(&seen)).expect("observe");
        assert_eq!(*seen.borrow(), vec![120]);
    }

    #[test]
    fn dropping_subscription_stops_callbacks() {
        let observer = LayoutObserver::new();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let subscription = observer
            .observe("nav", Box::new(move |_| counter.set(counter.get() + 1)))
            .expect("observe");
        assert_eq!(observer.subscriber_count("nav"), 1);

        observer.report("nav", 1);
        drop(subscription);
        observer.report("nav", 2);

        assert_eq!(calls.get(), 1);
        assert_eq!(observer.subscriber_count("nav"), 0);
    }

    #[test]
    fn explicit_unsubscribe_detaches() {
        let observer = LayoutObserver::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let subscription = observer.observe("nav", recording_callback(&seen)).expect("observe");
        subscription.unsubscribe();
        observer.report("nav", 5);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn subscription_outliving_observer_is_harmless() {
        let subscription = {
            let observer = LayoutObserver::new();
            observer.observe("nav", Box::new(|_| {})).expect("observe")
        };
        drop(subscription);
    }

    #[test]
    fn unavailable_observer_refuses() {
        let result = UnavailableObserver.observe("nav", Box::new(|_| {}));
        assert_eq!(result.err(), Some(ObserveError::Unavailable));
    }
}
