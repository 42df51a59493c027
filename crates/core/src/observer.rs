//! The consumer side of a subscription.

use std::sync::Arc;

use crate::observable::Fault;

/// Receives the events of a single subscription.
///
/// All three methods have default no-op bodies, so a partial
/// implementation (e.g. one that only cares about items) is valid. An
/// Observable must never assume a specific method is overridden. In
/// particular, a fault delivered to an observer that did not override
/// [`on_error`](Observer::on_error) is dropped silently. That sharp edge
/// is part of the contract, not a bug.
///
/// ## Call protocol
///
/// For one subscription:
/// - `on_next` is called zero or more times;
/// - then at most one of `on_complete` / `on_error` is called;
/// - nothing is called after a terminal event.
///
/// Deliveries may come from different threads, but the producer side must
/// serialize them: no two deliveries for the same subscription run
/// concurrently, and each delivery *happens-before* the next.
///
/// ## Thread safety
///
/// `Send + Sync` are supertraits because operators may move the observer
/// to a worker thread or share it across deliveries. Observers that
/// accumulate state should use interior mutability (`Mutex`, atomics).
///
/// ## Reuse
///
/// Construct a fresh observer per `subscribe` call. Sharing one observer
/// across subscriptions is possible (see the `Arc` blanket impl) but the
/// caller then owns the concurrent/reentrant-activation risk.
pub trait Observer<T>: Send + Sync {
    /// Called when the Observable emits an item.
    fn on_next(&self, _item: T) {}

    /// Called when the Observable will emit no more items.
    fn on_complete(&self) {}

    /// Called when the producer failed; no more items will be emitted.
    fn on_error(&self, _fault: Fault) {}
}

impl<T, O> Observer<T> for Arc<O>
where
    O: Observer<T> + ?Sized,
{
    fn on_next(&self, item: T) {
        (**self).on_next(item);
    }

    fn on_complete(&self) {
        (**self).on_complete();
    }

    fn on_error(&self, fault: Fault) {
        (**self).on_error(fault);
    }
}

/// Closure-backed [`Observer`].
///
/// Rust has no anonymous-subclass override, so this is the ergonomic way
/// to subscribe with ad-hoc callbacks. Unset callbacks keep the default
/// no-op behavior.
pub struct CallbackObserver<T> {
    next: Option<Box<dyn Fn(T) + Send + Sync>>,
    complete: Option<Box<dyn Fn() + Send + Sync>>,
    error: Option<Box<dyn Fn(Fault) + Send + Sync>>,
}

impl<T> CallbackObserver<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_next(mut self, f: impl Fn(T) + Send + Sync + 'static) -> Self {
        self.next = Some(Box::new(f));
        self
    }

    pub fn with_complete(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.complete = Some(Box::new(f));
        self
    }

    pub fn with_error(mut self, f: impl Fn(Fault) + Send + Sync + 'static) -> Self {
        self.error = Some(Box::new(f));
        self
    }
}

impl<T> Default for CallbackObserver<T> {
    fn default() -> Self {
        Self {
            next: None,
            complete: None,
            error: None,
        }
    }
}

impl<T> Observer<T> for CallbackObserver<T> {
    fn on_next(&self, item: T) {
        if let Some(f) = &self.next {
            f(item);
        }
    }

    fn on_complete(&self) {
        if let Some(f) = &self.complete {
            f();
        }
    }

    fn on_error(&self, fault: Fault) {
        if let Some(f) = &self.error {
            f(fault);
        }
    }
}
