//! The producer side of a subscription.

use std::sync::Arc;

use tracing::debug;

use crate::observer::Observer;

/// Error payload delivered through [`Observer::on_error`].
///
/// The contract does not prescribe an error taxonomy; producers wrap
/// whatever failed with `anyhow` and consumers downcast if they care.
pub type Fault = anyhow::Error;

/// An observer as shared by a subscription action.
///
/// Actions receive the observer behind an `Arc` so they can move it to a
/// worker thread, or clone it per delivery, without the core prescribing
/// either.
pub type SharedObserver<T> = Arc<dyn Observer<T>>;

type SubscribeAction<T> = dyn Fn(SharedObserver<T>) -> Result<(), Fault> + Send + Sync;

/// A push-based producer of zero or more items and at most one terminal
/// event.
///
/// An `Observable` holds a single *subscription action*, which it invokes
/// whenever an observer subscribes. The action may call the observer's
/// `on_next` method zero or more times, followed by at most one call to
/// either `on_complete` or `on_error`.
///
/// Deliveries may happen from different threads, but they must happen in
/// series: the action (or the operator composing it) must make sure that
/// earlier calls *happen before* later calls.
///
/// ## Sharing and lifecycle
///
/// The stored action is immutable; `Clone` is a cheap handle clone. Every
/// `subscribe` call is an independent activation of the action; the
/// `Observable` keeps no per-subscription state, and concurrent
/// subscriptions do not interact.
///
/// ## What this deliberately does not do
///
/// No backpressure, no cancellation, no built-in scheduler. Whether
/// `subscribe` blocks until the sequence is done or returns while it
/// proceeds elsewhere is entirely up to the action; callers learn about
/// completion only through the terminal events.
pub struct Observable<T> {
    on_subscribe: Arc<SubscribeAction<T>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            on_subscribe: Arc::clone(&self.on_subscribe),
        }
    }
}

impl<T: 'static> Observable<T> {
    /// Wrap a subscription action.
    ///
    /// Returning `Err` from the action is the producer-fault path: the
    /// failure is delivered to the observer as `on_error` by
    /// [`subscribe`](Observable::subscribe). Panics are not caught.
    pub fn new<F>(on_subscribe: F) -> Self
    where
        F: Fn(SharedObserver<T>) -> Result<(), Fault> + Send + Sync + 'static,
    {
        Self {
            on_subscribe: Arc::new(on_subscribe),
        }
    }

    /// Emits each item of `items` in order, then completes.
    ///
    /// Items are collected up front and cloned per subscription, so every
    /// subscriber sees the full sequence.
    pub fn from_iter<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Clone + Send + Sync,
    {
        let items: Vec<T> = items.into_iter().collect();
        Self::new(move |observer| {
            for item in items.iter().cloned() {
                observer.on_next(item);
            }
            observer.on_complete();
            Ok(())
        })
    }

    /// Emits a single item, then completes.
    pub fn just(item: T) -> Self
    where
        T: Clone + Send + Sync,
    {
        Self::from_iter([item])
    }

    /// Completes immediately without emitting anything.
    pub fn empty() -> Self {
        Self::new(|observer| {
            observer.on_complete();
            Ok(())
        })
    }

    /// Fails every subscription with a fault from `fault`.
    ///
    /// The factory is invoked per subscription because a [`Fault`] is
    /// consumed by delivery.
    pub fn fail<F>(fault: F) -> Self
    where
        F: Fn() -> Fault + Send + Sync + 'static,
    {
        Self::new(move |_observer| Err(fault()))
    }

    /// Subscribe `observer` to this Observable.
    ///
    /// Invokes the subscription action with the observer, synchronously
    /// from the caller's point of view; the action decides whether to
    /// block until the sequence is done or hand the work to another
    /// execution context and return.
    ///
    /// If the action returns `Err` without having produced a terminal
    /// event, the failure is delivered as exactly one `on_error` call
    /// instead of surfacing to the caller. If the action already delivered
    /// a terminal event before failing, it has broken the at-most-one-
    /// terminal invariant; that case is not guarded here.
    ///
    /// Only this direct invocation site performs the translation. Nested
    /// subscriptions made by operators get their own translation because
    /// each operator re-subscribes through a fresh `Observable`, not
    /// because failures are re-wrapped on the way out.
    pub fn subscribe<O>(&self, observer: O)
    where
        O: Observer<T> + 'static,
    {
        self.subscribe_shared(Arc::new(observer));
    }

    /// [`subscribe`](Observable::subscribe) for an already-shared observer.
    pub fn subscribe_shared(&self, observer: SharedObserver<T>) {
        if let Err(fault) = (self.on_subscribe)(Arc::clone(&observer)) {
            debug!(error = %fault, "subscription action failed, delivering on_error");
            observer.on_error(fault);
        }
    }
}
