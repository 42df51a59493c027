//! `ripple-ops` — operators over the stream primitive.
//!
//! Every operator here follows the same recipe: build a new
//! [`Observable`] whose subscription action subscribes to the upstream
//! Observable with a small synthetic [`Observer`](ripple_core::Observer)
//! struct that transforms, filters, or redispatches each event before
//! forwarding it downstream. Operators share no state beyond what their
//! action captures, so they compose freely.
//!
//! The thread-hopping operators take an [`Executor`] from the composing
//! code; this crate never creates an execution context of its own.

pub mod filter;
pub mod map;
pub mod observe_on;
pub mod subscribe_on;


use ripple_core::Observable;
use ripple_exec::Executor;

/// Method-call sugar for the operator free functions.
pub trait ObservableExt<T: 'static> {
    /// Transform each item with `transform`; terminals pass through.
    fn map<U, F>(&self, transform: F) -> Observable<U>
    where
        U: 'static,
        F: Fn(T) -> U + Send + Sync + 'static;

    /// Forward only the items for which `predicate` holds.
    fn filter<P>(&self, predicate: P) -> Observable<T>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static;

    /// Run the whole upstream subscription on `executor`.
    fn subscribe_on<E>(&self, executor: E) -> Observable<T>
    where
        E: Executor + 'static;

    /// Redispatch each delivery onto `executor`, in emission order.
    fn observe_on<E>(&self, executor: E) -> Observable<T>
    where
        T: Send,
        E: Executor + Clone + 'static;
}

impl<T: 'static> ObservableExt<T> for Observable<T> {
    fn map<U, F>(&self, transform: F) -> Observable<U>
    where
        U: 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        map::map(self, transform)
    }

    fn filter<P>(&self, predicate: P) -> Observable<T>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        filter::filter(self, predicate)
    }

    fn subscribe_on<E>(&self, executor: E) -> Observable<T>
    where
        E: Executor + 'static,
    {
        subscribe_on::subscribe_on(self, executor)
    }

    fn observe_on<E>(&self, executor: E) -> Observable<T>
    where
        T: Send,
        E: Executor + Clone + 'static,
    {
        observe_on::observe_on(self, executor)
    }
}
