//! Move event delivery onto another execution context.

use std::sync::Arc;

use tracing::warn;

use ripple_core::{Fault, Observable, Observer, SharedObserver};
use ripple_exec::{Executor, SerialExecutor, Task};

struct DispatchObserver<T> {
    downstream: SharedObserver<T>,
    deliveries: SerialExecutor,
}

impl<T> DispatchObserver<T> {
    fn dispatch(&self, delivery: Task) {
        // Delivering a synthetic terminal here could interleave with
        // deliveries still queued behind it, so a rejected dispatch is
        // dropped. Executor lifecycle belongs to the composing code.
        if let Err(error) = self.deliveries.execute(delivery) {
            warn!(%error, "dropping delivery rejected by the target executor");
        }
    }
}

impl<T> Observer<T> for DispatchObserver<T>
where
    T: Send + 'static,
{
    fn on_next(&self, item: T) {
        let downstream = Arc::clone(&self.downstream);
        self.dispatch(Box::new(move || downstream.on_next(item)));
    }

    fn on_complete(&self) {
        let downstream = Arc::clone(&self.downstream);
        self.dispatch(Box::new(move || downstream.on_complete()));
    }

    fn on_error(&self, fault: Fault) {
        let downstream = Arc::clone(&self.downstream);
        self.dispatch(Box::new(move || downstream.on_error(fault)));
    }
}

/// Redispatch every delivery onto `executor`, preserving emission order.
///
/// The returned Observable subscribes to the upstream synchronously on
/// the subscribing thread; each `on_next` / `on_complete` / `on_error` is
/// then submitted to `executor` individually. A fresh
/// [`SerialExecutor`] per subscription keeps deliveries totally ordered
/// with happens-before between consecutive ones, even when `executor` is
/// a multi-worker pool.
pub fn observe_on<T, E>(upstream: &Observable<T>, executor: E) -> Observable<T>
where
    T: Send + 'static,
    E: Executor + Clone + 'static,
{
    let upstream = upstream.clone();
    Observable::new(move |downstream| {
        let deliveries = SerialExecutor::new(executor.clone());
        upstream.subscribe(DispatchObserver {
            downstream,
            deliveries,
        });
        Ok(())
    })
}
