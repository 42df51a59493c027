//! Item transformation.

use std::sync::Arc;

use ripple_core::{Fault, Observable, Observer, SharedObserver};

struct MapObserver<T, U> {
    downstream: SharedObserver<U>,
    transform: Arc<dyn Fn(T) -> U + Send + Sync>,
}

impl<T, U> Observer<T> for MapObserver<T, U>
where
    T: 'static,
    U: 'static,
{
    fn on_next(&self, item: T) {
        self.downstream.on_next((self.transform)(item));
    }

    fn on_complete(&self) {
        self.downstream.on_complete();
    }

    fn on_error(&self, fault: Fault) {
        self.downstream.on_error(fault);
    }
}

/// Forward each upstream item through `transform`.
///
/// Completion behavior is untouched: the mapped stream completes or
/// errors exactly when the upstream does. A `transform` that panics
/// propagates into whoever is delivering the item (consumer-fault
/// policy: not caught here).
pub fn map<T, U, F>(upstream: &Observable<T>, transform: F) -> Observable<U>
where
    T: 'static,
    U: 'static,
    F: Fn(T) -> U + Send + Sync + 'static,
{
    let upstream = upstream.clone();
    let transform: Arc<dyn Fn(T) -> U + Send + Sync> = Arc::new(transform);
    Observable::new(move |downstream| {
        upstream.subscribe(MapObserver {
            downstream,
            transform: Arc::clone(&transform),
        });
        Ok(())
    })
}
