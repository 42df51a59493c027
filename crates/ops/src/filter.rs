//! Predicate-based item selection.

use std::sync::Arc;

use ripple_core::{Fault, Observable, Observer, SharedObserver};

struct FilterObserver<T> {
    downstream: SharedObserver<T>,
    predicate: Arc<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T: 'static> Observer<T> for FilterObserver<T> {
    fn on_next(&self, item: T) {
        if (self.predicate)(&item) {
            self.downstream.on_next(item);
        }
    }

    fn on_complete(&self) {
        self.downstream.on_complete();
    }

    fn on_error(&self, fault: Fault) {
        self.downstream.on_error(fault);
    }
}

/// Forward only the upstream items for which `predicate` returns true.
///
/// Relative order of the surviving items and the terminal event are
/// preserved; a stream whose every item is dropped still completes.
pub fn filter<T, P>(upstream: &Observable<T>, predicate: P) -> Observable<T>
where
    T: 'static,
    P: Fn(&T) -> bool + Send + Sync + 'static,
{
    let upstream = upstream.clone();
    let predicate: Arc<dyn Fn(&T) -> bool + Send + Sync> = Arc::new(predicate);
    Observable::new(move |downstream| {
        upstream.subscribe(FilterObserver {
            downstream,
            predicate: Arc::clone(&predicate),
        });
        Ok(())
    })
}
