//! Move the act of subscribing onto another execution context.

use ripple_core::Observable;
use ripple_exec::Executor;

/// Run the entire upstream subscription on `executor`.
///
/// The returned Observable's action submits a task that performs
/// `upstream.subscribe(...)`, so both the upstream action and its whole
/// event sequence execute on the executor's thread(s). The caller's
/// `subscribe` returns once the task is enqueued, not once the sequence
/// completes. Callers that need to know when it is done must wait for
/// the terminal event.
///
/// If the executor rejects the task (it was shut down), the action
/// returns the rejection as a fault, which the subscribing layer delivers
/// downstream as a single `on_error`.
pub fn subscribe_on<T, E>(upstream: &Observable<T>, executor: E) -> Observable<T>
where
    T: 'static,
    E: Executor + 'static,
{
    let upstream = upstream.clone();
    Observable::new(move |downstream| {
        let upstream = upstream.clone();
        executor.execute(Box::new(move || {
            upstream.subscribe_shared(downstream);
        }))?;
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::channel;
    use std::sync::{Arc, Mutex};
    use std::thread;

    use super::*;
    use crate::ObservableExt;
    use ripple_core::{Fault, Observer};
    use ripple_exec::{ExecutorError, SingleWorker, Task};

    #[derive(Default)]
    struct Recorder {
        items: Mutex<Vec<String>>,
        threads: Mutex<Vec<thread::ThreadId>>,
        errors: Mutex<Vec<String>>,
    }

    impl Observer<String> for Recorder {
        fn on_next(&self, item: String) {
            self.items.lock().unwrap().push(item);
            self.threads.lock().unwrap().push(thread::current().id());
        }

        fn on_error(&self, fault: Fault) {
            self.errors.lock().unwrap().push(fault.to_string());
        }
    }

    #[test]
    fn subscription_runs_on_the_worker_and_keeps_order() {
        let worker = SingleWorker::spawn("subscribe-on");
        let source = Observable::from_iter([
            "Hello".to_string(),
            "World".to_string(),
            "!".to_string(),
        ]);

        let (done_tx, done_rx) = channel::<()>();
        let recorder = Arc::new(Recorder::default());
        let observed = source.subscribe_on(worker.clone());

        struct Latching {
            recorder: Arc<Recorder>,
            done: std::sync::mpsc::Sender<()>,
        }
        impl Observer<String> for Latching {
            fn on_next(&self, item: String) {
                self.recorder.on_next(item);
            }
            fn on_complete(&self) {
                let _ = self.done.send(());
            }
        }

        observed.subscribe(Latching {
            recorder: recorder.clone(),
            done: done_tx,
        });
        done_rx.recv().unwrap();

        assert_eq!(*recorder.items.lock().unwrap(), vec!["Hello", "World", "!"]);
        let caller = thread::current().id();
        assert!(
            recorder
                .threads
                .lock()
                .unwrap()
                .iter()
                .all(|id| *id != caller)
        );
        worker.shutdown();
    }

    #[test]
    fn accepts_an_executor_that_is_not_cloneable() {
        struct Dedicated(SingleWorker);
        impl Executor for Dedicated {
            fn execute(&self, task: Task) -> Result<(), ExecutorError> {
                self.0.execute(task)
            }
        }

        let worker = SingleWorker::spawn("subscribe-on");
        let source = Observable::from_iter(["one".to_string(), "two".to_string()]);
        let observed = source.subscribe_on(Dedicated(worker.clone()));

        let (done_tx, done_rx) = channel::<()>();
        struct Done(std::sync::mpsc::Sender<()>);
        impl Observer<String> for Done {
            fn on_complete(&self) {
                let _ = self.0.send(());
            }
        }

        observed.subscribe(Done(done_tx));
        done_rx.recv().unwrap();
        worker.shutdown();
    }

    #[test]
    fn rejection_by_a_shut_down_executor_becomes_on_error() {
        let worker = SingleWorker::spawn("subscribe-on");
        worker.shutdown();

        let source = Observable::from_iter(["never".to_string()]);
        let off_thread = source.subscribe_on(worker);

        let recorder = Arc::new(Recorder::default());
        off_thread.subscribe(recorder.clone());

        assert!(recorder.items.lock().unwrap().is_empty());
        assert_eq!(recorder.errors.lock().unwrap().len(), 1);
    }
}
