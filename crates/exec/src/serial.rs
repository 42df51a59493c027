//! FIFO serialization adapter over an arbitrary executor.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::executor::{Executor, ExecutorError, Task};

/// Imposes submission-order, one-at-a-time execution on top of any
/// executor.
///
/// Tasks are queued behind a mutex; at most one *drain* task is in flight
/// on the inner executor at any time, and it pops and runs queued tasks
/// until the queue is empty. Consecutive tasks therefore never overlap,
/// and the queue mutex gives each task's effects a happens-before edge to
/// the next. This is the per-subscription delivery contract an observe-on
/// operator needs when its target is a multi-worker pool.
///
/// Cloning shares the queue, so clones serialize with each other.
pub struct SerialExecutor {
    inner: Arc<dyn Executor>,
    state: Arc<Mutex<SerialState>>,
}

struct SerialState {
    queue: VecDeque<Task>,
    draining: bool,
}

impl Clone for SerialExecutor {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            state: Arc::clone(&self.state),
        }
    }
}

impl SerialExecutor {
    pub fn new<E>(inner: E) -> Self
    where
        E: Executor + 'static,
    {
        Self {
            inner: Arc::new(inner),
            state: Arc::new(Mutex::new(SerialState {
                queue: VecDeque::new(),
                draining: false,
            })),
        }
    }
}

impl Executor for SerialExecutor {
    fn execute(&self, task: Task) -> Result<(), ExecutorError> {
        {
            let mut state = self.state.lock().map_err(|_| ExecutorError::Poisoned)?;
            state.queue.push_back(task);
            if state.draining {
                // The in-flight drain will pick this task up.
                return Ok(());
            }
            state.draining = true;
        }

        let state = Arc::clone(&self.state);
        let result = self.inner.execute(Box::new(move || drain(&state)));
        if result.is_err() {
            // Nothing will drain; reset the flag so a later submission can
            // try again once the inner executor is usable.
            if let Ok(mut state) = self.state.lock() {
                state.draining = false;
            }
        }
        result
    }
}

fn drain(state: &Mutex<SerialState>) {
    loop {
        let task = {
            let mut state = state.lock().unwrap();
            match state.queue.pop_front() {
                Some(task) => task,
                None => {
                    state.draining = false;
                    return;
                }
            }
        };
        task();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::ThreadPool;
    use crate::single_worker::SingleWorker;
    use std::sync::mpsc::channel;

    #[test]
    fn preserves_submission_order_over_a_multi_worker_pool() {
        let pool = ThreadPool::spawn("test-pool", 4);
        let serial = SerialExecutor::new(pool.clone());

        let seen: Arc<Mutex<Vec<u32>>> = Arc::new(Mutex::new(Vec::new()));
        let (done_tx, done_rx) = channel::<()>();

        for i in 0..1_000u32 {
            let seen = seen.clone();
            serial
                .execute(Box::new(move || {
                    seen.lock().unwrap().push(i);
                }))
                .unwrap();
        }
        serial
            .execute(Box::new(move || {
                let _ = done_tx.send(());
            }))
            .unwrap();

        done_rx.recv().unwrap();
        assert_eq!(*seen.lock().unwrap(), (0..1_000).collect::<Vec<_>>());
        pool.shutdown();
    }

    #[test]
    fn accepts_tasks_again_after_going_idle() {
        let worker = SingleWorker::spawn("test-worker");
        let serial = SerialExecutor::new(worker.clone());

        for _round in 0..3 {
            let (done_tx, done_rx) = channel::<()>();
            serial
                .execute(Box::new(move || {
                    let _ = done_tx.send(());
                }))
                .unwrap();
            done_rx.recv().unwrap();
        }

        worker.shutdown();
    }

    #[test]
    fn rejection_by_the_inner_executor_surfaces_and_resets() {
        let worker = SingleWorker::spawn("test-worker");
        let serial = SerialExecutor::new(worker.clone());
        worker.shutdown();

        assert_eq!(
            serial.execute(Box::new(|| {})),
            Err(ExecutorError::Shutdown)
        );
        // A second attempt must also reach the inner executor rather than
        // queueing behind a drain that will never run.
        assert_eq!(
            serial.execute(Box::new(|| {})),
            Err(ExecutorError::Shutdown)
        );
    }

    #[test]
    fn clones_serialize_with_each_other() {
        let pool = ThreadPool::spawn("test-pool", 4);
        let serial = SerialExecutor::new(pool.clone());
        let other = serial.clone();

        let seen: Arc<Mutex<Vec<&'static str>>> = Arc::new(Mutex::new(Vec::new()));
        let (done_tx, done_rx) = channel::<()>();

        let seen_a = seen.clone();
        serial
            .execute(Box::new(move || {
                seen_a.lock().unwrap().push("first");
            }))
            .unwrap();
        let seen_b = seen.clone();
        other
            .execute(Box::new(move || {
                seen_b.lock().unwrap().push("second");
                let _ = done_tx.send(());
            }))
            .unwrap();

        done_rx.recv().unwrap();
        assert_eq!(*seen.lock().unwrap(), vec!["first", "second"]);
        pool.shutdown();
    }
}
