//! Single-threaded executor backed by one named worker thread.

use std::sync::{Arc, Mutex, mpsc};
use std::thread;

use tracing::debug;

use crate::executor::{Executor, ExecutorError, Task};

/// Runtime statistics snapshot for a [`SingleWorker`].
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct WorkerStats {
    pub tasks_executed: u64,
}

/// One named worker thread fed by an mpsc channel.
///
/// Tasks run strictly in submission order, one at a time, which makes
/// this the natural target for observe-on style delivery hops. The handle
/// is a cheap `Clone`; [`shutdown`](SingleWorker::shutdown) closes the
/// channel, drains the remaining tasks, and joins the thread.
///
/// A panicking task unwinds the worker thread; subsequent submissions
/// fail with [`ExecutorError::Shutdown`].
pub struct SingleWorker {
    inner: Arc<WorkerInner>,
}

struct WorkerInner {
    name: String,
    sender: Mutex<Option<mpsc::Sender<Task>>>,
    join: Mutex<Option<thread::JoinHandle<()>>>,
    stats: Arc<Mutex<WorkerStats>>,
}

impl Clone for SingleWorker {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl SingleWorker {
    /// Spawn the worker thread. `name` shows up in thread names and logs.
    pub fn spawn(name: impl Into<String>) -> Self {
        let name = name.into();
        let (sender, receiver) = mpsc::channel::<Task>();
        let stats = Arc::new(Mutex::new(WorkerStats::default()));

        let loop_name = name.clone();
        let loop_stats = stats.clone();
        let join = thread::Builder::new()
            .name(name.clone())
            .spawn(move || worker_loop(loop_name, receiver, loop_stats))
            .expect("failed to spawn worker thread");

        Self {
            inner: Arc::new(WorkerInner {
                name,
                sender: Mutex::new(Some(sender)),
                join: Mutex::new(Some(join)),
                stats,
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Current statistics.
    pub fn stats(&self) -> WorkerStats {
        self.inner.stats.lock().unwrap().clone()
    }

    /// Stop accepting tasks, finish the queued ones, and join the thread.
    ///
    /// Idempotent; later calls (and calls from other clones of the handle)
    /// are no-ops.
    pub fn shutdown(&self) {
        let sender = self.inner.sender.lock().unwrap().take();
        drop(sender);
        if let Some(join) = self.inner.join.lock().unwrap().take() {
            let _ = join.join();
        }
    }
}

impl Executor for SingleWorker {
    fn execute(&self, task: Task) -> Result<(), ExecutorError> {
        let sender = self
            .inner
            .sender
            .lock()
            .map_err(|_| ExecutorError::Poisoned)?;
        match sender.as_ref() {
            Some(sender) => sender.send(task).map_err(|_| ExecutorError::Shutdown),
            None => Err(ExecutorError::Shutdown),
        }
    }
}

fn worker_loop(name: String, receiver: mpsc::Receiver<Task>, stats: Arc<Mutex<WorkerStats>>) {
    debug!(worker = %name, "worker started");
    for task in receiver {
        task();
        stats.lock().unwrap().tasks_executed += 1;
    }
    debug!(worker = %name, "worker stopped");
}
