//! Fixed-size thread pool executor.

use std::sync::{Arc, Mutex, mpsc};
use std::thread;

use tracing::debug;

use crate::executor::{Executor, ExecutorError, Task};

/// Runtime statistics snapshot for a [`ThreadPool`].
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct PoolStats {
    pub workers: usize,
    pub tasks_executed: u64,
}

/// `size` worker threads pulling tasks from a shared channel.
///
/// Tasks may run concurrently and completion order is unspecified, so a
/// pool on its own is **not** a valid observe-on target; wrap it in a
/// [`SerialExecutor`](crate::SerialExecutor) when delivery order matters.
pub struct ThreadPool {
    inner: Arc<PoolInner>,
}

struct PoolInner {
    name: String,
    sender: Mutex<Option<mpsc::Sender<Task>>>,
    joins: Mutex<Vec<thread::JoinHandle<()>>>,
    stats: Arc<Mutex<PoolStats>>,
}

impl Clone for ThreadPool {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl ThreadPool {
    /// Spawn `size` worker threads named `{name}-{index}`.
    ///
    /// `size` is clamped to at least one worker.
    pub fn spawn(name: impl Into<String>, size: usize) -> Self {
        let name = name.into();
        let size = size.max(1);
        let (sender, receiver) = mpsc::channel::<Task>();
        let receiver = Arc::new(Mutex::new(receiver));
        let stats = Arc::new(Mutex::new(PoolStats {
            workers: size,
            tasks_executed: 0,
        }));

        let mut joins = Vec::with_capacity(size);
        for index in 0..size {
            let worker_name = format!("{name}-{index}");
            let loop_name = worker_name.clone();
            let loop_receiver = receiver.clone();
            let loop_stats = stats.clone();
            let join = thread::Builder::new()
                .name(worker_name)
                .spawn(move || pool_loop(loop_name, loop_receiver, loop_stats))
                .expect("failed to spawn pool worker thread");
            joins.push(join);
        }

        Self {
            inner: Arc::new(PoolInner {
                name,
                sender: Mutex::new(Some(sender)),
                joins: Mutex::new(joins),
                stats,
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Current statistics.
    pub fn stats(&self) -> PoolStats {
        self.inner.stats.lock().unwrap().clone()
    }

    /// Stop accepting tasks, finish the queued ones, and join all workers.
    pub fn shutdown(&self) {
        let sender = self.inner.sender.lock().unwrap().take();
        drop(sender);
        let joins: Vec<_> = self.inner.joins.lock().unwrap().drain(..).collect();
        for join in joins {
            let _ = join.join();
        }
    }
}

impl Executor for ThreadPool {
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

fn pool_loop(
    name: String,
    receiver: Arc<Mutex<mpsc::Receiver<Task>>>,
    stats: Arc<Mutex<PoolStats>>,
) {
    debug!(worker = %name, "pool worker started");
    loop {
        // Hold the lock only while receiving so other workers can pull
        // tasks while this one runs.
        let next = receiver.lock().unwrap().recv();
        match next {
            Ok(task) => {
                task();
                stats.lock().unwrap().tasks_executed += 1;
            }
            Err(_) => break,
        }
    }
    debug!(worker = %name, "pool worker stopped");
}
