//! Executor abstraction (submission mechanics only).

use std::sync::Arc;

use thiserror::Error;

/// A unit of work submitted to an [`Executor`].
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Submission failure.
///
/// Task submission is the only fallible operation; whatever the task does
/// once it runs is its own business.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExecutorError {
    /// The executor has been shut down and accepts no further tasks.
    #[error("executor is shut down")]
    Shutdown,

    /// An internal lock was poisoned by a panicking task.
    #[error("executor state poisoned")]
    Poisoned,
}

/// Accepts tasks for eventual execution.
///
/// Implementations decide *where* and *when* a task runs; the only shared
/// contract is that `execute` enqueues without running the task on the
/// calling thread. Ordering between tasks is implementation-defined:
/// [`SingleWorker`](crate::SingleWorker) runs tasks in submission order,
/// [`ThreadPool`](crate::ThreadPool) does not. Callers that need FIFO
/// ordering on top of an arbitrary executor wrap it in a
/// [`SerialExecutor`](crate::SerialExecutor).
///
/// The trait requires `Send + Sync` so one executor can be shared by
/// pipelines running on several threads.
pub trait Executor: Send + Sync {
    /// Enqueue `task`, returning once it is accepted.
    fn execute(&self, task: Task) -> Result<(), ExecutorError>;
}

impl<E> Executor for Arc<E>
where
    E: Executor + ?Sized,
{
    fn execute(&self, task: Task) -> Result<(), ExecutorError> {
        (**self).execute(task)
    }
}
