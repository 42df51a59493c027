//! `ripple-exec` — execution contexts for stream pipelines.
//!
//! The stream core never creates or owns a thread; operators that hop
//! execution contexts receive one of these from the composing code, which
//! constructs it before building the pipeline and shuts it down after all
//! subscriptions are done.

pub mod executor;
pub mod pool;
pub mod serial;
pub mod single_worker;

pub use executor::{Executor, ExecutorError, Task};
pub use pool::{PoolStats, ThreadPool};
pub use serial::SerialExecutor;
pub use single_worker::{SingleWorker, WorkerStats};
