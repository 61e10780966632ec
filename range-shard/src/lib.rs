//! Logic-domain hosting for range controls.
//!
//! Controls run their gesture handling on the rendering thread and hand every
//! committed value to the *logic domain*, where application callbacks execute.
//! The logic domain is a tokio runtime wrapped in [`LogicDomain`]. The
//! rendering thread only ever spawns onto it and never waits for it.
//!
//! ```
//! use range_shard::{LogicDomain, LogicDomainConfig};
//!
//! let domain = LogicDomain::new(LogicDomainConfig::default()).unwrap();
//! let task = domain.spawn(async { 2 + 2 });
//! assert_eq!(domain.block_on(task).unwrap(), 4);
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

mod tokio_runtime;

use std::{future::Future, sync::Arc};

use tokio::{
    runtime::{Handle, Runtime},
    task::JoinHandle,
};
use tracing::debug;

/// Errors raised while setting up a logic domain.
#[derive(Debug, thiserror::Error)]
pub enum LogicDomainError {
    /// The tokio runtime could not be built.
    #[error("failed to build logic-domain runtime: {0}")]
    Runtime(#[from] std::io::Error),
    /// [`LogicDomain::current`] was called outside of a tokio runtime.
    #[error("no tokio runtime is running on this thread")]
    NoRuntime,
}

/// Configuration for an owned logic-domain runtime.
///
/// # Examples
///
/// ```
/// use range_shard::LogicDomainConfig;
///
/// let config = LogicDomainConfig {
///     worker_threads: 2,
///     ..Default::default()
/// };
/// assert_eq!(config.thread_name, "range-logic");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicDomainConfig {
    /// Number of worker threads. Zero is treated as one.
    ///
    /// Commits are delivered by a single task per control, so extra workers
    /// only help when several controls share one domain.
    pub worker_threads: usize,
    /// Name given to every worker thread, visible in debuggers and logs.
    pub thread_name: String,
}

impl Default for LogicDomainConfig {
    fn default() -> Self {
        Self {
            worker_threads: 1,
            thread_name: "range-logic".to_string(),
        }
    }
}

struct OwnedRuntime(Option<Runtime>);

impl Drop for OwnedRuntime {
    fn drop(&mut self) {
        if let Some(runtime) = self.0.take() {
            // Dropping a runtime from inside async code panics; this does not.
            runtime.shutdown_background();
        }
    }
}

/// Handle to the runtime that executes value consumers.
///
/// Cloning is cheap. An owned runtime is shut down when the last clone is
/// dropped.
#[derive(Clone)]
pub struct LogicDomain {
    handle: Handle,
    owned: Option<Arc<OwnedRuntime>>,
}

impl LogicDomain {
    /// Builds a dedicated runtime from `config`.
    pub fn new(config: LogicDomainConfig) -> Result<Self, LogicDomainError> {
        let runtime = tokio_runtime::build(&config)?;
        debug!(
            worker_threads = config.worker_threads.max(1),
            thread_name = %config.thread_name,
            "logic domain started"
        );
        Ok(Self {
            handle: runtime.handle().clone(),
            owned: Some(Arc::new(OwnedRuntime(Some(runtime)))),
        })
    }

    /// Returns the process-wide logic domain, creating it with the default
    /// configuration on first use.
    pub fn global() -> Result<&'static LogicDomain, LogicDomainError> {
        tokio_runtime::get()
    }

    /// Borrows the tokio runtime the caller is already running on.
    ///
    /// Useful when the application has its own runtime, and in async tests.
    pub fn current() -> Result<Self, LogicDomainError> {
        let handle = Handle::try_current().map_err(|_| LogicDomainError::NoRuntime)?;
        Ok(Self::from_handle(handle))
    }

    /// Wraps an existing runtime handle without taking ownership of it.
    pub fn from_handle(handle: Handle) -> Self {
        Self {
            handle,
            owned: None,
        }
    }

    /// The underlying runtime handle.
    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    /// Whether this domain owns its runtime.
    pub fn is_owned(&self) -> bool {
        self.owned.is_some()
    }

    /// Spawns `future` onto the logic domain. Never blocks the caller.
    pub fn spawn<F>(&self, future: F) -> JoinHandle<F::Output>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        self.handle.spawn(future)
    }

    /// Runs `future` to completion on the logic domain, blocking the caller.
    ///
    /// Meant for application shutdown and tests. Rendering code must not call
    /// this. Panics when called from inside async code.
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.handle.block_on(future)
    }
}

impl std::fmt::Debug for LogicDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogicDomain")
            .field("owned", &self.is_owned())
            .finish_non_exhaustive()
    }
}
