//! Worker dispatch helpers.
//!
//! The engine does not manage a worker pool of its own; it only assumes a
//! run executes off the caller's context. These helpers hand a strategy to
//! the tokio runtime and let the caller await completion if they care to.

use crate::strategies::Strategy;
use thiserror::Error;
use tokio::task::{JoinError, JoinHandle};

/// Errors produced while dispatching or joining a strategy run.
#[derive(Debug, Error)]
pub enum ExecutorError {
    /// The worker task panicked or was cancelled before finishing.
    #[error("strategy run did not complete: {0}")]
    Join(#[from] JoinError),
}

/// Handle to a dispatched strategy run.
///
/// The run proceeds whether or not the handle is awaited; dropping it
/// detaches the worker.
#[derive(Debug)]
pub struct StrategyHandle {
    handle: JoinHandle<()>,
}

impl StrategyHandle {
    /// Waits for the run to reach its terminal state.
    pub async fn join(self) -> Result<(), ExecutorError> {
        self.handle.await.map_err(ExecutorError::from)
    }

    /// Returns true once the run has finished.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Dispatches a strategy onto a worker task.
pub fn spawn<S>(strategy: S) -> StrategyHandle
where
    S: Strategy + 'static,
{
    spawn_boxed(Box::new(strategy))
}

/// Dispatches an already-boxed strategy onto a worker task.
pub fn spawn_boxed(strategy: Box<dyn Strategy>) -> StrategyHandle {
    let handle = tokio::spawn(async move { strategy.run().await });
    StrategyHandle { handle }
}
