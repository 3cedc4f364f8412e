//! Execution strategies.
//!
//! A strategy wraps exactly one delegate, fixes the phase order of its
//! pipeline, and applies that strategy's failure-visibility policy. Each
//! strategy instance is created per logical request, executed once on a
//! worker, and discarded.

mod cache;
mod fast;
mod notifier;
mod standard;

#[cfg(test)]
mod strategy_tests;

pub use cache::CacheStrategy;
pub use fast::FastStrategy;
pub use notifier::Notifier;
pub use standard::StandardStrategy;

use crate::observability::{Loggable, PhaseTimer};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;

/// Trait implemented by every execution strategy.
#[async_trait]
pub trait Strategy: Send {
    /// Returns the tag this strategy uses for log entries.
    fn tag(&self) -> &'static str;

    /// Executes the full pipeline for the wrapped delegate.
    ///
    /// Consumes the strategy: a run is a one-shot unit of work. No fault
    /// escapes this method; every failure ends as a logged event or a
    /// composed error delivered to the observer.
    async fn run(self: Box<Self>);
}

/// A pipeline phase, used to label timing and diagnostic logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Fetching the response (remote or cache).
    Retrieving,
    /// Transforming or validating the retrieved response.
    Processing,
    /// The eager partial save of the fast strategy.
    FastSaving,
    /// The durable save.
    Persisting,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Retrieving => write!(f, "retrieving"),
            Self::Processing => write!(f, "processing"),
            Self::FastSaving => write!(f, "fast_saving"),
            Self::Persisting => write!(f, "persisting"),
        }
    }
}

/// Runs one phase with wall-clock timing reported to the logger.
///
/// Timing is observability only; the phase result passes through untouched
/// and a logger that drops the entry cannot affect the pipeline.
pub(crate) async fn timed_phase<T, Fut>(
    log: &dyn Loggable,
    tag: &str,
    delegate_name: &str,
    phase: Phase,
    fut: Fut,
) -> T
where
    Fut: Future<Output = T> + Send,
{
    let timer = PhaseTimer::start();
    let out = fut.await;
    log.log_duration(tag, &format!("{delegate_name}({phase})"), &timer);
    out
}
