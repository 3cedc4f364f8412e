//! Outcome sink trait and implementations.

use parking_lot::Mutex;
use tokio::sync::mpsc;

/// The terminal event of one strategy run.
///
/// A Standard or Fast run produces exactly one outcome; a Cache run
/// produces at most one, and only ever a success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<R, E> {
    /// The pipeline completed and the response is ready for the caller.
    Success(R),
    /// A phase faulted before notification; the composed error describes it.
    Failure(E),
}

impl<R, E> Outcome<R, E> {
    /// Returns true if this is a success outcome.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns true if this is a failure outcome.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }
}

/// Trait for sinks that receive terminal outcomes.
///
/// Sinks are shared across concurrently executing runs and must be safe
/// for concurrent dispatch. `post` must not fail observably; delivery
/// problems are the sink's own concern and never reach the pipeline.
pub trait OutcomeSink<R, E>: Send + Sync {
    /// Delivers a terminal outcome to the observer.
    fn post(&self, outcome: Outcome<R, E>);
}

/// A no-op sink that discards all outcomes.
///
/// Used as the default when no observer is wired up.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSink;

impl<R, E> OutcomeSink<R, E> for NoOpSink {
    fn post(&self, _outcome: Outcome<R, E>) {
        // Intentionally empty - discards all outcomes
    }
}

/// A sink that forwards outcomes onto a tokio mpsc channel.
///
/// A dropped receiver is ignored: the run already finished its work and
/// there is nobody left to tell.
#[derive(Debug)]
pub struct ChannelSink<R, E> {
    tx: mpsc::UnboundedSender<Outcome<R, E>>,
}

impl<R, E> ChannelSink<R, E> {
    /// Creates a sink posting onto the given channel.
    #[must_use]
    pub fn new(tx: mpsc::UnboundedSender<Outcome<R, E>>) -> Self {
        Self { tx }
    }

    /// Creates a sink together with its receiving end.
    #[must_use]
    pub fn unbounded() -> (Self, mpsc::UnboundedReceiver<Outcome<R, E>>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }
}

impl<R, E> Clone for ChannelSink<R, E> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<R: Send, E: Send> OutcomeSink<R, E> for ChannelSink<R, E> {
    fn post(&self, outcome: Outcome<R, E>) {
        let _ = self.tx.send(outcome);
    }
}

/// A collecting sink for testing purposes.
#[derive(Debug)]
pub struct CollectingSink<R, E> {
    outcomes: Mutex<Vec<Outcome<R, E>>>,
}

impl<R, E> Default for CollectingSink<R, E> {
    fn default() -> Self {
        Self {
            outcomes: Mutex::new(Vec::new()),
        }
    }
}

impl<R: Clone, E: Clone> CollectingSink<R, E> {
    /// Creates a new collecting sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected outcomes.
    #[must_use]
    pub fn outcomes(&self) -> Vec<Outcome<R, E>> {
        self.outcomes.lock().clone()
    }

    /// Returns the number of collected outcomes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.lock().len()
    }

    /// Returns true if no outcomes have been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.lock().is_empty()
    }

    /// Returns only the success outcomes.
    #[must_use]
    pub fn successes(&self) -> Vec<R> {
        self.outcomes
            .lock()
            .iter()
            .filter_map(|o| match o {
                Outcome::Success(r) => Some(r.clone()),
                Outcome::Failure(_) => None,
            })
            .collect()
    }

    /// Returns only the failure outcomes.
    #[must_use]
    pub fn failures(&self) -> Vec<E> {
        self.outcomes
            .lock()
            .iter()
            .filter_map(|o| match o {
                Outcome::Failure(e) => Some(e.clone()),
                Outcome::Success(_) => None,
            })
            .collect()
    }

    /// Clears all collected outcomes.
    pub fn clear(&self) {
        self.outcomes.lock().clear();
    }
}

impl<R: Clone + Send, E: Clone + Send> OutcomeSink<R, E> for CollectingSink<R, E> {
    fn post(&self, outcome: Outcome<R, E>) {
        self.outcomes.lock().push(outcome);
    }
}
