//! Shared notification contract for strategies.

use crate::events::{Outcome, OutcomeSink};
use crate::observability::Loggable;
use std::sync::Arc;

/// Owns the observer and logger handles for one strategy run and enforces
/// the exactly-once notification contract.
///
/// After the first terminal notification every further attempt is dropped
/// with a debug log entry, so a run can never deliver both a success and
/// a failure, nor two of either.
pub struct Notifier<R, E> {
    sink: Arc<dyn OutcomeSink<R, E>>,
    log: Arc<dyn Loggable>,
    notified: bool,
}

impl<R: Send, E: Send> Notifier<R, E> {
    /// Creates a notifier posting to the given sink and logging to `log`.
    #[must_use]
    pub fn new(sink: Arc<dyn OutcomeSink<R, E>>, log: Arc<dyn Loggable>) -> Self {
        Self {
            sink,
            log,
            notified: false,
        }
    }

    /// Returns the logging collaborator.
    #[must_use]
    pub fn log(&self) -> &dyn Loggable {
        self.log.as_ref()
    }

    /// Returns true if a terminal outcome was already delivered.
    #[must_use]
    pub fn has_notified(&self) -> bool {
        self.notified
    }

    /// Hands the response to the observer's success channel.
    pub fn notify_success(&mut self, tag: &str, response: R) {
        self.deliver(tag, Outcome::Success(response));
    }

    /// Hands the error to the observer's failure channel.
    pub fn notify_error(&mut self, tag: &str, error: E) {
        self.deliver(tag, Outcome::Failure(error));
    }

    fn deliver(&mut self, tag: &str, outcome: Outcome<R, E>) {
        if self.notified {
            self.log
                .debug(tag, "terminal outcome already delivered, dropping duplicate");
            return;
        }
        self.notified = true;
        self.sink.post(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::CollectingSink;
    use crate::observability::NoOpLog;

    fn notifier(sink: &Arc<CollectingSink<u32, String>>) -> Notifier<u32, String> {
        Notifier::new(sink.clone(), Arc::new(NoOpLog))
    }

    #[test]
    fn test_single_success() {
        let sink = Arc::new(CollectingSink::new());
        let mut notifier = notifier(&sink);

        notifier.notify_success("Test", 1);

        assert!(notifier.has_notified());
        assert_eq!(sink.successes(), vec![1]);
        assert!(sink.failures().is_empty());
    }

    #[test]
    fn test_duplicate_success_dropped() {
        let sink = Arc::new(CollectingSink::new());
        let mut notifier = notifier(&sink);

        notifier.notify_success("Test", 1);
        notifier.notify_success("Test", 2);

        assert_eq!(sink.successes(), vec![1]);
    }

    #[test]
    fn test_error_after_success_dropped() {
        let sink = Arc::new(CollectingSink::new());
        let mut notifier = notifier(&sink);

        notifier.notify_success("Test", 1);
        notifier.notify_error("Test", "late failure".to_string());

        assert_eq!(sink.len(), 1);
        assert!(sink.failures().is_empty());
    }

    #[test]
    fn test_success_after_error_dropped() {
        let sink = Arc::new(CollectingSink::new());
        let mut notifier = notifier(&sink);

        notifier.notify_error("Test", "failed".to_string());
        notifier.notify_success("Test", 1);

        assert_eq!(sink.len(), 1);
        assert!(sink.successes().is_empty());
        assert_eq!(sink.failures(), vec!["failed".to_string()]);
    }
}
