//! Fast strategy: notify first, finish the durable save afterwards.

use super::{timed_phase, Notifier, Phase, Strategy};
use crate::delegates::FastDelegate;
use async_trait::async_trait;

const TAG: &str = "FastStrategy";

/// Network pipeline that trades a brief durability window for lower
/// perceived latency.
///
/// Phase order: remote retrieval, post-processing, an eager partial save,
/// then the success notification carrying the fast-saved response. Only
/// after notifying does the full durable save run, on the same worker. A
/// fault in that final save is logged and suppressed: the observer already
/// received a success outcome for this run, and a later contradictory
/// failure would be incoherent to present.
///
/// A fault in any phase before the notification behaves exactly like the
/// standard strategy: composed error, one failure notification, no save.
pub struct FastStrategy<D>
where
    D: FastDelegate,
    D::Response: Clone,
{
    delegate: D,
    notifier: Notifier<D::Response, D::Error>,
}

impl<D> FastStrategy<D>
where
    D: FastDelegate,
    D::Response: Clone,
{
    /// Creates a fast strategy around one delegate.
    #[must_use]
    pub fn new(delegate: D, notifier: Notifier<D::Response, D::Error>) -> Self {
        Self { delegate, notifier }
    }

    /// Phases that run ahead of the notification.
    async fn foreground(&mut self, name: &str) -> anyhow::Result<D::Response> {
        let log = self.notifier.log();
        let retrieved = timed_phase(
            log,
            TAG,
            name,
            Phase::Retrieving,
            self.delegate.retrieve_remote(),
        )
        .await?;

        let log = self.notifier.log();
        let processed = timed_phase(
            log,
            TAG,
            name,
            Phase::Processing,
            self.delegate.post_process(retrieved),
        )
        .await?;

        let log = self.notifier.log();
        let fast_saved = timed_phase(
            log,
            TAG,
            name,
            Phase::FastSaving,
            self.delegate.fast_save(processed),
        )
        .await?;

        Ok(fast_saved)
    }
}

#[async_trait]
impl<D> Strategy for FastStrategy<D>
where
    D: FastDelegate,
    D::Response: Clone,
{
    fn tag(&self) -> &'static str {
        TAG
    }

    async fn run(mut self: Box<Self>) {
        let name = self.delegate.name().to_string();
        match self.foreground(&name).await {
            Ok(fast_saved) => {
                self.notifier.notify_success(TAG, fast_saved.clone());

                let log = self.notifier.log();
                let saved = timed_phase(
                    log,
                    TAG,
                    &name,
                    Phase::Persisting,
                    self.delegate.persist(fast_saved),
                )
                .await;
                if let Err(cause) = saved {
                    // Success already went out; the durable save's failure
                    // is logged, never surfaced.
                    self.notifier.log().error(TAG, &name, &cause);
                }
            }
            Err(cause) => {
                self.notifier.log().error(TAG, &name, &cause);
                let error = self.delegate.compose_error(&cause);
                self.notifier.notify_error(TAG, error);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::CollectingSink;
    use crate::observability::NoOpLog;
    use crate::testing::{CollectingLog, MockDelegate, TestError, TestResponse};
    use std::sync::Arc;

    fn run_setup(
        delegate: MockDelegate,
        log: Arc<dyn crate::observability::Loggable>,
    ) -> (
        Box<FastStrategy<MockDelegate>>,
        Arc<CollectingSink<TestResponse, TestError>>,
    ) {
        let sink = Arc::new(CollectingSink::new());
        let notifier = Notifier::new(sink.clone(), log);
        (Box::new(FastStrategy::new(delegate, notifier)), sink)
    }

    #[tokio::test]
    async fn test_success_carries_fast_saved_response() {
        let delegate = MockDelegate::new("albums");
        let (strategy, sink) = run_setup(delegate, Arc::new(NoOpLog));

        strategy.run().await;

        let successes = sink.successes();
        assert_eq!(successes.len(), 1);
        assert!(successes[0].fast_saved);
        // The observer sees the eager save, not the durable one.
        assert!(!successes[0].persisted);
        assert!(sink.failures().is_empty());
    }

    #[tokio::test]
    async fn test_durable_save_fault_is_suppressed() {
        let log = Arc::new(CollectingLog::new());
        let delegate = MockDelegate::new("albums").failing_during(Phase::Persisting, "disk full");
        let (strategy, sink) = run_setup(delegate, log.clone());

        strategy.run().await;

        assert_eq!(sink.successes().len(), 1);
        assert!(sink.failures().is_empty());
        assert_eq!(log.errors().len(), 1);
    }

    #[tokio::test]
    async fn test_fast_save_fault_notifies_error() {
        let delegate = MockDelegate::new("albums").failing_during(Phase::FastSaving, "tier down");
        let journal = delegate.journal();
        let (strategy, sink) = run_setup(delegate, Arc::new(NoOpLog));

        strategy.run().await;

        assert!(sink.successes().is_empty());
        let failures = sink.failures();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].internal_message, "tier down");
        // The durable save is never reached.
        assert!(!journal.lock().iter().any(|c| c == "persist"));
    }
}
