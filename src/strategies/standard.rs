//! Standard network-then-cache strategy.

use super::{timed_phase, Notifier, Phase, Strategy};
use crate::delegates::NetworkDelegate;
use async_trait::async_trait;

const TAG: &str = "StandardStrategy";

/// The canonical exactly-once, fail-fast pipeline.
///
/// Phase order: remote retrieval, post-processing, durable save, then one
/// success notification carrying the post-persist response. A fault in any
/// phase aborts the pipeline immediately; the fault is logged, translated
/// through the delegate's `compose_error`, and delivered as the run's one
/// failure notification.
pub struct StandardStrategy<D: NetworkDelegate> {
    delegate: D,
    notifier: Notifier<D::Response, D::Error>,
}

impl<D: NetworkDelegate> StandardStrategy<D> {
    /// Creates a standard strategy around one delegate.
    #[must_use]
    pub fn new(delegate: D, notifier: Notifier<D::Response, D::Error>) -> Self {
        Self { delegate, notifier }
    }

    async fn pipeline(&mut self, name: &str) -> anyhow::Result<D::Response> {
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
        let saved = timed_phase(
            log,
            TAG,
            name,
            Phase::Persisting,
            self.delegate.persist(processed),
        )
        .await?;

        Ok(saved)
    }
}

#[async_trait]
impl<D: NetworkDelegate> Strategy for StandardStrategy<D> {
    fn tag(&self) -> &'static str {
        TAG
    }

    async fn run(mut self: Box<Self>) {
        let name = self.delegate.name().to_string();
        match self.pipeline(&name).await {
            Ok(saved) => self.notifier.notify_success(TAG, saved),
            Err(cause) => {
                self.notifier.log().error(TAG, &name, &cause);
                let error = self.delegate.compose_error(&cause);
                self.notifier.notify_error(TAG, error);
            }
        }
    }
}
