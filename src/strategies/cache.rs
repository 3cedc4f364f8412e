//! Cache-only strategy.

use super::{timed_phase, Notifier, Phase, Strategy};
use crate::core::Response;
use crate::delegates::CacheDelegate;
use async_trait::async_trait;

const TAG: &str = "CacheStrategy";

/// Single-phase retrieval from a fast local source.
///
/// Retrieves the delegate's data from the cache and notifies success only
/// when the read yields a successful response. Cache reads are optimistic,
/// low-latency probes: a miss or a fault here stays silent so it does not
/// disturb a following network strategy's own error reporting. This
/// strategy never posts to the failure channel.
pub struct CacheStrategy<D: CacheDelegate> {
    delegate: D,
    notifier: Notifier<D::Response, D::Error>,
}

impl<D: CacheDelegate> CacheStrategy<D> {
    /// Creates a cache strategy around one delegate.
    #[must_use]
    pub fn new(delegate: D, notifier: Notifier<D::Response, D::Error>) -> Self {
        Self { delegate, notifier }
    }
}

#[async_trait]
impl<D: CacheDelegate> Strategy for CacheStrategy<D> {
    fn tag(&self) -> &'static str {
        TAG
    }

    async fn run(mut self: Box<Self>) {
        let name = self.delegate.name().to_string();
        let retrieved = timed_phase(
            self.notifier.log(),
            TAG,
            &name,
            Phase::Retrieving,
            self.delegate.retrieve_from_cache(),
        )
        .await;

        match retrieved {
            Ok(response) if response.is_success() => {
                self.notifier.notify_success(TAG, response);
            }
            Ok(_) => {
                self.notifier
                    .log()
                    .debug(TAG, &format!("{name}: cache probe returned no usable data"));
            }
            Err(cause) => {
                // Deliberate silence: the probe's failure is not the
                // observer's business.
                self.notifier
                    .log()
                    .debug(TAG, &format!("{name}: cache probe failed: {cause}"));
            }
        }
    }
}
