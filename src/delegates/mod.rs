//! Delegate capability traits.
//!
//! A delegate is the caller-supplied unit of work for one strategy run. The
//! engine never inspects delegate internals; it only invokes the capability
//! methods below in the order fixed by the chosen strategy, each at most
//! once per run. Idempotence is not assumed.
//!
//! Capabilities compose: a [`FastDelegate`] is a [`NetworkDelegate`] plus one
//! extra method, and each strategy holds a concretely-typed delegate matching
//! exactly the capability set it needs.

use crate::core::{RequestError, Response};
use async_trait::async_trait;

/// Base delegate contract shared by every capability profile.
pub trait Delegate {
    /// The response type produced by this delegate's phases.
    type Response: Response;

    /// The error type produced by [`NetworkDelegate::compose_error`].
    type Error: RequestError;

    /// Returns the delegate's name, used to tag log entries.
    fn name(&self) -> &str;
}

/// A delegate that can answer from a fast local source.
#[async_trait]
pub trait CacheDelegate: Delegate + Send {
    /// Retrieves the response from the cache.
    ///
    /// Expected to be a cheap, optimistic probe; a fault here is not
    /// surfaced to the observer by [`crate::strategies::CacheStrategy`].
    async fn retrieve_from_cache(&mut self) -> anyhow::Result<Self::Response>;
}

/// A delegate that fetches from a remote source and persists the result.
#[async_trait]
pub trait NetworkDelegate: Delegate + Send {
    /// Retrieves the response from the remote source. May block for
    /// arbitrary I/O; timeout policy belongs to the delegate, not the
    /// strategy.
    async fn retrieve_remote(&mut self) -> anyhow::Result<Self::Response>;

    /// Transforms or validates the freshly retrieved response.
    async fn post_process(
        &mut self,
        response: Self::Response,
    ) -> anyhow::Result<Self::Response>;

    /// Saves the response durably. Persistence may transform the value;
    /// the returned response is what the observer receives on success.
    async fn persist(&mut self, response: Self::Response) -> anyhow::Result<Self::Response>;

    /// Builds the error value delivered to the observer from the causal
    /// fault raised by a phase.
    fn compose_error(&self, cause: &anyhow::Error) -> Self::Error;
}

/// A network delegate that additionally supports an eager partial save.
#[async_trait]
pub trait FastDelegate: NetworkDelegate {
    /// Performs a cheap, partial persistence (e.g. a memory tier only) and
    /// returns the possibly-updated response. The full save still happens
    /// afterwards via [`NetworkDelegate::persist`].
    async fn fast_save(&mut self, response: Self::Response) -> anyhow::Result<Self::Response>;
}
