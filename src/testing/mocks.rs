//! Mock delegates and collaborators for testing.

use crate::core::{RequestError, Response, Source};
use crate::delegates::{CacheDelegate, Delegate, FastDelegate, NetworkDelegate};
use crate::events::{CollectingSink, Outcome, OutcomeSink};
use crate::observability::{Loggable, PhaseTimer};
use crate::strategies::Phase;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;

/// A shared, ordered record of everything a run touched.
///
/// The mock delegate appends each phase call and [`JournalSink`] appends
/// each notification, so tests can assert cross-collaborator ordering
/// (e.g. that the fast strategy notifies before it persists).
pub type Journal = Arc<Mutex<Vec<String>>>;

/// A simple response value for tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestResponse {
    /// Business-level success flag.
    pub success: bool,
    /// Provenance tag.
    pub source: Source,
    /// Set by the mock delegate's `post_process`.
    pub processed: bool,
    /// Set by the mock delegate's `fast_save`.
    pub fast_saved: bool,
    /// Set by the mock delegate's `persist`.
    pub persisted: bool,
}

impl TestResponse {
    /// Creates a network-sourced response.
    #[must_use]
    pub fn network(success: bool) -> Self {
        Self {
            success,
            source: Source::Network,
            processed: false,
            fast_saved: false,
            persisted: false,
        }
    }

    /// Creates a cache-sourced response.
    #[must_use]
    pub fn cache(success: bool) -> Self {
        Self {
            success,
            source: Source::Cache,
            processed: false,
            fast_saved: false,
            persisted: false,
        }
    }
}

impl Response for TestResponse {
    fn is_success(&self) -> bool {
        self.success
    }

    fn source(&self) -> Source {
        self.source
    }
}

/// A simple error value for tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestError {
    /// Domain status code.
    pub status_code: i32,
    /// Human-facing message.
    pub user_message: String,
    /// Diagnostic message, derived from the causal fault.
    pub internal_message: String,
}

impl RequestError for TestError {
    fn status_code(&self) -> i32 {
        self.status_code
    }

    fn user_message(&self) -> &str {
        &self.user_message
    }

    fn internal_message(&self) -> &str {
        &self.internal_message
    }
}

/// A delegate that records every phase call and can be scripted to fault
/// during any single phase.
#[derive(Debug)]
pub struct MockDelegate {
    name: String,
    response: TestResponse,
    fail_during: Option<(Phase, String)>,
    journal: Journal,
}

impl MockDelegate {
    /// Creates a delegate returning a successful network response.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            response: TestResponse::network(true),
            fail_during: None,
            journal: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Sets the response the retrieval phase returns.
    #[must_use]
    pub fn with_response(mut self, response: TestResponse) -> Self {
        self.response = response;
        self
    }

    /// Scripts a fault for the given phase.
    #[must_use]
    pub fn failing_during(mut self, phase: Phase, message: impl Into<String>) -> Self {
        self.fail_during = Some((phase, message.into()));
        self
    }

    /// Shares the journal, e.g. with a [`JournalSink`].
    #[must_use]
    pub fn journal(&self) -> Journal {
        self.journal.clone()
    }

    /// Returns the recorded calls in order.
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.journal.lock().clone()
    }

    fn record(&self, call: &str) {
        self.journal.lock().push(call.to_string());
    }

    fn fault_for(&self, phase: Phase) -> Option<anyhow::Error> {
        match &self.fail_during {
            Some((p, message)) if *p == phase => Some(anyhow::anyhow!("{}", message)),
            _ => None,
        }
    }
}

impl Delegate for MockDelegate {
    type Response = TestResponse;
    type Error = TestError;

    fn name(&self) -> &str {
        &self.name
    }
}

#[async_trait]
impl CacheDelegate for MockDelegate {
    async fn retrieve_from_cache(&mut self) -> anyhow::Result<TestResponse> {
        self.record("retrieve_from_cache");
        if let Some(fault) = self.fault_for(Phase::Retrieving) {
            return Err(fault);
        }
        Ok(self.response.clone())
    }
}

#[async_trait]
impl NetworkDelegate for MockDelegate {
    async fn retrieve_remote(&mut self) -> anyhow::Result<TestResponse> {
        self.record("retrieve_remote");
        if let Some(fault) = self.fault_for(Phase::Retrieving) {
            return Err(fault);
        }
        Ok(self.response.clone())
    }

    async fn post_process(&mut self, mut response: TestResponse) -> anyhow::Result<TestResponse> {
        self.record("post_process");
        if let Some(fault) = self.fault_for(Phase::Processing) {
            return Err(fault);
        }
        response.processed = true;
        Ok(response)
    }

    async fn persist(&mut self, mut response: TestResponse) -> anyhow::Result<TestResponse> {
        self.record("persist");
        if let Some(fault) = self.fault_for(Phase::Persisting) {
            return Err(fault);
        }
        response.persisted = true;
        Ok(response)
    }

    fn compose_error(&self, cause: &anyhow::Error) -> TestError {
        self.record("compose_error");
        TestError {
            status_code: 500,
            user_message: "Something went wrong".to_string(),
            internal_message: cause.to_string(),
        }
    }
}

#[async_trait]
impl FastDelegate for MockDelegate {
    async fn fast_save(&mut self, mut response: TestResponse) -> anyhow::Result<TestResponse> {
        self.record("fast_save");
        if let Some(fault) = self.fault_for(Phase::FastSaving) {
            return Err(fault);
        }
        response.fast_saved = true;
        Ok(response)
    }
}

/// A collecting sink that also appends notifications to a shared journal.
#[derive(Debug)]
pub struct JournalSink<R, E> {
    journal: Journal,
    inner: CollectingSink<R, E>,
}

impl<R: Clone, E: Clone> JournalSink<R, E> {
    /// Creates a sink appending to the given journal.
    #[must_use]
    pub fn new(journal: Journal) -> Self {
        Self {
            journal,
            inner: CollectingSink::new(),
        }
    }

    /// Returns only the collected success outcomes.
    #[must_use]
    pub fn successes(&self) -> Vec<R> {
        self.inner.successes()
    }

    /// Returns only the collected failure outcomes.
    #[must_use]
    pub fn failures(&self) -> Vec<E> {
        self.inner.failures()
    }

    /// Returns the number of collected outcomes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if nothing was collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<R: Clone + Send, E: Clone + Send> OutcomeSink<R, E> for JournalSink<R, E> {
    fn post(&self, outcome: Outcome<R, E>) {
        let label = if outcome.is_success() {
            "notify_success"
        } else {
            "notify_failure"
        };
        self.journal.lock().push(label.to_string());
        self.inner.post(outcome);
    }
}

/// A recorded log entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// "debug" or "error".
    pub level: String,
    /// The strategy tag.
    pub tag: String,
    /// The rendered message.
    pub message: String,
}

/// A logger that records entries for assertions.
#[derive(Debug, Default)]
pub struct CollectingLog {
    entries: Mutex<Vec<LogEntry>>,
}

impl CollectingLog {
    /// Creates a new collecting logger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all recorded entries.
    #[must_use]
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().clone()
    }

    /// Returns only the error-level entries.
    #[must_use]
    pub fn errors(&self) -> Vec<LogEntry> {
        self.entries
            .lock()
            .iter()
            .filter(|e| e.level == "error")
            .cloned()
            .collect()
    }

    fn push(&self, level: &str, tag: &str, message: String) {
        self.entries.lock().push(LogEntry {
            level: level.to_string(),
            tag: tag.to_string(),
            message,
        });
    }
}

impl Loggable for CollectingLog {
    fn debug(&self, tag: &str, message: &str) {
        self.push("debug", tag, message.to_string());
    }

    fn error(&self, tag: &str, message: &str, cause: &anyhow::Error) {
        self.push("error", tag, format!("{message}: {cause}"));
    }

    fn log_duration(&self, tag: &str, operation: &str, timer: &PhaseTimer) {
        self.push("debug", tag, format!("{}: {:.1}ms", operation, timer.elapsed_ms()));
    }
}
