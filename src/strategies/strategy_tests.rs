//! End-to-end scenarios across strategies, delegates and collaborators.

use super::{CacheStrategy, FastStrategy, Notifier, Phase, StandardStrategy, Strategy};
use crate::core::Response;
use crate::events::CollectingSink;
use crate::observability::{NoOpLog, TracingLog};
use crate::testing::{CollectingLog, JournalSink, MockDelegate, TestError, TestResponse};
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
}

fn collecting_notifier() -> (
    Notifier<TestResponse, TestError>,
    Arc<CollectingSink<TestResponse, TestError>>,
) {
    let sink = Arc::new(CollectingSink::new());
    (Notifier::new(sink.clone(), Arc::new(NoOpLog)), sink)
}

#[tokio::test]
async fn standard_happy_path_delivers_one_success() {
    init_tracing();
    let delegate = MockDelegate::new("albums").with_response(TestResponse::network(true));
    let sink = Arc::new(CollectingSink::new());
    let notifier = Notifier::new(sink.clone(), Arc::new(TracingLog));

    Box::new(StandardStrategy::new(delegate, notifier)).run().await;

    let successes = sink.successes();
    assert_eq!(successes.len(), 1);
    assert!(successes[0].success);
    assert!(successes[0].is_from_network());
    assert!(successes[0].persisted);
    assert!(sink.failures().is_empty());
}

#[tokio::test]
async fn standard_persist_fault_delivers_one_failure() {
    let delegate = MockDelegate::new("albums").failing_during(Phase::Persisting, "disk full");
    let (notifier, sink) = collecting_notifier();

    Box::new(StandardStrategy::new(delegate, notifier)).run().await;

    assert_eq!(sink.len(), 1);
    assert!(sink.successes().is_empty());
    assert_eq!(sink.failures().len(), 1);
}

#[tokio::test]
async fn standard_phases_run_in_order() {
    let delegate = MockDelegate::new("albums");
    let journal = delegate.journal();
    let (notifier, _sink) = collecting_notifier();

    Box::new(StandardStrategy::new(delegate, notifier)).run().await;

    assert_eq!(
        *journal.lock(),
        vec![
            "retrieve_remote".to_string(),
            "post_process".to_string(),
            "persist".to_string(),
        ]
    );
}

#[tokio::test]
async fn fast_notifies_before_durable_save() {
    let delegate = MockDelegate::new("albums");
    let journal = delegate.journal();
    let sink = Arc::new(JournalSink::<TestResponse, TestError>::new(journal.clone()));
    let notifier = Notifier::new(sink.clone(), Arc::new(NoOpLog));

    Box::new(FastStrategy::new(delegate, notifier)).run().await;

    assert_eq!(
        *journal.lock(),
        vec![
            "retrieve_remote".to_string(),
            "post_process".to_string(),
            "fast_save".to_string(),
            "notify_success".to_string(),
            "persist".to_string(),
        ]
    );
    assert_eq!(sink.successes().len(), 1);
}

#[tokio::test]
async fn fast_durable_fault_logged_not_surfaced() {
    let log = Arc::new(CollectingLog::new());
    let delegate = MockDelegate::new("albums").failing_during(Phase::Persisting, "disk full");
    let sink = Arc::new(CollectingSink::new());
    let notifier = Notifier::new(sink.clone(), log.clone() as Arc<dyn crate::observability::Loggable>);

    Box::new(FastStrategy::new(delegate, notifier)).run().await;

    let successes = sink.successes();
    assert_eq!(successes.len(), 1);
    assert!(successes[0].fast_saved);
    assert!(sink.failures().is_empty());

    let errors = log.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("disk full"));
}

#[tokio::test]
async fn cache_unsuccessful_read_emits_nothing() {
    let delegate = MockDelegate::new("albums").with_response(TestResponse::cache(false));
    let (notifier, sink) = collecting_notifier();

    Box::new(CacheStrategy::new(delegate, notifier)).run().await;

    assert!(sink.is_empty());
}

#[tokio::test]
async fn cache_never_uses_failure_channel() {
    let delegate =
        MockDelegate::new("albums").failing_during(Phase::Retrieving, "store unavailable");
    let (notifier, sink) = collecting_notifier();

    Box::new(CacheStrategy::new(delegate, notifier)).run().await;

    assert!(sink.failures().is_empty());
    assert!(sink.successes().is_empty());
}

#[tokio::test]
async fn failure_carries_composed_error_fields() {
    let delegate = MockDelegate::new("albums").failing_during(Phase::Processing, "bad payload");
    let (notifier, sink) = collecting_notifier();

    Box::new(StandardStrategy::new(delegate, notifier)).run().await;

    assert!(sink.successes().is_empty());
    let failures = sink.failures();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].status_code, 500);
    assert_eq!(failures[0].user_message, "Something went wrong");
    assert_eq!(failures[0].internal_message, "bad payload");
}

#[tokio::test]
async fn strategies_report_their_tags() {
    let (notifier, _sink) = collecting_notifier();
    let standard = StandardStrategy::new(MockDelegate::new("a"), notifier);
    assert_eq!(standard.tag(), "StandardStrategy");

    let (notifier, _sink) = collecting_notifier();
    let fast = FastStrategy::new(MockDelegate::new("a"), notifier);
    assert_eq!(fast.tag(), "FastStrategy");

    let (notifier, _sink) = collecting_notifier();
    let cache = CacheStrategy::new(MockDelegate::new("a"), notifier);
    assert_eq!(cache.tag(), "CacheStrategy");
}
