//! Logging trait, tracing-backed implementation and phase timing.

use std::time::Instant;

/// Wall-clock timer for one pipeline phase.
#[derive(Debug)]
pub struct PhaseTimer {
    start: Instant,
}

impl PhaseTimer {
    /// Starts a new phase timer.
    #[must_use]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Returns the elapsed time in milliseconds.
    #[must_use]
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

/// Trait for the logging collaborator.
///
/// Implementations are shared across concurrently executing runs and must
/// be safe for concurrent use. None of these methods return errors:
/// logging is best-effort and never propagates into the pipeline.
pub trait Loggable: Send + Sync {
    /// Logs a diagnostic message.
    fn debug(&self, tag: &str, message: &str);

    /// Logs a failure together with its causal fault.
    fn error(&self, tag: &str, message: &str, cause: &anyhow::Error);

    /// Logs how long an operation took, from the given timer to now.
    fn log_duration(&self, tag: &str, operation: &str, timer: &PhaseTimer) {
        self.debug(tag, &format!("{}: {:.1}ms", operation, timer.elapsed_ms()));
    }
}

/// A logger that forwards to the tracing framework.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl Loggable for TracingLog {
    fn debug(&self, tag: &str, message: &str) {
        tracing::debug!(tag = %tag, "{}", message);
    }

    fn error(&self, tag: &str, message: &str, cause: &anyhow::Error) {
        tracing::error!(tag = %tag, cause = %cause, "{}", message);
    }

    fn log_duration(&self, tag: &str, operation: &str, timer: &PhaseTimer) {
        tracing::debug!(
            tag = %tag,
            operation = %operation,
            duration_ms = timer.elapsed_ms(),
            "phase finished"
        );
    }
}

/// A logger that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLog;

impl Loggable for NoOpLog {
    fn debug(&self, _tag: &str, _message: &str) {}

    fn error(&self, _tag: &str, _message: &str, _cause: &anyhow::Error) {}

    fn log_duration(&self, _tag: &str, _operation: &str, _timer: &PhaseTimer) {}
}
