//! Error contract delivered to the observer on failure.

use thiserror::Error;

/// Contract for the error value handed to the observer.
///
/// Carries the bare information needed to identify a failure: a status
/// code for programmatic handling, a human-readable message for display,
/// and an internal message for the logs. Instances are produced only by
/// [`crate::delegates::NetworkDelegate::compose_error`] from the causal
/// fault raised by a pipeline phase.
pub trait RequestError: Send {
    /// Returns the domain or protocol status code. Not necessarily HTTP.
    fn status_code(&self) -> i32;

    /// Returns the human-facing error message.
    fn user_message(&self) -> &str;

    /// Returns the diagnostic message intended for logging.
    fn internal_message(&self) -> &str;
}

/// A ready-made [`RequestError`] carrier.
///
/// Most delegates only need to fill the three fields; delegates with
/// richer error payloads implement [`RequestError`] on their own type.
#[derive(Debug, Clone, Error)]
#[error("{internal_message} (status {status_code})")]
pub struct BasicError {
    status_code: i32,
    user_message: String,
    internal_message: String,
}

impl BasicError {
    /// Creates a new error value.
    #[must_use]
    pub fn new(
        status_code: i32,
        user_message: impl Into<String>,
        internal_message: impl Into<String>,
    ) -> Self {
        Self {
            status_code,
            user_message: user_message.into(),
            internal_message: internal_message.into(),
        }
    }

    /// Builds an error from a causal fault, reusing the fault's text as
    /// the internal message.
    #[must_use]
    pub fn from_cause(status_code: i32, user_message: impl Into<String>, cause: &anyhow::Error) -> Self {
        Self::new(status_code, user_message, cause.to_string())
    }
}

impl RequestError for BasicError {
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
