//! Test doubles for writing strategy tests.
//!
//! These are real implementations of the delegate and collaborator
//! contracts that record what happened to them, usable both by this
//! crate's own tests and by downstream delegate authors.

mod mocks;

pub use mocks::{
    CollectingLog, Journal, JournalSink, LogEntry, MockDelegate, TestError, TestResponse,
};
