//! Logging and timing collaborators.
//!
//! Everything in here is observability only: a logger that fails must
//! never change the outcome of a run.

mod log;

pub use log::{Loggable, NoOpLog, PhaseTimer, TracingLog};
