//! # Fetchflow
//!
//! Execution strategies for request pipelines.
//!
//! Fetchflow runs a caller-supplied unit of work (a [`delegates::Delegate`])
//! through a fixed multi-phase pipeline and reports exactly one terminal
//! outcome to an observer:
//!
//! - **Cache strategy**: a single optimistic cache probe; failures stay silent
//! - **Standard strategy**: retrieve, post-process, persist, then notify
//! - **Fast strategy**: notify success right after an eager partial save,
//!   then finish the durable save in the background with failures suppressed
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fetchflow::prelude::*;
//!
//! let sink = Arc::new(ChannelSink::new(tx));
//! let log = Arc::new(TracingLog);
//!
//! let strategy = StandardStrategy::new(delegate, Notifier::new(sink, log));
//! executor::spawn(strategy).join().await?;
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod core;
pub mod delegates;
pub mod events;
pub mod executor;
pub mod observability;
pub mod strategies;
pub mod testing;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{BasicError, RequestError, Response, Source};
    pub use crate::delegates::{
        CacheDelegate, Delegate, FastDelegate, NetworkDelegate,
    };
    pub use crate::events::{
        ChannelSink, CollectingSink, NoOpSink, Outcome, OutcomeSink,
    };
    pub use crate::executor::{spawn, spawn_boxed, ExecutorError, StrategyHandle};
    pub use crate::observability::{Loggable, NoOpLog, PhaseTimer, TracingLog};
    pub use crate::strategies::{
        CacheStrategy, FastStrategy, Notifier, Phase, StandardStrategy, Strategy,
    };
}
