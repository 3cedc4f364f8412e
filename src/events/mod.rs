//! Observer/bus collaborator: terminal outcome events and their sinks.

mod sink;

pub use sink::{ChannelSink, CollectingSink, NoOpSink, Outcome, OutcomeSink};
