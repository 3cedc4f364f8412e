//! Response contract and provenance tag.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a response was produced.
///
/// The basic split is network versus non-network, but delegates with
/// layered storage can report [`Source::Other`] for anything more exotic
/// (e.g. a memory tier or a fixture).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    /// The response came from a remote call.
    Network,
    /// The response came from the local cache.
    Cache,
    /// Any other provenance.
    Other,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network => write!(f, "network"),
            Self::Cache => write!(f, "cache"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Contract for values produced by pipeline phases.
///
/// A response carries business-level success independently of whether the
/// pipeline itself completed: a request can round-trip cleanly and still
/// not be successful because of the data it returned.
pub trait Response: Send {
    /// Returns whether the request was successful at the business level.
    fn is_success(&self) -> bool;

    /// Returns the provenance of this response.
    fn source(&self) -> Source;

    /// Returns true if the response came from the network.
    fn is_from_network(&self) -> bool {
        self.source() == Source::Network
    }
}
