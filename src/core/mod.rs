//! Core value contracts carried between pipeline phases.

mod error;
mod response;

pub use error::{BasicError, RequestError};
pub use response::{Response, Source};
