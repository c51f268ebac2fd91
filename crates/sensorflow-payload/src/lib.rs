pub mod flatten;
mod error;

pub use error::{PayloadError, Result};
pub use flatten::{flatten, JsonFlattener, DEFAULT_SEPARATOR};
