//! Error type shared by the fallible utilities.
//!
//! Most helpers in this crate are total: absent or blank text is simply the
//! empty case. Only a missing stream source, an undeterminable local offset
//! and unparseable dates are reported as errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UtilsError {
    /// A required argument was passed as `None`.
    #[error("argument '{name}' must not be absent")]
    MissingArgument { name: &'static str },
    #[error("unable to determine the local UTC offset: {0}")]
    LocalOffset(#[from] time::error::IndeterminateOffset),
    #[error("invalid date '{input}' (expected YYYY-MM-DD): {source}")]
    InvalidDate {
        input: String,
        #[source]
        source: time::error::Parse,
    },
}

pub type Result<T> = std::result::Result<T, UtilsError>;
