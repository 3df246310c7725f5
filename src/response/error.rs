//! Render error definitions.

use thiserror::Error;

use crate::response::throttle::Interrupted;

/// Errors that can occur while rendering a scripted response.
#[derive(Debug, Error)]
pub enum ResponseError {
    /// A single-use stream body was rendered a second time.
    #[error("Stream already consumed")]
    StreamConsumed,

    /// Writing to the sink or reading the body failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A throttle pause was cut short; the render is aborted.
    #[error("Throttle pause interrupted after {written} body bytes")]
    Interrupted {
        written: u64,
        #[source]
        source: Interrupted,
    },
}
