//! Scripted response rendering subsystem.
//!
//! # Data Flow
//! ```text
//! Test author builds a response:
//!     → headers.rs / head.rs (status line, header lines, bandwidth, policy)
//!     → fixed.rs (in-memory body, optional chunked.rs framing)
//!       or stream.rs (single-use body stream)
//!
//! Dispatcher replays it on a connection:
//!     → ScriptedResponse::render(sink)
//!     → throttle.rs (status, headers, blank line, body in 1452-byte increments)
//!     → stream bodies closed and marked consumed
//! ```
//!
//! # Design Decisions
//! - Rendering is synchronous; throttling blocks the rendering thread
//! - In-memory bodies are reused by cloning; stream bodies are single-use
//! - The status reason phrase is always the literal `OK` unless set verbatim

pub mod chunked;
pub mod error;
pub mod fixed;
pub mod head;
pub mod headers;
pub mod policy;
pub mod scripted;
pub mod stream;
pub mod throttle;

pub use error::ResponseError;
pub use fixed::MockResponse;
pub use head::{ResponseHead, CONTENT_LENGTH, TRANSFER_ENCODING};
pub use headers::HeaderList;
pub use policy::DisruptionPolicy;
pub use scripted::ScriptedResponse;
pub use stream::{BodyStream, StreamResponse};
pub use throttle::{Pacer, ThreadPacer, INCREMENT};
