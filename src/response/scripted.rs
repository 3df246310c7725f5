//! Contract shared by every scripted response variant.

use std::io::Write;

use crate::response::error::ResponseError;
use crate::response::head::ResponseHead;
use crate::response::headers::HeaderList;
use crate::response::policy::DisruptionPolicy;
use crate::response::throttle::{Pacer, ThreadPacer};

/// A pre-built response that a connection dispatcher can replay.
///
/// The mutators return `&mut Self` so configuration chains:
///
/// ```
/// use mock_response::{MockResponse, ScriptedResponse};
///
/// let mut response = MockResponse::new();
/// response
///     .set_response_code(404)
///     .add_header("Content-Type", "text/plain")
///     .set_bytes_per_second(4096);
/// assert_eq!(response.status(), "HTTP/1.1 404 OK");
/// ```
pub trait ScriptedResponse: Send {
    fn head(&self) -> &ResponseHead;

    fn head_mut(&mut self) -> &mut ResponseHead;

    /// Render the full response onto `out`, pausing through `pacer`.
    fn render_paced(&mut self, out: &mut dyn Write, pacer: &mut dyn Pacer) -> Result<(), ResponseError>;

    /// Render the full response onto `out`, blocking the calling thread
    /// to honor the bandwidth limit.
    fn render(&mut self, out: &mut dyn Write) -> Result<(), ResponseError> {
        self.render_paced(out, &mut ThreadPacer)
    }

    /// The status line, such as `HTTP/1.1 200 OK`.
    fn status(&self) -> &str {
        self.head().status()
    }

    /// Header lines, such as `Content-Length: 0`, in insertion order.
    fn headers(&self) -> &HeaderList {
        self.head().headers()
    }

    fn disruption_policy(&self) -> DisruptionPolicy {
        self.head().policy()
    }

    /// Simulated bandwidth in bytes per second, `None` when unlimited.
    fn bandwidth_limit(&self) -> Option<u32> {
        self.head().bytes_per_second().map(|rate| rate.get())
    }

    fn set_response_code(&mut self, code: u16) -> &mut Self
    where
        Self: Sized,
    {
        self.head_mut().set_response_code(code);
        self
    }

    fn set_status(&mut self, line: impl Into<String>) -> &mut Self
    where
        Self: Sized,
    {
        self.head_mut().set_status(line);
        self
    }

    fn add_header_line(&mut self, line: impl Into<String>) -> &mut Self
    where
        Self: Sized,
    {
        self.head_mut().headers_mut().add_line(line);
        self
    }

    fn add_header(&mut self, name: &str, value: impl std::fmt::Display) -> &mut Self
    where
        Self: Sized,
    {
        self.head_mut().headers_mut().add(name, value);
        self
    }

    fn set_header(&mut self, name: &str, value: impl std::fmt::Display) -> &mut Self
    where
        Self: Sized,
    {
        self.head_mut().headers_mut().set(name, value);
        self
    }

    fn remove_header(&mut self, name: &str) -> &mut Self
    where
        Self: Sized,
    {
        self.head_mut().headers_mut().remove(name);
        self
    }

    fn clear_headers(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self.head_mut().headers_mut().clear();
        self
    }

    fn set_disruption_policy(&mut self, policy: DisruptionPolicy) -> &mut Self
    where
        Self: Sized,
    {
        self.head_mut().set_policy(policy);
        self
    }

    /// Simulate a link of `bytes_per_second`. Zero is clamped to one.
    fn set_bytes_per_second(&mut self, bytes_per_second: u32) -> &mut Self
    where
        Self: Sized,
    {
        self.head_mut().set_bytes_per_second(bytes_per_second);
        self
    }

    fn clear_bandwidth_limit(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self.head_mut().clear_bandwidth_limit();
        self
    }
}
