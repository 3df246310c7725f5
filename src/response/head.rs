//! Status line, headers and delivery settings shared by every response.

use std::num::NonZeroU32;

use crate::response::headers::HeaderList;
use crate::response::policy::DisruptionPolicy;

pub const CONTENT_LENGTH: &str = "Content-Length";
pub const TRANSFER_ENCODING: &str = "Transfer-Encoding";

const DEFAULT_STATUS: &str = "HTTP/1.1 200 OK";

/// Everything a response writes before its body, plus delivery settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseHead {
    status: String,
    headers: HeaderList,
    bytes_per_second: Option<NonZeroU32>,
    policy: DisruptionPolicy,
}

impl ResponseHead {
    pub fn new() -> Self {
        Self {
            status: DEFAULT_STATUS.to_string(),
            headers: HeaderList::new(),
            bytes_per_second: None,
            policy: DisruptionPolicy::default(),
        }
    }

    /// The status line, such as `HTTP/1.1 200 OK`.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Synthesize `HTTP/1.1 <code> OK`. The reason phrase is always `OK`.
    pub fn set_response_code(&mut self, code: u16) {
        self.status = format!("HTTP/1.1 {} OK", code);
    }

    /// Use `line` verbatim as the status line.
    pub fn set_status(&mut self, line: impl Into<String>) {
        self.status = line.into();
    }

    pub fn headers(&self) -> &HeaderList {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut HeaderList {
        &mut self.headers
    }

    /// Simulated bandwidth, or `None` when unlimited.
    pub fn bytes_per_second(&self) -> Option<NonZeroU32> {
        self.bytes_per_second
    }

    /// Limit body delivery to `bytes_per_second`. Zero is clamped to one.
    pub fn set_bytes_per_second(&mut self, bytes_per_second: u32) {
        self.bytes_per_second = NonZeroU32::new(bytes_per_second.max(1));
    }

    pub fn clear_bandwidth_limit(&mut self) {
        self.bytes_per_second = None;
    }

    pub fn policy(&self) -> DisruptionPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: DisruptionPolicy) {
        self.policy = policy;
    }
}

impl Default for ResponseHead {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ResponseHead {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.status)
    }
}
