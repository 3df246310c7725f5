//! Reusable in-memory response bodies.

use std::io::Write;

use bytes::Bytes;

use crate::response::chunked;
use crate::response::error::ResponseError;
use crate::response::head::{ResponseHead, CONTENT_LENGTH, TRANSFER_ENCODING};
use crate::response::scripted::ScriptedResponse;
use crate::response::throttle::{write_response, Pacer};

/// A scripted response with an immutable in-memory body.
///
/// Cloning yields an independent response: the header list is copied while
/// the body buffer is shared, since it is never mutated once set.
#[derive(Debug, Clone)]
pub struct MockResponse {
    head: ResponseHead,
    body: Bytes,
    chunked: bool,
}

impl MockResponse {
    /// An empty `200 OK` response with `Content-Length: 0`.
    pub fn new() -> Self {
        let mut head = ResponseHead::new();
        head.headers_mut().add(CONTENT_LENGTH, 0);
        Self {
            head,
            body: Bytes::new(),
            chunked: false,
        }
    }

    /// Body bytes as written on the wire, chunk framing included.
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    pub fn is_chunked(&self) -> bool {
        self.chunked
    }

    /// Replace the body and set `Content-Length` to match. Any chunked
    /// framing is dropped.
    pub fn set_body(&mut self, body: impl Into<Bytes>) -> &mut Self {
        self.body = body.into();
        self.chunked = false;
        let headers = self.head.headers_mut();
        headers.remove(TRANSFER_ENCODING);
        headers.set(CONTENT_LENGTH, self.body.len());
        self
    }

    /// Like [`MockResponse::set_body`] for ASCII text.
    ///
    /// # Panics
    /// Panics if `body` is not ASCII.
    pub fn set_body_text(&mut self, body: &str) -> &mut Self {
        assert!(body.is_ascii(), "response body must be ASCII");
        self.set_body(Bytes::copy_from_slice(body.as_bytes()))
    }

    /// Frame `body` as chunks of at most `max_chunk_size` bytes and switch
    /// to `Transfer-Encoding: chunked`. Framing happens once, here.
    ///
    /// # Panics
    /// Panics if `max_chunk_size` is zero.
    pub fn set_chunked_body(&mut self, body: impl AsRef<[u8]>, max_chunk_size: usize) -> &mut Self {
        self.body = Bytes::from(chunked::encode(body.as_ref(), max_chunk_size));
        self.chunked = true;
        let headers = self.head.headers_mut();
        headers.remove(CONTENT_LENGTH);
        headers.set(TRANSFER_ENCODING, "chunked");
        self
    }

    /// Like [`MockResponse::set_chunked_body`] for ASCII text.
    ///
    /// # Panics
    /// Panics if `body` is not ASCII or `max_chunk_size` is zero.
    pub fn set_chunked_body_text(&mut self, body: &str, max_chunk_size: usize) -> &mut Self {
        assert!(body.is_ascii(), "response body must be ASCII");
        self.set_chunked_body(body.as_bytes(), max_chunk_size)
    }
}

impl Default for MockResponse {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedResponse for MockResponse {
    fn head(&self) -> &ResponseHead {
        &self.head
    }

    fn head_mut(&mut self) -> &mut ResponseHead {
        &mut self.head
    }

    fn render_paced(&mut self, out: &mut dyn Write, pacer: &mut dyn Pacer) -> Result<(), ResponseError> {
        let mut body = &self.body[..];
        write_response(&self.head, &mut body, out, pacer)?;
        Ok(())
    }
}

impl std::fmt::Display for MockResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.head, f)
    }
}
