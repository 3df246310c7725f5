//! Single-use streaming response bodies.
//!
//! # Responsibilities
//! - Hold a one-shot byte producer and its declared length
//! - Release the producer after exactly one render attempt
//!
//! # Design Decisions
//! - Rendering takes `&mut self`, so the consumed transition cannot race
//! - `StreamResponse` is not `Clone`; a consumed body cannot be duplicated
//! - The taken body is closed by a drop guard, so unwinding renders close it too
//! - Close errors are logged and discarded; panics while closing propagate

use std::fs::File;
use std::io::{self, BufReader, Cursor, Read, Write};
use std::net::{Shutdown, TcpStream};
use std::process::ChildStdout;

use crate::response::error::ResponseError;
use crate::response::head::{ResponseHead, CONTENT_LENGTH};
use crate::response::scripted::ScriptedResponse;
use crate::response::throttle::{write_response, Pacer};

/// A readable body source that owns a releasable resource.
pub trait BodyStream: Read + Send {
    /// Release the underlying resource. Called once, after the last read.
    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl BodyStream for File {}

impl BodyStream for TcpStream {
    fn close(&mut self) -> io::Result<()> {
        self.shutdown(Shutdown::Read)
    }
}

impl BodyStream for ChildStdout {}

impl BodyStream for io::Empty {}

impl BodyStream for &'static [u8] {}

impl<T: AsRef<[u8]> + Send> BodyStream for Cursor<T> {}

impl<R: Read + Send> BodyStream for BufReader<R> {}

impl<S: BodyStream + ?Sized> BodyStream for Box<S> {
    fn close(&mut self) -> io::Result<()> {
        (**self).close()
    }
}

/// A scripted response whose body is read from a stream. Each instance can
/// only be rendered once.
pub struct StreamResponse {
    head: ResponseHead,
    body: Option<Box<dyn BodyStream>>,
}

impl StreamResponse {
    /// An empty `200 OK` response with `Content-Length: 0`.
    pub fn new() -> Self {
        let mut head = ResponseHead::new();
        head.headers_mut().add(CONTENT_LENGTH, 0);
        Self {
            head,
            body: Some(Box::new(io::empty())),
        }
    }

    /// Install `stream` as the body, declaring `length` bytes in
    /// `Content-Length`. A previously installed, unconsumed stream is closed.
    pub fn set_body<S>(&mut self, stream: S, length: u64) -> &mut Self
    where
        S: BodyStream + 'static,
    {
        if let Some(mut previous) = self.body.take() {
            close_quietly(&mut *previous);
        }
        self.body = Some(Box::new(stream));
        self.head.headers_mut().set(CONTENT_LENGTH, length);
        self
    }

    /// Whether the body has already been rendered.
    pub fn is_consumed(&self) -> bool {
        self.body.is_none()
    }
}

impl Default for StreamResponse {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StreamResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamResponse")
            .field("head", &self.head)
            .field("consumed", &self.is_consumed())
            .finish()
    }
}

impl ScriptedResponse for StreamResponse {
    fn head(&self) -> &ResponseHead {
        &self.head
    }

    fn head_mut(&mut self) -> &mut ResponseHead {
        &mut self.head
    }

    fn render_paced(&mut self, out: &mut dyn Write, pacer: &mut dyn Pacer) -> Result<(), ResponseError> {
        let Some(body) = self.body.take() else {
            tracing::warn!(status = %self.head.status(), "Stream response rendered twice");
            return Err(ResponseError::StreamConsumed);
        };

        let mut body = BodyGuard(body);
        write_response(&self.head, &mut body.0, out, pacer)?;
        Ok(())
    }
}

/// Closes a taken body when dropped, including while unwinding.
struct BodyGuard(Box<dyn BodyStream>);

impl Drop for BodyGuard {
    fn drop(&mut self) {
        close_quietly(&mut *self.0);
    }
}

fn close_quietly(stream: &mut dyn BodyStream) {
    if let Err(e) = stream.close() {
        tracing::debug!(error = %e, "Discarded error while closing body stream");
    }
}
