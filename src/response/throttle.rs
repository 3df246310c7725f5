//! Throttled response writer.
//!
//! # Responsibilities
//! - Write the status line, header block and body onto a byte sink
//! - Stream the body in MTU-sized increments, flushing after each
//! - Pause between increments to simulate a limited-bandwidth link
//!
//! # Design Decisions
//! - Pauses are proportional to bytes already written; there is no timer task
//! - Pausing goes through [`Pacer`] so tests can observe delays without sleeping
//! - An interrupted pause aborts the render instead of resuming mid-stream

use std::io::{self, Read, Write};
use std::num::NonZeroU32;
use std::thread;
use std::time::Duration;

use thiserror::Error;

use crate::response::error::ResponseError;
use crate::response::head::ResponseHead;

/// Body bytes per write: an Ethernet frame minus IP and TCP overhead.
pub const INCREMENT: usize = 1452;

/// A throttle pause ended early.
#[derive(Debug, Error)]
#[error("pause interrupted")]
pub struct Interrupted;

/// Suspends the rendering thread between body increments.
pub trait Pacer {
    fn pause(&mut self, delay: Duration) -> Result<(), Interrupted>;
}

/// Pacer that blocks the calling thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&mut self, delay: Duration) -> Result<(), Interrupted> {
        thread::sleep(delay);
        Ok(())
    }
}

/// Tracks bytes written since the last pause.
#[derive(Debug)]
struct Throttle {
    delay: Duration,
    since_pause: u64,
}

impl Throttle {
    fn new(bytes_per_second: Option<NonZeroU32>) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms(bytes_per_second)),
            since_pause: 0,
        }
    }

    fn record(&mut self, bytes: usize, pacer: &mut dyn Pacer) -> Result<(), Interrupted> {
        self.since_pause += bytes as u64;
        if self.since_pause >= INCREMENT as u64 && !self.delay.is_zero() {
            self.since_pause %= INCREMENT as u64;
            tracing::trace!(delay_ms = self.delay.as_millis() as u64, "Throttle pause");
            pacer.pause(self.delay)?;
        }
        Ok(())
    }
}

/// Milliseconds to pause after each full increment. Zero when unlimited.
pub fn delay_ms(bytes_per_second: Option<NonZeroU32>) -> u64 {
    match bytes_per_second {
        Some(rate) => (1000 * INCREMENT as u64) / u64::from(rate.get()),
        None => 0,
    }
}

/// Write a complete response: status line, headers, blank line, then `body`.
///
/// Returns the number of body bytes written.
pub fn write_response<R, W>(
    head: &ResponseHead,
    body: &mut R,
    out: &mut W,
    pacer: &mut dyn Pacer,
) -> Result<u64, ResponseError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    out.write_all(head.status().as_bytes())?;
    out.write_all(b"\r\n")?;
    for header in head.headers() {
        out.write_all(header.as_bytes())?;
        out.write_all(b"\r\n")?;
    }
    out.write_all(b"\r\n")?;
    out.flush()?;

    let mut throttle = Throttle::new(head.bytes_per_second());
    tracing::debug!(
        status = %head.status(),
        headers = head.headers().len(),
        bytes_per_second = head.bytes_per_second().map(NonZeroU32::get),
        delay_ms = throttle.delay.as_millis() as u64,
        "Rendering response"
    );

    let mut buffer = [0u8; INCREMENT];
    let mut written = 0u64;
    loop {
        let read = match body.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        out.write_all(&buffer[..read])?;
        out.flush()?;
        written += read as u64;

        throttle
            .record(read, pacer)
            .map_err(|source| ResponseError::Interrupted { written, source })?;
    }

    tracing::debug!(status = %head.status(), body_bytes = written, "Response rendered");
    Ok(written)
}
