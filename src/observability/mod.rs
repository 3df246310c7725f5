//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! response/ and config/ emit tracing events:
//!     → logging.rs (subscriber with env filter, stderr output)
//! ```
//!
//! # Design Decisions
//! - Library code only emits events; installing a subscriber is the binary's job
//! - Logs go to stderr so rendered bytes on stdout stay clean

pub mod logging;
