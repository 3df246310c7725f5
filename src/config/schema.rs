//! Response script definitions.
//!
//! A script describes one canned response. All types derive Serde traits for
//! deserialization from TOML files.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::response::{DisruptionPolicy, MockResponse, ScriptedResponse, StreamResponse};

/// Root of a response script.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ResponseScript {
    /// Status code; the status line becomes `HTTP/1.1 <code> OK`.
    pub code: Option<u16>,

    /// Verbatim status line. Mutually exclusive with `code`.
    pub status: Option<String>,

    /// Raw header lines, written in order.
    pub headers: Vec<String>,

    /// Inline ASCII body.
    pub body: Option<String>,

    /// File streamed as the body. Relative paths resolve against the script.
    pub body_file: Option<PathBuf>,

    /// Frame the inline body as chunks of at most this many bytes.
    pub chunk_size: Option<usize>,

    /// Simulated bandwidth. Unlimited when absent.
    pub bytes_per_second: Option<u32>,

    /// Connection behavior applied by the dispatcher.
    pub policy: DisruptionPolicy,

    /// Logging settings for the CLI.
    pub observability: ObservabilityConfig,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl ResponseScript {
    /// Build the scripted response. A `body_file` is opened here and
    /// streamed once; inline bodies can be rendered any number of times.
    ///
    /// # Panics
    /// Panics on scripts that fail validation (non-ASCII body, zero chunk size).
    pub fn build(&self) -> std::io::Result<Box<dyn ScriptedResponse>> {
        let response: Box<dyn ScriptedResponse> = match &self.body_file {
            Some(path) => {
                let file = File::open(path)?;
                let length = file.metadata()?.len();
                let mut response = StreamResponse::new();
                self.apply_head(&mut response);
                response.set_body(BufReader::new(file), length);
                Box::new(response)
            }
            None => {
                let mut response = MockResponse::new();
                self.apply_head(&mut response);
                let body = self.body.as_deref().unwrap_or_default();
                match self.chunk_size {
                    Some(size) => response.set_chunked_body_text(body, size),
                    None => response.set_body_text(body),
                };
                Box::new(response)
            }
        };
        Ok(response)
    }

    fn apply_head<R: ScriptedResponse>(&self, response: &mut R) {
        if let Some(code) = self.code {
            response.set_response_code(code);
        }
        if let Some(status) = &self.status {
            response.set_status(status.as_str());
        }
        for line in &self.headers {
            response.add_header_line(line.as_str());
        }
        if let Some(rate) = self.bytes_per_second {
            response.set_bytes_per_second(rate);
        }
        response.set_disruption_policy(self.policy);
    }
}
