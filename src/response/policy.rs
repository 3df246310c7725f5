//! Connection disruption policies.
//!
//! The engine only carries the tag; the connection dispatcher reads it to
//! decide what happens to the socket before or instead of a normal render.

use serde::{Deserialize, Serialize};

/// Abnormal connection behavior applied around a scripted response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisruptionPolicy {
    /// Render normally and keep the connection open for further requests.
    #[default]
    KeepOpen,
    /// Render normally, then close the connection.
    DisconnectAtEnd,
    /// Render normally, then upgrade the connection to TLS.
    UpgradeToSslAtEnd,
    /// Close the connection without reading the request.
    DisconnectAtStart,
    /// Render normally, then shut down the input half of the socket.
    ShutdownInputAtEnd,
    /// Render normally, then shut down the output half of the socket.
    ShutdownOutputAtEnd,
    /// Read the request but never respond.
    NoResponse,
}

impl DisruptionPolicy {
    /// Whether the dispatcher should render the response at all.
    pub fn renders_response(&self) -> bool {
        !matches!(self, DisruptionPolicy::DisconnectAtStart | DisruptionPolicy::NoResponse)
    }

    /// Whether the connection stays usable after the response.
    pub fn keeps_connection(&self) -> bool {
        matches!(self, DisruptionPolicy::KeepOpen | DisruptionPolicy::UpgradeToSslAtEnd)
    }
}

impl std::fmt::Display for DisruptionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DisruptionPolicy::KeepOpen => "keep-open",
            DisruptionPolicy::DisconnectAtEnd => "disconnect-at-end",
            DisruptionPolicy::UpgradeToSslAtEnd => "upgrade-to-ssl-at-end",
            DisruptionPolicy::DisconnectAtStart => "disconnect-at-start",
            DisruptionPolicy::ShutdownInputAtEnd => "shutdown-input-at-end",
            DisruptionPolicy::ShutdownOutputAtEnd => "shutdown-output-at-end",
            DisruptionPolicy::NoResponse => "no-response",
        };
        f.write_str(name)
    }
}
