//! Errors returned by the poke handlers

use std::time::Duration;

use nix::sys::signal::Signal;

#[derive(Debug, thiserror::Error)]
pub enum PokeError {
    #[error("failed to create request for {url}: {source}")]
    BuildRequest {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} timed out after {timeout:?}")]
    Timeout { url: String, timeout: Duration },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to read response from {url}: {source}")]
    ReadBody {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("server returned error status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("no process found with name {0:?}")]
    NoMatch(String),

    #[error("failed to find process {0}")]
    InvalidPid(u32),

    #[error("failed to send {signal} to PID {pid}: {source}")]
    Signal {
        pid: u32,
        signal: Signal,
        #[source]
        source: nix::errno::Errno,
    },

    #[error("failed to send signal to any process: {0}")]
    NoneDelivered(Box<PokeError>),
}

impl PokeError {
    /// True for failures raised because the configured timeout elapsed
    pub fn is_timeout(&self) -> bool {
        matches!(self, PokeError::Timeout { .. })
    }
}
