/// Why a dispatch produced no usable answer.
///
/// Every variant is recovered the same way by the session: a fallback AI
/// message plus the error banner.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("HTTP error: {status} ({detail})")]
    Status { status: u16, detail: String },

    #[error("Failed to parse JSON: {0}")]
    Malformed(String),
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("endpoint must be an http(s) URL with a host, got {0:?}")]
    InvalidEndpoint(String),
}
