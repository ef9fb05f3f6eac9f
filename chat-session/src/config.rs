use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ConfigError;

/// Loopback address the Answer Service listens on during development.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/ask";

pub const DEFAULT_TITLE: &str = "SchemeGPT";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatConfig {
    /// Full URL the question is POSTed to
    pub endpoint: String,
    /// Header title
    pub title: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl ChatConfig {
    pub fn with_endpoint(mut self, endpoint: &str) -> Result<Self, ConfigError> {
        let url = parse_endpoint(endpoint)?;
        self.endpoint = url.to_string();
        Ok(self)
    }

    /// Pick the first valid endpoint among the candidates, highest priority
    /// first. Invalid candidates are skipped with a warning.
    pub fn resolve<'a>(candidates: impl IntoIterator<Item = Option<&'a str>>) -> Self {
        for candidate in candidates.into_iter().flatten() {
            if candidate.trim().is_empty() {
                continue;
            }
            match Self::default().with_endpoint(candidate) {
                Ok(config) => {
                    tracing::info!(endpoint = %config.endpoint, "using configured answer endpoint");
                    return config;
                }
                Err(e) => tracing::warn!("ignoring endpoint override: {e}"),
            }
        }
        tracing::info!(endpoint = DEFAULT_ENDPOINT, "using default answer endpoint");
        Self::default()
    }

    /// Root URL of the backend, probed to show the online status.
    pub fn health_url(&self) -> Result<String, ConfigError> {
        let url = parse_endpoint(&self.endpoint)?;
        Ok(format!("{}/", url.origin().ascii_serialization()))
    }
}

/// Accept only absolute http(s) URLs with a host.
fn parse_endpoint(endpoint: &str) -> Result<Url, ConfigError> {
    let endpoint = endpoint.trim();
    let invalid = || ConfigError::InvalidEndpoint(endpoint.to_string());

    let url = Url::parse(endpoint).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid());
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(invalid());
    }
    // The parser folds `http:///ask` into host `ask`; an empty authority is a typo.
    let (_, authority) = endpoint.split_once(':').ok_or_else(invalid)?;
    if !authority.starts_with("//") || authority[2..].starts_with(['/', '\\']) {
        return Err(invalid());
    }
    Ok(url)
}
