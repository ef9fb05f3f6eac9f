use async_trait::async_trait;
use chat_session::{decode_answer, status_error, AnswerService, ChatConfig, DispatchError};
use gloo_net::http::Request;
use shared_types::{AnswerRequest, AnswerResponse};
use std::sync::OnceLock;

use crate::interop::local_storage_item;

/// `localStorage` key that overrides the answer endpoint at runtime.
pub const ENDPOINT_STORAGE_KEY: &str = "schemegpt.api_url";

/// Resolve the endpoint
/// - a `localStorage` override wins
/// - then `SCHEMEGPT_API_URL` baked in at build time
/// - otherwise the loopback default
fn load_config() -> ChatConfig {
    let stored = local_storage_item(ENDPOINT_STORAGE_KEY);
    ChatConfig::resolve([stored.as_deref(), option_env!("SCHEMEGPT_API_URL")])
}

/// Lazy-static equivalent for WASM - computed at first use
static CONFIG_CACHE: OnceLock<ChatConfig> = OnceLock::new();

/// Get the cached chat configuration
pub fn chat_config() -> &'static ChatConfig {
    CONFIG_CACHE.get_or_init(load_config)
}

/// Answer Service reached over `fetch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpAnswerService {
    endpoint: String,
}

impl HttpAnswerService {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config(config: &ChatConfig) -> Self {
        Self::new(config.endpoint.clone())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl AnswerService for HttpAnswerService {
    async fn ask(&self, question: &str) -> Result<AnswerResponse, DispatchError> {
        let response = Request::post(&self.endpoint)
            .json(&AnswerRequest::new(question))
            .map_err(|e| DispatchError::Transport(format!("Failed to serialize request: {e}")))?
            .send()
            .await
            .map_err(|e| DispatchError::Transport(e.to_string()))?;

        let ok = response.ok();
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DispatchError::Malformed(e.to_string()))?;

        if !ok {
            return Err(status_error(status, &body));
        }
        decode_answer(&body)
    }
}

/// Probe the backend root. Returns the reported status string.
pub async fn check_health(url: &str) -> Result<String, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let json: serde_json::Value = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))?;

    Ok(json
        .get("status")
        .and_then(|v| v.as_str())
        .unwrap_or("ok")
        .to_string())
}
