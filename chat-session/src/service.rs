use async_trait::async_trait;
use shared_types::AnswerResponse;

use crate::error::DispatchError;

/// The external question-answering backend.
///
/// Implementations perform exactly one request per call and never retry.
/// Futures are not `Send` so browser HTTP clients can implement this.
#[async_trait(?Send)]
pub trait AnswerService {
    async fn ask(&self, question: &str) -> Result<AnswerResponse, DispatchError>;
}

/// Decode a successful response body.
///
/// A body that is not a JSON object is [`DispatchError::Malformed`]; inside
/// an object every field is optional.
pub fn decode_answer(body: &str) -> Result<AnswerResponse, DispatchError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| DispatchError::Malformed(e.to_string()))?;
    AnswerResponse::from_value(&value)
        .ok_or_else(|| DispatchError::Malformed("expected a JSON object".to_string()))
}

/// Build the error for a non-success status, keeping whatever explanation
/// the backend put in the body.
pub fn status_error(status: u16, body: &str) -> DispatchError {
    let body = body.trim();
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            ["detail", "error", "message"]
                .iter()
                .find_map(|key| json.get(*key).and_then(|v| v.as_str()).map(ToString::to_string))
        })
        .unwrap_or_else(|| body.to_string());

    DispatchError::Status { status, detail }
}
