//! Shared types for the SchemeGPT chat
//!
//! These types are used by both:
//! - the framework-independent session core (`chat-session`)
//! - Dioxus components (WASM)
//!
//! Serializable with serde for JSON over HTTP

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Text shown for an AI message whose `answer` was empty or missing.
pub const NO_ANSWER_TEXT: &str = "No answer received.";

/// Document name used when a citation carries no usable `source`.
pub const UNKNOWN_SOURCE: &str = "Unknown";

// ============================================================================
// Wire Contract
// ============================================================================

/// Body of the `POST` sent to the Answer Service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnswerRequest {
    pub question: String,
}

impl AnswerRequest {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
        }
    }
}

/// One citation fragment, one per retrieved chunk.
///
/// The serde derive is strict about types and is meant for round-trips and
/// well-formed bodies; [`SourceRef::from_value`] is the lenient decoder used
/// on live responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceRef {
    /// Originating document name
    #[serde(default = "unknown_source")]
    pub source: String,

    /// Position within the document (kept for fidelity, never rendered)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk_index: Option<i64>,

    #[serde(default)]
    pub similarity_score: f64,

    /// Whatever else the backend attached to the chunk metadata
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn unknown_source() -> String {
    UNKNOWN_SOURCE.to_string()
}

impl SourceRef {
    pub fn new(source: impl Into<String>, similarity_score: f64) -> Self {
        Self {
            source: source.into(),
            chunk_index: None,
            similarity_score,
            extra: Map::new(),
        }
    }

    /// Lenient decode of one `sources[]` entry.
    ///
    /// Never fails: a missing or non-string `source` becomes [`UNKNOWN_SOURCE`],
    /// a missing or non-numeric `similarity_score` becomes `0.0`, and unknown
    /// keys are kept in [`SourceRef::extra`].
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::new(UNKNOWN_SOURCE, 0.0);
        };

        let source = obj
            .get("source")
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .unwrap_or(UNKNOWN_SOURCE)
            .to_string();
        let chunk_index = obj.get("chunk_index").and_then(|v| v.as_i64());
        let similarity_score = obj
            .get("similarity_score")
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let extra = obj
            .iter()
            .filter(|(k, _)| !matches!(k.as_str(), "source" | "chunk_index" | "similarity_score"))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        Self {
            source,
            chunk_index,
            similarity_score,
            extra,
        }
    }
}

/// Reply from the Answer Service.
///
/// Live bodies go through [`AnswerResponse::from_value`]; the derive only
/// tolerates missing fields, not ill-typed ones.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AnswerResponse {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<SourceRef>,
    #[serde(default)]
    pub detected_scheme: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
}

impl AnswerResponse {
    /// Lenient decode of a response body that already parsed as JSON.
    ///
    /// Returns `None` only when the body is not a JSON object. Every field
    /// falls back to its default when missing or of the wrong type.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;

        let text = |key: &str| {
            obj.get(key)
                .and_then(|v| v.as_str())
                .map(ToString::to_string)
        };

        let sources = obj
            .get("sources")
            .and_then(|v| v.as_array())
            .map(|items| items.iter().map(SourceRef::from_value).collect())
            .unwrap_or_default();

        Some(Self {
            question: text("question").unwrap_or_default(),
            answer: text("answer").unwrap_or_default(),
            sources,
            detected_scheme: text("detected_scheme"),
            confidence: obj.get("confidence").and_then(|v| v.as_f64()),
        })
    }
}

// ============================================================================
// Transcript
// ============================================================================

/// One transcript entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub id: String,
    pub sender: Sender,
    pub text: String,
    /// AI messages only; empty otherwise
    #[serde(default)]
    pub sources: Vec<SourceRef>,
    #[serde(default)]
    pub detected_scheme: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

impl Message {
    pub fn user(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self::plain(id, Sender::User, text)
    }

    /// AI message without any metadata (used for fallbacks).
    pub fn ai(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self::plain(id, Sender::Ai, text)
    }

    /// AI message built from a successful reply.
    pub fn from_answer(id: impl Into<String>, response: AnswerResponse) -> Self {
        let text = if response.answer.trim().is_empty() {
            NO_ANSWER_TEXT.to_string()
        } else {
            response.answer
        };

        Self {
            id: id.into(),
            sender: Sender::Ai,
            text,
            sources: response.sources,
            detected_scheme: response.detected_scheme,
            confidence: response.confidence.filter(|c| !c.is_nan()),
            timestamp: Utc::now(),
        }
    }

    pub fn is_user(&self) -> bool {
        matches!(self.sender, Sender::User)
    }

    fn plain(id: impl Into<String>, sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            sender,
            text: text.into(),
            sources: Vec::new(),
            detected_scheme: None,
            confidence: None,
            timestamp: Utc::now(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
