//! Framework-independent core of the SchemeGPT chat.
//!
//! - [`session`]: transcript, draft and the in-flight / error flags
//! - [`service`]: the Answer Service seam and response decoding
//! - [`render`]: pure display helpers for AI replies
//! - [`config`]: endpoint configuration

pub mod config;
pub mod error;
pub mod render;
pub mod service;
pub mod session;

pub use config::{ChatConfig, DEFAULT_ENDPOINT};
pub use error::{ConfigError, DispatchError};
pub use render::{
    confidence_bar, format_similarity, scheme_label, summarize_sources, AiDecorations,
    ConfidenceBar, ConfidenceTier, SourceSummary,
};
pub use service::{decode_answer, status_error, AnswerService};
pub use session::{ask, ChatSession, PendingQuestion, ERROR_BANNER_TEXT, FALLBACK_ANSWER_TEXT};
