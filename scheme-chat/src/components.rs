pub mod chat;
pub mod styles;

pub use chat::{BackendStatus, ChatView, SUGGESTED_QUESTIONS};
