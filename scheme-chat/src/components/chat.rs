use chat_session::{
    ask, format_similarity, AiDecorations, ChatConfig, ChatSession, ConfidenceBar,
};
use chrono::{DateTime, Local, Utc};
use dioxus::prelude::*;
use shared_types::{Message, Sender};
use std::cell::Cell;
use std::rc::Rc;

use super::styles::CHAT_STYLES;
use crate::api::{check_health, HttpAnswerService};
use crate::interop::scroll_to_bottom;

const MESSAGES_SCROLL_ID: &str = "chat-messages";

/// One starter question per supported scheme, shown in the empty state.
pub const SUGGESTED_QUESTIONS: &[&str] = &[
    "What is the eligibility for PMJDY?",
    "Who can apply on the National Scholarship Portal?",
    "What does Ayushman Bharat cover?",
    "How do I get a house under PMAY-G?",
    "What subsidy does PMAY-U offer?",
    "How much loan can I get under MUDRA?",
];

/// Reachability of the Answer Service, from the root health probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendStatus {
    Checking,
    Online,
    Offline,
}

impl BackendStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Checking => "Connecting",
            Self::Online => "Online",
            Self::Offline => "Offline",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Checking => "chat-status status-checking",
            Self::Online => "chat-status status-online",
            Self::Offline => "chat-status status-offline",
        }
    }
}

#[component]
pub fn ChatView(config: ChatConfig) -> Element {
    let mut session = use_signal(ChatSession::new);
    let mut backend_status = use_signal(|| BackendStatus::Checking);
    let service = use_hook(|| Rc::new(HttpAnswerService::from_config(&config)));
    let alive = use_hook(|| Rc::new(Cell::new(true)));

    // Replies that land after unmount are dropped, never applied.
    {
        let alive = alive.clone();
        use_drop(move || {
            alive.set(false);
            // The signal may already be gone when the scope is torn down.
            if let Ok(mut state) = session.try_write() {
                state.close();
            }
        });
    }

    // Probe the backend once on mount
    {
        let health_url = config.health_url();
        use_effect(move || {
            let health_url = health_url.clone();
            spawn(async move {
                let health_url = match health_url {
                    Ok(url) => url,
                    Err(e) => {
                        dioxus_logger::tracing::warn!("Backend health check skipped: {}", e);
                        backend_status.set(BackendStatus::Offline);
                        return;
                    }
                };
                let status = match check_health(&health_url).await {
                    Ok(reported) => {
                        dioxus_logger::tracing::debug!("Backend status: {}", reported);
                        BackendStatus::Online
                    }
                    Err(e) => {
                        dioxus_logger::tracing::warn!("Backend health check failed: {}", e);
                        BackendStatus::Offline
                    }
                };
                backend_status.set(status);
            });
        });
    }

    // Scroll to bottom when messages change
    use_effect(move || {
        let state = session.read();
        let _ = (state.len(), state.is_in_flight());
        scroll_to_bottom(MESSAGES_SCROLL_ID);
    });

    let send_message = use_callback(move |_| {
        let Some(ticket) = session.write().begin_submit() else {
            return;
        };

        let service = service.clone();
        let alive = alive.clone();
        spawn(async move {
            let (ticket, outcome) = ask(service.as_ref(), ticket).await;
            if let Err(e) = &outcome {
                dioxus_logger::tracing::error!("Failed to get answer: {}", e);
            }
            if !alive.get() {
                return;
            }
            session.write().complete(ticket, outcome);
        });
    });

    let onkeydown = use_callback(move |e: KeyboardEvent| {
        if e.key() == Key::Enter && !e.modifiers().shift() {
            e.prevent_default();
            send_message.call(());
        }
    });

    let onclick = use_callback(move |_| {
        send_message.call(());
    });

    let oninput = use_callback(move |e: FormEvent| {
        session.write().set_draft(e.value());
    });

    let on_pick = use_callback(move |question: String| {
        session.write().set_draft(question);
    });

    let (transcript, draft, in_flight, banner, can_submit) = {
        let state = session.read();
        (
            state.transcript().to_vec(),
            state.draft().to_string(),
            state.is_in_flight(),
            state.error_banner(),
            state.can_submit(),
        )
    };
    let status = backend_status();

    rsx! {
        style { {CHAT_STYLES} }

        div {
            class: "chat-container",

            div {
                class: "chat-header",
                div {
                    class: "chat-title",
                    span { class: "chat-icon", "🏛" }
                    span { "{config.title}" }
                    span { class: "chat-subtitle", "Government schemes assistant" }
                }
                div {
                    class: status.class(),
                    span { class: "status-dot", "●" }
                    span { "{status.label()}" }
                }
            }

            if let Some(banner) = banner {
                div {
                    class: "error-banner",
                    role: "alert",
                    "{banner}"
                }
            }

            // Messages - scrollable area
            div {
                id: MESSAGES_SCROLL_ID,
                class: "messages-scroll-area",
                div {
                    class: "messages-list",
                    if transcript.is_empty() {
                        EmptyState { on_pick }
                    } else {
                        for msg in transcript.iter() {
                            MessageBubble { key: "{msg.id}", message: msg.clone() }
                        }
                    }
                    if in_flight {
                        LoadingIndicator {}
                    }
                }
            }

            // Input area
            div {
                class: "chat-input-area",
                div {
                    class: "input-wrapper",
                    textarea {
                        class: "chat-textarea",
                        placeholder: "Ask about a government scheme...",
                        value: "{draft}",
                        rows: "1",
                        oninput,
                        onkeydown,
                    }
                    button {
                        class: "send-button",
                        disabled: !can_submit,
                        onclick,
                        if in_flight {
                            div {
                                class: "spinner",
                                span { "◐" }
                            }
                        } else {
                            span { "➤" }
                        }
                    }
                }
                div {
                    class: "input-hint",
                    "Press Enter to send, Shift+Enter for new line"
                }
            }
        }
    }
}

#[component]
fn EmptyState(on_pick: Callback<String>) -> Element {
    rsx! {
        div {
            class: "empty-state",
            div { class: "empty-icon", "💬" }
            p { "Ask me about Indian government schemes" }
            span { "Eligibility, benefits and how to apply, answered from official documents" }
            div {
                class: "suggestions",
                for question in SUGGESTED_QUESTIONS.iter().copied() {
                    button {
                        key: "{question}",
                        class: "suggestion-button",
                        onclick: move |_| on_pick.call(question.to_string()),
                        "{question}"
                    }
                }
            }
        }
    }
}

struct SenderStyle {
    row: &'static str,
    avatar: &'static str,
    bubble: &'static str,
    name: &'static str,
    initial: &'static str,
}

fn sender_style(sender: Sender) -> SenderStyle {
    match sender {
        Sender::User => SenderStyle {
            row: "message-row user-row",
            avatar: "avatar user-avatar",
            bubble: "message-bubble user-bubble",
            name: "You",
            initial: "Y",
        },
        Sender::Ai => SenderStyle {
            row: "message-row ai-row",
            avatar: "avatar ai-avatar",
            bubble: "message-bubble ai-bubble",
            name: "SchemeGPT",
            initial: "S",
        },
    }
}

#[component]
pub fn MessageBubble(message: Message) -> Element {
    let style = sender_style(message.sender);
    let decorations = AiDecorations::for_message(&message);

    rsx! {
        div {
            class: style.row,

            div { class: style.avatar, "{style.initial}" }

            div {
                class: "message-content",

                div {
                    class: "message-header",
                    span { class: "sender-name", "{style.name}" }
                    span { class: "message-time", "{format_timestamp(message.timestamp)}" }
                }

                div { class: style.bubble, "{message.text}" }

                if !decorations.is_empty() {
                    ReplyMetadata { decorations: decorations.clone() }
                }
            }
        }
    }
}

/// Scheme badge, confidence bar and grouped citations under an AI reply.
#[component]
fn ReplyMetadata(decorations: AiDecorations) -> Element {
    rsx! {
        div {
            class: "ai-meta",
            if let Some(label) = decorations.scheme.clone() {
                span { class: "scheme-badge", "{label}" }
            }
            if let Some(bar) = decorations.confidence {
                ConfidenceMeter { bar }
            }
            if !decorations.sources.is_empty() {
                div {
                    class: "source-chips",
                    span { class: "source-heading", "Sources" }
                    for src in decorations.sources.iter() {
                        span {
                            key: "{src.name}",
                            class: "source-chip",
                            title: "{src.name}",
                            "{src.label()}"
                            span { class: "source-score", "{format_similarity(src.max_score)}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ConfidenceMeter(bar: ConfidenceBar) -> Element {
    rsx! {
        div {
            class: "confidence",
            span { "Confidence" }
            div {
                class: "confidence-track",
                div {
                    class: "confidence-fill confidence-{bar.tier.as_str()}",
                    style: "width: {bar.width_percent}%; background: {bar.tier.color()};",
                }
            }
            span { class: "confidence-value", "{bar.label()}" }
        }
    }
}

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            class: "message-row ai-row",
            div {
                class: "avatar ai-avatar",
                "S"
            }
            div {
                class: "message-content",
                div {
                    class: "message-header",
                    span { class: "sender-name", "SchemeGPT" }
                }
                div {
                    class: "typing-indicator",
                    aria_label: "SchemeGPT is typing",
                    span {}
                    span {}
                    span {}
                }
            }
        }
    }
}

fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chat_session::scheme_label;

    #[test]
    fn backend_status_labels_match_contract() {
        assert_eq!(BackendStatus::Checking.label(), "Connecting");
        assert_eq!(BackendStatus::Online.label(), "Online");
        assert_eq!(BackendStatus::Offline.label(), "Offline");
        assert!(BackendStatus::Offline.class().ends_with("status-offline"));
    }

    #[test]
    fn sender_styles_differ_by_side() {
        let user = sender_style(Sender::User);
        let ai = sender_style(Sender::Ai);
        assert_eq!(user.name, "You");
        assert_eq!(ai.name, "SchemeGPT");
        assert!(user.row.contains("user-row"));
        assert!(ai.bubble.contains("ai-bubble"));
    }

    #[test]
    fn suggestions_cover_every_known_scheme() {
        for key in ["pmjdy", "national scholarship", "ayushman", "pmay-g", "pmay-u", "mudra"] {
            assert!(
                SUGGESTED_QUESTIONS
                    .iter()
                    .any(|q| q.to_lowercase().contains(key)),
                "no suggestion mentions {key}"
            );
        }
        assert!(scheme_label(Some("mudra")).is_some());
    }
}
