//! Conversation state for one chat window.
//!
//! [`ChatSession`] owns the append-only transcript, the draft, and the two
//! shell flags (in flight, last dispatch failed). A dispatch is split in two
//! so UI code never holds the session across the network await:
//!
//! 1. [`ChatSession::begin_submit`] appends the user message and hands out a
//!    [`PendingQuestion`] ticket.
//! 2. [`ChatSession::complete`] consumes that ticket and appends the AI reply.

use shared_types::{AnswerResponse, Message};

use crate::error::DispatchError;
use crate::service::AnswerService;

/// AI message appended when a dispatch fails.
pub const FALLBACK_ANSWER_TEXT: &str =
    "Sorry, I couldn't reach the SchemeGPT server. Please try again.";

/// Banner shown after the most recent dispatch failed.
pub const ERROR_BANNER_TEXT: &str =
    "Unable to connect to the backend. Make sure the SchemeGPT API is running at the configured address.";

/// Ticket for the one outstanding request. Consumed by
/// [`ChatSession::complete`], so a dispatch can finish at most once.
#[derive(Debug, PartialEq, Eq)]
pub struct PendingQuestion {
    turn: u64,
    question: String,
}

impl PendingQuestion {
    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn turn(&self) -> u64 {
        self.turn
    }
}

#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    transcript: Vec<Message>,
    draft: String,
    /// Turn number of the outstanding request
    in_flight: Option<u64>,
    failed: bool,
    turns: u64,
    closed: bool,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Input capture
    // ------------------------------------------------------------------

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn can_submit(&self) -> bool {
        !self.closed && self.in_flight.is_none() && !self.draft.trim().is_empty()
    }

    // ------------------------------------------------------------------
    // Transcript
    // ------------------------------------------------------------------

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn len(&self) -> usize {
        self.transcript.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transcript.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.transcript.last()
    }

    // ------------------------------------------------------------------
    // Shell flags
    // ------------------------------------------------------------------

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn error_banner(&self) -> Option<&'static str> {
        self.failed.then_some(ERROR_BANNER_TEXT)
    }

    pub fn show_empty_state(&self) -> bool {
        self.transcript.is_empty()
    }

    // ------------------------------------------------------------------
    // Dispatch
    // ------------------------------------------------------------------

    /// Start a turn: append the trimmed draft as a user message, clear the
    /// draft and the banner, and mark the session in flight.
    ///
    /// Returns `None` (and changes nothing) if the draft is blank, a request
    /// is already outstanding, or the session was closed.
    pub fn begin_submit(&mut self) -> Option<PendingQuestion> {
        if !self.can_submit() {
            return None;
        }

        let question = self.draft.trim().to_string();
        self.turns += 1;
        let turn = self.turns;

        self.transcript
            .push(Message::user(format!("user-{turn}"), question.clone()));
        self.draft.clear();
        self.failed = false;
        self.in_flight = Some(turn);

        tracing::debug!(turn, "dispatching question");
        Some(PendingQuestion { turn, question })
    }

    /// Finish a turn with the service outcome and append exactly one AI
    /// message.
    ///
    /// A ticket that does not match the outstanding request, or any
    /// completion after [`ChatSession::close`], is discarded and `None` is
    /// returned.
    pub fn complete(
        &mut self,
        ticket: PendingQuestion,
        outcome: Result<AnswerResponse, DispatchError>,
    ) -> Option<&Message> {
        if self.closed {
            tracing::debug!(turn = ticket.turn, "discarding reply for closed session");
            return None;
        }
        if self.in_flight != Some(ticket.turn) {
            tracing::warn!(turn = ticket.turn, "discarding reply for unknown turn");
            return None;
        }

        let id = format!("ai-{}", ticket.turn);
        let message = match outcome {
            Ok(response) => Message::from_answer(id, response),
            Err(_) => {
                self.failed = true;
                Message::ai(id, FALLBACK_ANSWER_TEXT)
            }
        };

        self.transcript.push(message);
        self.in_flight = None;
        self.transcript.last()
    }

    /// Run a whole turn against `service`. Returns whether a turn ran.
    pub async fn submit<S: AnswerService + ?Sized>(&mut self, service: &S) -> bool {
        let Some(ticket) = self.begin_submit() else {
            return false;
        };
        let (ticket, outcome) = ask(service, ticket).await;
        self.complete(ticket, outcome);
        true
    }

    // ------------------------------------------------------------------
    // Teardown
    // ------------------------------------------------------------------

    /// Mark the session torn down. Later completions are dropped.
    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

/// The network leg of a turn, the only await point in a dispatch.
pub async fn ask<S: AnswerService + ?Sized>(
    service: &S,
    ticket: PendingQuestion,
) -> (PendingQuestion, Result<AnswerResponse, DispatchError>) {
    let outcome = service.ask(&ticket.question).await;
    match &outcome {
        Ok(resp) => tracing::debug!(
            turn = ticket.turn,
            sources = resp.sources.len(),
            "answer received"
        ),
        Err(e) => tracing::warn!(turn = ticket.turn, "dispatch failed: {e}"),
    }
    (ticket, outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{Sender, SourceRef, NO_ANSWER_TEXT};

    fn answer(text: &str) -> AnswerResponse {
        AnswerResponse {
            answer: text.to_string(),
            ..AnswerResponse::default()
        }
    }

    #[test]
    fn blank_draft_is_a_noop() {
        let mut session = ChatSession::new();
        session.set_draft("   \n\t ");
        assert!(session.begin_submit().is_none());
        assert!(session.is_empty());
        assert!(!session.is_in_flight());
        assert_eq!(session.draft(), "   \n\t ");
    }

    #[test]
    fn begin_submit_appends_trimmed_user_message() {
        let mut session = ChatSession::new();
        session.set_draft("  What is PMJDY?  ");
        let ticket = session.begin_submit().expect("ticket");

        assert_eq!(ticket.question(), "What is PMJDY?");
        assert_eq!(session.len(), 1);
        assert_eq!(session.transcript()[0].sender, Sender::User);
        assert_eq!(session.transcript()[0].text, "What is PMJDY?");
        assert_eq!(session.draft(), "");
        assert!(session.is_in_flight());
        assert!(!session.show_empty_state());
    }

    #[test]
    fn second_submit_rejected_while_in_flight() {
        let mut session = ChatSession::new();
        session.set_draft("first");
        let ticket = session.begin_submit().expect("ticket");

        session.set_draft("second");
        assert!(session.begin_submit().is_none());
        assert_eq!(session.len(), 1);
        assert_eq!(session.draft(), "second");

        session.complete(ticket, Ok(answer("done")));
        assert!(session.begin_submit().is_some());
    }

    #[test]
    fn success_maps_reply_fields() {
        let mut session = ChatSession::new();
        session.set_draft("Tell me about MUDRA");
        let ticket = session.begin_submit().unwrap();

        let reply = AnswerResponse {
            question: "Tell me about MUDRA".to_string(),
            answer: "MUDRA offers loans up to 10 lakh.".to_string(),
            sources: vec![SourceRef::new("mudra.pdf", 0.71)],
            detected_scheme: Some("mudra".to_string()),
            confidence: Some(0.66),
        };
        let msg = session.complete(ticket, Ok(reply)).expect("appended").clone();

        assert_eq!(msg.sender, Sender::Ai);
        assert_eq!(msg.text, "MUDRA offers loans up to 10 lakh.");
        assert_eq!(msg.sources.len(), 1);
        assert_eq!(msg.detected_scheme.as_deref(), Some("mudra"));
        assert_eq!(msg.confidence, Some(0.66));
        assert!(!session.is_in_flight());
        assert!(session.error_banner().is_none());
    }

    #[test]
    fn empty_answer_gets_default_text() {
        let mut session = ChatSession::new();
        session.set_draft("hello");
        let ticket = session.begin_submit().unwrap();
        let msg = session.complete(ticket, Ok(answer("   "))).unwrap();
        assert_eq!(msg.text, NO_ANSWER_TEXT);
    }

    #[test]
    fn failure_appends_fallback_and_raises_banner() {
        let mut session = ChatSession::new();
        session.set_draft("What is PMJDY?");
        let ticket = session.begin_submit().unwrap();
        let msg = session
            .complete(
                ticket,
                Err(DispatchError::Transport("connection refused".to_string())),
            )
            .unwrap()
            .clone();

        assert_eq!(msg.text, FALLBACK_ANSWER_TEXT);
        assert!(msg.sources.is_empty());
        assert_eq!(msg.detected_scheme, None);
        assert_eq!(msg.confidence, None);
        assert_eq!(session.error_banner(), Some(ERROR_BANNER_TEXT));
        assert!(!session.is_in_flight());
    }

    #[test]
    fn banner_clears_when_next_dispatch_starts() {
        let mut session = ChatSession::new();
        session.set_draft("one");
        let ticket = session.begin_submit().unwrap();
        session.complete(
            ticket,
            Err(DispatchError::Status {
                status: 502,
                detail: String::new(),
            }),
        );
        assert!(session.error_banner().is_some());

        session.set_draft("two");
        let _ticket = session.begin_submit().unwrap();
        assert!(session.error_banner().is_none());
    }

    #[test]
    fn stale_ticket_is_discarded() {
        let mut session = ChatSession::new();
        session.set_draft("one");
        let ticket = session.begin_submit().unwrap();
        let forged = PendingQuestion {
            turn: ticket.turn() + 7,
            question: "one".to_string(),
        };

        assert!(session.complete(forged, Ok(answer("x"))).is_none());
        assert_eq!(session.len(), 1);
        assert!(session.is_in_flight());

        assert!(session.complete(ticket, Ok(answer("y"))).is_some());
        assert_eq!(session.len(), 2);
    }

    #[test]
    fn completion_after_close_is_dropped() {
        let mut session = ChatSession::new();
        session.set_draft("question");
        let ticket = session.begin_submit().unwrap();
        session.close();

        assert!(session.complete(ticket, Ok(answer("late"))).is_none());
        assert_eq!(session.len(), 1);

        session.set_draft("another");
        assert!(session.begin_submit().is_none());
    }

    #[test]
    fn message_ids_are_unique_per_turn() {
        let mut session = ChatSession::new();
        for q in ["a", "b"] {
            session.set_draft(q);
            let ticket = session.begin_submit().unwrap();
            session.complete(ticket, Ok(answer("ok")));
        }
        let ids: Vec<&str> = session.transcript().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["user-1", "ai-1", "user-2", "ai-2"]);
    }
}
