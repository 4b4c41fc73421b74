//! The message lifecycle state machine.
//!
//! One in-flight request at a time, the typing indicator paired around every
//! transport call, and every failure recovered at this boundary into a fixed
//! apology bubble. The widget stays usable after any outcome.

use std::cell::Cell;
use std::rc::Rc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::TransportError;
use crate::render::{ViewNode, render};
use crate::session::{FirstOpenMarker, SessionStore};
use crate::suggest::suggest;
use crate::types::{ChatExchange, ChatMessage, REPLY_FALLBACK_TEXT, ReplyEnvelope};
use crate::typing::TypingIndicator;

/// Sends one user turn to the assistant endpoint.
#[async_trait(?Send)]
pub trait ChatTransport {
    async fn send(&self, message: &str, session_id: &str)
    -> Result<ChatExchange, TransportError>;
}

#[async_trait(?Send)]
impl<T: ChatTransport> ChatTransport for Rc<T> {
    async fn send(
        &self,
        message: &str,
        session_id: &str,
    ) -> Result<ChatExchange, TransportError> {
        (**self).send(message, session_id).await
    }
}

/// The view slots the controller writes through: message log, quick-reply
/// chip row, and the input field. Keeps orchestration testable without a DOM.
pub trait ViewPorts {
    fn append_message(&self, message: ChatMessage);
    fn append_reply(&self, nodes: Vec<ViewNode>);
    fn set_chips(&self, chips: Vec<String>);
    fn clear_input(&self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Sending,
}

/// What became of a submit attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Submission {
    /// The turn went through the full round trip.
    Sent,
    /// Trimmed input was empty; nothing happened.
    Empty,
    /// A request was already in flight; the attempt was dropped.
    Busy,
}

pub struct ChatController<T> {
    transport: T,
    session: SessionStore,
    first_open: FirstOpenMarker,
    typing: TypingIndicator,
    phase: Cell<Phase>,
}

impl<T: ChatTransport> ChatController<T> {
    pub fn new(
        transport: T,
        session: SessionStore,
        first_open: FirstOpenMarker,
        typing: TypingIndicator,
    ) -> Self {
        Self {
            transport,
            session,
            first_open,
            typing,
            phase: Cell::new(Phase::Idle),
        }
    }

    /// Chips for first paint, before any reply has been seen.
    pub fn initial_chips(&self) -> Vec<String> {
        suggest(None)
    }

    /// Whether the first-open greeting has not fired in this browsing session.
    pub fn greeting_pending(&self) -> bool {
        self.first_open.pending()
    }

    /// Handles a user submit: echoes the user bubble, clears the input, and
    /// runs the round trip. Blank input and overlapping sends are ignored.
    pub async fn submit(&self, text: &str, ports: &dyn ViewPorts) -> Submission {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Submission::Empty;
        }
        if self.phase.get() == Phase::Sending {
            debug!("submit ignored, a request is already in flight");
            return Submission::Busy;
        }
        let message = trimmed.to_string();
        self.phase.set(Phase::Sending);
        ports.append_message(ChatMessage::user(message.clone()));
        ports.clear_input();
        self.round_trip(&message, ports).await;
        self.phase.set(Phase::Idle);
        Submission::Sent
    }

    /// One synthetic send of `trigger` the first time the widget opens in a
    /// browsing-session lifetime. No user bubble, no input clearing. Returns
    /// whether the greeting actually fired.
    pub async fn greet_on_first_open(&self, trigger: &str, ports: &dyn ViewPorts) -> bool {
        if self.phase.get() == Phase::Sending || !self.first_open.consume() {
            return false;
        }
        self.phase.set(Phase::Sending);
        self.round_trip(trigger, ports).await;
        self.phase.set(Phase::Idle);
        true
    }

    async fn round_trip(&self, message: &str, ports: &dyn ViewPorts) {
        let session_id = self.session.get_or_create();
        debug!(session = %session_id, "sending chat message");
        self.typing.show();
        let outcome = self.transport.send(message, &session_id).await;
        self.typing.hide();
        let envelope = match outcome {
            Ok(exchange) => {
                if let Some(id) = exchange.session_id.as_deref() {
                    self.session.adopt(id);
                }
                exchange.reply
            }
            Err(error) => {
                warn!(%error, "chat round trip failed");
                ReplyEnvelope::text(REPLY_FALLBACK_TEXT)
            }
        };
        ports.append_reply(render(&envelope));
        ports.set_chips(suggest(Some(&envelope)));
    }
}
