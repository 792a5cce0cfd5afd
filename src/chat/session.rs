//! A single widget conversation

use super::{Message, Origin};
use crate::state_machine::{
    transition, ConversationState, Event, Intent, QuickReply, TransitionError, GREETING,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One completed exchange: the visitor's message and the reply to it
#[derive(Debug, Clone, Serialize)]
pub struct Turn {
    pub visitor: Message,
    pub assistant: Message,
    pub intent: Option<Intent>,
    pub state: ConversationState,
}

/// What one event did to a session
#[derive(Debug, Clone)]
pub enum TurnOutcome {
    Replied(Turn),
    /// Blank input. Carries the state the session was left in.
    Ignored(ConversationState),
}

/// Button as shown to the widget
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct QuickReplyView {
    pub option: QuickReply,
    pub label: &'static str,
}

impl QuickReplyView {
    /// Buttons offered in `state`: the full menu, or none
    pub fn for_state(state: ConversationState) -> Vec<QuickReplyView> {
        if state.offers_quick_replies() {
            QuickReply::ALL.into_iter().map(QuickReplyView::from).collect()
        } else {
            Vec::new()
        }
    }
}

impl From<QuickReply> for QuickReplyView {
    fn from(option: QuickReply) -> Self {
        Self {
            option,
            label: option.label(),
        }
    }
}

/// Read-only view of a session
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub id: String,
    pub state: ConversationState,
    pub messages: Vec<Message>,
    pub quick_replies: Vec<QuickReplyView>,
}

#[derive(Debug)]
pub struct ChatSession {
    id: String,
    state: ConversationState,
    messages: Vec<Message>,
    last_active: DateTime<Utc>,
}

impl ChatSession {
    /// New session at the menu, greeted by the assistant
    pub fn new(id: impl Into<String>) -> Self {
        let mut session = Self {
            id: id.into(),
            state: ConversationState::Menu,
            messages: Vec::new(),
            last_active: Utc::now(),
        };
        session.push(Origin::Assistant, GREETING.to_string());
        session
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> ConversationState {
        self.state
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last_active(&self) -> DateTime<Utc> {
        self.last_active
    }

    pub fn quick_replies(&self) -> Vec<QuickReplyView> {
        QuickReplyView::for_state(self.state)
    }

    /// Run one visitor turn.
    ///
    /// Blank text is ignored and leaves the session untouched. A
    /// rejected quick reply also leaves it untouched. Otherwise exactly one
    /// visitor message and one assistant message are appended, in that order.
    pub fn submit(&mut self, event: &Event) -> Result<TurnOutcome, TransitionError> {
        let result = match transition(self.state, event) {
            Ok(result) => result,
            Err(TransitionError::EmptyInput) => return Ok(TurnOutcome::Ignored(self.state)),
            Err(e) => return Err(e),
        };

        let visitor = self.push(Origin::Visitor, event.visitor_text().to_string());
        let assistant = self.push(Origin::Assistant, result.reply.to_string());
        self.state = result.new_state;

        Ok(TurnOutcome::Replied(Turn {
            visitor,
            assistant,
            intent: result.intent,
            state: result.new_state,
        }))
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            id: self.id.clone(),
            state: self.state(),
            messages: self.messages().to_vec(),
            quick_replies: self.quick_replies(),
        }
    }

    fn push(&mut self, origin: Origin, text: String) -> Message {
        let now = Utc::now();
        let message = Message {
            sequence_id: self.messages.len() as u64,
            origin,
            text,
            created_at: now,
        };
        self.messages.push(message.clone());
        self.last_active = now;
        message
    }
}
