//! API request and response types

use crate::chat::{Message, QuickReplyView, Turn, TurnOutcome};
use crate::state_machine::{ConversationState, Intent, QuickReply};
use serde::{Deserialize, Serialize};

/// Request to send free text
#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub text: String,
}

/// Request to press a quick-reply button
#[derive(Debug, Deserialize)]
pub struct QuickReplyRequest {
    pub option: QuickReply,
}

/// Response for a chat turn. `replied` is false for blank input, which
/// leaves the conversation unchanged.
#[derive(Debug, Serialize)]
pub struct TurnResponse {
    pub replied: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
    pub state: ConversationState,
    /// Messages appended by this turn, visitor first
    pub messages: Vec<Message>,
    pub quick_replies: Vec<QuickReplyView>,
}

impl TurnResponse {
    fn replied(turn: Turn) -> Self {
        Self {
            replied: true,
            intent: turn.intent,
            state: turn.state,
            messages: vec![turn.visitor, turn.assistant],
            quick_replies: QuickReplyView::for_state(turn.state),
        }
    }

    fn ignored(state: ConversationState) -> Self {
        Self {
            replied: false,
            intent: None,
            state,
            messages: Vec::new(),
            quick_replies: QuickReplyView::for_state(state),
        }
    }
}

impl From<TurnOutcome> for TurnResponse {
    fn from(outcome: TurnOutcome) -> Self {
        match outcome {
            TurnOutcome::Replied(turn) => Self::replied(turn),
            TurnOutcome::Ignored(state) => Self::ignored(state),
        }
    }
}

/// Response for health checks
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub chat_sessions: usize,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
