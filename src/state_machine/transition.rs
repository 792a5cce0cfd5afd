//! Pure state transition function

use super::replies::DETAILS_ACKNOWLEDGED;
use super::{classify, ConversationState, Event, Intent};
use thiserror::Error;

/// Result of a state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    pub new_state: ConversationState,
    /// `None` when the input was taken as lead details
    pub intent: Option<Intent>,
    pub reply: &'static str,
}

impl TransitionResult {
    fn for_intent(intent: Intent) -> Self {
        let new_state = if intent.captures_lead() {
            ConversationState::AwaitingDetails
        } else {
            ConversationState::Menu
        };
        Self {
            new_state,
            intent: Some(intent),
            reply: intent.reply(),
        }
    }

    fn details_received() -> Self {
        Self {
            new_state: ConversationState::Menu,
            intent: None,
            reply: DETAILS_ACKNOWLEDGED,
        }
    }
}

/// Inputs the responder does not answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// Blank input is ignored: no reply, no state change
    #[error("Message is empty")]
    EmptyInput,
    #[error("Quick replies are only available from the menu")]
    QuickReplyUnavailable,
}

/// Pure transition function
///
/// Lead details are accepted as-is; nothing about their content is checked.
pub fn transition(
    state: ConversationState,
    event: &Event,
) -> Result<TransitionResult, TransitionError> {
    match (state, event) {
        (_, Event::VisitorText { text }) if text.trim().is_empty() => {
            Err(TransitionError::EmptyInput)
        }

        (ConversationState::AwaitingDetails, Event::VisitorText { .. }) => {
            Ok(TransitionResult::details_received())
        }

        (ConversationState::AwaitingDetails, Event::QuickReply { .. }) => {
            Err(TransitionError::QuickReplyUnavailable)
        }

        (ConversationState::Menu, Event::VisitorText { text }) => {
            Ok(TransitionResult::for_intent(classify(text)))
        }

        // Buttons bypass keyword matching
        (ConversationState::Menu, Event::QuickReply { option }) => {
            Ok(TransitionResult::for_intent(option.intent()))
        }
    }
}
