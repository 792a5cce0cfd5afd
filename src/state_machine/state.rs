//! Conversation state types

use serde::{Deserialize, Serialize};

/// Governs how the next visitor input is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationState {
    /// Free text is classified into an intent; quick replies are offered
    #[default]
    Menu,

    /// A lead-capture prompt was shown; the next input is taken as the
    /// visitor's contact details
    AwaitingDetails,
}

impl ConversationState {
    pub fn as_str(self) -> &'static str {
        match self {
            ConversationState::Menu => "menu",
            ConversationState::AwaitingDetails => "awaiting_details",
        }
    }

    /// Quick-reply buttons are only shown from the menu
    pub fn offers_quick_replies(self) -> bool {
        matches!(self, ConversationState::Menu)
    }
}

impl std::fmt::Display for ConversationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
