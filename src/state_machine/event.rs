//! Visitor input that drives the conversation

use super::Intent;
use serde::{Deserialize, Serialize};

/// Events that trigger state transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Free text typed into the widget
    VisitorText { text: String },

    /// A menu button; dispatches its intent directly
    QuickReply { option: QuickReply },
}

impl Event {
    pub fn text(text: impl Into<String>) -> Self {
        Event::VisitorText { text: text.into() }
    }

    /// What the visitor's turn looks like in the message log
    pub fn visitor_text(&self) -> &str {
        match self {
            Event::VisitorText { text } => text,
            Event::QuickReply { option } => option.label(),
        }
    }
}

impl From<QuickReply> for Event {
    fn from(option: QuickReply) -> Self {
        Event::QuickReply { option }
    }
}

/// The fixed menu of buttons shown while the conversation is at the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickReply {
    Products,
    Quote,
    Distributor,
    BulkOrder,
    Contact,
}

impl QuickReply {
    /// Display order in the widget
    pub const ALL: [QuickReply; 5] = [
        QuickReply::Products,
        QuickReply::Quote,
        QuickReply::Distributor,
        QuickReply::BulkOrder,
        QuickReply::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            QuickReply::Products => "View Products",
            QuickReply::Quote => "Get Quote",
            QuickReply::Distributor => "Distributor",
            QuickReply::BulkOrder => "Bulk Order",
            QuickReply::Contact => "Contact Support",
        }
    }

    pub fn intent(self) -> Intent {
        match self {
            QuickReply::Products => Intent::Products,
            QuickReply::Quote => Intent::Quote,
            QuickReply::Distributor => Intent::Distributor,
            QuickReply::BulkOrder => Intent::BulkOrder,
            QuickReply::Contact => Intent::Contact,
        }
    }
}
