//! Chat log entries

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Who wrote a message
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    Assistant,
    Visitor,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Assistant => write!(f, "assistant"),
            Origin::Visitor => write!(f, "visitor"),
        }
    }
}

/// A single chat message. Never mutated once logged.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Message {
    /// Position in the session log, starting at 0 for the greeting
    pub sequence_id: u64,
    pub origin: Origin,
    pub text: String,
    pub created_at: DateTime<Utc>,
}
