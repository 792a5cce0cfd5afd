//! Chat widget sessions
//!
//! One `ChatSession` per open widget: an append-only message log plus the
//! responder state. Nothing here outlives the process.

mod message;
mod session;

pub use message::{Message, Origin};
pub use session::{ChatSession, QuickReplyView, SessionSnapshot, Turn, TurnOutcome};
