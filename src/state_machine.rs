//! Chat widget conversation responder
//!
//! A keyword classifier feeding a two-state machine. Transitions are pure:
//! the same state and event always produce the same reply.

pub mod event;
pub mod intent;
mod replies;
pub mod state;
pub(crate) mod transition;

#[cfg(test)]
mod proptests;

pub use event::{Event, QuickReply};
pub use intent::{classify, Intent};
pub use replies::{DETAILS_ACKNOWLEDGED, GREETING};
pub use state::ConversationState;
pub use transition::{transition, TransitionError, TransitionResult};
