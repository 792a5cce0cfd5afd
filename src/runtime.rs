//! In-memory registry of chat sessions
//!
//! Sessions live only as long as the process. The registry is bounded:
//! idle sessions expire and, at capacity, the least recently active
//! session makes room for a new one.

use crate::chat::{ChatSession, SessionSnapshot, TurnOutcome};
use crate::state_machine::{Event, Intent, TransitionError};
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::RwLock;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Chat session not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Transition(#[from] TransitionError),
}

/// Manager for all chat sessions
pub struct SessionManager {
    sessions: RwLock<HashMap<String, ChatSession>>,
    max_sessions: usize,
    idle_timeout: Duration,
}

impl SessionManager {
    pub fn new(max_sessions: usize, idle_timeout: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            max_sessions: max_sessions.max(1),
            idle_timeout,
        }
    }

    /// Open a new session and return its initial view
    pub async fn create(&self) -> SessionSnapshot {
        let id = uuid::Uuid::new_v4().to_string();
        let session = ChatSession::new(id.clone());
        let snapshot = session.snapshot();

        let mut sessions = self.sessions.write().await;
        self.make_room(&mut sessions, Utc::now());
        sessions.insert(id.clone(), session);

        tracing::info!(session_id = %id, active = sessions.len(), "Chat session opened");
        snapshot
    }

    pub async fn snapshot(&self, id: &str) -> Result<SessionSnapshot, SessionError> {
        let sessions = self.sessions.read().await;
        sessions
            .get(id)
            .map(ChatSession::snapshot)
            .ok_or_else(|| SessionError::NotFound(id.to_string()))
    }

    /// Run one visitor turn. The write lock serialises turns per registry,
    /// so a reply is always logged before the next input is read.
    pub async fn submit(&self, id: &str, event: &Event) -> Result<TurnOutcome, SessionError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(id)
            .ok_or_else(|| SessionError::NotFound(id.to_string()))?;

        let outcome = session.submit(event)?;
        match &outcome {
            TurnOutcome::Replied(turn) => tracing::info!(
                session_id = %id,
                intent = turn.intent.map_or("lead_details", Intent::as_str),
                state = %turn.state,
                "Chat turn"
            ),
            TurnOutcome::Ignored(_) => {
                tracing::debug!(session_id = %id, "Ignoring blank chat input");
            }
        }
        Ok(outcome)
    }

    pub async fn active_sessions(&self) -> usize {
        self.sessions.read().await.len()
    }

    fn make_room(&self, sessions: &mut HashMap<String, ChatSession>, now: DateTime<Utc>) {
        // A timeout reaching past the earliest representable time expires nothing
        if let Some(cutoff) = now.checked_sub_signed(self.idle_timeout) {
            let before = sessions.len();
            sessions.retain(|_, session| session.last_active() > cutoff);
            let expired = before - sessions.len();
            if expired > 0 {
                tracing::debug!(expired, "Expired idle chat sessions");
            }
        }

        while sessions.len() >= self.max_sessions {
            let Some(oldest) = sessions
                .values()
                .min_by_key(|session| session.last_active())
                .map(|session| session.id().to_string())
            else {
                break;
            };
            sessions.remove(&oldest);
            tracing::debug!(session_id = %oldest, "Evicted chat session at capacity");
        }
    }
}
