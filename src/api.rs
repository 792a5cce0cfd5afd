//! HTTP surface: pages, static assets, chat and inquiry endpoints

mod assets;
mod handlers;
mod types;

pub use handlers::create_router;

use crate::inquiry::InquirySink;
use crate::runtime::SessionManager;
use std::path::PathBuf;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionManager>,
    pub inquiries: Arc<dyn InquirySink>,
    /// Filesystem fallback for assets not embedded in the binary
    pub assets_dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(
        sessions: SessionManager,
        inquiries: Arc<dyn InquirySink>,
        assets_dir: PathBuf,
    ) -> Self {
        Self {
            sessions: Arc::new(sessions),
            inquiries,
            assets_dir: Arc::new(assets_dir),
        }
    }
}
