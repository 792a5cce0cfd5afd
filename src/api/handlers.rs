//! HTTP request handlers

use super::assets::serve_static;
use super::types::{
    ErrorResponse, HealthResponse, QuickReplyRequest, SendMessageRequest, TurnResponse,
};
use super::AppState;
use crate::chat::SessionSnapshot;
use crate::inquiry::{ContactInquiry, InquiryError, InquiryReceipt};
use crate::runtime::SessionError;
use crate::site::{content, render_landing, render_legal};
use crate::state_machine::{Event, TransitionError};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Pages
        .route("/", get(landing_page))
        .route(content::PRIVACY_POLICY.path, get(privacy_page))
        .route(content::TERMS_OF_SERVICE.path, get(terms_page))
        // Static assets (embedded or filesystem fallback)
        .route("/assets/*path", get(serve_static))
        // Chat widget
        .route("/api/chat/sessions", post(create_session))
        .route("/api/chat/sessions/:id", get(get_session))
        .route("/api/chat/sessions/:id/messages", post(send_message))
        .route("/api/chat/sessions/:id/quick-reply", post(send_quick_reply))
        // Contact form
        .route("/api/inquiries", post(submit_inquiry))
        // Operations
        .route("/health", get(health))
        .route("/version", get(get_version))
        .with_state(state)
}

// ============================================================
// Pages
// ============================================================

async fn landing_page() -> Html<String> {
    Html(render_landing())
}

async fn privacy_page() -> Html<String> {
    Html(render_legal(&content::PRIVACY_POLICY))
}

async fn terms_page() -> Html<String> {
    Html(render_legal(&content::TERMS_OF_SERVICE))
}

// ============================================================
// Chat
// ============================================================

async fn create_session(State(state): State<AppState>) -> (StatusCode, Json<SessionSnapshot>) {
    (StatusCode::CREATED, Json(state.sessions.create().await))
}

async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionSnapshot>, AppError> {
    Ok(Json(state.sessions.snapshot(&id).await?))
}

async fn send_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<SendMessageRequest>,
) -> Result<Json<TurnResponse>, AppError> {
    run_turn(&state, &id, Event::text(req.text)).await
}

async fn send_quick_reply(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<QuickReplyRequest>,
) -> Result<Json<TurnResponse>, AppError> {
    run_turn(&state, &id, req.option.into()).await
}

async fn run_turn(state: &AppState, id: &str, event: Event) -> Result<Json<TurnResponse>, AppError> {
    let outcome = state.sessions.submit(id, &event).await?;
    Ok(Json(TurnResponse::from(outcome)))
}

// ============================================================
// Contact Form
// ============================================================

async fn submit_inquiry(
    State(state): State<AppState>,
    Json(inquiry): Json<ContactInquiry>,
) -> Result<Json<InquiryReceipt>, AppError> {
    inquiry.validate()?;
    let receipt = state.inquiries.submit_inquiry(&inquiry).await?;
    Ok(Json(receipt))
}

// ============================================================
// Operations
// ============================================================

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        chat_sessions: state.sessions.active_sessions().await,
    })
}

async fn get_version() -> &'static str {
    concat!("virma-site ", env!("CARGO_PKG_VERSION"))
}

// ============================================================
// Error Handling
// ============================================================

#[derive(Debug)]
enum AppError {
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    BadGateway(String),
}

impl From<SessionError> for AppError {
    fn from(e: SessionError) -> Self {
        match e {
            SessionError::NotFound(_) => AppError::NotFound(e.to_string()),
            SessionError::Transition(TransitionError::QuickReplyUnavailable) => {
                AppError::Conflict(e.to_string())
            }
            SessionError::Transition(TransitionError::EmptyInput) => {
                AppError::BadRequest(e.to_string())
            }
        }
    }
}

impl From<InquiryError> for AppError {
    fn from(e: InquiryError) -> Self {
        if e.is_invalid_input() {
            AppError::BadRequest(e.to_string())
        } else {
            AppError::BadGateway(e.to_string())
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            AppError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, msg),
        };

        if status.is_server_error() {
            tracing::warn!(status = %status, error = %message, "Request failed");
        }

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}
