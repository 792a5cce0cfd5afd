//! Embedded static assets
//!
//! Falls back to the configured assets directory for files that were not
//! embedded at build time.

use super::AppState;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::Embed;
use std::path::Component;

#[derive(Embed)]
#[folder = "assets"]
struct Assets;

fn with_mime(path: &str, body: Vec<u8>) -> Response {
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    ([(header::CONTENT_TYPE, mime.as_ref().to_string())], body).into_response()
}

/// Serve embedded static files, with filesystem fallback for development
pub async fn serve_static(State(state): State<AppState>, Path(path): Path<String>) -> Response {
    if let Some(content) = Assets::get(&path) {
        return with_mime(&path, content.data.into_owned());
    }

    let relative = std::path::Path::new(&path);
    let stays_inside = relative
        .components()
        .all(|c| matches!(c, Component::Normal(_)));
    if stays_inside {
        if let Ok(content) = tokio::fs::read(state.assets_dir.join(relative)).await {
            return with_mime(&path, content);
        }
    }

    (StatusCode::NOT_FOUND, "Not found").into_response()
}
