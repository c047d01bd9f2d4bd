use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Json, Response},
};
use maud::Markup;
use serde::Serialize;
use std::sync::Arc;

use crate::render;
use crate::store::traits::SiteStore;

pub type AppState<S> = Arc<S>;

/// Simple health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}

pub async fn home_page<S: SiteStore>(State(store): State<AppState<S>>) -> Markup {
    render::home_document(store.site_title(), store.catalog())
}

// The request path is the current route; only exact matches resolve to a lesson
pub async fn lesson_page<S: SiteStore>(State(store): State<AppState<S>>, uri: Uri) -> Response {
    let path = uri.path();
    match store.page(path) {
        Some(page) => {
            log::debug!("Rendering lesson {}", path);
            render::lesson_document(store.site_title(), store.catalog(), page).into_response()
        }
        None => not_found_response(&*store, path),
    }
}

pub async fn not_found<S: SiteStore>(State(store): State<AppState<S>>, uri: Uri) -> Response {
    not_found_response(&*store, uri.path())
}

fn not_found_response<S: SiteStore>(store: &S, path: &str) -> Response {
    log::info!("No page registered for {}", path);
    (
        StatusCode::NOT_FOUND,
        render::not_found_document(store.site_title(), store.catalog(), path),
    )
        .into_response()
}
