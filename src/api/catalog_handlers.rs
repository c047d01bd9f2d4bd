use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;

use crate::api::handlers::{AppState, ErrorResponse};
use crate::logic::navigation::build_sidebar;
use crate::model::{Catalog, PageMeta};
use crate::render::HOME_META;
use crate::store::traits::SiteStore;

#[derive(Debug, Deserialize)]
pub struct NavigationQuery {
    /// Path to highlight; omitted means no lesson is active
    pub current: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MetaQuery {
    pub path: String,
}

pub async fn get_catalog<S: SiteStore>(State(store): State<AppState<S>>) -> Json<Catalog> {
    Json(store.catalog().clone())
}

pub async fn get_navigation<S: SiteStore>(
    State(store): State<AppState<S>>,
    Query(query): Query<NavigationQuery>,
) -> Response {
    let current = query.current.unwrap_or_default();
    Json(build_sidebar(store.catalog().phases(), &current)).into_response()
}

pub async fn get_page_meta<S: SiteStore>(
    State(store): State<AppState<S>>,
    Query(query): Query<MetaQuery>,
) -> Result<Json<PageMeta>, (StatusCode, Json<ErrorResponse>)> {
    if query.path == "/" {
        return Ok(Json(HOME_META));
    }

    match store.page(&query.path) {
        Some(page) => Ok(Json(page.meta())),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(&format!(
                "No lesson registered at '{}'",
                query.path
            ))),
        )),
    }
}
