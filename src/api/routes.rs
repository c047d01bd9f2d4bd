use axum::{routing::get, Router};
use std::sync::Arc;

use crate::api::{catalog_handlers, handlers};
use crate::store::traits::SiteStore;

pub fn create_router<S: SiteStore + 'static>() -> Router<Arc<S>> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Pages
        .route("/", get(handlers::home_page::<S>))
        .route("/lessons/*rest", get(handlers::lesson_page::<S>))
        // JSON views of the catalog
        .route("/api/catalog", get(catalog_handlers::get_catalog::<S>))
        .route(
            "/api/navigation",
            get(catalog_handlers::get_navigation::<S>),
        )
        .route("/api/meta", get(catalog_handlers::get_page_meta::<S>))
        .fallback(handlers::not_found::<S>)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StaticStore;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn app() -> Router {
        let store = Arc::new(StaticStore::builtin("PostgreSQL & Prisma").unwrap());
        create_router().with_state(store)
    }

    async fn get(uri: &str) -> (StatusCode, String) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_lesson_page_highlights_itself() {
        let (status, html) = get("/lessons/joins").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("<title>JOINs - PostgreSQL Learning</title>"));
        assert_eq!(html.matches(r#"aria-current="page""#).count(), 1);

        let marker = html.find(r#"aria-current="page""#).unwrap();
        let tag_start = html[..marker].rfind("<a").unwrap();
        assert!(html[tag_start..marker].contains(r#"href="/lessons/joins""#));
    }

    #[tokio::test]
    async fn test_same_id_in_other_phase_is_a_different_page() {
        let (status, html) = get("/lessons/practical-queries/joins").await;
        assert_eq!(status, StatusCode::OK);
        let marker = html.find(r#"aria-current="page""#).unwrap();
        let tag_start = html[..marker].rfind("<a").unwrap();
        assert!(html[tag_start..marker].contains(r#"href="/lessons/practical-queries/joins""#));
    }

    #[tokio::test]
    async fn test_unknown_paths_render_not_found() {
        for uri in [
            "/lessons/nope",
            "/lessons/joins/",
            "/nonexistent-path",
            "/lessons",
        ] {
            let (status, html) = get(uri).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
            assert!(html.contains("Page not found"));
            assert!(!html.contains("aria-current"));
        }
    }

    #[tokio::test]
    async fn test_home_page() {
        let (status, html) = get("/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Phase 6: DQL (Data Query Language) - SELECT"));
        assert!(!html.contains("aria-current"));
    }

    #[tokio::test]
    async fn test_navigation_api() {
        let (status, body) = get("/api/navigation?current=/lessons/insert").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        let active: Vec<&str> = json["sections"]
            .as_array()
            .unwrap()
            .iter()
            .flat_map(|s| s["links"].as_array().unwrap())
            .filter(|l| l["active"] == true)
            .map(|l| l["path"].as_str().unwrap())
            .collect();
        assert_eq!(active, vec!["/lessons/insert"]);

        let (_, body) = get("/api/navigation").await;
        assert!(!body.contains(r#""active":true"#));
    }

    #[tokio::test]
    async fn test_meta_api() {
        let (status, body) = get("/api/meta?path=/lessons/alter-table").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["title"], "ALTER TABLE - PostgreSQL Learning");
        assert_eq!(
            json["description"],
            "Learn about altering tables: adding, renaming and dropping columns, changing types and managing constraints in PostgreSQL and Prisma."
        );

        let (status, body) = get("/api/meta?path=/lessons/missing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("/lessons/missing"));
    }

    #[tokio::test]
    async fn test_catalog_api_and_health() {
        let (status, body) = get("/api/catalog").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json[0]["lessons"][0]["path"], "/lessons/what-is-postgresql");

        let (status, body) = get("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("healthy"));
    }
}
