//! Render every page through the router and write a static copy of the site.

use anyhow::{bail, Context, Result};
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use pg_learn::config::AppConfig;
use pg_learn::{build_app, build_store, SiteStore};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tower::ServiceExt;

/// Path of a page inside the output directory: `/` becomes `index.html`,
/// `/lessons/joins` becomes `lessons/joins/index.html`
fn output_file(out_dir: &Path, route: &str) -> PathBuf {
    let relative = route.trim_start_matches('/');
    if relative.is_empty() {
        out_dir.join("index.html")
    } else {
        out_dir.join(relative).join("index.html")
    }
}

async fn fetch(app: &Router, route: &str) -> Result<(StatusCode, Vec<u8>)> {
    let request = Request::builder().uri(route).body(Body::empty())?;
    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .with_context(|| format!("Failed to read body of {}", route))?;
    Ok((status, body.to_vec()))
}

fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}

fn copy_static(from: &Path, to: &Path) -> Result<usize> {
    if !from.is_dir() {
        log::warn!("Static directory {} not found, skipping", from.display());
        return Ok(0);
    }

    let mut copied = 0;
    for entry in std::fs::read_dir(from)? {
        let entry = entry?;
        let target = to.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copied += copy_static(&entry.path(), &target)?;
        } else {
            std::fs::create_dir_all(to)?;
            std::fs::copy(entry.path(), &target)
                .with_context(|| format!("Failed to copy {}", entry.path().display()))?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// What an export produced
#[derive(Debug, PartialEq, Eq)]
struct ExportSummary {
    pages: usize,
    static_files: usize,
}

/// Render `routes` through `app` into `out_dir`, then add `404.html` and a copy
/// of `static_dir`. Stops at the first route that does not render successfully.
async fn export_site(
    app: &Router,
    routes: &[String],
    out_dir: &Path,
    static_dir: &Path,
) -> Result<ExportSummary> {
    for route in routes {
        let (status, body) = fetch(app, route).await?;
        if !status.is_success() {
            bail!("Rendering {} returned {}", route, status);
        }
        let path = output_file(out_dir, route);
        write_file(&path, &body)?;
        log::info!("Wrote {} -> {}", route, path.display());
    }

    // Any unregistered path renders the not-found page
    let (_, not_found) = fetch(app, "/404").await?;
    write_file(&out_dir.join("404.html"), &not_found)?;

    let static_files = copy_static(static_dir, &out_dir.join("static"))?;

    Ok(ExportSummary {
        pages: routes.len(),
        static_files,
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::load()?;
    let out_dir = PathBuf::from(&config.export.out_dir);

    let store = Arc::new(build_store(&config)?);
    let mut routes = vec!["/".to_string()];
    routes.extend(store.catalog().lessons().map(|lesson| lesson.path.clone()));

    let app = build_app(store, &config.site.static_dir);
    let static_dir = Path::new(&config.site.static_dir);
    let summary = export_site(&app, &routes, &out_dir, static_dir).await?;

    log::info!(
        "Exported {} pages and {} static files to {}",
        summary.pages,
        summary.static_files,
        out_dir.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pg_learn::StaticStore;
    use tempfile::TempDir;

    const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

    fn builtin() -> (Router, Vec<String>) {
        let store = Arc::new(StaticStore::builtin("PostgreSQL & Prisma").unwrap());
        let mut routes = vec!["/".to_string()];
        routes.extend(store.catalog().lessons().map(|lesson| lesson.path.clone()));
        (build_app(store, STATIC_DIR), routes)
    }

    #[test]
    fn test_output_file_layout() {
        let out = Path::new("dist");
        assert_eq!(output_file(out, "/"), PathBuf::from("dist/index.html"));
        assert_eq!(
            output_file(out, "/lessons/practical-queries/joins"),
            PathBuf::from("dist/lessons/practical-queries/joins/index.html")
        );
    }

    #[tokio::test]
    async fn test_export_writes_every_page_and_static_files() {
        let (app, routes) = builtin();
        let out = TempDir::new().unwrap();

        let summary = export_site(&app, &routes, out.path(), Path::new(STATIC_DIR))
            .await
            .unwrap();
        assert_eq!(summary.pages, routes.len());
        assert!(summary.static_files >= 1);

        let home = std::fs::read_to_string(out.path().join("index.html")).unwrap();
        assert!(home.contains("Phase 1: Getting Started"));

        for route in routes.iter().filter(|route| route.as_str() != "/") {
            let page = std::fs::read_to_string(output_file(out.path(), route)).unwrap();
            assert_eq!(
                page.matches(r#"aria-current="page""#).count(),
                1,
                "{} should highlight exactly one lesson",
                route
            );
        }

        let not_found = std::fs::read_to_string(out.path().join("404.html")).unwrap();
        assert!(not_found.contains("Page not found"));

        let copied = std::fs::read(out.path().join("static/site.css")).unwrap();
        let source = std::fs::read(Path::new(STATIC_DIR).join("site.css")).unwrap();
        assert_eq!(copied, source);
    }

    #[tokio::test]
    async fn test_export_stops_on_unrendered_route() {
        let (app, _) = builtin();
        let out = TempDir::new().unwrap();
        let routes = vec!["/".to_string(), "/lessons/not-in-catalog".to_string()];

        let err = export_site(&app, &routes, out.path(), Path::new(STATIC_DIR))
            .await
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("/lessons/not-in-catalog"), "{}", message);
        assert!(message.contains("404"), "{}", message);

        assert!(out.path().join("index.html").exists());
        assert!(!out.path().join("404.html").exists());
    }

    #[tokio::test]
    async fn test_missing_static_dir_is_skipped() {
        let (app, _) = builtin();
        let out = TempDir::new().unwrap();
        let routes = vec!["/lessons/joins".to_string()];

        let summary = export_site(&app, &routes, out.path(), &out.path().join("no-such-dir"))
            .await
            .unwrap();
        assert_eq!(
            summary,
            ExportSummary {
                pages: 1,
                static_files: 0,
            }
        );
        assert!(out.path().join("lessons/joins/index.html").exists());
    }
}
