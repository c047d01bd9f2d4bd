pub mod api;
pub mod config;
pub mod lessons;
pub mod logic;
pub mod model;
pub mod render;
pub mod store;

// Export API types
pub use api::handlers;
pub use api::routes;

// Export logic types
pub use logic::{build_sidebar, validate_catalog, NavLink, NavSection, Sidebar};

// Export all model types
pub use model::*;

// Export store types
pub use store::{RouteTable, SiteStore, StaticStore};

use axum::Router;
use std::sync::Arc;
use tower_http::services::ServeDir;

/// Build the store described by the `site` section of the configuration
pub fn build_store(config: &crate::config::AppConfig) -> anyhow::Result<StaticStore> {
    use anyhow::Context;

    let store = match &config.site.catalog_path {
        Some(path) => {
            log::info!("Loading catalog from {}", path);
            let catalog = Catalog::from_file(path)
                .with_context(|| format!("Invalid catalog file {}", path))?;
            StaticStore::with_catalog(config.site.title.clone(), catalog)?
        }
        None => StaticStore::builtin(config.site.title.clone())?,
    };

    Ok(store)
}

/// Router with state attached and `/static` served from `static_dir`
pub fn build_app<S: SiteStore + 'static>(store: Arc<S>, static_dir: &str) -> Router {
    api::routes::create_router::<S>()
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(store)
}

/// Bind the configured address and serve `app` until shutdown
pub async fn run_server(app: Router, config: &crate::config::AppConfig) -> anyhow::Result<()> {
    use axum::serve;
    use tokio::net::TcpListener;

    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;
    log::info!("Lessons available at http://{}", bind_address);

    serve(listener, app).await?;

    Ok(())
}
