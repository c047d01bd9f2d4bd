use pg_learn::config::AppConfig;
use pg_learn::{build_app, build_store, run_server, SiteStore};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("pg-learn: PostgreSQL & Prisma lessons");

    let config = AppConfig::load()?;
    log::info!(
        "Configuration loaded: server={}:{}",
        config.server.host,
        config.server.port
    );

    let store = Arc::new(build_store(&config)?);
    log::info!(
        "Serving {} lessons in {} phases",
        store.catalog().lessons().count(),
        store.catalog().phases().len()
    );

    run_server(build_app(store, &config.site.static_dir), &config).await?;

    Ok(())
}
