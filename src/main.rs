mod api_doc;
mod app;
mod config;
mod diagnostics;
mod handlers;
mod models;
mod routes;

use axum::{middleware, ServiceExt};
use config::Config;
use tower::Layer;
use tracing_subscriber::EnvFilter;
use zpages::dispatch_guard;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("zpages-demo starting");

    let config = Config::from_env()?;
    config.log_startup();

    let zpages = diagnostics::build_zpages(&config)?;

    // The guard wraps the whole router so it runs before route matching
    let app = middleware::from_fn_with_state(zpages, dispatch_guard).layer(app::router());

    let addr = format!("{}:{}", config.service_host, config.service_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
