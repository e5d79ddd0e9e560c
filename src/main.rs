use std::sync::Arc;

use anyhow::Context;
use axum::routing::get;
use tracing_subscriber::EnvFilter;

use tholini_chat::{config::Config, routes, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    tokio::fs::create_dir_all(&config.upload_dir)
        .await
        .with_context(|| format!("creating upload dir {}", config.upload_dir.display()))?;

    let addr = config.bind_addr();
    let app = routes::create_router(&config)
        .route("/", get(|| async { "YOU ARE CONNECTED" }))
        .with_state(Arc::new(AppState::new(config)));

    let listener = tokio::net::TcpListener::bind(addr.as_str())
        .await
        .with_context(|| format!("binding {addr}"))?;

    tracing::info!(%addr, "chat backend listening");
    axum::serve(listener, app).await?;
    Ok(())
}
