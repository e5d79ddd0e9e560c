// src/routes/mod.rs
pub mod chat;

use crate::{config::Config, error::AppError, state::SharedState};
use axum::{
    Router,
    extract::{DefaultBodyLimit, Request},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};
use chat::{chat_handler, get_metrics_handler};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub fn create_router(config: &Config) -> Router<SharedState> {
    let admin_key = config.admin_key.clone();
    let admin_routes = Router::new()
        .route("/metrics", get(get_metrics_handler))
        .layer(middleware::from_fn(move |req: Request, next: Next| {
            auth_middleware(admin_key.clone(), req, next)
        }));

    Router::new()
        .route("/api/chat", post(chat_handler))
        .nest("/admin", admin_routes)
        .route("/health", get(|| async { "OK" }))
        .nest_service("/uploads", ServeDir::new(&config.upload_dir))
        .layer(DefaultBodyLimit::max(config.body_limit()))
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
}

async fn auth_middleware(
    admin_key: Option<String>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    // No configured key means admin routes stay closed.
    let Some(expected) = admin_key else {
        return Err(AppError::Unauthorized);
    };
    match req.headers().get("x-admin-key") {
        Some(val) if val.as_bytes() == expected.as_bytes() => Ok(next.run(req).await),
        _ => Err(AppError::Unauthorized),
    }
}
