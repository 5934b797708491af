//! Job board application composition root
//!
//! Bootstraps the schema and composes the domain routers into a single
//! application, plus the middleware layers both binaries share.

use axum::{http::HeaderValue, Router};
use jobboard_jobs::JobsState;
use sqlx::PgPool;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer};

/// Largest accepted request body
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Create the main application router with all routes
pub async fn create_app(pool: PgPool) -> Result<Router, anyhow::Error> {
    jobboard_jobs::ensure_schema(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Schema bootstrap failed: {}", e))?;

    Ok(build_router(JobsState::new(pool)))
}

/// Compose domain routers with shared infrastructure routes
pub fn build_router(jobs_state: JobsState) -> Router {
    Router::new()
        .route("/health", axum::routing::get(health_check))
        .route(
            "/",
            axum::routing::get(|| async {
                concat!("Job Board API v", env!("CARGO_PKG_VERSION"))
            }),
        )
        .merge(jobboard_jobs::routes().with_state(jobs_state))
}

/// CORS layer from a comma-separated origin list; `*` allows any origin
pub fn build_cors_layer(origins: &str) -> CorsLayer {
    let origins = origins.trim();
    if origins.is_empty() || origins == "*" {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(origin = o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE])
}

/// Reject request bodies above `MAX_BODY_BYTES`
pub fn body_limit_layer() -> RequestBodyLimitLayer {
    RequestBodyLimitLayer::new(MAX_BODY_BYTES)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
