//! Liveness and health routes
//!
//! | Path | Method | Purpose |
//! |------|--------|---------|
//! | /       | GET | Plain-text liveness greeting |
//! | /health | GET | JSON health summary |

use axum::{Json, Router, routing::get};

use crate::core::ServerState;

/// Health routes — public, no state required beyond the shared router.
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}

/// Liveness greeting
#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses(
        (status = 200, description = "Service is up", body = String, content_type = "text/plain"),
    )
)]
pub async fn root() -> &'static str {
    "Worker roster service is running"
}

/// Health summary
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service health summary"),
    )
)]
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "roster-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
