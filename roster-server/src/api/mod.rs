//! API Routing Module
//!
//! # Structure
//!
//! - [`health`] — liveness greeting and health check
//! - [`workers`] — worker roster CRUD and bulk operations
//! - [`docs`] — interactive API documentation

pub mod docs;
pub mod health;
pub mod workers;

use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;

use crate::core::ServerState;

/// HTTP access log middleware
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    tracing::info!(target: "http_access", "{} {} {}", method, uri, response.status());

    response
}

/// Build the application router with all routes and middleware.
pub fn build_app(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(workers::router())
        .with_state(state)
        .merge(docs::router())
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(log_request))
}
