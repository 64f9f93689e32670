//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /api/url/shorten`     - Create a short URL
//! - `GET  /api/url/{short_id}`  - Redirect and count the click
//! - `GET  /health`              - Health check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Client origin from configuration
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `client_url` - origin allowed to call the API from a browser
pub fn app_router(state: AppState, client_url: Option<&str>) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api/url", api::routes::url_routes())
        .with_state(state)
        .layer(cors::layer(client_url))
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
