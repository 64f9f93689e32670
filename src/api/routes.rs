//! API route configuration.

use crate::api::handlers::{redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// URL routes, mounted under `/api/url`.
///
/// # Endpoints
///
/// - `POST /shorten`     - Create a short URL
/// - `GET  /{short_id}`  - Redirect to the original URL and count the click
pub fn url_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/{short_id}", get(redirect_handler))
}
