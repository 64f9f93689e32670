//! Cross-origin policy for the browser client.

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Creates the CORS layer for the configured client origin.
///
/// Allows `GET`, `POST`, `PUT` and `DELETE` with credentials from
/// `client_url` only. Without a client origin no cross-origin request is
/// allowed.
pub fn layer(client_url: Option<&str>) -> CorsLayer {
    let origin = match client_url.map(|url| HeaderValue::from_str(url.trim_end_matches('/'))) {
        Some(Ok(origin)) => AllowOrigin::exact(origin),
        Some(Err(e)) => {
            tracing::warn!("Ignoring invalid CLIENT_URL for CORS: {}", e);
            AllowOrigin::list(Vec::<HeaderValue>::new())
        }
        None => AllowOrigin::list(Vec::<HeaderValue>::new()),
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}
