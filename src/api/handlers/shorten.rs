//! Handler for URL shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::json;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for a long URL.
///
/// # Endpoint
///
/// `POST /api/url/shorten`
///
/// # Request Body
///
/// ```json
/// { "originalUrl": "https://example.com/page" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "shortUrl": "https://s.example.com/api/url/Xy3_a-9Q" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not JSON, or `originalUrl` is
/// missing, empty, not a string or not an absolute URL.
/// Returns 500 Internal Server Error if the record cannot be stored.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::bad_request(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    let original_url = payload.original_url().map_err(|e| {
        AppError::bad_request(e.to_string(), json!({ "reason": e.reason() }))
    })?;

    let record = state.shorten_service.shorten(original_url).await?;

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            short_url: record.short_url,
        }),
    ))
}
