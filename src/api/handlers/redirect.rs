//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short identifier to its original URL.
///
/// # Endpoint
///
/// `GET /api/url/{short_id}`
///
/// # Request Flow
///
/// 1. Atomically increment the click counter and load the record
/// 2. Return `302 Found` with the original URL in `Location`
///
/// The redirect is only sent after the counter write succeeded.
///
/// # Errors
///
/// Returns 404 Not Found with `{"message": "URL not found"}` for unknown ids.
/// Returns 500 Internal Server Error if the click cannot be recorded.
pub async fn redirect_handler(
    Path(short_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let record = state.redirect_service.resolve_and_track(&short_id).await?;

    let location = location_header(&record.original_url)?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// Builds a `Location` value, falling back to the parsed, percent-encoded
/// form for targets containing non-ASCII characters.
fn location_header(original_url: &str) -> Result<HeaderValue, AppError> {
    if original_url.is_ascii()
        && let Ok(value) = HeaderValue::from_str(original_url)
    {
        return Ok(value);
    }

    Url::parse(original_url)
        .ok()
        .and_then(|url| HeaderValue::from_str(url.as_str()).ok())
        .ok_or_else(|| {
            AppError::internal(
                "Stored URL is not a valid redirect target",
                json!({ "original_url": original_url }),
            )
        })
}
