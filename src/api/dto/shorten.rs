//! DTOs for URL shortening endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::url_validator::UrlValidationError;

/// Request to shorten a URL.
///
/// The field is kept as raw JSON so a missing `originalUrl` produces the same
/// "URL is required" error as an empty one, and a non-string value is an
/// invalid URL rather than a malformed body.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    #[serde(default)]
    pub original_url: Option<Value>,
}

impl ShortenRequest {
    /// Returns the submitted URL; missing and `null` read as empty.
    pub fn original_url(&self) -> Result<&str, UrlValidationError> {
        match &self.original_url {
            None | Some(Value::Null) => Ok(""),
            Some(Value::String(url)) => Ok(url.as_str()),
            Some(other) => Err(UrlValidationError::Invalid(format!(
                "expected a string, got {other}"
            ))),
        }
    }
}

/// Response carrying the short URL for the client to render and encode.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_reads_camel_case() {
        let request: ShortenRequest =
            serde_json::from_value(json!({ "originalUrl": "https://example.com" })).unwrap();
        assert_eq!(request.original_url(), Ok("https://example.com"));
    }

    #[test]
    fn test_request_missing_field() {
        let request: ShortenRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(request.original_url(), Ok(""));

        let request: ShortenRequest =
            serde_json::from_value(json!({ "originalUrl": null })).unwrap();
        assert_eq!(request.original_url(), Ok(""));
    }

    #[test]
    fn test_request_non_string_is_invalid() {
        for value in [json!(42), json!(true), json!(["https://example.com"])] {
            let request: ShortenRequest =
                serde_json::from_value(json!({ "originalUrl": value })).unwrap();
            let err = request.original_url().unwrap_err();
            assert_eq!(err.to_string(), "Invalid URL");
        }
    }

    #[test]
    fn test_response_writes_camel_case() {
        let response = ShortenResponse {
            short_url: "http://localhost:3000/api/url/abcd1234".to_string(),
        };
        assert_eq!(
            serde_json::to_value(response).unwrap(),
            json!({ "shortUrl": "http://localhost:3000/api/url/abcd1234" })
        );
    }
}
