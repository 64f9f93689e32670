//! Validation of URLs submitted for shortening.
//!
//! A URL is accepted when it parses as an absolute URL with a non-empty host.
//! The submitted string itself is what gets stored, so the redirect target is
//! exactly what the client sent.

use url::Url;

/// Errors that can occur while validating a submitted URL.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL is required")]
    Missing,

    #[error("Invalid URL")]
    Invalid(String),
}

impl UrlValidationError {
    /// Parser detail for diagnostics, if any.
    pub fn reason(&self) -> Option<&str> {
        match self {
            UrlValidationError::Missing => None,
            UrlValidationError::Invalid(reason) => Some(reason),
        }
    }
}

/// Checks that `input` is a well-formed absolute URL.
///
/// # Errors
///
/// Returns [`UrlValidationError::Missing`] for an empty string.
/// Returns [`UrlValidationError::Invalid`] when the string does not parse or
/// has no host (`mailto:`, `data:`, `file:///...`).
///
/// # Examples
///
/// ```ignore
/// assert!(validate_original_url("https://example.com/page").is_ok());
/// assert_eq!(validate_original_url(""), Err(UrlValidationError::Missing));
/// assert!(validate_original_url("not a url").is_err());
/// ```
pub fn validate_original_url(input: &str) -> Result<Url, UrlValidationError> {
    if input.is_empty() {
        return Err(UrlValidationError::Missing);
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::Invalid(e.to_string()))?;

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(UrlValidationError::Invalid("URL has no host".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_https() {
        assert!(validate_original_url("https://example.com/page").is_ok());
    }

    #[test]
    fn test_accepts_http_with_port_query_fragment() {
        assert!(validate_original_url("http://example.com:8080/a/b?x=1#top").is_ok());
    }

    #[test]
    fn test_accepts_non_http_scheme_with_host() {
        assert!(validate_original_url("ftp://files.example.com/readme.txt").is_ok());
    }

    #[test]
    fn test_empty_is_missing() {
        assert_eq!(validate_original_url(""), Err(UrlValidationError::Missing));
    }

    #[test]
    fn test_whitespace_is_invalid() {
        let err = validate_original_url("   ").unwrap_err();
        assert_eq!(err.to_string(), "Invalid URL");
    }

    #[test]
    fn test_relative_path_is_invalid() {
        assert!(matches!(
            validate_original_url("/just/a/path"),
            Err(UrlValidationError::Invalid(_))
        ));
    }

    #[test]
    fn test_missing_scheme_is_invalid() {
        assert!(validate_original_url("example.com").is_err());
    }

    #[test]
    fn test_plain_text_is_invalid() {
        let err = validate_original_url("not-a-valid-url").unwrap_err();
        assert!(err.reason().is_some());
    }

    #[test]
    fn test_hostless_schemes_are_invalid() {
        assert!(validate_original_url("mailto:user@example.com").is_err());
        assert!(validate_original_url("javascript:alert(1)").is_err());
        assert!(validate_original_url("file:///etc/passwd").is_err());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(UrlValidationError::Missing.to_string(), "URL is required");
        assert_eq!(
            UrlValidationError::Invalid("x".to_string()).to_string(),
            "Invalid URL"
        );
    }
}
