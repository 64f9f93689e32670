//! Short URL creation service.

use std::sync::Arc;

use serde_json::json;
use tracing::{info, warn};

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_short_id;
use crate::utils::url_validator::validate_original_url;

/// Path prefix under which short identifiers are served.
pub const SHORT_URL_PATH: &str = "/api/url";

/// Service for creating short URLs.
///
/// Validates the submitted URL, picks a free random identifier and persists
/// the mapping.
pub struct ShortenService<R: UrlRepository + ?Sized> {
    repository: Arc<R>,
    base_url: String,
}

impl<R: UrlRepository + ?Sized> ShortenService<R> {
    /// Creates a new shorten service.
    ///
    /// `base_url` is the public origin short URLs are built on; a trailing
    /// slash is ignored.
    pub fn new(repository: Arc<R>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            repository,
            base_url,
        }
    }

    /// Creates a short URL for `original_url`.
    ///
    /// # Code Generation
    ///
    /// Generates a random 8-character identifier and claims it with a single
    /// insert-if-absent. When the identifier is taken, either reported as
    /// "nothing inserted" or as [`AppError::Conflict`], a new candidate is
    /// drawn. There is no attempt limit: with 48 bits per identifier a
    /// collision is rare and consecutive collisions are rarer still.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is empty or not an absolute
    /// URL. No record is created in that case.
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn shorten(&self, original_url: &str) -> Result<UrlRecord, AppError> {
        validate_original_url(original_url).map_err(|e| {
            AppError::bad_request(e.to_string(), json!({ "reason": e.reason() }))
        })?;

        let mut attempt: u32 = 0;

        loop {
            attempt += 1;

            let short_id = generate_short_id();
            let new_record = NewUrlRecord {
                original_url: original_url.to_string(),
                short_url: self.short_url_for(&short_id),
                short_id,
            };
            let candidate = new_record.short_id.clone();

            match self.repository.insert_if_absent(new_record).await {
                Ok(Some(record)) => {
                    info!(
                        short_id = %record.short_id,
                        attempts = attempt,
                        "Short URL created"
                    );
                    return Ok(record);
                }
                Ok(None) | Err(AppError::Conflict { .. }) => {
                    warn!(short_id = %candidate, attempt, "Short id collision, retrying");
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Builds the public short URL for an identifier.
    pub fn short_url_for(&self, short_id: &str) -> String {
        format!("{}{}/{}", self.base_url, SHORT_URL_PATH, short_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUrlRepository;
    use crate::utils::code_generator::is_short_id;
    use chrono::Utc;

    const BASE: &str = "https://sho.rt";

    fn stored(new_record: NewUrlRecord) -> UrlRecord {
        UrlRecord::from_new(1, new_record, Utc::now())
    }

    #[tokio::test]
    async fn test_shorten_success() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_insert_if_absent()
            .withf(|new_record| {
                new_record.original_url == "https://example.com/page"
                    && is_short_id(&new_record.short_id)
                    && new_record.short_url == format!("{BASE}/api/url/{}", new_record.short_id)
            })
            .times(1)
            .returning(|new_record| Ok(Some(stored(new_record))));

        let service = ShortenService::new(Arc::new(mock_repo), BASE);

        let record = service.shorten("https://example.com/page").await.unwrap();

        assert_eq!(record.original_url, "https://example.com/page");
        assert_eq!(record.clicks, 0);
        assert!(record.short_url.starts_with("https://sho.rt/api/url/"));
        assert_eq!(record.short_url.len(), "https://sho.rt/api/url/".len() + 8);
    }

    #[tokio::test]
    async fn test_shorten_retries_on_taken_identifier() {
        let mut mock_repo = MockUrlRepository::new();
        let mut seq = mockall::Sequence::new();

        mock_repo
            .expect_insert_if_absent()
            .times(2)
            .in_sequence(&mut seq)
            .returning(|_| Ok(None));

        mock_repo
            .expect_insert_if_absent()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|new_record| Ok(Some(stored(new_record))));

        let service = ShortenService::new(Arc::new(mock_repo), BASE);

        let result = service.shorten("https://example.com").await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_shorten_treats_conflict_error_as_collision() {
        let mut mock_repo = MockUrlRepository::new();
        let mut seq = mockall::Sequence::new();

        mock_repo
            .expect_insert_if_absent()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| {
                Err(AppError::conflict(
                    "Unique constraint violation",
                    json!({ "constraint": "urls_short_id_key" }),
                ))
            });

        mock_repo
            .expect_insert_if_absent()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|new_record| Ok(Some(stored(new_record))));

        let service = ShortenService::new(Arc::new(mock_repo), BASE);

        assert!(service.shorten("https://example.com").await.is_ok());
    }

    #[tokio::test]
    async fn test_shorten_empty_url() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo.expect_insert_if_absent().times(0);

        let service = ShortenService::new(Arc::new(mock_repo), BASE);

        let err = service.shorten("").await.unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(err.to_string(), "URL is required");
    }

    #[tokio::test]
    async fn test_shorten_invalid_url() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo.expect_insert_if_absent().times(0);

        let service = ShortenService::new(Arc::new(mock_repo), BASE);

        let err = service.shorten("not-a-url").await.unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(err.to_string(), "Invalid URL");
    }

    #[tokio::test]
    async fn test_shorten_propagates_storage_failure() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_insert_if_absent()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let service = ShortenService::new(Arc::new(mock_repo), BASE);

        let err = service.shorten("https://example.com").await.unwrap_err();

        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[test]
    fn test_short_url_trims_trailing_slash() {
        let service = ShortenService::new(Arc::new(MockUrlRepository::new()), "https://sho.rt/");

        assert_eq!(
            service.short_url_for("AbCd-_12"),
            "https://sho.rt/api/url/AbCd-_12"
        );
    }
}
