//! Short identifier resolution with click tracking.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, warn};

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::is_short_id;

/// Service resolving short identifiers and counting clicks.
pub struct RedirectService<R: UrlRepository + ?Sized> {
    repository: Arc<R>,
    retry_attempts: usize,
}

impl<R: UrlRepository + ?Sized> RedirectService<R> {
    /// Creates a new redirect service.
    ///
    /// `retry_attempts` is the number of extra tries for a click increment
    /// that failed with an internal error.
    pub fn new(repository: Arc<R>, retry_attempts: usize) -> Self {
        Self {
            repository,
            retry_attempts,
        }
    }

    /// Resolves `short_id` and records one click.
    ///
    /// The counter is incremented by the store in one atomic step that also
    /// returns the record, so concurrent redirects never lose updates. The
    /// caller redirects only after this returns `Ok`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches; nothing is written.
    ///
    /// Returns [`AppError::Internal`] if the increment still fails after the
    /// configured retries. No redirect must be issued in that case.
    pub async fn resolve_and_track(&self, short_id: &str) -> Result<UrlRecord, AppError> {
        if !is_short_id(short_id) {
            debug!(short_id, "Rejected malformed short id");
            return Err(not_found(short_id));
        }

        let strategy = ExponentialBackoff::from_millis(10)
            .max_delay(Duration::from_millis(200))
            .map(jitter)
            .take(self.retry_attempts);

        let record = RetryIf::spawn(
            strategy,
            || self.repository.increment_clicks(short_id),
            |e: &AppError| {
                let retry = matches!(e, AppError::Internal { .. });
                if retry {
                    warn!(short_id, error = %e, "Click increment failed, will retry");
                }
                retry
            },
        )
        .await?;

        let record = record.ok_or_else(|| not_found(short_id))?;

        debug!(short_id, clicks = record.clicks, "Short id resolved");

        Ok(record)
    }
}

fn not_found(short_id: &str) -> AppError {
    AppError::not_found("URL not found", json!({ "short_id": short_id }))
}
