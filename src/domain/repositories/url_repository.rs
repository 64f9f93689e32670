//! Repository trait for URL record data access.

use crate::domain::entities::{NewUrlRecord, UrlRecord, UrlStats};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for URL mappings.
///
/// Implementations must enforce `short_id` uniqueness themselves and must make
/// both [`insert_if_absent`](Self::insert_if_absent) and
/// [`increment_clicks`](Self::increment_clicks) atomic with respect to
/// concurrent callers.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryUrlRepository`] - Process-local map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a record unless its `short_id` (or `short_url`) is already taken.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlRecord))` with the stored record
    /// - `Ok(None)` if the identifier is already in use
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn insert_if_absent(&self, new_record: NewUrlRecord)
    -> Result<Option<UrlRecord>, AppError>;

    /// Finds a record by its short identifier without touching the counter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Atomically increments `clicks` by one and returns the updated record.
    ///
    /// Returns `Ok(None)` when no record matches; nothing is written in that case.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn increment_clicks(&self, short_id: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Returns the number of records and the sum of their click counters.
    async fn stats(&self) -> Result<UrlStats, AppError>;

    /// Returns up to `limit` records ordered by clicks, most clicked first.
    async fn top_by_clicks(&self, limit: i64) -> Result<Vec<UrlRecord>, AppError>;

    /// Verifies the store is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
