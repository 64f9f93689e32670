//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlRecord, UrlRecord, UrlStats};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// PostgreSQL repository for URL records.
///
/// Uniqueness of `short_id` and `short_url` is enforced by table constraints;
/// click increments are a single `UPDATE ... RETURNING`.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn insert_if_absent(
        &self,
        new_record: NewUrlRecord,
    ) -> Result<Option<UrlRecord>, AppError> {
        let record = sqlx::query_as::<_, UrlRecord>(
            r#"
            INSERT INTO urls (original_url, short_id, short_url)
            VALUES ($1, $2, $3)
            ON CONFLICT DO NOTHING
            RETURNING id, original_url, short_id, short_url, clicks, created_at, updated_at
            "#,
        )
        .bind(&new_record.original_url)
        .bind(&new_record.short_id)
        .bind(&new_record.short_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<UrlRecord>, AppError> {
        let record = sqlx::query_as::<_, UrlRecord>(
            r#"
            SELECT id, original_url, short_id, short_url, clicks, created_at, updated_at
            FROM urls
            WHERE short_id = $1
            "#,
        )
        .bind(short_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn increment_clicks(&self, short_id: &str) -> Result<Option<UrlRecord>, AppError> {
        let record = sqlx::query_as::<_, UrlRecord>(
            r#"
            UPDATE urls
            SET clicks = clicks + 1, updated_at = NOW()
            WHERE short_id = $1
            RETURNING id, original_url, short_id, short_url, clicks, created_at, updated_at
            "#,
        )
        .bind(short_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn stats(&self) -> Result<UrlStats, AppError> {
        let stats = sqlx::query_as::<_, UrlStats>(
            r#"
            SELECT COUNT(*) AS total_urls, COALESCE(SUM(clicks), 0)::BIGINT AS total_clicks
            FROM urls
            "#,
        )
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(stats)
    }

    async fn top_by_clicks(&self, limit: i64) -> Result<Vec<UrlRecord>, AppError> {
        let records = sqlx::query_as::<_, UrlRecord>(
            r#"
            SELECT id, original_url, short_id, short_url, clicks, created_at, updated_at
            FROM urls
            ORDER BY clicks DESC, created_at ASC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(records)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
