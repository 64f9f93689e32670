//! URL record entity representing a short identifier mapping.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A shortened URL with its click counter.
///
/// `original_url` and `short_id` never change after creation; only `clicks`
/// (and `updated_at`) move, and only upward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct UrlRecord {
    pub id: i64,
    pub original_url: String,
    pub short_id: String,
    pub short_url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UrlRecord {
    /// Builds a freshly created record with a zero click counter.
    pub fn from_new(id: i64, new_record: NewUrlRecord, now: DateTime<Utc>) -> Self {
        Self {
            id,
            original_url: new_record.original_url,
            short_id: new_record.short_id,
            short_url: new_record.short_url,
            clicks: 0,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Input data for creating a new record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlRecord {
    pub original_url: String,
    pub short_id: String,
    pub short_url: String,
}

/// Aggregate counters across all records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct UrlStats {
    pub total_urls: i64,
    pub total_clicks: i64,
}
