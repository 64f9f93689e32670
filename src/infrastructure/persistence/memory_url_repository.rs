//! Process-local implementation of the URL repository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{NewUrlRecord, UrlRecord, UrlStats};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// In-memory repository keyed by short identifier.
///
/// Records live only as long as the process. Every mutation happens under one
/// write lock, which gives the same guarantees the PostgreSQL constraints do:
/// a `short_id` is claimed at most once and increments never get lost.
///
/// # Use Cases
///
/// - Local development without PostgreSQL (`STORAGE_BACKEND=memory`)
/// - HTTP integration tests
#[derive(Default)]
pub struct MemoryUrlRepository {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: i64,
    records: HashMap<String, UrlRecord>,
    short_urls: HashSet<String>,
}

impl MemoryUrlRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        debug!("Using in-memory URL repository");
        Self::default()
    }
}

#[async_trait]
impl UrlRepository for MemoryUrlRepository {
    async fn insert_if_absent(
        &self,
        new_record: NewUrlRecord,
    ) -> Result<Option<UrlRecord>, AppError> {
        let mut inner = self.inner.write().await;

        if inner.records.contains_key(&new_record.short_id)
            || inner.short_urls.contains(&new_record.short_url)
        {
            return Ok(None);
        }

        inner.next_id += 1;
        let record = UrlRecord::from_new(inner.next_id, new_record, Utc::now());
        inner.short_urls.insert(record.short_url.clone());
        inner
            .records
            .insert(record.short_id.clone(), record.clone());

        Ok(Some(record))
    }

    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<UrlRecord>, AppError> {
        Ok(self.inner.read().await.records.get(short_id).cloned())
    }

    async fn increment_clicks(&self, short_id: &str) -> Result<Option<UrlRecord>, AppError> {
        let mut inner = self.inner.write().await;

        Ok(inner.records.get_mut(short_id).map(|record| {
            record.clicks += 1;
            record.updated_at = Utc::now();
            record.clone()
        }))
    }

    async fn stats(&self) -> Result<UrlStats, AppError> {
        let inner = self.inner.read().await;

        Ok(UrlStats {
            total_urls: inner.records.len() as i64,
            total_clicks: inner.records.values().map(|r| r.clicks).sum(),
        })
    }

    async fn top_by_clicks(&self, limit: i64) -> Result<Vec<UrlRecord>, AppError> {
        let inner = self.inner.read().await;

        let mut records: Vec<UrlRecord> = inner.records.values().cloned().collect();
        records.sort_by(|a, b| {
            b.clicks
                .cmp(&a.clicks)
                .then_with(|| a.created_at.cmp(&b.created_at))
        });
        records.truncate(usize::try_from(limit).unwrap_or(0));

        Ok(records)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
