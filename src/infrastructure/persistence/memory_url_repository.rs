//! Process-local implementation of the URL repository.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

#[derive(Default)]
struct Inner {
    next_id: i64,
    records: HashMap<String, UrlRecord>,
}

/// In-memory store keyed by short code.
///
/// Every mutation happens under one write lock, which gives the same
/// guarantees the PostgreSQL store gets from its unique constraint and
/// single-statement update. Data is lost on restart.
///
/// # Use Cases
///
/// - Local development without PostgreSQL (`STORE_BACKEND=memory`)
/// - Handler and service tests
#[derive(Default)]
pub struct InMemoryUrlRepository {
    inner: RwLock<Inner>,
}

impl InMemoryUrlRepository {
    pub fn new() -> Self {
        debug!("Using in-memory URL store");
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn insert(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError> {
        let mut inner = self.inner.write().await;

        if inner.records.contains_key(&new_record.short_code) {
            return Err(AppError::conflict(
                "Short code is already taken",
                json!({ "code": new_record.short_code }),
            ));
        }

        inner.next_id += 1;
        let record = UrlRecord::new(
            inner.next_id,
            new_record.short_code.clone(),
            new_record.original_url,
            Utc::now(),
            new_record.meta,
        );
        inner
            .records
            .insert(new_record.short_code, record.clone());

        Ok(record)
    }

    async fn exists(&self, short_code: &str) -> Result<bool, AppError> {
        Ok(self.inner.read().await.records.contains_key(short_code))
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<UrlRecord>, AppError> {
        Ok(self.inner.read().await.records.get(short_code).cloned())
    }

    async fn record_click(&self, short_code: &str) -> Result<Option<String>, AppError> {
        let mut inner = self.inner.write().await;

        Ok(inner.records.get_mut(short_code).map(|record| {
            record.clicks += 1;
            record.last_clicked_at = Some(Utc::now());
            record.original_url.clone()
        }))
    }

    async fn recent(&self, limit: i64) -> Result<Vec<UrlRecord>, AppError> {
        let limit = usize::try_from(limit).unwrap_or(0);
        let inner = self.inner.read().await;

        let mut records: Vec<UrlRecord> = inner.records.values().cloned().collect();
        records.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        records.truncate(limit);

        Ok(records)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
