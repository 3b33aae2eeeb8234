//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlRecord, RequestMeta, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Row shape shared by every `SELECT`/`RETURNING` in this repository.
#[derive(Debug, sqlx::FromRow)]
struct UrlRow {
    id: i64,
    short_code: String,
    original_url: String,
    created_at: DateTime<Utc>,
    clicks: i64,
    last_clicked_at: Option<DateTime<Utc>>,
    creator_ip: Option<String>,
    creator_user_agent: Option<String>,
}

impl From<UrlRow> for UrlRecord {
    fn from(row: UrlRow) -> Self {
        Self {
            id: row.id,
            short_code: row.short_code,
            original_url: row.original_url,
            created_at: row.created_at,
            clicks: row.clicks,
            last_clicked_at: row.last_clicked_at,
            meta: RequestMeta {
                ip: row.creator_ip,
                user_agent: row.creator_user_agent,
            },
        }
    }
}

/// PostgreSQL repository for URL records.
///
/// Short code uniqueness is enforced by the `urls_short_code_key` constraint;
/// click counting is a single `UPDATE ... RETURNING`.
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
    async fn insert(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            INSERT INTO urls (short_code, original_url, creator_ip, creator_user_agent)
            VALUES ($1, $2, $3, $4)
            RETURNING id, short_code, original_url, created_at, clicks, last_clicked_at,
                      creator_ip, creator_user_agent
            "#,
        )
        .bind(&new_record.short_code)
        .bind(&new_record.original_url)
        .bind(&new_record.meta.ip)
        .bind(&new_record.meta.user_agent)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn exists(&self, short_code: &str) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM urls WHERE short_code = $1)",
        )
        .bind(short_code)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<UrlRecord>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, short_code, original_url, created_at, clicks, last_clicked_at,
                   creator_ip, creator_user_agent
            FROM urls
            WHERE short_code = $1
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(UrlRecord::from))
    }

    async fn record_click(&self, short_code: &str) -> Result<Option<String>, AppError> {
        let original_url = sqlx::query_scalar::<_, String>(
            r#"
            UPDATE urls
            SET clicks = clicks + 1, last_clicked_at = NOW()
            WHERE short_code = $1
            RETURNING original_url
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(original_url)
    }

    async fn recent(&self, limit: i64) -> Result<Vec<UrlRecord>, AppError> {
        let rows = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, short_code, original_url, created_at, clicks, last_clicked_at,
                   creator_ip, creator_user_agent
            FROM urls
            ORDER BY created_at DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(UrlRecord::from).collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await?;
        Ok(())
    }
}
