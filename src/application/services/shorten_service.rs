//! Short link creation service.

use std::sync::Arc;

use crate::application::ShortenerSettings;
use crate::application::services::AliasResolver;
use crate::domain::entities::{NewUrlRecord, RequestMeta, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::url_validator::{UrlValidationError, UtmParams, prepare_target_url};
use serde_json::json;
use tracing::{debug, info};

/// Input of a shorten request.
#[derive(Debug, Clone, Default)]
pub struct ShortenCommand {
    pub url: String,
    pub custom_alias: Option<String>,
    pub utm: UtmParams,
}

impl ShortenCommand {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.custom_alias = Some(alias.into());
        self
    }

    pub fn with_utm(mut self, utm: UtmParams) -> Self {
        self.utm = utm;
        self
    }
}

/// Result of a successful shorten request.
#[derive(Debug, Clone)]
pub struct ShortenedUrl {
    pub short_code: String,
    pub short_url: String,
    pub original_url: String,
    pub record: UrlRecord,
}

/// Service for creating short links.
///
/// Validation happens before any store access. The insert itself is the only
/// place a code is reserved, so a race lost at insert time is handled here.
pub struct ShortenService<R: UrlRepository + ?Sized> {
    repository: Arc<R>,
    resolver: AliasResolver<R>,
    settings: ShortenerSettings,
}

impl<R: UrlRepository + ?Sized> ShortenService<R> {
    /// Creates a new shortening service.
    pub fn new(repository: Arc<R>, settings: ShortenerSettings) -> Self {
        let resolver = AliasResolver::new(
            repository.clone(),
            settings.code_length,
            settings.max_attempts,
        );

        Self {
            repository,
            resolver,
            settings,
        }
    }

    /// Creates a short link.
    ///
    /// # Flow
    ///
    /// 1. Validate the URL and append UTM tags
    /// 2. Pick a code (custom alias or generated)
    /// 3. Insert the record with zero clicks
    ///
    /// A generated code that collides at insert time is replaced by a fresh
    /// one, within the same attempt budget as generation.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL or alias is invalid.
    /// Returns [`AppError::Conflict`] if the custom alias is taken, whether
    /// detected by the pre-check or by the store's unique constraint.
    /// Returns [`AppError::Internal`] on store errors or exhausted attempts.
    pub async fn shorten(
        &self,
        command: ShortenCommand,
        meta: RequestMeta,
    ) -> Result<ShortenedUrl, AppError> {
        let original_url = prepare_target_url(&command.url, &command.utm).map_err(|e| match e {
            UrlValidationError::Empty => AppError::bad_request("URL is required", json!({})),
            other => AppError::invalid_url(other.to_string()),
        })?;

        let custom_alias = command
            .custom_alias
            .as_deref()
            .map(str::trim)
            .filter(|alias| !alias.is_empty());

        let record = match custom_alias {
            Some(alias) => self.insert_with_alias(alias, original_url, meta).await?,
            None => self.insert_with_generated_code(original_url, meta).await?,
        };

        metrics::counter!("urls_shortened_total").increment(1);
        info!(code = %record.short_code, "URL shortened");

        Ok(ShortenedUrl {
            short_code: record.short_code.clone(),
            short_url: self.settings.short_url(&record.short_code),
            original_url: record.original_url.clone(),
            record,
        })
    }

    async fn insert_with_alias(
        &self,
        alias: &str,
        original_url: String,
        meta: RequestMeta,
    ) -> Result<UrlRecord, AppError> {
        let code = self.resolver.resolve(Some(alias)).await?;

        self.repository
            .insert(NewUrlRecord {
                short_code: code,
                original_url,
                meta,
            })
            .await
            .map_err(|e| match e {
                AppError::Conflict { .. } => AppError::alias_taken(alias),
                other => other,
            })
    }

    /// Generates and inserts a code, retrying on collisions.
    ///
    /// A candidate found in use and an insert lost to a concurrent request
    /// both spend one attempt of the same budget.
    async fn insert_with_generated_code(
        &self,
        original_url: String,
        meta: RequestMeta,
    ) -> Result<UrlRecord, AppError> {
        let budget = self.resolver.max_attempts();

        for attempt in 1..=budget {
            let Some(code) = self.resolver.try_generated_code().await? else {
                debug!(attempt, "Generated code rejected, retrying");
                continue;
            };

            match self
                .repository
                .insert(NewUrlRecord {
                    short_code: code.clone(),
                    original_url: original_url.clone(),
                    meta: meta.clone(),
                })
                .await
            {
                Ok(record) => return Ok(record),
                Err(AppError::Conflict { .. }) => {
                    debug!(attempt, "Generated code {} was taken concurrently, retrying", code);
                }
                Err(other) => return Err(other),
            }
        }

        Err(AppError::exhausted_attempts(budget))
    }
}
