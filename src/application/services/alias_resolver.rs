//! Short code selection: custom alias checks or random generation.

use std::sync::Arc;

use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, is_reserved_code, validate_alias};
use tracing::debug;

/// Picks the short code for a new record.
///
/// All checks are read-only. The store's unique constraint remains the source
/// of truth; a code returned here can still lose a race at insert time.
pub struct AliasResolver<R: UrlRepository + ?Sized> {
    repository: Arc<R>,
    code_length: usize,
    max_attempts: u32,
}

impl<R: UrlRepository + ?Sized> AliasResolver<R> {
    pub fn new(repository: Arc<R>, code_length: usize, max_attempts: u32) -> Self {
        Self {
            repository,
            code_length,
            max_attempts,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Returns a code for a new record.
    ///
    /// - With `custom_alias`: validates the format, then checks availability
    /// - Without: generates codes until an unused one is found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a malformed or reserved alias.
    /// Returns [`AppError::Conflict`] if the alias is already taken.
    /// Returns [`AppError::Internal`] if no free code was found within the
    /// attempt budget, or on store errors.
    pub async fn resolve(&self, custom_alias: Option<&str>) -> Result<String, AppError> {
        match custom_alias {
            Some(alias) => self.check_alias(alias).await,
            None => self.generate_unique_code().await,
        }
    }

    /// Validates a custom alias and checks it is not in use.
    pub async fn check_alias(&self, alias: &str) -> Result<String, AppError> {
        validate_alias(alias)?;

        if self.repository.exists(alias).await? {
            return Err(AppError::alias_taken(alias));
        }

        Ok(alias.to_string())
    }

    /// Generates a code not currently present in the store.
    ///
    /// Tries at most `max_attempts` codes.
    pub async fn generate_unique_code(&self) -> Result<String, AppError> {
        for attempt in 1..=self.max_attempts {
            if let Some(code) = self.try_generated_code().await? {
                return Ok(code);
            }

            debug!(attempt, "Generated code rejected, retrying");
        }

        Err(AppError::exhausted_attempts(self.max_attempts))
    }

    /// Draws one random code and checks it. This is a single attempt.
    ///
    /// Returns `None` if the code is unusable.
    pub async fn try_generated_code(&self) -> Result<Option<String>, AppError> {
        self.check_generated(generate_code(self.code_length)).await
    }

    /// Returns `Some(code)` unless it is reserved or already in the store.
    async fn check_generated(&self, code: String) -> Result<Option<String>, AppError> {
        if is_reserved_code(&code) {
            debug!("Generated code {} is reserved", code);
            return Ok(None);
        }

        if self.repository.exists(&code).await? {
            debug!("Generated code {} already in use", code);
            return Ok(None);
        }

        Ok(Some(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUrlRepository;
    use serde_json::json;

    fn resolver(repo: MockUrlRepository) -> AliasResolver<MockUrlRepository> {
        AliasResolver::new(Arc::new(repo), 6, 10)
    }

    #[tokio::test]
    async fn test_custom_alias_available() {
        let mut repo = MockUrlRepository::new();
        repo.expect_exists()
            .withf(|code| code == "promo")
            .times(1)
            .returning(|_| Ok(false));

        let code = resolver(repo).resolve(Some("promo")).await.unwrap();
        assert_eq!(code, "promo");
    }

    #[tokio::test]
    async fn test_custom_alias_taken() {
        let mut repo = MockUrlRepository::new();
        repo.expect_exists().times(1).returning(|_| Ok(true));

        let err = resolver(repo).resolve(Some("promo")).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_custom_alias_invalid_skips_store() {
        let mut repo = MockUrlRepository::new();
        repo.expect_exists().times(0);

        let err = resolver(repo).resolve(Some("ab")).await.unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_generated_code_first_try() {
        let mut repo = MockUrlRepository::new();
        repo.expect_exists().times(1).returning(|_| Ok(false));

        let code = resolver(repo).resolve(None).await.unwrap();
        assert_eq!(code.len(), 6);
    }

    #[tokio::test]
    async fn test_generated_code_retries_on_collision() {
        let mut repo = MockUrlRepository::new();
        let mut seq = mockall::Sequence::new();
        repo.expect_exists()
            .times(2)
            .in_sequence(&mut seq)
            .returning(|_| Ok(true));
        repo.expect_exists()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(false));

        assert!(resolver(repo).resolve(None).await.is_ok());
    }

    #[tokio::test]
    async fn test_generated_code_exhausts_attempts() {
        let mut repo = MockUrlRepository::new();
        repo.expect_exists().times(10).returning(|_| Ok(true));

        let err = resolver(repo).resolve(None).await.unwrap_err();
        assert!(matches!(err, AppError::Internal { .. }));
        assert_eq!(err.to_string(), "Failed to generate unique code");
    }

    #[tokio::test]
    async fn test_store_error_propagates() {
        let mut repo = MockUrlRepository::new();
        repo.expect_exists()
            .times(1)
            .returning(|_| Err(AppError::internal("Internal server error", json!({}))));

        let err = resolver(repo).resolve(None).await.unwrap_err();
        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_generated_reserved_code_is_skipped() {
        let mut repo = MockUrlRepository::new();
        repo.expect_exists().never();

        let resolver = resolver(repo);
        assert_eq!(resolver.check_generated("health".to_string()).await.unwrap(), None);
        assert_eq!(resolver.check_generated("API".to_string()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_generated_free_code_is_kept() {
        let mut repo = MockUrlRepository::new();
        repo.expect_exists()
            .withf(|code| code == "aB3xY9")
            .times(1)
            .returning(|_| Ok(false));

        let code = resolver(repo)
            .check_generated("aB3xY9".to_string())
            .await
            .unwrap();
        assert_eq!(code.as_deref(), Some("aB3xY9"));
    }
}
