//! Short link creation and resolution service.

use std::sync::Arc;

use crate::domain::entities::NewUrlRecord;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use serde_json::json;

/// Result of a successful shorten operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenedUrl {
    pub id: i64,
    pub code: String,
    pub short_url: String,
}

/// Service for creating and resolving short links.
///
/// Holds the store as an injected trait object so handlers never touch a
/// global handle.
pub struct UrlService {
    repository: Arc<dyn UrlRepository>,
    base_url: String,
}

impl UrlService {
    /// Creates a new URL service.
    ///
    /// `base_url` prefixes every returned short URL; a trailing slash is ignored.
    pub fn new(repository: Arc<dyn UrlRepository>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            repository,
            base_url,
        }
    }

    /// Creates a short link for `long_url`.
    ///
    /// The code is derived from the URL and the current time, so shortening the
    /// same URL twice creates two records with different codes. No collision
    /// check is made against existing codes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `long_url` is empty; the store is not
    /// called in that case.
    ///
    /// Returns [`AppError::Internal`] if the insert fails.
    pub async fn shorten(&self, long_url: &str) -> Result<ShortenedUrl, AppError> {
        if long_url.is_empty() {
            return Err(AppError::bad_request(
                "URL cannot be empty",
                json!({ "field": "url" }),
            ));
        }

        let code = generate_code(long_url);

        let new_record = NewUrlRecord {
            long_url: long_url.to_string(),
            short_code: code.clone(),
        };

        let id = self.repository.insert(new_record).await.map_err(|e| {
            tracing::error!(error = %e, details = %e.details(), "failed to insert url record");
            AppError::internal(
                "Failed to create short URL",
                json!({ "code": code, "cause": e.to_string() }),
            )
        })?;

        tracing::info!(id, code = %code, "short url created");

        Ok(ShortenedUrl {
            id,
            short_url: self.short_url(&code),
            code,
        })
    }

    /// Resolves a short code to the stored long URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this code.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        let record = self.repository.find_by_code(code).await.map_err(|e| {
            tracing::error!(
                error = %e,
                details = %e.details(),
                code = %code,
                "failed to look up url record"
            );
            e
        })?;

        record
            .map(|record| record.long_url)
            .ok_or_else(|| AppError::not_found("404 page not found", json!({ "code": code })))
    }

    /// Builds the fully-qualified short URL for `code`.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }

    /// Returns the number of stored records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::UrlRecord;
    use crate::domain::repositories::MockUrlRepository;
    use crate::utils::code_generator::CODE_LENGTH;
    use chrono::Utc;

    const BASE_URL: &str = "http://localhost:8080";

    fn create_test_record(id: i64, code: &str, url: &str) -> UrlRecord {
        UrlRecord::new(id, url.to_string(), code.to_string(), Utc::now())
    }

    fn service(mock: MockUrlRepository) -> UrlService {
        UrlService::new(Arc::new(mock), BASE_URL)
    }

    #[tokio::test]
    async fn test_shorten_success() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_insert()
            .withf(|new_record| {
                new_record.long_url == "http://example.com"
                    && new_record.short_code.len() == CODE_LENGTH
            })
            .times(1)
            .returning(|_| Ok(7));

        let result = service(mock_repo).shorten("http://example.com").await;

        assert!(result.is_ok());
        let shortened = result.unwrap();
        assert_eq!(shortened.id, 7);
        assert_eq!(shortened.code.len(), CODE_LENGTH);
        assert_eq!(
            shortened.short_url,
            format!("{}/{}", BASE_URL, shortened.code)
        );
    }

    #[tokio::test]
    async fn test_shorten_empty_url_never_reaches_store() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo.expect_insert().times(0);

        let result = service(mock_repo).shorten("").await;

        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(err.to_string(), "URL cannot be empty");
    }

    #[tokio::test]
    async fn test_shorten_storage_failure() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_insert()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let result = service(mock_repo).shorten("http://example.com").await;

        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, AppError::Internal { .. }));
        assert_eq!(err.to_string(), "Failed to create short URL");
    }

    #[tokio::test]
    async fn test_shorten_does_not_check_existing_codes() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo.expect_find_by_code().times(0);
        mock_repo.expect_insert().times(2).returning(|_| Ok(1));

        let service = service(mock_repo);
        assert!(service.shorten("http://example.com").await.is_ok());
        assert!(service.shorten("http://example.com").await.is_ok());
    }

    #[tokio::test]
    async fn test_resolve_found() {
        let mut mock_repo = MockUrlRepository::new();
        let record = create_test_record(1, "abcd1234", "http://example.com");
        mock_repo
            .expect_find_by_code()
            .withf(|code| code == "abcd1234")
            .times(1)
            .returning(move |_| Ok(Some(record.clone())));

        let result = service(mock_repo).resolve("abcd1234").await;

        assert_eq!(result.unwrap(), "http://example.com");
    }

    #[tokio::test]
    async fn test_resolve_not_found() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_find_by_code()
            .times(1)
            .returning(|_| Ok(None));

        let result = service(mock_repo).resolve("doesnotexist").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_resolve_storage_failure_is_internal() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_find_by_code()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let result = service(mock_repo).resolve("abcd1234").await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[test]
    fn test_short_url_trims_trailing_slash() {
        let service = UrlService::new(Arc::new(MockUrlRepository::new()), "http://s.test/");
        assert_eq!(service.short_url("abcd1234"), "http://s.test/abcd1234");
    }
}
