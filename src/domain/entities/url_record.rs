//! URL record entity representing one stored short-code mapping.

use chrono::{DateTime, Utc};

/// A stored association between a short code and a long URL.
///
/// Records are append-only: they are never updated or deleted once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub id: i64,
    pub long_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(id: i64, long_url: String, short_code: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            long_url,
            short_code,
            created_at,
        }
    }
}

/// Input data for inserting a new record.
///
/// `id` and `created_at` are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlRecord {
    pub long_url: String,
    pub short_code: String,
}
