//! # tinylink
//!
//! A small URL shortening service built with Axum and SQLite.
//!
//! `POST /` with a form field `url` stores the URL under an 8-character code
//! and answers with the short URL as plain text. `GET /{code}` answers with a
//! `301 Moved Permanently` to the stored URL.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Record entity and the store contract
//! - **Application Layer** ([`application`]) - Shorten/resolve orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite store
//! - **API Layer** ([`api`]) - Handlers, DTOs, and middleware
//!
//! ## Short codes
//!
//! Codes are the first 8 characters of the URL-safe base64 encoding of
//! `SHA-1(url + current time)`; see [`utils::code_generator`]. They are not
//! checked for collisions before insert.
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://shortener.db"   # Optional
//! cargo run
//!
//! curl -d url=https://example.com http://localhost:8080/
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ShortenedUrl, UrlService};
    pub use crate::domain::entities::{NewUrlRecord, UrlRecord};
    pub use crate::domain::repositories::UrlRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::SqliteUrlRepository;
    pub use crate::state::AppState;
}
