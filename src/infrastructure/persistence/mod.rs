//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! - [`SqliteUrlRepository`] - URL record storage and lookup

pub mod sqlite_url_repository;

pub use sqlite_url_repository::SqliteUrlRepository;
