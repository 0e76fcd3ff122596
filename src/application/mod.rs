//! Application layer services implementing business logic.
//!
//! Services coordinate repository calls and validation, and give HTTP
//! handlers and the admin CLI a single entry point.
//!
//! - [`services::url_service::UrlService`] - Short link creation and resolution

pub mod services;
