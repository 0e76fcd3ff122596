//! Short code generation.
//!
//! A code is the first [`CODE_LENGTH`] characters of the URL-safe base64
//! encoding of `SHA-1(url + timestamp)`. The timestamp acts as a salt, so the
//! same URL shortened twice yields two different codes. Codes are not checked
//! for uniqueness; a truncated prefix can collide, it is just unlikely.

use base64::Engine as _;
use chrono::{DateTime, Utc};
use sha1::{Digest, Sha1};

/// Number of characters kept from the encoded digest.
pub const CODE_LENGTH: usize = 8;

/// Generates a short code for `url` salted with the current wall-clock time.
pub fn generate_code(url: &str) -> String {
    generate_code_at(url, Utc::now())
}

/// Generates the short code for `url` at a fixed `timestamp`.
///
/// Deterministic for a given `(url, timestamp)` pair.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use tinylink::utils::code_generator::{CODE_LENGTH, generate_code_at};
///
/// let now = Utc::now();
/// let code = generate_code_at("http://example.com", now);
/// assert_eq!(code, generate_code_at("http://example.com", now));
/// assert_eq!(code.len(), CODE_LENGTH);
/// ```
pub fn generate_code_at(url: &str, timestamp: DateTime<Utc>) -> String {
    let mut hasher = Sha1::new();
    hasher.update(url.as_bytes());
    hasher.update(timestamp.to_string().as_bytes());
    let digest = hasher.finalize();

    let mut code = base64::engine::general_purpose::URL_SAFE.encode(digest);
    code.truncate(CODE_LENGTH);
    code
}
