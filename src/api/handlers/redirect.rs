//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Responds with `301 Moved Permanently`. `Redirect::permanent` is not used
/// because it emits 308.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let long_url = state.url_service.resolve(&code).await?;

    debug!(code = %code, "redirecting to {:?}", long_url);

    let location = location_header(&long_url)?;

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]))
}

/// Builds a `Location` value for any stored URL.
///
/// Stored URLs are only checked for emptiness, so they may contain bytes a
/// header cannot carry. CR and LF become spaces; other control bytes and DEL
/// are percent-encoded.
fn location_header(long_url: &str) -> Result<HeaderValue, AppError> {
    let mut bytes = Vec::with_capacity(long_url.len());

    for &b in long_url.as_bytes() {
        match b {
            b'\r' | b'\n' => bytes.push(b' '),
            b'\t' => bytes.push(b),
            0..=0x1f | 0x7f => bytes.extend_from_slice(format!("%{:02X}", b).as_bytes()),
            _ => bytes.push(b),
        }
    }

    HeaderValue::from_bytes(&bytes).map_err(|e| {
        tracing::error!(error = %e, "stored url cannot be sent as Location");
        AppError::internal(
            "Stored URL cannot be redirected to",
            json!({ "cause": e.to_string() }),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_url_unchanged() {
        let value = location_header("https://example.com/path?q=1&r=two").unwrap();
        assert_eq!(value, "https://example.com/path?q=1&r=two");
    }

    #[test]
    fn test_newlines_become_spaces() {
        let value = location_header("http://example.com/a\nb\r\nc").unwrap();
        assert_eq!(value, "http://example.com/a b  c");
    }

    #[test]
    fn test_other_control_bytes_percent_encoded() {
        let value = location_header("http://example.com/\u{1}x\u{7f}").unwrap();
        assert_eq!(value, "http://example.com/%01x%7F");
    }

    #[test]
    fn test_non_ascii_passes_through() {
        let value = location_header("https://example.com/caf\u{e9}").unwrap();
        assert_eq!(value.as_bytes(), "https://example.com/caf\u{e9}".as_bytes());
    }
}
