//! Handler for link shortening endpoint.

use axum::{
    Form,
    extract::{
        Query, State,
        rejection::{FormRejection, QueryRejection},
    },
};
use tracing::debug;

use crate::api::dto::shorten::ShortenForm;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for the submitted long URL.
///
/// # Endpoint
///
/// `POST /` with parameter `url`, taken from a urlencoded form body or,
/// failing that, from the query string. A missing body, a body of another
/// content type, or an absent parameter all count as an empty `url`.
///
/// # Response
///
/// `200 OK` with the fully-qualified short URL as plain text:
///
/// ```text
/// http://localhost:8080/Xk3b_9aQ
/// ```
///
/// # Errors
///
/// - `400 Bad Request` with body `URL cannot be empty`
/// - `500 Internal Server Error` with body `Failed to create short URL`
pub async fn shorten_handler(
    State(state): State<AppState>,
    query: Result<Query<ShortenForm>, QueryRejection>,
    form: Result<Form<ShortenForm>, FormRejection>,
) -> Result<String, AppError> {
    let query = query
        .inspect_err(|e| debug!("ignoring query string: {}", e))
        .ok()
        .map(|Query(q)| q);
    let body = form
        .inspect_err(|e| debug!("ignoring request body: {}", e))
        .ok()
        .map(|Form(f)| f);

    let long_url = ShortenForm::merge(body, query);

    let shortened = state.url_service.shorten(&long_url).await?;

    Ok(shortened.short_url)
}
