//! DTOs for link shortening endpoint.

use serde::Deserialize;

/// `url` parameter of `POST /`, read from the form body or the query string.
///
/// A missing field deserializes to `None`.
#[derive(Debug, Default, Deserialize)]
pub struct ShortenForm {
    #[serde(default)]
    pub url: Option<String>,
}

impl ShortenForm {
    /// Picks the submitted URL: the body field wins over the query string,
    /// and absence on both sides yields an empty string.
    pub fn merge(body: Option<ShortenForm>, query: Option<ShortenForm>) -> String {
        body.and_then(|f| f.url)
            .or_else(|| query.and_then(|q| q.url))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(url: Option<&str>) -> Option<ShortenForm> {
        Some(ShortenForm {
            url: url.map(str::to_string),
        })
    }

    #[test]
    fn test_body_wins_over_query() {
        let url = ShortenForm::merge(form(Some("http://body.com")), form(Some("http://query.com")));
        assert_eq!(url, "http://body.com");
    }

    #[test]
    fn test_query_used_when_body_field_missing() {
        assert_eq!(
            ShortenForm::merge(form(None), form(Some("http://query.com"))),
            "http://query.com"
        );
        assert_eq!(
            ShortenForm::merge(None, form(Some("http://query.com"))),
            "http://query.com"
        );
    }

    #[test]
    fn test_nothing_submitted_is_empty() {
        assert_eq!(ShortenForm::merge(None, None), "");
        assert_eq!(ShortenForm::merge(form(None), form(None)), "");
    }
}
