//! Core layer: pure checks on requests and responses.

use url::Url;

use crate::error::{FetchError, Result};

/// Only `200 OK` counts as a successful download.
pub fn is_success(status: u16) -> bool { status == 200 }

/// Parses `raw` and requires an `http` or `https` scheme.
pub fn validate_url(raw: &str) -> Result<Url> {
    let invalid = |reason: String| FetchError::InvalidUrl {
        url: raw.to_owned(),
        reason,
    };

    if raw.trim().is_empty() {
        return Err(invalid("empty".to_owned()));
    }

    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme {other:?}"))),
    }
}
