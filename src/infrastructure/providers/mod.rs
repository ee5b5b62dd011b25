pub mod kucoin;
pub mod yahoo;

use crate::domain::error::{DomainError, LookupError};
use reqwest::Url;
use std::time::Duration;

/// HTTP client shared by the market-data sources. Redirects are surfaced to
/// the caller instead of followed.
pub(crate) fn build_client(user_agent: &str, timeout: Duration) -> Result<reqwest::Client, DomainError> {
    reqwest::Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .map_err(|e| DomainError::Http(e.to_string()))
}

/// `base_url` with `segments` appended as path segments. Each segment is
/// percent-encoded, so a symbol can never add path levels or a query.
pub(crate) fn endpoint(base_url: &str, segments: &[&str]) -> Result<Url, LookupError> {
    let mut url = Url::parse(base_url)
        .map_err(|e| LookupError::Transient(format!("invalid base URL {base_url}: {e}")))?;
    url.path_segments_mut()
        .map_err(|_| LookupError::Transient(format!("base URL {base_url} cannot take a path")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
