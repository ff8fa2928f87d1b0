//! Certificate log queries.
//!
//! crt.sh treats `%` in the `q` parameter as a wildcard. The HTTP client
//! percent-encodes the value, so the wildcard is passed here unescaped.

use log::debug;
use reqwest::Client;

use super::models::CtEntry;
use crate::error_handling::ScanError;

/// Query matching every certificate name that ends in `extension`.
pub fn extension_query(extension: &str) -> String {
    format!("%{extension}")
}

/// Query matching every certificate name below `domain`.
pub fn subdomain_query(domain: &str) -> String {
    format!("%.{domain}")
}

/// Runs one search against the certificate log and returns the raw names.
///
/// # Arguments
///
/// * `client` - The HTTP client
/// * `base_url` - Base URL of the search service (e.g. `https://crt.sh/`)
/// * `query` - The `q` parameter value
///
/// # Returns
///
/// The `name_value` field of every returned entry, unfiltered.
///
/// # Errors
///
/// Returns `ScanError::Http` if the request fails or the status is not 2xx, and
/// `ScanError::MalformedResponse` if the body is not a JSON list of entries.
pub async fn fetch_name_values(
    client: &Client,
    base_url: &str,
    query: &str,
) -> Result<Vec<String>, ScanError> {
    debug!("Querying certificate log at {base_url} for q={query}");
    let response = client
        .get(base_url)
        .query(&[("q", query), ("output", "json")])
        .send()
        .await?
        .error_for_status()?;

    let body = response.text().await?;
    let entries: Vec<CtEntry> = serde_json::from_str(&body)?;
    debug!("Certificate log returned {} entries for q={query}", entries.len());

    Ok(entries.into_iter().map(|entry| entry.name_value).collect())
}
