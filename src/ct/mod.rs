//! Certificate-transparency log search.
//!
//! This module queries the crt.sh JSON endpoint:
//! - Domain discovery by extension (`%.io`)
//! - Subdomain enumeration for a parent domain (`%.example.com`)
//!
//! Each search is a single request; results are not paginated or retried.

mod models;
mod query;

use std::collections::BTreeSet;

use log::info;
use reqwest::Client;

use crate::domain::{filter_extension_matches, filter_subdomains, validate_extension};
use crate::error_handling::ScanError;

// Re-export public API
pub use models::CtEntry;
pub use query::{extension_query, fetch_name_values, subdomain_query};

/// Finds the unique domains ending in `extension`.
///
/// # Errors
///
/// Returns `ScanError::InvalidExtension` without making a request if the
/// extension does not start with a dot; otherwise propagates fetch errors.
pub async fn search_domains(
    client: &Client,
    base_url: &str,
    extension: &str,
) -> Result<BTreeSet<String>, ScanError> {
    validate_extension(extension)?;
    info!("🔍 Searching certificate logs for domains ending in {extension}");

    let names = fetch_name_values(client, base_url, &extension_query(extension)).await?;
    Ok(filter_extension_matches(
        names.iter().map(String::as_str),
        extension,
    ))
}

/// Finds the unique names at or below `domain`.
pub async fn fetch_subdomains(
    client: &Client,
    base_url: &str,
    domain: &str,
) -> Result<BTreeSet<String>, ScanError> {
    let names = fetch_name_values(client, base_url, &subdomain_query(domain)).await?;
    Ok(filter_subdomains(names.iter().map(String::as_str), domain))
}
