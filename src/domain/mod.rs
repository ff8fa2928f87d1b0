//! Certificate name cleanup and filtering.
//!
//! Certificate log entries carry one or more names per record, separated by
//! newlines. This module normalizes those names and keeps the ones that belong
//! to a searched extension or parent domain.
//!
//! Key functions:
//! - `filter_extension_matches()` - Domains ending in an extension (e.g. `.io`)
//! - `filter_subdomains()` - Names at or below a parent domain

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::error_handling::ScanError;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("email pattern is valid")
});

/// Normalizes a raw certificate name.
///
/// Trims whitespace, lowercases, and strips one leading `www.` label.
pub fn clean_name(raw: &str) -> String {
    let name = raw.trim().to_lowercase();
    match name.strip_prefix("www.") {
        Some(rest) => rest.to_string(),
        None => name,
    }
}

/// Returns `true` if the name contains an email address.
///
/// Certificates issued for S/MIME list mailbox addresses in the same field as
/// host names.
pub fn is_email_like(name: &str) -> bool {
    EMAIL_PATTERN.is_match(name)
}

/// Returns `true` if the name is a wildcard entry (`*.example.com`).
pub fn is_wildcard(name: &str) -> bool {
    name.starts_with("*.")
}

/// Checks that an extension is usable as a search suffix.
///
/// # Errors
///
/// Returns `ScanError::InvalidExtension` unless the extension starts with a dot
/// and has at least one character after it.
pub fn validate_extension(extension: &str) -> Result<(), ScanError> {
    if extension.len() > 1 && extension.starts_with('.') {
        Ok(())
    } else {
        Err(ScanError::InvalidExtension(extension.to_string()))
    }
}

/// Splits raw `name_value` fields into cleaned, host-like names.
///
/// Email-like, wildcard and empty names are dropped.
fn candidate_names<'a, I>(raw_values: I) -> impl Iterator<Item = String> + 'a
where
    I: IntoIterator<Item = &'a str>,
    I::IntoIter: 'a,
{
    raw_values
        .into_iter()
        .flat_map(str::lines)
        .map(clean_name)
        .filter(|name| !name.is_empty() && !is_email_like(name) && !is_wildcard(name))
}

/// Collects the unique names ending in `extension`.
///
/// The extension is matched case-insensitively; the result is sorted.
pub fn filter_extension_matches<'a, I>(raw_values: I, extension: &str) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a str>,
    I::IntoIter: 'a,
{
    let extension = extension.to_lowercase();
    candidate_names(raw_values)
        .filter(|name| name.ends_with(&extension))
        .collect()
}

/// Collects the unique names equal to `parent` or below it.
///
/// A name only counts as a subdomain when the parent is preceded by a dot, so
/// `notexample.com` is not a subdomain of `example.com`.
pub fn filter_subdomains<'a, I>(raw_values: I, parent: &str) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a str>,
    I::IntoIter: 'a,
{
    let parent = parent.trim().to_lowercase();
    let suffix = format!(".{parent}");
    candidate_names(raw_values)
        .filter(|name| *name == parent || name.ends_with(&suffix))
        .collect()
}
