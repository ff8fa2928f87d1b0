//! Domain list export.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use super::write_report;
use crate::config::FOUND_DOMAINS_FILE;
use crate::error_handling::ScanError;

/// Renders the sorted domains, one per line, without a trailing newline.
pub fn render_domain_list(domains: &BTreeSet<String>) -> String {
    domains
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Writes `found_domains.txt` into `dir`.
pub fn write_domain_list(dir: &Path, domains: &BTreeSet<String>) -> Result<PathBuf, ScanError> {
    write_report(dir, FOUND_DOMAINS_FILE, &render_domain_list(domains))
}
