//! Subdomain report export.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use super::write_report;
use crate::config::{DOMAIN_HEADING_MARKER, SUBDOMAINS_FILE, SUBDOMAIN_SEPARATOR_WIDTH};
use crate::error_handling::ScanError;

/// Subdomains found for one parent domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubdomainGroup {
    pub domain: String,
    pub subdomains: BTreeSet<String>,
}

/// Renders the subdomain report. Groups without subdomains are left out.
pub fn render_subdomain_report(groups: &[SubdomainGroup]) -> String {
    let separator = "=".repeat(SUBDOMAIN_SEPARATOR_WIDTH);
    let mut out = String::new();
    for group in groups.iter().filter(|g| !g.subdomains.is_empty()) {
        out.push_str(&format!("{DOMAIN_HEADING_MARKER} {}\n", group.domain));
        out.push_str(
            &group
                .subdomains
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join("\n"),
        );
        out.push_str(&format!("\n{separator}\n"));
    }
    out
}

/// Writes `all_subdomains.txt` into `dir`.
pub fn write_subdomain_report(
    dir: &Path,
    groups: &[SubdomainGroup],
) -> Result<PathBuf, ScanError> {
    write_report(dir, SUBDOMAINS_FILE, &render_subdomain_report(groups))
}
