//! Flat-file reports.
//!
//! Each report is rendered to a string and written in one go, replacing any
//! file left by a previous run:
//! - `found_domains.txt` - sorted domain list
//! - `dns_results.txt` - DNS records per domain
//! - `all_subdomains.txt` - subdomains grouped by parent domain

mod dns_report;
mod domains;
mod subdomains;

use std::path::{Path, PathBuf};

use crate::error_handling::ScanError;

// Re-export public API
pub use dns_report::{render_dns_report, write_dns_report};
pub use domains::{render_domain_list, write_domain_list};
pub use subdomains::{render_subdomain_report, write_subdomain_report, SubdomainGroup};

/// Writes `contents` to `dir/file_name`, replacing any existing file.
fn write_report(dir: &Path, file_name: &str, contents: &str) -> Result<PathBuf, ScanError> {
    let path = dir.join(file_name);
    std::fs::write(&path, contents).map_err(|source| ScanError::Write {
        path: path.clone(),
        source,
    })?;
    log::debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(path)
}
