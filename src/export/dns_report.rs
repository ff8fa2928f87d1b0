//! DNS report export.
//!
//! Layout per domain:
//!
//! ```text
//! 🔹 example.com
//! SPF: v=spf1 -all
//! MX: None
//! ...
//!
//! --------------------------------------------------
//!
//! ```

use std::path::{Path, PathBuf};

use super::write_report;
use crate::config::{DNS_RESULTS_FILE, DNS_SEPARATOR_WIDTH, DOMAIN_HEADING_MARKER};
use crate::dns::DnsRecordSet;
use crate::error_handling::ScanError;

/// Renders the DNS report for the given record sets.
pub fn render_dns_report(record_sets: &[DnsRecordSet]) -> String {
    let separator = format!("\n{}\n", "-".repeat(DNS_SEPARATOR_WIDTH));
    let mut lines = Vec::new();
    for set in record_sets {
        lines.push(format!("{DOMAIN_HEADING_MARKER} {}", set.domain));
        lines.extend(set.summary_lines());
        lines.push(separator.clone());
    }
    lines.join("\n")
}

/// Writes `dns_results.txt` into `dir`.
pub fn write_dns_report(dir: &Path, record_sets: &[DnsRecordSet]) -> Result<PathBuf, ScanError> {
    write_report(dir, DNS_RESULTS_FILE, &render_dns_report(record_sets))
}
