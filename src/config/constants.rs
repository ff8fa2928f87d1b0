//! Configuration constants.
//!
//! This module defines the defaults used throughout the application, including
//! the search service location, timeouts, and output file layout.

/// Default base URL of the certificate-transparency search service.
pub const DEFAULT_CT_URL: &str = "https://crt.sh/";

/// Default User-Agent string for requests to the search service.
///
/// crt.sh rejects some clients without a browser-like User-Agent, so a short
/// browser token is sent by default. Users can override this via `--user-agent`.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Default HTTP timeout in seconds.
///
/// crt.sh answers wide queries (e.g. `%.com`) slowly, so this is well above the
/// usual request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

// Network operation timeouts
/// DNS query timeout in seconds
pub const DNS_TIMEOUT_SECS: u64 = 5;
/// DNS attempts per query (initial attempt included)
pub const DNS_ATTEMPTS: usize = 2;

// Output files
/// Sorted list of domains found by an extension search
pub const FOUND_DOMAINS_FILE: &str = "found_domains.txt";
/// Per-domain DNS record report
pub const DNS_RESULTS_FILE: &str = "dns_results.txt";
/// Subdomains grouped by parent domain
pub const SUBDOMAINS_FILE: &str = "all_subdomains.txt";

// Report layout
/// Marker printed in front of each domain heading in the report files
pub const DOMAIN_HEADING_MARKER: &str = "🔹";
/// Width of the dashed separator between domains in the DNS report
pub const DNS_SEPARATOR_WIDTH: usize = 50;
/// Width of the `=` separator between groups in the subdomain report
pub const SUBDOMAIN_SEPARATOR_WIDTH: usize = 40;
