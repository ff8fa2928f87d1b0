//! DNS resolver initialization.

use std::time::Duration;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::system_conf::read_system_conf;
use hickory_resolver::TokioAsyncResolver;

use crate::config::{DNS_ATTEMPTS, DNS_TIMEOUT_SECS};

/// Initializes the DNS resolver for record lookups.
///
/// Uses the system resolver configuration (`/etc/resolv.conf` or the platform
/// equivalent). If it cannot be read, falls back to the resolver's default
/// upstreams.
///
/// Timeouts and attempts are capped so an unresponsive nameserver does not
/// stall the report for long.
pub fn init_resolver() -> TokioAsyncResolver {
    let (config, mut opts) = match read_system_conf() {
        Ok(conf) => conf,
        Err(e) => {
            log::warn!("Could not read system DNS configuration, using defaults: {e}");
            (ResolverConfig::default(), ResolverOpts::default())
        }
    };

    opts.timeout = Duration::from_secs(DNS_TIMEOUT_SECS);
    opts.attempts = DNS_ATTEMPTS;
    // Names are queried as given, never with search domains appended
    opts.ndots = 0;

    TokioAsyncResolver::tokio(config, opts)
}
