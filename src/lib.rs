//! domain_scanner library: certificate-transparency domain discovery
//!
//! This library searches the crt.sh certificate-transparency log for domains
//! ending in an extension, enumerates subdomains of those domains, and reports
//! their SPF (TXT), MX, AAAA, CNAME and NS records. Results are written to flat
//! text files.
//!
//! # Example
//!
//! ```no_run
//! use domain_scanner::{run_scan, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     search: Some(".io".to_string()),
//!     all: true,
//!     ..Default::default()
//! };
//!
//! let report = run_scan(config).await?;
//! println!("Found {} domains", report.domains_found);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Every request is awaited in turn;
//! nothing runs concurrently.

mod app;
pub mod config;
pub mod ct;
pub mod dns;
pub mod domain;
mod error_handling;
pub mod export;
pub mod initialization;

// Re-export public API
pub use config::{Cli, Config, LogFormat, LogLevel};
pub use error_handling::{
    categorize_reqwest_error, ErrorType, InitializationError, ProcessingStats, ScanError,
};
pub use run::{run_scan, RunReport};

// Internal run module (contains the orchestration of the three flows)
mod run {
    use std::path::PathBuf;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use log::info;

    use crate::app::{
        check_group, check_single_domain, extract_subdomains, print_error_statistics,
        search_and_save,
    };
    use crate::config::Config;
    use crate::error_handling::ProcessingStats;
    use crate::initialization::{init_client, init_output_dir, init_resolver};

    /// Results of a run.
    #[derive(Debug, Clone)]
    pub struct RunReport {
        /// Domains found by the extension search
        pub domains_found: usize,
        /// Domains whose DNS records were checked
        pub dns_checked: usize,
        /// Domains for which at least one subdomain was found
        pub subdomain_groups: usize,
        /// Failed steps (searches, lookups, file writes)
        pub errors: usize,
        /// Directory the result files were written to
        pub output_dir: PathBuf,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
        /// Whether an extension search ran (and result files were written)
        pub searched: bool,
    }

    fn plural(count: usize) -> &'static str {
        if count == 1 {
            ""
        } else {
            "s"
        }
    }

    impl RunReport {
        /// One-line summary printed by the binary at the end of every run.
        pub fn summary_line(&self) -> String {
            let mut line = format!(
                "✅ {} domain{}, {} DNS check{}, {} subdomain group{} ({} error{}) in {:.1}s",
                self.domains_found,
                plural(self.domains_found),
                self.dns_checked,
                plural(self.dns_checked),
                self.subdomain_groups,
                plural(self.subdomain_groups),
                self.errors,
                plural(self.errors),
                self.elapsed_seconds,
            );
            if self.searched {
                line.push_str(&format!(" - see {} for results", self.output_dir.display()));
            }
            line
        }
    }

    /// Runs the operations selected in `config`.
    ///
    /// Order: the single-domain DNS check (`dns`), then the extension search
    /// (`search`), then, with `all` set and at least one domain found, the DNS
    /// report and subdomain report for the found domains.
    ///
    /// # Errors
    ///
    /// Only setup failures are returned (HTTP client, output directory).
    /// Failures of individual searches, lookups or writes are logged and
    /// counted in `RunReport::errors`.
    pub async fn run_scan(config: Config) -> Result<RunReport> {
        let start_time = Instant::now();
        let stats = ProcessingStats::new();

        let client = init_client(&config).context("Failed to initialize HTTP client")?;
        let resolver = init_resolver();

        let mut report = RunReport {
            domains_found: 0,
            dns_checked: 0,
            subdomain_groups: 0,
            errors: 0,
            output_dir: config.output_dir.clone(),
            elapsed_seconds: 0.0,
            searched: false,
        };

        if let Some(domain) = config.dns.as_deref() {
            check_single_domain(&resolver, domain, &stats).await;
            report.dns_checked += 1;
        }

        if let Some(extension) = config.search.as_deref() {
            init_output_dir(&config.output_dir).context("Failed to prepare output directory")?;
            report.searched = true;

            let domains = search_and_save(
                &client,
                &config.ct_url,
                extension,
                &config.output_dir,
                &stats,
            )
            .await;
            report.domains_found = domains.len();

            if config.all && !domains.is_empty() {
                let record_sets =
                    check_group(&resolver, &domains, &config.output_dir, &stats).await;
                report.dns_checked += record_sets.len();

                let groups = extract_subdomains(
                    &client,
                    &config.ct_url,
                    &domains,
                    &config.output_dir,
                    &stats,
                )
                .await;
                report.subdomain_groups =
                    groups.iter().filter(|g| !g.subdomains.is_empty()).count();
            }
        }

        print_error_statistics(&stats);
        report.errors = stats.total_errors();
        report.elapsed_seconds = start_time.elapsed().as_secs_f64();
        info!(
            "Run finished in {:.1}s with {} error(s)",
            report.elapsed_seconds, report.errors
        );

        Ok(report)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn report(domains_found: usize, dns_checked: usize, searched: bool) -> RunReport {
            RunReport {
                domains_found,
                dns_checked,
                subdomain_groups: 0,
                errors: 1,
                output_dir: PathBuf::from("out"),
                elapsed_seconds: 2.04,
                searched,
            }
        }

        #[test]
        fn test_summary_line_for_dns_only_run() {
            assert_eq!(
                report(0, 1, false).summary_line(),
                "✅ 0 domains, 1 DNS check, 0 subdomain groups (1 error) in 2.0s"
            );
        }

        #[test]
        fn test_summary_line_for_empty_search_names_output_dir() {
            assert_eq!(
                report(0, 0, true).summary_line(),
                "✅ 0 domains, 0 DNS checks, 0 subdomain groups (1 error) in 2.0s - see out for results"
            );
        }
    }
}
