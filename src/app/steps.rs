//! The search, DNS and subdomain steps of a run.

use std::collections::BTreeSet;
use std::path::Path;

use log::{info, warn};
use reqwest::Client;

use crate::ct::{fetch_subdomains, search_domains};
use crate::dns::{collect_records, DnsRecordSet, RecordSource};
use crate::error_handling::{record_scan_error, ErrorType, ProcessingStats};
use crate::export::{write_dns_report, write_domain_list, write_subdomain_report, SubdomainGroup};

fn count_dns_failures(stats: &ProcessingStats, set: &DnsRecordSet) {
    for _ in &set.failed {
        stats.increment_error(ErrorType::DnsLookupError);
    }
}

/// Looks up one domain and prints its records to stdout.
pub(crate) async fn check_single_domain<S: RecordSource>(
    resolver: &S,
    domain: &str,
    stats: &ProcessingStats,
) -> DnsRecordSet {
    println!("\n🔍 Checking DNS records for {domain}...\n");
    let set = collect_records(resolver, domain).await;
    for line in set.summary_lines() {
        println!("{line}");
    }
    count_dns_failures(stats, &set);
    set
}

/// Searches the certificate log for `extension` and writes the domain list.
///
/// Returns the domains found; an empty set when the search failed or matched
/// nothing. The list file is only written when there is something to write.
pub(crate) async fn search_and_save(
    client: &Client,
    ct_url: &str,
    extension: &str,
    output_dir: &Path,
    stats: &ProcessingStats,
) -> BTreeSet<String> {
    let domains = match search_domains(client, ct_url, extension).await {
        Ok(domains) => domains,
        Err(e) => {
            record_scan_error(stats, "Domain search failed", &e);
            return BTreeSet::new();
        }
    };

    if domains.is_empty() {
        warn!("❌ No domains found for the extension: {extension}");
        return domains;
    }

    match write_domain_list(output_dir, &domains) {
        Ok(path) => info!(
            "✅ Found {} domains and saved them in {}",
            domains.len(),
            path.display()
        ),
        Err(e) => record_scan_error(stats, "Could not save domain list", &e),
    }
    domains
}

/// Looks up every domain in turn and writes the DNS report.
pub(crate) async fn check_group<S: RecordSource>(
    resolver: &S,
    domains: &BTreeSet<String>,
    output_dir: &Path,
    stats: &ProcessingStats,
) -> Vec<DnsRecordSet> {
    let mut record_sets = Vec::with_capacity(domains.len());
    for domain in domains {
        info!("🔍 Searching for DNS records of the domain: {domain}");
        let set = collect_records(resolver, domain).await;
        count_dns_failures(stats, &set);
        record_sets.push(set);
    }

    match write_dns_report(output_dir, &record_sets) {
        Ok(path) => info!("✅ All results saved in {}", path.display()),
        Err(e) => record_scan_error(stats, "Could not save DNS report", &e),
    }
    record_sets
}

/// Enumerates subdomains of every domain in turn and writes the grouped report.
///
/// A failed query is logged and that domain is left out of the report.
pub(crate) async fn extract_subdomains(
    client: &Client,
    ct_url: &str,
    domains: &BTreeSet<String>,
    output_dir: &Path,
    stats: &ProcessingStats,
) -> Vec<SubdomainGroup> {
    let mut groups = Vec::with_capacity(domains.len());
    for domain in domains {
        let subdomains = match fetch_subdomains(client, ct_url, domain).await {
            Ok(subdomains) => subdomains,
            Err(e) => {
                record_scan_error(stats, &format!("Error fetching subdomains for {domain}"), &e);
                BTreeSet::new()
            }
        };

        if subdomains.is_empty() {
            warn!("❌ No subdomains found for {domain}.");
        } else {
            info!("✅ Found {} subdomains for {domain}.", subdomains.len());
        }
        groups.push(SubdomainGroup {
            domain: domain.clone(),
            subdomains,
        });
    }

    match write_subdomain_report(output_dir, &groups) {
        Ok(path) => info!("✅ All subdomains saved in {}", path.display()),
        Err(e) => record_scan_error(stats, "Could not save subdomain report", &e),
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dns::test_helpers::FakeSource;
    use crate::dns::{LookupFailure, RecordKind};
    use tempfile::TempDir;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn domains(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_check_single_domain_counts_failed_kinds() {
        let source = FakeSource::default()
            .with(RecordKind::Mx, Err(LookupFailure::Other("timed out".into())))
            .with(RecordKind::Ns, Err(LookupFailure::Other("refused".into())))
            .with(RecordKind::Aaaa, Err(LookupFailure::NoRecords));
        let stats = ProcessingStats::new();

        let set = check_single_domain(&source, "example.com", &stats).await;

        assert_eq!(set.failed, vec![RecordKind::Mx, RecordKind::Ns]);
        assert_eq!(stats.get_error_count(ErrorType::DnsLookupError), 2);
    }

    #[tokio::test]
    async fn test_check_group_writes_dns_report() {
        let source = FakeSource::default()
            .with(RecordKind::Spf, Ok(vec!["v=spf1 -all".to_string()]))
            .with(RecordKind::Mx, Ok(vec!["10 mx.example.com.".to_string()]));
        let dir = TempDir::new().expect("temp dir");
        let stats = ProcessingStats::new();

        let sets = check_group(&source, &domains(&["b.io", "a.io"]), dir.path(), &stats).await;

        assert_eq!(sets.len(), 2);
        assert_eq!(stats.total_errors(), 0);
        let report =
            std::fs::read_to_string(dir.path().join("dns_results.txt")).expect("report written");
        let dashes = "-".repeat(50);
        let block = |d: &str| {
            format!(
                "🔹 {d}\nSPF: v=spf1 -all\nMX: 10 mx.example.com.\nAAAA: None\nCNAME: None\nNS: None\n\n{dashes}\n"
            )
        };
        assert_eq!(report, format!("{}\n{}", block("a.io"), block("b.io")));
    }

    #[tokio::test]
    async fn test_extract_subdomains_skips_failed_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("q", "%.a.io"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "name_value": "a.io\nx.a.io" },
                { "name_value": "*.a.io\nother.io" }
            ])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(query_param("q", "%.b.io"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        let dir = TempDir::new().expect("temp dir");
        let stats = ProcessingStats::new();
        let client = reqwest::Client::new();

        let groups = extract_subdomains(
            &client,
            &server.uri(),
            &domains(&["a.io", "b.io"]),
            dir.path(),
            &stats,
        )
        .await;

        assert_eq!(groups.len(), 2);
        assert!(groups[1].subdomains.is_empty());
        assert_eq!(stats.get_error_count(ErrorType::HttpRequestStatusError), 1);
        assert_eq!(stats.total_errors(), 1);
        let report = std::fs::read_to_string(dir.path().join("all_subdomains.txt"))
            .expect("report written");
        assert_eq!(
            report,
            format!("🔹 a.io\na.io\nx.a.io\n{}\n", "=".repeat(40))
        );
    }
}
