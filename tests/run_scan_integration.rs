//! Integration tests for run_scan.
//!
//! The certificate log is a wiremock server; result files go to a temp dir.

use domain_scanner::{run_scan, Config, LogFormat, LogLevel};
use serde_json::json;
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_test_config(ct_url: String, output_dir: &Path) -> Config {
    Config {
        search: None,
        all: false,
        dns: None,
        log_level: LogLevel::Error,
        log_format: LogFormat::Plain,
        output_dir: output_dir.to_path_buf(),
        timeout_seconds: 5,
        user_agent: "domain_scanner_test/1.0".to_string(),
        ct_url,
    }
}

async fn mount_names(server: &MockServer, q: &str, names: &[&str]) {
    let body = json!(names
        .iter()
        .map(|n| json!({ "name_value": n }))
        .collect::<Vec<_>>());
    Mock::given(method("GET"))
        .and(query_param("q", q))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_search_writes_sorted_domain_list() {
    let server = MockServer::start().await;
    mount_names(
        &server,
        "%.dev",
        &["zeta.dev\nwww.alpha.dev", "alpha.dev", "*.beta.dev\nops@beta.dev", "beta.dev"],
    )
    .await;
    let dir = TempDir::new().expect("temp dir");

    let mut config = create_test_config(server.uri(), dir.path());
    config.search = Some(".dev".to_string());

    let report = run_scan(config).await.expect("run should succeed");

    assert_eq!(report.domains_found, 3);
    assert_eq!(report.errors, 0);
    let contents =
        std::fs::read_to_string(dir.path().join("found_domains.txt")).expect("list written");
    assert_eq!(contents, "alpha.dev\nbeta.dev\nzeta.dev");
    // Without --all no follow-up reports are produced
    assert!(!dir.path().join("dns_results.txt").exists());
    assert!(!dir.path().join("all_subdomains.txt").exists());
}

#[tokio::test]
async fn test_search_overwrites_previous_list() {
    let server = MockServer::start().await;
    mount_names(&server, "%.dev", &["new.dev"]).await;
    let dir = TempDir::new().expect("temp dir");
    std::fs::write(dir.path().join("found_domains.txt"), "old.dev\nolder.dev\n")
        .expect("seed file");

    let mut config = create_test_config(server.uri(), dir.path());
    config.search = Some(".dev".to_string());
    run_scan(config).await.expect("run should succeed");

    let contents =
        std::fs::read_to_string(dir.path().join("found_domains.txt")).expect("list written");
    assert_eq!(contents, "new.dev");
}

#[tokio::test]
async fn test_invalid_extension_is_not_fatal() {
    let server = MockServer::start().await;
    let dir = TempDir::new().expect("temp dir");

    let mut config = create_test_config(server.uri(), dir.path());
    config.search = Some("dev".to_string());
    config.all = true;

    let report = run_scan(config).await.expect("run should still succeed");
    assert_eq!(report.domains_found, 0);
    assert_eq!(report.errors, 1);
    assert!(!dir.path().join("found_domains.txt").exists());
}

#[tokio::test]
async fn test_no_matches_writes_nothing() {
    let server = MockServer::start().await;
    mount_names(&server, "%.dev", &["example.com"]).await;
    let dir = TempDir::new().expect("temp dir");

    let mut config = create_test_config(server.uri(), dir.path());
    config.search = Some(".dev".to_string());
    config.all = true;

    let report = run_scan(config).await.expect("run should succeed");
    assert_eq!(report.domains_found, 0);
    assert_eq!(report.errors, 0);
    assert!(!dir.path().join("found_domains.txt").exists());
    assert!(!dir.path().join("dns_results.txt").exists());
}

#[tokio::test]
async fn test_server_error_is_counted_not_fatal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;
    let dir = TempDir::new().expect("temp dir");

    let mut config = create_test_config(server.uri(), dir.path());
    config.search = Some(".dev".to_string());

    let report = run_scan(config).await.expect("run should succeed");
    assert_eq!(report.domains_found, 0);
    assert_eq!(report.errors, 1);
}

#[tokio::test]
async fn test_output_dir_is_created() {
    let server = MockServer::start().await;
    mount_names(&server, "%.dev", &["a.dev"]).await;
    let dir = TempDir::new().expect("temp dir");
    let nested = dir.path().join("out/run1");

    let mut config = create_test_config(server.uri(), &nested);
    config.search = Some(".dev".to_string());
    run_scan(config).await.expect("run should succeed");

    assert!(nested.join("found_domains.txt").exists());
}

/// Full `--all` flow. DNS lookups go to the system resolver.
#[tokio::test]
#[ignore] // Requires DNS access, run manually with: cargo test -- --ignored
async fn test_all_writes_dns_and_subdomain_reports() {
    let server = MockServer::start().await;
    mount_names(&server, "%.com", &["example.com"]).await;
    mount_names(
        &server,
        "%.example.com",
        &["example.com\nwww.example.com", "api.example.com", "*.example.com"],
    )
    .await;
    let dir = TempDir::new().expect("temp dir");

    let mut config = create_test_config(server.uri(), dir.path());
    config.search = Some(".com".to_string());
    config.all = true;

    let report = run_scan(config).await.expect("run should succeed");
    assert_eq!(report.domains_found, 1);
    assert_eq!(report.dns_checked, 1);
    assert_eq!(report.subdomain_groups, 1);

    let dns = std::fs::read_to_string(dir.path().join("dns_results.txt")).expect("dns report");
    assert!(dns.starts_with("🔹 example.com\nSPF: "));
    for label in ["MX: ", "AAAA: ", "CNAME: ", "NS: "] {
        assert!(dns.contains(label), "missing {label}");
    }

    let subs =
        std::fs::read_to_string(dir.path().join("all_subdomains.txt")).expect("subdomain report");
    assert_eq!(
        subs,
        format!("🔹 example.com\napi.example.com\nexample.com\n{}\n", "=".repeat(40))
    );
}
