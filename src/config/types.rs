//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_CT_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line interface.
///
/// `--dns` runs before `--search` when both are given. With neither flag the
/// binary prints help and exits.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "domain_scanner",
    about = "🔍 Search certificate-transparency logs for domains, subdomains and DNS records",
    version,
    long_about = None
)]
pub struct Cli {
    /// Search for domains by extension (e.g., .com)
    #[arg(long, value_name = "EXTENSION")]
    pub search: Option<String>,

    /// Run DNS analysis and subdomain search after the domain search
    #[arg(long)]
    pub all: bool,

    /// Check DNS records for a specific domain
    #[arg(long, value_name = "DOMAIN")]
    pub dns: Option<String>,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Directory the result files are written to
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// HTTP timeout in seconds for certificate log queries
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Base URL of the certificate-transparency search service
    #[arg(long, default_value = DEFAULT_CT_URL)]
    pub ct_url: String,
}

impl Cli {
    /// Returns `true` when at least one operation was requested.
    pub fn has_operation(&self) -> bool {
        self.search.is_some() || self.dns.is_some()
    }
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use domain_scanner::Config;
///
/// let config = Config {
///     search: Some(".io".to_string()),
///     all: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Extension to search for (must start with a dot)
    pub search: Option<String>,

    /// Follow a successful search with DNS checks and subdomain enumeration
    pub all: bool,

    /// Single domain to check DNS records for
    pub dns: Option<String>,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Directory the result files are written to
    pub output_dir: PathBuf,

    /// Per-request HTTP timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Base URL of the certificate-transparency search service
    pub ct_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search: None,
            all: false,
            dns: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            output_dir: PathBuf::from("."),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            ct_url: DEFAULT_CT_URL.to_string(),
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            search: cli.search,
            all: cli.all,
            dns: cli.dns,
            log_level: cli.log_level,
            log_format: cli.log_format,
            output_dir: cli.output_dir,
            timeout_seconds: cli.timeout_seconds,
            user_agent: cli.user_agent,
            ct_url: cli.ct_url,
        }
    }
}
