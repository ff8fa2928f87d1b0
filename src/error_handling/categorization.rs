//! Error categorization.
//!
//! Maps `reqwest` failures onto the `ErrorType` categories counted in the run
//! statistics.

use super::stats::ProcessingStats;
use super::types::{ErrorType, ScanError};

/// Categorizes a `reqwest::Error` into an `ErrorType`.
///
/// HTTP status codes are checked first, then the reqwest error kind.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    if let Some(status) = error.status() {
        match status.as_u16() {
            429 => return ErrorType::HttpRequestTooManyRequests,
            502..=504 => return ErrorType::HttpRequestServiceUnavailable,
            _ if status.is_client_error() || status.is_server_error() => {
                return ErrorType::HttpRequestStatusError;
            }
            _ => {}
        }
    }

    if error.is_builder() {
        ErrorType::HttpRequestBuilderError
    } else if error.is_timeout() {
        ErrorType::HttpRequestTimeoutError
    } else if error.is_connect() {
        ErrorType::HttpRequestConnectError
    } else if error.is_status() {
        ErrorType::HttpRequestStatusError
    } else if error.is_body() {
        ErrorType::HttpRequestBodyError
    } else if error.is_decode() {
        ErrorType::HttpRequestDecodeError
    } else {
        ErrorType::HttpRequestOtherError
    }
}

/// Records a failed step: logs it and increments its counter.
pub fn record_scan_error(stats: &ProcessingStats, context: &str, error: &ScanError) {
    log::error!("❌ {context}: {error}");
    stats.increment_error(error.error_type());
}
