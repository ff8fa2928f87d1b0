//! Error type definitions.
//!
//! This module defines the error types used throughout the application and the
//! `ErrorType` categories that failures are counted under.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use super::categorization::categorize_reqwest_error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// Error creating the output directory.
    #[error("Output directory error for {path}: {source}")]
    OutputDirError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised by a single search, lookup or export step.
///
/// None of these abort a run: the caller logs them and moves on.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The extension does not start with a dot.
    #[error("Invalid extension '{0}': it must start with a dot (e.g., .com or .net)")]
    InvalidExtension(String),

    /// The request to the search service failed or returned a non-success status.
    #[error("Error fetching data: {0}")]
    Http(#[from] ReqwestError),

    /// The search service answered with something other than a JSON entry list.
    #[error("Malformed response from certificate log: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// A result file could not be written.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// Returns the statistics category for this error.
    pub fn error_type(&self) -> ErrorType {
        match self {
            ScanError::InvalidExtension(_) => ErrorType::InvalidExtension,
            ScanError::Http(e) => categorize_reqwest_error(e),
            ScanError::MalformedResponse(_) => ErrorType::MalformedResponseError,
            ScanError::Write { .. } => ErrorType::FileWriteError,
        }
    }
}

/// Categories of failure counted during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // Input errors
    InvalidExtension,
    // HTTP/Network errors
    HttpRequestBuilderError,
    HttpRequestTimeoutError,
    HttpRequestConnectError,
    HttpRequestStatusError,
    HttpRequestTooManyRequests,
    HttpRequestServiceUnavailable, // 502/503/504, crt.sh under load
    HttpRequestBodyError,
    HttpRequestDecodeError,
    HttpRequestOtherError,
    // Response errors
    MalformedResponseError,
    // DNS errors
    DnsLookupError,
    // Output errors
    FileWriteError,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::InvalidExtension => "Invalid extension",
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestStatusError => "HTTP request status error",
            ErrorType::HttpRequestTooManyRequests => "Too many requests",
            ErrorType::HttpRequestServiceUnavailable => "Service unavailable",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestDecodeError => "HTTP request decode error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::MalformedResponseError => "Malformed certificate log response",
            ErrorType::DnsLookupError => "DNS lookup error",
            ErrorType::FileWriteError => "File write error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_error_type_as_str() {
        assert_eq!(
            ErrorType::HttpRequestTimeoutError.as_str(),
            "HTTP request timeout error"
        );
        assert_eq!(ErrorType::DnsLookupError.as_str(), "DNS lookup error");
        assert_eq!(ErrorType::InvalidExtension.to_string(), "Invalid extension");
    }

    #[test]
    fn test_all_error_types_have_string_representation() {
        for error_type in ErrorType::iter() {
            assert!(
                !error_type.as_str().is_empty(),
                "{:?} should have non-empty string",
                error_type
            );
        }
    }

    #[test]
    fn test_scan_error_categories() {
        assert_eq!(
            ScanError::InvalidExtension("com".into()).error_type(),
            ErrorType::InvalidExtension
        );

        let json_err = serde_json::from_str::<Vec<u8>>("<html>").unwrap_err();
        assert_eq!(
            ScanError::from(json_err).error_type(),
            ErrorType::MalformedResponseError
        );

        let write_err = ScanError::Write {
            path: PathBuf::from("found_domains.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(write_err.error_type(), ErrorType::FileWriteError);
    }

    #[test]
    fn test_invalid_extension_message() {
        let msg = ScanError::InvalidExtension("com".into()).to_string();
        assert!(msg.contains("'com'"));
        assert!(msg.contains("must start with a dot"));
    }
}
