//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions (`InitializationError`, `ScanError`)
//! - Error categorization for `reqwest` failures
//! - Per-run failure counters
//!
//! Initialization errors abort a run. Scan errors are logged, counted and
//! skipped so the remaining steps still run.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, record_scan_error};
pub use stats::ProcessingStats;
pub use types::{ErrorType, InitializationError, ScanError};
