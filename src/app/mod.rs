//! Run steps shared by the library entry point.
//!
//! Each step catches its own failures, logs them and records them in the run
//! statistics, so one failing search or lookup never stops the others.

pub mod statistics;
pub mod steps;

// Re-export public API
pub use statistics::print_error_statistics;
pub(crate) use steps::{check_group, check_single_domain, extract_subdomains, search_and_save};
