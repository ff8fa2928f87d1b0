//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources of a run:
//! - HTTP client
//! - DNS resolver
//! - Logger
//! - Output directory

mod client;
mod logger;
mod resolver;

use std::path::Path;

use crate::error_handling::InitializationError;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
pub use resolver::init_resolver;

/// Creates the output directory (and parents) if it does not exist.
///
/// # Errors
///
/// Returns `InitializationError::OutputDirError` if the directory cannot be
/// created.
pub fn init_output_dir(dir: &Path) -> Result<(), InitializationError> {
    std::fs::create_dir_all(dir).map_err(|source| InitializationError::OutputDirError {
        path: dir.to_path_buf(),
        source,
    })
}
