//! Output module for headline reports
//!
//! This module handles:
//! - Formatting and writing the numbered text report
//! - Choosing the default timestamped report filename
//! - The console preview shown to the operator

mod console;
mod report;

pub use console::{format_preview, print_preview, PREVIEW_LIMIT};
pub use report::{default_report_path, format_report, write_report, Report};

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;
