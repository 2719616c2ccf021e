//! Headline Scraper: pulls news headlines out of a single web page
//!
//! This crate fetches one HTML page, extracts headline-like text with a list of
//! CSS selector heuristics plus an anchor-text heuristic, and writes the
//! deduplicated result to a numbered text report.

pub mod config;
pub mod extractor;
pub mod output;

use thiserror::Error;

/// Main error type for headline scraping operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Network error for {url}: {reason}")]
    Network { url: String, reason: String },

    #[error("Failed to retrieve {url}: HTTP status {status}")]
    BadStatus { url: String, status: u16 },

    #[error("No headlines found at {url}; the page structure might have changed")]
    NoHeadlines { url: String },

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),
}

impl ScrapeError {
    /// Process exit code reported by the CLI for this failure
    ///
    /// An empty result is a warning rather than a failure, so it exits cleanly.
    pub fn exit_code(&self) -> u8 {
        match self {
            ScrapeError::NoHeadlines { .. } => 0,
            ScrapeError::Client(_) => 1,
            ScrapeError::Config(_) => 2,
            ScrapeError::Network { .. } => 3,
            ScrapeError::BadStatus { .. } => 4,
            ScrapeError::Output(_) => 5,
        }
    }
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Result type alias for scraping operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use extractor::{Headline, HeadlineCollection, HeadlineSource, ScrapeSummary, Scraper};
